//! Ukrainian morpheme segmentation engine and lexicon builder.
//!
//! The crate turns three reference lists (prefixes, roots, suffixes) and a
//! corpus of boundary-marked word forms into a populated in-memory lexicon:
//! every word ends up with ordered prefix/root/suffix assignment lists,
//! disambiguated by gender and part-of-speech agreement and by
//! cross-reference ("див…") indirection between affix senses.
//!
//! # Architecture
//!
//! - [`lexicon`] -- Entry types, reference-line parsers, cross-references
//! - [`corpus`] -- Corpus word-line parsing
//! - [`agreement`] -- Gender/part-of-speech agreement classification
//! - [`segment`] -- The three matching passes over a loaded lexicon
//! - [`analyzer`] -- Grammar analyzer seam and shipped implementations
//! - [`store`] -- In-memory record store
//! - [`pipeline`] -- Straight-line population of the store
//! - [`query`] -- Read-side lookups over a populated store

pub mod agreement;
pub mod analyzer;
pub mod corpus;
pub mod lexicon;
pub mod pipeline;
pub mod query;
pub mod segment;
pub mod store;

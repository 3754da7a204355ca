//! Shared building blocks for Ukrainian morpheme analysis.
//!
//! This crate holds the language-level pieces that every consumer of the
//! lexicon needs but that carry no lexicon state of their own: alphabet
//! tables, the canonical comparison form, semantic-code decoding, grammar
//! code types, and the assignment-list value that segmentation produces.
//!
//! # Architecture
//!
//! - [`alphabet`] -- Ukrainian alphabet tables and Latin look-alike mapping
//! - [`normalize`] -- Canonical comparison form of words and affixes
//! - [`roman`] -- Roman numeral decoding for semantic codes
//! - [`grammar`] -- Gender and part-of-speech code types
//! - [`assignment`] -- Ordered morpheme assignment lists

pub mod alphabet;
pub mod assignment;
pub mod grammar;
pub mod normalize;
pub mod roman;

// Build pipeline: load sources, backfill grammar, run the matching passes

use std::path::Path;

use morfema_core::grammar::{Gender, TAG_ADJECTIVE, TAG_UNKNOWN};

use crate::analyzer::GrammarAnalyzer;
use crate::corpus::{self, CorpusPaths, LexiconError, WordMetadata, read_source};
use crate::lexicon::parser::{
    AffixLineOutcome, ParsedAffix, RootEvent, parse_affix_line, parse_root_source,
};
use crate::segment::{Segmenter, WordContext};
use crate::store::{MemoryStore, PosRegistry};

/// Surface ending that marks a word as an adjective regardless of the
/// analyzer's reading.
const ADJECTIVE_SURFACE_ENDING: &str = "ий";

/// Counters for one load step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records stored.
    pub loaded: usize,
    /// Lines discarded as unparseable.
    pub skipped: usize,
    /// Records with a data-integrity defect, reported and not stored.
    pub flagged: usize,
}

/// Per-source reports for one full build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub words: LoadReport,
    pub prefixes: LoadReport,
    pub suffixes: LoadReport,
    pub roots: LoadReport,
}

/// Load headwords, one split form per line. Blank lines carry nothing
/// and are ignored; lines whose surface collapses to nothing once the
/// split marks are removed are counted as skipped.
///
/// Trailing free text on a line becomes an alternation record on the
/// word: text containing `~` names the alternation process, anything
/// else is kept as a meaning gloss. A part-of-speech tail is stripped
/// without record, the backfill step supplies the tag instead.
pub fn load_words(store: &mut MemoryStore, source: &str) -> LoadReport {
    let mut report = LoadReport::default();
    for line in source.lines() {
        let Some(parsed) = corpus::parse_word_line(line) else {
            continue;
        };
        if parsed.split_form.replace('/', "").is_empty() {
            report.skipped += 1;
            continue;
        }
        let id = store.add_word(parsed.split_form);
        if let WordMetadata::Additional(info) = parsed.metadata {
            if info.contains('~') {
                store.add_alternation(id, info, "");
            } else {
                store.add_alternation(id, "", info);
            }
        }
        report.loaded += 1;
    }
    report
}

/// Fill in the part-of-speech code and gender for every word.
///
/// The analyzer reads the canonical form. A surface form ending in "ий"
/// is tagged as an adjective regardless, since normalization rewrites
/// that ending beyond the analyzer's reach. Words without a reading get
/// the unknown tag, which the classifier maps to its sentinel keyword.
pub fn backfill_grammar(store: &mut MemoryStore, analyzer: &dyn GrammarAnalyzer) {
    for word in store.words.iter_mut() {
        let (pos_code, gender) =
            grammar_reading(&mut store.pos_tags, analyzer, &word.surface, &word.canonical);
        word.pos_code = pos_code;
        word.gender = gender;
    }
}

/// One word's grammar reading as stored fields, outside any store.
///
/// Same reading rules as [`backfill_grammar`]; unknown tags intern into
/// `pos_tags` on first sight.
pub fn grammar_reading(
    pos_tags: &mut PosRegistry,
    analyzer: &dyn GrammarAnalyzer,
    surface: &str,
    canonical: &str,
) -> (u32, Option<Gender>) {
    let info = analyzer.analyze(canonical);
    let tag = if surface.ends_with(ADJECTIVE_SURFACE_ENDING) {
        TAG_ADJECTIVE
    } else {
        info.pos_tag.as_deref().unwrap_or(TAG_UNKNOWN)
    };
    (pos_tags.code_for(tag), info.gender)
}

fn load_affix_source(source: &str, mut add: impl FnMut(ParsedAffix)) -> LoadReport {
    let mut report = LoadReport::default();
    for line in source.lines() {
        match parse_affix_line(line) {
            AffixLineOutcome::Entry(parsed) => {
                add(parsed);
                report.loaded += 1;
            }
            AffixLineOutcome::Blank => {}
            AffixLineOutcome::Malformed => report.skipped += 1,
        }
    }
    report
}

/// Load the prefix reference list.
pub fn load_prefixes(store: &mut MemoryStore, source: &str) -> LoadReport {
    load_affix_source(source, |parsed| {
        store.add_prefix(parsed);
    })
}

/// Load the suffix reference list.
pub fn load_suffixes(store: &mut MemoryStore, source: &str) -> LoadReport {
    load_affix_source(source, |parsed| {
        store.add_suffix(parsed);
    })
}

/// Load the root reference list.
///
/// Secondary lines attach to the most recent primary; the parser has
/// already confined that back-reference to the secondary's own block, so
/// a block opening without a primary flags its strays instead of
/// borrowing one from an earlier block.
pub fn load_roots(store: &mut MemoryStore, source: &str) -> LoadReport {
    let mut report = LoadReport::default();
    let mut current_primary = 0;
    for event in parse_root_source(source) {
        match event {
            RootEvent::Primary { identifier, example } => {
                current_primary = store.add_primary_root(&identifier, &example);
                report.loaded += 1;
            }
            RootEvent::Secondary { identifier, example } => {
                store.add_secondary_root(&identifier, &example, current_primary);
                report.loaded += 1;
            }
            RootEvent::DanglingSecondary { .. } => report.flagged += 1,
            RootEvent::Malformed => report.skipped += 1,
        }
    }
    report
}

/// Prefix pass over every word.
pub fn assign_prefixes(store: &mut MemoryStore) {
    let segmenter = Segmenter::new(
        &store.prefixes,
        &store.suffixes,
        &store.primary_roots,
        &store.secondary_roots,
    );
    for word in store.words.iter_mut() {
        let context = WordContext {
            split_form: &word.split_form,
            pos_code: word.pos_code,
            gender_code: word.gender.map_or(0, Gender::code),
        };
        word.prefixes = segmenter.assign_prefixes(&context);
    }
}

/// Root pass over every word; consults the stored prefix outcome.
pub fn assign_roots(store: &mut MemoryStore) {
    let segmenter = Segmenter::new(
        &store.prefixes,
        &store.suffixes,
        &store.primary_roots,
        &store.secondary_roots,
    );
    for word in store.words.iter_mut() {
        let context = WordContext {
            split_form: &word.split_form,
            pos_code: word.pos_code,
            gender_code: word.gender.map_or(0, Gender::code),
        };
        word.roots = segmenter.assign_roots(&context, &word.prefixes);
    }
}

/// Suffix pass over every word; consults the stored prefix outcome.
pub fn assign_suffixes(store: &mut MemoryStore) {
    let segmenter = Segmenter::new(
        &store.prefixes,
        &store.suffixes,
        &store.primary_roots,
        &store.secondary_roots,
    );
    for word in store.words.iter_mut() {
        let context = WordContext {
            split_form: &word.split_form,
            pos_code: word.pos_code,
            gender_code: word.gender.map_or(0, Gender::code),
        };
        word.suffixes = segmenter.assign_suffixes(&context, &word.prefixes);
    }
}

/// The three passes in their fixed prefix, root, suffix order.
pub fn assign_all(store: &mut MemoryStore) {
    assign_prefixes(store);
    assign_roots(store);
    assign_suffixes(store);
}

/// Build a full lexicon from the four source files.
///
/// Words come first so the matching passes can see grammar codes; the
/// reference lists follow; the passes run last, in their fixed order.
pub fn build_lexicon(
    paths: &CorpusPaths,
    analyzer: &dyn GrammarAnalyzer,
) -> Result<(MemoryStore, BuildReport), LexiconError> {
    let mut store = MemoryStore::new();
    let mut report = BuildReport::default();

    let source = read_source(&paths.words)?;
    report.words = load_words(&mut store, &source);
    backfill_grammar(&mut store, analyzer);

    let source = read_source(&paths.prefixes)?;
    report.prefixes = load_prefixes(&mut store, &source);
    let source = read_source(&paths.suffixes)?;
    report.suffixes = load_suffixes(&mut store, &source);
    let source = read_source(&paths.roots)?;
    report.roots = load_roots(&mut store, &source);

    assign_all(&mut store);
    Ok((store, report))
}

/// [`build_lexicon`] with the standard file names under one directory.
pub fn run(
    data_dir: impl AsRef<Path>,
    analyzer: &dyn GrammarAnalyzer,
) -> Result<(MemoryStore, BuildReport), LexiconError> {
    build_lexicon(&CorpusPaths::in_dir(data_dir), analyzer)
}

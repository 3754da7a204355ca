//! End-to-end build tests: write a small corpus to disk, run the full
//! pipeline over it and inspect the resulting store.
//!
//! Run: cargo test -p morfema-uk --test pipeline

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

use morfema_uk::analyzer::EndingAnalyzer;
use morfema_uk::corpus::CorpusPaths;
use morfema_uk::pipeline::{build_lexicon, run};
use morfema_uk::query::{self, ComponentKind};
use morfema_uk::store::MemoryStore;

// ---------------------------------------------------------------------------
// Fixture: corpus directory on disk
// ---------------------------------------------------------------------------

static NEXT_CORPUS: AtomicUsize = AtomicUsize::new(0);

/// Temporary corpus directory, removed on drop.
struct TempCorpus {
    dir: PathBuf,
    paths: CorpusPaths,
}

impl TempCorpus {
    fn write(words: &str, prefixes: &str, suffixes: &str, roots: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "morfema-pipeline-{}-{}",
            std::process::id(),
            NEXT_CORPUS.fetch_add(1, Ordering::SeqCst)
        ));
        fs::create_dir_all(&dir)
            .unwrap_or_else(|e| panic!("failed to create {}: {}", dir.display(), e));
        let paths = CorpusPaths::in_dir(&dir);
        fs::write(&paths.words, words).unwrap();
        fs::write(&paths.prefixes, prefixes).unwrap();
        fs::write(&paths.suffixes, suffixes).unwrap();
        fs::write(&paths.roots, roots).unwrap();
        Self { dir, paths }
    }
}

impl Drop for TempCorpus {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

fn assignments(store: &MemoryStore, probe: &str) -> (String, String, String) {
    let word = store
        .find_word(probe)
        .unwrap_or_else(|| panic!("word {probe} not loaded"));
    (
        word.prefixes.to_string(),
        word.roots.to_string(),
        word.suffixes.to_string(),
    )
}

fn standard_corpus() -> TempCorpus {
    TempCorpus::write(
        "пре/каз/ник\nбез/печ/н/ий\nказ/ка\nкаж/у\n",
        "без I — відсутність ознаки\nпре II — найвищий ступінь ознаки, чоловічий рід\n",
        "/ник I — утворює іменники, особа\n/н/ II — утворює прикметники\n/ість — див. /н/ II\n",
        "!каз — казка\nкаж — кажу\n\n!печ — піч\n",
    )
}

// ---------------------------------------------------------------------------
// Full builds
// ---------------------------------------------------------------------------

#[test]
fn full_build_assigns_every_list() {
    let corpus = standard_corpus();
    let (store, report) = run(&corpus.dir, &EndingAnalyzer::new()).unwrap();

    assert_eq!(report.words.loaded, 4);
    assert_eq!(report.prefixes.loaded, 2);
    assert_eq!(report.suffixes.loaded, 3);
    assert_eq!(report.roots.loaded, 3);
    assert_eq!(report.roots.flagged, 0);

    // Masculine noun with a gender-agreeing prefix sense.
    assert_eq!(
        assignments(&store, "преказник"),
        ("2".to_string(), "1".to_string(), "1".to_string())
    );
    // Adjective: the "ий" surface override makes the adjective-forming
    // suffix the agreeing sense.
    assert_eq!(
        assignments(&store, "безпечний"),
        ("1".to_string(), "2".to_string(), "2".to_string())
    );
    // No prefix, no suffix: sentinels stay.
    assert_eq!(
        assignments(&store, "казка"),
        ("0".to_string(), "1".to_string(), "0".to_string())
    );
    // Secondary root stored as a composite id.
    assert_eq!(assignments(&store, "кажу").1, "1_1");
}

#[test]
fn dangling_secondary_roots_are_flagged_not_stored() {
    let corpus = TempCorpus::write(
        "вод/а\n",
        "",
        "",
        "вод — вода\n\n!каз — казка\n",
    );
    let (store, report) = build_lexicon(&corpus.paths, &EndingAnalyzer::new()).unwrap();
    assert_eq!(report.roots.loaded, 1);
    assert_eq!(report.roots.flagged, 1);
    assert!(store.secondary_roots().is_empty());
}

#[test]
fn missing_source_file_is_a_named_error() {
    let paths = CorpusPaths::in_dir("/nonexistent/morfema-corpus");
    let err = build_lexicon(&paths, &EndingAnalyzer::new()).unwrap_err();
    assert!(err.to_string().contains("words.txt"));
}

// ---------------------------------------------------------------------------
// Queries over a built store
// ---------------------------------------------------------------------------

#[test]
fn queries_read_the_built_store() {
    let corpus = standard_corpus();
    let (store, _) = build_lexicon(&corpus.paths, &EndingAnalyzer::new()).unwrap();

    let view = query::find_word(&store, "безпечний").unwrap();
    assert_eq!(view.pos_tag.as_deref(), Some("ADJF"));
    assert_eq!(view.prefixes[0].identifier, "без");
    assert_eq!(view.roots[0].explanation, "піч");
    assert_eq!(view.suffixes[0].identifier, "/н/");

    // The root query reaches the composite member by its primary id.
    let by_root = query::words_by_component(&store, ComponentKind::Root, 1);
    let surfaces: Vec<&str> = by_root.iter().map(|w| w.surface.as_str()).collect();
    assert_eq!(surfaces, ["кажу", "казка", "преказник"]);
}

#[test]
fn inventory_keeps_reference_text_literal() {
    let corpus = standard_corpus();
    let (store, _) = build_lexicon(&corpus.paths, &EndingAnalyzer::new()).unwrap();
    let inventory = query::component_inventory(&store, ComponentKind::Suffix);
    assert_eq!(inventory.len(), 3);
    // The stored explanation keeps the reference text; only word views
    // resolve it.
    assert_eq!(inventory[2].explanations, ["див. /н/ II"]);
}

#[test]
fn word_views_serialize_for_transport() {
    let corpus = standard_corpus();
    let (store, _) = build_lexicon(&corpus.paths, &EndingAnalyzer::new()).unwrap();
    let view = query::find_word(&store, "преказник").unwrap();
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["surface"], Value::from("преказник"));
    assert_eq!(value["prefixes"][0]["identifier"], Value::from("пре"));
    assert_eq!(value["roots"][0]["id"], Value::from("1"));
}

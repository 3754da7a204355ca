// morfema-segment: Segment split forms against the reference lexicons.
//
// Loads the prefix, suffix and root lists from a data directory (the
// word corpus is not needed), then computes the three assignment lists
// for each given split form, e.g. "пре/каз/ник". Nothing is stored;
// this is a dry run of the matching passes.
//
// Usage:
//   morfema-segment [-d DATA_DIR] [SPLIT_FORM...]
//
// Options:
//   -d, --data-dir PATH    Directory with the source files
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use morfema_core::grammar::Gender;
use morfema_core::normalize::normalize;
use morfema_uk::corpus::{CorpusPaths, read_source};
use morfema_uk::pipeline;
use morfema_uk::segment::{Segmenter, WordContext};
use morfema_uk::store::{MemoryStore, PosRegistry};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_dir, args) = morfema_cli::parse_data_dir(&args);

    if morfema_cli::wants_help(&args) {
        println!("morfema-segment: Segment split forms against the lexicons.");
        println!();
        println!("Usage: morfema-segment [-d DATA_DIR] [SPLIT_FORM...]");
        println!();
        println!("A split form marks morpheme boundaries with '/', for example");
        println!("пре/каз/ник. If no forms are given, reads them from stdin");
        println!("(one per line). Prints the prefix, root and suffix id lists");
        println!("computed for each form; 0 means no match.");
        println!();
        println!("Options:");
        println!("  -d, --data-dir PATH    Directory with the source files");
        println!("  -h, --help             Print this help");
        return;
    }

    let forms: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let dir = morfema_cli::resolve_dir(data_dir.as_deref());
    let paths = CorpusPaths::in_dir(&dir);
    let mut store = MemoryStore::new();
    let source = read_source(&paths.prefixes).unwrap_or_else(|e| morfema_cli::fatal(&e.to_string()));
    pipeline::load_prefixes(&mut store, &source);
    let source = read_source(&paths.suffixes).unwrap_or_else(|e| morfema_cli::fatal(&e.to_string()));
    pipeline::load_suffixes(&mut store, &source);
    let source = read_source(&paths.roots).unwrap_or_else(|e| morfema_cli::fatal(&e.to_string()));
    pipeline::load_roots(&mut store, &source);

    let analyzer = morfema_cli::load_analyzer(&dir).unwrap_or_else(|e| morfema_cli::fatal(&e));
    let mut pos_tags = PosRegistry::new();
    let segmenter = Segmenter::new(
        store.prefixes(),
        store.suffixes(),
        store.primary_roots(),
        store.secondary_roots(),
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut segment_form = |form: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let surface = form.replace('/', "");
        if surface.is_empty() {
            let _ = writeln!(out, "{form}: (no letters)");
            return;
        }
        let canonical = normalize(&surface);
        let (pos_code, gender) =
            pipeline::grammar_reading(&mut pos_tags, analyzer.as_ref(), &surface, &canonical);
        let context = WordContext {
            split_form: form,
            pos_code,
            gender_code: gender.map_or(0, Gender::code),
        };
        let lists = segmenter.segment(&context);
        let _ = writeln!(out, "{form}:");
        let _ = writeln!(out, "  prefixes={}", lists.prefixes);
        let _ = writeln!(out, "  roots={}", lists.roots);
        let _ = writeln!(out, "  suffixes={}", lists.suffixes);
    };

    if forms.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let form = line.trim();
            if form.is_empty() {
                continue;
            }
            segment_form(form, &mut out);
        }
    } else {
        for form in &forms {
            segment_form(form, &mut out);
        }
    }
}

// morfema-lookup: Look up analyzed words in the built lexicon.
//
// Builds the lexicon from a data directory, then prints the stored
// analysis for each requested word: the split form, grammar reading and
// the assigned prefix, root and suffix components with their
// explanations. Cross-referenced explanations are shown resolved.
//
// Usage:
//   morfema-lookup [-d DATA_DIR] [--json] [WORD...]
//
// Options:
//   -d, --data-dir PATH    Directory with the four source files
//   --json                 Emit one JSON object per word
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use morfema_uk::query;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_dir, args) = morfema_cli::parse_data_dir(&args);

    if morfema_cli::wants_help(&args) {
        println!("morfema-lookup: Look up words in the morpheme lexicon.");
        println!();
        println!("Usage: morfema-lookup [-d DATA_DIR] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, looks up each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-dir PATH    Directory with the four source files");
        println!("  --json                 Emit one JSON object per word");
        println!("  -h, --help             Print this help");
        return;
    }

    let as_json = args.iter().any(|a| a == "--json");
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let (store, _) =
        morfema_cli::build_store(data_dir.as_deref()).unwrap_or_else(|e| morfema_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let lookup_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let Some(view) = query::find_word(&store, word) else {
            let _ = writeln!(out, "{word}: (not found)");
            return;
        };
        if as_json {
            match serde_json::to_string(&view) {
                Ok(line) => {
                    let _ = writeln!(out, "{line}");
                }
                Err(e) => eprintln!("error: could not serialize {word}: {e}"),
            }
            return;
        }
        let _ = writeln!(out, "{}:", view.surface);
        let _ = writeln!(out, "  split={}", view.split_form);
        if let Some(tag) = &view.pos_tag {
            let _ = writeln!(out, "  pos={tag}");
        }
        if view.gender_code != 0 {
            let _ = writeln!(out, "  gender={}", view.gender_code);
        }
        for part in &view.prefixes {
            let _ = writeln!(out, "  prefix {}: {} ({})", part.id, part.identifier, part.explanation);
        }
        for part in &view.roots {
            let _ = writeln!(out, "  root {}: {} ({})", part.id, part.identifier, part.explanation);
        }
        for part in &view.suffixes {
            let _ = writeln!(out, "  suffix {}: {} ({})", part.id, part.identifier, part.explanation);
        }
        for note in &view.alternations {
            if note.process.is_empty() {
                let _ = writeln!(out, "  meaning: {}", note.meaning);
            } else {
                let _ = writeln!(out, "  alternation: {}", note.process);
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            lookup_word(word, &mut out);
        }
    } else {
        for word in &words {
            lookup_word(word, &mut out);
        }
    }
}

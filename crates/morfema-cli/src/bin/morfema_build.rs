// morfema-build: Build the morpheme lexicon from its source files.
//
// Loads the word corpus and the prefix, suffix and root reference lists
// from a data directory, fills in grammar codes and runs the three
// matching passes, then prints a per-step report.
//
// Usage:
//   morfema-build [-d DATA_DIR]
//
// Options:
//   -d, --data-dir PATH    Directory with the four source files
//   -h, --help             Print help

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_dir, args) = morfema_cli::parse_data_dir(&args);

    if morfema_cli::wants_help(&args) {
        println!("morfema-build: Build the Ukrainian morpheme lexicon.");
        println!();
        println!("Usage: morfema-build [-d DATA_DIR]");
        println!();
        println!("Reads words.txt, prefixes.txt, suffixes.txt and roots.txt from");
        println!("the data directory, assigns every word its prefix, root and");
        println!("suffix lists and prints per-step load counts. If the directory");
        println!("also holds readings.tsv, grammar codes come from that table");
        println!("instead of the built-in ending heuristics.");
        println!();
        println!("Options:");
        println!("  -d, --data-dir PATH    Directory with the four source files");
        println!("  -h, --help             Print this help");
        return;
    }

    let (store, report) =
        morfema_cli::build_store(data_dir.as_deref()).unwrap_or_else(|e| morfema_cli::fatal(&e));

    println!("{}", morfema_cli::report_line("words", report.words));
    println!("{}", morfema_cli::report_line("prefixes", report.prefixes));
    println!("{}", morfema_cli::report_line("suffixes", report.suffixes));
    println!("{}", morfema_cli::report_line("roots", report.roots));

    let assigned = store
        .words()
        .iter()
        .filter(|w| !w.prefixes.is_none() || !w.roots.is_none() || !w.suffixes.is_none())
        .count();
    println!(
        "assigned: {assigned} of {} words carry at least one match",
        store.words().len()
    );
}

// morfema-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use morfema_uk::analyzer::{EndingAnalyzer, GrammarAnalyzer, TableAnalyzer};
use morfema_uk::corpus::{self, ENV_DATA_PATH, READINGS_FILE};
use morfema_uk::pipeline::{self, BuildReport, LoadReport};
use morfema_uk::store::MemoryStore;

/// Locate the data directory.
///
/// Search order:
/// 1. `data_dir` argument (if provided)
/// 2. `MORFEMA_DATA_PATH` environment variable
/// 3. Current working directory
pub fn resolve_dir(data_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = data_dir {
        return PathBuf::from(dir);
    }
    corpus::data_dir_from_env().unwrap_or_else(|| PathBuf::from("."))
}

/// Pick the grammar analyzer for a data directory: the reading table
/// from `readings.tsv` when the file is present, the built-in endings
/// heuristic otherwise.
pub fn load_analyzer(dir: &Path) -> Result<Box<dyn GrammarAnalyzer>, String> {
    let readings = dir.join(READINGS_FILE);
    if readings.is_file() {
        let source = std::fs::read_to_string(&readings)
            .map_err(|e| format!("failed to read {}: {e}", readings.display()))?;
        return Ok(Box::new(TableAnalyzer::from_tsv(&source)));
    }
    Ok(Box::new(EndingAnalyzer::new()))
}

/// Run the full build over the resolved data directory.
pub fn build_store(data_dir: Option<&str>) -> Result<(MemoryStore, BuildReport), String> {
    let dir = resolve_dir(data_dir);
    let analyzer = load_analyzer(&dir)?;
    pipeline::run(&dir, analyzer.as_ref()).map_err(|e| {
        format!("{e} (set {ENV_DATA_PATH} or pass --data-dir to name the source directory)")
    })
}

/// Render one load-report line for terminal output.
pub fn report_line(name: &str, report: LoadReport) -> String {
    format!(
        "{name}: {} loaded, {} skipped, {} flagged",
        report.loaded, report.skipped, report.flagged
    )
}

/// Parse a `--data-dir=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_dir, remaining_args)`.
pub fn parse_data_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut data_dir = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--data-dir=") {
            data_dir = Some(val.to_string());
        } else if arg == "--data-dir" || arg == "-d" {
            if i + 1 < args.len() {
                data_dir = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (data_dir, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

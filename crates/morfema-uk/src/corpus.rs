// Source file layout and reading

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the directory that holds the source files.
pub const ENV_DATA_PATH: &str = "MORFEMA_DATA_PATH";

/// Headwords, one split form per line.
pub const WORDS_FILE: &str = "words.txt";

/// Prefix reference list, one entry per line.
pub const PREFIXES_FILE: &str = "prefixes.txt";

/// Suffix reference list, one entry per line.
pub const SUFFIXES_FILE: &str = "suffixes.txt";

/// Root reference list, blank-line-delimited blocks.
pub const ROOTS_FILE: &str = "roots.txt";

/// Optional analyzer reading table, tab-separated surface/tag/gender rows.
pub const READINGS_FILE: &str = "readings.tsv";

/// Error type for lexicon build failures.
///
/// Malformed lines never land here: the parsers skip them and the load
/// reports count them. Only a missing or unreadable source file aborts a
/// build.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The four source files one build run consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    pub words: PathBuf,
    pub prefixes: PathBuf,
    pub suffixes: PathBuf,
    pub roots: PathBuf,
}

impl CorpusPaths {
    /// Standard layout: all four files directly inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            words: dir.join(WORDS_FILE),
            prefixes: dir.join(PREFIXES_FILE),
            suffixes: dir.join(SUFFIXES_FILE),
            roots: dir.join(ROOTS_FILE),
        }
    }

    /// Standard layout under the directory named by `MORFEMA_DATA_PATH`,
    /// when that variable is set.
    pub fn from_env() -> Option<Self> {
        data_dir_from_env().map(Self::in_dir)
    }
}

/// The directory named by `MORFEMA_DATA_PATH`, when set.
pub fn data_dir_from_env() -> Option<PathBuf> {
    env::var_os(ENV_DATA_PATH).map(PathBuf::from)
}

/// Read one source file whole. The sources are reference lists, small
/// enough that streaming would buy nothing.
pub fn read_source(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|source| LexiconError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Word-line parsing
// ---------------------------------------------------------------------------

/// Trailing metadata of one corpus word line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordMetadata<'a> {
    /// The line is a bare split form.
    Plain,
    /// `, <token>` tail: a part-of-speech note. Kept apart from the split
    /// form but otherwise unused, the grammar backfill supplies codes.
    PosTail(&'a str),
    /// Bracketed or free-text tail: an alternation process when it
    /// contains `~`, a meaning gloss otherwise.
    Additional(&'a str),
}

/// One corpus word line taken apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLine<'a> {
    pub split_form: &'a str,
    pub metadata: WordMetadata<'a>,
}

/// Take one corpus line apart into split form and trailing metadata.
///
/// Classification order: a `, <token>` tail (single word-like token,
/// optional final period) is a part-of-speech note; otherwise everything
/// from the first opening bracket on is additional info; otherwise the
/// first whitespace run separates split form from additional info.
/// Returns `None` for whitespace-only lines.
pub fn parse_word_line(line: &str) -> Option<WordLine<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some((split_form, token)) = split_pos_tail(line) {
        return Some(WordLine {
            split_form,
            metadata: WordMetadata::PosTail(token),
        });
    }
    if let Some(at) = line.find(['{', '(', '[', '<']) {
        let split_form = line[..at].trim_end();
        return Some(WordLine {
            split_form,
            metadata: WordMetadata::Additional(line[at..].trim_start()),
        });
    }
    match line.split_once(char::is_whitespace) {
        Some((split_form, rest)) => Some(WordLine {
            split_form,
            metadata: WordMetadata::Additional(rest.trim_start()),
        }),
        None => Some(WordLine {
            split_form: line,
            metadata: WordMetadata::Plain,
        }),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Match a `, <token>[.]` line ending; returns the head before the comma
/// and the token.
fn split_pos_tail(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_suffix('.').unwrap_or(line);
    let token_start = body
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word_char(c))
        .last()
        .map(|(at, _)| at)?;
    let head = body[..token_start].strip_suffix(char::is_whitespace)?;
    let head = head.trim_end().strip_suffix(',')?;
    Some((head.trim_end(), &body[token_start..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_joins_the_four_names() {
        let paths = CorpusPaths::in_dir("/data/uk");
        assert_eq!(paths.words, Path::new("/data/uk/words.txt"));
        assert_eq!(paths.prefixes, Path::new("/data/uk/prefixes.txt"));
        assert_eq!(paths.suffixes, Path::new("/data/uk/suffixes.txt"));
        assert_eq!(paths.roots, Path::new("/data/uk/roots.txt"));
    }

    #[test]
    fn read_error_names_the_file() {
        let missing = Path::new("/nonexistent/words.txt");
        let err = read_source(missing).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }

    // -- Word lines --

    #[test]
    fn word_line_pos_tail() {
        let line = parse_word_line("сніж/н/ий, прикметник.").unwrap();
        assert_eq!(line.split_form, "сніж/н/ий");
        assert_eq!(line.metadata, WordMetadata::PosTail("прикметник"));
    }

    #[test]
    fn word_line_bracketed_info() {
        let line = parse_word_line("вод/а {чергування д~дж}").unwrap();
        assert_eq!(line.split_form, "вод/а");
        assert_eq!(line.metadata, WordMetadata::Additional("{чергування д~дж}"));
    }

    #[test]
    fn word_line_free_text_info() {
        let line = parse_word_line("каз/ка давнє слово").unwrap();
        assert_eq!(line.split_form, "каз/ка");
        assert_eq!(line.metadata, WordMetadata::Additional("давнє слово"));
    }

    #[test]
    fn word_line_bare_form() {
        let line = parse_word_line("  пре/каз/ник  ").unwrap();
        assert_eq!(line.split_form, "пре/каз/ник");
        assert_eq!(line.metadata, WordMetadata::Plain);
    }

    #[test]
    fn word_line_blank_is_none() {
        assert!(parse_word_line("   ").is_none());
        assert!(parse_word_line("").is_none());
    }

    #[test]
    fn pos_tail_needs_whitespace_after_the_comma() {
        let line = parse_word_line("а,б").unwrap();
        assert_eq!(line.split_form, "а,б");
        assert_eq!(line.metadata, WordMetadata::Plain);
    }

    #[test]
    fn last_comma_wins_for_the_pos_tail() {
        let line = parse_word_line("сто/рож, воротар, іменник").unwrap();
        assert_eq!(line.split_form, "сто/рож, воротар");
        assert_eq!(line.metadata, WordMetadata::PosTail("іменник"));
    }
}

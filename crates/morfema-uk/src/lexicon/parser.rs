// Parsing of affix and root reference lines
//
// Reference sources are hand-maintained lists and the parsers are
// deliberately permissive: a line that does not fit the pattern produces a
// tagged skip outcome, never an error, and loaders count the skips.

use morfema_core::roman;

/// Em-dash separating the identifier block from the explanation.
const EXPLANATION_SEPARATOR: char = '—';

/// Boilerplate qualifier that some allomorph fields carry in the prefix
/// source; stripped so the field holds only the variant form itself.
const ALLOMORPH_BOILERPLATE: &str = "перед глухими приголосними с/, іс/";

// ---------------------------------------------------------------------------
// Affix lines
// ---------------------------------------------------------------------------

/// A structured affix entry parsed from one reference line, before a store
/// id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAffix {
    pub identifier: String,
    pub allomorph: Option<String>,
    pub semantic: i32,
    pub explanation: String,
}

/// Outcome of parsing one affix reference line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixLineOutcome {
    Entry(ParsedAffix),
    /// Whitespace-only line; ignored without being counted as a defect.
    Blank,
    /// No identifier ahead of the separator; the line is skipped.
    Malformed,
}

/// Parse one affix reference line:
/// `<identifier>[ (<allomorph>)][ <roman>] — <explanation>`.
///
/// The identifier is the leading non-space run; the parenthesized allomorph
/// and the roman semantic code are optional and must appear in that order.
/// Everything after the first em-dash is the explanation (empty when the
/// dash is absent).
pub fn parse_affix_line(line: &str) -> AffixLineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return AffixLineOutcome::Blank;
    }
    let (head, explanation) = split_explanation(line);
    let Some((identifier, rest)) = take_identifier(head) else {
        return AffixLineOutcome::Malformed;
    };
    let (allomorph, rest) = take_allomorph(rest);
    let semantic = take_roman(rest).map_or(0, roman::decode);
    AffixLineOutcome::Entry(ParsedAffix {
        identifier: identifier.to_string(),
        allomorph: allomorph.map(clean_allomorph).filter(|a| !a.is_empty()),
        semantic,
        explanation: explanation.to_string(),
    })
}

/// Split at the first em-dash; whitespace around the dash belongs to the
/// separator. Lines without a dash get an empty explanation.
fn split_explanation(line: &str) -> (&str, &str) {
    match line.split_once(EXPLANATION_SEPARATOR) {
        Some((head, tail)) => (head.trim_end(), tail.trim_start()),
        None => (line, ""),
    }
}

/// Leading non-whitespace run and the remainder after it.
fn take_identifier(head: &str) -> Option<(&str, &str)> {
    if head.is_empty() {
        return None;
    }
    match head.split_once(char::is_whitespace) {
        Some((identifier, rest)) => Some((identifier, rest.trim_start())),
        None => Some((head, "")),
    }
}

/// Parenthesized allomorph at the start of the remainder. An unclosed or
/// empty pair yields nothing, and nothing after it is considered either.
fn take_allomorph(rest: &str) -> (Option<&str>, &str) {
    let Some(inner) = rest.strip_prefix('(') else {
        return (None, rest);
    };
    match inner.split_once(')') {
        Some((allomorph, tail)) if !allomorph.is_empty() => (Some(allomorph), tail.trim_start()),
        _ => (None, ""),
    }
}

/// Leading run of roman glyphs in the remainder, if any.
fn take_roman(rest: &str) -> Option<&str> {
    let end = rest
        .find(|c| !matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}

/// Strip the boilerplate qualifier and surrounding comma/space debris.
fn clean_allomorph(raw: &str) -> String {
    raw.replace(ALLOMORPH_BOILERPLATE, "")
        .trim_matches([',', ' '])
        .to_string()
}

// ---------------------------------------------------------------------------
// Root blocks
// ---------------------------------------------------------------------------

/// One event per root-source line, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootEvent {
    /// `!`-marked line; attachment target for the rest of its block.
    Primary { identifier: String, example: String },
    /// Allomorph line for the block's current primary.
    Secondary { identifier: String, example: String },
    /// Secondary line with no primary above it in its own block: a
    /// data-integrity defect, reported and skipped.
    DanglingSecondary { identifier: String },
    /// Line whose identifier is empty after stripping; skipped.
    Malformed,
}

/// Parse a whole root source into line events.
///
/// The source is a sequence of blank-line-delimited blocks; within each
/// block a leading `!` marks a primary root and every following unmarked
/// line is a secondary form of the most recent primary. The `!` never
/// reaches the stored identifier. Blocks do not share primaries: an
/// unmarked line before its block's first primary is dangling even when an
/// earlier block defined one.
pub fn parse_root_source(text: &str) -> Vec<RootEvent> {
    let mut events = Vec::new();
    for block in text.split("\n\n") {
        let mut block_has_primary = false;
        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (head, example) = split_explanation(line);
            let is_primary = head.starts_with('!');
            let identifier = head.replace('!', "");
            if identifier.is_empty() {
                events.push(RootEvent::Malformed);
                continue;
            }
            let example = example.to_string();
            if is_primary {
                block_has_primary = true;
                events.push(RootEvent::Primary { identifier, example });
            } else if block_has_primary {
                events.push(RootEvent::Secondary { identifier, example });
            } else {
                events.push(RootEvent::DanglingSecondary { identifier });
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(line: &str) -> ParsedAffix {
        match parse_affix_line(line) {
            AffixLineOutcome::Entry(parsed) => parsed,
            other => panic!("expected entry for {line:?}, got {other:?}"),
        }
    }

    // -- Affix lines --

    #[test]
    fn full_line() {
        let parsed = entry("без (біз) II — відсутність чогось");
        assert_eq!(parsed.identifier, "без");
        assert_eq!(parsed.allomorph.as_deref(), Some("біз"));
        assert_eq!(parsed.semantic, 2);
        assert_eq!(parsed.explanation, "відсутність чогось");
    }

    #[test]
    fn line_without_allomorph() {
        let parsed = entry("пре III — найвищий ступінь ознаки");
        assert_eq!(parsed.identifier, "пре");
        assert_eq!(parsed.allomorph, None);
        assert_eq!(parsed.semantic, 3);
    }

    #[test]
    fn line_without_roman() {
        let parsed = entry("під (піді) — напрям дії знизу");
        assert_eq!(parsed.allomorph.as_deref(), Some("піді"));
        assert_eq!(parsed.semantic, 0);
    }

    #[test]
    fn bare_identifier() {
        let parsed = entry("над");
        assert_eq!(parsed.identifier, "над");
        assert_eq!(parsed.allomorph, None);
        assert_eq!(parsed.semantic, 0);
        assert_eq!(parsed.explanation, "");
    }

    #[test]
    fn identifier_swallows_glued_annotations() {
        // Extraction is in fixed order from the leading non-space run, so a
        // parenthesis glued to the identifier is part of the identifier.
        let parsed = entry("пре(при) — текст");
        assert_eq!(parsed.identifier, "пре(при)");
        assert_eq!(parsed.allomorph, None);
    }

    #[test]
    fn roman_token_stops_at_foreign_character() {
        let parsed = entry("пре IIб — текст");
        assert_eq!(parsed.semantic, 2);
    }

    #[test]
    fn unclosed_parenthesis_drops_annotations() {
        let parsed = entry("пре (при II — текст");
        assert_eq!(parsed.identifier, "пре");
        assert_eq!(parsed.allomorph, None);
        assert_eq!(parsed.semantic, 0);
    }

    #[test]
    fn boilerplate_qualifier_is_stripped() {
        let parsed = entry("з (зі, перед глухими приголосними с/, іс/) — спільність");
        assert_eq!(parsed.allomorph.as_deref(), Some("зі"));
    }

    #[test]
    fn boilerplate_only_allomorph_becomes_none() {
        let parsed = entry("з (перед глухими приголосними с/, іс/) — спільність");
        assert_eq!(parsed.allomorph, None);
    }

    #[test]
    fn blank_and_malformed_lines() {
        assert_eq!(parse_affix_line("   "), AffixLineOutcome::Blank);
        assert_eq!(parse_affix_line("— пояснення без ідентифікатора"), AffixLineOutcome::Malformed);
    }

    // -- Root blocks --

    #[test]
    fn block_with_primary_and_secondaries() {
        let events = parse_root_source("!каз — казати\nкаж — кажу\nказ/ — показ");
        assert_eq!(
            events,
            vec![
                RootEvent::Primary {
                    identifier: "каз".into(),
                    example: "казати".into()
                },
                RootEvent::Secondary {
                    identifier: "каж".into(),
                    example: "кажу".into()
                },
                RootEvent::Secondary {
                    identifier: "каз/".into(),
                    example: "показ".into()
                },
            ]
        );
    }

    #[test]
    fn new_primary_takes_over_within_block() {
        let events = parse_root_source("!вод — вода\nвід — відра\n!нос — носити\nніс — ніс");
        assert_eq!(events.len(), 4);
        assert!(matches!(events[2], RootEvent::Primary { .. }));
        assert!(matches!(events[3], RootEvent::Secondary { .. }));
    }

    #[test]
    fn blocks_do_not_share_primaries() {
        let events = parse_root_source("!каз — казати\n\nкаж — кажу");
        assert_eq!(
            events[1],
            RootEvent::DanglingSecondary {
                identifier: "каж".into()
            }
        );
    }

    #[test]
    fn dangling_secondary_at_start() {
        let events = parse_root_source("каж — кажу\n!каз — казати");
        assert_eq!(
            events[0],
            RootEvent::DanglingSecondary {
                identifier: "каж".into()
            }
        );
        assert!(matches!(events[1], RootEvent::Primary { .. }));
    }

    #[test]
    fn exclamation_marks_never_reach_identifiers() {
        let events = parse_root_source("!ка!з — приклад");
        assert_eq!(
            events[0],
            RootEvent::Primary {
                identifier: "каз".into(),
                example: "приклад".into()
            }
        );
    }

    #[test]
    fn empty_identifier_is_malformed() {
        let events = parse_root_source("! — приклад");
        assert_eq!(events, vec![RootEvent::Malformed]);
    }

    #[test]
    fn root_line_without_example() {
        let events = parse_root_source("!каз");
        assert_eq!(
            events[0],
            RootEvent::Primary {
                identifier: "каз".into(),
                example: String::new()
            }
        );
    }
}

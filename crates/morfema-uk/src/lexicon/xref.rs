// Cross-reference resolution between affix senses
//
// Some affix explanations do not explain anything themselves: they point at
// another entry of the same class ("див. без II"). Resolution is a soft
// lookup used for classification and display; the stored explanation keeps
// the literal reference text either way.

use morfema_core::roman;

use super::AffixEntry;

/// Substring that marks an explanation as a cross-reference.
pub const REFERENCE_MARKER: &str = "див";

/// Check whether an explanation is a cross-reference to another entry.
pub fn is_reference(explanation: &str) -> bool {
    explanation.contains(REFERENCE_MARKER)
}

/// A parsed reference target.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reference {
    identifier: String,
    semantic: Option<i32>,
}

/// Read the reference target out of an explanation. The second
/// space-separated token is the identifier (parentheses and semicolons
/// stripped); an optional third token is a roman semantic code.
fn parse_reference(text: &str) -> Option<Reference> {
    let mut tokens = text.split(' ');
    tokens.next()?; // the marker token
    let identifier = tokens.next()?.replace(['(', ')', ';'], "");
    let semantic = tokens.next().map(|token| roman::decode(&token.replace(';', "")));
    Some(Reference {
        identifier,
        semantic,
    })
}

/// Resolve a reference against its own affix class, in lexicon scan order.
///
/// A reference carrying a semantic code matches only the entry with that
/// exact (identifier, code) pair; a bare reference takes the first entry
/// with the identifier regardless of code. Returns `None` when the
/// reference does not parse or nothing matches; callers fall back to the
/// original text.
pub fn resolve<'a>(entries: &'a [AffixEntry], reference: &str) -> Option<&'a str> {
    let target = parse_reference(reference)?;
    entries
        .iter()
        .find(|entry| {
            entry.identifier == target.identifier
                && target.semantic.is_none_or(|code| entry.semantic == code)
        })
        .map(|entry| entry.explanation.as_str())
}

/// Explanation to classify or display an entry by: the referenced entry's
/// text when this one is a resolvable cross-reference, its own otherwise.
pub fn effective_explanation<'a>(entries: &'a [AffixEntry], entry: &'a AffixEntry) -> &'a str {
    if is_reference(&entry.explanation) {
        resolve(entries, &entry.explanation).unwrap_or(&entry.explanation)
    } else {
        &entry.explanation
    }
}

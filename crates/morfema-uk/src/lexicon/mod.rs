// Lexicon entry types and the structures the matching passes consume

pub mod parser;
pub mod xref;

use hashbrown::HashMap;
use morfema_core::alphabet::SEGMENT_DELIMITER;
use morfema_core::assignment::AssignedId;
use morfema_core::normalize::normalize;

// ---------------------------------------------------------------------------
// Entry records
// ---------------------------------------------------------------------------

/// One prefix or suffix lexicon entry. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixEntry {
    pub id: u32,
    /// The affix's own orthographic form, e.g. "пре" or "/ник".
    pub identifier: String,
    /// Alternate orthographic variant, when the source line carried one.
    pub allomorph: Option<String>,
    /// Semantic sense code decoded from a roman numeral; 0 = unclassified.
    pub semantic: i32,
    /// Free explanation text. May contain agreement keywords or a
    /// cross-reference ("див…") to another entry of the same class.
    pub explanation: String,
}

/// A canonical root with its usage example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryRoot {
    pub id: u32,
    pub identifier: String,
    pub example: String,
}

/// A documented allomorph of some primary root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryRoot {
    pub id: u32,
    pub identifier: String,
    pub example: String,
    /// The primary root this form belongs to.
    pub primary_id: u32,
}

// ---------------------------------------------------------------------------
// Affix class descriptor
//
// Prefix and suffix matching differ only in how word material is compared
// against entry identifiers; the descriptor captures that difference so a
// single matcher serves both classes.
// ---------------------------------------------------------------------------

/// How an affix identifier is compared against a word's match keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The identifier must be a leading substring of a key.
    PrefixOf,
    /// The identifier must equal a key exactly.
    Exact,
}

/// Which affix lexicon a pass, resolver, or query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixClass {
    Prefix,
    Suffix,
}

impl AffixClass {
    pub fn label(self) -> &'static str {
        match self {
            AffixClass::Prefix => "prefix",
            AffixClass::Suffix => "suffix",
        }
    }

    /// Comparison mode used by the matching pass for this class.
    pub fn mode(self) -> MatchMode {
        match self {
            AffixClass::Prefix => MatchMode::PrefixOf,
            AffixClass::Suffix => MatchMode::Exact,
        }
    }

    /// Normalized match keys derived from a split form.
    ///
    /// Prefixes are matched against the whole normalized split form, so a
    /// lexicon form like "без/" lines up with "без/печний". Suffixes are
    /// matched against the framed, normalized segments; when the first
    /// segment is already claimed by an assigned prefix it is left out.
    pub fn match_keys(self, split_form: &str, first_segment_claimed: bool) -> Vec<String> {
        match self {
            AffixClass::Prefix => vec![normalize(split_form)],
            AffixClass::Suffix => {
                let skip = if first_segment_claimed { 1 } else { 0 };
                frame_segments(split_form)
                    .iter()
                    .skip(skip)
                    .map(|segment| normalize(segment))
                    .collect()
            }
        }
    }
}

/// Restore delimiter framing on the segments of a split form.
///
/// Suffix lexicon identifiers are recorded with their boundary slashes
/// ("ник" appears as "/ник"), so word segments get the same framing before
/// comparison: trailing slash on the first segment, leading slash on the
/// last, both on interior segments. A single-segment word stays unframed.
pub fn frame_segments(split_form: &str) -> Vec<String> {
    let parts: Vec<&str> = split_form.split(SEGMENT_DELIMITER).collect();
    if parts.len() == 1 {
        return vec![parts[0].to_string()];
    }
    let last = parts.len() - 1;
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                format!("{part}/")
            } else if i == last {
                format!("/{part}")
            } else {
                format!("/{part}/")
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Root index
// ---------------------------------------------------------------------------

/// Comparison key for root matching: the canonical form with delimiter and
/// apostrophe removed, so "каз/" and "каз" index identically.
pub(crate) fn root_key(text: &str) -> String {
    normalize(text)
        .chars()
        .filter(|&c| c != SEGMENT_DELIMITER && c != '\'')
        .collect()
}

/// Exact-match index over the full root lexicon, built once per load.
///
/// Primary and secondary roots share one table; each entry is tagged with
/// its effective id (the primary's own, or the composite pair for a
/// secondary), and per key primaries come before secondaries.
#[derive(Debug, Default)]
pub struct RootIndex {
    by_form: HashMap<String, Vec<AssignedId>>,
}

impl RootIndex {
    pub fn build(primaries: &[PrimaryRoot], secondaries: &[SecondaryRoot]) -> Self {
        let mut by_form: HashMap<String, Vec<AssignedId>> = HashMap::new();
        for root in primaries {
            by_form
                .entry(root_key(&root.identifier))
                .or_default()
                .push(AssignedId::Single(root.id));
        }
        for root in secondaries {
            by_form
                .entry(root_key(&root.identifier))
                .or_default()
                .push(AssignedId::Composite {
                    primary: root.primary_id,
                    secondary: root.id,
                });
        }
        Self { by_form }
    }

    /// Ids whose root form matches the given word segment exactly.
    pub fn matches(&self, segment: &str) -> &[AssignedId] {
        self.by_form
            .get(&root_key(segment))
            .map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.by_form.is_empty()
    }
}

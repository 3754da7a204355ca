// The three matching passes of the segmentation engine

use morfema_core::alphabet::SEGMENT_DELIMITER;
use morfema_core::assignment::{AssignedId, AssignmentBuilder, AssignmentList};
use morfema_core::normalize::normalize;

use crate::agreement::is_primary;
use crate::lexicon::{
    AffixClass, AffixEntry, MatchMode, PrimaryRoot, RootIndex, SecondaryRoot, xref,
};

/// Per-word inputs to the matching passes.
#[derive(Debug, Clone, Copy)]
pub struct WordContext<'a> {
    /// The word's split form, with `/` at presumed morpheme boundaries.
    pub split_form: &'a str,
    /// Part-of-speech registry code; 0 = unknown.
    pub pos_code: u32,
    /// Gender code 1..3; 0 = unknown.
    pub gender_code: u32,
}

/// The three assignment lists produced for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub prefixes: AssignmentList,
    pub roots: AssignmentList,
    pub suffixes: AssignmentList,
}

/// The matching engine over one loaded lexicon snapshot.
///
/// Borrows the affix tables read-only and builds the root index once, so a
/// single instance serves any number of words. Each pass is a pure
/// function of the word's own fields; the only coupling between passes is
/// that root and suffix matching consult the prefix outcome, which is why
/// [`Segmenter::segment`] runs them in the fixed prefix, root, suffix
/// order.
pub struct Segmenter<'a> {
    prefixes: &'a [AffixEntry],
    suffixes: &'a [AffixEntry],
    roots: RootIndex,
}

impl<'a> Segmenter<'a> {
    pub fn new(
        prefixes: &'a [AffixEntry],
        suffixes: &'a [AffixEntry],
        primary_roots: &[PrimaryRoot],
        secondary_roots: &[SecondaryRoot],
    ) -> Self {
        Self {
            prefixes,
            suffixes,
            roots: RootIndex::build(primary_roots, secondary_roots),
        }
    }

    /// All three passes in their fixed order.
    pub fn segment(&self, word: &WordContext) -> Segmentation {
        let prefixes = self.assign_prefixes(word);
        let roots = self.assign_roots(word, &prefixes);
        let suffixes = self.assign_suffixes(word, &prefixes);
        Segmentation {
            prefixes,
            roots,
            suffixes,
        }
    }

    /// Prefix pass: every entry whose normalized identifier leads the
    /// word's normalized split form is a hit.
    pub fn assign_prefixes(&self, word: &WordContext) -> AssignmentList {
        self.match_affixes(AffixClass::Prefix, self.prefixes, word, false)
    }

    /// Root pass: exact lookups of the word's segments in the root index.
    ///
    /// Empty segments are discarded. When a prefix was assigned and more
    /// than one segment remains, the first segment is presumed claimed by
    /// the prefix and excluded; a single-segment word keeps its only
    /// segment eligible either way. Primary-root hits precede secondary
    /// ones; roots have no agreement classification.
    pub fn assign_roots(&self, word: &WordContext, prefix: &AssignmentList) -> AssignmentList {
        let segments: Vec<&str> = word
            .split_form
            .split(SEGMENT_DELIMITER)
            .filter(|segment| !segment.trim().is_empty())
            .collect();
        let start = if !prefix.is_none() && segments.len() > 1 {
            1
        } else {
            0
        };
        let mut builder = AssignmentBuilder::new();
        for segment in &segments[start..] {
            for &id in self.roots.matches(segment) {
                match id {
                    AssignedId::Single(_) => builder.push_primary(id),
                    AssignedId::Composite { .. } => builder.push_secondary(id),
                }
            }
        }
        builder.finish()
    }

    /// Suffix pass: exact comparison of framed segments against suffix
    /// identifiers, skipping the first segment when a prefix claimed it.
    pub fn assign_suffixes(&self, word: &WordContext, prefix: &AssignmentList) -> AssignmentList {
        self.match_affixes(AffixClass::Suffix, self.suffixes, word, !prefix.is_none())
    }

    /// The shared affix matcher, driven by the class descriptor.
    ///
    /// Entries are scanned in lexicon order and hit at most once each.
    /// Cross-referencing entries are classified by their resolved
    /// explanation; the resolved text is not stored anywhere.
    fn match_affixes(
        &self,
        class: AffixClass,
        entries: &[AffixEntry],
        word: &WordContext,
        first_segment_claimed: bool,
    ) -> AssignmentList {
        let keys = class.match_keys(word.split_form, first_segment_claimed);
        let mode = class.mode();
        let mut builder = AssignmentBuilder::new();
        for entry in entries {
            let identifier = normalize(&entry.identifier);
            let hit = match mode {
                MatchMode::PrefixOf => keys.iter().any(|key| key.starts_with(identifier.as_str())),
                MatchMode::Exact => keys.iter().any(|key| *key == identifier),
            };
            if !hit {
                continue;
            }
            let explanation = xref::effective_explanation(entries, entry);
            if is_primary(explanation, word.pos_code, word.gender_code) {
                builder.push_primary(AssignedId::Single(entry.id));
            } else {
                builder.push_secondary(AssignedId::Single(entry.id));
            }
        }
        builder.finish()
    }
}

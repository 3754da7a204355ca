// Morpheme assignment lists
//
// The segmentation passes attach to each word, per morpheme class, an
// ordered list of matched lexicon entry ids. The stored text form of the
// list is a downstream contract: comma-joined ids, "primary_secondary" for
// secondary roots, and the literal "0" when nothing matched.

use std::fmt;

/// Stored text form of an empty assignment list.
pub const NONE_SENTINEL: &str = "0";

/// Identifier of one matched lexicon entry inside an assignment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignedId {
    /// A prefix, suffix, or primary-root record id.
    Single(u32),
    /// A secondary root, carrying its primary's id alongside its own.
    Composite { primary: u32, secondary: u32 },
}

impl fmt::Display for AssignedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignedId::Single(id) => write!(f, "{id}"),
            AssignedId::Composite { primary, secondary } => write!(f, "{primary}_{secondary}"),
        }
    }
}

impl AssignedId {
    /// Parse the stored form of a single id ("12" or "3_7").
    fn parse(chunk: &str) -> Option<AssignedId> {
        match chunk.split_once('_') {
            Some((primary, secondary)) => Some(AssignedId::Composite {
                primary: primary.parse().ok()?,
                secondary: secondary.parse().ok()?,
            }),
            None => chunk.parse().ok().map(AssignedId::Single),
        }
    }
}

/// An ordered sequence of matched lexicon entry ids for one morpheme class.
///
/// The empty list is a meaningful value (nothing matched) and renders as
/// the `"0"` sentinel, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignmentList {
    entries: Vec<AssignedId>,
}

impl AssignmentList {
    /// The "no assignment" value.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when nothing was assigned.
    pub fn is_none(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matched ids in their final order.
    pub fn entries(&self) -> &[AssignedId] {
        &self.entries
    }

    /// True when `id` appears in the list. A bare primary-root id also
    /// matches any composite entry built on that primary.
    pub fn contains_id(&self, id: u32) -> bool {
        self.entries.iter().any(|entry| match *entry {
            AssignedId::Single(single) => single == id,
            AssignedId::Composite { primary, .. } => primary == id,
        })
    }

    /// Rebuild a list from its stored text form. `"0"` and the empty
    /// string give the none value; chunks that do not parse as ids are
    /// dropped.
    pub fn from_stored(stored: &str) -> Self {
        if stored.is_empty() || stored == NONE_SENTINEL {
            return Self::none();
        }
        Self {
            entries: stored.split(',').filter_map(AssignedId::parse).collect(),
        }
    }
}

impl fmt::Display for AssignmentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str(NONE_SENTINEL);
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Two-bucket accumulator for one matching pass.
///
/// Hits arrive in lexicon scan order; the finished list places every
/// primary-classified hit ahead of every secondary one while preserving
/// scan order inside each bucket.
#[derive(Debug, Default)]
pub struct AssignmentBuilder {
    primary: Vec<AssignedId>,
    secondary: Vec<AssignedId>,
}

impl AssignmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit classified as the primary sense for this word.
    pub fn push_primary(&mut self, id: AssignedId) {
        self.primary.push(id);
    }

    /// Record a hit that did not agree with the word's grammar.
    pub fn push_secondary(&mut self, id: AssignedId) {
        self.secondary.push(id);
    }

    /// Merge the buckets into the final ordered list.
    pub fn finish(self) -> AssignmentList {
        let mut entries = self.primary;
        entries.extend(self.secondary);
        AssignmentList { entries }
    }
}

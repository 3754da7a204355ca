// Read-side queries over a populated store

use hashbrown::HashMap;
use serde::Serialize;

use morfema_core::assignment::{AssignedId, AssignmentList};
use morfema_core::grammar::Gender;
use morfema_core::normalize::normalize;

use crate::lexicon::{AffixEntry, xref};
use crate::store::{MemoryStore, WordRecord};

/// Default result cap for [`similar_words`].
pub const SIMILAR_LIMIT: usize = 5;

/// Which component table a query addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Prefix,
    Root,
    Suffix,
}

impl ComponentKind {
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Prefix => "prefix",
            ComponentKind::Root => "root",
            ComponentKind::Suffix => "suffix",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "prefix" => Some(ComponentKind::Prefix),
            "root" => Some(ComponentKind::Root),
            "suffix" => Some(ComponentKind::Suffix),
            _ => None,
        }
    }
}

/// One assignment resolved for display.
///
/// For affixes the explanation is the effective one: display follows the
/// same soft cross-reference fallback as classification. For roots the
/// explanation slot carries the example word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentView {
    pub id: String,
    pub identifier: String,
    pub explanation: String,
}

/// A morphology note shown alongside a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternationView {
    pub process: String,
    pub meaning: String,
}

/// One word with every assignment list expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordView {
    pub id: u32,
    pub surface: String,
    pub split_form: String,
    pub canonical: String,
    pub pos_tag: Option<String>,
    pub gender_code: u32,
    pub prefixes: Vec<ComponentView>,
    pub roots: Vec<ComponentView>,
    pub suffixes: Vec<ComponentView>,
    pub alternations: Vec<AlternationView>,
}

/// Abbreviated word row for result listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSummary {
    pub id: u32,
    pub surface: String,
    pub canonical: String,
}

/// One page of letter-indexed words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub words: Vec<WordView>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

/// One identifier of the component inventory, its senses merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    /// Id of the first record carrying this identifier.
    pub id: String,
    pub identifier: String,
    /// Explanations of every record with this identifier, empty ones
    /// dropped.
    pub explanations: Vec<String>,
}

/// One component with its usage count across all words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentUsage {
    pub id: String,
    pub identifier: String,
    pub count: usize,
}

/// Look one word up by any of its written forms.
pub fn find_word(store: &MemoryStore, probe: &str) -> Option<WordView> {
    store.find_word(probe).map(|word| word_view(store, word))
}

/// Words whose canonical form contains the fragment, first `limit` in id
/// order.
pub fn similar_words(store: &MemoryStore, fragment: &str, limit: usize) -> Vec<WordSummary> {
    let needle = normalize(&fragment.replace('/', ""));
    store
        .words()
        .iter()
        .filter(|word| word.canonical.contains(&needle))
        .take(limit)
        .map(summary)
        .collect()
}

/// Words whose canonical form starts with `letter`, ordered by canonical
/// form, one page at a time.
pub fn words_by_letter(store: &MemoryStore, letter: char, page: usize, per_page: usize) -> Page {
    let mut matched: Vec<&WordRecord> = store
        .words()
        .iter()
        .filter(|word| word.canonical.starts_with(letter))
        .collect();
    matched.sort_by(|a, b| a.canonical.cmp(&b.canonical));
    let total = matched.len();
    let words = matched
        .into_iter()
        .skip(page.saturating_mul(per_page))
        .take(per_page)
        .map(|word| word_view(store, word))
        .collect();
    Page {
        words,
        total,
        page,
        per_page,
    }
}

/// Words whose assignment list for `kind` contains the id. A bare root
/// id also matches composite members built on it as primary.
pub fn words_by_component(store: &MemoryStore, kind: ComponentKind, id: u32) -> Vec<WordView> {
    let mut matched: Vec<&WordRecord> = store
        .words()
        .iter()
        .filter(|word| list_for(word, kind).contains_id(id))
        .collect();
    matched.sort_by(|a, b| a.canonical.cmp(&b.canonical));
    matched
        .into_iter()
        .map(|word| word_view(store, word))
        .collect()
}

/// Every identifier of one component table, in table order, identical
/// spellings merged. The root inventory lists primaries only.
pub fn component_inventory(store: &MemoryStore, kind: ComponentKind) -> Vec<InventoryEntry> {
    let mut entries: Vec<InventoryEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut push = |id: String, identifier: &str, explanation: &str| {
        match index.get(identifier) {
            Some(&at) => {
                if !explanation.is_empty() {
                    entries[at].explanations.push(explanation.to_string());
                }
            }
            None => {
                index.insert(identifier.to_string(), entries.len());
                let explanations = if explanation.is_empty() {
                    Vec::new()
                } else {
                    vec![explanation.to_string()]
                };
                entries.push(InventoryEntry {
                    id,
                    identifier: identifier.to_string(),
                    explanations,
                });
            }
        }
    };
    match kind {
        ComponentKind::Prefix => {
            for entry in store.prefixes() {
                push(entry.id.to_string(), &entry.identifier, &entry.explanation);
            }
        }
        ComponentKind::Suffix => {
            for entry in store.suffixes() {
                push(entry.id.to_string(), &entry.identifier, &entry.explanation);
            }
        }
        ComponentKind::Root => {
            for root in store.primary_roots() {
                push(root.id.to_string(), &root.identifier, &root.example);
            }
        }
    }
    entries
}

/// The most frequently assigned components of one class, usage counted
/// per word, heaviest first. Composite root members count separately
/// from their primaries.
pub fn top_components(store: &MemoryStore, kind: ComponentKind, limit: usize) -> Vec<ComponentUsage> {
    let mut counts: HashMap<AssignedId, usize> = HashMap::new();
    for word in store.words() {
        for &assigned in list_for(word, kind).entries() {
            *counts.entry(assigned).or_insert(0) += 1;
        }
    }
    let mut usage: Vec<ComponentUsage> = counts
        .into_iter()
        .filter_map(|(assigned, count)| {
            Some(ComponentUsage {
                id: assigned.to_string(),
                identifier: component_identifier(store, kind, assigned)?,
                count,
            })
        })
        .collect();
    usage.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
    usage.truncate(limit);
    usage
}

// ---------------------------------------------------------------------------
// View construction
// ---------------------------------------------------------------------------

fn summary(word: &WordRecord) -> WordSummary {
    WordSummary {
        id: word.id,
        surface: word.surface.clone(),
        canonical: word.canonical.clone(),
    }
}

fn word_view(store: &MemoryStore, word: &WordRecord) -> WordView {
    WordView {
        id: word.id,
        surface: word.surface.clone(),
        split_form: word.split_form.clone(),
        canonical: word.canonical.clone(),
        pos_tag: store.pos_tags().tag_for(word.pos_code).map(str::to_string),
        gender_code: word.gender.map_or(0, Gender::code),
        prefixes: affix_views(store.prefixes(), &word.prefixes),
        roots: root_views(store, &word.roots),
        suffixes: affix_views(store.suffixes(), &word.suffixes),
        alternations: store
            .alternations_for(word.id)
            .map(|record| AlternationView {
                process: record.process.clone(),
                meaning: record.meaning.clone(),
            })
            .collect(),
    }
}

fn affix_views(entries: &[AffixEntry], list: &AssignmentList) -> Vec<ComponentView> {
    list.entries()
        .iter()
        .filter_map(|assigned| {
            let AssignedId::Single(id) = *assigned else {
                return None;
            };
            let entry = entries.get(id.checked_sub(1)? as usize)?;
            Some(ComponentView {
                id: assigned.to_string(),
                identifier: entry.identifier.clone(),
                explanation: xref::effective_explanation(entries, entry).to_string(),
            })
        })
        .collect()
}

/// Root views, repeats of one spelling collapsed to the first.
fn root_views(store: &MemoryStore, list: &AssignmentList) -> Vec<ComponentView> {
    let mut views: Vec<ComponentView> = Vec::new();
    for &assigned in list.entries() {
        let Some((identifier, example)) = root_record(store, assigned) else {
            continue;
        };
        if views.iter().any(|view| view.identifier == identifier) {
            continue;
        }
        views.push(ComponentView {
            id: assigned.to_string(),
            identifier: identifier.to_string(),
            explanation: example.to_string(),
        });
    }
    views
}

fn root_record(store: &MemoryStore, assigned: AssignedId) -> Option<(&str, &str)> {
    match assigned {
        AssignedId::Single(id) => {
            let root = store.primary_root(id)?;
            Some((&root.identifier, &root.example))
        }
        AssignedId::Composite { secondary, .. } => {
            let root = store.secondary_root(secondary)?;
            Some((&root.identifier, &root.example))
        }
    }
}

fn component_identifier(store: &MemoryStore, kind: ComponentKind, assigned: AssignedId) -> Option<String> {
    match kind {
        ComponentKind::Prefix => match assigned {
            AssignedId::Single(id) => Some(store.prefix(id)?.identifier.clone()),
            AssignedId::Composite { .. } => None,
        },
        ComponentKind::Suffix => match assigned {
            AssignedId::Single(id) => Some(store.suffix(id)?.identifier.clone()),
            AssignedId::Composite { .. } => None,
        },
        ComponentKind::Root => root_record(store, assigned).map(|(identifier, _)| identifier.to_string()),
    }
}

fn list_for(word: &WordRecord, kind: ComponentKind) -> &AssignmentList {
    match kind {
        ComponentKind::Prefix => &word.prefixes,
        ComponentKind::Root => &word.roots,
        ComponentKind::Suffix => &word.suffixes,
    }
}

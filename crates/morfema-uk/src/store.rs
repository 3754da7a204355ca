// In-memory lexicon store with dense id allocation

use hashbrown::HashMap;

use morfema_core::assignment::AssignmentList;
use morfema_core::grammar::{AGREEMENT_TAGS, Gender};
use morfema_core::normalize::normalize;

use crate::lexicon::{AffixEntry, PrimaryRoot, SecondaryRoot};
use crate::lexicon::parser::ParsedAffix;

/// One headword with its grammar fields and assignment lists.
///
/// `surface` is the word as written, `canonical` its normalized form and
/// `split_form` the surface with `/` at presumed morpheme boundaries.
/// The grammar fields start unknown (`pos_code` 0, `gender` `None`) until
/// the backfill step fills them in; the assignment lists start empty
/// until the matching passes run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub id: u32,
    pub surface: String,
    pub canonical: String,
    pub split_form: String,
    pub pos_code: u32,
    pub gender: Option<Gender>,
    pub prefixes: AssignmentList,
    pub roots: AssignmentList,
    pub suffixes: AssignmentList,
}

/// A morphological note carried on a word line.
///
/// Source lines may trail free text after the split form; text with a
/// `~` describes an alternation process (`г~ж`), anything else is kept
/// as a meaning gloss. Exactly one of the two fields is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternationRecord {
    pub id: u32,
    pub word_id: u32,
    pub process: String,
    pub meaning: String,
}

/// Interning table for part-of-speech tags.
///
/// Codes are handed out in first-seen order starting at 1; 0 is reserved
/// for "no tag". A fresh registry already holds the three agreement
/// tags at codes 1..3, matching the ordinal keyword tables the
/// classifier indexes with these codes.
#[derive(Debug)]
pub struct PosRegistry {
    codes: HashMap<String, u32>,
    tags: Vec<String>,
}

impl Default for PosRegistry {
    fn default() -> Self {
        let mut registry = Self {
            codes: HashMap::new(),
            tags: Vec::new(),
        };
        for tag in AGREEMENT_TAGS {
            registry.code_for(tag);
        }
        registry
    }
}

impl PosRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the code for `tag`, allocating one on first sight.
    pub fn code_for(&mut self, tag: &str) -> u32 {
        if let Some(&code) = self.codes.get(tag) {
            return code;
        }
        self.tags.push(tag.to_string());
        let code = self.tags.len() as u32;
        self.codes.insert(tag.to_string(), code);
        code
    }

    pub fn tag_for(&self, code: u32) -> Option<&str> {
        self.tags
            .get(code.checked_sub(1)? as usize)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// The whole lexicon in memory: words, affix tables, root tables and the
/// part-of-speech registry.
///
/// Every table allocates ids densely from 1, so id `n` always lives at
/// index `n - 1` and 0 can serve as the absent-id sentinel throughout.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) words: Vec<WordRecord>,
    pub(crate) alternations: Vec<AlternationRecord>,
    pub(crate) prefixes: Vec<AffixEntry>,
    pub(crate) suffixes: Vec<AffixEntry>,
    pub(crate) primary_roots: Vec<PrimaryRoot>,
    pub(crate) secondary_roots: Vec<SecondaryRoot>,
    pub(crate) pos_tags: PosRegistry,
    canonical_index: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a headword given its split form; derives the surface and
    /// canonical forms and indexes the canonical one. Returns the
    /// allocated id.
    pub fn add_word(&mut self, split_form: &str) -> u32 {
        let id = self.words.len() as u32 + 1;
        let surface = split_form.replace('/', "");
        let canonical = normalize(&surface);
        self.canonical_index.entry(canonical.clone()).or_insert(id);
        self.words.push(WordRecord {
            id,
            surface,
            canonical,
            split_form: split_form.to_string(),
            pos_code: 0,
            gender: None,
            prefixes: AssignmentList::none(),
            roots: AssignmentList::none(),
            suffixes: AssignmentList::none(),
        });
        id
    }

    /// Attach a morphology note to word `word_id`.
    pub fn add_alternation(&mut self, word_id: u32, process: &str, meaning: &str) -> u32 {
        let id = self.alternations.len() as u32 + 1;
        self.alternations.push(AlternationRecord {
            id,
            word_id,
            process: process.to_string(),
            meaning: meaning.to_string(),
        });
        id
    }

    pub fn add_prefix(&mut self, parsed: ParsedAffix) -> u32 {
        let id = self.prefixes.len() as u32 + 1;
        self.prefixes.push(affix_record(id, parsed));
        id
    }

    pub fn add_suffix(&mut self, parsed: ParsedAffix) -> u32 {
        let id = self.suffixes.len() as u32 + 1;
        self.suffixes.push(affix_record(id, parsed));
        id
    }

    pub fn add_primary_root(&mut self, identifier: &str, example: &str) -> u32 {
        let id = self.primary_roots.len() as u32 + 1;
        self.primary_roots.push(PrimaryRoot {
            id,
            identifier: identifier.to_string(),
            example: example.to_string(),
        });
        id
    }

    pub fn add_secondary_root(&mut self, identifier: &str, example: &str, primary_id: u32) -> u32 {
        let id = self.secondary_roots.len() as u32 + 1;
        self.secondary_roots.push(SecondaryRoot {
            id,
            identifier: identifier.to_string(),
            example: example.to_string(),
            primary_id,
        });
        id
    }

    // -- Read access --

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn alternations(&self) -> &[AlternationRecord] {
        &self.alternations
    }

    pub fn prefixes(&self) -> &[AffixEntry] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[AffixEntry] {
        &self.suffixes
    }

    pub fn primary_roots(&self) -> &[PrimaryRoot] {
        &self.primary_roots
    }

    pub fn secondary_roots(&self) -> &[SecondaryRoot] {
        &self.secondary_roots
    }

    pub fn pos_tags(&self) -> &PosRegistry {
        &self.pos_tags
    }

    pub fn word(&self, id: u32) -> Option<&WordRecord> {
        self.words.get(id.checked_sub(1)? as usize)
    }

    /// The notes attached to word `word_id`, in record order.
    pub fn alternations_for(&self, word_id: u32) -> impl Iterator<Item = &AlternationRecord> {
        self.alternations
            .iter()
            .filter(move |record| record.word_id == word_id)
    }

    pub fn prefix(&self, id: u32) -> Option<&AffixEntry> {
        self.prefixes.get(id.checked_sub(1)? as usize)
    }

    pub fn suffix(&self, id: u32) -> Option<&AffixEntry> {
        self.suffixes.get(id.checked_sub(1)? as usize)
    }

    pub fn primary_root(&self, id: u32) -> Option<&PrimaryRoot> {
        self.primary_roots.get(id.checked_sub(1)? as usize)
    }

    pub fn secondary_root(&self, id: u32) -> Option<&SecondaryRoot> {
        self.secondary_roots.get(id.checked_sub(1)? as usize)
    }

    /// Look a headword up by any of its written forms. Surface, split
    /// and canonical probes all collapse to the same canonical key; the
    /// first word stored under that key wins.
    pub fn find_word(&self, probe: &str) -> Option<&WordRecord> {
        let canonical = normalize(&probe.replace('/', ""));
        let id = *self.canonical_index.get(&canonical)?;
        self.word(id)
    }
}

fn affix_record(id: u32, parsed: ParsedAffix) -> AffixEntry {
    AffixEntry {
        id,
        identifier: parsed.identifier,
        allomorph: parsed.allomorph,
        semantic: parsed.semantic,
        explanation: parsed.explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(identifier: &str, explanation: &str) -> ParsedAffix {
        ParsedAffix {
            identifier: identifier.to_string(),
            allomorph: None,
            semantic: 0,
            explanation: explanation.to_string(),
        }
    }

    #[test]
    fn word_ids_count_from_one() {
        let mut store = MemoryStore::new();
        assert_eq!(store.add_word("пре/каз/ник"), 1);
        assert_eq!(store.add_word("каз/ка"), 2);
        assert_eq!(store.word(0), None);
        assert_eq!(store.word(1).unwrap().surface, "преказник");
        assert_eq!(store.word(3), None);
    }

    #[test]
    fn add_word_derives_surface_and_canonical() {
        let mut store = MemoryStore::new();
        store.add_word("й/од");
        let word = store.word(1).unwrap();
        assert_eq!(word.surface, "йод");
        assert_eq!(word.canonical, "иод");
        assert_eq!(word.split_form, "й/од");
        assert_eq!(word.pos_code, 0);
        assert_eq!(word.gender, None);
        assert!(word.prefixes.is_none());
    }

    #[test]
    fn affix_ids_are_per_table() {
        let mut store = MemoryStore::new();
        assert_eq!(store.add_prefix(parsed("пре", "ступінь")), 1);
        assert_eq!(store.add_suffix(parsed("/ник", "особа")), 1);
        assert_eq!(store.add_suffix(parsed("/ість", "якість")), 2);
        assert_eq!(store.prefix(1).unwrap().identifier, "пре");
        assert_eq!(store.suffix(2).unwrap().identifier, "/ість");
    }

    #[test]
    fn alternations_attach_to_their_word() {
        let mut store = MemoryStore::new();
        let water = store.add_word("вод/а");
        let tale = store.add_word("каз/ка");
        store.add_alternation(water, "д~дж", "");
        store.add_alternation(tale, "", "розповідь");
        store.add_alternation(water, "", "рідина");

        let notes: Vec<_> = store.alternations_for(water).collect();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].process, "д~дж");
        assert_eq!(notes[1].meaning, "рідина");
        assert_eq!(store.alternations_for(tale).count(), 1);
    }

    #[test]
    fn root_tables_keep_their_link() {
        let mut store = MemoryStore::new();
        let main = store.add_primary_root("каз", "казка");
        let variant = store.add_secondary_root("каж", "кажу", main);
        assert_eq!(store.secondary_root(variant).unwrap().primary_id, main);
    }

    #[test]
    fn agreement_tags_hold_the_low_codes() {
        let mut registry = PosRegistry::new();
        assert_eq!(registry.code_for("ADJF"), 1);
        assert_eq!(registry.code_for("NOUN"), 2);
        assert_eq!(registry.code_for("VERB"), 3);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn pos_codes_are_stable_per_tag() {
        let mut registry = PosRegistry::new();
        let npro = registry.code_for("NPRO");
        assert_eq!(npro, 4);
        assert_eq!(registry.code_for("NPRO"), npro);
        assert_eq!(registry.tag_for(npro), Some("NPRO"));
        assert_eq!(registry.tag_for(0), None);
    }

    #[test]
    fn find_word_accepts_any_written_form() {
        let mut store = MemoryStore::new();
        store.add_word("й/од");
        assert_eq!(store.find_word("йод").unwrap().id, 1);
        assert_eq!(store.find_word("иод").unwrap().id, 1);
        assert_eq!(store.find_word("й/од").unwrap().id, 1);
        assert!(store.find_word("кава").is_none());
    }

    #[test]
    fn first_word_wins_a_shared_canonical_form() {
        let mut store = MemoryStore::new();
        store.add_word("каз/ка");
        store.add_word("казка");
        assert_eq!(store.find_word("казка").unwrap().id, 1);
    }
}

// Part-of-speech and gender analysis for headwords

use hashbrown::HashMap;

use morfema_core::alphabet::is_ukrainian_letter;
use morfema_core::grammar::{Gender, GrammarInfo, TAG_ADJECTIVE, TAG_NOUN, TAG_VERB};
use morfema_core::normalize::normalize;

/// Supplies part-of-speech and gender readings for surface forms.
///
/// Implementations never fail: a word with no reading gets
/// [`GrammarInfo::unknown`]. The grammar backfill step drives one
/// analyzer over every loaded word.
pub trait GrammarAnalyzer {
    fn analyze(&self, surface: &str) -> GrammarInfo;
}

/// Ending table: longest endings first, first match wins.
const ENDINGS: &[(&str, &str, Option<Gender>)] = &[
    ("ість", TAG_NOUN, Some(Gender::Feminine)),
    ("тися", TAG_VERB, None),
    ("ння", TAG_NOUN, Some(Gender::Neuter)),
    ("ття", TAG_NOUN, Some(Gender::Neuter)),
    ("ий", TAG_ADJECTIVE, Some(Gender::Masculine)),
    ("ій", TAG_ADJECTIVE, Some(Gender::Masculine)),
    ("ти", TAG_VERB, None),
    ("а", TAG_NOUN, Some(Gender::Feminine)),
    ("я", TAG_NOUN, Some(Gender::Feminine)),
    ("о", TAG_NOUN, Some(Gender::Neuter)),
    ("е", TAG_NOUN, Some(Gender::Neuter)),
];

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'а' | 'е' | 'и' | 'і' | 'о' | 'у' | 'є' | 'ї' | 'ю' | 'я'
    )
}

/// Dictionary-free analyzer that reads part of speech and gender off the
/// word's ending.
///
/// Nominative-form endings cover the regular declension classes; a word
/// ending in a consonant is taken for a masculine noun. Everything else
/// stays unknown. Deliberately coarse: the classifier downstream only
/// needs the three-way part-of-speech split and the three genders.
#[derive(Debug, Default)]
pub struct EndingAnalyzer;

impl EndingAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl GrammarAnalyzer for EndingAnalyzer {
    fn analyze(&self, surface: &str) -> GrammarInfo {
        for &(ending, tag, gender) in ENDINGS {
            if surface.ends_with(ending) {
                return GrammarInfo {
                    pos_tag: Some(tag.to_string()),
                    gender,
                };
            }
        }
        match surface.chars().last() {
            Some(c) if is_ukrainian_letter(c) && !is_vowel(c) => GrammarInfo {
                pos_tag: Some(TAG_NOUN.to_string()),
                gender: Some(Gender::Masculine),
            },
            _ => GrammarInfo::unknown(),
        }
    }
}

/// Reading table loaded from tab-separated rows.
///
/// Row format: `surface<TAB>pos-tag<TAB>gender-code`; the gender column
/// is optional. Keys are stored normalized, so table and probe spelling
/// agree regardless of diacritics or look-alike letters. A probe with no
/// row yields [`GrammarInfo::unknown`].
#[derive(Debug, Default)]
pub struct TableAnalyzer {
    readings: HashMap<String, GrammarInfo>,
}

impl TableAnalyzer {
    /// Parse `source` into a reading table. Rows missing the surface or
    /// tag column are skipped; an unparseable gender column reads as no
    /// gender. A surface listed twice keeps its last row.
    pub fn from_tsv(source: &str) -> Self {
        let mut readings = HashMap::new();
        for line in source.lines() {
            let mut columns = line.split('\t');
            let Some(surface) = columns.next().map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            let Some(tag) = columns.next().map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            let gender = columns
                .next()
                .and_then(|code| code.trim().parse().ok())
                .and_then(Gender::from_code);
            readings.insert(
                normalize(surface),
                GrammarInfo {
                    pos_tag: Some(tag.to_string()),
                    gender,
                },
            );
        }
        Self { readings }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl GrammarAnalyzer for TableAnalyzer {
    fn analyze(&self, surface: &str) -> GrammarInfo {
        self.readings
            .get(&normalize(surface))
            .cloned()
            .unwrap_or_else(GrammarInfo::unknown)
    }
}

// Grammar codes: gender, part-of-speech tags, agreement keyword tables

/// Grammatical gender, stored on word records as code 1..3.
/// Absence of gender is a valid terminal state and is kept as `None`,
/// never as a fourth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine = 1,
    Feminine = 2,
    Neuter = 3,
}

impl Gender {
    /// Stored numeric code of this gender.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Gender for a stored code. 0 and out-of-range codes carry no gender.
    pub fn from_code(code: u32) -> Option<Gender> {
        match code {
            1 => Some(Gender::Masculine),
            2 => Some(Gender::Feminine),
            3 => Some(Gender::Neuter),
            _ => None,
        }
    }
}

/// Part-of-speech tag assigned to words whose surface form ends in "ий".
pub const TAG_ADJECTIVE: &str = "ADJF";

/// Part-of-speech tag for common nouns.
pub const TAG_NOUN: &str = "NOUN";

/// Part-of-speech tag for verbs, infinitives included.
pub const TAG_VERB: &str = "VERB";

/// Part-of-speech tag for words the analyzer could not classify.
pub const TAG_UNKNOWN: &str = "UNKNOWN";

/// Tags whose registry codes must line up with [`speech_keyword`]:
/// adjective, noun and verb, in that order.
pub const AGREEMENT_TAGS: [&str; 3] = [TAG_ADJECTIVE, TAG_NOUN, TAG_VERB];

/// Analyzer output for one surface form. Out-of-vocabulary words yield the
/// default value with both fields unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrammarInfo {
    /// Part-of-speech tag, e.g. "ADJF". `None` when the analyzer has no
    /// reading for the word.
    pub pos_tag: Option<String>,
    pub gender: Option<Gender>,
}

impl GrammarInfo {
    /// The "analyzer knows nothing" value.
    pub fn unknown() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Agreement keyword tables
//
// Affix explanations mention the grammatical category they apply to in
// running Ukrainian text. Codes map 1-based into these tables; the leading
// space on the adjective fragment is part of the keyword.
// ---------------------------------------------------------------------------

/// Part-of-speech keyword fragments, indexed by code 1..3.
const SPEECH_KEYWORDS: &[&str] = &[" прикметн", "іменн", "дієсло"];

/// Gender keyword fragments, indexed by code 1..3.
const GENDER_KEYWORDS: &[&str] = &["чоловіч", "жіноч", "середн"];

/// Sentinel keyword for unknown or out-of-range codes. Guaranteed not to
/// occur in any explanation text, so it never matches.
pub const NO_AGREEMENT_KEYWORD: &str = "fffffffffffff";

/// Keyword fragment for a part-of-speech code; the sentinel when the code
/// is 0 or out of range.
pub fn speech_keyword(code: u32) -> &'static str {
    match code {
        1..=3 => SPEECH_KEYWORDS[code as usize - 1],
        _ => NO_AGREEMENT_KEYWORD,
    }
}

/// Keyword fragment for a gender code; the sentinel when the code is 0 or
/// out of range.
pub fn gender_keyword(code: u32) -> &'static str {
    match code {
        1..=3 => GENDER_KEYWORDS[code as usize - 1],
        _ => NO_AGREEMENT_KEYWORD,
    }
}

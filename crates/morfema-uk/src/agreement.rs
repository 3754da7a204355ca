// Agreement classification of matched affixes

use morfema_core::grammar::{gender_keyword, speech_keyword};

/// Decide whether a matched affix is the *primary* sense for a word.
///
/// The word's gender and part-of-speech codes resolve to Ukrainian keyword
/// fragments; the affix counts as primary when either fragment occurs in
/// its explanation text. Unknown or out-of-range codes resolve to a
/// sentinel that never matches, so a word without known grammar only
/// collects secondary classifications. This is a substring heuristic, not
/// a grammatical parse; incidental overlap is an accepted limitation.
pub fn is_primary(explanation: &str, pos_code: u32, gender_code: u32) -> bool {
    explanation.contains(gender_keyword(gender_code))
        || explanation.contains(speech_keyword(pos_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_keyword_agrees() {
        assert!(is_primary("чоловічий рід, присвійність", 0, 1));
        assert!(is_primary("жіночий рід", 0, 2));
        assert!(!is_primary("чоловічий рід", 0, 2));
    }

    #[test]
    fn speech_keyword_agrees() {
        assert!(is_primary("утворює іменники", 2, 0));
        assert!(is_primary("дієслова доконаного виду", 3, 0));
    }

    #[test]
    fn adjective_keyword_needs_its_leading_space() {
        // The fragment for code 1 is " прикметн" with a leading space.
        assert!(is_primary("утворює прикметники", 1, 0));
        assert!(!is_primary("прикметники", 1, 0));
    }

    #[test]
    fn either_keyword_suffices() {
        assert!(is_primary("іменники чоловічого роду", 2, 3));
        assert!(is_primary("середній рід", 1, 3));
    }

    #[test]
    fn unknown_codes_never_agree() {
        assert!(!is_primary("чоловічий рід, іменники", 0, 0));
        assert!(!is_primary("чоловічий рід, іменники", 9, 42));
    }

    #[test]
    fn unresolved_reference_text_is_still_classifiable() {
        // A dangling cross-reference is classified by its literal text.
        assert!(!is_primary("див. без II", 2, 1));
        assert!(is_primary("див. чоловіч II", 0, 1));
    }
}

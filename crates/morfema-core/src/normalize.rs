// Canonical comparison form for words and affixes
//
// Lexicon matching never compares raw source strings: both sides are first
// reduced to a canonical form over the Ukrainian alphabet plus the four
// structural marks. Accents and other combining marks are dropped, Latin
// look-alikes are folded into Cyrillic, everything else is discarded.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::alphabet::{is_canonical, substitute_lookalike};

/// Reduce a string to its canonical comparison form.
///
/// The input is canonically decomposed (NFD); combining marks are dropped,
/// Latin look-alikes are substituted with their Cyrillic counterparts, and
/// any character that is neither a Ukrainian letter nor a structural mark
/// is removed. Letter case and mark positions are preserved.
///
/// The function accepts any input and never fails; it is idempotent, and its
/// output contains only Ukrainian letters and structural marks. Note that
/// decomposition reduces й to и and ї to і (their combining marks are
/// dropped with the rest), so canonical forms are comparison keys, not
/// display forms.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        let c = substitute_lookalike(c);
        if is_canonical(c) {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::is_canonical;

    #[test]
    fn plain_word_unchanged() {
        assert_eq!(normalize("престол"), "престол");
        assert_eq!(normalize("Слово"), "Слово");
    }

    #[test]
    fn split_form_keeps_delimiters() {
        assert_eq!(normalize("пре/каз/ник"), "пре/каз/ник");
        assert_eq!(normalize("/ник"), "/ник");
    }

    #[test]
    fn apostrophe_and_backtick_kept() {
        assert_eq!(normalize("п'ять"), "п'ять");
        assert_eq!(normalize("п`ять"), "п`ять");
        assert_eq!(normalize("жовто-блакитний"), "жовто-блакитний");
    }

    #[test]
    fn combining_marks_dropped() {
        // о + COMBINING ACUTE ACCENT
        assert_eq!(normalize("сло\u{0301}во"), "слово");
    }

    #[test]
    fn decomposable_letters_reduce_to_base() {
        // й decomposes to и + breve, ї to і + diaeresis; the marks go.
        assert_eq!(normalize("йод"), "иод");
        assert_eq!(normalize("їжак"), "іжак");
        assert_eq!(normalize("Йосип"), "Иосип");
    }

    #[test]
    fn lookalikes_substituted() {
        // Latin p, c, o inside a Cyrillic word
        assert_eq!(normalize("п\u{0072}е"), "пре");
        assert_eq!(normalize("\u{0063}л\u{006F}во"), "слово");
        assert_eq!(normalize("\u{0041}рка"), "Арка"); // Latin A
    }

    #[test]
    fn foreign_characters_dropped() {
        assert_eq!(normalize("абв123"), "абв");
        assert_eq!(normalize("сло,во."), "слово");
        assert_eq!(normalize("qwслово"), "слово");
        assert_eq!(normalize("слово слово"), "словослово");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn idempotent() {
        for s in [
            "пре/каз/ник",
            "п'ять",
            "сло\u{0301}во",
            "\u{0063}л\u{006F}во",
            "йод",
            "x123 єдність!",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "{s}");
        }
    }

    #[test]
    fn output_is_alphabet_closed() {
        for s in ["пре/каз/ник", "abc?!", "űőç 42", "ы э ъ", "мі́й"] {
            for c in normalize(s).chars() {
                assert!(is_canonical(c), "{s} produced {c}");
            }
        }
    }
}

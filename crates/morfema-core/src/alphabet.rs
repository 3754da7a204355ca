// Ukrainian alphabet tables and character classification

// ---------------------------------------------------------------------------
// Alphabet constants
// ---------------------------------------------------------------------------

/// Ukrainian letters (lowercase), in alphabet order.
const UKRAINIAN_LOWER: &[char] = &[
    'а', 'б', 'в', 'г', 'ґ', 'д', 'е', 'є', 'ж', 'з', 'и', 'і', 'ї', 'й', 'к', 'л', 'м', 'н', 'о',
    'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ь', 'ю', 'я',
];

/// Ukrainian letters (uppercase), in alphabet order.
const UKRAINIAN_UPPER: &[char] = &[
    'А', 'Б', 'В', 'Г', 'Ґ', 'Д', 'Е', 'Є', 'Ж', 'З', 'И', 'І', 'Ї', 'Й', 'К', 'Л', 'М', 'Н', 'О',
    'П', 'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ь', 'Ю', 'Я',
];

/// The morpheme boundary marker used in split forms ("пре/каз/ник").
pub const SEGMENT_DELIMITER: char = '/';

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is a Ukrainian letter (either case).
pub fn is_ukrainian_letter(c: char) -> bool {
    UKRAINIAN_LOWER.contains(&c) || UKRAINIAN_UPPER.contains(&c)
}

/// Check whether a character is one of the structural marks that survive
/// canonicalization: apostrophe, hyphen, backtick (a common apostrophe
/// stand-in in source data), and the segment delimiter.
pub fn is_structural_mark(c: char) -> bool {
    matches!(c, '\'' | '-' | '`' | '/')
}

/// Check whether a character may appear in a canonical comparison form.
pub fn is_canonical(c: char) -> bool {
    is_ukrainian_letter(c) || is_structural_mark(c)
}

// ---------------------------------------------------------------------------
// Latin look-alike substitution
//
// Source data mixes in Latin letters that render identically to Cyrillic
// ones. The mapping is written with explicit escapes because the two sides
// of each arm are indistinguishable on screen.
// ---------------------------------------------------------------------------

/// Substitute a visually-confusable Latin letter with its Cyrillic
/// look-alike. Characters outside the fixed table pass through unchanged.
pub fn substitute_lookalike(c: char) -> char {
    match c {
        'a' => '\u{0430}', // а
        'e' => '\u{0435}', // е
        'i' => '\u{0456}', // і
        'o' => '\u{043E}', // о
        'p' => '\u{0440}', // р
        'c' => '\u{0441}', // с
        'y' => '\u{0443}', // у
        'x' => '\u{0445}', // х
        'A' => '\u{0410}', // А
        'B' => '\u{0412}', // В
        'C' => '\u{0421}', // С
        'E' => '\u{0415}', // Е
        'H' => '\u{041D}', // Н
        'I' => '\u{0406}', // І
        'K' => '\u{041A}', // К
        'M' => '\u{041C}', // М
        'O' => '\u{041E}', // О
        'P' => '\u{0420}', // Р
        'T' => '\u{0422}', // Т
        'X' => '\u{0425}', // Х
        _ => c,
    }
}

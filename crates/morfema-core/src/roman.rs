// Roman numeral decoding for affix semantic codes
//
// Reference lists distinguish senses of an identically-spelled affix with a
// trailing roman numeral ("пре II"). The decoder is positional only: it is
// not a validator, and malformed sequences decode by the same rule.

/// Value of a single roman glyph. Unrecognized characters count as 0.
fn glyph_value(c: char) -> i32 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Decode a roman numeral into an integer semantic code.
///
/// Scans right to left, subtracting a glyph that is strictly smaller than
/// the one to its right and adding it otherwise. The empty string decodes
/// to 0.
pub fn decode(s: &str) -> i32 {
    let mut total = 0;
    let mut prev = 0;
    for c in s.chars().rev() {
        let value = glyph_value(c);
        if value < prev {
            total -= value;
        } else {
            total += value;
        }
        prev = value;
    }
    total
}

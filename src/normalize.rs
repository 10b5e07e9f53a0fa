//! Canonicalization of quote and prime characters before parsing.
//!
//! Coordinates pasted from documents arrive with every flavour of minute and second mark. The
//! grammars only know `'` and `"`, so all variants are folded onto those two characters.

/// Glyphs written in place of a minute mark.
const MINUTE_CHARACTERS: &[char] = &[
    '\u{0060}', // Grave accent / backtick
    '\u{00B4}', // Acute accent
    '\u{02B9}', // Modifier letter prime
    '\u{02BC}', // Modifier letter apostrophe
    '\u{2018}', // Left single quotation mark
    '\u{2019}', // Right single quotation mark
    '\u{201B}', // Single high-reversed-9 quotation mark
    '\u{2032}', // Prime
    '\u{2035}', // Reversed prime
];

/// Glyphs written in place of a second mark.
const SECOND_CHARACTERS: &[char] = &[
    '\u{02BA}', // Modifier letter double prime
    '\u{02DD}', // Double acute accent
    '\u{201C}', // Left double quotation mark
    '\u{201D}', // Right double quotation mark
    '\u{201F}', // Double high-reversed-9 quotation mark
    '\u{2033}', // Double prime
    '\u{2036}', // Reversed double prime
];

/// Two backticks are the plain-text spelling of a double prime.
const DOUBLE_BACKTICK: &str = "``";

/// Trim `s` and replace every minute-mark variant with `'` and every second-mark variant with
/// `"`. No other character is altered, and normalizing twice gives the same result as once.
pub fn normalize(s: &str) -> String {
    s.trim()
        .replace(DOUBLE_BACKTICK, "\"")
        .chars()
        .map(|c| {
            if MINUTE_CHARACTERS.contains(&c) {
                '\''
            } else if SECOND_CHARACTERS.contains(&c) {
                '"'
            } else {
                c
            }
        })
        .collect()
}

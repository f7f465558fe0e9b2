//! Two-tier character case mapping.
//!
//! ASCII letters are shifted by a fixed offset without touching the Unicode
//! tables; every other character above the ASCII alphabet goes through the
//! Unicode simple (one-to-one) case mapping. `char::to_uppercase` and
//! `char::to_lowercase` apply the full mapping, which expands a few characters
//! into several; for those the simple mapping is looked up in a small table,
//! and a character with no simple mapping at all (e.g. `'ß'`) is returned
//! unchanged.

/// Distance between an ASCII lowercase letter and its uppercase form.
const ASCII_CASE_OFFSET: u8 = b'a' - b'A';

/// Upper-case a single character.
///
/// - `c < 'a'` is returned as is (this includes `'A'..='Z'` and punctuation).
/// - `'a'..='z'` is shifted down by the ASCII case offset.
/// - anything else uses the Unicode simple uppercase mapping.
pub fn to_upper_case(c: char) -> char {
    if c < 'a' {
        return c;
    }
    if c <= 'z' {
        return (c as u8 - ASCII_CASE_OFFSET) as char;
    }
    simple_upper_of_expanding(c)
        .or_else(|| single_char(c.to_uppercase()))
        .unwrap_or(c)
}

/// Lower-case a single character. Mirror image of [`to_upper_case`].
pub fn to_lower_case(c: char) -> char {
    if c < 'A' || c.is_ascii_lowercase() {
        return c;
    }
    if c <= 'Z' {
        return (c as u8 + ASCII_CASE_OFFSET) as char;
    }
    simple_lower_of_expanding(c)
        .or_else(|| single_char(c.to_lowercase()))
        .unwrap_or(c)
}

/// Case-insensitive equality of two characters.
///
/// Checks upper-cased forms and then lower-cased forms, since some scripts
/// only agree in one direction (Kelvin sign vs `'k'`, `'ϴ'` vs `'θ'`).
pub fn chars_equal_ignore_case(a: char, b: char) -> bool {
    a == b || to_upper_case(a) == to_upper_case(b) || to_lower_case(a) == to_lower_case(b)
}

/// Simple uppercase of the characters whose full uppercase expands.
///
/// Greek letters with iota subscript (ypogegrammeni) map to their
/// prosgegrammeni titlecase form; the titlecase forms themselves have no
/// simple uppercase and stay as they are.
fn simple_upper_of_expanding(c: char) -> Option<char> {
    match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)
        }
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => char::from_u32(c as u32 + 9),
        _ => None,
    }
}

/// Simple lowercase of the characters whose full lowercase expands.
fn simple_lower_of_expanding(c: char) -> Option<char> {
    match c {
        '\u{0130}' => Some('i'),
        _ => None,
    }
}

fn single_char(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    match mapping.next() {
        Some(_) => None,
        None => Some(first),
    }
}

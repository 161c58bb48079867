//! Kana detection, transliteration to romaji and casing helpers.

use wana_kana::ConvertJapanese;

/// The letters used by Hepburn romanization.
pub const HEPBURN_ALPHABET: &str = "abcdefghijkmnoprstuvwyz";

pub fn is_kana(c: char) -> bool {
    // Unicode Hiragana and Katakana blocks
    (0x3040..=0x30FF).contains(&(c as u32))
}

pub fn is_kana_str(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_kana)
}

pub fn is_hepburn_letter(c: char) -> bool {
    HEPBURN_ALPHABET.contains(c)
}

/// Converts a kana reading to lowercase romaji.
///
/// Katakana is folded into hiragana first so that long vowel marks are spelled out.
/// Syllable separators (`shin'ichi`) are dropped.
pub fn romanize(reading: &str) -> String {
    let hiragana = reading.to_hiragana();
    hiragana.to_romaji().replace('\'', "")
}

/// Uppercases the first character.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases every letter that does not follow another letter and lowercases the rest,
/// so `o'brien` becomes `O'Brien`.
///
/// Letters whose case mapping is not a single character (`ß` uppercases to `SS`) are kept
/// as they are, which keeps the result a fixed point of this function.
pub fn title_case(s: &str) -> String {
    let mut titled = String::with_capacity(s.len());
    let mut after_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            let mapped = if after_letter {
                single_char(c.to_lowercase())
            } else {
                single_char(c.to_uppercase())
            };
            titled.push(mapped.unwrap_or(c));
        } else {
            titled.push(c);
        }
        after_letter = c.is_alphabetic();
    }
    titled
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

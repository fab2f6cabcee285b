//! Character-level Unicode classification and reading normalization.

/// Delimiter between alternative readings in a furigana field (ひと、にん).
pub const READING_SEPARATOR: char = '、';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Convert hiragana to katakana. Other characters pass through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert katakana to hiragana. ー and katakana without a hiragana
/// counterpart (ヷ, ヺ, ...) pass through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Accepts hiragana plus the prolonged sound mark ー, as in "らーめん".
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

/// Split a furigana field on 、 into its readings, keeping only kana.
///
/// `"ひと、 人"` yields `["ひと"]`: the kanji part is dropped and the empty
/// remainder is skipped.
pub fn separate_readings(s: &str) -> Vec<String> {
    s.split(READING_SEPARATOR)
        .map(|part| part.chars().filter(|&c| is_kana(c)).collect::<String>())
        .filter(|reading| !reading.is_empty())
        .collect()
}

/// Compare two readings ignoring script and surrounding whitespace, so that
/// "カメラ" matches "かめら".
pub fn readings_match(a: &str, b: &str) -> bool {
    katakana_to_hiragana(a.trim()) == katakana_to_hiragana(b.trim())
}

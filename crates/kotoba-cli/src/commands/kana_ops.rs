use kotoba_engine::kana::{morph_consonant, morph_vowel, ConsonantRow, PhonemeTable, Vowel};
use kotoba_engine::unicode::{hiragana_to_katakana, katakana_to_hiragana, separate_readings};

use crate::format::pad;

/// One line per character: row and column, or why it is not classified.
pub fn format_classify(text: &str) -> String {
    let table = PhonemeTable::global();
    let mut out = String::new();
    for c in text.chars() {
        let cell = match table.classify(c) {
            Ok((row, vowel)) => format!("{}{vowel}", pad(&row.to_string(), 8)),
            Err(e) => format!("({e})"),
        };
        out.push_str(&format!("{c}  {cell}\n"));
    }
    out
}

pub fn classify_cmd(text: &str) {
    print!("{}", format_classify(text));
}

/// `target` is a consonant row label ("p", "b", ...) or, with `vowel`, a
/// vowel label ("a", "i", ...).
pub fn morph_cmd(mora: &str, target: &str, vowel: bool) {
    let mut chars = mora.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        eprintln!("Error: expected a single mora, got {mora:?}");
        std::process::exit(1);
    };
    let result = if vowel {
        let Some(v) = Vowel::from_label(target) else {
            eprintln!("Error: unknown vowel {target:?} (expected a, i, u, e or o)");
            std::process::exit(1);
        };
        morph_vowel(c, v)
    } else {
        let Some(row) = ConsonantRow::from_label(target) else {
            eprintln!("Error: unknown consonant row {target:?}");
            std::process::exit(1);
        };
        morph_consonant(c, row)
    };
    println!("{}", die!(result, "Error: {}"));
}

/// Kana readings of a furigana field, with both scripts per line.
pub fn format_readings(text: &str) -> String {
    separate_readings(text)
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\n",
                katakana_to_hiragana(r),
                hiragana_to_katakana(r)
            )
        })
        .collect()
}

pub fn readings_cmd(text: &str) {
    print!("{}", format_readings(text));
}

use std::collections::BTreeSet;
use std::path::Path;

use kotoba_engine::vocab::{
    parse_lesson_selection, VocabEntry, VocabList, Vocabulary, WordClass,
};

use crate::format::{column_width, pad};

pub(crate) fn load(path: &Path) -> VocabList {
    let list = die!(VocabList::open(path), "Error reading {}: {}", path.display());
    if list.skipped() > 0 {
        eprintln!("{}: skipped {} malformed rows", path.display(), list.skipped());
    }
    list
}

pub(crate) fn parse_class(label: &str) -> WordClass {
    WordClass::from_label(label).unwrap_or_else(|| {
        let known: Vec<&str> = WordClass::ALL.iter().map(|c| c.name()).collect();
        eprintln!("Error: unknown word class {label:?} (known: {})", known.join(", "));
        std::process::exit(1);
    })
}

pub(crate) fn parse_lessons_arg(lessons: Option<&str>) -> Option<BTreeSet<u32>> {
    lessons.map(|s| die!(parse_lesson_selection(s), "Error: {}"))
}

/// Entries in any of `lessons` (all when `None`) and of `class` (any when `None`),
/// in file order.
pub fn select<'a>(
    list: &'a VocabList,
    lessons: Option<&BTreeSet<u32>>,
    class: Option<WordClass>,
) -> Vec<&'a VocabEntry> {
    let pool = match lessons {
        Some(lessons) => list.in_lessons(lessons),
        None => list.entries().iter().collect(),
    };
    pool.into_iter()
        .filter(|e| class.map_or(true, |c| e.class == c))
        .collect()
}

pub fn vocab_cmd(file: &Path, lessons: Option<&str>, class: Option<&str>, json: bool) {
    let list = load(file);
    let lessons = parse_lessons_arg(lessons);
    let class = class.map(parse_class);
    let selected = select(&list, lessons.as_ref(), class);
    if json {
        let text = die!(serde_json::to_string_pretty(&selected), "Error: {}");
        println!("{text}");
    } else {
        print!("{}", format_entries(&selected));
    }
}

/// Aligned columns: kana, kanji, class label, English, lessons.
pub fn format_entries(entries: &[&VocabEntry]) -> String {
    let word_w = column_width(entries.iter().map(|e| e.word.as_str())) + 2;
    let kanji_w = column_width(entries.iter().filter_map(|e| e.kanji.as_deref())) + 2;
    let class_w = column_width(entries.iter().map(|e| e.class.label())) + 2;
    let english_w = column_width(entries.iter().map(|e| e.english.as_str())) + 2;

    let mut out = String::new();
    for e in entries {
        let lessons: Vec<String> = e.lessons.iter().map(|l| format!("L{l}")).collect();
        let line = format!(
            "{}{}{}{}{}",
            pad(&e.word, word_w),
            pad(e.kanji.as_deref().unwrap_or(""), kanji_w),
            pad(e.class.label(), class_w),
            pad(&e.english, english_w),
            lessons.join(",")
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "word\tkanji\tpos\tenglish\tlesson
がくせい\t学生\tn.\tstudent\t会L1
さむい\t寒い\tい-adj.\tcold\t会L10-II
いい\t\tい-adj.\tgood\t会L5
たべる\t食べる\tru-v.\tto eat\t会L3
";

    fn sample() -> VocabList {
        VocabList::from_tsv(SAMPLE).unwrap()
    }

    #[test]
    fn select_filters() {
        let list = sample();
        assert_eq!(select(&list, None, None).len(), 4);

        let adjectives = select(&list, None, Some(WordClass::IAdjective));
        let words: Vec<&str> = adjectives.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["さむい", "いい"]);

        let lessons = parse_lesson_selection("1,3").unwrap();
        let picked = select(&list, Some(&lessons), None);
        let words: Vec<&str> = picked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["がくせい", "たべる"]);

        assert!(select(&list, Some(&lessons), Some(WordClass::IAdjective)).is_empty());
    }

    #[test]
    fn format_aligns_columns() {
        let list = sample();
        let entries = select(&list, None, Some(WordClass::IAdjective));
        let text = format_entries(&entries);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "さむい  寒い  い-adj.  cold  L10");
        assert_eq!(lines[1], "いい          い-adj.  good  L5");
    }

    #[test]
    fn format_empty() {
        assert_eq!(format_entries(&[]), "");
    }
}

//! Textbook vocabulary model.
//!
//! `VocabList` holds the rows of a tab-separated vocabulary export and
//! implements [`Vocabulary`], the lookup interface the drills and the verb
//! conjugator bridge work against.

mod entry;
mod list;

pub use entry::{parse_lessons, VerbClass, VocabEntry, WordClass};
pub use list::VocabList;

use std::collections::BTreeSet;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("no usable vocabulary rows ({skipped} skipped)")]
    NoEntries { skipped: usize },
    #[error("invalid lesson selection {0:?}")]
    InvalidLessons(String),
}

pub trait Vocabulary {
    fn entries(&self) -> &[VocabEntry];

    /// Exact match on the kana spelling, falling back to the kanji spelling.
    fn by_word(&self, word: &str) -> Option<&VocabEntry> {
        let entries = self.entries();
        entries
            .iter()
            .find(|e| e.word == word)
            .or_else(|| entries.iter().find(|e| e.kanji.as_deref() == Some(word)))
    }

    /// Exact match on the English gloss as written in the textbook.
    fn by_english(&self, english: &str) -> Option<&VocabEntry> {
        self.entries().iter().find(|e| e.english == english)
    }

    fn verb_class(&self, word: &str) -> Option<VerbClass> {
        self.by_word(word).and_then(VocabEntry::verb_class)
    }

    fn of_class(&self, class: WordClass) -> Vec<&VocabEntry> {
        self.entries().iter().filter(|e| e.class == class).collect()
    }

    /// Entries belonging to any of `lessons`. Lesson numbers match exactly.
    fn in_lessons(&self, lessons: &BTreeSet<u32>) -> Vec<&VocabEntry> {
        self.entries()
            .iter()
            .filter(|e| e.lessons.iter().any(|l| lessons.contains(l)))
            .collect()
    }
}

/// Highest lesson number a selection may name.
pub const MAX_LESSON: u32 = 99;

/// Parse a lesson selection such as `"3-12"`, `"1,2"` or `"1,2,5-7"`.
/// Lessons run from 1 to [`MAX_LESSON`].
pub fn parse_lesson_selection(s: &str) -> Result<BTreeSet<u32>, VocabError> {
    let invalid = || VocabError::InvalidLessons(s.to_string());
    let mut lessons = BTreeSet::new();
    for part in s.split(',').map(str::trim) {
        match part.split_once('-') {
            Some((lo, hi)) => {
                let lo: u32 = lo.trim().parse().map_err(|_| invalid())?;
                let hi: u32 = hi.trim().parse().map_err(|_| invalid())?;
                if lo == 0 || lo > hi || hi > MAX_LESSON {
                    return Err(invalid());
                }
                lessons.extend(lo..=hi);
            }
            None => {
                let n: u32 = part.parse().map_err(|_| invalid())?;
                if n == 0 || n > MAX_LESSON {
                    return Err(invalid());
                }
                lessons.insert(n);
            }
        }
    }
    Ok(lessons)
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, debug_span, warn};

use super::entry::{parse_lessons, VocabEntry, WordClass};
use super::{VocabError, Vocabulary};

const FIELD_COUNT: usize = 5;

/// In-memory vocabulary loaded from a TSV export with the columns
/// `word`, `kanji`, `pos`, `english`, `lesson`.
#[derive(Debug, Clone, Default)]
pub struct VocabList {
    entries: Vec<VocabEntry>,
    by_word: HashMap<String, usize>,
    by_kanji: HashMap<String, usize>,
    by_english: HashMap<String, usize>,
    skipped: usize,
}

impl VocabList {
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        let mut list = Self::default();
        for entry in entries {
            list.push(entry);
        }
        list
    }

    /// Parse TSV text. Blank lines, `#` comments and a leading header row are
    /// ignored; malformed rows are logged and skipped.
    pub fn from_tsv(text: &str) -> Result<Self, VocabError> {
        let _span = debug_span!("vocab_from_tsv").entered();

        let mut list = Self::default();
        let mut first_row = true;
        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            if std::mem::take(&mut first_row) && line.split('\t').next().is_some_and(is_header) {
                continue;
            }
            match parse_row(line) {
                Ok(entry) => list.push(entry),
                Err(reason) => {
                    warn!(line = line_no, reason, "skipping vocabulary row");
                    list.skipped += 1;
                }
            }
        }

        if list.entries.is_empty() {
            return Err(VocabError::NoEntries {
                skipped: list.skipped,
            });
        }
        debug!(entries = list.entries.len(), skipped = list.skipped);
        Ok(list)
    }

    pub fn open(path: &Path) -> Result<Self, VocabError> {
        let text = fs::read_to_string(path)?;
        Self::from_tsv(&text)
    }

    /// Rows rejected while parsing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: VocabEntry) {
        let idx = self.entries.len();
        // First occurrence wins for every index.
        self.by_word.entry(entry.word.clone()).or_insert(idx);
        if let Some(kanji) = &entry.kanji {
            self.by_kanji.entry(kanji.clone()).or_insert(idx);
        }
        self.by_english.entry(entry.english.clone()).or_insert(idx);
        self.entries.push(entry);
    }
}

impl Vocabulary for VocabList {
    fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    fn by_word(&self, word: &str) -> Option<&VocabEntry> {
        self.by_word
            .get(word)
            .or_else(|| self.by_kanji.get(word))
            .map(|&idx| &self.entries[idx])
    }

    fn by_english(&self, english: &str) -> Option<&VocabEntry> {
        self.by_english.get(english).map(|&idx| &self.entries[idx])
    }
}

fn is_header(first_field: &str) -> bool {
    matches!(first_field.trim(), "word" | "単語")
}

fn parse_row(line: &str) -> Result<VocabEntry, &'static str> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err("expected 5 tab-separated fields");
    }
    let word = fields[0];
    if word.is_empty() {
        return Err("empty word");
    }
    let class = WordClass::from_label(fields[2]).ok_or("unknown part of speech")?;
    let english = fields[3];
    if english.is_empty() {
        return Err("empty english gloss");
    }
    let kanji = Some(fields[1])
        .filter(|k| !k.is_empty())
        .map(str::to_string);

    Ok(VocabEntry {
        word: word.to_string(),
        kanji,
        class,
        english: english.to_string(),
        lessons: parse_lessons(fields[4]),
    })
}

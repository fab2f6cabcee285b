use kotoba_core::settings::{settings, DrillSettings};
use kotoba_core::unicode::readings_match;

/// One question and every answer accepted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub prompt: String,
    pub answers: Vec<String>,
}

impl Card {
    pub fn new(prompt: impl Into<String>, answers: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }

    /// Script-insensitive match against any accepted answer.
    pub fn accepts(&self, input: &str) -> bool {
        let input = input.trim();
        !input.is_empty() && self.answers.iter().any(|a| readings_match(a, input))
    }

    /// The canonical answer shown after a miss.
    pub fn expected(&self) -> &str {
        self.answers.first().map(String::as_str).unwrap_or("")
    }
}

/// Outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// Wrong, but the same card stays up.
    Retry { attempts_left: usize },
    /// Out of attempts (or given up); the card goes to the review queue.
    Missed { expected: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillConfig {
    /// Every n-th prompt is taken from the review queue when it is not empty.
    pub review_every: usize,
    pub max_attempts: usize,
}

/// The configured `[drill]` settings.
impl Default for DrillConfig {
    fn default() -> Self {
        Self::from(&settings().drill)
    }
}

impl From<&DrillSettings> for DrillConfig {
    fn from(s: &DrillSettings) -> Self {
        Self {
            review_every: s.review_every,
            max_attempts: s.max_attempts,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrillStats {
    /// Prompts shown, reviews included.
    pub prompts: usize,
    pub correct: usize,
    pub missed: usize,
    /// Correct answers that needed no review and no retry.
    pub first_try: usize,
}

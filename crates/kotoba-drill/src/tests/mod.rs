
use super::{Card, DrillConfig, DrillSession};

/// Deck of `n` cards whose answers are "a0", "a1", ...
pub(super) fn numbered_deck(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("q{i}"), vec![format!("a{i}")]))
        .collect()
}

pub(super) fn session(n: usize, review_every: usize, max_attempts: usize) -> DrillSession {
    DrillSession::new(
        numbered_deck(n),
        DrillConfig {
            review_every,
            max_attempts,
        },
    )
    .unwrap()
}

/// Ask the next card and return its prompt.
pub(super) fn ask(session: &mut DrillSession) -> String {
    session.next_card().unwrap().prompt.clone()
}

/// The right answer for a prompt of `numbered_deck`.
pub(super) fn answer_for(prompt: &str) -> String {
    format!("a{}", &prompt[1..])
}

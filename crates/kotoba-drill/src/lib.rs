//! Flashcard drill session with a review queue for missed cards.
//!
//! `DrillSession` holds no I/O: the caller asks for the next card, shows the
//! prompt, and feeds the learner's answer back through [`DrillSession::answer`].

mod cards;
mod types;

#[cfg(test)]
mod tests;

use std::collections::VecDeque;

use kotoba_core::counter::CounterError;
use tracing::{debug, debug_span};

pub use cards::{conjugation_cards, counter_cards, te_form_cards};
pub use types::{Card, DrillConfig, DrillStats, Verdict};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrillError {
    #[error("deck is empty")]
    EmptyDeck,
    #[error("invalid drill config: {0}")]
    InvalidConfig(&'static str),
    #[error("no card is being asked")]
    NoActiveCard,
    #[error("counter card: {0}")]
    Counter(#[from] CounterError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Active {
    index: usize,
    from_review: bool,
    attempts: usize,
}

pub struct DrillSession {
    deck: Vec<Card>,
    config: DrillConfig,
    next_fresh: usize,
    /// Indices of missed cards, oldest first.
    review: VecDeque<usize>,
    active: Option<Active>,
    stats: DrillStats,
}

impl DrillSession {
    pub fn new(deck: Vec<Card>, config: DrillConfig) -> Result<Self, DrillError> {
        if deck.is_empty() {
            return Err(DrillError::EmptyDeck);
        }
        if config.review_every == 0 {
            return Err(DrillError::InvalidConfig("review_every must be positive"));
        }
        if config.max_attempts == 0 {
            return Err(DrillError::InvalidConfig("max_attempts must be positive"));
        }
        Ok(Self {
            deck,
            config,
            next_fresh: 0,
            review: VecDeque::new(),
            active: None,
            stats: DrillStats::default(),
        })
    }

    /// The card to ask now. Repeated calls return the same card until it is
    /// answered correctly or missed. `None` once the deck and the review
    /// queue are both exhausted.
    pub fn next_card(&mut self) -> Option<&Card> {
        if self.active.is_none() {
            let review_turn = (self.stats.prompts + 1) % self.config.review_every == 0;
            let fresh_left = self.next_fresh < self.deck.len();
            let (index, from_review) = if !self.review.is_empty() && (review_turn || !fresh_left)
            {
                (self.review.pop_front()?, true)
            } else if fresh_left {
                self.next_fresh += 1;
                (self.next_fresh - 1, false)
            } else {
                return None;
            };
            self.stats.prompts += 1;
            self.active = Some(Active {
                index,
                from_review,
                attempts: 0,
            });
            debug!(index, from_review, "card asked");
        }
        self.active.map(|a| &self.deck[a.index])
    }

    pub fn current(&self) -> Option<&Card> {
        self.active.map(|a| &self.deck[a.index])
    }

    /// Check `input` against the active card.
    pub fn answer(&mut self, input: &str) -> Result<Verdict, DrillError> {
        let _span = debug_span!("answer").entered();
        let mut active = self.active.ok_or(DrillError::NoActiveCard)?;
        let card = &self.deck[active.index];

        if card.accepts(input) {
            self.stats.correct += 1;
            if !active.from_review && active.attempts == 0 {
                self.stats.first_try += 1;
            }
            self.active = None;
            debug!(index = active.index, "correct");
            return Ok(Verdict::Correct);
        }

        active.attempts += 1;
        if active.attempts < self.config.max_attempts {
            self.active = Some(active);
            return Ok(Verdict::Retry {
                attempts_left: self.config.max_attempts - active.attempts,
            });
        }
        Ok(self.miss(active))
    }

    /// Reveal the answer and queue the active card for review.
    pub fn give_up(&mut self) -> Result<Verdict, DrillError> {
        let active = self.active.ok_or(DrillError::NoActiveCard)?;
        Ok(self.miss(active))
    }

    fn miss(&mut self, active: Active) -> Verdict {
        self.stats.missed += 1;
        self.review.push_back(active.index);
        self.active = None;
        debug!(index = active.index, queued = self.review.len(), "missed");
        Verdict::Missed {
            expected: self.deck[active.index].expected().to_string(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.active.is_none() && self.next_fresh >= self.deck.len() && self.review.is_empty()
    }

    pub fn stats(&self) -> DrillStats {
        self.stats
    }

    pub fn fresh_remaining(&self) -> usize {
        self.deck.len() - self.next_fresh
    }

    pub fn review_len(&self) -> usize {
        self.review.len()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }
}

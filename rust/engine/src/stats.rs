//! Derived statistics over a [`GameState`].
//!
//! Everything here is a pure read of the state: remaining counts, round pacing,
//! accuracy and the correct/incorrect pattern used for the shareable summary.

use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::rules::{self, CARDS_PER_ROUND, MAX_SKIPS};

/// Glyph for a card graded correct in the pattern string.
pub const CORRECT_GLYPH: &str = "🟪";
/// Glyph for a card graded incorrect in the pattern string.
pub const INCORRECT_GLYPH: &str = "⬜";

/// End-of-session numbers, everything a host needs to render or share results.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub correct: usize,
    pub incorrect: usize,
    /// `correct + incorrect`
    pub graded: usize,
    /// Rounded percentage in `0..=100`
    pub accuracy: u32,
    pub streak: u32,
    pub longest_streak: u32,
    pub round: u32,
    pub skips_used: u32,
    pub has_completed_cycle: bool,
    pub pattern: String,
}

impl GameState {
    /// Cards graded this cycle, correct or not.
    pub fn graded_count(&self) -> usize {
        self.correct_cards().len() + self.incorrect_cards().len()
    }

    /// Cards of the deck not graded yet; skipped cards still count as remaining.
    pub fn remaining_count(&self) -> usize {
        self.deck().len().saturating_sub(self.graded_count())
    }

    pub fn cards_left_in_round(&self) -> usize {
        rules::cards_left_in_round(self.cards_attempted_in_round(), self.remaining_count())
    }

    /// Percentage of graded cards that were correct, rounded half up.
    ///
    /// Zero when nothing has been graded, regardless of how many skips happened.
    ///
    /// # Examples
    ///
    /// ```
    /// use rojak_engine::cards::numbered_deck;
    /// use rojak_engine::game::GameState;
    ///
    /// let cards = numbered_deck([("A", "a"), ("B", "b"), ("C", "c")]);
    /// let s = GameState::with_deck_order(cards).unwrap();
    /// assert_eq!(s.accuracy(), 0);
    ///
    /// let s = s.handle_correct(0).unwrap().handle_incorrect(1).unwrap();
    /// let s = s.handle_correct(2).unwrap();
    /// assert_eq!(s.accuracy(), 67);
    /// ```
    pub fn accuracy(&self) -> u32 {
        let total = self.graded_count();
        if total == 0 {
            return 0;
        }
        let ratio = self.correct_cards().len() as f64 / total as f64;
        (ratio * 100.0 + 0.5).floor() as u32
    }

    /// Pattern of grades in current deck order using the default glyphs.
    pub fn pattern_string(&self) -> String {
        self.pattern_with(CORRECT_GLYPH, INCORRECT_GLYPH)
    }

    /// Walks the deck in its current order and emits one glyph per graded card.
    /// Cards that are only skipped or not yet played contribute nothing.
    pub fn pattern_with(&self, correct: &str, incorrect: &str) -> String {
        self.deck()
            .iter()
            .filter_map(|card| {
                if self.correct_cards().contains(&card.id) {
                    Some(correct)
                } else if self.incorrect_cards().contains(&card.id) {
                    Some(incorrect)
                } else {
                    None
                }
            })
            .collect()
    }

    /// True once every card of the deck is graded. Skips alone never get here.
    pub fn should_reset_deck(&self) -> bool {
        self.graded_count() == self.deck().len()
    }

    pub fn should_show_round_complete(&self) -> bool {
        self.cards_attempted_in_round() >= CARDS_PER_ROUND || self.remaining_count() == 0
    }

    pub fn skips_remaining(&self) -> u32 {
        rules::skips_remaining(self.skips_used())
    }

    /// True once the last allowed skip of this cycle has been used.
    pub fn is_out_of_skips(&self) -> bool {
        self.skips_used() >= MAX_SKIPS
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            correct: self.correct_cards().len(),
            incorrect: self.incorrect_cards().len(),
            graded: self.graded_count(),
            accuracy: self.accuracy(),
            streak: self.streak(),
            longest_streak: self.longest_streak(),
            round: self.current_round(),
            skips_used: self.skips_used(),
            has_completed_cycle: self.has_completed_cycle(),
            pattern: self.pattern_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::numbered_deck;
    use crate::game::GameState;

    fn state(n: usize) -> GameState {
        let cards = numbered_deck((0..n).map(|i| (format!("clue {i}"), format!("answer {i}"))));
        GameState::with_deck_order(cards).unwrap()
    }

    #[test]
    fn accuracy_rounds_half_up() {
        // 1 of 8 correct is exactly 12.5%
        let mut s = state(8).handle_correct(0).unwrap();
        for id in 1..8 {
            s = s.handle_incorrect(id).unwrap();
        }
        assert_eq!(s.accuracy(), 13);
    }

    #[test]
    fn accuracy_is_zero_with_only_skips() {
        let s = state(3).handle_skip(0).unwrap().handle_skip(1).unwrap();
        assert_eq!(s.accuracy(), 0);
    }

    #[test]
    fn pattern_follows_deck_order_after_skip() {
        // deck [0,1,2]: skip 0 -> [1,2,0], then grade 1 wrong, 2 right, 0 right
        let s = state(3).handle_skip(0).unwrap();
        let s = s.handle_incorrect(1).unwrap();
        let s = s.handle_correct(2).unwrap();
        assert_eq!(s.pattern_with("G", "x"), "xG");
        let s = s.handle_correct(0).unwrap();
        assert_eq!(s.pattern_with("G", "x"), "xGG");
    }

    #[test]
    fn cards_left_in_round_is_capped_by_remaining() {
        let s = state(4);
        assert_eq!(s.cards_left_in_round(), 4);
        let s = state(25);
        assert_eq!(s.cards_left_in_round(), 10);
    }

    #[test]
    fn summary_collects_counts() {
        let s = state(3).handle_correct(0).unwrap().handle_incorrect(1).unwrap();
        let summary = s.summary();
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.graded, 2);
        assert_eq!(summary.accuracy, 50);
        assert_eq!(summary.longest_streak, 1);
        assert_eq!(summary.pattern, "🟪⬜");
    }
}

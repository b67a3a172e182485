use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::deck::{defer_card, shuffle_cards};
use crate::errors::GameError;
use crate::rules::validate_skip;

/// A self-grading action the player can take on the current card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameAction {
    /// Player recalled the answer
    Correct,
    /// Player got it wrong
    Incorrect,
    /// Defer the card to the end of the deck without grading it
    Skip,
}

/// Snapshot of one play session.
///
/// A `GameState` is never mutated after construction. Every transition borrows the
/// current state and returns a fresh value, so older snapshots stay valid for
/// read-only displays. Only the newest state should be fed into the next transition;
/// the caller keeps that single value and replaces it after each action.
///
/// # Examples
///
/// ```
/// use rojak_engine::cards::numbered_deck;
/// use rojak_engine::game::GameState;
///
/// let cards = numbered_deck([("A", "a"), ("B", "b"), ("C", "c")]);
/// let state = GameState::with_deck_order(cards).unwrap();
///
/// let next = state.handle_correct(0).unwrap();
/// assert_eq!(next.streak(), 1);
/// assert_eq!(next.current_index(), 1);
/// // the previous snapshot is untouched
/// assert_eq!(state.current_index(), 0);
/// ```
///
/// States serialize for snapshots but can only be built through the
/// constructors and transitions:
///
/// ```compile_fail
/// let state: rojak_engine::game::GameState = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GameState {
    /// Current play order; skips move cards to the back
    deck: Vec<Card>,
    /// Position of the next unplayed card, `0..=deck.len()`
    current_index: usize,
    /// Ids graded correct this cycle
    correct_cards: BTreeSet<CardId>,
    /// Ids graded incorrect this cycle, disjoint from `correct_cards`
    incorrect_cards: BTreeSet<CardId>,
    /// Every skip this cycle in order, repeats allowed
    skipped_cards: Vec<CardId>,
    streak: u32,
    /// Best streak across all cycles of the session
    longest_streak: u32,
    has_completed_cycle: bool,
    skips_used: u32,
    /// 1-based round counter, keeps counting across cycles
    current_round: u32,
    cards_attempted_in_round: u32,
}

/// Starts a session with a shuffled copy of `cards`.
///
/// # Errors
///
/// Returns [`GameError::EmptyDeck`] when `cards` is empty.
pub fn initialize_game<R>(cards: &[Card], rng: &mut R) -> Result<GameState, GameError>
where
    R: Rng + ?Sized,
{
    GameState::new(cards, rng)
}

impl GameState {
    pub fn new<R>(cards: &[Card], rng: &mut R) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
    {
        if cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        Self::with_deck_order(shuffle_cards(cards, rng))
    }

    /// Starts a session that plays `deck` in exactly the given order.
    ///
    /// # Errors
    ///
    /// - [`GameError::EmptyDeck`] when `deck` is empty
    /// - [`GameError::DuplicateCardId`] when two cards share an id
    pub fn with_deck_order(deck: Vec<Card>) -> Result<Self, GameError> {
        if deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let mut seen = BTreeSet::new();
        if let Some(dup) = deck.iter().find(|card| !seen.insert(card.id)) {
            return Err(GameError::DuplicateCardId(dup.id));
        }
        Ok(Self {
            deck,
            current_index: 0,
            correct_cards: BTreeSet::new(),
            incorrect_cards: BTreeSet::new(),
            skipped_cards: Vec::new(),
            streak: 0,
            longest_streak: 0,
            has_completed_cycle: false,
            skips_used: 0,
            current_round: 1,
            cards_attempted_in_round: 0,
        })
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }
    pub fn current_index(&self) -> usize {
        self.current_index
    }
    pub fn correct_cards(&self) -> &BTreeSet<CardId> {
        &self.correct_cards
    }
    pub fn incorrect_cards(&self) -> &BTreeSet<CardId> {
        &self.incorrect_cards
    }
    pub fn skipped_cards(&self) -> &[CardId] {
        &self.skipped_cards
    }
    pub fn streak(&self) -> u32 {
        self.streak
    }
    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }
    pub fn has_completed_cycle(&self) -> bool {
        self.has_completed_cycle
    }
    pub fn skips_used(&self) -> u32 {
        self.skips_used
    }
    pub fn current_round(&self) -> u32 {
        self.current_round
    }
    pub fn cards_attempted_in_round(&self) -> u32 {
        self.cards_attempted_in_round
    }

    /// The card at `current_index`, or `None` once the deck is exhausted.
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.current_index)
    }

    /// Applies `action` to the card identified by `card_id`.
    pub fn apply(&self, action: GameAction, card_id: CardId) -> Result<Self, GameError> {
        match action {
            GameAction::Correct => self.handle_correct(card_id),
            GameAction::Incorrect => self.handle_incorrect(card_id),
            GameAction::Skip => self.handle_skip(card_id),
        }
    }

    pub fn handle_correct(&self, card_id: CardId) -> Result<Self, GameError> {
        self.expect_current(card_id)?;
        let mut next = self.clone();
        next.correct_cards.insert(card_id);
        next.current_index += 1;
        next.streak += 1;
        next.longest_streak = next.longest_streak.max(next.streak);
        next.cards_attempted_in_round += 1;
        tracing::debug!(
            card_id,
            streak = next.streak,
            longest = next.longest_streak,
            "card graded correct"
        );
        Ok(next)
    }

    pub fn handle_incorrect(&self, card_id: CardId) -> Result<Self, GameError> {
        self.expect_current(card_id)?;
        let mut next = self.clone();
        next.incorrect_cards.insert(card_id);
        next.current_index += 1;
        next.streak = 0;
        next.cards_attempted_in_round += 1;
        tracing::debug!(card_id, "card graded incorrect");
        Ok(next)
    }

    /// Sends the current card to the back of the deck without grading it.
    ///
    /// `current_index` stays put and now points at the following card. The streak
    /// is left alone. Skips are capped at [`crate::rules::MAX_SKIPS`] per cycle.
    ///
    /// # Errors
    ///
    /// - [`GameError::SkipLimitReached`] when every skip of this cycle is used
    /// - [`GameError::DeckExhausted`] / [`GameError::CardNotCurrent`] as for grading
    pub fn handle_skip(&self, card_id: CardId) -> Result<Self, GameError> {
        validate_skip(self.skips_used)?;
        self.expect_current(card_id)?;
        let deck = defer_card(&self.deck, self.current_index).ok_or(GameError::DeckExhausted)?;
        let mut next = self.clone();
        next.deck = deck;
        next.skipped_cards.push(card_id);
        next.skips_used += 1;
        next.cards_attempted_in_round += 1;
        tracing::debug!(card_id, skips_used = next.skips_used, "card skipped");
        Ok(next)
    }

    /// Opens the next round of the same cycle; only the round counters change.
    pub fn start_next_round(&self) -> Self {
        let mut next = self.clone();
        next.current_round += 1;
        next.cards_attempted_in_round = 0;
        tracing::debug!(round = next.current_round, "round started");
        next
    }

    /// Begins a new cycle with a fresh shuffle of `all_cards`.
    ///
    /// Grading history, skips and round progress start over. The longest streak
    /// carries across, the cycle is marked completed and the round counter keeps
    /// counting from the previous state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyDeck`] when `all_cards` is empty.
    pub fn reset_deck<R>(&self, all_cards: &[Card], rng: &mut R) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
    {
        let mut next = Self::new(all_cards, rng)?;
        next.longest_streak = self.longest_streak;
        next.has_completed_cycle = true;
        next.current_round = self.current_round + 1;
        tracing::debug!(
            round = next.current_round,
            longest = next.longest_streak,
            "deck reset for new cycle"
        );
        Ok(next)
    }

    fn expect_current(&self, card_id: CardId) -> Result<&Card, GameError> {
        let card = self.current_card().ok_or(GameError::DeckExhausted)?;
        if card.id != card_id {
            return Err(GameError::CardNotCurrent {
                expected: card.id,
                actual: card_id,
            });
        }
        // cards ahead of current_index have never been graded this cycle
        debug_assert!(
            !self.correct_cards.contains(&card_id) && !self.incorrect_cards.contains(&card_id)
        );
        Ok(card)
    }
}

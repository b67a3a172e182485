use thiserror::Error;

use crate::cards::CardId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot start a game with zero cards")]
    EmptyDeck,
    #[error("Card id {0} appears more than once in the deck")]
    DuplicateCardId(CardId),
    #[error("No card left to play in the current deck")]
    DeckExhausted,
    #[error("Card {actual} is not the current card (expected card {expected})")]
    CardNotCurrent { expected: CardId, actual: CardId },
    #[error("Skip limit reached ({limit} skips per cycle)")]
    SkipLimitReached { limit: u32 },
}

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a card in parse order, starting at 0.
pub type CardId = u32;

/// A single clue/answer pair.
/// Cards are created once at ingestion time and never change afterwards;
/// game state refers to them by [`CardId`] when recording grades.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Sequential identifier, unique within one parsed deck
    pub id: CardId,
    /// Two-part clue shown before the flip
    pub front: String,
    /// Fused answer revealed on the back
    pub back: String,
}

impl Card {
    pub fn new(id: CardId, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id,
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Builds a deck with ids assigned from 0 in the given order.
///
/// Mostly useful for tests and fixed demo decks where the clue text is known up front.
pub fn numbered_deck<I, F, B>(pairs: I) -> Vec<Card>
where
    I: IntoIterator<Item = (F, B)>,
    F: Into<String>,
    B: Into<String>,
{
    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (front, back))| Card::new(i as CardId, front, back))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_deck_assigns_sequential_ids() {
        let deck = numbered_deck([("a + b", "ab"), ("c + d", "cd"), ("e + f", "ef")]);
        let ids: Vec<CardId> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(deck[1].front, "c + d");
        assert_eq!(deck[1].back, "cd");
    }
}

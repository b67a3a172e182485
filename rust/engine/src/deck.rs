use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;

/// Creates the reproducible random source used for deck shuffles.
///
/// The same seed always yields the same sequence of shuffles, which is how
/// sessions are replayed and how tests pin a deck order.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Returns a uniformly random permutation of `cards`, leaving the input untouched.
///
/// # Examples
///
/// ```
/// use rojak_engine::cards::numbered_deck;
/// use rojak_engine::deck::{seeded_rng, shuffle_cards};
///
/// let cards = numbered_deck([("a", "1"), ("b", "2"), ("c", "3")]);
/// let first = shuffle_cards(&cards, &mut seeded_rng(7));
/// let second = shuffle_cards(&cards, &mut seeded_rng(7));
/// assert_eq!(first, second);
/// assert_eq!(first.len(), cards.len());
/// ```
pub fn shuffle_cards<R>(cards: &[Card], rng: &mut R) -> Vec<Card>
where
    R: Rng + ?Sized,
{
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Moves the card at `index` to the end of a copy of `deck`.
///
/// Every card after `index` shifts up by one, so `index` then points at what was
/// the next card. Returns `None` when `index` is out of range.
pub fn defer_card(deck: &[Card], index: usize) -> Option<Vec<Card>> {
    if index >= deck.len() {
        return None;
    }
    let mut reordered = deck.to_vec();
    let card = reordered.remove(index);
    reordered.push(card);
    Some(reordered)
}

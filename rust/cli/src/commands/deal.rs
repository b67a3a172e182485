//! Deal command: print the order a seed shuffles the deck into.

use super::{load_config, load_playable_cards, resolve_seed};
use crate::error::CliError;
use rojak_engine::deck::seeded_rng;
use rojak_engine::game::initialize_game;
use std::io::Write;

/// Handle the deal command.
///
/// Shuffles the card source exactly as `play` would for the same seed and lists
/// the resulting order, one `position. [id] clue` line per card.
pub fn handle_deal_command(
    cards: Option<String>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = resolve_seed(seed, &cfg);
    let path = cards.or(cfg.cards);
    let all_cards = load_playable_cards(path.as_deref(), err)?;

    let state = initialize_game(&all_cards, &mut seeded_rng(seed))?;
    writeln!(out, "deal: cards={} seed={}", all_cards.len(), seed)?;
    for (pos, card) in state.deck().iter().enumerate() {
        writeln!(out, "{:>3}. [{}] {}", pos + 1, card.id, card.front)?;
    }
    Ok(())
}

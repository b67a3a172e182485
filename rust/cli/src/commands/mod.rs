//! Command handler modules for the Rojak CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input readers passed in as parameters
//! - Errors propagated via `CliError`

mod cfg;
mod deal;
mod play;
mod rng;
mod verify;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use verify::handle_verify_command;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::io_utils::read_card_source;
use crate::ui;
use rojak_engine::cards::Card;
use rojak_engine::parser::parse_cards;
use std::io::Write;

fn load_config() -> Result<Config, CliError> {
    config::load().map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))
}

/// Command-line flag first, then configuration, then a fresh random seed.
fn resolve_seed(flag: Option<u64>, cfg: &Config) -> u64 {
    flag.or(cfg.seed).unwrap_or_else(rand::random)
}

/// Parses the selected card source, reporting every dropped line as a warning.
///
/// Fails when no card survives, since a session cannot start on an empty deck.
fn load_playable_cards(path: Option<&str>, err: &mut dyn Write) -> Result<Vec<Card>, CliError> {
    let text = read_card_source(path).map_err(CliError::InvalidInput)?;
    let parsed = parse_cards(&text);
    for warning in &parsed.warnings {
        ui::display_warning(err, &warning.to_string())?;
    }
    if parsed.cards.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no playable cards in {}",
            path.unwrap_or("bundled deck")
        )));
    }
    tracing::info!(cards = parsed.cards.len(), source = path.unwrap_or("bundled"), "cards loaded");
    Ok(parsed.cards)
}

//! Verify command: check a card file before playing it.

use super::load_config;
use crate::error::CliError;
use crate::io_utils::read_card_source;
use crate::ui;
use rojak_engine::parser::parse_cards;
use std::io::Write;

/// Handle the verify command.
///
/// Parses the card source and reports how many cards survive and every line
/// that was dropped. Fails when the file yields no playable card.
pub fn handle_verify_command(
    cards: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let path = cards.or(cfg.cards);
    let label = path.as_deref().unwrap_or("bundled deck").to_string();
    let text = read_card_source(path.as_deref()).map_err(CliError::InvalidInput)?;
    let parsed = parse_cards(&text);

    for warning in &parsed.warnings {
        ui::display_warning(err, &warning.to_string())?;
    }
    writeln!(
        out,
        "verify: {} cards={} dropped={}",
        label,
        parsed.cards.len(),
        parsed.warnings.len()
    )?;

    if parsed.cards.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no playable cards in {}",
            label
        )));
    }
    writeln!(out, "OK")?;
    Ok(())
}

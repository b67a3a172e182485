//! # Play Command
//!
//! Interactive flashcard session on stdin/stdout.
//!
//! The handler owns the one current [`GameState`] and replaces it after every
//! engine transition. Each card goes through two prompts: the clue (flip, skip
//! or quit) and the answer (grade yourself). Round boundaries offer to continue
//! or finish; a fully graded deck offers a new cycle. Using the last skip ends
//! the session, as does `q` or end of input. Every session ends by printing the
//! shareable results text.

use super::{load_config, load_playable_cards, resolve_seed};
use crate::error::CliError;
use crate::formatters::{
    Glyphs, format_deck_complete, format_round_summary, format_share_text, format_status,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, PlayerInput, parse_player_input};
use rojak_engine::cards::{Card, CardId};
use rojak_engine::deck::seeded_rng;
use rojak_engine::errors::GameError;
use rojak_engine::game::{GameAction, GameState, initialize_game};
use std::io::{BufRead, Write};

/// Where the session is between two pieces of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Clue,
    Answer,
    RoundComplete,
    DeckComplete,
    Results,
}

/// Handle the play command: interactive flashcard session
///
/// # Arguments
///
/// * `cards` - Card file path (default: configuration, then the bundled deck)
/// * `seed` - Shuffle seed (default: configuration, then random)
/// * `stdin` - Input stream for player choices
/// * `out` - Output stream for the game display
/// * `err` - Error stream for warnings and errors
///
/// # Returns
///
/// * `Ok(())` once the session ends, however it ends
/// * `Err(CliError)` if the card source is unusable or I/O fails
pub fn handle_play_command(
    cards: Option<String>,
    seed: Option<u64>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = resolve_seed(seed, &cfg);
    let path = cards.or(cfg.cards);
    let all_cards = load_playable_cards(path.as_deref(), err)?;

    execute_play_command(
        &all_cards,
        seed,
        Glyphs::for_terminal(cfg.unicode),
        stdin,
        out,
        err,
    )
}

/// Runs the session loop on an already loaded deck (module-private helper)
fn execute_play_command(
    all_cards: &[Card],
    seed: u64,
    glyphs: Glyphs,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut rng = seeded_rng(seed);
    let mut state = initialize_game(all_cards, &mut rng)?;
    tracing::info!(seed, cards = all_cards.len(), "session started");
    writeln!(out, "play: cards={} seed={}", all_cards.len(), seed)?;

    let mut phase = Phase::Clue;
    while phase != Phase::Results {
        phase = match phase {
            Phase::Clue => {
                let Some(card) = state.current_card() else {
                    // only reachable once every card is graded
                    break;
                };
                let card_id = card.id;
                writeln!(out)?;
                writeln!(out, "{}", format_status(&state))?;
                writeln!(out, "Clue: {}", card.front)?;
                match next_input(stdin, out, "[Enter] flip  [s] skip  [q] quit > ")? {
                    ParseResult::Input(PlayerInput::Flip) => Phase::Answer,
                    ParseResult::Input(PlayerInput::Skip) => {
                        let (next, phase) = skip_card(&state, card_id, out, err)?;
                        state = next;
                        phase
                    }
                    ParseResult::Quit => Phase::Results,
                    other => {
                        reject(err, other)?;
                        Phase::Clue
                    }
                }
            }
            Phase::Answer => {
                let Some(card) = state.current_card() else {
                    break;
                };
                let card_id = card.id;
                writeln!(out, "Answer: {}", card.back)?;
                let action = match next_input(stdin, out, "Did you get it? [y] yes  [n] no  [q] quit > ")? {
                    ParseResult::Input(PlayerInput::Correct) => Some(GameAction::Correct),
                    ParseResult::Input(PlayerInput::Incorrect) => Some(GameAction::Incorrect),
                    ParseResult::Quit => None,
                    other => {
                        reject(err, other)?;
                        continue;
                    }
                };
                match action {
                    Some(action) => {
                        state = state.apply(action, card_id)?;
                        if action == GameAction::Correct && state.streak() > 1 {
                            writeln!(out, "🔥 {} in a row!", state.streak())?;
                        }
                        after_attempt(&state)
                    }
                    None => Phase::Results,
                }
            }
            Phase::RoundComplete => {
                writeln!(out)?;
                writeln!(out, "{}", format_round_summary(&state))?;
                match next_input(stdin, out, "[c] next round  [f] finish > ")? {
                    ParseResult::Input(PlayerInput::Continue) => {
                        state = state.start_next_round();
                        Phase::Clue
                    }
                    ParseResult::Input(PlayerInput::Finish) | ParseResult::Quit => Phase::Results,
                    other => {
                        reject(err, other)?;
                        Phase::RoundComplete
                    }
                }
            }
            Phase::DeckComplete => {
                writeln!(out)?;
                writeln!(out, "{}", format_deck_complete(&state))?;
                match next_input(stdin, out, "[r] new cycle  [f] finish > ")? {
                    ParseResult::Input(PlayerInput::NewCycle) => {
                        state = state.reset_deck(all_cards, &mut rng)?;
                        tracing::info!(round = state.current_round(), "new cycle started");
                        writeln!(out, "Deck reshuffled. Here we go again!")?;
                        Phase::Clue
                    }
                    ParseResult::Input(PlayerInput::Finish) | ParseResult::Quit => Phase::Results,
                    other => {
                        reject(err, other)?;
                        Phase::DeckComplete
                    }
                }
            }
            Phase::Results => Phase::Results,
        };
    }

    writeln!(out)?;
    writeln!(out, "{}", format_share_text(&state, &glyphs))?;
    tracing::info!(
        accuracy = state.accuracy(),
        longest = state.longest_streak(),
        "session finished"
    );
    Ok(())
}

/// Which prompt follows a graded or skipped card.
/// Skips `card_id`; using the last skip, or trying one past the cap, ends the session.
fn skip_card(
    state: &GameState,
    card_id: CardId,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(GameState, Phase), CliError> {
    match state.handle_skip(card_id) {
        Ok(next) => {
            writeln!(out, "Skipped. {} skips left.", next.skips_remaining())?;
            if next.is_out_of_skips() {
                writeln!(out, "That was your last skip!")?;
                Ok((next, Phase::Results))
            } else {
                let phase = after_attempt(&next);
                Ok((next, phase))
            }
        }
        Err(GameError::SkipLimitReached { .. }) => {
            ui::display_warning(err, "No skips left, ending the session.")?;
            Ok((state.clone(), Phase::Results))
        }
        Err(e) => Err(e.into()),
    }
}

fn after_attempt(state: &GameState) -> Phase {
    if !state.should_show_round_complete() {
        Phase::Clue
    } else if state.remaining_count() == 0 {
        Phase::DeckComplete
    } else {
        Phase::RoundComplete
    }
}

/// Prompts and reads one line; end of input counts as quitting.
fn next_input(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &str,
) -> Result<ParseResult, CliError> {
    ui::prompt(out, prompt)?;
    Ok(match read_stdin_line(stdin) {
        Some(line) => parse_player_input(&line),
        None => {
            writeln!(out)?;
            ParseResult::Quit
        }
    })
}

fn reject(err: &mut dyn Write, parsed: ParseResult) -> Result<(), CliError> {
    match parsed {
        ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        ParseResult::Input(input) => {
            ui::write_error(err, &format!("'{}' is not available right now", input))?
        }
        ParseResult::Quit => {}
    }
    Ok(())
}

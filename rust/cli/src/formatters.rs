//! Text rendering of game state for the terminal.
//!
//! Pure functions from engine values to display strings: the status line,
//! round and deck summaries, and the shareable results text. The pattern glyphs
//! fall back to ASCII on terminals that cannot show emoji.
//!
//! ## Example
//!
//! ```rust
//! use rojak_cli::formatters::{format_share_text, Glyphs};
//! use rojak_engine::cards::numbered_deck;
//! use rojak_engine::game::GameState;
//!
//! let state = GameState::with_deck_order(numbered_deck([("A", "a"), ("B", "b")])).unwrap();
//! let state = state.handle_correct(0).unwrap().handle_incorrect(1).unwrap();
//!
//! let text = format_share_text(&state, &Glyphs::ASCII);
//! assert!(text.contains("1/2 correct • 50% accuracy"));
//! assert!(text.contains("Gx"));
//! ```

use rojak_engine::game::GameState;
use rojak_engine::rules::MAX_SKIPS;
use rojak_engine::stats::{CORRECT_GLYPH, INCORRECT_GLYPH};

/// Check if the terminal supports emoji by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Glyph pair used for the correct/incorrect pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub correct: &'static str,
    pub incorrect: &'static str,
}

impl Glyphs {
    pub const EMOJI: Glyphs = Glyphs {
        correct: CORRECT_GLYPH,
        incorrect: INCORRECT_GLYPH,
    };
    pub const ASCII: Glyphs = Glyphs {
        correct: "G",
        incorrect: "x",
    };

    pub fn for_terminal(unicode: bool) -> Glyphs {
        if unicode { Glyphs::EMOJI } else { Glyphs::ASCII }
    }
}

/// Header shown above every clue, e.g. `Round 2 — 7 cards left in this round`.
pub fn format_status(state: &GameState) -> String {
    let left = state.cards_left_in_round();
    format!(
        "Round {} — {} {} left in this round | streak {} | skips left {}/{}",
        state.current_round(),
        left,
        if left == 1 { "card" } else { "cards" },
        state.streak(),
        state.skips_remaining(),
        MAX_SKIPS
    )
}

pub fn format_round_summary(state: &GameState) -> String {
    format!(
        "Round {} complete!\nCards attempted: {}\nRunning accuracy: {}%\n🔥 Current streak: {}",
        state.current_round(),
        state.cards_attempted_in_round(),
        state.accuracy(),
        state.streak()
    )
}

pub fn format_deck_complete(state: &GameState) -> String {
    let summary = state.summary();
    format!(
        "Deck complete! All {} cards graded.\nFinal accuracy: {}%\n🔥 Longest streak: {}",
        summary.graded, summary.accuracy, summary.longest_streak
    )
}

/// Shareable results text built from the engine's summary values.
pub fn format_share_text(state: &GameState, glyphs: &Glyphs) -> String {
    let summary = state.summary();
    let pattern = state.pattern_with(glyphs.correct, glyphs.incorrect);
    format!(
        "Rojak Results 🥗✨\n{}/{} correct • {}% accuracy\n🔥 Longest streak: {}\n\nMy mix today:\n{}\n\nTry beating my Rojak 😤",
        summary.correct, summary.graded, summary.accuracy, summary.longest_streak, pattern
    )
}

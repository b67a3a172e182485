//! Input parsing for the interactive `play` command.
//!
//! Every prompt goes through [`parse_player_input`]; the play loop then decides
//! whether the parsed input makes sense at that point of the session.

use std::fmt;

/// Something the player can type at a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Reveal the answer (empty line or `flip`)
    Flip,
    Correct,
    Incorrect,
    Skip,
    /// Continue to the next round
    Continue,
    /// Start a new cycle with a reshuffled deck
    NewCycle,
    /// Stop and show final results
    Finish,
}

impl fmt::Display for PlayerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerInput::Flip => "flip",
            PlayerInput::Correct => "correct",
            PlayerInput::Incorrect => "incorrect",
            PlayerInput::Skip => "skip",
            PlayerInput::Continue => "continue",
            PlayerInput::NewCycle => "new cycle",
            PlayerInput::Finish => "finish",
        };
        write!(f, "{}", s)
    }
}

/// Result type for parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Input(PlayerInput),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one line of player input (case-insensitive).
///
/// - empty line or `flip` → Flip
/// - `y`, `yes`, `correct` → Correct
/// - `n`, `no`, `incorrect`, `wrong` → Incorrect
/// - `s`, `skip` → Skip
/// - `c`, `continue` → Continue
/// - `r`, `restart`, `new` → NewCycle
/// - `f`, `finish`, `done` → Finish
/// - `q`, `quit` → Quit
///
/// # Example
///
/// ```rust
/// # use rojak_cli::validation::{parse_player_input, ParseResult, PlayerInput};
/// assert_eq!(parse_player_input(""), ParseResult::Input(PlayerInput::Flip));
/// assert_eq!(parse_player_input("Y"), ParseResult::Input(PlayerInput::Correct));
/// assert_eq!(parse_player_input("q"), ParseResult::Quit);
///
/// match parse_player_input("maybe") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" | "flip" => ParseResult::Input(PlayerInput::Flip),
        "y" | "yes" | "correct" => ParseResult::Input(PlayerInput::Correct),
        "n" | "no" | "incorrect" | "wrong" => ParseResult::Input(PlayerInput::Incorrect),
        "s" | "skip" => ParseResult::Input(PlayerInput::Skip),
        "c" | "continue" => ParseResult::Input(PlayerInput::Continue),
        "r" | "restart" | "new" => ParseResult::Input(PlayerInput::NewCycle),
        "f" | "finish" | "done" => ParseResult::Input(PlayerInput::Finish),
        "q" | "quit" => ParseResult::Quit,
        other => ParseResult::Invalid(format!("Unrecognized input '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grading_aliases() {
        for s in ["y", "yes", "correct", "CORRECT"] {
            assert_eq!(parse_player_input(s), ParseResult::Input(PlayerInput::Correct));
        }
        for s in ["n", "no", "wrong", "Incorrect"] {
            assert_eq!(parse_player_input(s), ParseResult::Input(PlayerInput::Incorrect));
        }
    }

    #[test]
    fn test_whitespace_only_is_flip() {
        assert_eq!(parse_player_input("   "), ParseResult::Input(PlayerInput::Flip));
    }

    #[test]
    fn test_lifecycle_inputs() {
        assert_eq!(parse_player_input("c"), ParseResult::Input(PlayerInput::Continue));
        assert_eq!(parse_player_input("r"), ParseResult::Input(PlayerInput::NewCycle));
        assert_eq!(parse_player_input("done"), ParseResult::Input(PlayerInput::Finish));
        assert_eq!(parse_player_input("quit"), ParseResult::Quit);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PlayerInput::NewCycle.to_string(), "new cycle");
    }
}

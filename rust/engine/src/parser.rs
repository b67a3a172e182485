//! Card file ingestion.
//!
//! Reads the two-column `front,back` text format: a header line followed by one
//! card per line. Only the first comma splits a line, so answers may contain commas.
//! Bad lines are dropped with a warning and parsing carries on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Lines at least this long that lack a comma are assumed to be stray markup.
const NOISE_LINE_LEN: usize = 100;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum WarningReason {
    /// Input contained nothing but whitespace
    EmptyInput,
    /// Line has no comma separating clue and answer
    MissingDelimiter,
    /// Clue text is empty after trimming
    EmptyFront,
    /// Answer text is empty after trimming
    EmptyBack,
}

/// One discarded record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 0-based line index in the trimmed input, the header being line 0
    pub line: usize,
    pub reason: WarningReason,
    /// Offending line text, trimmed
    pub text: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            WarningReason::EmptyInput => write!(f, "input has no card data"),
            WarningReason::MissingDelimiter => {
                write!(f, "line {} has no comma: {}", self.line, self.text)
            }
            WarningReason::EmptyFront => write!(f, "line {} has an empty clue", self.line),
            WarningReason::EmptyBack => write!(f, "line {} has an empty answer", self.line),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParsedDeck {
    pub cards: Vec<Card>,
    pub warnings: Vec<ParseWarning>,
}

/// Parses card text into cards with sequential ids.
///
/// # Examples
///
/// ```
/// use rojak_engine::parser::parse_cards;
///
/// let text = "front,back\nFast food + President,McDonald Trump\nbroken line\n";
/// let parsed = parse_cards(text);
/// assert_eq!(parsed.cards.len(), 1);
/// assert_eq!(parsed.cards[0].id, 0);
/// assert_eq!(parsed.cards[0].back, "McDonald Trump");
/// assert_eq!(parsed.warnings.len(), 1);
/// ```
pub fn parse_cards(text: &str) -> ParsedDeck {
    let mut parsed = ParsedDeck::default();
    let text = text.trim();
    if text.is_empty() {
        let warning = ParseWarning {
            line: 0,
            reason: WarningReason::EmptyInput,
            text: String::new(),
        };
        tracing::warn!("{}", warning);
        parsed.warnings.push(warning);
        return parsed;
    }

    // skip header
    for (i, raw) in text.split('\n').enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line, parsed.cards.len() as CardId) {
            Ok(card) => parsed.cards.push(card),
            Err(reason) => {
                let quiet = reason == WarningReason::MissingDelimiter
                    && (line.starts_with('<') || line.chars().count() >= NOISE_LINE_LEN);
                let warning = ParseWarning {
                    line: i,
                    reason,
                    text: line.to_string(),
                };
                if !quiet {
                    tracing::warn!("{}", warning);
                    parsed.warnings.push(warning);
                }
            }
        }
    }

    tracing::debug!(cards = parsed.cards.len(), "card file parsed");
    parsed
}

fn parse_line(line: &str, id: CardId) -> Result<Card, WarningReason> {
    let (front, back) = line
        .split_once(',')
        .ok_or(WarningReason::MissingDelimiter)?;
    let front = front.trim();
    let back = back.trim();
    if front.is_empty() {
        return Err(WarningReason::EmptyFront);
    }
    if back.is_empty() {
        return Err(WarningReason::EmptyBack);
    }
    Ok(Card::new(id, front, back))
}

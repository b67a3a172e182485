use crate::errors::GameError;

/// Number of attempted cards (correct, incorrect or skipped) that make up one round.
pub const CARDS_PER_ROUND: u32 = 10;

/// Skips allowed per cycle before the session has to end.
pub const MAX_SKIPS: u32 = 3;

/// Checks whether one more skip is allowed after `skips_used` skips this cycle.
///
/// # Errors
///
/// Returns [`GameError::SkipLimitReached`] once `skips_used` has reached [`MAX_SKIPS`].
///
/// # Examples
///
/// ```
/// use rojak_engine::rules::{validate_skip, MAX_SKIPS};
/// use rojak_engine::errors::GameError;
///
/// assert!(validate_skip(0).is_ok());
/// assert!(validate_skip(MAX_SKIPS - 1).is_ok());
/// assert!(matches!(
///     validate_skip(MAX_SKIPS),
///     Err(GameError::SkipLimitReached { limit: 3 })
/// ));
/// ```
pub fn validate_skip(skips_used: u32) -> Result<(), GameError> {
    if skips_used >= MAX_SKIPS {
        Err(GameError::SkipLimitReached { limit: MAX_SKIPS })
    } else {
        Ok(())
    }
}

pub fn skips_remaining(skips_used: u32) -> u32 {
    MAX_SKIPS.saturating_sub(skips_used)
}

/// Cards still available in the current round, never more than `remaining` in the deck.
pub fn cards_left_in_round(attempted_in_round: u32, remaining: usize) -> usize {
    let left_in_round = CARDS_PER_ROUND.saturating_sub(attempted_in_round) as usize;
    left_in_round.min(remaining)
}

//! Error types for the probability engine.

use crate::validate::ValidationIssue;

/// Errors that can occur while evaluating a battle.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    /// A percentage input fell outside its allowed range.
    #[error("{field} must be between 0 and {max}, got {value}")]
    InvalidRange {
        /// Name of the offending field (e.g. "player hit").
        field: String,
        /// The value that was supplied.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },

    /// Neither side can ever land a damaging hit.
    #[error("this battle will never end")]
    NeverEndingBattle,

    /// A rational division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The outcome table for this fight would be too large to fill.
    #[error(
        "battle too long to evaluate: {m} x {n} hits exceeds the limit of {} table cells",
        crate::table::MAX_CELLS
    )]
    TableTooLarge {
        /// Hits the enemy needs against the player.
        m: u32,
        /// Hits the player needs against the enemy.
        n: u32,
    },

    /// Required hits were requested against a side that deals no damage.
    #[error("required hits are undefined for zero damage")]
    ZeroDamage,

    /// A ruleset name could not be parsed.
    #[error("unknown ruleset: {0}")]
    UnknownRuleset(String),

    /// A game title is not in the catalogue.
    #[error("unknown game: {0}")]
    UnknownGame(String),

    /// A follow-up mode could not be parsed.
    #[error("unknown follow-up mode: {0}")]
    UnknownFollowUp(String),

    /// Battle input failed validation.
    #[error("{}", render_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

/// Convenience result type for engine operations.
pub type ArenaResult<T> = Result<T, ArenaError>;

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

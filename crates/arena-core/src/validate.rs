//! Validation of raw battle input.
//!
//! Raw input comes from flags or a JSON file and may be incomplete or out of
//! range. [`BattleInput::resolve`] checks every field, fills the optional
//! ones with their defaults, and either returns a [`Battle`] ready for the
//! engine or every problem it found at once.

use serde::Deserialize;

use crate::battle::{Battle, Combatant, FollowUp, MAX_PERCENT, Ruleset};
use crate::error::{ArenaError, ArenaResult};
use crate::games::find_game;

/// Hit rate assumed when none is given.
pub const DEFAULT_HIT: u32 = 100;

/// Crit rate assumed when none is given.
pub const DEFAULT_CRIT: u32 = 0;

/// A warning or error found while validating input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The field the issue is about (e.g. "enemy hp").
    pub field: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    /// An issue that prevents the battle from being evaluated.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            is_error: true,
        }
    }

    /// An issue worth reporting that does not stop evaluation.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.field, self.message)
    }
}

/// Raw stats for one side. Every field may be missing or out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CombatantInput {
    /// Displayed hit rate. Defaults to 100.
    pub hit: Option<i64>,
    /// Damage per strike. Required.
    pub damage: Option<i64>,
    /// Crit rate. Defaults to 0.
    pub crit: Option<i64>,
    /// Starting HP. Required.
    pub hp: Option<i64>,
}

/// Raw input for a whole battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BattleInput {
    /// The player's stats.
    pub player: CombatantInput,
    /// The enemy's stats.
    pub enemy: CombatantInput,
    /// Ruleset, if chosen directly.
    pub ruleset: Option<Ruleset>,
    /// Game title, used to pick the ruleset when `ruleset` is absent.
    pub game: Option<String>,
    /// Follow-up mode.
    pub follow_up: FollowUp,
}

/// A battle that passed validation, plus any warnings raised on the way.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// The battle, ready for the engine.
    pub battle: Battle,
    /// Defaults that were filled in.
    pub warnings: Vec<ValidationIssue>,
}

impl BattleInput {
    /// Validate the input and fill defaults.
    ///
    /// Fails with [`ArenaError::Invalid`] listing every error found.
    pub fn resolve(&self) -> ArenaResult<Resolved> {
        let mut issues = Vec::new();

        let ruleset = self.resolve_ruleset(&mut issues);
        let player = resolve_side("player", &self.player, &mut issues);
        let enemy = resolve_side("enemy", &self.enemy, &mut issues);

        let (Some(ruleset), Some(player), Some(enemy)) = (ruleset, player, enemy) else {
            return Err(ArenaError::Invalid(errors_only(issues)));
        };

        if player.is_harmless() && enemy.is_harmless() {
            issues.push(ValidationIssue::error("battle", "this battle will never end"));
            return Err(ArenaError::Invalid(errors_only(issues)));
        }

        let battle = Battle::new(player, enemy)
            .with_ruleset(ruleset)
            .with_follow_up(self.follow_up);
        Ok(Resolved {
            battle,
            warnings: issues,
        })
    }

    fn resolve_ruleset(&self, issues: &mut Vec<ValidationIssue>) -> Option<Ruleset> {
        if let Some(ruleset) = self.ruleset {
            return Some(ruleset);
        }
        match self.game.as_deref() {
            Some(title) => match find_game(title) {
                Ok(game) => Some(game.ruleset),
                Err(e) => {
                    issues.push(ValidationIssue::error("game", e.to_string()));
                    None
                }
            },
            None => {
                issues.push(ValidationIssue::error(
                    "ruleset",
                    "select a game or a ruleset",
                ));
                None
            }
        }
    }
}

fn errors_only(issues: Vec<ValidationIssue>) -> Vec<ValidationIssue> {
    issues.into_iter().filter(|i| i.is_error).collect()
}

/// Validate one side. Returns `None` if any of its fields is an error.
fn resolve_side(
    side: &str,
    input: &CombatantInput,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Combatant> {
    let hit = percentage(side, "hit", input.hit, DEFAULT_HIT, issues);
    let crit = percentage(side, "crit", input.crit, DEFAULT_CRIT, issues);
    let damage = non_negative(side, "damage", input.damage, issues);
    let hp = non_negative(side, "hp", input.hp, issues);
    Some(Combatant::new(hit?, damage?, crit?, hp?))
}

fn percentage(
    side: &str,
    name: &str,
    value: Option<i64>,
    default: u32,
    issues: &mut Vec<ValidationIssue>,
) -> Option<u32> {
    let field = format!("{side} {name}");
    match value {
        None => {
            issues.push(ValidationIssue::warning(
                field,
                format!("missing, defaulted to {default}"),
            ));
            Some(default)
        }
        Some(v) => match u32::try_from(v) {
            Ok(v) if v <= MAX_PERCENT => Some(v),
            _ => {
                issues.push(ValidationIssue::error(
                    field,
                    format!("must be between 0 and {MAX_PERCENT}, got {v}"),
                ));
                None
            }
        },
    }
}

fn non_negative(
    side: &str,
    name: &str,
    value: Option<i64>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<u32> {
    let field = format!("{side} {name}");
    let Some(v) = value else {
        issues.push(ValidationIssue::error(field, "is required"));
        return None;
    };
    match u32::try_from(v) {
        Ok(v) => Some(v),
        Err(_) if v < 0 => {
            issues.push(ValidationIssue::error(
                field,
                format!("must not be negative, got {v}"),
            ));
            None
        }
        Err(_) => {
            issues.push(ValidationIssue::error(field, format!("is too large: {v}")));
            None
        }
    }
}

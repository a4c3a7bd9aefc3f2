//! Exact win probabilities for Fire Emblem arena battles.
//!
//! Two combatants trade strikes until one falls. Given each side's hit,
//! damage, crit and HP, the game's true-hit formula, and which side (if
//! either) strikes twice, this crate computes the probability that the
//! player wins as an exact fraction.
//!
//! ```
//! use arena_core::{Battle, Combatant, FollowUp, Ruleset, win_probability};
//!
//! let battle = Battle::new(Combatant::new(85, 12, 5, 38), Combatant::new(70, 9, 0, 34))
//!     .with_ruleset(Ruleset::TwoRn)
//!     .with_follow_up(FollowUp::Player);
//! let win = win_probability(&battle).unwrap();
//! assert!(win.percent() > 50.0);
//! ```

pub mod battle;
pub mod engine;
pub mod error;
pub mod games;
pub mod rational;
pub mod required_hits;
pub mod table;
pub mod true_hit;
pub mod validate;

pub use battle::{Battle, Combatant, FollowUp, MAX_PERCENT, Ruleset};
pub use engine::{HitOdds, WinProbability, solve, win_probability};
pub use error::{ArenaError, ArenaResult};
pub use games::{GAMES, Game, find_game, games_using};
pub use rational::Rational;
pub use required_hits::required_hits;
pub use table::{MAX_CELLS, OutcomeTable};
pub use true_hit::true_hit;
pub use validate::{BattleInput, CombatantInput, Resolved, ValidationIssue};

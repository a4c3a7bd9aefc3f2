//! Battle configuration: combatants, ruleset, and follow-up mode.
//!
//! A [`Battle`] is plain data. Construct it with [`Battle::new`] and the
//! `with_*` builders, or deserialize it from JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// Highest accepted value for hit and crit percentages.
pub const MAX_PERCENT: u32 = 100;

/// One side of the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Displayed hit rate, 0-100.
    pub hit: u32,
    /// Damage dealt by each strike.
    pub damage: u32,
    /// Critical hit rate, 0-100.
    pub crit: u32,
    /// Hit points at the start of the battle.
    pub hp: u32,
}

impl Combatant {
    /// Create a combatant from its four stats.
    pub fn new(hit: u32, damage: u32, crit: u32, hp: u32) -> Self {
        Self {
            hit,
            damage,
            crit,
            hp,
        }
    }

    /// Returns true if this side can never land a damaging strike.
    pub fn is_harmless(&self) -> bool {
        self.hit == 0 || self.damage == 0
    }
}

/// Which true-hit formula the game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    /// One random number: displayed hit is the true hit.
    #[default]
    OneRn,
    /// Two random numbers averaged (GBA through Awakening).
    TwoRn,
    /// Fates: 1RN below 50 displayed hit, weighted 2RN from 50 up.
    HybridTwoRn,
}

impl Ruleset {
    /// All rulesets, in catalogue order.
    pub const ALL: [Ruleset; 3] = [Ruleset::OneRn, Ruleset::TwoRn, Ruleset::HybridTwoRn];

    /// Short name accepted by [`Ruleset::from_str`].
    pub fn short_name(self) -> &'static str {
        match self {
            Self::OneRn => "1rn",
            Self::TwoRn => "2rn",
            Self::HybridTwoRn => "hybrid",
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneRn => write!(f, "1RN"),
            Self::TwoRn => write!(f, "2RN"),
            Self::HybridTwoRn => write!(f, "Hybrid 2RN"),
        }
    }
}

impl FromStr for Ruleset {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1rn" | "one_rn" | "onern" => Ok(Self::OneRn),
            "2rn" | "two_rn" | "tworn" => Ok(Self::TwoRn),
            "hybrid" | "hybrid_two_rn" | "fates" => Ok(Self::HybridTwoRn),
            other => Err(ArenaError::UnknownRuleset(other.to_string())),
        }
    }
}

/// Which side, if either, strikes twice per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    /// Each side strikes once.
    #[default]
    Neither,
    /// The player strikes twice.
    Player,
    /// The enemy strikes twice.
    Enemy,
}

impl FollowUp {
    /// The same mode seen from the other side of the table.
    pub fn swapped(self) -> Self {
        match self {
            Self::Neither => Self::Neither,
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

impl fmt::Display for FollowUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neither => write!(f, "neither"),
            Self::Player => write!(f, "player"),
            Self::Enemy => write!(f, "enemy"),
        }
    }
}

impl FromStr for FollowUp {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neither" | "none" => Ok(Self::Neither),
            "player" => Ok(Self::Player),
            "enemy" => Ok(Self::Enemy),
            other => Err(ArenaError::UnknownFollowUp(other.to_string())),
        }
    }
}

/// A complete, validated description of one arena exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    /// The side whose victory probability is computed.
    pub player: Combatant,
    /// The opposing side.
    pub enemy: Combatant,
    /// True-hit formula for both sides.
    #[serde(default)]
    pub ruleset: Ruleset,
    /// Follow-up configuration.
    #[serde(default)]
    pub follow_up: FollowUp,
}

impl Battle {
    /// A 1RN battle with no follow-up attacks.
    pub fn new(player: Combatant, enemy: Combatant) -> Self {
        Self {
            player,
            enemy,
            ruleset: Ruleset::default(),
            follow_up: FollowUp::default(),
        }
    }

    /// Set the ruleset.
    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Set the follow-up mode.
    pub fn with_follow_up(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = follow_up;
        self
    }

    /// The same battle with the two sides exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            player: self.enemy,
            enemy: self.player,
            ruleset: self.ruleset,
            follow_up: self.follow_up.swapped(),
        }
    }
}

//! Exact win probability via dynamic programming.
//!
//! A round is the player's strike, the enemy's counter, then the follow-up
//! strike if either side is fast enough. Each recurrence variant fills an
//! [`OutcomeTable`] bottom-up: a cell is the probability-weighted sum over
//! every joint outcome of one round, divided by the probability that the
//! round changes anything at all. Rounds where every strike misses leave the
//! state unchanged, so folding them out is a geometric series.
//!
//! - [`symmetric`]: one strike each
//! - [`enemy_double`]: the enemy strikes twice
//! - [`player_double`]: the player strikes twice

pub mod enemy_double;
pub mod player_double;
pub mod symmetric;

use std::fmt;

use num::BigInt;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, trace};

use crate::battle::{Battle, Combatant, FollowUp, MAX_PERCENT, Ruleset};
use crate::error::{ArenaError, ArenaResult};
use crate::rational::Rational;
use crate::required_hits::required_hits;
use crate::table::OutcomeTable;
use crate::true_hit::true_hit;

/// True hit and crit probabilities for both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct HitOdds {
    /// Player true hit rate.
    pub p1: Rational,
    /// Enemy true hit rate.
    pub p2: Rational,
    /// Player crit rate.
    pub c1: Rational,
    /// Enemy crit rate.
    pub c2: Rational,
}

impl HitOdds {
    /// Convert displayed stats into probabilities under `ruleset`.
    pub fn new(player: &Combatant, enemy: &Combatant, ruleset: Ruleset) -> ArenaResult<Self> {
        Ok(Self {
            p1: true_hit(player.hit, ruleset)?,
            p2: true_hit(enemy.hit, ruleset)?,
            c1: crit_rate(player.crit)?,
            c2: crit_rate(enemy.crit)?,
        })
    }
}

fn crit_rate(crit: u32) -> ArenaResult<Rational> {
    if crit > MAX_PERCENT {
        return Err(ArenaError::InvalidRange {
            field: "crit".to_string(),
            value: crit,
            max: MAX_PERCENT,
        });
    }
    Ok(Rational::new(i64::from(crit), 100))
}

/// One joint outcome of a round: its probability and how many normal-hit
/// equivalents it takes off each side.
#[derive(Debug, Clone)]
pub(crate) struct Branch {
    pub weight: Rational,
    pub on_player: isize,
    pub on_enemy: isize,
}

impl Branch {
    pub(crate) fn new(weight: Rational, on_player: isize, on_enemy: isize) -> Self {
        Self {
            weight,
            on_player,
            on_enemy,
        }
    }

    /// This branch's contribution to cell `(i, j)`.
    pub(crate) fn contribution(&self, table: &OutcomeTable, i: isize, j: isize) -> Rational {
        &self.weight * table.get(i - self.on_player, j - self.on_enemy)
    }
}

/// Product of a list of factors.
pub(crate) fn product(factors: &[&Rational]) -> Rational {
    factors
        .iter()
        .fold(Rational::one(), |acc, factor| &acc * *factor)
}

/// Fill every interior cell of `table` in increasing `i` then `j`.
///
/// `cell` returns the unnormalised sum for `(i, j)`; it may only read cells
/// that are already final.
pub(crate) fn fill<F>(table: &mut OutcomeTable, normaliser: &Rational, cell: F) -> ArenaResult<()>
where
    F: Fn(&OutcomeTable, isize, isize) -> Rational,
{
    let (m, n) = (table.m(), table.n());
    for i in 1..=m {
        for j in 1..=n {
            let sum = cell(&*table, i as isize, j as isize);
            let value = sum.checked_div(normaliser)?;
            table.set(i, j, value);
        }
        trace!(row = i, "outcome row filled");
    }
    Ok(())
}

/// Build and fill the outcome table for `m` hits on the player and `n` on
/// the enemy.
pub fn solve(m: u32, n: u32, odds: &HitOdds, follow_up: FollowUp) -> ArenaResult<OutcomeTable> {
    debug!(m, n, %follow_up, "filling outcome table");
    let mut table = OutcomeTable::new(m, n)?;
    match follow_up {
        FollowUp::Neither => symmetric::fill_table(&mut table, odds)?,
        FollowUp::Enemy => enemy_double::fill_table(&mut table, odds)?,
        FollowUp::Player => player_double::fill_table(&mut table, odds)?,
    }
    Ok(table)
}

/// The exact probability that the player wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinProbability(Rational);

impl WinProbability {
    /// Wrap an exact probability.
    pub fn new(value: Rational) -> Self {
        Self(value)
    }

    /// The exact value.
    pub fn value(&self) -> &Rational {
        &self.0
    }

    /// Numerator in lowest terms.
    pub fn numerator(&self) -> &BigInt {
        self.0.numerator()
    }

    /// Denominator in lowest terms, always positive.
    pub fn denominator(&self) -> &BigInt {
        self.0.denominator()
    }

    /// The probability as a percentage, for display only.
    pub fn percent(&self) -> f64 {
        self.0.percent()
    }
}

impl fmt::Display for WinProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.4}%)", self.0, self.percent())
    }
}

impl Serialize for WinProbability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("WinProbability", 3)?;
        s.serialize_field("numerator", &self.numerator().to_string())?;
        s.serialize_field("denominator", &self.denominator().to_string())?;
        s.serialize_field("percent", &self.percent())?;
        s.end()
    }
}

/// Compute the exact probability that the player wins `battle`.
///
/// A side that can never land a damaging strike loses outright without
/// touching the table. If neither side can, the battle is rejected.
pub fn win_probability(battle: &Battle) -> ArenaResult<WinProbability> {
    check_ranges(battle)?;

    let player_harmless = battle.player.is_harmless();
    let enemy_harmless = battle.enemy.is_harmless();
    if player_harmless && enemy_harmless {
        return Err(ArenaError::NeverEndingBattle);
    }
    if player_harmless {
        debug!("player cannot damage the enemy");
        return Ok(WinProbability::new(Rational::zero()));
    }
    if enemy_harmless {
        debug!("enemy cannot damage the player");
        return Ok(WinProbability::new(Rational::one()));
    }

    let m = required_hits(battle.player.hp, battle.enemy.damage)?;
    let n = required_hits(battle.enemy.hp, battle.player.damage)?;
    let odds = HitOdds::new(&battle.player, &battle.enemy, battle.ruleset)?;
    debug!(ruleset = %battle.ruleset, p1 = %odds.p1, p2 = %odds.p2, "true hit rates");

    let table = solve(m, n, &odds, battle.follow_up)?;
    Ok(WinProbability::new(table.corner().clone()))
}

fn check_ranges(battle: &Battle) -> ArenaResult<()> {
    let fields = [
        ("player hit", battle.player.hit),
        ("player crit", battle.player.crit),
        ("enemy hit", battle.enemy.hit),
        ("enemy crit", battle.enemy.crit),
    ];
    for (field, value) in fields {
        if value > MAX_PERCENT {
            return Err(ArenaError::InvalidRange {
                field: field.to_string(),
                value,
                max: MAX_PERCENT,
            });
        }
    }
    Ok(())
}

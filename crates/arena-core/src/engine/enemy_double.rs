//! The enemy strikes twice per round, the player once.
//!
//! The enemy's two strikes are independent trials, so the round expands
//! binomially: zero, one (in either order), or two enemy hits, each hit
//! split into normal and critical.

use super::{Branch, HitOdds, fill, product};
use crate::error::ArenaResult;
use crate::rational::Rational;
use crate::table::OutcomeTable;

/// Probability that at least one of the three strikes lands:
/// `p1 + 2 p2 - 2 p1 p2 - p2^2 + p1 p2^2`.
pub fn normaliser(odds: &HitOdds) -> Rational {
    let (p1, p2) = (&odds.p1, &odds.p2);
    let two = Rational::from_integer(2);
    let p2_sq = p2.squared();
    let positive = p1 + &(&two * p2);
    let positive = &positive + &(p1 * &p2_sq);
    let negative = &product(&[&two, p1, p2]) + &p2_sq;
    &positive - &negative
}

pub(crate) fn branches(odds: &HitOdds) -> Vec<Branch> {
    let HitOdds { p1, p2, c1, c2 } = odds;
    let (q1, q2) = (p1.complement(), p2.complement());
    let (d1, d2) = (c1.complement(), c2.complement());
    let two = Rational::from_integer(2);

    let player_only = product(&[p1, &q2, &q2]);
    let enemy_once = product(&[&two, &q1, p2, &q2]);
    let both_once = product(&[&two, p1, p2, &q2]);
    let enemy_twice = product(&[&q1, p2, p2]);
    let both_twice = product(&[p1, p2, p2]);

    vec![
        Branch::new(product(&[&player_only, c1]), 0, 3),
        Branch::new(product(&[&player_only, &d1]), 0, 1),
        Branch::new(product(&[&enemy_once, c2]), 3, 0),
        Branch::new(product(&[&enemy_once, &d2]), 1, 0),
        Branch::new(product(&[&both_once, c1, c2]), 3, 3),
        Branch::new(product(&[&both_once, c1, &d2]), 1, 3),
        Branch::new(product(&[&both_once, &d1, c2]), 3, 1),
        Branch::new(product(&[&both_once, &d1, &d2]), 1, 1),
        // two enemy hits: crit + crit, one of each, normal + normal
        Branch::new(product(&[&enemy_twice, c2, c2]), 6, 0),
        Branch::new(product(&[&enemy_twice, &two, c2, &d2]), 4, 0),
        Branch::new(product(&[&enemy_twice, &d2, &d2]), 2, 0),
        Branch::new(product(&[&both_twice, c1, c2, c2]), 6, 3),
        Branch::new(product(&[&both_twice, &d1, c2, c2]), 6, 1),
        Branch::new(product(&[&both_twice, &two, c1, c2, &d2]), 4, 3),
        Branch::new(product(&[&both_twice, &two, &d1, c2, &d2]), 4, 1),
        Branch::new(product(&[&both_twice, c1, &d2, &d2]), 2, 3),
        Branch::new(product(&[&both_twice, &d1, &d2, &d2]), 2, 1),
    ]
}

pub(crate) fn fill_table(table: &mut OutcomeTable, odds: &HitOdds) -> ArenaResult<()> {
    let branches = branches(odds);
    fill(table, &normaliser(odds), |t, i, j| {
        branches
            .iter()
            .fold(Rational::zero(), |acc, b| acc + b.contribution(t, i, j))
    })
}

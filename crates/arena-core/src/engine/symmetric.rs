//! One strike each per round.

use super::{Branch, HitOdds, fill, product};
use crate::error::ArenaResult;
use crate::rational::Rational;
use crate::table::OutcomeTable;

/// Probability that at least one of the two strikes lands:
/// `p1 + p2 - p1 p2`.
pub fn normaliser(odds: &HitOdds) -> Rational {
    let (p1, p2) = (&odds.p1, &odds.p2);
    &(p1 + p2) - &(p1 * p2)
}

/// The eight joint outcomes in which something lands.
pub(crate) fn branches(odds: &HitOdds) -> Vec<Branch> {
    let HitOdds { p1, p2, c1, c2 } = odds;
    let (q1, q2) = (p1.complement(), p2.complement());
    let (d1, d2) = (c1.complement(), c2.complement());

    vec![
        // player hits, enemy misses
        Branch::new(product(&[p1, &q2, c1]), 0, 3),
        Branch::new(product(&[p1, &q2, &d1]), 0, 1),
        // player misses, enemy hits
        Branch::new(product(&[&q1, p2, c2]), 3, 0),
        Branch::new(product(&[&q1, p2, &d2]), 1, 0),
        // both hit
        Branch::new(product(&[p1, p2, c1, c2]), 3, 3),
        Branch::new(product(&[p1, p2, c1, &d2]), 1, 3),
        Branch::new(product(&[p1, p2, &d1, c2]), 3, 1),
        Branch::new(product(&[p1, p2, &d1, &d2]), 1, 1),
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

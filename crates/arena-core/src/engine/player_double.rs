//! The player strikes twice per round, the enemy once in between.
//!
//! Order within a round is player, enemy, player. The enemy's counter can
//! finish the player before the follow-up, which the other two variants
//! never have to account for: clamped reads alone would let a follow-up that
//! never happened finish the enemy. Branches in which the follow-up lands
//! after a counter therefore carry the damage of the player's first strike,
//! and the fill checks at each cell whether that branch is reachable.

use super::{Branch, HitOdds, fill, product};
use crate::error::ArenaResult;
use crate::rational::Rational;
use crate::table::OutcomeTable;

/// Probability that at least one of the three strikes lands:
/// `p2 + 2 p1 - 2 p1 p2 - p1^2 + p1^2 p2`.
pub fn normaliser(odds: &HitOdds) -> Rational {
    let (p1, p2) = (&odds.p1, &odds.p2);
    let two = Rational::from_integer(2);
    let p1_sq = p1.squared();
    let positive = p2 + &(&two * p1);
    let positive = &positive + &(&p1_sq * p2);
    let negative = &product(&[&two, p1, p2]) + &p1_sq;
    &positive - &negative
}

/// A branch where the enemy counters and the player's follow-up then lands.
#[derive(Debug, Clone)]
pub(crate) struct FollowUpBranch {
    pub branch: Branch,
    /// Hits taken off the enemy by the player's first strike (0 on a miss).
    pub first_strike: isize,
}

/// Branches that need no reachability check, and those that do.
pub(crate) fn branches(odds: &HitOdds) -> (Vec<Branch>, Vec<FollowUpBranch>) {
    let HitOdds { p1, p2, c1, c2 } = odds;
    let (q1, q2) = (p1.complement(), p2.complement());
    let (d1, d2) = (c1.complement(), c2.complement());
    let two = Rational::from_integer(2);

    let player_once = product(&[&two, p1, &q1, &q2]);
    let player_twice = product(&[p1, p1, &q2]);
    let enemy_only = product(&[&q1, &q1, p2]);
    // hit, counter, miss and miss, counter, hit have the same weight
    let one_and_counter = product(&[p1, &q1, p2]);
    let two_and_counter = product(&[p1, p1, p2]);

    let plain = vec![
        Branch::new(product(&[&player_once, c1]), 0, 3),
        Branch::new(product(&[&player_once, &d1]), 0, 1),
        Branch::new(product(&[&player_twice, c1, c1]), 0, 6),
        Branch::new(product(&[&player_twice, &two, c1, &d1]), 0, 4),
        Branch::new(product(&[&player_twice, &d1, &d1]), 0, 2),
        Branch::new(product(&[&enemy_only, c2]), 3, 0),
        Branch::new(product(&[&enemy_only, &d2]), 1, 0),
        // hit, counter, miss
        Branch::new(product(&[&one_and_counter, c1, c2]), 3, 3),
        Branch::new(product(&[&one_and_counter, c1, &d2]), 1, 3),
        Branch::new(product(&[&one_and_counter, &d1, c2]), 3, 1),
        Branch::new(product(&[&one_and_counter, &d1, &d2]), 1, 1),
    ];

    let gated = |weight: Rational, on_player, on_enemy, first_strike| FollowUpBranch {
        branch: Branch::new(weight, on_player, on_enemy),
        first_strike,
    };
    let follow_ups = vec![
        // miss, counter, hit
        gated(product(&[&one_and_counter, c1, c2]), 3, 3, 0),
        gated(product(&[&one_and_counter, c1, &d2]), 1, 3, 0),
        gated(product(&[&one_and_counter, &d1, c2]), 3, 1, 0),
        gated(product(&[&one_and_counter, &d1, &d2]), 1, 1, 0),
        // crit, counter, hit
        gated(product(&[&two_and_counter, c1, &d2, &d1]), 1, 4, 3),
        gated(product(&[&two_and_counter, c1, &d2, c1]), 1, 6, 3),
        gated(product(&[&two_and_counter, c1, c2, &d1]), 3, 4, 3),
        gated(product(&[&two_and_counter, c1, c2, c1]), 3, 6, 3),
        // normal hit, counter, hit
        gated(product(&[&two_and_counter, &d1, &d2, &d1]), 1, 2, 1),
        gated(product(&[&two_and_counter, &d1, &d2, c1]), 1, 4, 1),
        gated(product(&[&two_and_counter, &d1, c2, &d1]), 3, 2, 1),
        gated(product(&[&two_and_counter, &d1, c2, c1]), 3, 4, 1),
    ];

    (plain, follow_ups)
}

pub(crate) fn fill_table(table: &mut OutcomeTable, odds: &HitOdds) -> ArenaResult<()> {
    let (plain, follow_ups) = branches(odds);
    fill(table, &normaliser(odds), |t, i, j| {
        let sum = plain
            .iter()
            .fold(Rational::zero(), |acc, b| acc + b.contribution(t, i, j));
        follow_ups
            .iter()
            .filter(|f| {
                // The counter finished the player while the enemy was still
                // standing after the first strike: the follow-up never
                // happens and the branch is a loss. Reading the clamped cell
                // instead would count the phantom follow-up as a kill.
                let player_down = i - f.branch.on_player <= 0;
                let enemy_up = j - f.first_strike > 0;
                let never_happens = player_down && enemy_up;
                !never_happens
            })
            .fold(sum, |acc, f| acc + f.branch.contribution(t, i, j))
    })
}

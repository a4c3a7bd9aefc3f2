//! True-hit conversion.
//!
//! Most Fire Emblem games do not roll hit the way they display it. Each
//! [`Ruleset`] maps a displayed hit rate to the probability the game really
//! uses through a fixed 101-entry table:
//!
//! - **1RN**: identity, over a denominator of 100
//! - **2RN**: the average of two rolls, over 10000
//! - **Hybrid 2RN** (Fates): 1RN below 50, a weighted 2RN curve from 50 on

use crate::battle::{MAX_PERCENT, Ruleset};
use crate::error::{ArenaError, ArenaResult};
use crate::rational::Rational;

/// Denominator of the 1RN table.
pub const ONE_RN_SCALE: i64 = 100;

/// Denominator of the 2RN and hybrid tables.
pub const TWO_RN_SCALE: i64 = 10_000;

static TWO_RN: [u16; 101] = [
    0, 3, 10, 21, 36, 55, 78, 105, 136, 171, 210, 253, 300, 351, 406, 465, 528, 595, 666, 741,
    820, 903, 990, 1081, 1176, 1275, 1378, 1485, 1596, 1711, 1830, 1953, 2080, 2211, 2346, 2485,
    2628, 2775, 2926, 3081, 3240, 3403, 3570, 3741, 3916, 4095, 4278, 4465, 4656, 4851, 5050,
    5247, 5440, 5629, 5814, 5995, 6172, 6345, 6514, 6679, 6840, 6997, 7150, 7299, 7444, 7585,
    7722, 7855, 7984, 8109, 8230, 8347, 8460, 8569, 8674, 8775, 8872, 8965, 9054, 9139, 9220,
    9297, 9370, 9439, 9504, 9565, 9622, 9675, 9724, 9769, 9810, 9847, 9880, 9909, 9934, 9955,
    9972, 9985, 9994, 9999, 10000,
];

static HYBRID_TWO_RN: [u16; 101] = [
    0, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200, 1300, 1400, 1500, 1600,
    1700, 1800, 1900, 2000, 2100, 2200, 2300, 2400, 2500, 2600, 2700, 2800, 2900, 3000, 3100,
    3200, 3300, 3400, 3500, 3600, 3700, 3800, 3900, 4000, 4100, 4200, 4300, 4400, 4500, 4600,
    4700, 4800, 4900, 5050, 5183, 5317, 5450, 5583, 5717, 5850, 5983, 6117, 6250, 6383, 6517,
    6650, 6783, 6917, 7050, 7183, 7317, 7450, 7583, 7717, 7850, 7983, 8117, 8250, 8383, 8512,
    8635, 8753, 8866, 8973, 9075, 9172, 9263, 9349, 9430, 9505, 9575, 9640, 9699, 9753, 9802,
    9845, 9883, 9916, 9943, 9965, 9982, 9993, 9999, 10000,
];

/// Convert a displayed hit rate into the true hit probability.
///
/// Returns [`ArenaError::InvalidRange`] if `displayed` exceeds 100.
pub fn true_hit(displayed: u32, ruleset: Ruleset) -> ArenaResult<Rational> {
    if displayed > MAX_PERCENT {
        return Err(ArenaError::InvalidRange {
            field: "hit".to_string(),
            value: displayed,
            max: MAX_PERCENT,
        });
    }
    let idx = displayed as usize;
    let value = match ruleset {
        Ruleset::OneRn => Rational::new(i64::from(displayed), ONE_RN_SCALE),
        Ruleset::TwoRn => Rational::new(i64::from(TWO_RN[idx]), TWO_RN_SCALE),
        Ruleset::HybridTwoRn => Rational::new(i64::from(HYBRID_TWO_RN[idx]), TWO_RN_SCALE),
    };
    Ok(value)
}

//! Hits needed to bring a side to zero HP.

use crate::error::{ArenaError, ArenaResult};

/// Minimum number of normal strikes of `opposing_damage` that reduce `hp`
/// to zero or below.
///
/// Zero HP needs zero strikes. Zero damage never finishes anyone, so it is
/// rejected with [`ArenaError::ZeroDamage`]; the engine handles harmless
/// sides before getting here.
pub fn required_hits(hp: u32, opposing_damage: u32) -> ArenaResult<u32> {
    if opposing_damage == 0 {
        return Err(ArenaError::ZeroDamage);
    }
    Ok(hp.div_ceil(opposing_damage))
}

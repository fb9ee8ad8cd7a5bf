//! Vanilla compatible random sources.
//!
//! Only the legacy linear congruential generator is needed: structure placement picks
//! its palette with `RandomSource.create(Mth.getSeed(pos))`, which is a legacy source.

mod legacy_random;

pub use legacy_random::LegacyRandom;

use crate::BlockPos;

/// Vanilla `Mth.getSeed`: a positional seed derived from block coordinates.
#[must_use]
pub fn get_seed(x: i32, y: i32, z: i32) -> i64 {
    let l = i64::from(x.wrapping_mul(3_129_871))
        ^ i64::from(z).wrapping_mul(116_129_781)
        ^ i64::from(y);
    let l = l
        .wrapping_mul(l)
        .wrapping_mul(42_317_861)
        .wrapping_add(l.wrapping_mul(11));
    l >> 16
}

/// [`get_seed`] for a block position.
#[must_use]
pub fn get_seed_at(pos: BlockPos) -> i64 {
    get_seed(pos.x(), pos.y(), pos.z())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_seed_matches_vanilla() {
        assert_eq!(get_seed(0, 0, 0), 0);
        assert_eq!(get_seed(1, 0, 0), 133_076_631_897_947);
        assert_eq!(get_seed(1, 11, -111), -118_190_820_867_664);
        assert_eq!(
            get_seed_at(BlockPos::new(100, 64, -200)),
            33_831_745_463_433
        );
    }
}

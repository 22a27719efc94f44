//! Seed-to-item resolution
//!
//! A draw constructs a fresh [`SeededStream`] and consumes exactly two values
//! from it: the first picks a tier by walking the cumulative probability
//! table, the second picks an item uniformly within that tier. Nothing else
//! is read or written, so draws are independent of each other and of any
//! presentation timing.

use crate::catalog::{Catalog, CatalogItem};
use crate::stream::SeededStream;
use crate::tier::{Tier, TIER_COUNT};
use serde::Serialize;

/// Tier chosen when rounding leaves the cumulative sum just below the roll
pub const FALLBACK_TIER: Tier = Tier::ALL[TIER_COUNT - 1];

/// Everything a single draw computed, for display and debugging
#[derive(Debug, Clone, Serialize)]
pub struct DrawOutcome<'a> {
    /// Seed after 32-bit truncation
    pub seed: i32,
    /// First stream value, used for tier selection
    pub tier_roll: f64,
    /// Second stream value, used for item selection
    pub item_roll: f64,
    pub tier: Tier,
    /// Position of the item within its tier
    pub index: usize,
    pub item: &'a CatalogItem,
}

/// Map a value in `[0, 1)` onto `0..count`.
///
/// Clamped to `count - 1` so a roll of exactly 1.0 still lands on the last
/// candidate.
pub fn select_index(roll: f64, count: usize) -> usize {
    let index = (roll * count as f64).floor() as usize;
    index.min(count.saturating_sub(1))
}

impl Catalog {
    /// Pick the first tier whose cumulative probability exceeds `roll`.
    ///
    /// Tiers are walked rarest first. If the running sum never exceeds the
    /// roll (a table summing to just under 1.0, or a roll of 1.0) the result
    /// is [`FALLBACK_TIER`].
    pub fn select_tier(&self, roll: f64) -> Tier {
        let mut cumulative = 0.0;
        for tier in Tier::ALL {
            cumulative += self.probability(tier);
            if roll < cumulative {
                return tier;
            }
        }
        FALLBACK_TIER
    }

    /// Draw one item for `seed`. Seeds wider than 32 bits wrap.
    pub fn draw(&self, seed: i64) -> &CatalogItem {
        self.draw_outcome(seed).item
    }

    /// Draw one item and keep the intermediate values
    pub fn draw_outcome(&self, seed: i64) -> DrawOutcome<'_> {
        let mut stream = SeededStream::new(seed);

        let tier_roll = stream.next_f64();
        let tier = self.select_tier(tier_roll);

        let item_roll = stream.next_f64();
        let index = select_index(item_roll, self.tier_len(tier));

        let item = self.candidate(tier, index);

        tracing::trace!(seed, tier_roll, %tier, index, item = %item.name, "draw");

        DrawOutcome {
            seed: seed as i32,
            tier_roll,
            item_roll,
            tier,
            index,
            item,
        }
    }
}

//! Distribution check over a range of seeds

use crate::config::Config;
use anyhow::{ensure, Context, Result};
use gacha::{Catalog, Tier, TIER_COUNT};
use std::ops::Range;
use std::path::Path;

/// Tier counts over a seed range
#[derive(Debug, Clone, PartialEq)]
pub struct TierStats {
    pub samples: u64,
    pub counts: [u64; TIER_COUNT],
}

/// Seeds `start..start + samples`, or `None` if the end does not fit in `i64`
pub fn seed_range(start: i64, samples: u32) -> Option<Range<i64>> {
    start
        .checked_add(i64::from(samples))
        .map(|end| start..end)
}

impl TierStats {
    /// Draw every seed in `seeds`
    pub fn collect(catalog: &Catalog, seeds: Range<i64>) -> Self {
        let mut counts = [0u64; TIER_COUNT];
        for seed in seeds {
            counts[catalog.draw(seed).tier.index()] += 1;
        }
        Self {
            samples: counts.iter().sum(),
            counts,
        }
    }

    pub fn observed(&self, tier: Tier) -> f64 {
        self.counts[tier.index()] as f64 / self.samples as f64
    }

    /// Pearson chi-squared statistic against the declared probabilities
    pub fn chi_squared(&self, catalog: &Catalog) -> f64 {
        Tier::ALL
            .iter()
            .map(|&tier| {
                let expected = catalog.probability(tier) * self.samples as f64;
                let diff = self.counts[tier.index()] as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}

/// Chi-squared critical value for 3 degrees of freedom at p = 0.05
pub const CHI_SQUARED_CRITICAL_3DF: f64 = 7.815;

/// Handle the stats command
pub fn handle(samples: u32, start: i64, catalog_path: Option<&Path>) -> Result<()> {
    ensure!(samples > 0, "--samples must be positive");
    let seeds = seed_range(start, samples).with_context(|| {
        format!("--start {} plus --samples {} is past the largest seed", start, samples)
    })?;

    let config = Config::load()?;
    let catalog = super::load_catalog(catalog_path, &config)?;

    println!("Seeds {}..{} ({} draws)\n", seeds.start, seeds.end, samples);
    let stats = TierStats::collect(&catalog, seeds);

    println!(
        "{:<6} {:<10} {:>10} {:>10} {:>10}",
        "Badge", "Tier", "Declared", "Observed", "Count"
    );
    println!("{}", "-".repeat(50));
    for tier in Tier::ALL {
        println!(
            "{:<6} {:<10} {:>9.3}% {:>9.3}% {:>10}",
            tier.label(),
            tier.name(),
            catalog.probability(tier) * 100.0,
            stats.observed(tier) * 100.0,
            stats.counts[tier.index()]
        );
    }

    let chi2 = stats.chi_squared(&catalog);
    println!(
        "\nchi-squared = {:.3} ({} at p = 0.05, critical {})",
        chi2,
        if chi2 < CHI_SQUARED_CRITICAL_3DF {
            "consistent"
        } else {
            "inconsistent"
        },
        CHI_SQUARED_CRITICAL_3DF
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_cover_all_samples() {
        let catalog = Catalog::builtin().unwrap();
        let stats = TierStats::collect(&catalog, -500..500);
        assert_eq!(stats.counts.iter().sum::<u64>(), 1_000);
    }

    #[test]
    fn test_builtin_distribution_is_consistent() {
        let catalog = Catalog::builtin().unwrap();
        let stats = TierStats::collect(&catalog, 0..100_000);
        assert_eq!(stats.counts, [4_934, 15_131, 29_909, 50_026]);
        assert!(stats.chi_squared(&catalog) < CHI_SQUARED_CRITICAL_3DF);
    }

    #[test]
    fn test_seed_range_rejects_overflow() {
        assert_eq!(seed_range(0, 10), Some(0..10));
        assert_eq!(seed_range(i64::MAX, 0), Some(i64::MAX..i64::MAX));
        assert_eq!(seed_range(i64::MAX - 1, 1), Some(i64::MAX - 1..i64::MAX));
        assert_eq!(seed_range(i64::MAX, 1), None);
        assert_eq!(seed_range(i64::MAX - 5, u32::MAX), None);
    }

    #[test]
    fn test_handle_reports_overflow_instead_of_panicking() {
        let err = handle(1, i64::MAX, None).unwrap_err();
        assert!(err.to_string().contains("past the largest seed"));
    }

    #[test]
    fn test_collect_at_top_of_range() {
        let catalog = Catalog::builtin().unwrap();
        let seeds = seed_range(i64::MAX - 3, 3).unwrap();
        let stats = TierStats::collect(&catalog, seeds);
        assert_eq!(stats.samples, 3);
    }
}

//! Rarity tier definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rarity tier, rarest first.
///
/// Declaration order is the rarity order, and `Ord` follows it:
/// `Legendary < Rare < Uncommon < Common` compares by position, so sorting
/// puts the rarest tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Legendary,
    Rare,
    Uncommon,
    Common,
}

/// Number of tiers
pub const TIER_COUNT: usize = 4;

/// Display information for a tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierInfo {
    pub tier: Tier,
    /// Short label shown on the result badge
    pub label: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// All tiers in rarity order
pub const TIER_INFO: &[TierInfo] = &[
    TierInfo {
        tier: Tier::Legendary,
        label: "SSR",
        name: "Legendary",
        color: "#FFD700",
    },
    TierInfo {
        tier: Tier::Rare,
        label: "SR",
        name: "Rare",
        color: "#BF6DFF",
    },
    TierInfo {
        tier: Tier::Uncommon,
        label: "R",
        name: "Uncommon",
        color: "#3DB8F5",
    },
    TierInfo {
        tier: Tier::Common,
        label: "N",
        name: "Common",
        color: "#A0A0A0",
    },
];

impl Tier {
    /// Every tier, rarest first
    pub const ALL: [Tier; TIER_COUNT] = [Tier::Legendary, Tier::Rare, Tier::Uncommon, Tier::Common];

    /// Position in [`Tier::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static TierInfo {
        &TIER_INFO[self.index()]
    }

    /// Short badge label (SSR, SR, R, N)
    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn color(self) -> &'static str {
        self.info().color
    }

    /// Whether a result of this tier gets the special reveal
    pub fn is_special(self) -> bool {
        self == Tier::Legendary
    }

    /// Look up a tier by badge label or name, ignoring case
    pub fn from_label(s: &str) -> Option<Tier> {
        let s = s.trim();
        TIER_INFO
            .iter()
            .find(|t| t.label.eq_ignore_ascii_case(s) || t.name.eq_ignore_ascii_case(s))
            .map(|t| t.tier)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::from_label(s).ok_or_else(|| format!("unknown tier: {}", s))
    }
}

/// Draw probability of one tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeight {
    pub tier: Tier,
    pub probability: f64,
}

/// Default probability table, in partition order
pub const DEFAULT_TIER_WEIGHTS: &[TierWeight] = &[
    TierWeight {
        tier: Tier::Legendary,
        probability: 0.05,
    },
    TierWeight {
        tier: Tier::Rare,
        probability: 0.15,
    },
    TierWeight {
        tier: Tier::Uncommon,
        probability: 0.30,
    },
    TierWeight {
        tier: Tier::Common,
        probability: 0.50,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_table_matches_enum_order() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(TIER_INFO[i].tier, *tier);
            assert_eq!(tier.index(), i);
        }
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Tier::Legendary < Tier::Rare);
        assert!(Tier::Rare < Tier::Uncommon);
        assert!(Tier::Uncommon < Tier::Common);
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(Tier::from_label("SSR"), Some(Tier::Legendary));
        assert_eq!(Tier::from_label("sr"), Some(Tier::Rare));
        assert_eq!(Tier::from_label(" r "), Some(Tier::Uncommon));
        assert_eq!(Tier::from_label("common"), Some(Tier::Common));
        assert_eq!(Tier::from_label("epic"), None);
        assert_eq!("N".parse::<Tier>(), Ok(Tier::Common));
        assert!("x".parse::<Tier>().is_err());
    }

    #[test]
    fn test_only_legendary_is_special() {
        let special: Vec<Tier> = Tier::ALL.into_iter().filter(|t| t.is_special()).collect();
        assert_eq!(special, vec![Tier::Legendary]);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let total: f64 = DEFAULT_TIER_WEIGHTS.iter().map(|w| w.probability).sum();
        assert!((total - 1.0).abs() < 1e-12);
        let order: Vec<Tier> = DEFAULT_TIER_WEIGHTS.iter().map(|w| w.tier).collect();
        assert_eq!(order, Tier::ALL.to_vec());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Tier::Legendary).unwrap(), "\"legendary\"");
        let t: Tier = serde_json::from_str("\"uncommon\"").unwrap();
        assert_eq!(t, Tier::Uncommon);
    }
}

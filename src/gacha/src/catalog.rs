//! Tiered item catalog
//!
//! A [`Catalog`] is built once from a [`CatalogDefinition`] and is read-only
//! afterwards. Every configuration problem (empty tier, bad probability table,
//! duplicate names) is reported by [`Catalog::from_definition`], so drawing
//! from a constructed catalog cannot fail.

use crate::tier::{Tier, TierWeight, TIER_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Allowed distance between the probability sum and 1.0
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Tier {0} has no items")]
    EmptyTier(Tier),

    #[error("Tier probabilities sum to {sum}, expected 1.0")]
    ProbabilitySum { sum: f64 },

    #[error("Probability for tier {tier} must be in (0, 1], got {probability}")]
    InvalidProbability { tier: Tier, probability: f64 },

    #[error("Tier {0} appears more than once in the probability table")]
    DuplicateTier(Tier),

    #[error("Tier {0} is missing from the probability table")]
    MissingTier(Tier),

    #[error("Probability table must be declared rarest first: expected {expected} at position {position}, found {found}")]
    TierOrder {
        position: usize,
        expected: Tier,
        found: Tier,
    },

    #[error("Item #{0} has an empty name")]
    EmptyName(usize),

    #[error("Duplicate item '{name}' in tier {tier}")]
    DuplicateName { tier: Tier, name: String },

    #[error("Unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A selectable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display name, unique within its tier
    pub name: String,
    pub tier: Tier,
    /// Free-text label (cuisine, genre, ...)
    pub category: String,
}

/// Unvalidated catalog as written in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Probability table, rarest tier first
    pub tiers: Vec<TierWeight>,
    pub items: Vec<CatalogItem>,
}

impl CatalogDefinition {
    /// Load a definition from a JSON or YAML file, chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => {
                let content = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
            "yaml" | "yml" => {
                let content = std::fs::read_to_string(path)?;
                Ok(serde_yaml::from_str(&content)?)
            }
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Validated, immutable catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All items in declaration order
    items: Vec<CatalogItem>,
    /// Probability per tier, indexed by [`Tier::index`]
    probabilities: [f64; TIER_COUNT],
    /// Item indices per tier, in declaration order
    by_tier: [Vec<usize>; TIER_COUNT],
}

impl Catalog {
    /// Validate a definition and build the per-tier index
    pub fn from_definition(def: CatalogDefinition) -> Result<Self, CatalogError> {
        let probabilities = validate_weights(&def.tiers)?;
        let by_tier = index_items(&def.items)?;

        tracing::debug!(
            items = def.items.len(),
            legendary = by_tier[Tier::Legendary.index()].len(),
            rare = by_tier[Tier::Rare.index()].len(),
            uncommon = by_tier[Tier::Uncommon.index()].len(),
            common = by_tier[Tier::Common.index()].len(),
            "catalog validated"
        );

        Ok(Self {
            items: def.items,
            probabilities,
            by_tier,
        })
    }

    /// Load and validate a catalog definition file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_definition(CatalogDefinition::load(path)?)
    }

    /// All items in declaration order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of one tier, in declaration order
    pub fn tier_items(&self, tier: Tier) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.by_tier[tier.index()].iter().map(|&i| &self.items[i])
    }

    /// Number of items in a tier
    pub fn tier_len(&self, tier: Tier) -> usize {
        self.by_tier[tier.index()].len()
    }

    /// The `index`-th item of a tier, in declaration order
    pub fn tier_item(&self, tier: Tier, index: usize) -> Option<&CatalogItem> {
        self.by_tier[tier.index()]
            .get(index)
            .map(|&i| &self.items[i])
    }

    /// Indexed lookup for the draw path. Every tier is non-empty after
    /// validation, and callers keep `index` below `tier_len(tier)`.
    pub(crate) fn candidate(&self, tier: Tier, index: usize) -> &CatalogItem {
        &self.items[self.by_tier[tier.index()][index]]
    }

    /// Declared draw probability of a tier
    pub fn probability(&self, tier: Tier) -> f64 {
        self.probabilities[tier.index()]
    }

    /// Probability table in partition order
    pub fn weights(&self) -> Vec<TierWeight> {
        Tier::ALL
            .iter()
            .map(|&tier| TierWeight {
                tier,
                probability: self.probability(tier),
            })
            .collect()
    }

    /// Chance of drawing one specific item: tier probability split evenly
    /// across the tier's members
    pub fn item_probability(&self, item: &CatalogItem) -> f64 {
        self.probability(item.tier) / self.tier_len(item.tier) as f64
    }

    /// Find an item by exact name
    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Turn the catalog back into a serializable definition
    pub fn to_definition(&self) -> CatalogDefinition {
        CatalogDefinition {
            tiers: self.weights(),
            items: self.items.clone(),
        }
    }
}

/// Validate item names and group item indices by tier
fn index_items(items: &[CatalogItem]) -> Result<[Vec<usize>; TIER_COUNT], CatalogError> {
    let mut by_tier: [Vec<usize>; TIER_COUNT] = Default::default();
    let mut seen: HashSet<(Tier, &str)> = HashSet::new();

    for (i, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(i));
        }
        if !seen.insert((item.tier, item.name.as_str())) {
            return Err(CatalogError::DuplicateName {
                tier: item.tier,
                name: item.name.clone(),
            });
        }
        by_tier[item.tier.index()].push(i);
    }

    for tier in Tier::ALL {
        if by_tier[tier.index()].is_empty() {
            return Err(CatalogError::EmptyTier(tier));
        }
    }

    Ok(by_tier)
}

/// Check the probability table and return it indexed by tier
fn validate_weights(weights: &[TierWeight]) -> Result<[f64; TIER_COUNT], CatalogError> {
    let mut seen: HashSet<Tier> = HashSet::new();
    for w in weights {
        if !seen.insert(w.tier) {
            return Err(CatalogError::DuplicateTier(w.tier));
        }
    }
    if let Some(&missing) = Tier::ALL.iter().find(|t| !seen.contains(t)) {
        return Err(CatalogError::MissingTier(missing));
    }

    // Partitioning walks the table in declared order; the fallback tier is
    // the last entry, so the table must follow rarity order exactly
    for (position, (w, expected)) in weights.iter().zip(Tier::ALL).enumerate() {
        if w.tier != expected {
            return Err(CatalogError::TierOrder {
                position,
                expected,
                found: w.tier,
            });
        }
    }

    let mut probabilities = [0.0; TIER_COUNT];
    for w in weights {
        if !w.probability.is_finite() || w.probability <= 0.0 || w.probability > 1.0 {
            return Err(CatalogError::InvalidProbability {
                tier: w.tier,
                probability: w.probability,
            });
        }
        probabilities[w.tier.index()] = w.probability;
    }

    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(CatalogError::ProbabilitySum { sum });
    }

    Ok(probabilities)
}

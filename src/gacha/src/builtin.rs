//! Built-in restaurant catalog
//!
//! Item order within each tier is part of the shared-link format: a seed
//! selects an item by its position in the tier, so reordering or inserting
//! entries changes existing links.

use crate::catalog::{Catalog, CatalogDefinition, CatalogError, CatalogItem};
use crate::tier::{Tier, DEFAULT_TIER_WEIGHTS};

/// (name, tier, genre)
pub const RESTAURANTS: &[(&str, Tier, &str)] = &[
    // Legendary (SSR)
    ("叙々苑", Tier::Legendary, "焼肉"),
    ("回らない寿司屋", Tier::Legendary, "寿司"),
    ("うかい亭", Tier::Legendary, "鉄板焼き"),
    // Rare (SR)
    ("ロイヤルホスト", Tier::Rare, "ファミレス"),
    ("丸亀製麺", Tier::Rare, "うどん"),
    ("スシロー", Tier::Rare, "回転寿司"),
    ("焼肉きんぐ", Tier::Rare, "焼肉"),
    ("びっくりドンキー", Tier::Rare, "ハンバーグ"),
    // Uncommon (R)
    ("大戸屋", Tier::Uncommon, "定食"),
    ("餃子の王将", Tier::Uncommon, "中華"),
    ("CoCo壱番屋", Tier::Uncommon, "カレー"),
    ("リンガーハット", Tier::Uncommon, "ちゃんぽん"),
    ("やよい軒", Tier::Uncommon, "定食"),
    ("天下一品", Tier::Uncommon, "ラーメン"),
    // Common (N)
    ("マクドナルド", Tier::Common, "ファストフード"),
    ("吉野家", Tier::Common, "牛丼"),
    ("松屋", Tier::Common, "牛丼"),
    ("すき家", Tier::Common, "牛丼"),
    ("日高屋", Tier::Common, "中華"),
    ("サイゼリヤ", Tier::Common, "イタリアン"),
    ("なか卯", Tier::Common, "丼もの"),
    ("かつや", Tier::Common, "とんかつ"),
];

/// Definition of the built-in catalog
pub fn builtin_definition() -> CatalogDefinition {
    CatalogDefinition {
        tiers: DEFAULT_TIER_WEIGHTS.to_vec(),
        items: RESTAURANTS
            .iter()
            .map(|&(name, tier, category)| CatalogItem {
                name: name.to_string(),
                tier,
                category: category.to_string(),
            })
            .collect(),
    }
}

impl Catalog {
    /// Build and validate the built-in restaurant catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_definition(builtin_definition())
    }
}

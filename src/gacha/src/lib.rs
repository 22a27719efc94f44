//! # gacha
//!
//! Seed-reproducible weighted draws from a tiered catalog.
//!
//! A draw turns an integer seed into exactly one catalog item. The same seed
//! always yields the same item, so a result can be shared as a link carrying
//! only the seed and regenerated identically by anyone who opens it.
//!
//! - [`SeededStream`] expands a 32-bit seed into floats in `[0, 1)`
//! - [`Catalog`] holds the validated items and the tier probability table
//! - [`Catalog::draw`] picks a tier, then an item within it
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), gacha::CatalogError> {
//! let catalog = gacha::Catalog::builtin()?;
//!
//! let item = catalog.draw(42);
//! println!("{} ({}) [{}]", item.name, item.category, item.tier.label());
//!
//! // Same seed, same item
//! assert!(std::ptr::eq(item, catalog.draw(42)));
//! println!("{}", gacha::map_search_url(item));
//! # Ok(())
//! # }
//! ```

pub mod builtin;
pub mod catalog;
pub mod draw;
pub mod links;
pub mod stream;
pub mod tier;

#[cfg(feature = "wasm")]
pub mod wasm;

#[doc(inline)]
pub use builtin::{builtin_definition, RESTAURANTS};
#[doc(inline)]
pub use catalog::{Catalog, CatalogDefinition, CatalogError, CatalogItem, PROBABILITY_TOLERANCE};
#[doc(inline)]
pub use draw::{select_index, DrawOutcome, FALLBACK_TIER};
#[doc(inline)]
pub use links::{map_search_url, MAP_SEARCH_BASE};
#[doc(inline)]
pub use stream::SeededStream;
#[doc(inline)]
pub use tier::{Tier, TierInfo, TierWeight, DEFAULT_TIER_WEIGHTS, TIER_COUNT, TIER_INFO};

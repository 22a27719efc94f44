//! WebAssembly bindings for gacha
//!
//! JavaScript numbers passed as `i32` go through ToInt32, the same
//! truncation a `seed | 0` performs, so links minted by a browser resolve to
//! the same item here.

use crate::catalog::{Catalog, CatalogError};
use crate::links::map_search_url;
use crate::stream::SeededStream as RustSeededStream;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

static BUILTIN: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

fn builtin() -> Result<&'static Catalog, JsValue> {
    BUILTIN
        .get_or_init(Catalog::builtin)
        .as_ref()
        .map_err(|e| JsValue::from_str(&format!("Invalid catalog: {}", e)))
}

/// Result of a draw
#[wasm_bindgen]
pub struct DrawResult {
    name: String,
    category: String,
    tier: String,
    tier_name: String,
    special: bool,
    map_url: String,
}

#[wasm_bindgen]
impl DrawResult {
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn category(&self) -> String {
        self.category.clone()
    }

    /// Badge label (SSR, SR, R, N)
    #[wasm_bindgen(getter)]
    pub fn tier(&self) -> String {
        self.tier.clone()
    }

    #[wasm_bindgen(getter, js_name = tierName)]
    pub fn tier_name(&self) -> String {
        self.tier_name.clone()
    }

    /// Whether the presentation layer should play the special reveal
    #[wasm_bindgen(getter)]
    pub fn special(&self) -> bool {
        self.special
    }

    #[wasm_bindgen(getter, js_name = mapUrl)]
    pub fn map_url(&self) -> String {
        self.map_url.clone()
    }
}

/// Draw a restaurant from the built-in catalog
#[wasm_bindgen(js_name = pickRestaurant)]
pub fn pick_restaurant(seed: i32) -> Result<DrawResult, JsValue> {
    let item = builtin()?.draw(i64::from(seed));
    Ok(DrawResult {
        name: item.name.clone(),
        category: item.category.clone(),
        tier: item.tier.label().to_string(),
        tier_name: item.tier.name().to_string(),
        special: item.tier.is_special(),
        map_url: map_search_url(item),
    })
}

/// JavaScript-friendly seeded stream
#[wasm_bindgen]
pub struct SeededStream {
    inner: RustSeededStream,
}

#[wasm_bindgen]
impl SeededStream {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: i32) -> SeededStream {
        SeededStream {
            inner: RustSeededStream::from_i32(seed),
        }
    }

    /// Next value in `[0, 1)`
    #[wasm_bindgen(js_name = next)]
    pub fn next_value(&mut self) -> f64 {
        self.inner.next_f64()
    }
}

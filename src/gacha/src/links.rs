//! External links for a drawn item

use crate::catalog::CatalogItem;

/// Map search endpoint; the item name goes in the `query` parameter
pub const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Map search deep link for an item, keyed by its URL-encoded name
pub fn map_search_url(item: &CatalogItem) -> String {
    format!("{}{}", MAP_SEARCH_BASE, urlencoding::encode(&item.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;

    fn item(name: &str) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            tier: Tier::Common,
            category: String::new(),
        }
    }

    #[test]
    fn test_ascii_name() {
        assert_eq!(
            map_search_url(&item("Royal Host")),
            "https://www.google.com/maps/search/?api=1&query=Royal%20Host"
        );
    }

    #[test]
    fn test_multibyte_name() {
        assert_eq!(
            map_search_url(&item("松屋")),
            "https://www.google.com/maps/search/?api=1&query=%E6%9D%BE%E5%B1%8B"
        );
    }

    #[test]
    fn test_reserved_characters_escaped() {
        let url = map_search_url(&item("A&B=C?"));
        assert!(url.ends_with("query=A%26B%3DC%3F"));
    }
}

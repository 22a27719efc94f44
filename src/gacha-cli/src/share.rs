//! Shareable links carrying a draw seed

use crate::seed_input::{parse_seed, SeedInputError};
use thiserror::Error;
use url::Url;

/// Query parameter holding the seed
pub const SEED_PARAM: &str = "seed";

#[derive(Error, Debug)]
pub enum ShareLinkError {
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Link has no 'seed' parameter")]
    MissingSeed,

    #[error(transparent)]
    Seed(#[from] SeedInputError),
}

/// Set the seed parameter on `base`, replacing any existing one and keeping
/// other query parameters in order
pub fn encode(base: &str, seed: i64) -> Result<Url, ShareLinkError> {
    let mut url = Url::parse(base)?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != SEED_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(SEED_PARAM, &seed.to_string());

    Ok(url)
}

/// Read the seed back out of a shared link
pub fn decode(link: &str) -> Result<i64, ShareLinkError> {
    let url = Url::parse(link)?;
    let value = url
        .query_pairs()
        .find(|(k, _)| k == SEED_PARAM)
        .map(|(_, v)| v.into_owned())
        .ok_or(ShareLinkError::MissingSeed)?;
    Ok(parse_seed(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gacha::Catalog;

    #[test]
    fn test_encode_plain_base() {
        let url = encode("http://localhost:8080/", 42).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/?seed=42");
    }

    #[test]
    fn test_encode_replaces_existing_seed() {
        let url = encode("https://example.com/gacha/?lang=ja&seed=1&x=2", -5).unwrap();
        assert_eq!(url.as_str(), "https://example.com/gacha/?lang=ja&x=2&seed=-5");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("https://example.com/?seed=123456789").unwrap(), 123_456_789);
        assert_eq!(decode("https://example.com/?a=1&seed=%2042%20").unwrap(), 42);
        assert!(matches!(
            decode("https://example.com/?a=1"),
            Err(ShareLinkError::MissingSeed)
        ));
        assert!(matches!(
            decode("https://example.com/?seed=soon"),
            Err(ShareLinkError::Seed(SeedInputError::NotNumeric(_)))
        ));
        assert!(matches!(decode("not a url"), Err(ShareLinkError::Url(_))));
    }

    #[test]
    fn test_roundtrip_reproduces_draw() {
        let catalog = Catalog::builtin().unwrap();
        for seed in [0, 1, 42, 123_456_789, -1, 1_700_000_000_000] {
            let link = encode("http://localhost:8080/", seed).unwrap();
            let decoded = decode(link.as_str()).unwrap();
            assert_eq!(decoded, seed);
            assert!(std::ptr::eq(catalog.draw(seed), catalog.draw(decoded)));
        }
    }
}

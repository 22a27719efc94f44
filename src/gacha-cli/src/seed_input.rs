//! Seed input handling at the CLI boundary
//!
//! Seed text comes from the command line or a shared link's `seed` query
//! parameter. It is coerced here; the library only ever sees integers.

use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

const U32_RANGE: f64 = 4_294_967_296.0;

/// 2^53, the largest magnitude below which every integer is a double
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedInputError {
    #[error("Seed is empty")]
    Empty,

    #[error("Seed is not a number: '{0}'")]
    NotNumeric(String),

    #[error("Seed is not finite: '{0}'")]
    NotFinite(String),
}

/// Parse seed text into an integer seed.
///
/// Text is read as a double first, the same way a browser coerces a query
/// parameter, so links resolve to the same seed everywhere:
///
/// - Whole numbers up to 2^53 in magnitude are kept as is (the draw wraps
///   them to 32 bits)
/// - Anything else (`1.5`, `1e30`, integer text past 2^53) is rounded to the
///   nearest double, truncated toward zero, then wrapped to 32 bits
pub fn parse_seed(text: &str) -> Result<i64, SeedInputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SeedInputError::Empty);
    }

    let value: f64 = text
        .parse()
        .map_err(|_| SeedInputError::NotNumeric(text.to_string()))?;
    if !value.is_finite() {
        return Err(SeedInputError::NotFinite(text.to_string()));
    }

    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        return Ok(value as i64);
    }
    Ok(i64::from(float_to_i32(value)))
}

/// Truncate toward zero and wrap modulo 2^32 into signed 32-bit range
fn float_to_i32(value: f64) -> i32 {
    let wrapped = value.trunc().rem_euclid(U32_RANGE);
    wrapped as u32 as i32
}

/// Seed from the wall clock in milliseconds, for draws without a given seed
pub fn time_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_text() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed("  -7 "), Ok(-7));
        assert_eq!(parse_seed("1700000000000"), Ok(1_700_000_000_000));
        assert_eq!(parse_seed("+5"), Ok(5));
    }

    #[test]
    fn test_integer_text_past_2_pow_53_rounds_like_a_double() {
        // Rounds to 2^53, which wraps to 0
        assert_eq!(parse_seed("9007199254740993"), Ok(0));
        // 2^53 - 1 and 2^53 stay exact
        assert_eq!(parse_seed("9007199254740991"), Ok(9_007_199_254_740_991));
        assert_eq!(parse_seed("-9007199254740992"), Ok(-9_007_199_254_740_992));
        // 2^53 + 2^32 + 7 rounds to 2^53 + 2^32 + 8, which wraps to 8
        assert_eq!(parse_seed("9007203549708295"), Ok(8));
        // 2^64 + 3 rounds to 2^64
        assert_eq!(parse_seed("18446744073709551619"), Ok(0));
    }

    #[test]
    fn test_integer_text_wider_than_i128() {
        // 2^128 + 5 rounds to 2^128
        assert_eq!(parse_seed("340282366920938463463374607431768211461"), Ok(0));
        // -2^128 is exact as a double and a multiple of 2^32
        assert_eq!(parse_seed("-340282366920938463463374607431768211456"), Ok(0));
    }

    #[test]
    fn test_decimal_text_truncates() {
        assert_eq!(parse_seed("1.9"), Ok(1));
        assert_eq!(parse_seed("-1.9"), Ok(-1));
        assert_eq!(parse_seed("1e3"), Ok(1000));
        assert_eq!(parse_seed("4294967296.5"), Ok(0));
        assert_eq!(parse_seed("2147483648.5"), Ok(i64::from(i32::MIN)));
        // Whole decimal text is kept like integer text; the draw wraps it
        assert_eq!(parse_seed("2147483648.0"), Ok(2_147_483_648));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(parse_seed(""), Err(SeedInputError::Empty));
        assert_eq!(parse_seed("   "), Err(SeedInputError::Empty));
        assert_eq!(
            parse_seed("abc"),
            Err(SeedInputError::NotNumeric("abc".to_string()))
        );
        assert_eq!(
            parse_seed("12abc"),
            Err(SeedInputError::NotNumeric("12abc".to_string()))
        );
        assert_eq!(
            parse_seed("NaN"),
            Err(SeedInputError::NotFinite("NaN".to_string()))
        );
        assert_eq!(
            parse_seed("inf"),
            Err(SeedInputError::NotFinite("inf".to_string()))
        );
        // A browser draws seed 0 for both of these; here they are rejected
        assert_eq!(
            parse_seed("Infinity"),
            Err(SeedInputError::NotFinite("Infinity".to_string()))
        );
        assert_eq!(
            parse_seed("-Infinity"),
            Err(SeedInputError::NotFinite("-Infinity".to_string()))
        );
    }

    #[test]
    fn test_time_seed_is_recent() {
        // 2023-11-14 in milliseconds
        assert!(time_seed() > 1_700_000_000_000);
    }
}

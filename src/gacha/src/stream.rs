//! Seeded pseudo-random stream
//!
//! A 32-bit mulberry-style generator. The output sequence is part of the
//! shared-link format: every arithmetic step wraps at 32 bits, and changing
//! any constant or operation order changes which item a given seed draws.

/// Added to the state on every step. Odd, so the state walks all 2^32 values.
const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// Divisor mapping a `u32` onto `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

/// Deterministic stream of floats in `[0, 1)` expanded from a 32-bit seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    /// Create a stream from any integer seed.
    ///
    /// The seed is truncated to 32-bit two's complement (wraparound, never an
    /// error), so `1 << 32` seeds the same stream as `0`.
    pub fn new(seed: i64) -> Self {
        Self::from_i32(seed as i32)
    }

    /// Create a stream from a seed already in 32-bit signed form.
    pub fn from_i32(seed: i32) -> Self {
        Self {
            state: seed as u32,
        }
    }

    /// Advance the state and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let s = self.state;

        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Advance the state and return the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }
}

impl Iterator for SeededStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

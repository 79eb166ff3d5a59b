//! 256-bit storage value
//!
//! Pool coefficients and discounted amounts are uint256 on the pool side.
//! They are kept as four little-endian u64 limbs so they serialize as
//! plain arrays, and converted to `ethnum::U256` for arithmetic.

use anchor_lang::prelude::*;
use ethnum::U256;
use std::cmp::Ordering;
use std::fmt;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uint256 {
    /// Little-endian limbs (least significant first)
    pub words: [u64; 4],
}

impl Uint256 {
    pub const ZERO: Self = Self { words: [0; 4] };

    pub const fn new(value: u128) -> Self {
        Self {
            words: [value as u64, (value >> 64) as u64, 0, 0],
        }
    }

    pub fn as_u256(&self) -> U256 {
        let [w0, w1, w2, w3] = self.words;
        U256::from_words(
            (w3 as u128) << 64 | w2 as u128,
            (w1 as u128) << 64 | w0 as u128,
        )
    }

    pub fn is_zero(&self) -> bool {
        self.words == [0; 4]
    }
}

impl From<U256> for Uint256 {
    fn from(value: U256) -> Self {
        let (hi, lo) = value.into_words();
        Self {
            words: [lo as u64, (lo >> 64) as u64, hi as u64, (hi >> 64) as u64],
        }
    }
}

impl From<Uint256> for U256 {
    fn from(value: Uint256) -> Self {
        value.as_u256()
    }
}

impl From<u128> for Uint256 {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl PartialOrd for Uint256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uint256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_u256().cmp(&other.as_u256())
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_u256(), f)
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_u256(), f)
    }
}

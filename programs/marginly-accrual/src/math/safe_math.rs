//! Safe math utilities to prevent overflow/underflow
//!
//! All FP96 values are 256-bit, matching the pool's uint256 storage.

use anchor_lang::prelude::*;
use ethnum::U256;
use crate::errors::MarginlyError;

/// Checked addition with custom error
#[inline]
pub fn checked_add(a: U256, b: U256) -> Result<U256> {
    a.checked_add(b).ok_or_else(|| MarginlyError::MathOverflow.into())
}

/// Checked subtraction with custom error
#[inline]
pub fn checked_sub(a: U256, b: U256) -> Result<U256> {
    a.checked_sub(b).ok_or_else(|| MarginlyError::MathUnderflow.into())
}

/// Checked multiplication with custom error
#[inline]
pub fn checked_mul(a: U256, b: U256) -> Result<U256> {
    a.checked_mul(b).ok_or_else(|| MarginlyError::MathOverflow.into())
}

/// Checked division with custom error (truncating)
#[inline]
pub fn checked_div(a: U256, b: U256) -> Result<U256> {
    if b == U256::ZERO {
        return Err(MarginlyError::DivisionByZero.into());
    }
    Ok(a / b)
}

/// (a * b) / c, truncating
#[inline]
pub fn mul_div(a: U256, b: U256, c: U256) -> Result<U256> {
    checked_div(checked_mul(a, b)?, c)
}

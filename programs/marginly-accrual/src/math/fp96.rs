//! Fixed-point FP96 (2^96) arithmetic operations
//!
//! All calculations use U256 intermediates and truncate on every division.
//! Order of operations matches the on-chain pool so results are bit-exact.

use anchor_lang::prelude::*;
use ethnum::U256;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use crate::constants::{FP48_ONE, FP96_ONE, HUMAN_DECIMALS, TAYLOR_STEPS};
use crate::errors::MarginlyError;
use super::safe_math::{checked_add, checked_sub, mul_div};

/// FP96 one as a 256-bit value
pub const ONE: U256 = U256::new(FP96_ONE);

/// FP96 multiplication (a * b / ONE)
#[inline]
pub fn mul_fp96(a: U256, b: U256) -> Result<U256> {
    mul_div(a, b, ONE)
}

/// FP96 division (a * ONE / b)
#[inline]
pub fn div_fp96(nom: U256, denom: U256) -> Result<U256> {
    mul_div(nom, ONE, denom)
}

/// FP96 value of the plain ratio nom / denom
#[inline]
pub fn fp96_from_ratio(nom: U256, denom: U256) -> Result<U256> {
    mul_div(nom, ONE, denom)
}

/// Exact exponentiation by squaring
///
/// Every step truncates, so the result is the FP96 value the pool would get
/// from its own square-and-multiply loop.
pub fn pow(base: U256, exponent: u64) -> Result<U256> {
    let mut result = ONE;
    let mut base = base;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_fp96(result, base)?;
        }
        exponent >>= 1;
        // Last square is never used
        if exponent > 0 {
            base = mul_fp96(base, base)?;
        }
    }

    Ok(result)
}

/// (1 + x)^n ≈ 1 + n·x + n(n-1)/2·x² + n(n-1)(n-2)/6·x³
///
/// Only the first TAYLOR_STEPS binomial terms are summed (fewer when the
/// exponent is smaller), so cost does not grow with the exponent.
///
/// # Arguments
/// * `base` - FP96 value `1 + x`, with `x < 1`
/// * `exponent` - Number of compounding periods
pub fn pow_taylor(base: U256, exponent: u64) -> Result<U256> {
    let x = checked_sub(base, ONE)?;
    require!(x < ONE, MarginlyError::SeriesDivergence);

    let mut result = ONE;
    let mut term = ONE;

    let steps = exponent.min(TAYLOR_STEPS);
    for i in 0..steps {
        let multiplier = mul_div(U256::from(exponent - i), x, U256::from(i + 1))?;
        term = mul_fp96(term, multiplier)?;
        result = checked_add(result, term)?;
    }

    Ok(result)
}

/// Convert an FP96 value to a decimal
///
/// Goes through FP48 so the integer mantissa fits the 96-bit decimal range.
/// Bits below 2^-48 are dropped.
pub fn fp96_to_decimal(value: U256) -> Result<Decimal> {
    let fp48: U256 = value >> 48;
    require!(fp48 <= U256::new(i128::MAX as u128), MarginlyError::InvalidDecimal);

    let fp48 = Decimal::try_from_i128_with_scale(fp48.as_u128() as i128, 0)
        .map_err(|_| MarginlyError::InvalidDecimal)?;
    fp48.checked_div(Decimal::from(FP48_ONE as u64))
        .ok_or_else(|| MarginlyError::InvalidDecimal.into())
}

/// Convert a non-negative decimal to FP96 (precision 2^-48)
pub fn fp96_from_decimal(value: Decimal) -> Result<U256> {
    require!(!value.is_sign_negative(), MarginlyError::InvalidDecimal);

    let fp48 = value
        .checked_mul(Decimal::from(FP48_ONE as u64))
        .ok_or(MarginlyError::InvalidDecimal)?
        .trunc()
        .to_u128()
        .ok_or(MarginlyError::InvalidDecimal)?;

    Ok(U256::new(fp48) << 48)
}

/// Render an FP96 value as a plain decimal string, e.g. "1.5"
///
/// The exact quotient is rounded half up to HUMAN_DECIMALS places and
/// trailing zeros are dropped.
pub fn to_human_string(value: U256) -> String {
    let scale = U256::new(10).pow(HUMAN_DECIMALS);
    let mut integer: U256 = value >> 96;
    let fraction = value & (ONE - U256::ONE);

    let mut digits = (fraction * scale + (ONE >> 1)) >> 96;
    if digits == scale {
        integer += U256::ONE;
        digits = U256::ZERO;
    }

    if digits == U256::ZERO {
        return integer.to_string();
    }

    let digits = format!("{:0>width$}", digits.to_string(), width = HUMAN_DECIMALS as usize);
    format!("{}.{}", integer, digits.trim_end_matches('0'))
}

//! Position leverage and heap sort keys
//!
//! Short positions owe base and hold quote; long positions owe quote and
//! hold base. Sort keys are debt/collateral ratios in FP48, the ordering the
//! pool uses for its margin call heaps.

use anchor_lang::prelude::*;
use ethnum::U256;
use crate::constants::FP48_ONE;
use crate::errors::MarginlyError;
use super::fp96::{div_fp96, mul_fp96, ONE};
use super::safe_math::{checked_mul, checked_sub, mul_div};

/// Sort key of a long position: quote debt / base collateral value (FP48)
pub fn calc_long_sort_key(initial_price: U256, quote_amount: U256, base_amount: U256) -> Result<U256> {
    let collateral = mul_fp96(initial_price, base_amount)?;
    let debt = quote_amount;

    mul_div(debt, U256::new(FP48_ONE), collateral)
}

/// Sort key of a short position: base debt value / quote collateral (FP48)
pub fn calc_short_sort_key(initial_price: U256, quote_amount: U256, base_amount: U256) -> Result<U256> {
    let collateral = quote_amount;
    let debt = mul_fp96(initial_price, base_amount)?;

    mul_div(debt, U256::new(FP48_ONE), collateral)
}

/// Leverage of a short position (FP96)
///
/// Real amounts are floored to whole tokens before the ratio is taken.
pub fn calc_leverage_short(
    base_price: U256,
    quote_collateral_coeff: U256,
    base_debt_coeff: U256,
    quote_amount: U256,
    base_amount: U256,
) -> Result<U256> {
    let collateral = whole(mul_fp96(quote_collateral_coeff, quote_amount)?)?;
    let debt = whole(mul_fp96(mul_fp96(base_debt_coeff, base_price)?, base_amount)?)?;

    leverage(collateral, debt)
}

/// Leverage of a long position (FP96)
pub fn calc_leverage_long(
    base_price: U256,
    quote_debt_coeff: U256,
    base_collateral_coeff: U256,
    quote_amount: U256,
    base_amount: U256,
) -> Result<U256> {
    let collateral = whole(mul_fp96(mul_fp96(base_collateral_coeff, base_price)?, base_amount)?)?;
    let debt = whole(mul_fp96(quote_debt_coeff, quote_amount)?)?;

    leverage(collateral, debt)
}

/// Integer amount back to FP96 scale
#[inline]
fn whole(amount: U256) -> Result<U256> {
    checked_mul(amount, ONE)
}

/// collateral / (collateral - debt)
fn leverage(collateral: U256, debt: U256) -> Result<U256> {
    require!(collateral > debt, MarginlyError::PositionUnderwater);
    let net = checked_sub(collateral, debt)?;
    div_fp96(collateral, net)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(num: u128, denom: u128) -> U256 {
        U256::new(num) * ONE / U256::new(denom)
    }

    fn amount(value: u128) -> U256 {
        U256::new(value)
    }

    #[test]
    fn test_leverage_short() {
        // Price 2, 1000 quote collateral, 250 base debt → debt 500, leverage 2
        let lev = calc_leverage_short(fp(2, 1), ONE, ONE, amount(1000), amount(250)).unwrap();
        assert_eq!(lev, fp(2, 1));
    }

    #[test]
    fn test_leverage_long() {
        // Price 2, 1000 base collateral (2000 quote), 1500 quote debt → leverage 4
        let lev = calc_leverage_long(fp(2, 1), ONE, ONE, amount(1500), amount(1000)).unwrap();
        assert_eq!(lev, fp(4, 1));
    }

    #[test]
    fn test_leverage_grows_with_debt_coeff() {
        let base = calc_leverage_short(ONE, ONE, ONE, amount(1000), amount(500)).unwrap();
        let accrued = calc_leverage_short(ONE, ONE, fp(11, 10), amount(1000), amount(500)).unwrap();
        assert!(accrued > base);
    }

    #[test]
    fn test_leverage_with_large_coeffs() {
        // Coefficients far beyond u128 still give a finite leverage
        let coeff = ONE << 40;
        let lev = calc_leverage_long(ONE, coeff, coeff, amount(500), amount(1000)).unwrap();
        assert_eq!(lev, fp(2, 1));
    }

    #[test]
    fn test_underwater_position() {
        assert_eq!(
            calc_leverage_short(fp(2, 1), ONE, ONE, amount(1000), amount(500)).unwrap_err(),
            MarginlyError::PositionUnderwater.into()
        );
        assert_eq!(
            calc_leverage_long(ONE, ONE, ONE, amount(1000), amount(999)).unwrap_err(),
            MarginlyError::PositionUnderwater.into()
        );
    }

    #[test]
    fn test_sort_keys() {
        // Long: 500 quote debt over 1000 base at price 1 → 0.5
        assert_eq!(
            calc_long_sort_key(ONE, amount(500), amount(1000)).unwrap(),
            U256::new(FP48_ONE / 2)
        );

        // Short: 250 base at price 2 over 1000 quote → 0.5
        assert_eq!(
            calc_short_sort_key(fp(2, 1), amount(1000), amount(250)).unwrap(),
            U256::new(FP48_ONE / 2)
        );
    }

    #[test]
    fn test_sort_key_zero_collateral() {
        assert!(calc_long_sort_key(ONE, amount(500), U256::ZERO).is_err());
        assert!(calc_short_sort_key(ONE, U256::ZERO, amount(500)).is_err());
    }
}

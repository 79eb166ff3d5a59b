//! Interest accrual logic for Marginly pools
//!
//! Debt grows by the leverage-scaled interest rate and the protocol fee,
//! both compounded with the 3-term Taylor series. Interest is distributed to
//! collateral holders through the collateral coefficient; the fee part is
//! credited to the technical position in discounted units.

use anchor_lang::prelude::*;
use ethnum::U256;
use crate::constants::{SECONDS_IN_YEAR_X96, WHOLE_ONE};
use crate::errors::MarginlyError;
use crate::state::{MarginlyPoolState, Uint256};
use super::fp96::{fp96_from_ratio, mul_fp96, pow_taylor, ONE};
use super::safe_math::{checked_add, checked_sub, mul_div};

/// Result of interest accrual
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccrualResult {
    pub base_debt_coeff: Uint256,
    pub quote_debt_coeff: Uint256,
    pub base_collateral_coeff: Uint256,
    pub quote_collateral_coeff: Uint256,
    /// Fee owed to the technical position (discounted base units)
    pub discounted_base_debt_fee: Uint256,
    /// Fee owed to the technical position (discounted quote units)
    pub discounted_quote_debt_fee: Uint256,
}

/// Pre-accrual values of one side of the pool
struct SideState {
    debt_coeff: U256,
    collateral_coeff: U256,
    discounted_debt: U256,
    discounted_collateral: U256,
    leverage_x96: U256,
}

struct SideAccrual {
    debt_coeff: U256,
    collateral_coeff: U256,
    discounted_fee: U256,
}

/// Compute pool coefficients after `elapsed_seconds` of accrual
///
/// Pure function of the snapshot: the same inputs always give the same
/// result, bit for bit.
///
/// # Arguments
/// * `prev_state` - Snapshot taken at the last reinit
/// * `elapsed_seconds` - Seconds since that reinit (must be positive)
pub fn compute_accrual(
    prev_state: &MarginlyPoolState,
    elapsed_seconds: i64,
) -> Result<AccrualResult> {
    require_gt!(elapsed_seconds, 0, MarginlyError::InvalidArgument);
    let seconds = elapsed_seconds as u64;

    let params = &prev_state.params;
    let interest_rate_x96 = mul_div(U256::from(params.interest_rate), ONE, U256::new(WHOLE_ONE))?;
    let fee_x96 = mul_div(U256::from(params.fee), ONE, U256::new(WHOLE_ONE))?;

    let one_plus_fee = checked_add(
        mul_div(fee_x96, ONE, U256::new(SECONDS_IN_YEAR_X96))?,
        ONE,
    )?;
    let fee_dt = pow_taylor(one_plus_fee, seconds)?;

    let base = accrue_side(
        &SideState {
            debt_coeff: prev_state.base_debt_coeff.as_u256(),
            collateral_coeff: prev_state.base_collateral_coeff.as_u256(),
            discounted_debt: prev_state.discounted_base_debt.as_u256(),
            discounted_collateral: prev_state.discounted_base_collateral.as_u256(),
            leverage_x96: prev_state.system_leverage.short_x96.as_u256(),
        },
        interest_rate_x96,
        fee_dt,
        seconds,
    )?;

    let quote = accrue_side(
        &SideState {
            debt_coeff: prev_state.quote_debt_coeff.as_u256(),
            collateral_coeff: prev_state.quote_collateral_coeff.as_u256(),
            discounted_debt: prev_state.discounted_quote_debt.as_u256(),
            discounted_collateral: prev_state.discounted_quote_collateral.as_u256(),
            leverage_x96: prev_state.system_leverage.long_x96.as_u256(),
        },
        interest_rate_x96,
        fee_dt,
        seconds,
    )?;

    Ok(AccrualResult {
        base_debt_coeff: base.debt_coeff.into(),
        quote_debt_coeff: quote.debt_coeff.into(),
        base_collateral_coeff: base.collateral_coeff.into(),
        quote_collateral_coeff: quote.collateral_coeff.into(),
        discounted_base_debt_fee: base.discounted_fee.into(),
        discounted_quote_debt_fee: quote.discounted_fee.into(),
    })
}

fn accrue_side(
    side: &SideState,
    interest_rate_x96: U256,
    fee_dt: U256,
    seconds: u64,
) -> Result<SideAccrual> {
    // Nothing to accrue against
    if side.discounted_collateral == U256::ZERO {
        return Ok(SideAccrual {
            debt_coeff: side.debt_coeff,
            collateral_coeff: side.collateral_coeff,
            discounted_fee: U256::ZERO,
        });
    }

    let real_debt_prev = mul_fp96(side.debt_coeff, side.discounted_debt)?;

    let one_plus_ir = checked_add(
        mul_div(
            interest_rate_x96,
            side.leverage_x96,
            U256::new(SECONDS_IN_YEAR_X96),
        )?,
        ONE,
    )?;
    let accrued_rate_dt = pow_taylor(one_plus_ir, seconds)?;

    // Interest on debt spread over all discounted collateral
    let accrued_interest = mul_fp96(checked_sub(accrued_rate_dt, ONE)?, real_debt_prev)?;
    let collateral_coeff = checked_add(
        side.collateral_coeff,
        fp96_from_ratio(accrued_interest, side.discounted_collateral)?,
    )?;

    let debt_coeff_mul = mul_fp96(accrued_rate_dt, fee_dt)?;
    let debt_coeff = mul_fp96(side.debt_coeff, debt_coeff_mul)?;

    let real_debt_fee = mul_fp96(
        mul_fp96(accrued_rate_dt, checked_sub(fee_dt, ONE)?)?,
        real_debt_prev,
    )?;
    let discounted_fee = fp96_from_ratio(real_debt_fee, collateral_coeff)?;

    Ok(SideAccrual {
        debt_coeff,
        collateral_coeff,
        discounted_fee,
    })
}

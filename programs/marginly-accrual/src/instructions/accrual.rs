//! Accrual instructions (compute, verify against an observed post-state)

use anchor_lang::prelude::*;
use crate::errors::MarginlyError;
use crate::events::{AccrualComputed, AccrualVerified};
use crate::math::{checked_add, compute_accrual, AccrualResult};
use crate::state::{MarginlyPoolState, Uint256};

// ============================================================================
// Compute Accrual
// ============================================================================

#[derive(Accounts)]
pub struct ComputeAccrual {}

pub fn compute_accrual_ix(
    _ctx: Context<ComputeAccrual>,
    prev_state: MarginlyPoolState,
    seconds_passed: i64,
) -> Result<AccrualResult> {
    let result = compute_accrual(&prev_state, seconds_passed)?;

    msg!(
        "Accrued {}s: base debt coeff {}, quote debt coeff {}",
        seconds_passed,
        result.base_debt_coeff,
        result.quote_debt_coeff,
    );

    emit!(AccrualComputed {
        seconds_passed,
        base_debt_coeff: result.base_debt_coeff,
        quote_debt_coeff: result.quote_debt_coeff,
        base_collateral_coeff: result.base_collateral_coeff,
        quote_collateral_coeff: result.quote_collateral_coeff,
        discounted_base_debt_fee: result.discounted_base_debt_fee,
        discounted_quote_debt_fee: result.discounted_quote_debt_fee,
    });

    Ok(result)
}

// ============================================================================
// Verify Accrual
// ============================================================================

#[derive(Accounts)]
pub struct VerifyAccrual {}

pub fn verify_accrual_ix(
    _ctx: Context<VerifyAccrual>,
    prev_state: MarginlyPoolState,
    post_state: MarginlyPoolState,
) -> Result<()> {
    let result = verify_accrued_rate_coeffs(&prev_state, &post_state)?;

    emit!(AccrualVerified {
        prev_reinit_timestamp: prev_state.last_reinit_timestamp_seconds,
        post_reinit_timestamp: post_state.last_reinit_timestamp_seconds,
        discounted_base_debt_fee: result.discounted_base_debt_fee,
        discounted_quote_debt_fee: result.discounted_quote_debt_fee,
    });

    Ok(())
}

/// Check that `post` is exactly `prev` accrued up to post's reinit timestamp
///
/// All four coefficients must match, and the technical position must have
/// been credited with exactly the accrued fees.
///
/// # Returns
/// The expected accrual on success
pub fn verify_accrued_rate_coeffs(
    prev: &MarginlyPoolState,
    post: &MarginlyPoolState,
) -> Result<AccrualResult> {
    let expected = compute_accrual(prev, prev.seconds_passed(post)?)?;

    require_match(
        "base debt coeff",
        expected.base_debt_coeff,
        post.base_debt_coeff,
        MarginlyError::BaseDebtCoeffMismatch,
    )?;
    require_match(
        "quote debt coeff",
        expected.quote_debt_coeff,
        post.quote_debt_coeff,
        MarginlyError::QuoteDebtCoeffMismatch,
    )?;
    require_match(
        "quote collateral coeff",
        expected.quote_collateral_coeff,
        post.quote_collateral_coeff,
        MarginlyError::QuoteCollateralCoeffMismatch,
    )?;
    require_match(
        "base collateral coeff",
        expected.base_collateral_coeff,
        post.base_collateral_coeff,
        MarginlyError::BaseCollateralCoeffMismatch,
    )?;

    let tech_base = checked_add(
        prev.tech_position.discounted_base_amount.as_u256(),
        expected.discounted_base_debt_fee.as_u256(),
    )?;
    require_match(
        "tech position base",
        tech_base.into(),
        post.tech_position.discounted_base_amount,
        MarginlyError::TechPositionBaseMismatch,
    )?;

    let tech_quote = checked_add(
        prev.tech_position.discounted_quote_amount.as_u256(),
        expected.discounted_quote_debt_fee.as_u256(),
    )?;
    require_match(
        "tech position quote",
        tech_quote.into(),
        post.tech_position.discounted_quote_amount,
        MarginlyError::TechPositionQuoteMismatch,
    )?;

    Ok(expected)
}

fn require_match(name: &str, expected: Uint256, observed: Uint256, error: MarginlyError) -> Result<()> {
    if expected != observed {
        msg!("{} mismatch: expected {}, observed {}", name, expected, observed);
        return Err(error.into());
    }
    Ok(())
}

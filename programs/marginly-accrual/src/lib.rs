//! Marginly Interest Accrual
//!
//! Reproduces the Marginly pool's per-reinit coefficient update in FP96
//! fixed point, bit for bit, so observed pool state can be verified.
//!
//! ## Features
//! - Leverage-scaled interest and compounding protocol fee
//! - 3-term Taylor power series, constant cost in elapsed time
//! - Discounted-unit accounting for debt, collateral and the fee position
//! - Position leverage and margin call heap sort keys
//! - On-chain verification of a pre/post snapshot pair

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod math;
pub mod state;
pub mod instructions;

use instructions::*;
use math::AccrualResult;
use state::MarginlyPoolState;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod marginly_accrual {
    use super::*;

    // =========================================================================
    // Accrual Instructions
    // =========================================================================

    pub fn compute_accrual(
        ctx: Context<ComputeAccrual>,
        prev_state: MarginlyPoolState,
        seconds_passed: i64,
    ) -> Result<AccrualResult> {
        instructions::accrual::compute_accrual_ix(ctx, prev_state, seconds_passed)
    }

    pub fn verify_accrual(
        ctx: Context<VerifyAccrual>,
        prev_state: MarginlyPoolState,
        post_state: MarginlyPoolState,
    ) -> Result<()> {
        instructions::accrual::verify_accrual_ix(ctx, prev_state, post_state)
    }
}

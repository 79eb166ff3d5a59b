use anchor_lang::prelude::*;
use crate::state::Uint256;

// === Accrual Events ===

#[event]
pub struct AccrualComputed {
    pub seconds_passed: i64,
    pub base_debt_coeff: Uint256,
    pub quote_debt_coeff: Uint256,
    pub base_collateral_coeff: Uint256,
    pub quote_collateral_coeff: Uint256,
    pub discounted_base_debt_fee: Uint256,
    pub discounted_quote_debt_fee: Uint256,
}

#[event]
pub struct AccrualVerified {
    pub prev_reinit_timestamp: i64,
    pub post_reinit_timestamp: i64,
    pub discounted_base_debt_fee: Uint256,
    pub discounted_quote_debt_fee: Uint256,
}

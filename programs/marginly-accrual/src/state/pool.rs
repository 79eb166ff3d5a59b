//! Marginly pool state snapshot
//!
//! A snapshot is read from the pool before a state-mutating call and again
//! after it. The accrual calculator reproduces the second from the first.

use anchor_lang::prelude::*;
use crate::constants::FP96_ONE;
use crate::errors::MarginlyError;
use super::Uint256;

/// Kind of a pool position
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionType {
    #[default]
    Uninitialized,
    Lend,
    Short,
    Long,
}

/// Pool operating mode
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarginlyPoolMode {
    #[default]
    Regular,
    ShortEmergency,
    LongEmergency,
}

/// Pool entrypoint selector
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallType {
    DepositBase,
    DepositQuote,
    WithdrawBase,
    WithdrawQuote,
    Short,
    Long,
    ClosePosition,
    Reinit,
    ReceivePosition,
    EmergencyWithdraw,
}

/// Pool position as returned by `positions(owner)`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub position_type: PositionType,

    /// Index in the short/long heap (0 when not in a heap)
    pub heap_position: u32,

    pub discounted_base_amount: Uint256,

    pub discounted_quote_amount: Uint256,
}

/// Protocol-wide average leverage per side (FP96)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemLeverage {
    /// Short side, scales the base debt interest rate
    pub short_x96: Uint256,

    /// Long side, scales the quote debt interest rate
    pub long_x96: Uint256,
}

impl Default for SystemLeverage {
    fn default() -> Self {
        Self {
            short_x96: Uint256::new(FP96_ONE),
            long_x96: Uint256::new(FP96_ONE),
        }
    }
}

/// Pool parameters
///
/// Rates and slippage are parts-per-million of WHOLE_ONE.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarginlyParams {
    pub max_leverage: u8,

    /// TWAP window for the regular price (seconds)
    pub price_seconds_ago: u16,

    /// TWAP window for the margin call price (seconds)
    pub price_seconds_ago_mc: u16,

    /// Nominal yearly interest rate (ppm)
    pub interest_rate: u32,

    /// Yearly protocol fee rate (ppm)
    pub fee: u32,

    /// Swap fee (ppm)
    pub swap_fee: u32,

    /// Margin call slippage (ppm)
    pub mc_slippage: u32,

    pub position_min_amount: u128,

    pub quote_limit: u128,
}

impl MarginlyParams {
    /// Leverage 20, no interest, no fee
    pub fn default_leverage_without_ir() -> Self {
        Self {
            max_leverage: 20,
            ..Self::low_leverage_without_ir()
        }
    }

    /// Leverage 19, no interest, no fee
    pub fn low_leverage_without_ir() -> Self {
        Self {
            max_leverage: 19,
            price_seconds_ago: 900,    // 15 min
            price_seconds_ago_mc: 900, // 15 min
            interest_rate: 0,
            fee: 0,
            swap_fee: 1000,            // 0.1%
            mc_slippage: 50_000,       // 5%
            position_min_amount: 5,
            quote_limit: 1_000_000,
        }
    }

    /// Leverage 19, 5.4% interest, 2% fee
    pub fn low_leverage_with_ir() -> Self {
        Self {
            interest_rate: 54_000,
            fee: 20_000,
            ..Self::low_leverage_without_ir()
        }
    }
}

/// Snapshot of the pool values that take part in interest accrual
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarginlyPoolState {
    // === Coefficients (FP96) ===

    pub base_debt_coeff: Uint256,

    pub quote_debt_coeff: Uint256,

    pub base_collateral_coeff: Uint256,

    pub quote_collateral_coeff: Uint256,

    // === Aggregate Discounted Amounts ===

    pub discounted_base_debt: Uint256,

    pub discounted_quote_debt: Uint256,

    pub discounted_base_collateral: Uint256,

    pub discounted_quote_collateral: Uint256,

    /// Fee-collection position, credited with accrued fees
    pub tech_position: Position,

    pub system_leverage: SystemLeverage,

    pub params: MarginlyParams,

    /// Timestamp of the last coefficient recomputation
    pub last_reinit_timestamp_seconds: i64,
}

impl MarginlyPoolState {
    /// Fresh pool: unit coefficients, no positions
    pub fn initial(params: MarginlyParams, timestamp: i64) -> Self {
        Self {
            base_debt_coeff: Uint256::new(FP96_ONE),
            quote_debt_coeff: Uint256::new(FP96_ONE),
            base_collateral_coeff: Uint256::new(FP96_ONE),
            quote_collateral_coeff: Uint256::new(FP96_ONE),
            params,
            last_reinit_timestamp_seconds: timestamp,
            ..Default::default()
        }
    }

    /// Seconds between this snapshot's reinit and a later one's
    pub fn seconds_passed(&self, later: &MarginlyPoolState) -> Result<i64> {
        later
            .last_reinit_timestamp_seconds
            .checked_sub(self.last_reinit_timestamp_seconds)
            .ok_or_else(|| MarginlyError::MathOverflow.into())
    }
}

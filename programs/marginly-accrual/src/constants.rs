//! Protocol constants and configuration parameters

// === Fixed-Point Constants ===

/// FP96 unit (2^96)
pub const FP96_ONE: u128 = 1 << 96;

/// FP48 unit (2^48), used for sort keys and FP96 → decimal conversion
pub const FP48_ONE: u128 = 1 << 48;

/// Denominator for parts-per-million parameters (interest rate, fees, slippage)
pub const WHOLE_ONE: u128 = 1_000_000;

// === Interest Rate Constants ===

/// Seconds per year (365.25 days)
pub const SECONDS_IN_YEAR: u128 = 31_557_600;

/// Seconds per year scaled into FP96
pub const SECONDS_IN_YEAR_X96: u128 = SECONDS_IN_YEAR * FP96_ONE;

/// Number of binomial terms summed by the Taylor power approximation
pub const TAYLOR_STEPS: u64 = 3;

// === Display Constants ===

/// Decimal places rendered by to_human_string
pub const HUMAN_DECIMALS: u32 = 20;

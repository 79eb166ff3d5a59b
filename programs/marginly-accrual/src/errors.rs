use anchor_lang::prelude::*;

#[error_code]
pub enum MarginlyError {
    // === Input Validation Errors ===
    #[msg("Wrong argument: elapsed seconds must be positive")]
    InvalidArgument,

    #[msg("Decimal value cannot be represented in FP96")]
    InvalidDecimal,

    // === Series Errors ===
    #[msg("Per-period rate is not below FP96 one, Taylor series diverges")]
    SeriesDivergence,

    // === Math Errors ===
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("Division by zero")]
    DivisionByZero,

    // === Position Errors ===
    #[msg("Position collateral does not exceed its debt")]
    PositionUnderwater,

    // === Verification Errors ===
    #[msg("Base debt coefficient does not match expected accrual")]
    BaseDebtCoeffMismatch,

    #[msg("Quote debt coefficient does not match expected accrual")]
    QuoteDebtCoeffMismatch,

    #[msg("Base collateral coefficient does not match expected accrual")]
    BaseCollateralCoeffMismatch,

    #[msg("Quote collateral coefficient does not match expected accrual")]
    QuoteCollateralCoeffMismatch,

    #[msg("Technical position base amount does not include expected fee")]
    TechPositionBaseMismatch,

    #[msg("Technical position quote amount does not include expected fee")]
    TechPositionQuoteMismatch,
}

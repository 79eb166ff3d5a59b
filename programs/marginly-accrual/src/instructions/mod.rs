//! Instruction handlers for the accrual program

pub mod accrual;

pub use accrual::*;

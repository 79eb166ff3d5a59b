//! Math library modules for FP96 fixed-point accrual

pub mod safe_math;
pub mod fp96;
pub mod leverage;
pub mod accrual;

pub use safe_math::*;
pub use fp96::*;
pub use leverage::*;
pub use accrual::*;

//! Pool state snapshot structures

pub mod uint256;
pub mod pool;

pub use uint256::*;
pub use pool::*;

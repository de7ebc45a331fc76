//! Constant-product pool implementation.
//!
//! [`LiquidityPool`] is the pool state machine; [`quote`] is its pure
//! pricing function and [`MINIMAL_LIQUIDITY`] the share amount locked at
//! the first deposit.

mod liquidity_pool;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use liquidity_pool::{quote, LiquidityPool, MINIMAL_LIQUIDITY};

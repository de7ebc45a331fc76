//! Liquidity share accounting.
//!
//! - [`PositionToken`]: a transferable record of shares in one pool.
//! - [`PositionSupply`]: the pool-owned issuer of those shares.
//! - [`PositionStore`]: custody of records per account.

mod store;
mod supply;
mod token;

pub use store::{PositionStore, Rejected};
pub use supply::PositionSupply;
pub use token::PositionToken;

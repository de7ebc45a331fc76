//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

// Domain values
pub use crate::domain::{Address, AssetId, BasisPoints, Clock, Coin, ObjectId, TokenPairKey, TxContext};

// Core traits
pub use crate::traits::Asset;

// Configuration
pub use crate::config::PoolConfig;

// Errors and records
pub use crate::error::{AmmError, Result};
pub use crate::events::Event;

// Pools, shares, registry and routing
pub use crate::pools::{LiquidityPool, MINIMAL_LIQUIDITY};
pub use crate::position::{PositionStore, PositionToken, Rejected};
pub use crate::registry::PoolRegistry;
pub use crate::router::{AToB, BToA, Router, SwapRoute};

//! Configuration for constant-product pools.

use serde::{Deserialize, Serialize};

use crate::domain::BasisPoints;
use crate::error::AmmError;

/// Immutable parameters of a pool, fixed at creation.
///
/// # Validation
///
/// - The fee must be strictly below 100% (10 000 bp).
///
/// # Examples
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::BasisPoints;
///
/// assert_eq!(PoolConfig::default().fee().get(), 30);
///
/// let cfg = PoolConfig::new(BasisPoints::new(5)).expect("valid fee");
/// assert_eq!(cfg.fee().get(), 5);
/// assert!(PoolConfig::new(BasisPoints::new(10_000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    fee_bps: BasisPoints,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee_bps` is 10 000 or more.
    pub fn new(fee_bps: BasisPoints) -> Result<Self, AmmError> {
        let config = Self { fee_bps };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialised configs bypass [`new`](Self::new); call this before use.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub const fn validate(&self) -> Result<(), AmmError> {
        if !self.fee_bps.is_valid_fee() {
            return Err(AmmError::InvalidFee("fee must be below 10000 bp"));
        }
        Ok(())
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee_bps
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fee_bps: BasisPoints::DEFAULT_FEE,
        }
    }
}

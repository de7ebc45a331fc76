//! Basis-point representation for fee rates.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Denominator that represents 100% (10 000 bp).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Fee charged by a freshly created pool when none is configured (0.30%).
pub const DEFAULT_FEE_BPS: u64 = 30;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Every `u64` is representable, but only values below
/// [`BPS_DENOMINATOR`] are usable as a swap fee: a 100% fee would leave
/// nothing to price.  [`PoolConfig`](crate::config::PoolConfig) enforces
/// that bound.
///
/// # Examples
///
/// ```
/// use pairswap::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert_eq!(bp.complement(), Some(9_970));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u64);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// Standard 30 bp swap fee.
    pub const DEFAULT_FEE: Self = Self(DEFAULT_FEE_BPS);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the value is a usable fee (strictly below 100%).
    #[must_use]
    pub const fn is_valid_fee(&self) -> bool {
        self.0 < BPS_DENOMINATOR
    }

    /// Returns `10 000 − self`, the share of the input that reaches the
    /// pricing curve, or `None` if the rate exceeds 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<u64> {
        BPS_DENOMINATOR.checked_sub(self.0)
    }

    /// Fee retained by the pool on `amount_in`, rounded down.
    ///
    /// Saturates at `u64::MAX` for rates above 100%.
    #[must_use]
    pub fn fee_on(&self, amount_in: u64) -> u64 {
        let fee = u128::from(amount_in) * u128::from(self.0) / u128::from(BPS_DENOMINATOR);
        u64::try_from(fee).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::DEFAULT_FEE.get(), 30);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
        assert_eq!(BasisPoints::default(), BasisPoints::ZERO);
    }

    #[test]
    fn fee_validity() {
        assert!(BasisPoints::ZERO.is_valid_fee());
        assert!(BasisPoints::new(9_999).is_valid_fee());
        assert!(!BasisPoints::MAX_PERCENT.is_valid_fee());
        assert!(!BasisPoints::new(u64::MAX).is_valid_fee());
    }

    #[test]
    fn complement_of_default_fee() {
        assert_eq!(BasisPoints::DEFAULT_FEE.complement(), Some(9_970));
        assert_eq!(BasisPoints::MAX_PERCENT.complement(), Some(0));
        assert_eq!(BasisPoints::new(10_001).complement(), None);
    }

    #[test]
    fn fee_on_rounds_down() {
        // 30bp of 1_000 = 3, of 100 = 0.3 -> 0
        assert_eq!(BasisPoints::DEFAULT_FEE.fee_on(1_000), 3);
        assert_eq!(BasisPoints::DEFAULT_FEE.fee_on(100), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.fee_on(u64::MAX), u64::MAX);
    }

    #[test]
    fn fee_on_saturates_above_full_rate() {
        assert_eq!(BasisPoints::new(20_000).fee_on(1_000), 2_000);
        assert_eq!(BasisPoints::new(20_000).fee_on(u64::MAX), u64::MAX);
        assert_eq!(BasisPoints::new(u64::MAX).fee_on(u64::MAX), u64::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }

    #[test]
    fn serde_is_transparent() {
        let Ok(json) = serde_json::to_string(&BasisPoints::new(25)) else {
            panic!("serializable");
        };
        assert_eq!(json, "25");
    }
}

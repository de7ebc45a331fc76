//! Constant-product swap pricing (`x · y = k` with an input-side fee).
//!
//! # Forward (exact input)
//!
//! ```text
//! net        = amount_in × (10 000 − fee_bps)
//! amount_out = ⌊net × reserve_out / (reserve_in × 10 000 + net)⌋
//! ```
//!
//! # Inverse (exact output)
//!
//! ```text
//! amount_in = ⌊reserve_in × amount_out × 10 000
//!              / ((reserve_out − amount_out) × (10 000 − fee_bps))⌋ + 1
//! ```
//!
//! Both directions round against the trader: the output is floored and the
//! required input is bumped by one unit, so the pool's `k` never shrinks.

use crate::domain::{BasisPoints, BPS_DENOMINATOR};
use crate::error::AmmError;

use super::U256;

/// Output obtained by selling `amount_in` into a pool holding
/// `reserve_in` / `reserve_out`.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::InvalidFee`] if `fee_bps` exceeds 100%.
///
/// # Examples
///
/// ```
/// use pairswap::domain::BasisPoints;
/// use pairswap::math::get_amount_out;
///
/// let out = get_amount_out(100_000_000, 5_000_000_000_000, 1_000_000_000, BasisPoints::new(30));
/// assert_eq!(out, Ok(19_939));
/// ```
pub fn get_amount_out(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: BasisPoints,
) -> Result<u64, AmmError> {
    if amount_in == 0 {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }
    let complement = fee_bps
        .complement()
        .ok_or(AmmError::InvalidFee("fee exceeds 100%"))?;

    let net = U256::from(amount_in)
        .checked_mul(U256::from(complement))
        .ok_or(AmmError::Overflow("net input overflow"))?;
    let numerator = net
        .checked_mul(U256::from(reserve_out))
        .ok_or(AmmError::Overflow("numerator overflow"))?;
    let denominator = U256::from(reserve_in)
        .checked_mul(U256::from(BPS_DENOMINATOR))
        .and_then(|scaled| scaled.checked_add(net))
        .ok_or(AmmError::Overflow("denominator overflow"))?;
    let out = numerator
        .checked_div(denominator)
        .ok_or(AmmError::InsufficientLiquidity)?;

    narrow(out)
}

/// Smallest input that buys at least `amount_out` from a pool holding
/// `reserve_in` / `reserve_out`.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out >= reserve_out`.
/// - [`AmmError::InvalidFee`] if the fee leaves nothing for the curve.
/// - [`AmmError::Overflow`] if the required input does not fit in `u64`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::BasisPoints;
/// use pairswap::math::{get_amount_in, get_amount_out};
///
/// let fee = BasisPoints::new(30);
/// let needed = get_amount_in(1_000, 1_000_000, 1_000_000, fee).expect("priceable");
/// assert_eq!(needed, 1_005);
/// assert!(get_amount_out(needed, 1_000_000, 1_000_000, fee).expect("priceable") >= 1_000);
/// ```
pub fn get_amount_in(
    amount_out: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: BasisPoints,
) -> Result<u64, AmmError> {
    if amount_out == 0 {
        return Err(AmmError::ZeroAmount);
    }
    if reserve_in == 0 || reserve_out == 0 || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    let complement = match fee_bps.complement() {
        Some(0) | None => return Err(AmmError::InvalidFee("fee leaves no input for the curve")),
        Some(c) => c,
    };

    let numerator = U256::from(reserve_in)
        .checked_mul(U256::from(amount_out))
        .and_then(|v| v.checked_mul(U256::from(BPS_DENOMINATOR)))
        .ok_or(AmmError::Overflow("numerator overflow"))?;
    let denominator = U256::from(reserve_out - amount_out)
        .checked_mul(U256::from(complement))
        .ok_or(AmmError::Overflow("denominator overflow"))?;
    let required = numerator
        .checked_div(denominator)
        .and_then(|q| q.checked_add(U256::one()))
        .ok_or(AmmError::Overflow("required input overflow"))?;

    narrow(required)
}

fn narrow(value: U256) -> Result<u64, AmmError> {
    if value > U256::from(u64::MAX) {
        return Err(AmmError::Overflow("result exceeds u64"));
    }
    Ok(value.low_u64())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const FEE: BasisPoints = BasisPoints::DEFAULT_FEE;

    #[test]
    fn forward_matches_direct_formula() {
        assert_eq!(
            get_amount_out(100_000_000, 5_000_000_000_000, 1_000_000_000, FEE),
            Ok(19_939)
        );
    }

    #[test]
    fn forward_zero_input_rejected() {
        assert_eq!(
            get_amount_out(0, 1_000, 1_000, FEE),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn forward_empty_reserves_rejected() {
        assert_eq!(
            get_amount_out(10, 0, 1_000, FEE),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            get_amount_out(10, 1_000, 0, FEE),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn forward_extreme_inputs_do_not_overflow() {
        let Ok(out) = get_amount_out(u64::MAX, u64::MAX, u64::MAX, FEE) else {
            panic!("256-bit intermediates cover u64 extremes");
        };
        assert!(out < u64::MAX);
    }

    #[test]
    fn forward_output_stays_below_reserve() {
        let Ok(out) = get_amount_out(u64::MAX, 1, 1_000, BasisPoints::ZERO) else {
            panic!("priceable");
        };
        assert!(out < 1_000);
    }

    #[test]
    fn forward_fee_over_100_percent_rejected() {
        assert!(matches!(
            get_amount_out(10, 1_000, 1_000, BasisPoints::new(10_001)),
            Err(AmmError::InvalidFee(_))
        ));
    }

    #[test]
    fn inverse_is_minimal() {
        let Ok(needed) = get_amount_in(1_000, 1_000_000, 1_000_000, FEE) else {
            panic!("priceable");
        };
        assert_eq!(needed, 1_005);
        assert_eq!(get_amount_out(needed, 1_000_000, 1_000_000, FEE), Ok(1_000));
        assert_eq!(
            get_amount_out(needed - 1, 1_000_000, 1_000_000, FEE),
            Ok(999)
        );
    }

    #[test]
    fn inverse_without_fee() {
        assert_eq!(get_amount_in(50, 100, 100, BasisPoints::ZERO), Ok(101));
    }

    #[test]
    fn inverse_rejects_draining_the_pool() {
        assert_eq!(
            get_amount_in(1_000, 1_000, 1_000, FEE),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            get_amount_in(5_000, 1_000, 1_000, FEE),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn inverse_zero_output_rejected() {
        assert_eq!(get_amount_in(0, 1_000, 1_000, FEE), Err(AmmError::ZeroAmount));
    }

    #[test]
    fn inverse_full_fee_rejected() {
        assert!(matches!(
            get_amount_in(1, 1_000, 1_000, BasisPoints::MAX_PERCENT),
            Err(AmmError::InvalidFee(_))
        ));
    }

    #[test]
    fn inverse_beyond_u64_overflows() {
        assert!(matches!(
            get_amount_in(u64::MAX - 1, u64::MAX, u64::MAX, FEE),
            Err(AmmError::Overflow(_))
        ));
    }
}

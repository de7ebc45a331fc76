//! Canonical ordering of asset pairs.

use serde::Serialize;

use super::AssetId;
use crate::error::AmmError;
use crate::traits::Asset;

/// Returns the two identifiers in ascending order.
///
/// Pure and total: the result is the same whichever order the arguments
/// arrive in.
///
/// ```
/// use pairswap::domain::{order, AssetId};
///
/// let (a, b) = (AssetId::new("0x2::b::B"), AssetId::new("0x2::a::A"));
/// assert_eq!(order(a, b), (b, a));
/// assert_eq!(order(b, a), (b, a));
/// ```
#[must_use]
pub fn order(a: AssetId, b: AssetId) -> (AssetId, AssetId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Registry key for an unordered pair of distinct assets.
///
/// `TokenPairKey::new(a, b) == TokenPairKey::new(b, a)` for every pair.
/// The key keeps both identifiers separately, so two distinct pairs never
/// share a key even when their concatenated bytes coincide.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AssetId, TokenPairKey};
///
/// let x = AssetId::new("0x2::x::X");
/// let y = AssetId::new("0x2::y::Y");
/// let k1 = TokenPairKey::new(y, x).expect("distinct");
/// let k2 = TokenPairKey::new(x, y).expect("distinct");
/// assert_eq!(k1, k2);
/// assert_eq!(k1.low(), x);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TokenPairKey {
    low: AssetId,
    high: AssetId,
}

impl TokenPairKey {
    /// Builds the canonical key.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both identifiers are equal.
    pub fn new(a: AssetId, b: AssetId) -> Result<Self, AmmError> {
        if a == b {
            return Err(AmmError::IdenticalAssets);
        }
        let (low, high) = order(a, b);
        Ok(Self { low, high })
    }

    /// Key for the type pair `(A, B)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if `A` and `B` share a type name.
    pub fn of<A: Asset, B: Asset>() -> Result<Self, AmmError> {
        Self::new(AssetId::of::<A>(), AssetId::of::<B>())
    }

    /// The lower identifier.
    #[must_use]
    pub const fn low(&self) -> AssetId {
        self.low
    }

    /// The higher identifier.
    #[must_use]
    pub const fn high(&self) -> AssetId {
        self.high
    }

    /// Returns `true` if `asset` is one side of the pair.
    #[must_use]
    pub fn contains(&self, asset: AssetId) -> bool {
        self.low == asset || self.high == asset
    }

    /// Canonical byte form: `low ‖ high`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.low.as_bytes().len() + self.high.as_bytes().len());
        bytes.extend_from_slice(self.low.as_bytes());
        bytes.extend_from_slice(self.high.as_bytes());
        bytes
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn id(s: &'static str) -> AssetId {
        AssetId::new(s)
    }

    #[test]
    fn order_is_symmetric() {
        let (a, b) = (id("alpha"), id("beta"));
        assert_eq!(order(a, b), order(b, a));
        assert_eq!(order(a, b), (a, b));
    }

    #[test]
    fn order_handles_prefixes() {
        let (short, long) = (id("coin"), id("coin::X"));
        assert_eq!(order(long, short), (short, long));
    }

    #[test]
    fn key_is_order_independent() {
        let (Ok(k1), Ok(k2)) = (
            TokenPairKey::new(id("b"), id("a")),
            TokenPairKey::new(id("a"), id("b")),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(k1, k2);
        assert_eq!(k1.low(), id("a"));
        assert_eq!(k1.high(), id("b"));
    }

    #[test]
    fn identical_assets_rejected() {
        let result = TokenPairKey::new(id("a"), id("a"));
        assert_eq!(result, Err(AmmError::IdenticalAssets));
    }

    #[test]
    fn to_bytes_concatenates_low_then_high() {
        let Ok(key) = TokenPairKey::new(id("yy"), id("xx")) else {
            panic!("expected Ok");
        };
        assert_eq!(key.to_bytes(), b"xxyy".to_vec());
    }

    #[test]
    fn ambiguous_concatenations_stay_distinct() {
        let (Ok(k1), Ok(k2)) = (
            TokenPairKey::new(id("a"), id("bc")),
            TokenPairKey::new(id("ab"), id("c")),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(k1.to_bytes(), k2.to_bytes());
        assert_ne!(k1, k2);
    }

    #[test]
    fn contains_both_sides_only() {
        let Ok(key) = TokenPairKey::new(id("a"), id("b")) else {
            panic!("expected Ok");
        };
        assert!(key.contains(id("a")));
        assert!(key.contains(id("b")));
        assert!(!key.contains(id("c")));
    }
}

//! Account address.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A 32-byte account address: the sender of a transaction, the holder of
/// a position, the creator of a pool.
///
/// All byte sequences are valid addresses, so construction is infallible.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Address;
///
/// let alice = Address::from_bytes([7u8; 32]);
/// assert_eq!(alice.as_bytes(), [7u8; 32]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed_hex() {
        let addr = Address::from_bytes([0xab; 32]);
        let shown = addr.to_string();
        assert!(shown.starts_with("0xabab"));
        assert_eq!(shown.len(), 2 + 64);
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(Address::zero(), Address::default());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Address::from_bytes([0u8; 32]) < Address::from_bytes([1u8; 32]));
    }
}

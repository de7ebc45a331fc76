//! Globally unique object identity.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Domain separator mixed into every derived id.
const OBJECT_ID_DOMAIN: &[u8] = b"PAIRSWAP_OBJECT_V1";

/// Process-wide derivation counter.  A replayed digest still gets a new
/// sequence number, so ids cannot be reproduced by choosing the digest.
static OBJECT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Identity of a persistent object: a pool, a registry, a position record.
///
/// Ids are handed out by [`TxContext::fresh_id`](super::TxContext::fresh_id)
/// and are derived as `blake3(domain ‖ tx_digest ‖ index ‖ sequence)`,
/// where `sequence` is never reused within the process.  Two contexts
/// built from the same digest therefore never hand out the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId([u8; 32]);

impl ObjectId {
    /// Wraps raw bytes as an id.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub(crate) fn derive(tx_digest: &[u8; 32], index: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(OBJECT_ID_DOMAIN);
        hasher.update(tx_digest);
        hasher.update(&index.to_le_bytes());
        hasher.update(&OBJECT_SEQUENCE.fetch_add(1, Ordering::Relaxed).to_le_bytes());
        Self(*hasher.finalize().as_bytes())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replayed_digest_and_index_yield_distinct_ids() {
        let digest = [3u8; 32];
        assert_ne!(ObjectId::derive(&digest, 0), ObjectId::derive(&digest, 0));
    }

    #[test]
    fn derive_separates_index_and_digest() {
        let a = ObjectId::derive(&[1u8; 32], 0);
        let b = ObjectId::derive(&[1u8; 32], 1);
        let c = ObjectId::derive(&[2u8; 32], 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn bytes_round_trip() {
        let id = ObjectId::from_bytes([9u8; 32]);
        assert_eq!(id.as_bytes(), [9u8; 32]);
    }
}

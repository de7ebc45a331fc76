//! Observable records emitted by the exchange core.
//!
//! Records are appended to the [`TxContext`](crate::domain::TxContext) of
//! the call that produced them and are never interpreted by the core
//! itself.  They are emitted only after a call has committed, so a failed
//! call leaves no records behind.
//!
//! Every variant serialises as an externally tagged object, e.g.
//!
//! ```json
//! {"Swap":{"pool_id":[..],"sender":[..],"amount_a_in":100,"amount_b_in":0,
//!          "amount_a_out":0,"amount_b_out":196}}
//! ```

use serde::Serialize;

use crate::domain::{Address, ObjectId};

/// An append-only record for external indexers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    /// A pool object came into existence.
    PoolCreated {
        /// New pool's id.
        pool_id: ObjectId,
        /// Sender of the creating transaction.
        creator: Address,
    },
    /// A pool was recorded in the registry under its canonical pair.
    PoolRegistered {
        /// Serialised identifier of the lower asset.
        token_a_bytes: Vec<u8>,
        /// Serialised identifier of the higher asset.
        token_b_bytes: Vec<u8>,
        /// The registered pool.
        pool_address: ObjectId,
    },
    /// Liquidity was deposited.
    LiquidityAdded {
        /// Pool that received the deposit.
        pool_id: ObjectId,
        /// Sender of the depositing transaction.
        provider: Address,
        /// Amount of `A` accepted into the reserves.
        amount_a: u64,
        /// Amount of `B` accepted into the reserves.
        amount_b: u64,
        /// Shares issued to the provider's record.
        shares_minted: u64,
    },
    /// Liquidity was withdrawn.
    LiquidityRemoved {
        /// Pool the liquidity left.
        pool_id: ObjectId,
        /// Sender of the withdrawing transaction.
        provider: Address,
        /// Amount of `A` paid out.
        amount_a: u64,
        /// Amount of `B` paid out.
        amount_b: u64,
        /// Shares destroyed.
        shares_burned: u64,
    },
    /// A swap executed.
    Swap {
        /// Pool that executed the swap.
        pool_id: ObjectId,
        /// Sender of the swapping transaction.
        sender: Address,
        /// `A` paid in, fee included.  Zero when selling `B`.
        amount_a_in: u64,
        /// `B` paid in, fee included.  Zero when selling `A`.
        amount_b_in: u64,
        /// `A` paid out.  Zero when selling `A`.
        amount_a_out: u64,
        /// `B` paid out.  Zero when selling `B`.
        amount_b_out: u64,
    },
    /// Shares were issued to a position record.
    SharesMinted {
        /// Issuing pool.
        pool_id: ObjectId,
        /// Shares issued.
        amount: u64,
        /// Sender credited with the record.
        recipient: Address,
    },
    /// Shares were destroyed.
    SharesBurned {
        /// Issuing pool.
        pool_id: ObjectId,
        /// Shares destroyed.
        amount: u64,
        /// Sender whose record was debited.
        recipient: Address,
    },
}

impl Event {
    /// Short record name, as used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PoolCreated { .. } => "PoolCreated",
            Self::PoolRegistered { .. } => "PoolRegistered",
            Self::LiquidityAdded { .. } => "LiquidityAdded",
            Self::LiquidityRemoved { .. } => "LiquidityRemoved",
            Self::Swap { .. } => "Swap",
            Self::SharesMinted { .. } => "SharesMinted",
            Self::SharesBurned { .. } => "SharesBurned",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serialises_externally_tagged() {
        let event = Event::SharesBurned {
            pool_id: ObjectId::from_bytes([0u8; 32]),
            amount: 42,
            recipient: Address::zero(),
        };
        let Ok(json) = serde_json::to_value(&event) else {
            panic!("serializable");
        };
        assert_eq!(json["SharesBurned"]["amount"], 42);
    }

    #[test]
    fn kind_matches_variant() {
        let event = Event::PoolCreated {
            pool_id: ObjectId::from_bytes([1u8; 32]),
            creator: Address::zero(),
        };
        assert_eq!(event.kind(), "PoolCreated");
    }
}

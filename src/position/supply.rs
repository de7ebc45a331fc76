//! Share issuance for a single pool.

use core::marker::PhantomData;

use super::PositionToken;
use crate::domain::{ObjectId, TxContext};
use crate::error::AmmError;
use crate::events::Event;
use crate::traits::Asset;

/// Outstanding shares issued by one pool.
///
/// Only the owning pool can mint or burn: the supply lives inside the
/// pool's locked state and its mutators are crate-private.  The supply
/// always equals the sum of all live [`PositionToken`] balances for the
/// pool, which is the pool's `total_shares` minus the locked minimum.
#[derive(Debug)]
pub struct PositionSupply<A, B> {
    pool_id: ObjectId,
    supply: u64,
    pair: PhantomData<fn() -> (A, B)>,
}

impl<A: Asset, B: Asset> PositionSupply<A, B> {
    pub(crate) const fn new(pool_id: ObjectId) -> Self {
        Self {
            pool_id,
            supply: 0,
            pair: PhantomData,
        }
    }

    /// Shares currently held in records.
    #[must_use]
    pub const fn supply(&self) -> u64 {
        self.supply
    }

    /// Issues `amount` shares into `target`.
    ///
    /// Nothing changes unless every check passes.
    pub(crate) fn mint(
        &mut self,
        amount: u64,
        target: &mut PositionToken<A, B>,
        ctx: &mut TxContext,
    ) -> Result<(), AmmError> {
        if target.pool_id() != self.pool_id {
            return Err(AmmError::PoolMismatch);
        }
        let supply = self
            .supply
            .checked_add(amount)
            .ok_or(AmmError::Overflow("share supply overflow"))?;
        target.credit(amount)?;
        self.supply = supply;
        ctx.emit(Event::SharesMinted {
            pool_id: self.pool_id,
            amount,
            recipient: ctx.sender(),
        });
        Ok(())
    }

    /// Destroys `amount` shares held by `record`.
    pub(crate) fn burn(
        &mut self,
        record: &mut PositionToken<A, B>,
        amount: u64,
        ctx: &mut TxContext,
    ) -> Result<(), AmmError> {
        if record.pool_id() != self.pool_id {
            return Err(AmmError::PoolMismatch);
        }
        if record.balance() < amount {
            return Err(AmmError::InsufficientBalance);
        }
        let supply = self
            .supply
            .checked_sub(amount)
            .ok_or(AmmError::InvalidState("burn exceeds share supply"))?;
        record.debit(amount)?;
        self.supply = supply;
        ctx.emit(Event::SharesBurned {
            pool_id: self.pool_id,
            amount,
            recipient: ctx.sender(),
        });
        Ok(())
    }
}

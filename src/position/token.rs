//! Transferable records of pool shares.

use core::fmt;
use core::marker::PhantomData;

use crate::domain::{ObjectId, TxContext};
use crate::error::AmmError;
use crate::traits::Asset;

/// A claim on a share of pool `<A, B>`'s reserves.
///
/// Records are created only by the pool that issued them (through its
/// [`PositionSupply`](super::PositionSupply)) or by splitting an existing
/// record.  Like [`Coin`](crate::domain::Coin) they are not `Clone`.
///
/// # Examples
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{Address, Coin, TxContext};
/// use pairswap::registry::PoolRegistry;
/// use pairswap::traits::Asset;
///
/// enum Sui {}
/// impl Asset for Sui { const TYPE_NAME: &'static str = "0x2::sui::SUI"; }
/// enum Usdc {}
/// impl Asset for Usdc { const TYPE_NAME: &'static str = "0x5::usdc::USDC"; }
///
/// let mut ctx = TxContext::new(Address::from_bytes([1u8; 32]), [0u8; 32]);
/// let mut registry = PoolRegistry::new(&mut ctx);
/// let pool = registry
///     .create_pool::<Sui, Usdc>(PoolConfig::default(), &mut ctx)
///     .expect("fresh pair");
///
/// let mut sui = Coin::<Sui>::new(1_000_000);
/// let mut usdc = Coin::<Usdc>::new(4_000_000);
/// let mut position = pool
///     .add_liquidity(&mut sui, &mut usdc, 0, 0, &mut ctx)
///     .expect("first deposit");
///
/// let half = position.split(position.balance() / 2, &mut ctx).expect("enough shares");
/// assert_ne!(half.id(), position.id());
/// position.join(half).expect("same pool");
/// assert_eq!(position.balance(), 1_999_000);
/// ```
#[must_use]
pub struct PositionToken<A, B> {
    id: ObjectId,
    pool_id: ObjectId,
    balance: u64,
    pair: PhantomData<fn() -> (A, B)>,
}

impl<A: Asset, B: Asset> PositionToken<A, B> {
    /// An empty record for `pool_id`.
    pub(crate) fn empty(pool_id: ObjectId, ctx: &mut TxContext) -> Self {
        Self {
            id: ctx.fresh_id(),
            pool_id,
            balance: 0,
            pair: PhantomData,
        }
    }

    /// Record id.
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// Pool the shares belong to.
    #[must_use]
    pub const fn pool_id(&self) -> ObjectId {
        self.pool_id
    }

    /// Number of shares held.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns `true` if the record holds no shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.balance == 0
    }

    /// Moves `amount` shares into a new record with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `amount > balance`.
    pub fn split(&mut self, amount: u64, ctx: &mut TxContext) -> Result<Self, AmmError> {
        let rest = self
            .balance
            .checked_sub(amount)
            .ok_or(AmmError::InsufficientBalance)?;
        let mut part = Self::empty(self.pool_id, ctx);
        part.balance = amount;
        self.balance = rest;
        Ok(part)
    }

    /// Merges `other` into this record, consuming it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolMismatch`] if the records belong to different pools.
    /// - [`AmmError::Overflow`] if the combined balance exceeds `u64::MAX`.
    pub fn join(&mut self, other: Self) -> Result<(), AmmError> {
        if other.pool_id != self.pool_id {
            return Err(AmmError::PoolMismatch);
        }
        self.balance = self
            .balance
            .checked_add(other.balance)
            .ok_or(AmmError::Overflow("position join overflow"))?;
        Ok(())
    }

    /// Consumes an empty record.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`] if shares remain.
    pub fn destroy_zero(self) -> Result<(), AmmError> {
        if self.balance != 0 {
            return Err(AmmError::InvalidState("cannot destroy a non-empty position"));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_id(id: ObjectId, pool_id: ObjectId, balance: u64) -> Self {
        Self {
            id,
            pool_id,
            balance,
            pair: PhantomData,
        }
    }

    pub(crate) fn credit(&mut self, amount: u64) -> Result<(), AmmError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AmmError::Overflow("position balance overflow"))?;
        Ok(())
    }

    pub(crate) fn debit(&mut self, amount: u64) -> Result<(), AmmError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AmmError::InsufficientBalance)?;
        Ok(())
    }
}

impl<A: Asset, B: Asset> fmt::Debug for PositionToken<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionToken")
            .field("id", &self.id)
            .field("pool_id", &self.pool_id)
            .field("pair", &(A::TYPE_NAME, B::TYPE_NAME))
            .field("balance", &self.balance)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Address;

    enum Red {}
    impl Asset for Red {
        const TYPE_NAME: &'static str = "test::red::RED";
    }
    enum Blue {}
    impl Asset for Blue {
        const TYPE_NAME: &'static str = "test::blue::BLUE";
    }

    fn ctx() -> TxContext {
        TxContext::new(Address::from_bytes([3u8; 32]), [9u8; 32])
    }

    fn funded(pool_id: ObjectId, balance: u64, ctx: &mut TxContext) -> PositionToken<Red, Blue> {
        let mut token = PositionToken::empty(pool_id, ctx);
        let Ok(()) = token.credit(balance) else {
            panic!("credit fits");
        };
        token
    }

    #[test]
    fn split_then_join_restores_balance() {
        let mut ctx = ctx();
        let pool = ctx.fresh_id();
        let mut token = funded(pool, 500, &mut ctx);
        let Ok(part) = token.split(120, &mut ctx) else {
            panic!("enough shares");
        };
        assert_eq!((token.balance(), part.balance()), (380, 120));
        assert_eq!(part.pool_id(), pool);
        assert_ne!(part.id(), token.id());
        let Ok(()) = token.join(part) else {
            panic!("same pool");
        };
        assert_eq!(token.balance(), 500);
    }

    #[test]
    fn split_more_than_balance_fails() {
        let mut ctx = ctx();
        let pool = ctx.fresh_id();
        let mut token = funded(pool, 10, &mut ctx);
        let result = token.split(11, &mut ctx);
        assert!(matches!(result, Err(AmmError::InsufficientBalance)));
        assert_eq!(token.balance(), 10);
    }

    #[test]
    fn join_across_pools_fails() {
        let mut ctx = ctx();
        let first = ctx.fresh_id();
        let second = ctx.fresh_id();
        let mut a = funded(first, 10, &mut ctx);
        let b = funded(second, 10, &mut ctx);
        assert_eq!(a.join(b), Err(AmmError::PoolMismatch));
        assert_eq!(a.balance(), 10);
    }

    #[test]
    fn destroy_zero_only_when_empty() {
        let mut ctx = ctx();
        let pool = ctx.fresh_id();
        assert!(funded(pool, 0, &mut ctx).destroy_zero().is_ok());
        assert!(funded(pool, 1, &mut ctx).destroy_zero().is_err());
    }

    #[test]
    fn debit_below_zero_fails() {
        let mut ctx = ctx();
        let pool = ctx.fresh_id();
        let mut token = funded(pool, 3, &mut ctx);
        assert_eq!(token.debit(4), Err(AmmError::InsufficientBalance));
        assert_eq!(token.balance(), 3);
    }
}

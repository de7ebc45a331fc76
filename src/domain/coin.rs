//! Typed asset balances.

use core::fmt;
use core::marker::PhantomData;

use super::AssetId;
use crate::error::AmmError;
use crate::traits::Asset;

/// A balance of asset `T` held by the caller.
///
/// Coins are linear values: they are not `Clone`, and value only moves
/// between coins through [`split`](Self::split), [`join`](Self::join) and
/// [`take`](Self::take).  Pools accept `&mut Coin<T>` and withdraw exactly
/// what they consume, so anything a call does not use stays with the
/// caller, including when the call fails.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Coin;
/// use pairswap::traits::Asset;
///
/// enum Usdc {}
/// impl Asset for Usdc { const TYPE_NAME: &'static str = "0x2::usdc::USDC"; }
///
/// let mut coin = Coin::<Usdc>::new(1_000);
/// let part = coin.split(300).expect("enough balance");
/// assert_eq!((coin.value(), part.value()), (700, 300));
/// ```
#[must_use]
pub struct Coin<T> {
    value: u64,
    asset: PhantomData<fn() -> T>,
}

impl<T: Asset> Coin<T> {
    /// Wraps a balance delivered by the ledger.
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            asset: PhantomData,
        }
    }

    /// An empty coin, used as the idle side of a single-sided swap.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Held amount.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Returns `true` if the coin holds nothing.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Type identifier of the held asset.
    #[must_use]
    pub const fn asset_id(&self) -> AssetId {
        AssetId::of::<T>()
    }

    /// Moves `amount` into a new coin.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `amount > value`.
    pub fn split(&mut self, amount: u64) -> Result<Self, AmmError> {
        let rest = self
            .value
            .checked_sub(amount)
            .ok_or(AmmError::InsufficientBalance)?;
        self.value = rest;
        Ok(Self::new(amount))
    }

    /// Merges `other` into this coin.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u64::MAX`.
    pub fn join(&mut self, other: Self) -> Result<(), AmmError> {
        self.value = self
            .value
            .checked_add(other.value)
            .ok_or(AmmError::Overflow("coin join overflow"))?;
        Ok(())
    }

    /// Moves the whole balance into a new coin, leaving this one empty.
    pub fn take(&mut self) -> Self {
        Self::new(core::mem::take(&mut self.value))
    }

    /// Consumes an empty coin.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`] if the coin still holds value.
    pub fn destroy_zero(self) -> Result<(), AmmError> {
        if self.value != 0 {
            return Err(AmmError::InvalidState("cannot destroy a non-empty coin"));
        }
        Ok(())
    }
}

impl<T: Asset> fmt::Debug for Coin<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coin")
            .field("asset", &T::TYPE_NAME)
            .field("value", &self.value)
            .finish()
    }
}

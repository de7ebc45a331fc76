//! Per-account custody of position records.

use core::fmt;
use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use super::PositionToken;
use crate::domain::{Address, ObjectId};
use crate::error::AmmError;
use crate::traits::Asset;

/// A record the store refused, handed back with the reason.
pub type Rejected<A, B> = (AmmError, PositionToken<A, B>);

/// Position records of one pool type, keyed by owner.
///
/// A record id is held by at most one account.  Records move between
/// owners whole; use [`PositionToken::split`] first to transfer part of a
/// balance.  Several pools may share the type pair, so balance queries
/// take the pool id.
pub struct PositionStore<A, B> {
    accounts: HashMap<Address, BTreeMap<ObjectId, PositionToken<A, B>>>,
    holders: HashMap<ObjectId, Address>,
}

impl<A: Asset, B: Asset> Default for PositionStore<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Asset, B: Asset> PositionStore<A, B> {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            holders: HashMap::new(),
        }
    }

    /// Places `token` in `owner`'s account.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DuplicatePosition`] together with `token` if a
    /// record with the same id is already held by any account.  Nothing
    /// is overwritten.
    pub fn deposit(&mut self, owner: Address, token: PositionToken<A, B>) -> Result<(), Rejected<A, B>> {
        let id = token.id();
        if let Some(holder) = self.holders.get(&id) {
            warn!(%owner, %holder, position = %id, "duplicate position rejected");
            return Err((AmmError::DuplicatePosition, token));
        }
        self.holders.insert(id, owner);
        self.accounts.entry(owner).or_default().insert(id, token);
        Ok(())
    }

    /// Removes record `id` from `owner`'s account.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PositionNotFound`] if `owner` does not hold `id`.
    pub fn withdraw(&mut self, owner: Address, id: ObjectId) -> Result<PositionToken<A, B>, AmmError> {
        let account = self
            .accounts
            .get_mut(&owner)
            .ok_or(AmmError::PositionNotFound)?;
        let token = account.remove(&id).ok_or(AmmError::PositionNotFound)?;
        if account.is_empty() {
            self.accounts.remove(&owner);
        }
        self.holders.remove(&id);
        Ok(token)
    }

    /// Moves record `id` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PositionNotFound`] if `from` does not hold `id`.
    pub fn transfer(&mut self, from: Address, to: Address, id: ObjectId) -> Result<(), AmmError> {
        let token = self.withdraw(from, id)?;
        let shares = token.balance();
        // The id was just released, so the deposit cannot collide.
        self.deposit(to, token).map_err(|(err, _)| err)?;
        debug!(%from, %to, position = %id, shares, "position transferred");
        Ok(())
    }

    /// Returns `true` if any account holds record `id`.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.holders.contains_key(&id)
    }

    /// Shares of pool `pool_id` held by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u64::MAX`.
    pub fn balance_of(&self, owner: Address, pool_id: ObjectId) -> Result<u64, AmmError> {
        checked_total(self.tokens_of(owner).filter(|token| token.pool_id() == pool_id))
    }

    /// Records held by `owner`, ordered by id.
    pub fn tokens_of(&self, owner: Address) -> impl Iterator<Item = &PositionToken<A, B>> {
        self.accounts
            .get(&owner)
            .into_iter()
            .flat_map(BTreeMap::values)
    }

    /// Shares of pool `pool_id` held across all accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u64::MAX`.
    pub fn total_balance(&self, pool_id: ObjectId) -> Result<u64, AmmError> {
        checked_total(
            self.accounts
                .values()
                .flat_map(BTreeMap::values)
                .filter(|token| token.pool_id() == pool_id),
        )
    }
}

fn checked_total<'a, A: Asset + 'a, B: Asset + 'a>(
    tokens: impl Iterator<Item = &'a PositionToken<A, B>>,
) -> Result<u64, AmmError> {
    tokens
        .map(PositionToken::balance)
        .try_fold(0u64, u64::checked_add)
        .ok_or(AmmError::Overflow("position balance overflow"))
}

impl<A: Asset, B: Asset> fmt::Debug for PositionStore<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionStore")
            .field("pair", &(A::TYPE_NAME, B::TYPE_NAME))
            .field("accounts", &self.accounts.len())
            .field("records", &self.holders.len())
            .finish()
    }
}

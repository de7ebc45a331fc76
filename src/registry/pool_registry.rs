//! Registry of pools by canonical pair.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::domain::{ObjectId, TokenPairKey, TxContext};
use crate::error::AmmError;
use crate::events::Event;
use crate::pools::LiquidityPool;
use crate::traits::Asset;

/// Maps each canonical pair to the id of its single pool.
///
/// Entries are never removed or replaced.
///
/// # Examples
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{Address, TxContext};
/// use pairswap::error::AmmError;
/// use pairswap::registry::PoolRegistry;
/// use pairswap::traits::Asset;
///
/// enum Eth {}
/// impl Asset for Eth { const TYPE_NAME: &'static str = "0x7::eth::ETH"; }
/// enum Dai {}
/// impl Asset for Dai { const TYPE_NAME: &'static str = "0x7::dai::DAI"; }
///
/// let mut ctx = TxContext::new(Address::from_bytes([1u8; 32]), [0u8; 32]);
/// let mut registry = PoolRegistry::new(&mut ctx);
///
/// let pool = registry.create_pool::<Eth, Dai>(PoolConfig::default(), &mut ctx).expect("new pair");
/// assert_eq!(registry.get_pool::<Dai, Eth>(), Some(pool.id()));
///
/// let again = registry.create_pool::<Dai, Eth>(PoolConfig::default(), &mut ctx);
/// assert!(matches!(again, Err(AmmError::PoolExists)));
/// ```
#[derive(Debug)]
pub struct PoolRegistry {
    id: ObjectId,
    pools: BTreeMap<TokenPairKey, ObjectId>,
    pool_count: u64,
}

impl PoolRegistry {
    /// Creates an empty registry with a fresh id.
    pub fn new(ctx: &mut TxContext) -> Self {
        let id = ctx.fresh_id();
        debug!(registry = %id, "registry created");
        Self {
            id,
            pools: BTreeMap::new(),
            pool_count: 0,
        }
    }

    /// Registry id.
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// Number of pools created through this registry.
    #[must_use]
    pub const fn pool_count(&self) -> u64 {
        self.pool_count
    }

    /// Creates the pool for `{A, B}` and records it under the canonical key.
    ///
    /// Emits [`Event::PoolCreated`] followed by [`Event::PoolRegistered`]
    /// carrying the `(low, high)` type identifiers.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `A` and `B` are the same asset.
    /// - [`AmmError::PoolExists`] if the pair already has a pool, in
    ///   either order.
    /// - [`AmmError::InvalidFee`] if `config` fails validation.
    pub fn create_pool<A: Asset, B: Asset>(
        &mut self,
        config: PoolConfig,
        ctx: &mut TxContext,
    ) -> Result<LiquidityPool<A, B>, AmmError> {
        let key = TokenPairKey::of::<A, B>()?;
        if self.pools.contains_key(&key) {
            warn!(low = %key.low(), high = %key.high(), "pool already registered");
            return Err(AmmError::PoolExists);
        }
        let count = self
            .pool_count
            .checked_add(1)
            .ok_or(AmmError::Overflow("pool count overflow"))?;

        let pool = LiquidityPool::<A, B>::create(config, ctx)?;
        self.pools.insert(key, pool.id());
        self.pool_count = count;

        debug!(
            registry = %self.id,
            pool = %pool.id(),
            low = %key.low(),
            high = %key.high(),
            count,
            "pool registered"
        );
        ctx.emit(Event::PoolRegistered {
            token_a_bytes: key.low().as_bytes().to_vec(),
            token_b_bytes: key.high().as_bytes().to_vec(),
            pool_address: pool.id(),
        });
        Ok(pool)
    }

    /// Id of the pool for `{A, B}`, in either order.
    #[must_use]
    pub fn get_pool<A: Asset, B: Asset>(&self) -> Option<ObjectId> {
        TokenPairKey::of::<A, B>()
            .ok()
            .and_then(|key| self.get_pool_by_key(&key))
    }

    /// Returns `true` if `{A, B}` has a pool.
    #[must_use]
    pub fn pool_exists<A: Asset, B: Asset>(&self) -> bool {
        self.get_pool::<A, B>().is_some()
    }

    /// Id of the pool registered under `key`.
    #[must_use]
    pub fn get_pool_by_key(&self, key: &TokenPairKey) -> Option<ObjectId> {
        self.pools.get(key).copied()
    }

    /// Registered pairs in canonical order.
    pub fn pools(&self) -> impl Iterator<Item = (TokenPairKey, ObjectId)> + '_ {
        self.pools.iter().map(|(key, id)| (*key, *id))
    }
}

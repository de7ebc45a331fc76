//! Canonical pair registry.
//!
//! One pool per unordered asset pair: [`PoolRegistry`] keys pools by
//! [`TokenPairKey`](crate::domain::TokenPairKey), so `<A, B>` and `<B, A>`
//! resolve to the same entry.

mod pool_registry;

pub use pool_registry::PoolRegistry;

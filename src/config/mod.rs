//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint handed to
//! [`PoolRegistry::create_pool`](crate::registry::PoolRegistry::create_pool).
//! It is serde-(de)serialisable so deployments can keep it alongside the
//! rest of their settings.

mod pool_config;

pub use pool_config::PoolConfig;

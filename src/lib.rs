//! # pairswap
//!
//! Constant-product exchange core: one pool per unordered asset pair,
//! liquidity shares as transferable records, and a router that checks
//! registration and deadlines before delegating to the pool.
//!
//! Assets are zero-sized marker types implementing
//! [`Asset`](traits::Asset); balances are linear [`Coin`](domain::Coin)
//! values that only move through explicit split / join.  All side effects
//! of a call (fresh ids and emitted [`Event`](events::Event)s) go through
//! the caller's [`TxContext`](domain::TxContext).
//!
//! ## Create a pool, deposit and swap
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! enum Sui {}
//! impl Asset for Sui { const TYPE_NAME: &'static str = "0x2::sui::SUI"; }
//! enum Usdc {}
//! impl Asset for Usdc { const TYPE_NAME: &'static str = "0x5::usdc::USDC"; }
//!
//! let mut ctx = TxContext::new(Address::from_bytes([1u8; 32]), [0u8; 32]);
//! let mut registry = PoolRegistry::new(&mut ctx);
//! let pool = registry
//!     .create_pool::<Sui, Usdc>(PoolConfig::default(), &mut ctx)
//!     .expect("new pair");
//!
//! let clock = Clock::new(10);
//! let router = Router::new(&registry, &clock);
//!
//! // 1:5000 initial price
//! let mut sui = Coin::<Sui>::new(1_000_000);
//! let mut usdc = Coin::<Usdc>::new(5_000_000_000);
//! let position = router
//!     .add_liquidity(&pool, &mut sui, &mut usdc, 0, 0, 10, &mut ctx)
//!     .expect("first deposit");
//! assert_eq!(position.balance(), 70_709_678);
//!
//! // Sell 10 000 SUI for at least 49M USDC
//! let out = router
//!     .swap_exact_input::<AToB, _, _>(&pool, &mut Coin::new(10_000), 49_000_000, 10, &mut ctx)
//!     .expect("swap");
//! assert_eq!(out.value(), 49_357_901);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐
//! │    Router     │  registration + deadline checks, exact-output pricing
//! └───────┬───────┘
//!         │
//!         ▼
//! ┌───────────────┐      ┌────────────────┐
//! │ LiquidityPool │─────▶│ PositionSupply │  share mint / burn
//! └───────┬───────┘      └────────────────┘
//!         │ created by
//!         ▼
//! ┌───────────────┐
//! │ PoolRegistry  │  canonical pair → pool id
//! └───────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Coin`](domain::Coin), [`TokenPairKey`](domain::TokenPairKey), ids, clock, context |
//! | [`traits`] | [`Asset`](traits::Asset) marker trait |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pools`] | [`LiquidityPool`](pools::LiquidityPool) and [`quote`](pools::quote) |
//! | [`position`] | Share records, issuance and custody |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) |
//! | [`router`] | [`Router`](router::Router) and swap directions |
//! | [`math`] | 256-bit intermediates, integer square root, curve pricing |
//! | [`events`] | [`Event`](events::Event) records |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod math;
pub mod pools;
pub mod position;
pub mod prelude;
pub mod registry;
pub mod router;
pub mod traits;

//! Asset type identity.
//!
//! Pools, coins and position records are parameterised by zero-sized
//! marker types that implement [`Asset`].  The marker's
//! [`TYPE_NAME`](Asset::TYPE_NAME) is its serialised type identifier: the
//! stable byte string the registry orders pairs by.
//!
//! ```rust
//! use pairswap::traits::Asset;
//!
//! pub enum Usdc {}
//! impl Asset for Usdc {
//!     const TYPE_NAME: &'static str = "0x2::usdc::USDC";
//! }
//!
//! assert_eq!(pairswap::domain::AssetId::of::<Usdc>().as_bytes(), b"0x2::usdc::USDC");
//! ```

/// A fungible asset type.
///
/// Two distinct asset types must carry distinct `TYPE_NAME`s; the registry
/// treats equal names as the same asset.
pub trait Asset: 'static {
    /// Stable, globally unique type identifier.
    const TYPE_NAME: &'static str;
}

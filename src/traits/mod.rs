//! Core trait abstractions.
//!
//! [`Asset`] names a fungible asset type; every typed value in the crate
//! ([`Coin`](crate::domain::Coin), pools, position records) is
//! parameterised by its implementors.

mod asset;

pub use asset::Asset;

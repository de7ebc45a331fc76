//! Integer arithmetic for the constant-product curve.
//!
//! - [`U256`]: wide intermediates so that no combination of `u64` inputs
//!   overflows while pricing.
//! - [`isqrt`]: floor square root used for the first share mint.
//! - [`curve`]: forward and inverse swap pricing.

pub mod curve;
mod sqrt;
mod wide;

pub use curve::{get_amount_in, get_amount_out};
pub use sqrt::isqrt;
pub use wide::U256;

//! 256-bit intermediates for curve arithmetic.

#![allow(clippy::all, missing_docs)]

use uint::construct_uint;

construct_uint! {
    /// Unsigned 256-bit integer used for products of three `u64` factors.
    pub struct U256(4);
}

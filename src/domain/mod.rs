//! Fundamental domain value types used throughout the exchange core.
//!
//! Identity types (addresses, object ids, asset identifiers), the
//! canonical pair key, typed coins, the fee rate and the thin slice of
//! the execution substrate the core relies on (transaction context and
//! logical clock).

mod address;
mod asset_id;
mod basis_points;
mod clock;
mod coin;
mod object_id;
mod token_pair;
mod tx_context;

pub use address::Address;
pub use asset_id::AssetId;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR, DEFAULT_FEE_BPS};
pub use clock::Clock;
pub use coin::Coin;
pub use object_id::ObjectId;
pub use token_pair::{order, TokenPairKey};
pub use tx_context::TxContext;

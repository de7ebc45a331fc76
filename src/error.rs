//! Unified error type for the exchange core.
//!
//! Every fallible operation in the crate returns [`AmmError`].  All
//! variants describe a precondition that was checked before any state was
//! touched: a returned error means the operation had no effect.

use thiserror::Error;

/// Errors produced by pools, the registry, position accounting and the router.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmError {
    /// A required input amount was zero.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// Reserves cannot satisfy the request, or a slippage bound on a
    /// liquidity operation was not met.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Swap output is zero or below the caller's minimum.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// Quote requested for a zero input.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// The pool is locked by an in-flight mutation, or the call shape is
    /// malformed.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// A deposit would mint no shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A position record holds fewer shares than requested.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// A pool for this unordered pair is already registered.
    #[error("pool already exists for this pair")]
    PoolExists,

    /// No pool is registered for this pair.
    #[error("pool not found")]
    PoolNotFound,

    /// The call started after its deadline.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// An exact-input swap produced output on its own input side.
    #[error("excessive input amount")]
    ExcessiveInputAmount,

    /// The supplied coin cannot cover the input required for an
    /// exact-output swap.
    #[error("supplied amount cannot buy the requested output")]
    InsufficientAmountOut,

    /// Both sides of a pair resolve to the same asset.
    #[error("pair requires two distinct assets")]
    IdenticalAssets,

    /// A record or pool handle belongs to a different pool.
    #[error("record belongs to a different pool")]
    PoolMismatch,

    /// Requested position is not held by the account.
    #[error("position not found")]
    PositionNotFound,

    /// The account already holds a record with this id.
    #[error("position already held")]
    DuplicatePosition,

    /// Fee parameter out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

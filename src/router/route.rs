//! Swap direction markers.

use crate::domain::{Coin, TxContext};
use crate::error::AmmError;
use crate::pools::LiquidityPool;
use crate::traits::Asset;

/// A direction through pool `<A, B>`.
///
/// Implemented by the uninhabited markers [`AToB`] and [`BToA`]; the
/// associated types name the asset paid in and the asset received.
pub trait SwapRoute<A: Asset, B: Asset> {
    /// Asset paid into the pool.
    type In: Asset;
    /// Asset paid out by the pool.
    type Out: Asset;

    /// `(reserve_in, reserve_out)` for this direction.
    fn reserves(pool: &LiquidityPool<A, B>) -> (u64, u64);

    /// Runs a one-sided swap, returning `(input-side leftover, output)`.
    fn swap(
        pool: &LiquidityPool<A, B>,
        coin_in: &mut Coin<Self::In>,
        min_out: u64,
        ctx: &mut TxContext,
    ) -> Result<(Coin<Self::In>, Coin<Self::Out>), AmmError>;
}

/// Sell `A`, buy `B`.
#[derive(Debug)]
pub enum AToB {}

/// Sell `B`, buy `A`.
#[derive(Debug)]
pub enum BToA {}

impl<A: Asset, B: Asset> SwapRoute<A, B> for AToB {
    type In = A;
    type Out = B;

    fn reserves(pool: &LiquidityPool<A, B>) -> (u64, u64) {
        pool.get_reserves()
    }

    fn swap(
        pool: &LiquidityPool<A, B>,
        coin_in: &mut Coin<A>,
        min_out: u64,
        ctx: &mut TxContext,
    ) -> Result<(Coin<A>, Coin<B>), AmmError> {
        pool.swap(coin_in, &mut Coin::zero(), 0, min_out, ctx)
    }
}

impl<A: Asset, B: Asset> SwapRoute<A, B> for BToA {
    type In = B;
    type Out = A;

    fn reserves(pool: &LiquidityPool<A, B>) -> (u64, u64) {
        let (reserve_a, reserve_b) = pool.get_reserves();
        (reserve_b, reserve_a)
    }

    fn swap(
        pool: &LiquidityPool<A, B>,
        coin_in: &mut Coin<B>,
        min_out: u64,
        ctx: &mut TxContext,
    ) -> Result<(Coin<B>, Coin<A>), AmmError> {
        let (out, leftover) = pool.swap(&mut Coin::zero(), coin_in, min_out, 0, ctx)?;
        Ok((leftover, out))
    }
}

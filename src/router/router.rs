//! The router.

use tracing::{debug, warn};

use super::SwapRoute;
use crate::domain::{Clock, Coin, TxContext};
use crate::error::AmmError;
use crate::math::{get_amount_in, get_amount_out};
use crate::pools::LiquidityPool;
use crate::position::PositionToken;
use crate::registry::PoolRegistry;
use crate::traits::Asset;

/// Entry points that validate the pool against a registry and the
/// deadline against a clock before delegating to the pool.
///
/// # Examples
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{Address, Clock, Coin, TxContext};
/// use pairswap::registry::PoolRegistry;
/// use pairswap::router::{AToB, BToA, Router};
/// use pairswap::traits::Asset;
///
/// enum Sui {}
/// impl Asset for Sui { const TYPE_NAME: &'static str = "0x2::sui::SUI"; }
/// enum Usdc {}
/// impl Asset for Usdc { const TYPE_NAME: &'static str = "0x5::usdc::USDC"; }
///
/// let mut ctx = TxContext::new(Address::from_bytes([1u8; 32]), [0u8; 32]);
/// let mut registry = PoolRegistry::new(&mut ctx);
/// let pool = registry.create_pool::<Sui, Usdc>(PoolConfig::default(), &mut ctx).expect("new pair");
/// let clock = Clock::new(100);
/// let router = Router::new(&registry, &clock);
///
/// let _lp = router
///     .add_liquidity(&pool, &mut Coin::new(1_000_000), &mut Coin::new(1_000_000), 0, 0, 100, &mut ctx)
///     .expect("deposit");
///
/// let usdc = router
///     .swap_exact_input::<AToB, _, _>(&pool, &mut Coin::new(1_000), 1, 100, &mut ctx)
///     .expect("swap");
/// assert_eq!(usdc.value(), 996);
/// assert!(router.quote::<BToA, _, _>(&pool, 996).expect("priceable") < 1_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Router<'r> {
    registry: &'r PoolRegistry,
    clock: &'r Clock,
}

impl<'r> Router<'r> {
    /// A router over `registry`, reading time from `clock`.
    #[must_use]
    pub const fn new(registry: &'r PoolRegistry, clock: &'r Clock) -> Self {
        Self { registry, clock }
    }

    fn ensure_routable<A: Asset, B: Asset>(
        &self,
        pool: &LiquidityPool<A, B>,
        deadline: u64,
    ) -> Result<(), AmmError> {
        if self.registry.get_pool::<A, B>() != Some(pool.id()) {
            warn!(pool = %pool.id(), "pool is not registered for its pair");
            return Err(AmmError::PoolNotFound);
        }
        if !self.clock.within(deadline) {
            warn!(now = self.clock.now(), deadline, "deadline exceeded");
            return Err(AmmError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Deposits into `pool` before `deadline`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], [`AmmError::DeadlineExceeded`], or any
    /// error of [`LiquidityPool::add_liquidity`].
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity<A: Asset, B: Asset>(
        &self,
        pool: &LiquidityPool<A, B>,
        coin_a: &mut Coin<A>,
        coin_b: &mut Coin<B>,
        min_a: u64,
        min_b: u64,
        deadline: u64,
        ctx: &mut TxContext,
    ) -> Result<PositionToken<A, B>, AmmError> {
        self.ensure_routable(pool, deadline)?;
        pool.add_liquidity(coin_a, coin_b, min_a, min_b, ctx)
    }

    /// Withdraws `position` from `pool` before `deadline`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], [`AmmError::DeadlineExceeded`], or any
    /// error of [`LiquidityPool::remove_liquidity`].
    pub fn remove_liquidity<A: Asset, B: Asset>(
        &self,
        pool: &LiquidityPool<A, B>,
        position: &mut PositionToken<A, B>,
        min_a: u64,
        min_b: u64,
        deadline: u64,
        ctx: &mut TxContext,
    ) -> Result<(Coin<A>, Coin<B>), AmmError> {
        self.ensure_routable(pool, deadline)?;
        pool.remove_liquidity(position, min_a, min_b, ctx)
    }

    /// Sells all of `coin_in` in direction `D` for at least
    /// `amount_out_min`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] / [`AmmError::DeadlineExceeded`].
    /// - [`AmmError::ZeroAmount`] if `coin_in` is empty.
    /// - [`AmmError::ExcessiveInputAmount`] if the pool hands back any of
    ///   the input asset.
    /// - Any error of [`LiquidityPool::swap`].
    pub fn swap_exact_input<D, A, B>(
        &self,
        pool: &LiquidityPool<A, B>,
        coin_in: &mut Coin<D::In>,
        amount_out_min: u64,
        deadline: u64,
        ctx: &mut TxContext,
    ) -> Result<Coin<D::Out>, AmmError>
    where
        D: SwapRoute<A, B>,
        A: Asset,
        B: Asset,
    {
        self.ensure_routable(pool, deadline)?;
        if coin_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let amount_in = coin_in.value();
        let (leftover, out) = D::swap(pool, coin_in, amount_out_min, ctx)?;
        if !leftover.is_zero() {
            return Err(AmmError::ExcessiveInputAmount);
        }
        debug!(pool = %pool.id(), amount_in, amount_out = out.value(), "exact-input swap");
        Ok(out)
    }

    /// Buys exactly `amount_out` in direction `D`, paying from `coin_in`.
    ///
    /// Only the required input is taken; the rest stays in `coin_in`.  If
    /// the swap fails the payment is returned to `coin_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] / [`AmmError::DeadlineExceeded`].
    /// - [`AmmError::ZeroAmount`] if `amount_out` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` would drain
    ///   the output reserve.
    /// - [`AmmError::InsufficientAmountOut`] if `coin_in` cannot cover the
    ///   required input.
    /// - Any error of [`LiquidityPool::swap`].
    pub fn swap_exact_output<D, A, B>(
        &self,
        pool: &LiquidityPool<A, B>,
        coin_in: &mut Coin<D::In>,
        amount_out: u64,
        deadline: u64,
        ctx: &mut TxContext,
    ) -> Result<Coin<D::Out>, AmmError>
    where
        D: SwapRoute<A, B>,
        A: Asset,
        B: Asset,
    {
        self.ensure_routable(pool, deadline)?;
        if amount_out == 0 {
            return Err(AmmError::ZeroAmount);
        }
        let required = self.get_amount_in::<D, A, B>(pool, amount_out)?;
        if coin_in.value() < required {
            return Err(AmmError::InsufficientAmountOut);
        }

        let mut payment = coin_in.split(required)?;
        match D::swap(pool, &mut payment, amount_out, ctx) {
            Ok((leftover, out)) => {
                if !leftover.is_zero() {
                    return Err(AmmError::ExcessiveInputAmount);
                }
                debug!(
                    pool = %pool.id(),
                    amount_in = required,
                    amount_out = out.value(),
                    remainder = coin_in.value(),
                    "exact-output swap"
                );
                Ok(out)
            }
            Err(err) => {
                coin_in.join(payment)?;
                Err(err)
            }
        }
    }

    /// Output of selling `amount_in` in direction `D` at current reserves.
    ///
    /// # Errors
    ///
    /// As for [`quote`](crate::pools::quote).
    pub fn quote<D, A, B>(&self, pool: &LiquidityPool<A, B>, amount_in: u64) -> Result<u64, AmmError>
    where
        D: SwapRoute<A, B>,
        A: Asset,
        B: Asset,
    {
        let (reserve_in, reserve_out) = D::reserves(pool);
        get_amount_out(amount_in, reserve_in, reserve_out, pool.fee())
    }

    /// Input needed to buy `amount_out` in direction `D` at current
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_out` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` would drain
    ///   the output reserve.
    /// - [`AmmError::InsufficientAmountOut`] if the required input does not
    ///   fit in a coin.
    pub fn get_amount_in<D, A, B>(
        &self,
        pool: &LiquidityPool<A, B>,
        amount_out: u64,
    ) -> Result<u64, AmmError>
    where
        D: SwapRoute<A, B>,
        A: Asset,
        B: Asset,
    {
        let (reserve_in, reserve_out) = D::reserves(pool);
        get_amount_in(amount_out, reserve_in, reserve_out, pool.fee()).map_err(|err| match err {
            AmmError::Overflow(_) => AmmError::InsufficientAmountOut,
            other => other,
        })
    }
}

//! Constant-product pool for one ordered asset pair (Uniswap V2 style).
//!
//! The pool holds reserves of `A` and `B`, prices swaps along `x · y = k`
//! with an input-side fee, and issues shares to liquidity providers.
//!
//! # Lifecycle
//!
//! 1. Created empty by [`PoolRegistry::create_pool`](crate::registry::PoolRegistry::create_pool).
//! 2. The first deposit sets the price.  It mints
//!    `⌊√(a · b)⌋ − MINIMAL_LIQUIDITY` shares and locks
//!    [`MINIMAL_LIQUIDITY`] in `total_shares` forever.
//! 3. Later deposits are matched to the current ratio; the surplus stays
//!    in the provider's coins.
//! 4. Swaps add the full input (fee included) to one reserve and pay the
//!    quoted output from the other, so `k` never decreases.
//!
//! # Concurrency
//!
//! A mutating call first claims the pool's entry flag with a
//! compare-exchange and fails with [`AmmError::InvalidState`] if another
//! mutation already holds it, so a re-entrant or concurrent mutation is
//! rejected rather than interleaved.  The flag is released on every return
//! path.  Reserves sit behind a [`parking_lot::Mutex`] that readers and the
//! claiming mutation take with a blocking `lock`; a reader never makes the
//! pool look locked.  Every check runs before the first write, so a failed
//! call leaves the pool, the caller's coins and positions, and the event
//! buffer untouched.

use core::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::domain::{BasisPoints, Coin, ObjectId, TxContext};
use crate::error::AmmError;
use crate::events::Event;
use crate::math::{get_amount_out, isqrt};
use crate::position::{PositionSupply, PositionToken};
use crate::traits::Asset;

/// Shares locked at the first deposit and never issued to anyone.
pub const MINIMAL_LIQUIDITY: u64 = 1_000;

/// Output for selling `amount_in` into reserves `reserve_in` / `reserve_out`
/// at `fee_bps`.
///
/// Pure; 256-bit intermediates make every `u64` combination safe.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::InvalidFee`] if `fee_bps` exceeds 10 000.
///
/// # Examples
///
/// ```
/// use pairswap::pools::quote;
///
/// assert_eq!(quote(100_000_000, 5_000_000_000_000, 1_000_000_000, 30), Ok(19_939));
/// ```
pub fn quote(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u64,
) -> Result<u64, AmmError> {
    get_amount_out(amount_in, reserve_in, reserve_out, BasisPoints::new(fee_bps))
}

struct PoolState<A, B> {
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u64,
    supply: PositionSupply<A, B>,
}

/// A shared constant-product pool over `A` and `B`.
///
/// `A` and `B` are in the creator's order; only the registry key is
/// canonical.  The pool is `Send + Sync` and is used through `&self`.
pub struct LiquidityPool<A, B> {
    id: ObjectId,
    fee: BasisPoints,
    entered: AtomicBool,
    state: Mutex<PoolState<A, B>>,
}

/// Holds the entry flag for one mutating call and clears it on drop.
struct Entered<'a>(&'a AtomicBool);

impl Drop for Entered<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A claimed pool: the entry flag plus the data lock.  Field order drops
/// the data lock before the flag is cleared.
struct Exclusive<'a, A, B> {
    state: MutexGuard<'a, PoolState<A, B>>,
    _entered: Entered<'a>,
}

impl<A, B> core::ops::Deref for Exclusive<'_, A, B> {
    type Target = PoolState<A, B>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl<A, B> core::ops::DerefMut for Exclusive<'_, A, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl<A: Asset, B: Asset> LiquidityPool<A, B> {
    /// Creates an empty pool and emits [`Event::PoolCreated`].
    pub(crate) fn create(config: PoolConfig, ctx: &mut TxContext) -> Result<Self, AmmError> {
        config.validate()?;
        let id = ctx.fresh_id();
        let pool = Self {
            id,
            fee: config.fee(),
            entered: AtomicBool::new(false),
            state: Mutex::new(PoolState {
                reserve_a: 0,
                reserve_b: 0,
                total_shares: 0,
                supply: PositionSupply::new(id),
            }),
        };
        debug!(pool = %id, a = A::TYPE_NAME, b = B::TYPE_NAME, fee = %pool.fee, "pool created");
        ctx.emit(Event::PoolCreated {
            pool_id: id,
            creator: ctx.sender(),
        });
        Ok(pool)
    }

    /// Pool id.
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// Current `(reserve_a, reserve_b)`.
    #[must_use]
    pub fn get_reserves(&self) -> (u64, u64) {
        let state = self.state.lock();
        (state.reserve_a, state.reserve_b)
    }

    /// Swap fee in basis points.
    #[must_use]
    pub const fn get_fee_bps(&self) -> u64 {
        self.fee.get()
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Outstanding shares, including the locked minimum.
    #[must_use]
    pub fn total_shares(&self) -> u64 {
        self.state.lock().total_shares
    }

    /// Shares held in position records.
    #[must_use]
    pub fn share_supply(&self) -> u64 {
        self.state.lock().supply.supply()
    }

    /// Returns `true` while a mutating call holds the pool.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.entered.load(Ordering::Acquire)
    }

    fn enter(&self) -> Result<Entered<'_>, AmmError> {
        self.entered
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_err(|_| {
                warn!(pool = %self.id, "rejected call on a locked pool");
                AmmError::InvalidState("pool is locked")
            })?;
        Ok(Entered(&self.entered))
    }

    fn acquire(&self) -> Result<Exclusive<'_, A, B>, AmmError> {
        let entered = self.enter()?;
        Ok(Exclusive {
            state: self.state.lock(),
            _entered: entered,
        })
    }

    /// Deposits liquidity and returns a record of the minted shares.
    ///
    /// On the first deposit the full coin values are accepted.  Afterwards
    /// the accepted amounts follow the current reserve ratio and the
    /// surplus stays in `coin_a` / `coin_b`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidState`] if the pool is locked.
    /// - [`AmmError::ZeroAmount`] if either coin is empty.
    /// - [`AmmError::InsufficientLiquidity`] if an accepted amount falls
    ///   below `min_a` / `min_b`.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no shares would be
    ///   issued.
    /// - [`AmmError::Overflow`] if a reserve or the share total would
    ///   exceed `u64::MAX`.
    pub fn add_liquidity(
        &self,
        coin_a: &mut Coin<A>,
        coin_b: &mut Coin<B>,
        min_a: u64,
        min_b: u64,
        ctx: &mut TxContext,
    ) -> Result<PositionToken<A, B>, AmmError> {
        let mut state = self.acquire()?;
        let (supplied_a, supplied_b) = (coin_a.value(), coin_b.value());
        if supplied_a == 0 || supplied_b == 0 {
            return Err(AmmError::ZeroAmount);
        }

        let (amount_a, amount_b, minted, locked) =
            if state.reserve_a == 0 && state.reserve_b == 0 {
                let root = isqrt(u128::from(supplied_a) * u128::from(supplied_b));
                let root = u64::try_from(root).map_err(|_| AmmError::Overflow("initial shares"))?;
                if supplied_a < min_a || supplied_b < min_b {
                    return Err(AmmError::InsufficientLiquidity);
                }
                if root <= MINIMAL_LIQUIDITY {
                    return Err(AmmError::InsufficientLiquidityMinted);
                }
                (supplied_a, supplied_b, root - MINIMAL_LIQUIDITY, MINIMAL_LIQUIDITY)
            } else {
                let (amount_a, amount_b) = matched_amounts(
                    supplied_a,
                    supplied_b,
                    state.reserve_a,
                    state.reserve_b,
                )?;
                if amount_a < min_a || amount_b < min_b {
                    return Err(AmmError::InsufficientLiquidity);
                }
                let minted = proportional(amount_a, state.total_shares, state.reserve_a)?
                    .min(proportional(amount_b, state.total_shares, state.reserve_b)?);
                if minted == 0 {
                    return Err(AmmError::InsufficientLiquidityMinted);
                }
                (amount_a, amount_b, minted, 0)
            };

        let reserve_a = state
            .reserve_a
            .checked_add(amount_a)
            .ok_or(AmmError::Overflow("reserve a overflow"))?;
        let reserve_b = state
            .reserve_b
            .checked_add(amount_b)
            .ok_or(AmmError::Overflow("reserve b overflow"))?;
        let total_shares = state
            .total_shares
            .checked_add(minted)
            .and_then(|t| t.checked_add(locked))
            .ok_or(AmmError::Overflow("total shares overflow"))?;

        let mut position = PositionToken::empty(self.id, ctx);
        state.supply.mint(minted, &mut position, ctx)?;
        // Both amounts were bounded by the coin values above.
        let _deposited = (coin_a.split(amount_a)?, coin_b.split(amount_b)?);
        state.reserve_a = reserve_a;
        state.reserve_b = reserve_b;
        state.total_shares = total_shares;
        drop(state);

        debug!(
            pool = %self.id,
            amount_a,
            amount_b,
            minted,
            reserve_a,
            reserve_b,
            "liquidity added"
        );
        ctx.emit(Event::LiquidityAdded {
            pool_id: self.id,
            provider: ctx.sender(),
            amount_a,
            amount_b,
            shares_minted: minted,
        });
        Ok(position)
    }

    /// Burns every share in `position` and pays out its slice of both
    /// reserves.  The emptied record stays with the caller.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidState`] if the pool is locked.
    /// - [`AmmError::ZeroAmount`] if the record is empty.
    /// - [`AmmError::PoolMismatch`] if the record belongs to another pool.
    /// - [`AmmError::InsufficientLiquidity`] if either payout falls below
    ///   its minimum.
    pub fn remove_liquidity(
        &self,
        position: &mut PositionToken<A, B>,
        min_a: u64,
        min_b: u64,
        ctx: &mut TxContext,
    ) -> Result<(Coin<A>, Coin<B>), AmmError> {
        let mut state = self.acquire()?;
        let shares = position.balance();
        if shares == 0 {
            return Err(AmmError::ZeroAmount);
        }
        if position.pool_id() != self.id {
            return Err(AmmError::PoolMismatch);
        }
        if state.total_shares == 0 {
            return Err(AmmError::InsufficientLiquidity);
        }

        let amount_a = proportional(shares, state.reserve_a, state.total_shares)?;
        let amount_b = proportional(shares, state.reserve_b, state.total_shares)?;
        if amount_a < min_a || amount_b < min_b {
            return Err(AmmError::InsufficientLiquidity);
        }
        let reserve_a = state
            .reserve_a
            .checked_sub(amount_a)
            .ok_or(AmmError::InvalidState("payout exceeds reserve a"))?;
        let reserve_b = state
            .reserve_b
            .checked_sub(amount_b)
            .ok_or(AmmError::InvalidState("payout exceeds reserve b"))?;
        let total_shares = state
            .total_shares
            .checked_sub(shares)
            .ok_or(AmmError::InvalidState("burn exceeds total shares"))?;

        state.supply.burn(position, shares, ctx)?;
        state.reserve_a = reserve_a;
        state.reserve_b = reserve_b;
        state.total_shares = total_shares;
        drop(state);

        debug!(
            pool = %self.id,
            amount_a,
            amount_b,
            burned = shares,
            reserve_a,
            reserve_b,
            "liquidity removed"
        );
        ctx.emit(Event::LiquidityRemoved {
            pool_id: self.id,
            provider: ctx.sender(),
            amount_a,
            amount_b,
            shares_burned: shares,
        });
        Ok((Coin::new(amount_a), Coin::new(amount_b)))
    }

    /// Swaps the non-empty input coin for the other asset.
    ///
    /// Exactly one of `coin_a_in` / `coin_b_in` must hold value; it is
    /// drained into the pool.  The returned pair holds the output on the
    /// opposite side and an empty coin on the input side.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidState`] if the pool is locked or both inputs
    ///   hold value.
    /// - [`AmmError::ZeroAmount`] if both inputs are empty.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty or the
    ///   output would drain the opposite reserve.
    /// - [`AmmError::InsufficientOutputAmount`] if the output is zero or
    ///   below the minimum for that side.
    pub fn swap(
        &self,
        coin_a_in: &mut Coin<A>,
        coin_b_in: &mut Coin<B>,
        min_a_out: u64,
        min_b_out: u64,
        ctx: &mut TxContext,
    ) -> Result<(Coin<A>, Coin<B>), AmmError> {
        let mut state = self.acquire()?;
        let (a_in, b_in) = (coin_a_in.value(), coin_b_in.value());
        match (a_in, b_in) {
            (0, 0) => return Err(AmmError::ZeroAmount),
            (_, 0) | (0, _) => {}
            _ => return Err(AmmError::InvalidState("swap input must be one-sided")),
        }

        let (a_out, b_out) = if a_in > 0 {
            let out = self.price(a_in, state.reserve_a, state.reserve_b, min_b_out)?;
            (0, out)
        } else {
            let out = self.price(b_in, state.reserve_b, state.reserve_a, min_a_out)?;
            (out, 0)
        };
        let reserve_a = state
            .reserve_a
            .checked_add(a_in)
            .and_then(|r| r.checked_sub(a_out))
            .ok_or(AmmError::Overflow("reserve a overflow"))?;
        let reserve_b = state
            .reserve_b
            .checked_add(b_in)
            .and_then(|r| r.checked_sub(b_out))
            .ok_or(AmmError::Overflow("reserve b overflow"))?;

        let _absorbed = (coin_a_in.take(), coin_b_in.take());
        state.reserve_a = reserve_a;
        state.reserve_b = reserve_b;
        drop(state);

        debug!(
            pool = %self.id,
            a_in,
            b_in,
            a_out,
            b_out,
            fee = self.fee.fee_on(a_in.max(b_in)),
            reserve_a,
            reserve_b,
            "swap executed"
        );
        ctx.emit(Event::Swap {
            pool_id: self.id,
            sender: ctx.sender(),
            amount_a_in: a_in,
            amount_b_in: b_in,
            amount_a_out: a_out,
            amount_b_out: b_out,
        });
        Ok((Coin::new(a_out), Coin::new(b_out)))
    }

    fn price(
        &self,
        amount_in: u64,
        reserve_in: u64,
        reserve_out: u64,
        min_out: u64,
    ) -> Result<u64, AmmError> {
        let out = get_amount_out(amount_in, reserve_in, reserve_out, self.fee)?;
        if out == 0 || out < min_out {
            return Err(AmmError::InsufficientOutputAmount);
        }
        if out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(out)
    }
}

impl<A: Asset, B: Asset> core::fmt::Debug for LiquidityPool<A, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut out = f.debug_struct("LiquidityPool");
        out.field("id", &self.id)
            .field("pair", &(A::TYPE_NAME, B::TYPE_NAME))
            .field("fee", &self.fee);
        match self.state.try_lock() {
            Some(state) => out
                .field("reserve_a", &state.reserve_a)
                .field("reserve_b", &state.reserve_b)
                .field("total_shares", &state.total_shares),
            None => out.field("state", &"<busy>"),
        };
        out.finish()
    }
}

/// Amounts matched to the reserve ratio: B is capped by what A buys at the
/// current price, then A is recomputed from the accepted B.
fn matched_amounts(
    supplied_a: u64,
    supplied_b: u64,
    reserve_a: u64,
    reserve_b: u64,
) -> Result<(u64, u64), AmmError> {
    if reserve_a == 0 || reserve_b == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }
    let amount_b = proportional_saturating(supplied_a, reserve_b, reserve_a).min(supplied_b);
    let amount_a = proportional(amount_b, reserve_a, reserve_b)?;
    Ok((amount_a, amount_b))
}

/// `⌊value · numerator / denominator⌋` in `u128`.
fn proportional(value: u64, numerator: u64, denominator: u64) -> Result<u64, AmmError> {
    if denominator == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }
    let scaled = u128::from(value) * u128::from(numerator) / u128::from(denominator);
    u64::try_from(scaled).map_err(|_| AmmError::Overflow("proportional amount exceeds u64"))
}

fn proportional_saturating(value: u64, numerator: u64, denominator: u64) -> u64 {
    let scaled = u128::from(value) * u128::from(numerator) / u128::from(denominator.max(1));
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

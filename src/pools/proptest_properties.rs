//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant preservation**: `reserve_a · reserve_b` never decreases
//!    across a swap.
//! 2. **Liquidity conservation**: add then remove returns at most what was
//!    supplied.
//! 3. **Quote monotonicity**: a larger input never quotes a smaller output.
//! 4. **Split/join**: splitting a position then joining it back restores
//!    the balance.
//! 5. **Exact output**: paying the inverse quote always buys at least the
//!    requested amount.

use proptest::prelude::*;

use super::{quote, LiquidityPool};
use crate::config::PoolConfig;
use crate::domain::{Address, BasisPoints, Coin, TxContext};
use crate::math::get_amount_in;
use crate::position::PositionToken;
use crate::traits::Asset;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

enum Base {}
impl Asset for Base {
    const TYPE_NAME: &'static str = "prop::base::BASE";
}
enum Quote {}
impl Asset for Quote {
    const TYPE_NAME: &'static str = "prop::quote::QUOTE";
}

type Pool = LiquidityPool<Base, Quote>;

fn ctx() -> TxContext {
    TxContext::new(Address::from_bytes([0x77; 32]), [0x42; 32])
}

fn make_pool(ra: u64, rb: u64, ctx: &mut TxContext) -> (Pool, PositionToken<Base, Quote>) {
    let Ok(pool) = Pool::create(PoolConfig::default(), ctx) else {
        panic!("default config is valid");
    };
    let Ok(seed) = pool.add_liquidity(&mut Coin::new(ra), &mut Coin::new(rb), 0, 0, ctx) else {
        panic!("seed deposit succeeds");
    };
    (pool, seed)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000_000u64
}

fn fee_strategy() -> impl Strategy<Value = u64> {
    0u64..=1_000u64
}

// ---------------------------------------------------------------------------
// Property 1: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_never_decreases_k(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in 1u64..=1_000_000_000u64,
        a_to_b in any::<bool>(),
    ) {
        let mut ctx = ctx();
        let (pool, _) = make_pool(ra, rb, &mut ctx);
        let k_before = u128::from(ra) * u128::from(rb);

        let result = if a_to_b {
            pool.swap(&mut Coin::new(amount), &mut Coin::zero(), 0, 0, &mut ctx)
        } else {
            pool.swap(&mut Coin::zero(), &mut Coin::new(amount), 0, 0, &mut ctx)
        };
        let (na, nb) = pool.get_reserves();
        let k_after = u128::from(na) * u128::from(nb);
        prop_assert!(k_after >= k_before, "k decreased: {} < {}", k_after, k_before);
        if result.is_err() {
            prop_assert_eq!((na, nb), (ra, rb));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Liquidity conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_add_remove_returns_at_most_supplied(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        add_a in 1_000u64..=1_000_000_000u64,
        add_b in 1_000u64..=1_000_000_000u64,
    ) {
        let mut ctx = ctx();
        let (pool, _) = make_pool(ra, rb, &mut ctx);
        let mut coin_a = Coin::new(add_a);
        let mut coin_b = Coin::new(add_b);
        let Ok(mut position) = pool.add_liquidity(&mut coin_a, &mut coin_b, 0, 0, &mut ctx) else {
            return Ok(());
        };
        let Ok((out_a, out_b)) = pool.remove_liquidity(&mut position, 0, 0, &mut ctx) else {
            return Ok(());
        };
        prop_assert!(out_a.value() + coin_a.value() <= add_a);
        prop_assert!(out_b.value() + coin_b.value() <= add_b);
        prop_assert_eq!(pool.share_supply() + super::MINIMAL_LIQUIDITY, pool.total_shares());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Quote monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_monotonic(
        reserve_in in 1u64..=u64::MAX,
        reserve_out in 1u64..=u64::MAX,
        small in 1u64..=u64::MAX / 2,
        extra in 0u64..=u64::MAX / 2,
        fee in fee_strategy(),
    ) {
        let Ok(lo) = quote(small, reserve_in, reserve_out, fee) else {
            return Err(TestCaseError::fail("quote is total over positive inputs"));
        };
        let Ok(hi) = quote(small + extra, reserve_in, reserve_out, fee) else {
            return Err(TestCaseError::fail("quote is total over positive inputs"));
        };
        prop_assert!(hi >= lo);
        prop_assert!(hi < reserve_out);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Split / join
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_split_join_restores_balance(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in 0u64..=100u64,
    ) {
        let mut ctx = ctx();
        let (_, mut position) = make_pool(ra, rb, &mut ctx);
        let before = position.balance();
        let Ok(part) = position.split(before / 100 * fraction, &mut ctx) else {
            return Err(TestCaseError::fail("split within balance"));
        };
        prop_assert_eq!(part.pool_id(), position.pool_id());
        prop_assert!(position.join(part).is_ok());
        prop_assert_eq!(position.balance(), before);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Exact output
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_exact_output_delivers_requested(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        want_bp in 1u64..=5_000u64,
        fee in fee_strategy(),
    ) {
        let want = rb / 10_000 * want_bp;
        if want == 0 {
            return Ok(());
        }
        let fee = BasisPoints::new(fee);
        let Ok(required) = get_amount_in(want, ra, rb, fee) else {
            return Err(TestCaseError::fail("priceable below half the reserve"));
        };
        let Ok(out) = quote(required, ra, rb, fee.get()) else {
            return Err(TestCaseError::fail("required input is quotable"));
        };
        prop_assert!(out >= want, "paid {} for {} < {}", required, out, want);
    }
}

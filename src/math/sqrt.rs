//! Integer square root.

/// Floor of the square root of `n`, by Newton iteration.
///
/// # Examples
///
/// ```
/// use pairswap::math::isqrt;
///
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// assert_eq!(isqrt(5_000_000_000_000_000), 70_710_678);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

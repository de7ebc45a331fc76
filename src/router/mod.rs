//! Deadline-checked entry points over registered pools.
//!
//! [`Router`] wraps pool calls with two preconditions: the pool must be the
//! one registered for its pair, and the logical clock must not have passed
//! the caller's deadline.  It also adds the exact-output swap, priced with
//! the inverse curve.

mod route;
#[allow(clippy::module_inception)]
mod router;

pub use route::{AToB, BToA, SwapRoute};
pub use router::Router;

//! Pure Rust implementation of the real Airy functions and the Riemann
//! zeta function, ported from the Cephes Math Library (S. L. Moshier,
//! 1984–2000).
//!
//! Two independent evaluators are provided:
//!
//! - [`airy`]: the two solutions Ai(x), Bi(x) of y″ = xy and their first
//!   derivatives, for any finite real x.
//! - [`zetac`]: ζ(x) − 1, extended to negative arguments by the
//!   reflection formula.
//!
//! Both select among power series, rational minimax approximations and
//! asymptotic expansions according to the argument, with the dispatch
//! thresholds derived from the working float type (see
//! [`SpecFloat`](machine::SpecFloat)). Exceptional inputs (the Bi
//! overflow region, the ζ pole at x = 1, the reflection cutoff) return
//! documented sentinel values; use the `_raw` variants to observe the
//! reported [`Condition`].
//!
//! # Accuracy
//!
//! For f64, peak relative error over the tested domains is a few parts
//! in 10¹⁵ for zetac on (1, 50) and a few parts in 10¹⁴ for the Airy
//! functions on (−10, 10); absolute error applies where the functions
//! oscillate. For f32 the f64 coefficient tables are more than accurate
//! enough and error is dominated by the working precision.
//!
//! # Example
//!
//! ```
//! use specfun::{airy, zetac};
//!
//! let v = airy(1.0_f64);
//! assert!((v.ai - 0.13529241631288141).abs() < 1e-13);
//!
//! // ζ(2) − 1 = π²/6 − 1
//! assert!((zetac(2.0_f64) - 0.6449340668482264).abs() < 1e-15);
//! ```
//!
//! # Features
//!
//! - `std` (default): elementary functions from the host math library.
//! - `libm`: software floating-point math, for `no_std` targets.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod machine;
pub mod types;

mod airy;
mod poly;
mod utils;
mod zeta;

pub use machine::SpecFloat;
pub use types::{Airy, AiryResult, Condition, ZetacResult};

/// Airy functions Ai(x), Ai'(x), Bi(x), Bi'(x).
///
/// For x above the overflow threshold the result carries the documented
/// sentinels (Ai = Ai' = 0, Bi = Bi' = maximum finite value); use
/// [`airy_raw`] to observe the condition.
pub fn airy<T: SpecFloat>(x: T) -> Airy<T> {
    airy::airy_raw(x).values
}

/// Airy functions together with the evaluation [`Condition`].
pub fn airy_raw<T: SpecFloat>(x: T) -> AiryResult<T> {
    airy::airy_raw(x)
}

/// Riemann zeta function minus one, ζ(x) − 1.
///
/// Working with the complement keeps full precision for large x, where
/// ζ(x) − 1 underflows long before ζ(x) stops rounding to 1. At the
/// pole x = 1 the maximum finite value is returned; below the
/// reflection cutoff, 0. Use [`zetac_raw`] to observe the condition.
pub fn zetac<T: SpecFloat>(x: T) -> T {
    zeta::zetac_raw(x).value
}

/// ζ(x) − 1 together with the evaluation [`Condition`].
pub fn zetac_raw<T: SpecFloat>(x: T) -> ZetacResult<T> {
    zeta::zetac_raw(x)
}

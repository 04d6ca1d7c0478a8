//! Machine constants and the `SpecFloat` trait.
//!
//! Constants follow the Cephes MACHEP/MAXNUM conventions, expressed per
//! float type so the precision-dependent dispatch thresholds are derived
//! from the working type's exponent range rather than hardcoded for one
//! historical layout.

use num_traits::Float;

/// Floating-point trait for special function computation.
///
/// Implemented for `f64` and `f32`. Provides machine constants and the
/// derived dispatch thresholds used by the Airy and zeta evaluators.
pub trait SpecFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon: smallest ε with 1 + ε ≠ 1 (Cephes MACHEP).
    const MACH_EPSILON: Self;
    /// Largest representable finite number (Cephes MAXNUM).
    const MACH_HUGE: Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// All coefficient tables originate as f64 literals, so this
    /// conversion always succeeds for the supported types.
    fn from_f64(x: f64) -> Self;

    /// Largest argument before Bi(x) overflows.
    ///
    /// Bi(x) ~ exp(ζ)/(√π·x^(1/4)) with ζ = (2/3)x^(3/2), so the threshold
    /// is (1.5·ln(MACH_HUGE))^(2/3), held slightly below the exact
    /// crossover.
    fn max_airy() -> Self;

    /// Most negative argument accepted by the zeta reflection formula.
    ///
    /// Below this, Γ(1−x) exceeds MACH_HUGE and the reflection cannot be
    /// evaluated.
    fn zetac_cutoff() -> Self;

    /// Gamma function Γ(x), supplied by libm.
    fn gamma(self) -> Self;
}

impl SpecFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn max_airy() -> f64 {
        103.892
    } // (1.5 * ln(1.798e308))^(2/3) = 104.24
    #[inline]
    fn zetac_cutoff() -> f64 {
        -170.6243
    } // Γ(171.62) reaches 1.8e308
    #[inline]
    fn gamma(self) -> f64 {
        libm::tgamma(self)
    }
}

impl SpecFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_HUGE: f32 = 3.4028235e+38;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn max_airy() -> f32 {
        25.77
    } // (1.5 * ln(3.40e38))^(2/3) = 26.07
    #[inline]
    fn zetac_cutoff() -> f32 {
        -30.8148
    } // (2π)^x·Γ(1−x) leaves the 8-bit exponent range
    #[inline]
    fn gamma(self) -> f32 {
        libm::tgammaf(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_matches_core() {
        assert_eq!(f64::MACH_EPSILON, f64::EPSILON);
        assert_eq!(f32::MACH_EPSILON, f32::EPSILON);
    }

    #[test]
    fn huge_matches_core() {
        assert_eq!(f64::MACH_HUGE, f64::MAX);
        assert_eq!(f32::MACH_HUGE, f32::MAX);
    }

    #[test]
    fn max_airy_below_bi_overflow() {
        // exp((2/3)·x^(3/2)) at the threshold must still be finite.
        let x = f64::max_airy();
        let zeta = 2.0 * x * x.sqrt() / 3.0;
        assert!(zeta.exp().is_finite());

        let x = f32::max_airy();
        let zeta = 2.0 * x * x.sqrt() / 3.0;
        assert!(zeta.exp().is_finite());
    }

    #[test]
    fn zetac_cutoff_keeps_gamma_finite() {
        let s = 1.0 - f64::zetac_cutoff();
        assert!(s.gamma().is_finite());
    }

    #[test]
    fn gamma_known_values() {
        // Γ(5) = 24, Γ(0.5) = √π
        assert!((5.0_f64.gamma() - 24.0).abs() < 1e-13);
        let sqrt_pi = core::f64::consts::PI.sqrt();
        assert!((0.5_f64.gamma() - sqrt_pi).abs() < 1e-15);
    }
}

//! Riemann zeta function, minus one.
//!
//! Port of the Cephes Math Library routine `zetac.c` (S. L. Moshier,
//! 1984–2000).
//!
//! ```text
//!              inf.
//!               -    -x
//!  zetac(x) =   >   k  ,    x > 1,
//!               -
//!              k=2
//! ```
//!
//! so ζ(x) = zetac(x) + 1. Working with the complement keeps full
//! precision for large x, where ζ(x) − 1 underflows long before ζ(x)
//! stops rounding to 1. The definition is extended below x = 1 by a
//! rational fit across the pole and by the reflection formula for
//! negative arguments.

// Coefficient tables are transcribed at full precision.
#![allow(clippy::excessive_precision)]

use crate::machine::SpecFloat;
use crate::poly::{p1evl, polevl};
use crate::types::{Condition, ZetacResult};
use crate::utils::sinpi;

/// Above this, zetac is dominated by its leading term 2^−x, which is
/// below one epsilon relative to ζ ≈ 1 in either supported precision.
const MAXL2: f64 = 127.0;

/// ζ(n) − 1 for integer n = 0..30.
///
/// Entry 1 is the pole; it stores the maximum finite f64 as a sentinel
/// and the lookup reports [`Condition::Singularity`] instead of reading
/// it through the generic conversion.
#[rustfmt::skip]
const ZETAC_TABLE: [f64; 31] = [
    -1.50000000000000000000e0,
     1.7976931348623157e308,    // pole at n = 1
     6.44934066848226436472e-1, // π²/6 − 1
     2.02056903159594285400e-1,
     8.23232337111381915160e-2,
     3.69277551433699263314e-2,
     1.73430619844491397145e-2,
     8.34927738192282683980e-3,
     4.07735619794433937869e-3,
     2.00839282608221441785e-3,
     9.94575127818085337146e-4,
     4.94188604119464558702e-4,
     2.46086553308048298638e-4,
     1.22713347578489146752e-4,
     6.12481350587048292585e-5,
     3.05882363070204935517e-5,
     1.52822594086518717326e-5,
     7.63719763789976227360e-6,
     3.81729326499983985646e-6,
     1.90821271655393892566e-6,
     9.53962033872796113152e-7,
     4.76932986787806463117e-7,
     2.38450502727732990004e-7,
     1.19219925965311073068e-7,
     5.96081890512594796124e-8,
     2.98035035146522801861e-8,
     1.49015548283650412347e-8,
     7.45071178983542949198e-9,
     3.72533402478845705482e-9,
     1.86265972351304900640e-9,
     9.31327432419668182872e-10,
];

/// (1 − x)(ζ(x) − 1) = N(x)/D(x), 0 ≤ x < 1.
#[rustfmt::skip]
const R_LOW: [f64; 6] = [
    -3.28717474506562731748e-1,
     1.55162528742623950834e1,
    -2.48762831680821954401e2,
     1.01050368053237678329e3,
     1.26726061410235149405e4,
    -1.11578094770515181334e5,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const S_LOW: [f64; 5] = [
    1.95107674914060531512e1,
    3.17710311750646984099e2,
    3.03835500874445748734e3,
    2.03665876435770579345e4,
    7.43853965136767874343e4,
];

/// 2^x·(x − 1)(ζ(x) − 1) = N(w)/D(w) in w = 1/x, 1 < x ≤ 10.
#[rustfmt::skip]
const P_MID: [f64; 9] = [
    5.85746514569725319540e11,
    2.57534127756102572888e11,
    4.87781159567948256438e10,
    5.15399538023885770696e9,
    3.41646073514754094281e8,
    1.60837006880656492731e7,
    5.92785467342109522998e5,
    1.51129169964938823117e4,
    2.01822444485997955865e2,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const Q_MID: [f64; 8] = [
    3.90497676373371157516e11,
    5.22858235368272161797e10,
    5.64451517271280543351e9,
    3.39006746015350418834e8,
    1.79410371500126453702e7,
    5.66666825131384797029e5,
    1.60382976810944131506e4,
    1.96436237223387314144e2,
];

/// log(ζ(x) − 1 − 2^−x) = N(x)/D(x), 10 < x ≤ 50.
#[rustfmt::skip]
const A_LOG: [f64; 11] = [
     8.70728567484590192539e6,
     1.76506865670346462757e8,
     2.60889506707483264896e10,
     5.29806374009894791647e11,
     2.26888156119238241487e13,
     3.31884402932705083599e14,
     5.13778997975868230192e15,
    -1.98123688133907171455e15,
    -9.92763810039983572356e16,
     7.82905376180870586444e16,
     9.26786275768927717187e16,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const B_LOG: [f64; 10] = [
    -7.92625410563741062861e6,
    -1.60529969932920229676e8,
    -2.37669260975543221788e10,
    -4.80319584350455169857e11,
    -2.07820961754173320170e13,
    -2.96075404507272223680e14,
    -4.86299103694609136686e15,
     5.34589509675789930199e15,
     5.71464111092297631292e16,
    -1.79915597658676556828e16,
];

/// Compute ζ(x) − 1 with the evaluation condition.
///
/// Regimes, in precedence order:
/// 1. x < 0: reflection formula, with an [`Condition::Overflow`] cutoff
///    where Γ(1 − x) leaves representable range.
/// 2. x ≥ 127: exactly 0.
/// 3. Integer 0 ≤ x < 31: table lookup; n = 1 is the pole and reports
///    [`Condition::Singularity`].
/// 4. 0 ≤ x < 1, 1 < x ≤ 10, 10 < x ≤ 50: rational approximations.
/// 5. 50 < x < 127: direct summation of odd inverse powers.
pub(crate) fn zetac_raw<T: SpecFloat>(x: T) -> ZetacResult<T> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let pi = T::from_f64(core::f64::consts::PI);

    if x.is_nan() {
        return ZetacResult {
            value: x,
            condition: Condition::Normal,
        };
    }

    if x < zero {
        if x < T::zetac_cutoff() {
            // Γ(1 − x) in the reflection would exceed representable range.
            return ZetacResult {
                value: zero,
                condition: Condition::Overflow,
            };
        }
        // Reflection: ζ(x) = sin(πx/2)·(2π)^x·Γ(1−x)·ζ(1−x)/π.
        // 1 − x > 1 here, so the recursion terminates after one step.
        // sinpi makes the trivial zeros at negative even integers exact.
        let s = one - x;
        if s == one {
            // |x| is below epsilon: 1 − x has rounded to 1, which would
            // feed the pole sentinel into the reflection. ζ has already
            // rounded to ζ(0).
            return ZetacResult {
                value: T::from_f64(ZETAC_TABLE[0]),
                condition: Condition::Normal,
            };
        }
        let w = zetac_raw(s).value;
        let b = sinpi(T::from_f64(0.5) * x) * (two * pi).powf(x) * s.gamma() * (one + w) / pi;
        return ZetacResult {
            value: b - one,
            condition: Condition::Normal,
        };
    }

    if x >= T::from_f64(MAXL2) {
        // First term 2^−x is negligible relative to ζ ≈ 1.
        return ZetacResult {
            value: zero,
            condition: Condition::Normal,
        };
    }

    // Tabulated values for integer argument.
    if x.floor() == x {
        if let Some(n) = x.to_usize() {
            if n < ZETAC_TABLE.len() {
                if n == 1 {
                    // The pole of ζ. A non-integer argument can never be
                    // exactly 1, so this is the only path that reaches it.
                    return ZetacResult {
                        value: T::MACH_HUGE,
                        condition: Condition::Singularity,
                    };
                }
                return ZetacResult {
                    value: T::from_f64(ZETAC_TABLE[n]),
                    condition: Condition::Normal,
                };
            }
        }
    }

    if x < one {
        // Rational fit of (1 − x)(ζ(x) − 1), the pole factored out.
        let w = one - x;
        let a = polevl(x, &R_LOW) / (w * p1evl(x, &S_LOW));
        return ZetacResult {
            value: a,
            condition: Condition::Normal,
        };
    }

    if x <= T::from_f64(10.0) {
        // Rational fit of 2^x·(x − 1)(ζ(x) − 1) in 1/x, divided back out.
        let b = two.powf(x) * (x - one);
        let w = one / x;
        let s = (x * polevl(w, &P_MID)) / (b * p1evl(w, &Q_MID));
        return ZetacResult {
            value: s,
            condition: Condition::Normal,
        };
    }

    if x <= T::from_f64(50.0) {
        // exp of a rational fit of log(ζ(x) − 1 − 2^−x), plus 2^−x.
        let b = two.powf(-x);
        let w = polevl(x, &A_LOG) / p1evl(x, &B_LOG);
        return ZetacResult {
            value: w.exp() + b,
            condition: Condition::Normal,
        };
    }

    // 50 < x < 127: sum k^−x over odd k ≥ 3 to machine epsilon, then
    // reconstruct the even terms from s = (s + 2^−x)/(1 − 2^−x).
    let mut s = zero;
    let mut a = one;
    loop {
        a = a + two;
        let b = a.powf(-x);
        s = s + b;
        if b / s <= T::MACH_EPSILON {
            break;
        }
    }
    let b = two.powf(-x);
    s = (s + b) / (one - b);
    ZetacResult {
        value: s,
        condition: Condition::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EULER: f64 = 0.57721566490153286;

    fn assert_rel(got: f64, want: f64, tol: f64, what: &str) {
        assert!(
            ((got - want) / want).abs() < tol,
            "{what}: got {got:e}, want {want:e}"
        );
    }

    // ── Integer lookup ──

    #[test]
    fn integer_table_roundtrip() {
        for n in 0..31usize {
            if n == 1 {
                continue;
            }
            let got = zetac_raw(n as f64).value;
            assert_eq!(got, ZETAC_TABLE[n], "zetac({n})");
        }
    }

    #[test]
    fn basel_value() {
        // ζ(2) − 1 = π²/6 − 1
        let pi = core::f64::consts::PI;
        let want = pi * pi / 6.0 - 1.0;
        assert!((zetac_raw(2.0_f64).value - want).abs() < 1e-15);
    }

    #[test]
    fn pole_at_one() {
        let r = zetac_raw(1.0_f64);
        assert_eq!(r.condition, Condition::Singularity);
        assert_eq!(r.value, f64::MACH_HUGE);
    }

    #[test]
    fn integer_above_table_range() {
        // 35 is an integer but past the table; x ≤ 50 regime applies.
        let want = 2.0_f64.powi(-35) + 3.0_f64.powi(-35);
        assert_rel(zetac_raw(35.0_f64).value, want, 1e-10, "zetac(35)");
    }

    // ── Rational regimes ──

    #[test]
    fn below_one() {
        // ζ(1/2) = -1.4603545088095868 (mpmath)
        let got = zetac_raw(0.5_f64).value;
        assert!((got - (-2.4603545088095868)).abs() < 1e-13);
    }

    #[test]
    fn mid_range() {
        // ζ(3/2) = 2.6123753486854883 (mpmath)
        let got = zetac_raw(1.5_f64).value;
        assert!((got - 1.6123753486854883).abs() < 1e-13);
    }

    #[test]
    fn near_pole_both_sides() {
        // ζ(1 + ε) = 1/ε + γ + O(ε), so the rational fits on both sides
        // of the pole must reproduce 1/ε + γ − 1 closely.
        let eps = 1e-6_f64;
        let want_above = 1.0 / eps + EULER - 1.0;
        assert_rel(zetac_raw(1.0 + eps).value, want_above, 1e-9, "zetac(1+ε)");
        let want_below = -1.0 / eps + EULER - 1.0;
        assert_rel(zetac_raw(1.0 - eps).value, want_below, 1e-9, "zetac(1−ε)");
    }

    // ── Reflection ──

    #[test]
    fn reflection_odd_negative_integers() {
        // ζ(−1) = −1/12, ζ(−3) = 1/120
        let got = zetac_raw(-1.0_f64).value;
        assert!((got - (-1.0 - 1.0 / 12.0)).abs() < 1e-13);
        let got = zetac_raw(-3.0_f64).value;
        assert!((got - (1.0 / 120.0 - 1.0)).abs() < 1e-13);
    }

    #[test]
    fn trivial_zeros_exact() {
        // ζ vanishes exactly at negative even integers: the sine factor
        // of the reflection is computed by argument reduction.
        for &x in &[-2.0_f64, -4.0, -10.0, -100.0] {
            assert_eq!(zetac_raw(x).value, -1.0, "zetac({x})");
        }
    }

    #[test]
    fn functional_equation() {
        // ζ(x) = 2^x·π^(x−1)·sin(πx/2)·Γ(1−x)·ζ(1−x)
        let pi = core::f64::consts::PI;
        for &x in &[0.1_f64, 0.3, 0.7, 0.9] {
            let lhs = zetac_raw(x).value + 1.0;
            let rhs = 2.0_f64.powf(x)
                * pi.powf(x - 1.0)
                * (0.5 * pi * x).sin()
                * (1.0 - x).gamma()
                * (zetac_raw(1.0 - x).value + 1.0);
            assert_rel(lhs, rhs, 1e-13, &format!("functional equation at {x}"));
        }
    }

    #[test]
    fn tiny_negative_argument() {
        // 1 − x rounds to 1 here; the reflection must not touch the pole
        // sentinel and instead returns ζ(0) − 1.
        assert_eq!(zetac_raw(-1.0e-300_f64).value, -1.5);
        assert_eq!(zetac_raw(-1.0e-17_f64).value, -1.5);
    }

    #[test]
    fn nan_propagates() {
        assert!(zetac_raw(f64::NAN).value.is_nan());
    }

    #[test]
    fn reflection_cutoff() {
        let r = zetac_raw(-200.0_f64);
        assert_eq!(r.condition, Condition::Overflow);
        assert_eq!(r.value, 0.0);

        // Just inside the cutoff: finite and reported normal.
        let r = zetac_raw(-169.5_f64);
        assert_eq!(r.condition, Condition::Normal);
        assert!(r.value.is_finite());
    }

    // ── Large arguments ──

    #[test]
    fn direct_sum() {
        // zetac(60) = 2^−60 + 3^−60 to machine precision; later terms
        // are far below one ulp.
        let want = 2.0_f64.powi(-60) + 3.0_f64.powi(-60);
        assert_rel(zetac_raw(60.0_f64).value, want, 5e-15, "zetac(60)");
    }

    #[test]
    fn huge_arguments_are_zero() {
        assert_eq!(zetac_raw(127.0_f64).value, 0.0);
        assert_eq!(zetac_raw(130.7_f64).value, 0.0);
        assert_eq!(zetac_raw(1.0e5_f64).value, 0.0);
    }

    // ── Regime boundaries ──

    #[test]
    fn boundary_continuity() {
        // The approximations on either side of each dispatch boundary
        // must agree; a jump would indicate a regime-selection bug.
        let eps = 1e-9_f64;
        for &b in &[10.0_f64, 50.0] {
            let lo = zetac_raw(b - eps).value;
            let hi = zetac_raw(b + eps).value;
            assert_rel(hi, lo, 1e-8, &format!("continuity at {b}"));
        }
        // Either side of x = 10 must also agree with the table value at 10.
        let table = zetac_raw(10.0_f64).value;
        assert_rel(zetac_raw(10.0 - eps).value, table, 1e-8, "10−ε vs table");
        assert_rel(zetac_raw(10.0 + eps).value, table, 1e-8, "10+ε vs table");
    }

    // ── f32 ──

    #[test]
    fn basel_value_f32() {
        let got = zetac_raw(2.0_f32).value;
        assert!((got - 0.6449341_f32).abs() < 1e-6);
    }

    #[test]
    fn pole_at_one_f32() {
        let r = zetac_raw(1.0_f32);
        assert_eq!(r.condition, Condition::Singularity);
        assert_eq!(r.value, f32::MACH_HUGE);
    }

    #[test]
    fn reflection_cutoff_f32() {
        let r = zetac_raw(-40.0_f32);
        assert_eq!(r.condition, Condition::Overflow);
    }
}

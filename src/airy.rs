//! Airy functions Ai(x), Bi(x) and their derivatives on the real line.
//!
//! Port of the Cephes Math Library routine `airy.c` (S. L. Moshier,
//! 1984–2000). The functions are the two independent solutions of
//! y″ = xy. Evaluation is by power series summation for small |x| and by
//! rational minimax asymptotic corrections for large |x|, with three
//! regimes selected on the argument's magnitude and sign.

// Coefficient tables are transcribed at full precision.
#![allow(clippy::excessive_precision)]

use crate::machine::SpecFloat;
use crate::poly::{p1evl, polevl};
use crate::types::{Airy, AiryResult, Condition};

/// Ai(0) = 3^(−2/3)/Γ(2/3).
const C1: f64 = 0.35502805388781723926;
/// −Ai'(0) = 3^(−1/3)/Γ(1/3).
const C2: f64 = 0.258819403792806798405;
const SQRT3: f64 = 1.732050807568877293527;
/// 1/√π.
const SQPII: f64 = 5.64189583547756286948e-1;

/// Crossover between the power series and the asymptotic forms, on both
/// sides of the origin. 2.09 ≈ cbrt(9) is where the guaranteed error of
/// the series matches that of the adjacent asymptotic regime.
const SERIES_CUTOFF: f64 = 2.09;

/// Above this, ζ = (2/3)x^(3/2) > 16 and the Bi asymptotic series is
/// accurate; below it Bi and Bi' still come from the power series.
const BI_ASYM_CUTOFF: f64 = 8.3203353;

// ─── Exponential regime, x ≥ 2.09 ───────────────────────────────────────────

/// Ai(x)·2√π·x^(1/4)·e^ζ = N(z)/D(z), z = 1/ζ.
#[rustfmt::skip]
const AI_ASYM_N: [f64; 8] = [
    3.46538101525629032477e-1,
    1.20075952739645805542e1,
    7.62796053615234516538e1,
    1.68089224934630576269e2,
    1.59756391350164413639e2,
    7.05360906840444183113e1,
    1.40264691163389668864e1,
    9.99999999999999995305e-1,
];
#[rustfmt::skip]
const AI_ASYM_D: [f64; 8] = [
    5.67594532638770212846e-1,
    1.47562562584847203173e1,
    8.45138970141474626562e1,
    1.77318088145400459522e2,
    1.64234692871529701831e2,
    7.14778400825575695274e1,
    1.40959135607834029598e1,
    1.00000000000000000470e0,
];

/// Ai'(x)·(−2√π/x^(1/4))·e^ζ = N(z)/D(z), z = 1/ζ.
#[rustfmt::skip]
const AIP_ASYM_N: [f64; 8] = [
    6.13759184814035759225e-1,
    1.47454670787755323881e1,
    8.20584123476060982430e1,
    1.71184781360976385540e2,
    1.59317847137141783523e2,
    6.99778599330103016170e1,
    1.39470856980481566958e1,
    1.00000000000000000550e0,
];
#[rustfmt::skip]
const AIP_ASYM_D: [f64; 8] = [
    3.34203677749736953049e-1,
    1.11810297306158156705e1,
    7.11727352147859965283e1,
    1.58778084372838313640e2,
    1.53206427475809220834e2,
    6.86752304592780337944e1,
    1.38498634758259442477e1,
    9.99999999999999994502e-1,
];

/// Bi correction for ζ > 16: Bi = sqpii·e^ζ·(1 + z·N(z)/D(z))/x^(1/4).
#[rustfmt::skip]
const BI_ASYM_N: [f64; 5] = [
    -2.53240795869364152689e-1,
     5.75285167332467384228e-1,
    -3.29907036873225371650e-1,
     6.44404068948199951727e-2,
    -3.82519546641336734394e-3,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const BI_ASYM_D: [f64; 5] = [
    -7.15685095054035237902e0,
     1.06039580715664694291e1,
    -5.23246636471251500874e0,
     9.57395864378383833152e-1,
    -5.50828147163549611107e-2,
];

/// Bi' correction for ζ > 16: Bi' = sqpii·e^ζ·x^(1/4)·(1 + z·N(z)/D(z)).
#[rustfmt::skip]
const BIP_ASYM_N: [f64; 5] = [
     4.65461162774651610328e-1,
    -1.08992173800493920734e0,
     6.38800117371827987759e-1,
    -1.26844349553102907034e-1,
     7.62487844342109852105e-3,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const BIP_ASYM_D: [f64; 5] = [
    -8.70622787633159124240e0,
     1.38993162704553213172e1,
    -7.14116144616431159572e0,
     1.34008595960680518666e0,
    -7.84273211323341930448e-2,
];

// ─── Oscillatory regime, x < −2.09 ──────────────────────────────────────────
//
// With ζ = −(2/3)x√(−x) and z = 1/ζ, the value pair combines the
// amplitude corrections uf, ug through sin/cos(ζ + π/4); the derivative
// pair uses an independent pair of rational fits.

/// uf = 1 + z²·N(z²)/D(z²) for Ai/Bi.
#[rustfmt::skip]
const AF_N: [f64; 9] = [
    -1.31696323418331795333e-1,
    -6.26456544431912369773e-1,
    -6.93158036036933542233e-1,
    -2.79779981545119124951e-1,
    -4.91900132609500318020e-2,
    -4.06265923594885404393e-3,
    -1.59276496239262096340e-4,
    -2.77649108155232920844e-6,
    -1.67787698489114633780e-8,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const AF_D: [f64; 9] = [
    1.33560420706553243746e1,
    3.26825032795224613948e1,
    2.67367040941499554804e1,
    9.18707402907259625840e0,
    1.47529146771666414581e0,
    1.15687173795188044134e-1,
    4.40291641615211203805e-3,
    7.54720348287414296618e-5,
    4.51850092970580378464e-7,
];

/// ug = z·N(z²)/D(z²) for Ai/Bi.
#[rustfmt::skip]
const AG_N: [f64; 11] = [
    1.97339932091685679179e-2,
    3.91103029615688277255e-1,
    1.06579897599595591108e0,
    9.39169229816650230044e-1,
    3.51465656105547619242e-1,
    6.33888919628925490927e-2,
    5.85804113048388458567e-3,
    2.82851600836737019778e-4,
    6.98793669997260967291e-6,
    8.11789239554389293311e-8,
    3.41551784765923618484e-10,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const AG_D: [f64; 10] = [
    9.30892908077441974853e0,
    1.98352928718312140417e1,
    1.55646628932864612953e1,
    5.47686069422975497931e0,
    9.54293611618961883998e-1,
    8.64580826352392193095e-2,
    4.12656523824222607191e-3,
    1.01259085116509135510e-4,
    1.17166733214413521882e-6,
    4.91834570062930015649e-9,
];

/// uf = 1 + z²·N(z²)/D(z²) for Ai'/Bi'.
#[rustfmt::skip]
const APF_N: [f64; 9] = [
    1.85365624022535566142e-1,
    8.86712188052584095637e-1,
    9.87391981747398547272e-1,
    4.01241082318003734092e-1,
    7.10304926289631174579e-2,
    5.90618657995661810071e-3,
    2.33051409401776799569e-4,
    4.08718778289035454598e-6,
    2.48379932900442457853e-8,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const APF_D: [f64; 9] = [
    1.47345854687502542552e1,
    3.75423933435489594466e1,
    3.14657751203046424330e1,
    1.09969125207298778536e1,
    1.78885054766999417817e0,
    1.41733275753662636873e-1,
    5.44066067017226003627e-3,
    9.39421290654511171663e-5,
    5.65978713036027009243e-7,
];

/// ug = z·N(z²)/D(z²) for Ai'/Bi'.
#[rustfmt::skip]
const APG_N: [f64; 11] = [
    -3.55615429033082288335e-2,
    -6.37311518129435504426e-1,
    -1.70856738884312371053e0,
    -1.50221872117316635393e0,
    -5.63606665822102676611e-1,
    -1.02101031120216891789e-1,
    -9.48396695961445269093e-3,
    -4.60325307486780994357e-4,
    -1.14300836484517375919e-5,
    -1.33415518685547420648e-7,
    -5.63803833958893494476e-10,
];
/// Monic denominator, leading 1 implicit.
#[rustfmt::skip]
const APG_D: [f64; 10] = [
    9.85865801696130355144e0,
    2.16401867356585941885e1,
    1.73130776389749389525e1,
    6.17872175280828766327e0,
    1.08848694396321495475e0,
    9.95005543440888479402e-2,
    4.78468199683886610842e-3,
    1.18159633322838625562e-4,
    1.37480673554219441465e-6,
    5.79912514929147598821e-9,
];

// ─── Evaluator ──────────────────────────────────────────────────────────────

/// Compute Ai(x), Ai'(x), Bi(x), Bi'(x) with the evaluation condition.
///
/// Regimes, in precedence order:
/// 1. x > max_airy: Bi overflows; returns the documented sentinels with
///    [`Condition::Overflow`].
/// 2. x < −2.09: oscillatory asymptotic expansion.
/// 3. x ≥ 2.09: exponential asymptotic expansion for Ai/Ai'; for ζ > 16
///    also for Bi/Bi', otherwise Bi/Bi' fall through to the series.
/// 4. |x| ≤ 2.09: power series.
pub(crate) fn airy_raw<T: SpecFloat>(x: T) -> AiryResult<T> {
    let zero = T::zero();

    if x > T::max_airy() {
        // Bi would exceed representable range; Ai has underflowed to zero.
        return AiryResult {
            values: Airy {
                ai: zero,
                aip: zero,
                bi: T::MACH_HUGE,
                bip: T::MACH_HUGE,
            },
            condition: Condition::Overflow,
        };
    }

    if x < T::from_f64(-SERIES_CUTOFF) {
        return AiryResult {
            values: airy_oscillatory(x),
            condition: Condition::Normal,
        };
    }

    let values = if x >= T::from_f64(SERIES_CUTOFF) {
        let (ai, aip, bi_pair) = airy_exponential(x);
        match bi_pair {
            Some((bi, bip)) => Airy { ai, aip, bi, bip },
            // ζ ≤ 16: the Bi asymptotic series is not yet accurate, so the
            // growing pair still comes from the power series. Ai and Ai'
            // are already final.
            None => {
                let (_, bi) = series_values(x);
                let (_, bip) = series_derivatives(x);
                Airy { ai, aip, bi, bip }
            }
        }
    } else {
        let (ai, bi) = series_values(x);
        let (aip, bip) = series_derivatives(x);
        Airy { ai, aip, bi, bip }
    };

    AiryResult {
        values,
        condition: Condition::Normal,
    }
}

/// Oscillatory asymptotics for x < −2.09.
///
/// ζ = −(2/3)x√(−x), z = 1/ζ. The value pair and the derivative pair use
/// independent rational fits; sharing one pair would break the accuracy
/// bound.
fn airy_oscillatory<T: SpecFloat>(x: T) -> Airy<T> {
    let one = T::one();
    let two = T::from_f64(2.0);
    let three = T::from_f64(3.0);
    let sqpii = T::from_f64(SQPII);
    let quarter_pi = T::from_f64(core::f64::consts::FRAC_PI_4);

    let t = (-x).sqrt();
    let zeta = -two * x * t / three;
    let t = t.sqrt();

    let z = one / zeta;
    let zz = z * z;
    let theta = zeta + quarter_pi;
    let f = theta.sin();
    let g = theta.cos();

    let uf = one + zz * polevl(zz, &AF_N) / p1evl(zz, &AF_D);
    let ug = z * polevl(zz, &AG_N) / p1evl(zz, &AG_D);
    let k = sqpii / t;
    let ai = k * (f * uf - g * ug);
    let bi = k * (g * uf + f * ug);

    let uf = one + zz * polevl(zz, &APF_N) / p1evl(zz, &APF_D);
    let ug = z * polevl(zz, &APG_N) / p1evl(zz, &APG_D);
    let k = sqpii * t;
    let aip = -k * (g * uf + f * ug);
    let bip = k * (f * uf - g * ug);

    Airy { ai, aip, bi, bip }
}

/// Exponential asymptotics for x ≥ 2.09.
///
/// Returns (Ai, Ai', Bi-pair): the Bi pair is `Some` only when ζ > 16,
/// where its asymptotic series meets the accuracy bound.
fn airy_exponential<T: SpecFloat>(x: T) -> (T, T, Option<(T, T)>) {
    let one = T::one();
    let two = T::from_f64(2.0);
    let three = T::from_f64(3.0);
    let sqpii = T::from_f64(SQPII);

    let t = x.sqrt();
    let zeta = two * x * t / three;
    let g = zeta.exp();
    let t = t.sqrt();
    let z = one / zeta;

    let k = two * t * g;
    let f = polevl(z, &AI_ASYM_N) / polevl(z, &AI_ASYM_D);
    let ai = sqpii * f / k;

    let k = T::from_f64(-0.5) * sqpii * t / g;
    let f = polevl(z, &AIP_ASYM_N) / polevl(z, &AIP_ASYM_D);
    let aip = f * k;

    if x > T::from_f64(BI_ASYM_CUTOFF) {
        let f = z * polevl(z, &BI_ASYM_N) / p1evl(z, &BI_ASYM_D);
        let k = sqpii * g;
        let bi = k * (one + f) / t;
        let f = z * polevl(z, &BIP_ASYM_N) / p1evl(z, &BIP_ASYM_D);
        let bip = k * t * (one + f);
        return (ai, aip, Some((bi, bip)));
    }
    (ai, aip, None)
}

/// Power series for the value pair; returns (Ai(x), Bi(x)).
///
/// Sums the two fundamental solutions f, g of y″ = xy, with z = x³
/// driving the term recurrence, until |term/sum| < machine epsilon.
fn series_values<T: SpecFloat>(x: T) -> (T, T) {
    let one = T::one();

    let mut f = one;
    let mut g = x;
    let mut t = one;
    let mut uf = one;
    let mut ug = x;
    let mut k = one;
    let z = x * x * x;

    while t > T::MACH_EPSILON {
        uf = uf * z;
        k = k + one;
        uf = uf / k;
        ug = ug * z;
        k = k + one;
        ug = ug / k;
        uf = uf / k;
        f = f + uf;
        k = k + one;
        ug = ug / k;
        g = g + ug;
        t = (uf / f).abs();
    }

    let uf = T::from_f64(C1) * f;
    let ug = T::from_f64(C2) * g;
    (uf - ug, T::from_f64(SQRT3) * (uf + ug))
}

/// Power series for the derivative pair; returns (Ai'(x), Bi'(x)).
fn series_derivatives<T: SpecFloat>(x: T) -> (T, T) {
    let one = T::one();
    let z = x * x * x;

    let mut k = T::from_f64(4.0);
    let mut uf = x * x / T::from_f64(2.0);
    let mut ug = z / T::from_f64(3.0);
    let mut f = uf;
    let mut g = one + ug;
    uf = uf / T::from_f64(3.0);
    let mut t = one;

    while t > T::MACH_EPSILON {
        uf = uf * z;
        ug = ug / k;
        k = k + one;
        ug = ug * z;
        uf = uf / k;
        f = f + uf;
        k = k + one;
        ug = ug / k;
        uf = uf / k;
        g = g + ug;
        k = k + one;
        t = (ug / g).abs();
    }

    let uf = T::from_f64(C1) * f;
    let ug = T::from_f64(C2) * g;
    (uf - ug, T::from_f64(SQRT3) * (uf + ug))
}

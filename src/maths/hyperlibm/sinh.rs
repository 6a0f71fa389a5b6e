//! sinh(x) implementation.
//!
//! Works on |x| and restores the sign through `h = +-0.5`, so the function is
//! odd bit for bit. Below 22 the expm1 forms avoid the cancellation of
//! `(e^x - e^-x)/2`; past ln(DBL_MAX) the exponential is split in two halves
//! so the product overflows only when sinh itself does.

use super::bounds::{
    ABS_MASK, HI_2P_M28, HI_22, HI_INF, HI_LN_MAX, HI_ONE, SIGN_BIT, below_overflow, classify,
};
use super::{exp, expm1, fabs, hi_word, lo_word};

const ONE: f64 = 1.0;
const SHUGE: f64 = 1.0e307;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Regime {
    /// |x| < 2^-28: the result rounds to x.
    Tiny,
    /// |x| < 1: `h*(2t - t^2/(t+1))`, `t = expm1(|x|)`.
    BelowOne,
    /// |x| < 22: `h*(t + t/(t+1))`.
    BelowTwentyTwo,
    /// |x| < ln(DBL_MAX): `h*exp(|x|)`.
    Exponential,
    /// exp(|x|) overflows but sinh(x) does not.
    Split,
    Overflow,
    NonFinite,
}

const TABLE: [(u32, Regime); 4] = [
    (HI_2P_M28, Regime::Tiny),
    (HI_ONE, Regime::BelowOne),
    (HI_22, Regime::BelowTwentyTwo),
    (HI_LN_MAX, Regime::Exponential),
];

#[inline(always)]
pub(crate) fn regime(x: f64) -> Regime {
    let ix = hi_word(x) & ABS_MASK;
    if ix >= HI_INF {
        return Regime::NonFinite;
    }
    match classify(ix, &TABLE, Regime::Split) {
        Regime::Split if !below_overflow(ix, lo_word(x)) => Regime::Overflow,
        r => r,
    }
}

#[inline]
pub fn sinh(x: f64) -> f64 {
    let h = if (hi_word(x) & SIGN_BIT) != 0 { -0.5 } else { 0.5 };
    let ax = fabs(x);
    match regime(x) {
        Regime::NonFinite => x + x,
        Regime::Tiny if SHUGE + x > ONE => x,
        Regime::Tiny | Regime::BelowOne => {
            let t = expm1(ax);
            h * (2.0 * t - t * t / (t + ONE))
        }
        Regime::BelowTwentyTwo => {
            let t = expm1(ax);
            h * (t + t / (t + ONE))
        }
        Regime::Exponential => h * exp(ax),
        Regime::Split => {
            let w = exp(0.5 * ax);
            let t = h * w;
            t * w
        }
        Regime::Overflow => x * SHUGE,
    }
}

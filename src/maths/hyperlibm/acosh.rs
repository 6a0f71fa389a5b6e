//! acosh(x) implementation.
//!
//! Defined for x >= 1. The high word is read signed so every negative input,
//! including -0 and -inf, lands in the domain error branch.

use super::bounds::{HI_2P28, HI_INF, HI_ONE, HI_TWO, classify};
use super::{hi_word, ln, ln_1p, lo_word, sqrt};

const ONE: f64 = 1.0;
const LN2: f64 = core::f64::consts::LN_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Regime {
    /// x < 1 or x is negative: NaN.
    Domain,
    /// x == 1 exactly: +0.
    One,
    /// 1 < x <= 2: `ln_1p(t + sqrt(2t + t^2))`, `t = x - 1`.
    UpToTwo,
    /// 2 < x < 2^28: `ln(2x - 1/(x + sqrt(x^2 - 1)))`.
    Medium,
    /// x >= 2^28: `ln(x) + ln2`.
    Huge,
    NonFinite,
}

const TABLE: [(u32, Regime); 3] = [
    (HI_TWO + 1, Regime::UpToTwo),
    (HI_2P28, Regime::Medium),
    (HI_INF, Regime::Huge),
];

#[inline(always)]
pub(crate) fn regime(x: f64) -> Regime {
    let hx = hi_word(x);
    if (hx as i32) < HI_ONE as i32 {
        return Regime::Domain;
    }
    if (hx - HI_ONE) | lo_word(x) == 0 {
        return Regime::One;
    }
    classify(hx, &TABLE, Regime::NonFinite)
}

#[inline]
pub fn acosh(x: f64) -> f64 {
    match regime(x) {
        Regime::Domain => (x - x) / (x - x),
        Regime::One => 0.0,
        Regime::UpToTwo => {
            let t = x - ONE;
            ln_1p(t + sqrt(2.0 * t + t * t))
        }
        Regime::Medium => {
            let t = x * x;
            ln(2.0 * x - ONE / (x + sqrt(t - ONE)))
        }
        Regime::Huge => ln(x) + LN2,
        // inf or NaN
        Regime::NonFinite => x + x,
    }
}

//! tanh(x) implementation.
//!
//! Computes an unsigned `z` from |x| through expm1 and applies the sign of x
//! at the end. Below 2^-55, `x*(1+x)` is already signed and rounds to x with
//! the inexact flag raised. At and above 22 the result is `1 - tiny`.

use super::bounds::{ABS_MASK, HI_2P_M55, HI_22, HI_INF, HI_ONE, SIGN_BIT, classify};
use super::{expm1, fabs, hi_word};

const ONE: f64 = 1.0;
const TWO: f64 = 2.0;
const TINY: f64 = 1.0e-300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Regime {
    Tiny,
    /// |x| < 1: `-t/(t+2)`, `t = expm1(-2|x|)`.
    BelowOne,
    /// |x| < 22: `1 - 2/(t+2)`, `t = expm1(2|x|)`.
    BelowTwentyTwo,
    Saturated,
    NonFinite,
}

const TABLE: [(u32, Regime); 4] = [
    (HI_2P_M55, Regime::Tiny),
    (HI_ONE, Regime::BelowOne),
    (HI_22, Regime::BelowTwentyTwo),
    (HI_INF, Regime::Saturated),
];

#[inline(always)]
pub(crate) fn regime(x: f64) -> Regime {
    classify(hi_word(x) & ABS_MASK, &TABLE, Regime::NonFinite)
}

#[inline]
pub fn tanh(x: f64) -> f64 {
    let negative = (hi_word(x) & SIGN_BIT) != 0;
    let ax = fabs(x);
    let z = match regime(x) {
        // tanh(+-inf) = +-1, tanh(NaN) = NaN
        Regime::NonFinite => return if negative { ONE / x - ONE } else { ONE / x + ONE },
        Regime::Tiny => return x * (ONE + x),
        Regime::BelowOne => {
            let t = expm1(-TWO * ax);
            -t / (t + TWO)
        }
        Regime::BelowTwentyTwo => {
            let t = expm1(TWO * ax);
            ONE - TWO / (t + TWO)
        }
        Regime::Saturated => ONE - TINY,
    };
    if negative { -z } else { z }
}

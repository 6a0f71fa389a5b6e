//! atanh(x) implementation.
//!
//! Domain is |x| <= 1. The low word is folded into the magnitude test so
//! values just above 1 in their low bits are rejected too.

use super::bounds::{ABS_MASK, HI_2P_M28, HI_HALF, HI_ONE, SIGN_BIT, classify};
use super::{fabs, hi_word, ln_1p, lo_word};

const ONE: f64 = 1.0;
const HUGE: f64 = 1.0e300;
const ZERO: f64 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Regime {
    /// |x| > 1 or NaN.
    Domain,
    /// |x| == 1: +-inf.
    Pole,
    Tiny,
    /// |x| < 0.5: `0.5*ln_1p(2|x| + 2|x|^2/(1-|x|))`.
    BelowHalf,
    /// |x| < 1: `0.5*ln_1p(2|x|/(1-|x|))`.
    BelowOne,
}

const TABLE: [(u32, Regime); 2] = [(HI_2P_M28, Regime::Tiny), (HI_HALF, Regime::BelowHalf)];

#[inline(always)]
pub(crate) fn regime(x: f64) -> Regime {
    let ix = hi_word(x) & ABS_MASK;
    let lx = lo_word(x);
    if (ix | ((lx | lx.wrapping_neg()) >> 31)) > HI_ONE {
        return Regime::Domain;
    }
    if ix == HI_ONE {
        return Regime::Pole;
    }
    classify(ix, &TABLE, Regime::BelowOne)
}

#[inline]
pub fn atanh(x: f64) -> f64 {
    let ax = fabs(x);
    let t = match regime(x) {
        Regime::Domain => return (x - x) / (x - x),
        Regime::Pole => return x / ZERO,
        Regime::Tiny if HUGE + x > ZERO => return x,
        Regime::Tiny | Regime::BelowHalf => {
            let t = ax + ax;
            0.5 * ln_1p(t + t * ax / (ONE - ax))
        }
        Regime::BelowOne => 0.5 * ln_1p((ax + ax) / (ONE - ax)),
    };
    if (hi_word(x) & SIGN_BIT) != 0 { -t } else { t }
}

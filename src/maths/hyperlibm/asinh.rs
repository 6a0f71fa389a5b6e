//! asinh(x) implementation.
//!
//! |x| <= 2 goes through `ln_1p(|x| + x^2/(1+sqrt(1+x^2)))`, which stays
//! accurate near zero; up to 2^28 uses `ln(2|x| + 1/(sqrt(x^2+1)+|x|))`; above
//! that `ln(|x|) + ln2`.

use super::bounds::{ABS_MASK, HI_2P_M28, HI_2P28, HI_INF, HI_TWO, SIGN_BIT, classify};
use super::{fabs, hi_word, ln, ln_1p, sqrt};

const ONE: f64 = 1.0;
const HUGE: f64 = 1.0e300;
const LN2: f64 = core::f64::consts::LN_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Regime {
    Tiny,
    UpToTwo,
    UpToTwoPow28,
    Huge,
    NonFinite,
}

// High words equal to 2.0's and 2^28's still belong to the lower band.
const TABLE: [(u32, Regime); 4] = [
    (HI_2P_M28, Regime::Tiny),
    (HI_TWO + 1, Regime::UpToTwo),
    (HI_2P28 + 1, Regime::UpToTwoPow28),
    (HI_INF, Regime::Huge),
];

#[inline(always)]
pub(crate) fn regime(x: f64) -> Regime {
    classify(hi_word(x) & ABS_MASK, &TABLE, Regime::NonFinite)
}

#[inline]
pub fn asinh(x: f64) -> f64 {
    let ax = fabs(x);
    let w = match regime(x) {
        Regime::NonFinite => return x + x,
        Regime::Tiny if HUGE + x > ONE => return x,
        Regime::Tiny | Regime::UpToTwo => {
            let t = x * x;
            ln_1p(ax + t / (ONE + sqrt(ONE + t)))
        }
        Regime::UpToTwoPow28 => ln(2.0 * ax + ONE / (sqrt(x * x + ONE) + ax)),
        Regime::Huge => ln(ax) + LN2,
    };
    if (hi_word(x) & SIGN_BIT) != 0 { -w } else { w }
}

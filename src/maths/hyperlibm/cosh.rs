//! cosh(x) implementation.
//!
//! Even function evaluated on |x|. Near zero `1 + t^2/(2(1+t))` with
//! `t = expm1(|x|)` keeps the correction term exact; past ln(DBL_MAX) the
//! exponential is split like sinh.

use super::bounds::{
    ABS_MASK, HI_2P_M55, HI_22, HI_HALF_LN2, HI_INF, HI_LN_MAX, below_overflow, classify,
};
use super::{exp, expm1, fabs, hi_word, lo_word};

const ONE: f64 = 1.0;
const HALF: f64 = 0.5;
const HUGE: f64 = 1.0e300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Regime {
    /// |x| < 2^-55: `1 + expm1(|x|)`.
    Negligible,
    /// |x| < 0.5*ln2: `1 + t^2/(2w)`, `w = 1 + expm1(|x|)`.
    NearZero,
    /// |x| < 22: `0.5*e + 0.5/e`.
    Moderate,
    /// |x| < ln(DBL_MAX): `0.5*exp(|x|)`.
    Exponential,
    Split,
    Overflow,
    NonFinite,
}

const TABLE: [(u32, Regime); 4] = [
    (HI_2P_M55, Regime::Negligible),
    (HI_HALF_LN2, Regime::NearZero),
    (HI_22, Regime::Moderate),
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
pub fn cosh(x: f64) -> f64 {
    let ax = fabs(x);
    match regime(x) {
        Regime::NonFinite => x * x,
        Regime::Negligible => ONE + expm1(ax),
        Regime::NearZero => {
            let t = expm1(ax);
            let w = ONE + t;
            ONE + (t * t) / (w + w)
        }
        Regime::Moderate => {
            let t = exp(ax);
            HALF * t + HALF / t
        }
        Regime::Exponential => HALF * exp(ax),
        Regime::Split => {
            let w = exp(HALF * ax);
            let t = HALF * w;
            t * w
        }
        Regime::Overflow => HUGE * HUGE,
    }
}

#[cfg(test)]
mod tests {
    use super::super::bounds::OVERFLOW_BITS;
    use super::*;

    #[test]
    fn regime_table_boundaries() {
        let cases = [
            (0x0000_0000_0000_0000u64, Regime::Negligible),
            (0x3c7f_ffff_ffff_ffff, Regime::Negligible),
            (0x3c80_0000_0000_0000, Regime::NearZero),
            (0x3fd6_2e42_fefa_39ef, Regime::NearZero), // 0.5*ln2
            (0x3fd6_2e42_ffff_ffff, Regime::NearZero),
            (0x3fd6_2e43_0000_0000, Regime::Moderate),
            (0x4035_ffff_ffff_ffff, Regime::Moderate),
            (0x4036_0000_0000_0000, Regime::Exponential),
            (0x4086_2e41_ffff_ffff, Regime::Exponential),
            (0x4086_2e42_0000_0000, Regime::Split),
            (OVERFLOW_BITS, Regime::Split),
            (OVERFLOW_BITS + 1, Regime::Overflow),
            (0x7ff0_0000_0000_0000, Regime::NonFinite),
            (0x7ff0_0000_0000_0001, Regime::NonFinite),
        ];
        for &(bits, expected) in &cases {
            let x = f64::from_bits(bits);
            assert_eq!(regime(x), expected, "{bits:#018x}");
            assert_eq!(regime(-x), expected, "-{bits:#018x}");
        }
    }

    #[test]
    fn overflow_edge_is_exact() {
        let last = f64::from_bits(OVERFLOW_BITS);
        assert!(cosh(last).is_finite());
        assert!(cosh(-last).is_finite());
        assert_eq!(cosh(f64::from_bits(OVERFLOW_BITS + 1)), f64::INFINITY);
        assert_eq!(cosh(-f64::from_bits(OVERFLOW_BITS + 1)), f64::INFINITY);
    }

    #[test]
    fn special_values() {
        assert!(cosh(f64::NAN).is_nan());
        assert_eq!(cosh(f64::INFINITY), f64::INFINITY);
        assert_eq!(cosh(f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(cosh(0.0), 1.0);
        assert_eq!(cosh(-0.0), 1.0);
        assert_eq!(cosh(f64::from_bits(1)), 1.0);
    }

    #[test]
    fn literal_values() {
        assert_eq!(cosh(2.0), 3.762_195_691_083_631_4);
        assert_eq!(cosh(-1000.0), f64::INFINITY);
        assert_eq!(cosh(1000.0), f64::INFINITY);
    }
}

//! ln_1p(x) implementation.
//!
//! fdlibm log1p: for tiny x returns x or a two-term series; otherwise forms
//! `1+x = 2^k * (1+f)` with a correction `c` for the rounding of `1+x`, and
//! evaluates `ln(1+f)` through the same `s = f/(2+f)` polynomial as `ln`.

use super::{hi_word, set_hi_word};

const LN2_HI: f64 = f64::from_bits(0x3fe6_2e42_fee0_0000);
const LN2_LO: f64 = f64::from_bits(0x3dea_39ef_3579_3c76);
const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000);
const LP: [f64; 8] = [
    0.0,
    6.666_666_666_666_735_130e-01,
    3.999_999_999_940_941_908e-01,
    2.857_142_874_366_239_149e-01,
    2.222_219_843_214_978_396e-01,
    1.818_357_216_161_805_012e-01,
    1.531_383_769_920_937_332e-01,
    1.479_819_860_511_658_591e-01,
];

/// sqrt(2) - 1
const HI_SQRT2_M1: i32 = 0x3fda_827a;
/// 1 - sqrt(2)/2, as a negative high word.
const HI_NEG_1_M_SQRT2_HALF: i32 = 0xbfd2_bec3u32 as i32;
const HI_2P_M29: u32 = 0x3e20_0000;
const HI_2P_M54: u32 = 0x3c90_0000;
/// Above 2^53 the correction term is dropped.
const HI_2P53: i32 = 0x4340_0000;
const HI_INF: u32 = 0x7ff0_0000;

#[inline]
pub fn ln_1p(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ax = (hx & 0x7fff_ffff) as u32;

    let mut k = 1i32;
    let mut f = 0.0;
    let mut c = 0.0;
    let mut hu: u32 = 0;
    if hx < HI_SQRT2_M1 {
        // x < 0.41422
        if ax >= 0x3ff0_0000 {
            // x <= -1
            if x == -1.0 {
                return f64::NEG_INFINITY;
            }
            return f64::NAN;
        }
        if ax < HI_2P_M29 {
            if TWO54 + x > 0.0 && ax < HI_2P_M54 {
                return x;
            }
            return x - x * x * 0.5;
        }
        if hx > 0 || hx <= HI_NEG_1_M_SQRT2_HALF {
            // -0.2929 < x < 0.41422
            k = 0;
            f = x;
            hu = 1;
        }
    } else if ax >= HI_INF {
        return x + x;
    }

    if k != 0 {
        let u = if hx < HI_2P53 {
            let u = 1.0 + x;
            let e = ((hi_word(u) >> 20) & 0x7ff) as i32 - 1023;
            // correction for the rounding of 1+x
            c = if e > 0 { 1.0 - (u - x) } else { x - (u - 1.0) };
            c /= u;
            u
        } else {
            x
        };
        let hw = hi_word(u);
        k = ((hw >> 20) & 0x7ff) as i32 - 1023;
        hu = hw & 0x000f_ffff;
        let u = if hu < 0x6a09e {
            set_hi_word(u, hu | 0x3ff0_0000)
        } else {
            k += 1;
            let u = set_hi_word(u, hu | 0x3fe0_0000);
            hu = (0x0010_0000 - hu) >> 2;
            u
        };
        f = u - 1.0;
    }

    let hfsq = 0.5 * f * f;
    if hu == 0 {
        // |f| < 2^-20
        let dk = k as f64;
        if f == 0.0 {
            if k == 0 {
                return 0.0;
            }
            c += dk * LN2_LO;
            return dk * LN2_HI + c;
        }
        let r = hfsq * (1.0 - 0.666_666_666_666_666_66 * f);
        if k == 0 {
            return f - r;
        }
        return dk * LN2_HI - ((r - (dk * LN2_LO + c)) - f);
    }

    let s = f / (2.0 + f);
    let z = s * s;
    let r1 = z * LP[1];
    let z2 = z * z;
    let r2 = LP[2] + z * LP[3];
    let z4 = z2 * z2;
    let r3 = LP[4] + z * LP[5];
    let z6 = z4 * z2;
    let r4 = LP[6] + z * LP[7];
    let r = r1 + z2 * r2 + z4 * r3 + z6 * r4;
    if k == 0 {
        return f - (hfsq - s * (hfsq + r));
    }
    let dk = k as f64;
    dk * LN2_HI - ((hfsq - (s * (hfsq + r) + (dk * LN2_LO + c))) - f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_values() {
        assert_eq!(ln_1p(-1.0), f64::NEG_INFINITY);
        assert!(ln_1p(-1.5).is_nan());
        assert!(ln_1p(f64::NEG_INFINITY).is_nan());
        assert!(ln_1p(f64::NAN).is_nan());
        assert_eq!(ln_1p(f64::INFINITY), f64::INFINITY);
        assert_eq!(ln_1p(0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(ln_1p(-0.0).to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn tiny_is_identity() {
        for &x in &[1e-17, -1e-17, f64::from_bits(1), -f64::MIN_POSITIVE] {
            assert_eq!(ln_1p(x), x, "ln_1p({x})");
        }
    }

    #[test]
    fn matches_std() {
        let values = [
            1e-9, -1e-9, 1e-5, 0.1, -0.1, 0.25, -0.25, 0.4, -0.29, -0.3, 0.5, 0.9, -0.9, 1.0,
            3.0, 1e6, 1e17, 1e300,
        ];
        for &x in &values {
            let actual = ln_1p(x);
            let expected = x.ln_1p();
            let diff = (actual - expected).abs();
            assert!(
                diff <= expected.abs() * 4.5e-16,
                "ln_1p({x}) failed: got {actual}, expected {expected}"
            );
        }
    }
}

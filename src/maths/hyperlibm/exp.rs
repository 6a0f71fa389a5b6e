//! exp(x) implementation.
//!
//! fdlibm reduction `x = k*ln2 + r` with `|r| <= 0.5*ln2`, a degree-5 remez
//! polynomial for `r*(exp(r)+1)/(exp(r)-1)`, and an exponent add of `k` into
//! the high word. Error is below 1 ULP.

use super::bounds::{ABS_MASK, HI_2P_M28, HI_INF, HI_LN_MAX};
use super::{hi_word, lo_word, set_hi_word};

const ONE: f64 = 1.0;
const HALF: [f64; 2] = [0.5, -0.5];
const HUGE: f64 = 1.0e300;
const TWOM1000: f64 = f64::from_bits(0x0170_0000_0000_0000); // 2^-1000
const O_THRESHOLD: f64 = f64::from_bits(0x4086_2e42_fefa_39ef);
const U_THRESHOLD: f64 = f64::from_bits(0xc087_4910_d52d_3051);
const LN2_HI: [f64; 2] = [
    f64::from_bits(0x3fe6_2e42_fee0_0000),
    f64::from_bits(0xbfe6_2e42_fee0_0000),
];
const LN2_LO: [f64; 2] = [
    f64::from_bits(0x3dea_39ef_3579_3c76),
    f64::from_bits(0xbdea_39ef_3579_3c76),
];
const INVLN2: f64 = f64::from_bits(0x3ff7_1547_652b_82fe);
const P1: f64 = f64::from_bits(0x3fc5_5555_5555_553e);
const P2: f64 = f64::from_bits(0xbf66_c16c_16be_bd93);
const P3: f64 = f64::from_bits(0x3f11_566a_af25_de2c);
const P4: f64 = f64::from_bits(0xbebb_bd41_c5d2_6bf1);
const P5: f64 = f64::from_bits(0x3e66_3769_72be_a4d0);

/// Upper edge of the single-step reduction band, 1.5 * ln2.
const HI_THREE_HALVES_LN2: u32 = 0x3ff0_a2b2;
/// Last high word at or below 0.5 * ln2.
const HI_HALF_LN2_FLOOR: u32 = 0x3fd6_2e42;

#[inline]
pub fn exp(x: f64) -> f64 {
    let hx = hi_word(x);
    let xsb = (hx >> 31) as usize;
    let ix = hx & ABS_MASK;

    if ix >= HI_LN_MAX {
        if ix >= HI_INF {
            if ((ix & 0x000f_ffff) | lo_word(x)) != 0 {
                return x + x;
            }
            return if xsb == 0 { x } else { 0.0 };
        }
        if x > O_THRESHOLD {
            return HUGE * HUGE;
        }
        if x < U_THRESHOLD {
            return TWOM1000 * TWOM1000;
        }
    }

    let mut r = x;
    let mut k = 0i32;
    let mut hi = 0.0;
    let mut lo = 0.0;
    if ix > HI_HALF_LN2_FLOOR {
        if ix < HI_THREE_HALVES_LN2 {
            hi = x - LN2_HI[xsb];
            lo = LN2_LO[xsb];
            k = 1 - 2 * xsb as i32;
        } else {
            k = (INVLN2 * x + HALF[xsb]) as i32;
            let t = k as f64;
            // t*LN2_HI is exact for |k| < 2^11.
            hi = x - t * LN2_HI[0];
            lo = t * LN2_LO[0];
        }
        r = hi - lo;
    } else if ix < HI_2P_M28 && HUGE + x > ONE {
        return ONE + x;
    }

    let t = r * r;
    let c = r - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    if k == 0 {
        return ONE - ((r * c) / (c - 2.0) - r);
    }
    let y = ONE - ((lo - (r * c) / (2.0 - c)) - hi);
    if k >= -1021 {
        set_hi_word(y, hi_word(y).wrapping_add((k as u32) << 20))
    } else {
        let y = set_hi_word(y, hi_word(y).wrapping_add(((k + 1000) as u32) << 20));
        y * TWOM1000
    }
}

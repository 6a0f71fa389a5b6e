//! expm1(x) implementation.
//!
//! fdlibm: reduce `x = k*ln2 + r` with a correction term `c`, approximate
//! `r*(exp(r)+1)/(exp(r)-1)` with a degree-5 rational fit in `r^2/2`, then
//! rebuild `2^k * (exp(r) - 1) + (2^k - 1)` with the subtraction ordered by the
//! size of `k`. Arguments below 2^-54 return themselves, so signed zero and
//! subnormals pass through untouched.

use super::bounds::{ABS_MASK, HI_INF, HI_LN_MAX};
use super::{hi_word, lo_word, set_hi_word};

const ONE: f64 = 1.0;
const HUGE: f64 = 1.0e300;
const TINY: f64 = 1.0e-300;
const O_THRESHOLD: f64 = f64::from_bits(0x4086_2e42_fefa_39ef);
const LN2_HI: f64 = f64::from_bits(0x3fe6_2e42_fee0_0000);
const LN2_LO: f64 = f64::from_bits(0x3dea_39ef_3579_3c76);
const INVLN2: f64 = f64::from_bits(0x3ff7_1547_652b_82fe);
const Q: [f64; 6] = [
    1.0,
    f64::from_bits(0xbfa1_1111_1111_10f4),
    f64::from_bits(0x3f5a_01a0_19fe_5585),
    f64::from_bits(0xbf14_ce19_9eaa_dbb7),
    f64::from_bits(0x3ed0_cfca_86e6_5239),
    f64::from_bits(0xbe8a_fdb7_6e09_c32d),
];

/// 56 * ln2: below -this the result is -1 to working precision.
const HI_56_LN2: u32 = 0x4043_687a;
const HI_HALF_LN2_FLOOR: u32 = 0x3fd6_2e42;
const HI_THREE_HALVES_LN2: u32 = 0x3ff0_a2b2;
const HI_2P_M54: u32 = 0x3c90_0000;

#[inline]
pub fn expm1(x: f64) -> f64 {
    let hx = hi_word(x);
    let negative = (hx >> 31) != 0;
    let ix = hx & ABS_MASK;

    if ix >= HI_56_LN2 {
        if ix >= HI_LN_MAX {
            if ix >= HI_INF {
                if ((ix & 0x000f_ffff) | lo_word(x)) != 0 {
                    return x + x;
                }
                return if negative { -1.0 } else { x };
            }
            if x > O_THRESHOLD {
                return HUGE * HUGE;
            }
        }
        if negative {
            return TINY - ONE;
        }
    }

    let mut k = 0i32;
    let mut c = 0.0;
    let mut r = x;
    if ix > HI_HALF_LN2_FLOOR {
        let (hi, lo) = if ix < HI_THREE_HALVES_LN2 {
            if negative {
                k = -1;
                (x + LN2_HI, -LN2_LO)
            } else {
                k = 1;
                (x - LN2_HI, LN2_LO)
            }
        } else {
            k = (INVLN2 * x + if negative { -0.5 } else { 0.5 }) as i32;
            let t = k as f64;
            (x - t * LN2_HI, t * LN2_LO)
        };
        r = hi - lo;
        c = (hi - r) - lo;
    } else if ix < HI_2P_M54 {
        let t = HUGE + x;
        return x - (t - (HUGE + x));
    }

    let hfx = 0.5 * r;
    let hxs = r * hfx;
    // Evaluation order matches fdlibm so results agree bit for bit.
    let r1 = ONE + hxs * Q[1];
    let h2 = hxs * hxs;
    let r2 = Q[2] + hxs * Q[3];
    let h4 = h2 * h2;
    let r3 = Q[4] + hxs * Q[5];
    let r1 = (r1 + h2 * r2) + h4 * r3;
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - r * t));

    if k == 0 {
        return r - (r * e - hxs);
    }

    e = (r * (e - c) - c) - hxs;
    if k == -1 {
        return 0.5 * (r - e) - 0.5;
    }
    if k == 1 {
        if r < -0.25 {
            return -2.0 * (e - (r + 0.5));
        }
        return ONE + 2.0 * (r - e);
    }

    let exp_bits = (k as u32) << 20;
    if k <= -2 || k > 56 {
        let y = ONE - (e - r);
        let y = set_hi_word(y, hi_word(y).wrapping_add(exp_bits));
        return y - ONE;
    }
    if k < 20 {
        // t = 1 - 2^-k
        let t = set_hi_word(ONE, 0x3ff0_0000 - (0x0020_0000 >> k));
        let y = t - (e - r);
        return set_hi_word(y, hi_word(y).wrapping_add(exp_bits));
    }
    // t = 2^-k
    let t = set_hi_word(ONE, (0x3ffu32.wrapping_sub(k as u32)) << 20);
    let y = (r - (e + t)) + ONE;
    set_hi_word(y, hi_word(y).wrapping_add(exp_bits))
}

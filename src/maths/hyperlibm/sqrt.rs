//! sqrt(x) implementation.
//!
//! SSE2 `sqrtsd` on x86_64; elsewhere the fdlibm restoring square root, which
//! produces the result one bit at a time across both words and rounds to
//! nearest from the final remainder. Both paths are correctly rounded.

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn sqrt_sse(x: f64) -> f64 {
    use core::arch::x86_64::{_mm_cvtsd_f64, _mm_set_sd, _mm_sqrt_sd};
    _mm_cvtsd_f64(_mm_sqrt_sd(_mm_set_sd(0.0), _mm_set_sd(x)))
}

const SIGN: u32 = 0x8000_0000;

#[cfg_attr(target_arch = "x86_64", allow(dead_code))]
pub(crate) fn sqrt_bitwise(x: f64) -> f64 {
    let mut ix0 = (x.to_bits() >> 32) as i32;
    let mut ix1 = x.to_bits() as u32;

    if (ix0 & 0x7ff0_0000) == 0x7ff0_0000 {
        // sqrt(NaN) = NaN, sqrt(+inf) = +inf, sqrt(-inf) = NaN
        return x * x + x;
    }
    if ix0 <= 0 {
        if ((ix0 & !(SIGN as i32)) as u32 | ix1) == 0 {
            return x;
        }
        if ix0 < 0 {
            return (x - x) / (x - x);
        }
    }

    let mut m = ix0 >> 20;
    if m == 0 {
        // subnormal
        while ix0 == 0 {
            m -= 21;
            ix0 |= (ix1 >> 11) as i32;
            ix1 <<= 21;
        }
        let mut i = 0;
        while (ix0 & 0x0010_0000) == 0 {
            ix0 <<= 1;
            i += 1;
        }
        m -= i - 1;
        if i > 0 {
            ix0 |= (ix1 >> (32 - i)) as i32;
            ix1 <<= i;
        }
    }
    m -= 1023;
    ix0 = (ix0 & 0x000f_ffff) | 0x0010_0000;
    if (m & 1) != 0 {
        // odd exponent: double x so the halved exponent is exact
        ix0 += ix0 + (ix1 >> 31) as i32;
        ix1 <<= 1;
    }
    m >>= 1;

    ix0 += ix0 + (ix1 >> 31) as i32;
    ix1 <<= 1;
    let mut q = 0i32;
    let mut q1 = 0u32;
    let mut s0 = 0i32;
    let mut s1 = 0u32;

    let mut r = 0x0020_0000i32;
    while r != 0 {
        let t = s0 + r;
        if t <= ix0 {
            s0 = t + r;
            ix0 -= t;
            q += r;
        }
        ix0 += ix0 + (ix1 >> 31) as i32;
        ix1 <<= 1;
        r >>= 1;
    }

    let mut r = SIGN;
    while r != 0 {
        let t1 = s1.wrapping_add(r);
        let t = s0;
        if t < ix0 || (t == ix0 && t1 <= ix1) {
            s1 = t1.wrapping_add(r);
            if (t1 & SIGN) == SIGN && (s1 & SIGN) == 0 {
                s0 += 1;
            }
            ix0 -= t;
            if ix1 < t1 {
                ix0 -= 1;
            }
            ix1 = ix1.wrapping_sub(t1);
            q1 += r;
        }
        ix0 += ix0 + (ix1 >> 31) as i32;
        ix1 <<= 1;
        r >>= 1;
    }

    // round to nearest, ties to even
    if (ix0 as u32 | ix1) != 0 {
        if q1 == 0xffff_ffff {
            q1 = 0;
            q += 1;
        } else {
            q1 += q1 & 1;
        }
    }
    let mut hi = (q >> 1) + 0x3fe0_0000;
    let mut lo = q1 >> 1;
    if (q & 1) == 1 {
        lo |= SIGN;
    }
    hi += m << 20;
    f64::from_bits(((hi as u32 as u64) << 32) | lo as u64)
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(target_arch = "x86_64")]
    {
        // SAFETY: SSE2 is part of the x86_64 baseline.
        unsafe { sqrt_sse(x) }
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        sqrt_bitwise(x)
    }
}

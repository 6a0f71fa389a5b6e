//! cbrtf(x) implementation.
//!
//! A cube root estimate good to about 5 bits comes from dividing the biased
//! exponent field by three; two Halley steps evaluated in f64 bring it to full
//! single precision.

const B1: u32 = 709_958_130; // (127 - 127.0/3 - 0.03306235651) * 2^23
const B2: u32 = 642_849_266; // (127 - 127.0/3 - 24/3 - 0.03306235651) * 2^23

const SIGN: u32 = 0x8000_0000;
const ABS: u32 = 0x7fff_ffff;
const INF: u32 = 0x7f80_0000;
const MIN_NORMAL: u32 = 0x0080_0000;
const TWO24: f32 = 16_777_216.0;

#[inline]
pub fn cbrtf(x: f32) -> f32 {
    let mut bits = x.to_bits();
    let mut hx = bits & ABS;

    if hx >= INF {
        return x + x;
    }
    if hx < MIN_NORMAL {
        if hx == 0 {
            return x;
        }
        bits = (x * TWO24).to_bits();
        hx = (bits & ABS) / 3 + B2;
    } else {
        hx = hx / 3 + B1;
    }

    let xd = x as f64;
    let mut t = f32::from_bits((bits & SIGN) | hx) as f64;
    let mut r = t * t * t;
    t *= (xd + xd + r) / (xd + r + r);
    r = t * t * t;
    t *= (xd + xd + r) / (xd + r + r);
    t as f32
}

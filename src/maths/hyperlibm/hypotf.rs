//! hypotf(x, y) implementation.
//!
//! The sum of squares is formed in f64, where it can neither overflow nor
//! lose bits, after extreme operands are rescaled by 2^+-90.

use super::sqrt;

const ABS: u32 = 0x7fff_ffff;
const INF: u32 = 0xff << 23;
const TWO90: f32 = 1.237_940_039_285_380_3e27;
const TWO_M90: f32 = 8.077_935_669_463_161e-28;

#[inline]
pub fn hypotf(x: f32, y: f32) -> f32 {
    let mut uxi = x.to_bits() & ABS;
    let mut uyi = y.to_bits() & ABS;
    if uxi < uyi {
        core::mem::swap(&mut uxi, &mut uyi);
    }

    let mut x = f32::from_bits(uxi);
    let mut y = f32::from_bits(uyi);
    if uyi == INF {
        return y;
    }
    if uxi >= INF || uyi == 0 || uxi - uyi >= 25 << 23 {
        return x + y;
    }

    let mut z = 1.0f32;
    if uxi >= (0x7f + 60) << 23 {
        z = TWO90;
        x *= TWO_M90;
        y *= TWO_M90;
    } else if uyi < (0x7f - 60) << 23 {
        z = TWO_M90;
        x *= TWO90;
        y *= TWO90;
    }
    let (xd, yd) = (x as f64, y as f64);
    z * (sqrt(xd * xd + yd * yd) as f32)
}

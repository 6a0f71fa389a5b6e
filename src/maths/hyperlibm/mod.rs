//! Hyperbolic functions, their inverses and the primitives they stand on.
//!
//! Algorithms follow fdlibm. Each hyperbolic routine reads the high word of
//! its argument, selects a row of an ordered regime table (see `bounds`) and
//! evaluates the formula owned by that row. `exp`, `ln`, `expm1`, `ln_1p` and
//! `sqrt` are implemented here as well so the crate needs no external libm.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod acosh;
mod asinh;
mod atanh;
mod bounds;
mod cbrtf;
mod cosh;
mod exp;
mod expm1;
mod hypotf;
mod log;
mod log1p;
mod sinh;
mod sqrt;
mod tanh;

pub use acosh::acosh;
pub use asinh::asinh;
pub use atanh::atanh;
pub use cbrtf::cbrtf;
pub use cosh::cosh;
pub use exp::exp;
pub use expm1::expm1;
pub use hypotf::hypotf;
pub use log::ln;
pub use log1p::ln_1p;
pub use sinh::sinh;
pub use sqrt::sqrt;
pub use tanh::tanh;

// ========= bit helpers =========

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;

/// Most significant 32 bits of `x`: sign, exponent and top 20 mantissa bits.
#[inline(always)]
pub(crate) fn hi_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

/// Least significant 32 bits of the mantissa.
#[inline(always)]
pub(crate) fn lo_word(x: f64) -> u32 {
    (x.to_bits() & 0xffff_ffffu64) as u32
}

#[inline(always)]
pub(crate) fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | (lo as u64))
}

#[inline(always)]
pub(crate) fn set_hi_word(x: f64, hi: u32) -> f64 {
    with_hi_lo(hi, lo_word(x))
}

#[inline(always)]
pub(crate) fn fabs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN_MASK)
}

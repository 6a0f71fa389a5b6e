//! Magnitude thresholds shared by the hyperbolic family.
//!
//! Thresholds are high words of |x|. A regime table is an ordered list of
//! `(upper, regime)` rows: the first row whose `upper` exceeds the high word of
//! |x| wins, otherwise the caller's fallback regime applies. Writing the bands
//! this way keeps every boundary in one place per function and lets tests
//! probe each row directly.

pub(crate) const SIGN_BIT: u32 = 0x8000_0000;
pub(crate) const ABS_MASK: u32 = 0x7fff_ffff;

/// 2^-55
pub(crate) const HI_2P_M55: u32 = 0x3c80_0000;
/// 2^-28
pub(crate) const HI_2P_M28: u32 = 0x3e30_0000;
/// First high word above 0.5 * ln2.
pub(crate) const HI_HALF_LN2: u32 = 0x3fd6_2e43;
pub(crate) const HI_HALF: u32 = 0x3fe0_0000;
pub(crate) const HI_ONE: u32 = 0x3ff0_0000;
pub(crate) const HI_TWO: u32 = 0x4000_0000;
pub(crate) const HI_22: u32 = 0x4036_0000;
/// High word of ln(DBL_MAX) = 709.78...
pub(crate) const HI_LN_MAX: u32 = 0x4086_2e42;
/// 2^28
pub(crate) const HI_2P28: u32 = 0x41b0_0000;
pub(crate) const HI_INF: u32 = 0x7ff0_0000;

/// Largest |x| (full bit pattern) for which sinh and cosh are finite.
pub(crate) const OVERFLOW_BITS: u64 = 0x4086_33ce_8fb9_f87d;

#[inline(always)]
pub(crate) fn classify<R: Copy>(ix: u32, table: &[(u32, R)], rest: R) -> R {
    for &(upper, regime) in table {
        if ix < upper {
            return regime;
        }
    }
    rest
}

/// Compares both words of |x| against `OVERFLOW_BITS`; the high word alone
/// cannot separate values that share `0x408633ce`.
#[inline(always)]
pub(crate) fn below_overflow(ix: u32, lx: u32) -> bool {
    (((ix as u64) << 32) | (lx as u64)) <= OVERFLOW_BITS
}

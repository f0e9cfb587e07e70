//! Fixed-point blend primitives.
//!
//! Every kernel in the crate is built from these four operations. Weights
//! live on the expanded `[0, 256]` scale so that an opaque byte (255)
//! becomes an exact unity multiplier (256) and `combine(x, 256) == x`.
//!
//! All arithmetic is integer only; results are truncated to a byte the
//! same way in every specialization, which keeps output bit-reproducible.

/// Weight corresponding to full coverage / full opacity.
pub const WEIGHT_FULL: i32 = 256;

/// Expand a byte in `[0, 255]` to a weight in `[0, 256]`.
///
/// Maps 0 to 0 and 255 to 256.
#[inline(always)]
pub const fn expand(a: u8) -> i32 {
    let a = a as i32;
    a + (a >> 7)
}

/// Scale `x` by `w / 256` with a multiply-shift.
///
/// `x` may be negative (as in [`blend`]) or already on the expanded scale
/// (as when a coverage weight is combined with a colour weight); the shift
/// is arithmetic.
#[inline(always)]
pub const fn combine(x: i32, w: i32) -> i32 {
    (x * w) >> 8
}

/// Interpolate from `dst` toward `src` by `w / 256`.
#[inline(always)]
pub const fn blend(src: u8, dst: u8, w: i32) -> u8 {
    let d = dst as i32;
    (d + combine(src as i32 - d, w)) as u8
}

/// Sum of two independently weighted samples.
#[inline(always)]
pub const fn combine2(a: u8, wa: i32, b: u8, wb: i32) -> u8 {
    (combine(a as i32, wa) + combine(b as i32, wb)) as u8
}

/// Premultiplied "over": `src + dst * t / 256`, where `t` is the inverted
/// source weight.
#[inline(always)]
pub const fn over(src: u8, dst: u8, t: i32) -> u8 {
    (src as i32 + combine(dst as i32, t)) as u8
}

// ============================================================================
// Tests
// ============================================================================

//! Source-in-mask-over-destination span kernels.
//!
//! A single-channel coverage byte per pixel stands in for the plane alpha:
//!
//! - coverage 0 leaves the pixel alone;
//! - full coverage copies an opaque source pixel, or composites a
//!   translucent one with the premultiplied over operator;
//! - partial coverage scales the source by the coverage, and the
//!   destination by one minus the scaled source alpha.

use crate::blend::{blend, combine, combine2, expand, over, WEIGHT_FULL};

/// Composite one pixel. `s` may be empty when the source has no samples.
#[inline(always)]
fn mask_pixel(d: &mut [u8], s: &[u8], n: usize, da: bool, sa: bool, ma: i32) {
    if ma == WEIGHT_FULL {
        let masa = if sa { 255 - s[n] } else { 0 };
        if masa == 0 {
            d[..n].copy_from_slice(&s[..n]);
            if da {
                d[n] = if sa { s[n] } else { 255 };
            }
        } else {
            let t = expand(masa);
            for k in 0..n {
                d[k] = over(s[k], d[k], t);
            }
            if da {
                d[n] = over(s[n], d[n], t);
            }
        }
    } else if sa {
        let masa = expand((255 - combine(s[n] as i32, ma)) as u8);
        for k in 0..n {
            d[k] = combine2(s[k], ma, d[k], masa);
        }
        if da {
            d[n] = combine2(s[n], ma, d[n], masa);
        }
    } else {
        for k in 0..n {
            d[k] = blend(s[k], d[k], ma);
        }
        if da {
            d[n] = blend(255, d[n], ma);
        }
    }
}

// ============================================================================
// Generic N-channel routine
// ============================================================================

/// Composite `w` source pixels through `w` mask bytes.
///
/// Pixels are walked by offset so that a source with no samples at all
/// (alpha-only destination, opaque source) advances by zero bytes.
pub(crate) fn span_mask_n(
    dst: &mut [u8],
    src: &[u8],
    mask: &[u8],
    n: usize,
    da: bool,
    sa: bool,
    w: usize,
) {
    let ds = n + da as usize;
    let ss = n + sa as usize;
    let mut di = 0;
    let mut si = 0;
    for &m in &mask[..w] {
        let ma = expand(m);
        if ma != 0 {
            mask_pixel(&mut dst[di..di + ds], &src[si..si + ss], n, da, sa, ma);
        }
        di += ds;
        si += ss;
    }
}

// ============================================================================
// Fixed-size specializations
// ============================================================================

/// `N` colour samples; destination pixels are `DS` bytes and source pixels
/// `SS` bytes, each either `N` or `N + 1`.
pub(crate) fn span_mask_fixed<const N: usize, const DS: usize, const SS: usize>(
    dst: &mut [u8],
    src: &[u8],
    mask: &[u8],
    w: usize,
) {
    let sa = SS > N;
    let pixels = dst.chunks_exact_mut(DS).zip(src.chunks_exact(SS)).zip(mask);
    for ((d, s), &m) in pixels.take(w) {
        let ma = expand(m);
        if ma == 0 {
            continue;
        }
        let mut px = [255u8; DS];
        if DS == SS {
            px.copy_from_slice(s);
        } else {
            px[..N].copy_from_slice(&s[..N]);
        }
        if ma == WEIGHT_FULL {
            let masa = if sa { 255 - s[N] } else { 0 };
            if masa == 0 {
                d.copy_from_slice(&px);
            } else {
                let t = expand(masa);
                for k in 0..DS {
                    d[k] = over(px[k], d[k], t);
                }
            }
        } else if sa {
            let masa = expand((255 - combine(s[N] as i32, ma)) as u8);
            for k in 0..DS {
                d[k] = combine2(px[k], ma, d[k], masa);
            }
        } else {
            for k in 0..DS {
                d[k] = blend(px[k], d[k], ma);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

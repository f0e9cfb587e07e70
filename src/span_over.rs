//! Source-over span kernels with a constant plane alpha.
//!
//! At full plane alpha, per pixel:
//!
//! ```text
//! e = source alpha ? expand(src_alpha) : 256
//! t = 256 - e
//! e == 0  -> pixel untouched
//! t == 0  -> raw copy (destination alpha becomes the source alpha, or 255)
//! else    -> dst = src + combine(dst, t)
//! ```
//!
//! With a partial plane alpha `a` the source is interpolated toward instead:
//!
//! ```text
//! w   = source alpha ? combine(src_alpha, expand(a)) : a
//! dst = blend(src, dst, w)
//! ```
//!
//! and the destination alpha, if any, is blended toward the source alpha
//! (or 255) by the same `w`.

use crate::blend::{blend, combine, expand, over, WEIGHT_FULL};

// ============================================================================
// Generic N-channel routine
// ============================================================================

/// Composite `w` source pixels over `w` destination pixels.
///
/// Both buffers carry `n` colour samples per pixel, followed by an alpha
/// sample when `da` / `sa` is set.
pub(crate) fn span_over_n(dst: &mut [u8], src: &[u8], n: usize, da: bool, sa: bool, w: usize, alpha: u8) {
    let ds = n + da as usize;
    let ss = n + sa as usize;
    let pw = expand(alpha);
    for (d, s) in dst.chunks_exact_mut(ds).zip(src.chunks_exact(ss)).take(w) {
        let a = if sa { s[n] } else { 255 };
        if pw != WEIGHT_FULL {
            let masa = if sa { combine(a as i32, pw) } else { alpha as i32 };
            if masa == 0 {
                continue;
            }
            for k in 0..n {
                d[k] = blend(s[k], d[k], masa);
            }
            if da {
                d[n] = blend(a, d[n], masa);
            }
            continue;
        }
        let e = if sa { expand(a) } else { WEIGHT_FULL };
        if e == 0 {
            continue;
        }
        let t = WEIGHT_FULL - e;
        if t == 0 {
            d[..n].copy_from_slice(&s[..n]);
            if da {
                d[n] = a;
            }
        } else {
            for k in 0..n {
                d[k] = over(s[k], d[k], t);
            }
            if da {
                d[n] = over(a, d[n], t);
            }
        }
    }
}

// ============================================================================
// Fixed-size specializations
// ============================================================================

/// `N` colour samples; destination pixels are `DS` bytes and source pixels
/// `SS` bytes, each either `N` or `N + 1`.
pub(crate) fn span_over_fixed<const N: usize, const DS: usize, const SS: usize>(
    dst: &mut [u8],
    src: &[u8],
    w: usize,
    alpha: u8,
) {
    let sa = SS > N;
    let pw = expand(alpha);
    for (d, s) in dst.chunks_exact_mut(DS).zip(src.chunks_exact(SS)).take(w) {
        let mut px = [255u8; DS];
        if DS == SS {
            px.copy_from_slice(s);
        } else {
            px[..N].copy_from_slice(&s[..N]);
        }
        if pw != WEIGHT_FULL {
            let masa = if sa { combine(s[N] as i32, pw) } else { alpha as i32 };
            if masa == 0 {
                continue;
            }
            for k in 0..DS {
                d[k] = blend(px[k], d[k], masa);
            }
            continue;
        }
        let e = if sa { expand(s[N]) } else { WEIGHT_FULL };
        if e == 0 {
            continue;
        }
        let t = WEIGHT_FULL - e;
        if t == 0 {
            d.copy_from_slice(&px);
        } else {
            for k in 0..DS {
                d[k] = over(px[k], d[k], t);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Solid colour through a coverage mask.
//!
//! Each destination pixel is blended toward one constant colour by
//! `ma = combine(expand(mask), expand(color_alpha))`. A zero weight leaves
//! the pixel alone and a full weight overwrites it.

use crate::blend::{blend, combine, expand, WEIGHT_FULL};
use crate::swar::PackedRgba;

/// Per-pixel weight from a mask byte and the expanded colour alpha.
#[inline(always)]
fn mask_weight(m: u8, sa: i32) -> i32 {
    let ma = expand(m);
    if sa == WEIGHT_FULL {
        ma
    } else {
        combine(ma, sa)
    }
}

// ============================================================================
// Generic N-channel routine
// ============================================================================

/// Paint `w` pixels of `n` colour samples (plus alpha when `da`).
pub(crate) fn span_color_n(dst: &mut [u8], mask: &[u8], n: usize, da: bool, w: usize, color: &[u8]) {
    let sa = expand(color[n]);
    if sa == 0 {
        return;
    }
    let stride = n + da as usize;
    for (px, &m) in dst.chunks_exact_mut(stride).zip(mask).take(w) {
        let ma = mask_weight(m, sa);
        if ma == 0 {
            continue;
        }
        if ma == WEIGHT_FULL {
            px[..n].copy_from_slice(&color[..n]);
            if da {
                px[n] = 255;
            }
        } else {
            for k in 0..n {
                px[k] = blend(color[k], px[k], ma);
            }
            if da {
                px[n] = blend(255, px[n], ma);
            }
        }
    }
}

// ============================================================================
// Fixed-size specializations
// ============================================================================

/// `N` colour samples in `S`-byte pixels; `S == N + 1` means the
/// destination carries alpha.
pub(crate) fn span_color_fixed<const N: usize, const S: usize>(
    dst: &mut [u8],
    mask: &[u8],
    w: usize,
    color: &[u8],
) {
    let sa = expand(color[N]);
    if sa == 0 {
        return;
    }
    let mut c = [255u8; S];
    c[..N].copy_from_slice(&color[..N]);
    for (px, &m) in dst.chunks_exact_mut(S).zip(mask).take(w) {
        let ma = mask_weight(m, sa);
        if ma == 0 {
            continue;
        }
        if ma == WEIGHT_FULL {
            px.copy_from_slice(&c);
        } else {
            for k in 0..S {
                px[k] = blend(c[k], px[k], ma);
            }
        }
    }
}

/// Three colour samples plus destination alpha, blended on packed words.
pub(crate) fn span_color_rgb_da(dst: &mut [u8], mask: &[u8], w: usize, color: &[u8]) {
    let sa = expand(color[3]);
    if sa == 0 {
        return;
    }
    let packed = PackedRgba::opaque([color[0], color[1], color[2]]);
    let opaque = packed.bytes();
    for (px, &m) in dst.chunks_exact_mut(4).zip(mask).take(w) {
        let ma = mask_weight(m, sa);
        if ma == 0 {
            continue;
        }
        if ma == WEIGHT_FULL {
            px.copy_from_slice(&opaque);
        } else if let Ok(px) = <&mut [u8; 4]>::try_from(px) {
            packed.blend_into(px, ma as u32);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

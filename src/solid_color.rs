//! Solid colour fill kernels.
//!
//! Write one constant colour into `w` consecutive destination pixels. The
//! colour is `n + 1` bytes: `n` colour samples followed by an alpha byte.
//!
//! Three behaviours, chosen by dispatch:
//!
//! - no destination alpha, opaque colour: raw overwrite;
//! - no destination alpha, translucent colour: blend every pixel by the
//!   colour alpha. There is no zero-alpha early return on this path; every
//!   pixel is written (with its own value when the alpha is 0);
//! - destination alpha: zero alpha returns immediately, full alpha
//!   overwrites and sets alpha to 255, anything else blends colour and
//!   alpha samples.

use crate::blend::{blend, expand, WEIGHT_FULL};
use crate::swar::{rgb_tile, PackedRgba};

// ============================================================================
// Generic N-channel routines
// ============================================================================

/// Overwrite `w` pixels of `n` colour samples (plus 255 alpha when `da`).
pub(crate) fn fill_opaque_n(dst: &mut [u8], n: usize, da: bool, w: usize, color: &[u8]) {
    let stride = n + da as usize;
    for px in dst.chunks_exact_mut(stride).take(w) {
        px[..n].copy_from_slice(&color[..n]);
        if da {
            px[n] = 255;
        }
    }
}

/// Blend `w` pixels toward the colour by weight `sa`.
pub(crate) fn fill_blend_n(dst: &mut [u8], n: usize, da: bool, w: usize, color: &[u8], sa: i32) {
    let stride = n + da as usize;
    for px in dst.chunks_exact_mut(stride).take(w) {
        for k in 0..n {
            px[k] = blend(color[k], px[k], sa);
        }
        if da {
            px[n] = blend(255, px[n], sa);
        }
    }
}

/// Destination-alpha fill for any channel count.
pub(crate) fn fill_da_n(dst: &mut [u8], n: usize, w: usize, color: &[u8]) {
    let sa = expand(color[n]);
    if sa == 0 {
        return;
    }
    if sa == WEIGHT_FULL {
        fill_opaque_n(dst, n, true, w, color);
    } else {
        fill_blend_n(dst, n, true, w, color, sa);
    }
}

// ============================================================================
// Fixed-size specializations
// ============================================================================

/// Opaque overwrite of `N`-sample pixels without alpha.
pub(crate) fn fill_opaque_fixed<const N: usize>(dst: &mut [u8], w: usize, color: &[u8]) {
    let mut px = [0u8; N];
    px.copy_from_slice(&color[..N]);
    for d in dst.chunks_exact_mut(N).take(w) {
        d.copy_from_slice(&px);
    }
}

/// Opaque overwrite of 3-sample pixels, four pixels per tile.
pub(crate) fn fill_opaque_rgb(dst: &mut [u8], w: usize, color: &[u8]) {
    let rgb = [color[0], color[1], color[2]];
    if w < 8 {
        fill_opaque_fixed::<3>(dst, w, color);
        return;
    }
    let tile = rgb_tile(rgb);
    let tiles = w / 4;
    let (head, tail) = dst[..w * 3].split_at_mut(tiles * 12);
    for chunk in head.chunks_exact_mut(12) {
        chunk.copy_from_slice(&tile);
    }
    fill_opaque_fixed::<3>(tail, w - tiles * 4, color);
}

/// Destination-alpha fill of `N` colour samples plus alpha, `S == N + 1`.
pub(crate) fn fill_da_fixed<const N: usize, const S: usize>(dst: &mut [u8], w: usize, color: &[u8]) {
    let sa = expand(color[N]);
    if sa == 0 {
        return;
    }
    let mut c = [255u8; S];
    c[..N].copy_from_slice(&color[..N]);
    if sa == WEIGHT_FULL {
        for d in dst.chunks_exact_mut(S).take(w) {
            d.copy_from_slice(&c);
        }
    } else {
        for d in dst.chunks_exact_mut(S).take(w) {
            for k in 0..S {
                d[k] = blend(c[k], d[k], sa);
            }
        }
    }
}

/// Destination-alpha fill of 3 colour samples plus alpha on packed words.
pub(crate) fn fill_da_rgb(dst: &mut [u8], w: usize, color: &[u8]) {
    let sa = expand(color[3]);
    if sa == 0 {
        return;
    }
    let packed = PackedRgba::opaque([color[0], color[1], color[2]]);
    if sa == WEIGHT_FULL {
        let bytes = packed.bytes();
        for d in dst.chunks_exact_mut(4).take(w) {
            d.copy_from_slice(&bytes);
        }
    } else {
        for d in dst.chunks_exact_mut(4).take(w) {
            if let Ok(px) = <&mut [u8; 4]>::try_from(d) {
                packed.blend_into(px, sa as u32);
            }
        }
    }
}

/// Translucent fill of `N`-sample pixels without alpha.
pub(crate) fn fill_blend_fixed<const N: usize>(dst: &mut [u8], w: usize, color: &[u8], sa: i32) {
    for d in dst.chunks_exact_mut(N).take(w) {
        for k in 0..N {
            d[k] = blend(color[k], d[k], sa);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Word-packing helpers for the 3-channel fast paths.
//!
//! An RGB-plus-alpha pixel fits one 32-bit word. Splitting the word into
//! two 16-bit lanes (`R.B.` and `.G.A` after masking) lets one multiply
//! blend two channels at once. Each lane holds `d * 256 + (c - d) * w`,
//! which stays in `[0, 65535]` for `w <= 256`, so the packed result equals
//! the per-channel [`blend`](crate::blend::blend) exactly.
//!
//! The 3-channel opaque fill instead writes four identical pixels as one
//! 12-byte tile.

const LANE_MASK: u32 = 0xFF00_FF00;

/// Native-endian bit pattern of a 0xFF byte in the fourth sample slot.
#[inline(always)]
const fn opaque_alpha_bits() -> u32 {
    if cfg!(target_endian = "big") {
        0x0000_00FF
    } else {
        0xFF00_0000
    }
}

/// An RGB colour packed with opaque alpha, split into blend lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PackedRgba {
    word: u32,
    rb: u32,
    ga: u32,
}

impl PackedRgba {
    /// Pack `rgb` with an alpha sample of 255.
    #[inline]
    pub(crate) fn opaque(rgb: [u8; 3]) -> Self {
        let word = u32::from_ne_bytes([rgb[0], rgb[1], rgb[2], 0]) | opaque_alpha_bits();
        Self {
            word,
            rb: word & (LANE_MASK >> 8),
            ga: (word & LANE_MASK) >> 8,
        }
    }

    /// Bytes of the packed pixel in memory order.
    #[inline]
    pub(crate) fn bytes(&self) -> [u8; 4] {
        self.word.to_ne_bytes()
    }

    /// Blend the packed colour into a 4-byte destination pixel by weight
    /// `w` in `[0, 256]`.
    #[inline]
    pub(crate) fn blend_into(&self, dst: &mut [u8; 4], w: u32) {
        let d = u32::from_ne_bytes(*dst);
        let mut rb = (d << 8) & LANE_MASK;
        let mut ga = d & LANE_MASK;
        rb = rb.wrapping_add(self.rb.wrapping_sub(rb >> 8).wrapping_mul(w));
        ga = ga.wrapping_add(self.ga.wrapping_sub(ga >> 8).wrapping_mul(w));
        rb &= LANE_MASK;
        ga &= LANE_MASK;
        *dst = ((rb >> 8) | ga).to_ne_bytes();
    }
}

/// Four RGB pixels laid end to end; 12 bytes, three machine words.
#[inline]
pub(crate) fn rgb_tile(rgb: [u8; 3]) -> [u8; 12] {
    let [r, g, b] = rgb;
    [r, g, b, r, g, b, r, g, b, r, g, b]
}

// ============================================================================
// Tests
// ============================================================================

//! Painter selection.
//!
//! Each `get_*` selector inspects the operand shape once (colour channel
//! count, alpha presence, colour alpha, plane alpha) and returns a small
//! painter value whose `paint` method runs the matching kernel over one
//! row. Selection is a pure function of the arguments and the
//! [`PlotterConfig`]; a shape no enabled family serves is reported as
//! [`PaintError::Unsupported`].
//!
//! Channel counts passed to the selectors are always colour channels, i.e.
//! samples per pixel excluding alpha. `0` denotes an alpha-only pixmap.

use crate::blend::{expand, WEIGHT_FULL};
use crate::config::{Family, PlotterConfig};
use crate::error::{PaintError, Result};
use crate::solid_color::{
    fill_blend_fixed, fill_blend_n, fill_da_fixed, fill_da_n, fill_da_rgb, fill_opaque_fixed,
    fill_opaque_n, fill_opaque_rgb,
};
use crate::span_color::{span_color_fixed, span_color_n, span_color_rgb_da};
use crate::span_mask::{span_mask_fixed, span_mask_n};
use crate::span_over::{span_over_fixed, span_over_n};

// ============================================================================
// PlaneAlpha
// ============================================================================

/// A constant alpha applied uniformly across a span-over operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneAlpha {
    /// Alpha 0: nothing is painted.
    Transparent,
    /// Alpha in `1..=254`.
    Partial(u8),
    /// Alpha 255.
    Opaque,
}

impl PlaneAlpha {
    /// The `[0, 256]` weight this alpha applies.
    pub fn weight(self) -> i32 {
        match self {
            PlaneAlpha::Transparent => 0,
            PlaneAlpha::Partial(a) => expand(a),
            PlaneAlpha::Opaque => WEIGHT_FULL,
        }
    }

    /// The alpha byte this plane alpha was built from.
    pub fn alpha(self) -> u8 {
        match self {
            PlaneAlpha::Transparent => 0,
            PlaneAlpha::Partial(a) => a,
            PlaneAlpha::Opaque => 255,
        }
    }
}

impl From<u8> for PlaneAlpha {
    fn from(alpha: u8) -> Self {
        match alpha {
            0 => PlaneAlpha::Transparent,
            255 => PlaneAlpha::Opaque,
            a => PlaneAlpha::Partial(a),
        }
    }
}

// ============================================================================
// Painters
// ============================================================================

/// Fills a row with one constant colour. See
/// [`PlotterConfig::solid_color_painter`].
#[derive(Debug, Clone, Copy)]
pub struct SolidColorPainter<'c> {
    family: Family,
    n: usize,
    da: bool,
    color: &'c [u8],
}

impl SolidColorPainter<'_> {
    pub fn family(&self) -> Family {
        self.family
    }

    /// Paint `w` pixels at the start of `dst`.
    ///
    /// # Panics
    ///
    /// May panic if `dst` holds fewer than `w` pixels.
    pub fn paint(&self, dst: &mut [u8], w: usize) {
        let (n, color) = (self.n, self.color);
        if self.da {
            match self.family {
                Family::Gray => fill_da_fixed::<1, 2>(dst, w, color),
                Family::Rgb => fill_da_rgb(dst, w, color),
                Family::Cmyk => fill_da_fixed::<4, 5>(dst, w, color),
                Family::AlphaOnly | Family::Generic => fill_da_n(dst, n, w, color),
            }
        } else if color[n] == 255 {
            match self.family {
                Family::Gray => fill_opaque_fixed::<1>(dst, w, color),
                Family::Rgb => fill_opaque_rgb(dst, w, color),
                Family::Cmyk => fill_opaque_fixed::<4>(dst, w, color),
                Family::AlphaOnly | Family::Generic => fill_opaque_n(dst, n, false, w, color),
            }
        } else {
            // No alpha channel to record transparency in: even a zero
            // alpha writes every pixel.
            let sa = expand(color[n]);
            match self.family {
                Family::Gray => fill_blend_fixed::<1>(dst, w, color, sa),
                Family::Rgb => fill_blend_fixed::<3>(dst, w, color, sa),
                Family::Cmyk => fill_blend_fixed::<4>(dst, w, color, sa),
                Family::AlphaOnly | Family::Generic => fill_blend_n(dst, n, false, w, color, sa),
            }
        }
    }
}

/// Composites a source row over a destination row with a plane alpha.
/// See [`PlotterConfig::span_painter`].
#[derive(Debug, Clone, Copy)]
pub struct SpanPainter {
    family: Family,
    n: usize,
    da: bool,
    sa: bool,
    plane: PlaneAlpha,
}

impl SpanPainter {
    pub fn family(&self) -> Family {
        self.family
    }

    pub fn plane_alpha(&self) -> PlaneAlpha {
        self.plane
    }

    /// Composite `w` pixels of `src` over `dst`.
    ///
    /// # Panics
    ///
    /// May panic if either slice holds fewer than `w` pixels.
    pub fn paint(&self, dst: &mut [u8], src: &[u8], w: usize) {
        if self.plane == PlaneAlpha::Transparent {
            return;
        }
        let alpha = self.plane.alpha();
        match self.family {
            Family::Gray => over_fixed::<1, 2>(dst, src, self.da, self.sa, w, alpha),
            Family::Rgb => over_fixed::<3, 4>(dst, src, self.da, self.sa, w, alpha),
            Family::Cmyk => over_fixed::<4, 5>(dst, src, self.da, self.sa, w, alpha),
            Family::AlphaOnly | Family::Generic => {
                span_over_n(dst, src, self.n, self.da, self.sa, w, alpha)
            }
        }
    }
}

/// `N1` must be `N + 1`.
#[inline]
fn over_fixed<const N: usize, const N1: usize>(
    dst: &mut [u8],
    src: &[u8],
    da: bool,
    sa: bool,
    w: usize,
    alpha: u8,
) {
    match (da, sa) {
        (false, false) => span_over_fixed::<N, N, N>(dst, src, w, alpha),
        (true, false) => span_over_fixed::<N, N1, N>(dst, src, w, alpha),
        (false, true) => span_over_fixed::<N, N, N1>(dst, src, w, alpha),
        (true, true) => span_over_fixed::<N, N1, N1>(dst, src, w, alpha),
    }
}

/// Composites a source row over a destination row through a coverage row.
/// See [`PlotterConfig::span_mask_painter`].
#[derive(Debug, Clone, Copy)]
pub struct SpanMaskPainter {
    family: Family,
    n: usize,
    da: bool,
    sa: bool,
}

impl SpanMaskPainter {
    pub fn family(&self) -> Family {
        self.family
    }

    /// Composite `w` pixels of `src` over `dst`, weighted by `mask`.
    ///
    /// # Panics
    ///
    /// May panic if any slice holds fewer than `w` pixels.
    pub fn paint(&self, dst: &mut [u8], src: &[u8], mask: &[u8], w: usize) {
        match self.family {
            Family::Gray => mask_fixed::<1, 2>(dst, src, mask, self.da, self.sa, w),
            Family::Rgb => mask_fixed::<3, 4>(dst, src, mask, self.da, self.sa, w),
            Family::Cmyk => mask_fixed::<4, 5>(dst, src, mask, self.da, self.sa, w),
            Family::AlphaOnly | Family::Generic => {
                span_mask_n(dst, src, mask, self.n, self.da, self.sa, w)
            }
        }
    }
}

#[inline]
fn mask_fixed<const N: usize, const N1: usize>(
    dst: &mut [u8],
    src: &[u8],
    mask: &[u8],
    da: bool,
    sa: bool,
    w: usize,
) {
    match (da, sa) {
        (false, false) => span_mask_fixed::<N, N, N>(dst, src, mask, w),
        (true, false) => span_mask_fixed::<N, N1, N>(dst, src, mask, w),
        (false, true) => span_mask_fixed::<N, N, N1>(dst, src, mask, w),
        (true, true) => span_mask_fixed::<N, N1, N1>(dst, src, mask, w),
    }
}

/// Composites one colour into a destination row through a coverage row.
/// See [`PlotterConfig::span_color_painter`].
#[derive(Debug, Clone, Copy)]
pub struct SpanColorPainter<'c> {
    family: Family,
    n: usize,
    da: bool,
    color: &'c [u8],
}

impl SpanColorPainter<'_> {
    pub fn family(&self) -> Family {
        self.family
    }

    /// Paint `w` pixels of `dst` weighted by `mask`.
    ///
    /// # Panics
    ///
    /// May panic if either slice holds fewer than `w` pixels.
    pub fn paint(&self, dst: &mut [u8], mask: &[u8], w: usize) {
        let color = self.color;
        match (self.family, self.da) {
            (Family::Gray, false) => span_color_fixed::<1, 1>(dst, mask, w, color),
            (Family::Gray, true) => span_color_fixed::<1, 2>(dst, mask, w, color),
            (Family::Rgb, false) => span_color_fixed::<3, 3>(dst, mask, w, color),
            (Family::Rgb, true) => span_color_rgb_da(dst, mask, w, color),
            (Family::Cmyk, false) => span_color_fixed::<4, 4>(dst, mask, w, color),
            (Family::Cmyk, true) => span_color_fixed::<4, 5>(dst, mask, w, color),
            (Family::AlphaOnly | Family::Generic, da) => {
                span_color_n(dst, mask, self.n, da, w, color)
            }
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

impl PlotterConfig {
    fn select(&self, painter: &'static str, n: usize, alpha_only_ok: bool) -> Result<Family> {
        let family = match self.family(n) {
            Some(Family::AlphaOnly) if !alpha_only_ok => None,
            f => f,
        };
        match family {
            Some(family) => {
                log::trace!("selected {} {} painter for n={}", family, painter, n);
                Ok(family)
            }
            None => {
                log::debug!("no {} painter for n={} in {:?}", painter, n, self);
                Err(PaintError::Unsupported {
                    painter,
                    color_channels: n,
                })
            }
        }
    }

    /// Painter filling rows with `color` (`n` colour samples then alpha).
    pub fn solid_color_painter<'c>(
        &self,
        n: usize,
        color: &'c [u8],
        dest_alpha: bool,
    ) -> Result<SolidColorPainter<'c>> {
        check_color(n, color)?;
        let family = self.select("solid-color", n, dest_alpha)?;
        Ok(SolidColorPainter {
            family,
            n,
            da: dest_alpha,
            color,
        })
    }

    /// Painter compositing source rows over destination rows.
    ///
    /// Alpha-only pixmaps are served only when both carry alpha.
    pub fn span_painter(
        &self,
        dest_alpha: bool,
        source_alpha: bool,
        n: usize,
        plane_alpha: u8,
    ) -> Result<SpanPainter> {
        let family = self.select("span-over", n, dest_alpha && source_alpha)?;
        Ok(SpanPainter {
            family,
            n,
            da: dest_alpha,
            sa: source_alpha,
            plane: PlaneAlpha::from(plane_alpha),
        })
    }

    /// Painter compositing source rows over destination rows through a
    /// single-channel mask.
    pub fn span_mask_painter(
        &self,
        dest_alpha: bool,
        source_alpha: bool,
        n: usize,
    ) -> Result<SpanMaskPainter> {
        let family = self.select("span-mask", n, dest_alpha)?;
        Ok(SpanMaskPainter {
            family,
            n,
            da: dest_alpha,
            sa: source_alpha,
        })
    }

    /// Painter compositing `color` into destination rows through a
    /// single-channel mask.
    pub fn span_color_painter<'c>(
        &self,
        n: usize,
        dest_alpha: bool,
        color: &'c [u8],
    ) -> Result<SpanColorPainter<'c>> {
        check_color(n, color)?;
        let family = self.select("span-color", n, dest_alpha)?;
        Ok(SpanColorPainter {
            family,
            n,
            da: dest_alpha,
            color,
        })
    }
}

fn check_color(n: usize, color: &[u8]) -> Result<()> {
    if color.len() < n + 1 {
        return Err(PaintError::ColorLength {
            expected: n + 1,
            actual: color.len(),
        });
    }
    Ok(())
}

/// [`PlotterConfig::solid_color_painter`] with the default configuration.
pub fn get_solid_color_painter(
    n: usize,
    color: &[u8],
    dest_alpha: bool,
) -> Result<SolidColorPainter<'_>> {
    PlotterConfig::default().solid_color_painter(n, color, dest_alpha)
}

/// [`PlotterConfig::span_painter`] with the default configuration.
pub fn get_span_painter(
    dest_alpha: bool,
    source_alpha: bool,
    n: usize,
    plane_alpha: u8,
) -> Result<SpanPainter> {
    PlotterConfig::default().span_painter(dest_alpha, source_alpha, n, plane_alpha)
}

/// [`PlotterConfig::span_mask_painter`] with the default configuration.
pub fn get_span_mask_painter(dest_alpha: bool, source_alpha: bool, n: usize) -> Result<SpanMaskPainter> {
    PlotterConfig::default().span_mask_painter(dest_alpha, source_alpha, n)
}

/// [`PlotterConfig::span_color_painter`] with the default configuration.
pub fn get_span_color_painter(
    n: usize,
    dest_alpha: bool,
    color: &[u8],
) -> Result<SpanColorPainter<'_>> {
    PlotterConfig::default().span_color_painter(n, dest_alpha, color)
}

// ============================================================================
// Tests
// ============================================================================

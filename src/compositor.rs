//! Pixmap-level compositing.
//!
//! Intersects the operands in device space, selects one painter for the
//! operand shapes, then drives it row by row. Every buffer's row slice is
//! derived independently from the same absolute rectangle, so the pixmaps
//! need not share an origin.

use crate::basics::IRect;
use crate::config::PlotterConfig;
use crate::error::{PaintError, Result};
use crate::glyph::{paint_row_color, paint_row_mask, Glyph};
use crate::pixmap::{Pixmap, PixmapLayout, PixmapMut};

// ============================================================================
// Compositor
// ============================================================================

/// Runs the pixmap operations against one [`PlotterConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    config: PlotterConfig,
}

/// Byte range of the `w` pixels starting at device `(x, y)`.
#[inline]
fn span_range(layout: &PixmapLayout, x: i32, y: i32, w: usize) -> std::ops::Range<usize> {
    let start = layout.offset(x, y);
    start..start + w * layout.channels
}

impl Compositor {
    pub fn new(config: PlotterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    /// Composite `src` over `dst` where they overlap, scaled by
    /// `plane_alpha`.
    ///
    /// The two pixmaps must have the same number of colour channels; either
    /// may carry alpha.
    pub fn paint_over(&self, dst: &mut PixmapMut<'_>, src: &Pixmap<'_>, plane_alpha: u8) -> Result<()> {
        self.paint_over_clipped(dst, src, plane_alpha, IRect::INFINITE)
    }

    /// As [`paint_over`](Self::paint_over), restricted to `clip`.
    pub fn paint_over_clipped(
        &self,
        dst: &mut PixmapMut<'_>,
        src: &Pixmap<'_>,
        plane_alpha: u8,
        clip: IRect,
    ) -> Result<()> {
        let dl = *dst.layout();
        let sl = *src.layout();
        let n = dl.color_channels();
        if n != sl.color_channels() {
            return Err(PaintError::ChannelMismatch {
                dst: n,
                src: sl.color_channels(),
            });
        }

        let bbox = dl.bounds().intersect(&sl.bounds()).intersect(&clip);
        if bbox.is_empty() {
            return Ok(());
        }
        let painter = self.config.span_painter(dl.has_alpha, sl.has_alpha, n, plane_alpha)?;
        log::trace!("paint_over {:?} alpha={}", bbox, plane_alpha);

        let w = bbox.width() as usize;
        let samples = src.samples();
        for y in bbox.y0..bbox.y1 {
            let d = span_range(&dl, bbox.x0, y, w);
            let s = span_range(&sl, bbox.x0, y, w);
            painter.paint(&mut dst.samples_mut()[d], &samples[s], w);
        }
        Ok(())
    }

    /// Composite `src` over `dst` through the single-channel coverage
    /// `mask`, where all three overlap.
    ///
    /// `dst` and `src` must have identical channel layouts.
    pub fn paint_over_with_mask(
        &self,
        dst: &mut PixmapMut<'_>,
        src: &Pixmap<'_>,
        mask: &Pixmap<'_>,
    ) -> Result<()> {
        let dl = *dst.layout();
        let sl = *src.layout();
        let ml = *mask.layout();
        if dl.channels != sl.channels {
            return Err(PaintError::ChannelMismatch {
                dst: dl.channels,
                src: sl.channels,
            });
        }
        if dl.has_alpha != sl.has_alpha {
            return Err(PaintError::ChannelMismatch {
                dst: dl.color_channels(),
                src: sl.color_channels(),
            });
        }
        if ml.channels != 1 {
            return Err(PaintError::MaskChannels(ml.channels));
        }

        let bbox = dl.bounds().intersect(&sl.bounds()).intersect(&ml.bounds());
        if bbox.is_empty() {
            return Ok(());
        }
        let painter = self
            .config
            .span_mask_painter(dl.has_alpha, sl.has_alpha, sl.color_channels())?;
        log::trace!("paint_over_with_mask {:?}", bbox);

        let w = bbox.width() as usize;
        let (samples, coverage) = (src.samples(), mask.samples());
        for y in bbox.y0..bbox.y1 {
            let d = span_range(&dl, bbox.x0, y, w);
            let s = span_range(&sl, bbox.x0, y, w);
            let m = span_range(&ml, bbox.x0, y, w);
            painter.paint(&mut dst.samples_mut()[d], &samples[s], &coverage[m], w);
        }
        Ok(())
    }

    /// Paint a `w` x `h` window of `glyph`, starting at glyph column
    /// `skip_x` and row `skip_y`, with its top-left corner at device
    /// `(x, y)` of `dst`.
    ///
    /// A destination without colour channels is a coverage accumulator and
    /// `color` is ignored. Otherwise `color` holds the colour samples
    /// followed by alpha; an alpha of 0 paints nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn paint_glyph(
        &self,
        color: &[u8],
        dst: &mut PixmapMut<'_>,
        x: i32,
        y: i32,
        glyph: &Glyph,
        w: usize,
        h: usize,
        skip_x: usize,
        skip_y: usize,
    ) -> Result<()> {
        let dl = *dst.layout();
        let fits = |skip: usize, len: usize, limit: usize| {
            skip.checked_add(len).is_some_and(|end| end <= limit)
        };
        if !fits(skip_x, w, glyph.width()) || !fits(skip_y, h, glyph.height()) {
            return Err(PaintError::GlyphBounds(format!(
                "window {}x{} at ({}, {}) exceeds a {}x{} glyph",
                w,
                h,
                skip_x,
                skip_y,
                glyph.width(),
                glyph.height()
            )));
        }
        let region = IRect::from_origin_size(x, y, w as u32, h as u32);
        if !region.is_empty() && !dl.bounds().contains_rect(&region) {
            return Err(PaintError::GlyphBounds(format!(
                "{:?} is outside the destination {:?}",
                region,
                dl.bounds()
            )));
        }
        if region.is_empty() {
            return Ok(());
        }

        let n = dl.color_channels();
        if n == 0 {
            log::trace!("paint_glyph mask mode {:?}", region);
            for r in 0..h {
                let row = span_range(&dl, x, y + r as i32, w);
                paint_row_mask(&mut dst.samples_mut()[row], glyph.decode_row(skip_y + r, skip_x, w));
            }
            return Ok(());
        }

        let fill = self.config.solid_color_painter(n, color, dl.has_alpha)?;
        let through_mask = self.config.span_color_painter(n, dl.has_alpha, color)?;
        if color[n] == 0 {
            return Ok(());
        }
        log::trace!(
            "paint_glyph {} mode {:?}",
            if color[n] == 255 { "solid" } else { "alpha" },
            region
        );
        for r in 0..h {
            let row = span_range(&dl, x, y + r as i32, w);
            paint_row_color(
                &mut dst.samples_mut()[row],
                dl.channels,
                &fill,
                &through_mask,
                glyph.decode_row(skip_y + r, skip_x, w),
            );
        }
        Ok(())
    }
}

// ============================================================================
// Default-configuration entry points
// ============================================================================

/// [`Compositor::paint_over`] with the default configuration.
pub fn paint_over(dst: &mut PixmapMut<'_>, src: &Pixmap<'_>, plane_alpha: u8) -> Result<()> {
    Compositor::default().paint_over(dst, src, plane_alpha)
}

/// [`Compositor::paint_over_clipped`] with the default configuration.
pub fn paint_over_clipped(
    dst: &mut PixmapMut<'_>,
    src: &Pixmap<'_>,
    plane_alpha: u8,
    clip: IRect,
) -> Result<()> {
    Compositor::default().paint_over_clipped(dst, src, plane_alpha, clip)
}

/// [`Compositor::paint_over_with_mask`] with the default configuration.
pub fn paint_over_with_mask(dst: &mut PixmapMut<'_>, src: &Pixmap<'_>, mask: &Pixmap<'_>) -> Result<()> {
    Compositor::default().paint_over_with_mask(dst, src, mask)
}

/// [`Compositor::paint_glyph`] with the default configuration.
#[allow(clippy::too_many_arguments)]
pub fn paint_glyph(
    color: &[u8],
    dst: &mut PixmapMut<'_>,
    x: i32,
    y: i32,
    glyph: &Glyph,
    w: usize,
    h: usize,
    skip_x: usize,
    skip_y: usize,
) -> Result<()> {
    Compositor::default().paint_glyph(color, dst, x, y, glyph, w, h, skip_x, skip_y)
}

// ============================================================================
// Tests
// ============================================================================

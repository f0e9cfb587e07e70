//! Borrowed pixmap views.
//!
//! The buffers themselves belong to the caller. [`Pixmap`] and
//! [`PixmapMut`] pair a byte slice with a [`PixmapLayout`] describing how
//! device pixels map onto it:
//!
//! ```text
//! offset(x, y) = (y - layout.y) * stride + (x - layout.x) * channels
//! ```
//!
//! Rows are top-down; strides are positive and may include padding.

use crate::basics::IRect;
use crate::error::{PaintError, Result};

// ============================================================================
// PixmapLayout
// ============================================================================

/// Geometry and sample layout of a pixmap placed in device space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixmapLayout {
    /// Device-space origin of the top-left pixel.
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Samples per pixel, alpha included.
    pub channels: usize,
    /// The last sample of each pixel is alpha.
    pub has_alpha: bool,
    /// Bytes per row.
    pub stride: usize,
}

impl PixmapLayout {
    /// Tightly packed layout: `stride == width * channels`.
    pub fn new(x: i32, y: i32, width: u32, height: u32, channels: usize, has_alpha: bool) -> Self {
        Self {
            x,
            y,
            width,
            height,
            channels,
            has_alpha,
            stride: width as usize * channels,
        }
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Samples per pixel excluding alpha.
    pub fn color_channels(&self) -> usize {
        self.channels - self.has_alpha as usize
    }

    /// Device-space rectangle covered by the pixmap.
    pub fn bounds(&self) -> IRect {
        IRect::from_origin_size(self.x, self.y, self.width, self.height)
    }

    /// Bytes in one row of pixels, excluding stride padding.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.channels
    }

    /// Smallest sample buffer that holds every row.
    pub fn min_len(&self) -> usize {
        match self.height {
            0 => 0,
            h => (h as usize - 1) * self.stride + self.row_bytes(),
        }
    }

    /// Byte offset of device pixel `(x, y)`, which must lie inside
    /// [`bounds`](Self::bounds).
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.bounds().contains(x, y));
        (y - self.y) as usize * self.stride + (x - self.x) as usize * self.channels
    }

    /// Check the layout against a buffer of `len` bytes.
    pub fn validate(&self, len: usize) -> Result<()> {
        if self.channels == 0 {
            return Err(PaintError::InvalidLayout("pixmap has no channels".into()));
        }
        if self.stride < self.row_bytes() {
            return Err(PaintError::InvalidLayout(format!(
                "stride {} is less than row size {}",
                self.stride,
                self.row_bytes()
            )));
        }
        if len < self.min_len() {
            return Err(PaintError::InvalidLayout(format!(
                "buffer holds {} bytes, layout needs {}",
                len,
                self.min_len()
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Pixmap / PixmapMut
// ============================================================================

/// Read-only pixmap view, used for sources and masks.
#[derive(Debug, Clone, Copy)]
pub struct Pixmap<'a> {
    layout: PixmapLayout,
    samples: &'a [u8],
}

impl<'a> Pixmap<'a> {
    pub fn new(layout: PixmapLayout, samples: &'a [u8]) -> Result<Self> {
        layout.validate(samples.len())?;
        Ok(Self { layout, samples })
    }

    pub fn layout(&self) -> &PixmapLayout {
        &self.layout
    }

    pub fn samples(&self) -> &'a [u8] {
        self.samples
    }

    /// Row `y` (relative to the pixmap's top edge), padding excluded.
    pub fn row(&self, y: u32) -> &'a [u8] {
        assert!(
            y < self.layout.height,
            "row {} out of bounds (height={})",
            y,
            self.layout.height
        );
        let start = y as usize * self.layout.stride;
        &self.samples[start..start + self.layout.row_bytes()]
    }

    /// Samples of device pixel `(x, y)`.
    pub fn pixel(&self, x: i32, y: i32) -> &'a [u8] {
        let o = self.layout.offset(x, y);
        &self.samples[o..o + self.layout.channels]
    }
}

/// Mutable pixmap view, used for destinations.
#[derive(Debug)]
pub struct PixmapMut<'a> {
    layout: PixmapLayout,
    samples: &'a mut [u8],
}

impl<'a> PixmapMut<'a> {
    pub fn new(layout: PixmapLayout, samples: &'a mut [u8]) -> Result<Self> {
        layout.validate(samples.len())?;
        Ok(Self { layout, samples })
    }

    pub fn layout(&self) -> &PixmapLayout {
        &self.layout
    }

    pub fn samples(&self) -> &[u8] {
        self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        self.samples
    }

    /// Reborrow as a read-only view.
    pub fn as_pixmap(&self) -> Pixmap<'_> {
        Pixmap {
            layout: self.layout,
            samples: self.samples,
        }
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.layout.height,
            "row {} out of bounds (height={})",
            y,
            self.layout.height
        );
        let start = y as usize * self.layout.stride;
        let end = start + self.layout.row_bytes();
        &mut self.samples[start..end]
    }

    pub fn pixel(&self, x: i32, y: i32) -> &[u8] {
        let o = self.layout.offset(x, y);
        &self.samples[o..o + self.layout.channels]
    }
}

// ============================================================================
// Tests
// ============================================================================

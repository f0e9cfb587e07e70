//! # span-paint
//!
//! Porter-Duff compositing kernels over 8-bit premultiplied pixmaps, and a
//! decoder for run-length encoded anti-aliased glyph coverage.
//!
//! All arithmetic is fixed point. A byte alpha `a` is widened to a weight in
//! `[0, 256]` by `expand(a) = a + (a >> 7)`, so that 255 multiplies exactly
//! by one, and every kernel family (1, 3, 4 or any number of colour
//! channels, with or without alpha) rounds identically.
//!
//! ## Layers
//!
//! 1. **Primitives** ([`blend`]): `expand`, `combine`, `blend`, `combine2`.
//! 2. **Kernels**: solid fill, span over, span through a mask, solid colour
//!    through a mask. Each has a runtime channel-count routine and
//!    const-generic specializations.
//! 3. **Dispatch** ([`dispatch`]): picks a kernel for an operand shape
//!    according to a [`PlotterConfig`].
//! 4. **Orchestration** ([`compositor`]): intersects pixmaps in device
//!    space and drives a painter row by row.
//! 5. **Glyphs** ([`glyph`]): decodes run-length rows into spans painted
//!    as coverage or colour.
//!
//! ```
//! use span_paint::{paint_over, Pixmap, PixmapLayout, PixmapMut};
//!
//! let src = [10u8, 20, 30, 40];
//! let src = Pixmap::new(PixmapLayout::new(1, 0, 2, 2, 1, false), &src)?;
//! let mut buf = [0u8; 6];
//! let mut dst = PixmapMut::new(PixmapLayout::new(0, 0, 3, 2, 1, false), &mut buf)?;
//! paint_over(&mut dst, &src, 255)?;
//! assert_eq!(buf, [0, 10, 20, 0, 30, 40]);
//! # Ok::<(), span_paint::PaintError>(())
//! ```

pub mod basics;
pub mod blend;
pub mod compositor;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod glyph;
pub mod pixmap;

mod solid_color;
mod span_color;
mod span_mask;
mod span_over;
mod swar;

pub use basics::IRect;
pub use compositor::{paint_glyph, paint_over, paint_over_clipped, paint_over_with_mask, Compositor};
pub use config::{Family, PlotterConfig};
pub use dispatch::{
    get_solid_color_painter, get_span_color_painter, get_span_mask_painter, get_span_painter,
    PlaneAlpha, SolidColorPainter, SpanColorPainter, SpanMaskPainter, SpanPainter,
};
pub use error::{PaintError, Result};
pub use glyph::{Glyph, GlyphSpan, RunDecoder};
pub use pixmap::{Pixmap, PixmapLayout, PixmapMut};

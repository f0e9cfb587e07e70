//! Run-length encoded glyph coverage.
//!
//! A [`Glyph`] stores, per row, an offset into a shared byte stream (or
//! nothing for an empty row). Each row is a sequence of one-byte run
//! headers whose low two bits select the run kind:
//!
//! | tag | kind         | length                           | payload       |
//! |-----|--------------|----------------------------------|---------------|
//! | 00  | extend       | `v >> 2` feeds the next run      | none          |
//! | 01  | transparent  | `(v >> 2) + 1 + (extend << 6)`   | none          |
//! | 10  | solid        | `(v >> 3) + 1 + (extend << 5)`   | none          |
//! | 11  | intermediate | `(v >> 3) + 1 + (extend << 5)`   | `len` bytes   |
//!
//! Bit 2 of a solid or intermediate header marks the end of the row; the
//! remaining columns are left untouched. A stream that runs out early ends
//! the row the same way.
//!
//! [`RunDecoder`] turns one row into [`GlyphSpan`]s after discarding
//! `skip_x` columns. The painting modes below consume those spans.

use crate::basics::{CoverType, COVER_FULL, COVER_NONE};
use crate::blend::{blend, expand};
use crate::dispatch::{SolidColorPainter, SpanColorPainter};
use crate::error::{PaintError, Result};

const TAG_EXTEND: u8 = 0;
const TAG_TRANSPARENT: u8 = 1;
const TAG_SOLID: u8 = 2;
const EOL_BIT: u8 = 4;

// ============================================================================
// Glyph
// ============================================================================

/// An immutable run-length encoded coverage shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    height: usize,
    rows: Vec<Option<usize>>,
    data: Vec<u8>,
}

impl Glyph {
    /// Build a glyph from per-row stream offsets and the stream itself.
    ///
    /// Fails if there is not exactly one entry per row or an offset points
    /// past the end of `data`.
    pub fn new(width: usize, height: usize, rows: Vec<Option<usize>>, data: Vec<u8>) -> Result<Self> {
        if rows.len() != height {
            return Err(PaintError::GlyphBounds(format!(
                "{} row offsets for a glyph of height {}",
                rows.len(),
                height
            )));
        }
        if let Some(bad) = rows.iter().flatten().find(|&&o| o >= data.len()) {
            return Err(PaintError::GlyphBounds(format!(
                "row offset {} outside a stream of {} bytes",
                bad,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rows,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Run stream of row `y`, or `None` if the row has no coverage.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        self.rows
            .get(y)
            .copied()
            .flatten()
            .map(|offset| &self.data[offset..])
    }

    /// Decode row `y`, skipping `skip_x` columns and emitting at most
    /// `width` more.
    pub fn decode_row(&self, y: usize, skip_x: usize, width: usize) -> RunDecoder<'_> {
        match self.row(y) {
            Some(stream) => RunDecoder::new(stream, skip_x, width),
            None => RunDecoder::new(&[], skip_x, 0),
        }
    }
}

// ============================================================================
// RunDecoder
// ============================================================================

/// One decoded stretch of a glyph row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSpan<'a> {
    /// Columns with zero coverage.
    Transparent(usize),
    /// Columns with full coverage.
    Solid(usize),
    /// Columns with explicit coverage, one byte each.
    Coverage(&'a [CoverType]),
}

impl GlyphSpan<'_> {
    /// Number of columns the span covers.
    pub fn len(&self) -> usize {
        match *self {
            GlyphSpan::Transparent(n) | GlyphSpan::Solid(n) => n,
            GlyphSpan::Coverage(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Transparent,
    Solid,
    Intermediate,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    kind: RunKind,
    len: usize,
    eol: bool,
    /// Start of the coverage bytes for intermediate runs.
    payload: usize,
}

/// Iterator over the spans of one glyph row.
#[derive(Debug, Clone)]
pub struct RunDecoder<'a> {
    stream: &'a [u8],
    pos: usize,
    skip: usize,
    remaining: usize,
    pending: Option<Run>,
    done: bool,
}

impl<'a> RunDecoder<'a> {
    /// Decode `stream`, discarding the first `skip_x` columns and emitting
    /// at most `width` columns after them.
    pub fn new(stream: &'a [u8], skip_x: usize, width: usize) -> Self {
        Self {
            stream,
            pos: 0,
            skip: skip_x,
            remaining: width,
            pending: None,
            done: width == 0,
        }
    }

    /// Read the next non-extend run header. `None` once the stream is
    /// exhausted.
    fn read_run(&mut self) -> Option<Run> {
        let mut extend = 0usize;
        loop {
            let v = *self.stream.get(self.pos)?;
            self.pos += 1;
            let tag = v & 3;
            if tag == TAG_EXTEND {
                extend = (v >> 2) as usize;
                continue;
            }
            if tag == TAG_TRANSPARENT {
                return Some(Run {
                    kind: RunKind::Transparent,
                    len: (v >> 2) as usize + 1 + (extend << 6),
                    eol: false,
                    payload: 0,
                });
            }
            let mut run = Run {
                kind: if tag == TAG_SOLID {
                    RunKind::Solid
                } else {
                    RunKind::Intermediate
                },
                len: (v >> 3) as usize + 1 + (extend << 5),
                eol: v & EOL_BIT != 0,
                payload: self.pos,
            };
            if run.kind == RunKind::Intermediate {
                let available = self.stream.len() - self.pos;
                if run.len > available {
                    // Truncated payload: keep what exists and end the row.
                    run.len = available;
                    run.eol = true;
                }
                self.pos += run.len;
            }
            return Some(run);
        }
    }

    /// Discard `skip` columns. Returns `false` if the row ended meanwhile.
    fn skip_columns(&mut self) -> bool {
        while self.skip > 0 {
            let Some(mut run) = self.read_run() else {
                return false;
            };
            if run.len > self.skip {
                run.len -= self.skip;
                if run.kind == RunKind::Intermediate {
                    run.payload += self.skip;
                }
                self.skip = 0;
                self.pending = Some(run);
                return true;
            }
            if run.eol {
                return false;
            }
            self.skip -= run.len;
        }
        true
    }
}

impl<'a> Iterator for RunDecoder<'a> {
    type Item = GlyphSpan<'a>;

    fn next(&mut self) -> Option<GlyphSpan<'a>> {
        if self.done {
            return None;
        }
        if self.skip > 0 && !self.skip_columns() {
            self.done = true;
            return None;
        }
        let run = match self.pending.take().or_else(|| self.read_run()) {
            Some(run) if run.len > 0 => run,
            _ => {
                self.done = true;
                return None;
            }
        };
        let len = run.len.min(self.remaining);
        self.remaining -= len;
        self.done = run.eol || self.remaining == 0;
        Some(match run.kind {
            RunKind::Transparent => GlyphSpan::Transparent(len),
            RunKind::Solid => GlyphSpan::Solid(len),
            RunKind::Intermediate => GlyphSpan::Coverage(&self.stream[run.payload..run.payload + len]),
        })
    }
}

// ============================================================================
// Painting modes
// ============================================================================

/// Accumulate coverage into a single-channel row.
///
/// Solid runs write 255. Explicit coverage is stored verbatim over a zero
/// byte and otherwise blended toward 255 by the coverage.
pub(crate) fn paint_row_mask<'a>(row: &mut [u8], spans: impl Iterator<Item = GlyphSpan<'a>>) {
    let mut x = 0;
    for span in spans {
        let len = span.len();
        match span {
            GlyphSpan::Transparent(_) => {}
            GlyphSpan::Solid(_) => row[x..x + len].fill(COVER_FULL),
            GlyphSpan::Coverage(cov) => {
                for (d, &a) in row[x..x + len].iter_mut().zip(cov) {
                    *d = if *d == COVER_NONE { a } else { blend(COVER_FULL, *d, expand(a)) };
                }
            }
        }
        x += len;
    }
}

/// Composite a colour into a pixel row along the glyph's coverage.
///
/// Solid runs use `fill`, which carries the colour's own alpha. Explicit
/// coverage goes through `through_mask`, which combines each coverage byte
/// with that alpha.
pub(crate) fn paint_row_color<'a>(
    row: &mut [u8],
    stride: usize,
    fill: &SolidColorPainter<'_>,
    through_mask: &SpanColorPainter<'_>,
    spans: impl Iterator<Item = GlyphSpan<'a>>,
) {
    let mut x = 0;
    for span in spans {
        let len = span.len();
        match span {
            GlyphSpan::Transparent(_) => {}
            GlyphSpan::Solid(_) => fill.paint(&mut row[x * stride..], len),
            GlyphSpan::Coverage(cov) => through_mask.paint(&mut row[x * stride..], cov, len),
        }
        x += len;
    }
}

// ============================================================================
// Tests
// ============================================================================

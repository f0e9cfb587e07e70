//! Foundation types and constants.
//!
//! The integer device rectangle used for all clipping, and the coverage
//! constants shared by the kernels and the glyph decoder.

// ============================================================================
// Cover (anti-aliasing) constants
// ============================================================================

/// The type used for anti-aliasing coverage values.
pub type CoverType = u8;

pub const COVER_NONE: CoverType = 0;
pub const COVER_FULL: CoverType = 0xFF;

// ============================================================================
// IRect
// ============================================================================

/// An integer rectangle in device space.
///
/// Half-open: `x0..x1` by `y0..y1`. A rectangle with `x1 <= x0` or
/// `y1 <= y0` covers no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl IRect {
    pub const EMPTY: IRect = IRect {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    /// A rectangle large enough to never clip anything.
    pub const INFINITE: IRect = IRect {
        x0: i32::MIN,
        y0: i32::MIN,
        x1: i32::MAX,
        y1: i32::MAX,
    };

    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle with origin `(x, y)` and the given size.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x.saturating_add_unsigned(width),
            y1: y.saturating_add_unsigned(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Width in pixels; zero for empty rectangles.
    pub fn width(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.x1 as i64 - self.x0 as i64) as u32
        }
    }

    /// Height in pixels; zero for empty rectangles.
    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (self.y1 as i64 - self.y0 as i64) as u32
        }
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is non-empty.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x1 > r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 > r.y1 {
            self.y1 = r.y1;
        }
        if self.x0 < r.x0 {
            self.x0 = r.x0;
        }
        if self.y0 < r.y0 {
            self.y0 = r.y0;
        }
        !self.is_empty()
    }

    /// The intersection of two rectangles. Empty results are normalized to
    /// [`IRect::EMPTY`] so that any two empty intersections compare equal.
    pub fn intersect(&self, r: &Self) -> Self {
        let mut out = *self;
        if out.clip(r) {
            out
        } else {
            Self::EMPTY
        }
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Returns `true` if `r` lies entirely inside this rectangle.
    /// Empty rectangles are contained everywhere.
    pub fn contains_rect(&self, r: &Self) -> bool {
        r.is_empty()
            || (r.x0 >= self.x0 && r.y0 >= self.y0 && r.x1 <= self.x1 && r.y1 <= self.y1)
    }
}

// ============================================================================
// Tests
// ============================================================================

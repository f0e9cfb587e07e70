//! Error type for painter selection and pixmap compositing.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaintError>;

/// Everything a fallible entry point can reject.
///
/// Each is reported before any destination byte is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    /// No kernel family serves this shape in the active [`PlotterConfig`].
    ///
    /// [`PlotterConfig`]: crate::PlotterConfig
    #[error("no {painter} painter for {color_channels} colour channels")]
    Unsupported {
        painter: &'static str,
        color_channels: usize,
    },

    #[error("channel count mismatch: destination has {dst}, source has {src}")]
    ChannelMismatch { dst: usize, src: usize },

    #[error("mask must have exactly one channel, got {0}")]
    MaskChannels(usize),

    #[error("colour value needs {expected} bytes, got {actual}")]
    ColorLength { expected: usize, actual: usize },

    #[error("invalid pixmap layout: {0}")]
    InvalidLayout(String),

    #[error("glyph region out of bounds: {0}")]
    GlyphBounds(String),
}

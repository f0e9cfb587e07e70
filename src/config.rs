//! Kernel family selection.
//!
//! Which channel-count specializations are available is a plain value,
//! [`PlotterConfig`], rather than a set of scattered compile-time switches.
//! The default reflects the crate features (`gray`, `rgb`, `cmyk`,
//! `generic`); tests and embedders can build any other set explicitly.

use std::fmt;

/// The kernel specialization serving a given colour-channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// No colour channels; the pixel is a single alpha sample.
    AlphaOnly,
    /// One colour channel.
    Gray,
    /// Three colour channels.
    Rgb,
    /// Four colour channels.
    Cmyk,
    /// Any colour-channel count, processed by the runtime-`n` loops.
    Generic,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::AlphaOnly => "alpha-only",
            Family::Gray => "gray",
            Family::Rgb => "rgb",
            Family::Cmyk => "cmyk",
            Family::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// The set of kernel families available to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlotterConfig {
    pub gray: bool,
    pub rgb: bool,
    pub cmyk: bool,
    pub generic: bool,
}

impl PlotterConfig {
    /// The families enabled by the crate's cargo features.
    pub const fn from_features() -> Self {
        Self {
            gray: cfg!(feature = "gray"),
            rgb: cfg!(feature = "rgb"),
            cmyk: cfg!(feature = "cmyk"),
            generic: cfg!(feature = "generic"),
        }
    }

    /// Every family.
    pub const fn all() -> Self {
        Self {
            gray: true,
            rgb: true,
            cmyk: true,
            generic: true,
        }
    }

    /// Only the runtime-`n` loops. Every colour-channel count is served,
    /// but by the generic family.
    pub const fn generic_only() -> Self {
        Self {
            gray: false,
            rgb: false,
            cmyk: false,
            generic: true,
        }
    }

    /// No colour families; only alpha-only shapes can be painted.
    pub const fn none() -> Self {
        Self {
            gray: false,
            rgb: false,
            cmyk: false,
            generic: false,
        }
    }

    pub fn with_gray(mut self, on: bool) -> Self {
        self.gray = on;
        self
    }

    pub fn with_rgb(mut self, on: bool) -> Self {
        self.rgb = on;
        self
    }

    pub fn with_cmyk(mut self, on: bool) -> Self {
        self.cmyk = on;
        self
    }

    pub fn with_generic(mut self, on: bool) -> Self {
        self.generic = on;
        self
    }

    /// The most specific family serving `color_channels`, or `None` when
    /// neither a specialization nor the generic fallback is enabled.
    pub fn family(&self, color_channels: usize) -> Option<Family> {
        let specialized = match color_channels {
            0 => return Some(Family::AlphaOnly),
            1 if self.gray => Some(Family::Gray),
            3 if self.rgb => Some(Family::Rgb),
            4 if self.cmyk => Some(Family::Cmyk),
            _ => None,
        };
        specialized.or(if self.generic {
            Some(Family::Generic)
        } else {
            None
        })
    }

    /// Returns `true` if some family serves `color_channels`.
    pub fn supports(&self, color_channels: usize) -> bool {
        self.family(color_channels).is_some()
    }
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self::from_features()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_prefers_specializations() {
        let c = PlotterConfig::all();
        assert_eq!(c.family(0), Some(Family::AlphaOnly));
        assert_eq!(c.family(1), Some(Family::Gray));
        assert_eq!(c.family(2), Some(Family::Generic));
        assert_eq!(c.family(3), Some(Family::Rgb));
        assert_eq!(c.family(4), Some(Family::Cmyk));
        assert_eq!(c.family(7), Some(Family::Generic));
    }

    #[test]
    fn test_generic_only() {
        let c = PlotterConfig::generic_only();
        for n in 1..10 {
            assert_eq!(c.family(n), Some(Family::Generic));
        }
    }

    #[test]
    fn test_missing_family_is_detectable() {
        let c = PlotterConfig::none().with_rgb(true);
        assert!(c.supports(3));
        assert!(!c.supports(1));
        assert!(!c.supports(4));
        assert!(!c.supports(5));
        assert!(c.supports(0));
    }

    #[test]
    fn test_builder_toggles() {
        let c = PlotterConfig::all().with_cmyk(false);
        assert_eq!(c.family(4), Some(Family::Generic));
        let c = c.with_generic(false);
        assert_eq!(c.family(4), None);
    }

    #[test]
    fn test_default_reflects_features() {
        assert_eq!(PlotterConfig::default(), PlotterConfig::from_features());
    }

    #[test]
    fn test_family_display() {
        assert_eq!(Family::Rgb.to_string(), "rgb");
        assert_eq!(Family::AlphaOnly.to_string(), "alpha-only");
    }
}

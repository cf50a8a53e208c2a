//! Aspect ratio table
//!
//! Fixed mapping from named ratios to pixel dimensions. The table is a
//! process-wide constant; an unrecognized selector falls back to
//! Landscape (16:9) rather than failing.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    Square,
    #[default]
    Landscape,
    Portrait,
    Standard,
    Widescreen,
}

impl AspectRatio {
    /// All named ratios, in menu order
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::Standard,
        AspectRatio::Widescreen,
    ];

    /// Pixel dimensions as (width, height)
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (512, 512),
            AspectRatio::Landscape => (768, 432),
            AspectRatio::Portrait => (432, 768),
            AspectRatio::Standard => (680, 512),
            AspectRatio::Widescreen => (896, 384),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "Square (1:1)",
            AspectRatio::Landscape => "Landscape (16:9)",
            AspectRatio::Portrait => "Portrait (9:16)",
            AspectRatio::Standard => "Standard (4:3)",
            AspectRatio::Widescreen => "Widescreen (21:9)",
        }
    }

    /// Resolve a selector by label, falling back to the default ratio
    pub fn parse(selector: &str) -> AspectRatio {
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.label().eq_ignore_ascii_case(selector))
            .unwrap_or_default()
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

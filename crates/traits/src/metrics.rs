//! MetricsProvider trait for abstracting glyph measurement.
//!
//! The layout engine never opens a font file. Everything it knows about a
//! glyph (advance, ink box, baseline offset, kerning) comes through this
//! trait, so the same parse can be measured against Bakoma Type 1 fonts,
//! a system font stack or a synthetic test provider.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Error type for building or configuring metrics providers.
///
/// Lookups themselves never fail: a provider substitutes a replacement
/// glyph for anything it cannot resolve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Size catalog for '{symbol}' must not be empty")]
    EmptyCatalog { symbol: String },

    #[error("Invalid metric '{name}': {value} (must be finite)")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("Metrics cache lock poisoned")]
    LockPoisoned,
}

/// Measurements of a single glyph, in points scaled by `dpi / 72`.
///
/// `height` and `iceberg` follow the Type 1 convention: `iceberg` is the
/// part of the glyph above the baseline, `height` the full ink height, so
/// the depth below the baseline is `height - iceberg`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlyphMetrics {
    pub advance: f32,
    pub width: f32,
    pub height: f32,
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
    pub iceberg: f32,
    pub slanted: bool,
}

impl GlyphMetrics {
    /// Returns a copy with every length multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            advance: self.advance * factor,
            width: self.width * factor,
            height: self.height * factor,
            xmin: self.xmin * factor,
            xmax: self.xmax * factor,
            ymin: self.ymin * factor,
            ymax: self.ymax * factor,
            iceberg: self.iceberg * factor,
            slanted: self.slanted,
        }
    }
}

/// Identifies one side of a kerning pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRef<'a> {
    pub font: &'a str,
    pub font_class: &'a str,
    pub symbol: &'a str,
    pub size: f32,
}

/// One entry of a size catalog: a glyph in a specific font that draws a
/// delimiter, radical or wide accent at a fixed size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizedGlyph {
    pub font: String,
    pub symbol: String,
}

impl SizedGlyph {
    pub fn new(font: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            symbol: symbol.into(),
        }
    }
}

/// A source of glyph metrics for the layout engine.
///
/// Symbols are passed as the parser saw them: a single character such as
/// `"x"` or `"("`, or a TeX control word such as `"\\alpha"`. Mapping those
/// names to code points or font-specific glyph indices is the provider's job.
///
/// # Contract
///
/// - Results are deterministic for identical arguments.
/// - Lookups never fail; unknown glyphs are substituted by the provider.
/// - Implementations are shared across threads by reference, hence the
///   `Send + Sync` bound.
///
/// # Example
///
/// ```ignore
/// let metrics = UniformMetrics::new();
/// let m = metrics.get_metrics("it", "it", "x", 12.0, 72.0);
/// assert_eq!(m.advance, 10.0);
/// ```
pub trait MetricsProvider: Send + Sync + Debug {
    /// Measure a glyph.
    ///
    /// # Arguments
    ///
    /// * `font` - Font family key (`rm`, `it`, `cal`, `ex`, ...)
    /// * `font_class` - The class used for letter selection (`rm`, `it`, `bf`)
    /// * `symbol` - A single character or a TeX control word
    /// * `size` - Font size in points
    /// * `dpi` - Output resolution
    fn get_metrics(
        &self,
        font: &str,
        font_class: &str,
        symbol: &str,
        size: f32,
        dpi: f32,
    ) -> GlyphMetrics;

    /// Pair kerning between two adjacent glyphs, `0.0` when unknown.
    fn get_kerning(&self, left: GlyphRef<'_>, right: GlyphRef<'_>, dpi: f32) -> f32;

    /// The x-height of `font` at `size`.
    fn get_xheight(&self, font: &str, size: f32, dpi: f32) -> f32;

    /// Thickness used for fraction bars, radicals and script clearances.
    fn get_underline_thickness(&self, size: f32, dpi: f32) -> f32;

    /// Pre-sized alternatives for a stretchy symbol, smallest first.
    ///
    /// Returning `None` lets the engine fall back to its built-in catalog.
    fn sized_alternatives(&self, _font: &str, _symbol: &str) -> Option<Vec<SizedGlyph>> {
        None
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<P: MetricsProvider + ?Sized> MetricsProvider for &P {
    fn get_metrics(
        &self,
        font: &str,
        font_class: &str,
        symbol: &str,
        size: f32,
        dpi: f32,
    ) -> GlyphMetrics {
        (**self).get_metrics(font, font_class, symbol, size, dpi)
    }

    fn get_kerning(&self, left: GlyphRef<'_>, right: GlyphRef<'_>, dpi: f32) -> f32 {
        (**self).get_kerning(left, right, dpi)
    }

    fn get_xheight(&self, font: &str, size: f32, dpi: f32) -> f32 {
        (**self).get_xheight(font, size, dpi)
    }

    fn get_underline_thickness(&self, size: f32, dpi: f32) -> f32 {
        (**self).get_underline_thickness(size, dpi)
    }

    fn sized_alternatives(&self, font: &str, symbol: &str) -> Option<Vec<SizedGlyph>> {
        (**self).sized_alternatives(font, symbol)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

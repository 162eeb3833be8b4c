//! A synthetic metrics provider.
//!
//! Every glyph shares one set of dimensions unless overridden per symbol.
//! Layout results against this provider can be computed by hand, which is
//! what the engine's tests and benchmarks rely on.

use crate::metrics::{GlyphMetrics, GlyphRef, MetricsError, MetricsProvider, SizedGlyph};
use std::collections::HashMap;

/// A metrics provider where every glyph is a box of the same size.
///
/// The default glyph is 10 units wide (advance and ink width), 10 units
/// above the baseline and nothing below it, with an x-height of 5 and a rule
/// thickness of 1. Font, size and dpi are ignored unless a reference size is
/// set, in which case every length scales with `size / reference_size`.
#[derive(Debug, Clone)]
pub struct UniformMetrics {
    glyph: GlyphMetrics,
    x_height: f32,
    rule_thickness: f32,
    kerning: f32,
    reference_size: Option<f32>,
    overrides: HashMap<String, GlyphMetrics>,
    catalogs: HashMap<String, Vec<SizedGlyph>>,
}

impl Default for UniformMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformMetrics {
    pub fn new() -> Self {
        Self {
            glyph: Self::box_metrics(10.0, 10.0, 0.0),
            x_height: 5.0,
            rule_thickness: 1.0,
            kerning: 0.0,
            reference_size: None,
            overrides: HashMap::new(),
            catalogs: HashMap::new(),
        }
    }

    /// Metrics for an upright box glyph of the given width, ascent and
    /// descent. The ink box coincides with the advance box.
    pub fn box_metrics(width: f32, ascent: f32, descent: f32) -> GlyphMetrics {
        GlyphMetrics {
            advance: width,
            width,
            height: ascent + descent,
            xmin: 0.0,
            xmax: width,
            ymin: -descent,
            ymax: ascent,
            iceberg: ascent,
            slanted: false,
        }
    }

    /// Replace the shared glyph box.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::InvalidDimension` for non-finite values.
    pub fn with_glyph(mut self, width: f32, ascent: f32, descent: f32) -> Result<Self, MetricsError> {
        check("width", width)?;
        check("ascent", ascent)?;
        check("descent", descent)?;
        self.glyph = Self::box_metrics(width, ascent, descent);
        Ok(self)
    }

    pub fn with_x_height(mut self, x_height: f32) -> Result<Self, MetricsError> {
        check("x_height", x_height)?;
        self.x_height = x_height;
        Ok(self)
    }

    pub fn with_rule_thickness(mut self, thickness: f32) -> Result<Self, MetricsError> {
        check("rule_thickness", thickness)?;
        self.rule_thickness = thickness;
        Ok(self)
    }

    /// Kerning reported for every glyph pair.
    pub fn with_kerning(mut self, kerning: f32) -> Result<Self, MetricsError> {
        check("kerning", kerning)?;
        self.kerning = kerning;
        Ok(self)
    }

    /// Scale every length by `size / reference_size`.
    pub fn with_reference_size(mut self, reference_size: f32) -> Result<Self, MetricsError> {
        if !reference_size.is_finite() || reference_size <= 0.0 {
            return Err(MetricsError::InvalidDimension {
                name: "reference_size",
                value: reference_size,
            });
        }
        self.reference_size = Some(reference_size);
        Ok(self)
    }

    /// Give one symbol its own metrics, regardless of font.
    pub fn with_symbol(mut self, symbol: impl Into<String>, metrics: GlyphMetrics) -> Self {
        self.overrides.insert(symbol.into(), metrics);
        self
    }

    /// Install a size catalog for a stretchy symbol, smallest entry first.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::EmptyCatalog` when `entries` is empty.
    pub fn with_catalog(
        mut self,
        symbol: impl Into<String>,
        entries: Vec<SizedGlyph>,
    ) -> Result<Self, MetricsError> {
        let symbol = symbol.into();
        if entries.is_empty() {
            return Err(MetricsError::EmptyCatalog { symbol });
        }
        self.catalogs.insert(symbol, entries);
        Ok(self)
    }

    fn scale(&self, size: f32) -> f32 {
        match self.reference_size {
            Some(reference) => size / reference,
            None => 1.0,
        }
    }
}

fn check(name: &'static str, value: f32) -> Result<(), MetricsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MetricsError::InvalidDimension { name, value })
    }
}

impl MetricsProvider for UniformMetrics {
    fn get_metrics(
        &self,
        _font: &str,
        _font_class: &str,
        symbol: &str,
        size: f32,
        _dpi: f32,
    ) -> GlyphMetrics {
        let base = self.overrides.get(symbol).unwrap_or(&self.glyph);
        base.scaled(self.scale(size))
    }

    fn get_kerning(&self, left: GlyphRef<'_>, right: GlyphRef<'_>, _dpi: f32) -> f32 {
        if left.font == right.font && left.size == right.size {
            self.kerning * self.scale(left.size)
        } else {
            0.0
        }
    }

    fn get_xheight(&self, _font: &str, size: f32, _dpi: f32) -> f32 {
        self.x_height * self.scale(size)
    }

    fn get_underline_thickness(&self, size: f32, _dpi: f32) -> f32 {
        self.rule_thickness * self.scale(size)
    }

    fn sized_alternatives(&self, _font: &str, symbol: &str) -> Option<Vec<SizedGlyph>> {
        self.catalogs.get(symbol).cloned()
    }

    fn name(&self) -> &'static str {
        "UniformMetrics"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_defaults() {
        let m = UniformMetrics::new();
        let g = m.get_metrics("it", "it", "x", 12.0, 72.0);
        assert_eq!(g.advance, 10.0);
        assert_eq!(g.width, 10.0);
        assert_eq!(g.iceberg, 10.0);
        assert_eq!(g.height, 10.0);
        assert_eq!(m.get_xheight("it", 12.0, 72.0), 5.0);
        assert_eq!(m.get_underline_thickness(12.0, 72.0), 1.0);
    }

    #[test]
    fn test_uniform_ignores_font_and_size() {
        let m = UniformMetrics::new();
        let a = m.get_metrics("rm", "rm", "a", 10.0, 72.0);
        let b = m.get_metrics("bf", "bf", "\\alpha", 24.0, 300.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniform_reference_size_scales() {
        let m = UniformMetrics::new().with_reference_size(10.0).unwrap();
        let g = m.get_metrics("it", "it", "x", 5.0, 72.0);
        assert_eq!(g.width, 5.0);
        assert_eq!(m.get_xheight("it", 20.0, 72.0), 10.0);
    }

    #[test]
    fn test_uniform_reference_size_rejects_zero() {
        let err = UniformMetrics::new().with_reference_size(0.0).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::InvalidDimension {
                name: "reference_size",
                ..
            }
        ));
    }

    #[test]
    fn test_uniform_with_glyph() {
        let m = UniformMetrics::new().with_glyph(6.0, 8.0, 2.0).unwrap();
        let g = m.get_metrics("it", "it", "y", 12.0, 72.0);
        assert_eq!(g.width, 6.0);
        assert_eq!(g.iceberg, 8.0);
        assert_eq!(g.height - g.iceberg, 2.0);
    }

    #[test]
    fn test_uniform_with_glyph_rejects_nan() {
        assert!(UniformMetrics::new().with_glyph(f32::NAN, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_uniform_symbol_override() {
        let big = UniformMetrics::box_metrics(4.0, 20.0, 5.0);
        let m = UniformMetrics::new().with_symbol("(", big);
        assert_eq!(m.get_metrics("rm", "rm", "(", 12.0, 72.0), big);
        assert_eq!(m.get_metrics("rm", "rm", ")", 12.0, 72.0).width, 10.0);
    }

    #[test]
    fn test_uniform_kerning_same_font_only() {
        let m = UniformMetrics::new().with_kerning(-1.5).unwrap();
        let a = GlyphRef {
            font: "it",
            font_class: "it",
            symbol: "A",
            size: 12.0,
        };
        let v = GlyphRef { symbol: "V", ..a };
        let other = GlyphRef { font: "rm", ..v };
        assert_eq!(m.get_kerning(a, v, 72.0), -1.5);
        assert_eq!(m.get_kerning(a, other, 72.0), 0.0);
    }

    #[test]
    fn test_uniform_catalog() {
        let m = UniformMetrics::new()
            .with_catalog(
                "(",
                vec![SizedGlyph::new("rm", "("), SizedGlyph::new("ex", "\u{b3}")],
            )
            .unwrap();
        let alts = m.sized_alternatives("rm", "(").unwrap();
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[1].font, "ex");
        assert!(m.sized_alternatives("rm", "[").is_none());
    }

    #[test]
    fn test_uniform_empty_catalog_rejected() {
        let err = UniformMetrics::new().with_catalog("(", vec![]).unwrap_err();
        assert_eq!(
            err,
            MetricsError::EmptyCatalog {
                symbol: "(".to_string()
            }
        );
    }

    #[test]
    fn test_uniform_name() {
        assert_eq!(UniformMetrics::new().name(), "UniformMetrics");
    }
}

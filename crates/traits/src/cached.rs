//! Memoizing wrapper for metrics providers.

use crate::metrics::{GlyphMetrics, GlyphRef, MetricsError, MetricsProvider, SizedGlyph};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MetricsKey {
    font: String,
    font_class: String,
    symbol: String,
    size: u32,
    dpi: u32,
}

/// Caches `get_metrics` results of an inner provider.
///
/// Font-backed providers pay for outline loading on every lookup; a single
/// label queries the same handful of glyphs many times (kerning, the em
/// width used by spacing commands, shrunk scripts). Entries are keyed by
/// `(font, class, symbol, size bits, dpi bits)`.
///
/// A poisoned lock never fails a lookup, the call just bypasses the cache.
#[derive(Debug)]
pub struct CachedMetrics<P> {
    inner: P,
    metrics: RwLock<HashMap<MetricsKey, GlyphMetrics>>,
}

impl<P: MetricsProvider> CachedMetrics<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            metrics: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached glyph measurements.
    pub fn len(&self) -> usize {
        self.metrics.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached measurement.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::LockPoisoned` if a writer panicked.
    pub fn clear(&self) -> Result<(), MetricsError> {
        let mut metrics = self
            .metrics
            .write()
            .map_err(|_| MetricsError::LockPoisoned)?;
        metrics.clear();
        Ok(())
    }
}

impl<P: MetricsProvider> MetricsProvider for CachedMetrics<P> {
    fn get_metrics(
        &self,
        font: &str,
        font_class: &str,
        symbol: &str,
        size: f32,
        dpi: f32,
    ) -> GlyphMetrics {
        let key = MetricsKey {
            font: font.to_string(),
            font_class: font_class.to_string(),
            symbol: symbol.to_string(),
            size: size.to_bits(),
            dpi: dpi.to_bits(),
        };

        if let Some(m) = self
            .metrics
            .read()
            .ok()
            .and_then(|cache| cache.get(&key).copied())
        {
            return m;
        }

        let m = self.inner.get_metrics(font, font_class, symbol, size, dpi);
        if let Ok(mut cache) = self.metrics.write() {
            cache.insert(key, m);
        } else {
            log::warn!("metrics cache lock poisoned, '{}' not cached", symbol);
        }
        m
    }

    fn get_kerning(&self, left: GlyphRef<'_>, right: GlyphRef<'_>, dpi: f32) -> f32 {
        self.inner.get_kerning(left, right, dpi)
    }

    fn get_xheight(&self, font: &str, size: f32, dpi: f32) -> f32 {
        self.inner.get_xheight(font, size, dpi)
    }

    fn get_underline_thickness(&self, size: f32, dpi: f32) -> f32 {
        self.inner.get_underline_thickness(size, dpi)
    }

    fn sized_alternatives(&self, font: &str, symbol: &str) -> Option<Vec<SizedGlyph>> {
        self.inner.sized_alternatives(font, symbol)
    }

    fn name(&self) -> &'static str {
        "CachedMetrics"
    }
}

pub mod cached;
pub mod metrics;
pub mod uniform;

pub use cached::CachedMetrics;
pub use metrics::{GlyphMetrics, GlyphRef, MetricsError, MetricsProvider, SizedGlyph};
pub use uniform::UniformMetrics;

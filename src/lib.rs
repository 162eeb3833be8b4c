//! Mathtext: TeX math-mode strings laid out as boxes and glue.
//!
//! The workspace is split the same way the pipeline runs:
//! - `mathtext-traits`: the glyph metrics contract and stock providers
//! - `mathtext-layout`: nodes, packing, shrinking and auto-sized glyphs
//! - `mathtext-parser`: the grammar that builds the tree while it parses
//! - `mathtext-render-core`: the visitor contract and the ship-out walker
//!
//! This crate ties them together behind [`MathText`].

mod config;
mod engine;
mod error;

pub use config::MathTextConfig;
pub use engine::{MathText, is_tex};
pub use error::MathTextError;

pub use mathtext_layout::{GlyphInfo, List, ListKind, Node};
pub use mathtext_parser::{ParseError, ParseErrorKind, ParserConfig, unicode_for};
pub use mathtext_render_core::{
    DrawCommand, DrawList, InkBounds, RenderError, RenderVisitor, render, ship,
};
pub use mathtext_traits::{
    CachedMetrics, GlyphMetrics, GlyphRef, MetricsError, MetricsProvider, SizedGlyph,
    UniformMetrics,
};

//! The leaves of the box model and the `Node` union that holds them.

use crate::config::{GLUE_ORDERS, NUM_SIZE_LEVELS, SHRINK_FACTOR};
use crate::list::List;
use crate::state::State;
use mathtext_traits::{GlyphMetrics, GlyphRef, MetricsProvider};
use serde::{Deserialize, Serialize};

/// Advances a node's size level and reports whether it should still scale.
fn next_level(level: &mut u8) -> bool {
    *level = level.saturating_add(1);
    *level < NUM_SIZE_LEVELS
}

/// Everything a renderer needs to draw one glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphInfo {
    pub font: String,
    pub font_class: String,
    pub symbol: String,
    pub fontsize: f32,
    pub dpi: f32,
    pub metrics: GlyphMetrics,
}

/// A single glyph.
///
/// Plain chars use the advance box horizontally and the Type 1 iceberg
/// vertically. Accent chars use the tight ink box instead so they can be
/// stacked over their argument without extra space.
#[derive(Debug, Clone, PartialEq)]
pub struct Char {
    pub glyph: GlyphInfo,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    accent: bool,
    size_level: u8,
}

impl Char {
    pub fn new(symbol: &str, state: &State, metrics: &dyn MetricsProvider) -> Self {
        let glyph = Self::measure(symbol, state, metrics);
        let m = &glyph.metrics;
        let width = if symbol == " " { m.advance } else { m.width };
        let height = m.iceberg;
        let depth = m.height - m.iceberg;
        Self {
            glyph,
            width,
            height,
            depth,
            accent: false,
            size_level: 0,
        }
    }

    pub fn accent(symbol: &str, state: &State, metrics: &dyn MetricsProvider) -> Self {
        let glyph = Self::measure(symbol, state, metrics);
        let m = &glyph.metrics;
        let width = m.xmax - m.xmin;
        let height = m.ymax - m.ymin;
        Self {
            glyph,
            width,
            height,
            depth: 0.0,
            accent: true,
            size_level: 0,
        }
    }

    fn measure(symbol: &str, state: &State, metrics: &dyn MetricsProvider) -> GlyphInfo {
        let m = metrics.get_metrics(
            &state.font,
            &state.font_class,
            symbol,
            state.fontsize,
            state.dpi,
        );
        GlyphInfo {
            font: state.font.clone(),
            font_class: state.font_class.clone(),
            symbol: symbol.to_string(),
            fontsize: state.fontsize,
            dpi: state.dpi,
            metrics: m,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.glyph.symbol
    }

    pub fn is_accent(&self) -> bool {
        self.accent
    }

    pub fn is_slanted(&self) -> bool {
        self.glyph.metrics.slanted
    }

    /// Space to insert after this glyph: the side bearing between the
    /// advance and the measured width, plus pair kerning when the next node
    /// is also a glyph.
    ///
    /// The advance is the one measured at construction, so a glyph that has
    /// been shrunk reports the shortfall against its original advance.
    pub fn kerning(&self, next: Option<&Node>, metrics: &dyn MetricsProvider) -> f32 {
        let mut advance = self.glyph.metrics.advance - self.width;
        if let Some(Node::Char(next)) = next {
            advance += metrics.get_kerning(self.glyph_ref(), next.glyph_ref(), self.glyph.dpi);
        }
        advance
    }

    fn glyph_ref(&self) -> GlyphRef<'_> {
        GlyphRef {
            font: &self.glyph.font,
            font_class: &self.glyph.font_class,
            symbol: &self.glyph.symbol,
            size: self.glyph.fontsize,
        }
    }

    fn shrink(&mut self) {
        if !next_level(&mut self.size_level) {
            return;
        }
        self.glyph.fontsize *= SHRINK_FACTOR;
        if self.accent {
            // Accents track their ink box, which is re-measured at the new size.
            self.glyph.metrics = self.glyph.metrics.scaled(SHRINK_FACTOR);
            let m = &self.glyph.metrics;
            self.width = m.xmax - m.xmin;
            self.height = m.ymax - m.ymin;
        } else {
            self.width *= SHRINK_FACTOR;
            self.height *= SHRINK_FACTOR;
            self.depth *= SHRINK_FACTOR;
        }
    }
}

/// Fixed space along the parent list's axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Kern {
    pub width: f32,
    size_level: u8,
}

impl Kern {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            size_level: 0,
        }
    }

    fn shrink(&mut self) {
        if next_level(&mut self.size_level) {
            self.width *= SHRINK_FACTOR;
        }
    }
}

/// A solid rectangle.
///
/// An infinite dimension is "running" and takes the size of the enclosing
/// list when shipped out.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    size_level: u8,
}

impl Rule {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            size_level: 0,
        }
    }

    /// A horizontal rule spanning its Vlist, centered on the baseline.
    pub fn hrule(thickness: f32) -> Self {
        Self::new(f32::INFINITY, thickness * 0.5, thickness * 0.5)
    }

    fn shrink(&mut self) {
        if next_level(&mut self.size_level) {
            self.width *= SHRINK_FACTOR;
            self.height *= SHRINK_FACTOR;
            self.depth *= SHRINK_FACTOR;
        }
    }
}

/// Natural size plus stretchability and shrinkability of a glue item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlueSpec {
    pub width: f32,
    pub stretch: f32,
    pub stretch_order: usize,
    pub shrink: f32,
    pub shrink_order: usize,
}

/// Elastic space. Only the list that directly contains it distributes
/// leftover space onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct Glue {
    pub spec: GlueSpec,
    size_level: u8,
}

impl Glue {
    pub fn new(spec: GlueSpec) -> Self {
        debug_assert!(spec.stretch_order < GLUE_ORDERS && spec.shrink_order < GLUE_ORDERS);
        Self {
            spec,
            size_level: 0,
        }
    }

    /// `\vfill`-style glue: stretches at order fill, never shrinks.
    pub fn fill() -> Self {
        Self::new(GlueSpec {
            width: 0.0,
            stretch: 1.0,
            stretch_order: 2,
            shrink: 0.0,
            shrink_order: 0,
        })
    }

    /// `\hss`-style glue used for centering: stretches and shrinks at
    /// order fil.
    pub fn ss() -> Self {
        Self::new(GlueSpec {
            width: 0.0,
            stretch: 1.0,
            stretch_order: 1,
            shrink: -1.0,
            shrink_order: 1,
        })
    }

    fn shrink(&mut self) {
        if next_level(&mut self.size_level) && self.spec.width != 0.0 {
            self.spec.width *= SHRINK_FACTOR;
        }
    }
}

/// An invisible box with explicit dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyBox {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    size_level: u8,
}

impl EmptyBox {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            size_level: 0,
        }
    }

    /// Horizontal spacer.
    pub fn hbox(width: f32) -> Self {
        Self::new(width, 0.0, 0.0)
    }

    /// Vertical spacer.
    pub fn vbox(height: f32, depth: f32) -> Self {
        Self::new(0.0, height, depth)
    }

    fn shrink(&mut self) {
        if next_level(&mut self.size_level) {
            self.width *= SHRINK_FACTOR;
            self.height *= SHRINK_FACTOR;
            self.depth *= SHRINK_FACTOR;
        }
    }
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Char(Char),
    Kern(Kern),
    Rule(Rule),
    Glue(Glue),
    Empty(EmptyBox),
    Hlist(List),
    Vlist(List),
}

impl Node {
    pub fn width(&self) -> f32 {
        match self {
            Node::Char(c) => c.width,
            Node::Kern(k) => k.width,
            Node::Rule(r) => r.width,
            Node::Glue(g) => g.spec.width,
            Node::Empty(e) => e.width,
            Node::Hlist(l) | Node::Vlist(l) => l.width,
        }
    }

    pub fn height(&self) -> f32 {
        match self {
            Node::Char(c) => c.height,
            Node::Rule(r) => r.height,
            Node::Empty(e) => e.height,
            Node::Hlist(l) | Node::Vlist(l) => l.height,
            Node::Kern(_) | Node::Glue(_) => 0.0,
        }
    }

    pub fn depth(&self) -> f32 {
        match self {
            Node::Char(c) => c.depth,
            Node::Rule(r) => r.depth,
            Node::Empty(e) => e.depth,
            Node::Hlist(l) | Node::Vlist(l) => l.depth,
            Node::Kern(_) | Node::Glue(_) => 0.0,
        }
    }

    /// Baseline displacement of a list inside its parent, `0.0` for leaves.
    pub fn shift_amount(&self) -> f32 {
        match self {
            Node::Hlist(l) | Node::Vlist(l) => l.shift_amount,
            _ => 0.0,
        }
    }

    /// Move the node one script level down.
    pub fn shrink(&mut self) {
        match self {
            Node::Char(c) => c.shrink(),
            Node::Kern(k) => k.shrink(),
            Node::Rule(r) => r.shrink(),
            Node::Glue(g) => g.shrink(),
            Node::Empty(e) => e.shrink(),
            Node::Hlist(l) | Node::Vlist(l) => l.shrink(),
        }
    }

    /// See [`Char::kerning`]; every other node contributes nothing.
    pub fn kerning(&self, next: Option<&Node>, metrics: &dyn MetricsProvider) -> f32 {
        match self {
            Node::Char(c) => c.kerning(next, metrics),
            _ => 0.0,
        }
    }

    pub fn as_char(&self) -> Option<&Char> {
        match self {
            Node::Char(c) => Some(c),
            _ => None,
        }
    }

    /// The list behind an `Hlist` or `Vlist` node.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::Hlist(l) | Node::Vlist(l) => Some(l),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{state, uniform};
    use mathtext_traits::UniformMetrics;

    #[test]
    fn test_char_dimensions() {
        let metrics = UniformMetrics::new().with_glyph(8.0, 6.0, 2.0).unwrap();
        let c = Char::new("g", &state(), &metrics);
        assert_eq!(c.width, 8.0);
        assert_eq!(c.height, 6.0);
        assert_eq!(c.depth, 2.0);
        assert!(!c.is_accent());
    }

    #[test]
    fn test_space_uses_advance() {
        let mut m = UniformMetrics::box_metrics(10.0, 10.0, 0.0);
        m.width = 0.0;
        let metrics = UniformMetrics::new().with_symbol(" ", m);
        let c = Char::new(" ", &state(), &metrics);
        assert_eq!(c.width, 10.0);
    }

    #[test]
    fn test_accent_uses_ink_box() {
        let m = GlyphMetrics {
            advance: 10.0,
            width: 10.0,
            height: 3.0,
            xmin: 2.0,
            xmax: 7.0,
            ymin: 6.0,
            ymax: 9.0,
            iceberg: 9.0,
            slanted: false,
        };
        let metrics = UniformMetrics::new().with_symbol("\\circumflexaccent", m);
        let c = Char::accent("\\circumflexaccent", &state(), &metrics);
        assert_eq!(c.width, 5.0);
        assert_eq!(c.height, 3.0);
        assert_eq!(c.depth, 0.0);
        assert!(c.is_accent());
    }

    #[test]
    fn test_char_shrink_scales_but_keeps_advance() {
        let metrics = uniform();
        let mut node = Node::Char(Char::new("x", &state(), &metrics));
        node.shrink();
        assert!((node.width() - 7.0).abs() < 1e-5);
        assert!((node.kerning(None, &metrics) - 3.0).abs() < 1e-5);
        let c = node.as_char().unwrap();
        assert!((c.glyph.fontsize - 12.0 * SHRINK_FACTOR).abs() < 1e-5);
    }

    #[test]
    fn test_shrink_stops_after_size_levels() {
        let mut node = Node::Kern(Kern::new(100.0));
        for _ in 0..10 {
            node.shrink();
        }
        let expected = 100.0 * SHRINK_FACTOR.powi(NUM_SIZE_LEVELS as i32 - 1);
        assert!((node.width() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_kerning_adds_pair_kern_between_chars() {
        let metrics = UniformMetrics::new().with_kerning(-2.0).unwrap();
        let a = Node::Char(Char::new("A", &state(), &metrics));
        let v = Node::Char(Char::new("V", &state(), &metrics));
        assert_eq!(a.kerning(Some(&v), &metrics), -2.0);
        assert_eq!(a.kerning(Some(&Node::Kern(Kern::new(1.0))), &metrics), 0.0);
        assert_eq!(Node::Kern(Kern::new(1.0)).kerning(Some(&v), &metrics), 0.0);
    }

    #[test]
    fn test_hrule_is_running() {
        let r = Rule::hrule(2.0);
        assert!(r.width.is_infinite());
        assert_eq!(r.height, 1.0);
        assert_eq!(r.depth, 1.0);
    }

    #[test]
    fn test_glue_shrink_keeps_zero_width() {
        let mut g = Node::Glue(Glue::ss());
        g.shrink();
        assert_eq!(g.width(), 0.0);
        if let Node::Glue(g) = g {
            assert_eq!(g.spec.stretch, 1.0);
            assert_eq!(g.spec.shrink, -1.0);
        }
    }

    #[test]
    fn test_empty_box_constructors() {
        let h = EmptyBox::hbox(3.0);
        assert_eq!((h.width, h.height, h.depth), (3.0, 0.0, 0.0));
        let v = EmptyBox::vbox(0.0, 4.0);
        assert_eq!((v.width, v.height, v.depth), (0.0, 0.0, 4.0));
    }
}

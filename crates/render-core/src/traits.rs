use crate::error::RenderError;
use mathtext_layout::GlyphInfo;

/// A drawing backend that receives a shipped-out layout tree.
///
/// Coordinates are in the layout's units with the y axis growing downward.
/// Glyphs are positioned by their baseline origin.
pub trait RenderVisitor {
    /// Called once, before anything is drawn, with the root box dimensions.
    fn set_canvas_size(&mut self, width: f32, height: f32, depth: f32) -> Result<(), RenderError>;

    fn render_glyph(&mut self, x: f32, y: f32, glyph: &GlyphInfo) -> Result<(), RenderError>;

    /// A filled rectangle from the top-left corner `(x1, y1)` to the
    /// bottom-right corner `(x2, y2)`.
    fn render_rect_filled(&mut self, x1: f32, y1: f32, x2: f32, y2: f32)
    -> Result<(), RenderError>;
}

impl<V: RenderVisitor + ?Sized> RenderVisitor for &mut V {
    fn set_canvas_size(&mut self, width: f32, height: f32, depth: f32) -> Result<(), RenderError> {
        (**self).set_canvas_size(width, height, depth)
    }

    fn render_glyph(&mut self, x: f32, y: f32, glyph: &GlyphInfo) -> Result<(), RenderError> {
        (**self).render_glyph(x, y, glyph)
    }

    fn render_rect_filled(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Result<(), RenderError> {
        (**self).render_rect_filled(x1, y1, x2, y2)
    }
}

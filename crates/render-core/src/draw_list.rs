//! A visitor that records what it is asked to draw.

use crate::error::RenderError;
use crate::traits::RenderVisitor;
use crate::utils::glyph_ink_box;
use mathtext_layout::GlyphInfo;
use serde::{Deserialize, Serialize};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DrawCommand {
    Glyph { x: f32, y: f32, glyph: GlyphInfo },
    Rect { x1: f32, y1: f32, x2: f32, y2: f32 },
}

/// Axis-aligned box in canvas coordinates, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InkBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl InkBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    fn union(self, other: InkBounds) -> InkBounds {
        InkBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Records every glyph and rectangle in the order they were shipped.
///
/// Useful as a sizing pass before drawing for real, and for inspecting
/// layout output in tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    canvas: Option<(f32, f32, f32)>,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width, height and depth passed to `set_canvas_size`, if it was called.
    pub fn canvas(&self) -> Option<(f32, f32, f32)> {
        self.canvas
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn glyph_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Glyph { .. }))
            .count()
    }

    /// The union of every glyph's ink box and every rectangle, or `None`
    /// when nothing was drawn.
    pub fn bounds(&self) -> Option<InkBounds> {
        self.commands
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Glyph { x, y, glyph } => glyph_ink_box(*x, *y, glyph),
                DrawCommand::Rect { x1, y1, x2, y2 } => InkBounds {
                    min_x: x1.min(*x2),
                    min_y: y1.min(*y2),
                    max_x: x1.max(*x2),
                    max_y: y1.max(*y2),
                },
            })
            .reduce(InkBounds::union)
    }
}

impl RenderVisitor for DrawList {
    fn set_canvas_size(&mut self, width: f32, height: f32, depth: f32) -> Result<(), RenderError> {
        self.canvas = Some((width, height, depth));
        Ok(())
    }

    fn render_glyph(&mut self, x: f32, y: f32, glyph: &GlyphInfo) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Glyph {
            x,
            y,
            glyph: glyph.clone(),
        });
        Ok(())
    }

    fn render_rect_filled(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Rect { x1, y1, x2, y2 });
        Ok(())
    }
}

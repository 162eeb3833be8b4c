use crate::draw_list::InkBounds;
use mathtext_layout::GlyphInfo;

/// The ink box of a glyph drawn with its baseline origin at `(x, y)`.
pub fn glyph_ink_box(x: f32, y: f32, glyph: &GlyphInfo) -> InkBounds {
    let m = &glyph.metrics;
    InkBounds {
        min_x: x + m.xmin,
        min_y: y - m.ymax,
        max_x: x + m.xmax,
        max_y: y - m.ymin,
    }
}

/// Convert a y-down canvas coordinate to a y-up one (PDF and most vector
/// formats), given the full canvas height.
pub fn flip_y(y: f32, canvas_height: f32) -> f32 {
    canvas_height - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_y() {
        assert_eq!(flip_y(0.0, 20.0), 20.0);
        assert_eq!(flip_y(15.0, 20.0), 5.0);
    }
}

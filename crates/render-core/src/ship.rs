//! TeX's ship-out: walk a packed tree and hand every glyph and rule to a
//! visitor at its final position.

use crate::error::RenderError;
use crate::traits::RenderVisitor;
use mathtext_layout::{Char, Glue, GlueSign, List, Node};

/// Draw `root` on a canvas sized to its box, with the top-left corner at the
/// origin.
pub fn render<V: RenderVisitor + ?Sized>(visitor: &mut V, root: &Node) -> Result<(), RenderError> {
    visitor.set_canvas_size(root.width(), root.height(), root.depth())?;
    ship(visitor, 0.0, 0.0, root)
}

/// Draw `root` with the top of its box at `oy` and its left edge at `ox`.
///
/// The root baseline ends up at `oy + root.height()`.
pub fn ship<V: RenderVisitor + ?Sized>(
    visitor: &mut V,
    ox: f32,
    oy: f32,
    root: &Node,
) -> Result<(), RenderError> {
    let mut shipper = Shipper {
        visitor,
        cur_h: 0.0,
        cur_v: 0.0,
        off_h: ox,
        off_v: oy + root.height(),
        glyphs: 0,
        rules: 0,
    };
    match root {
        Node::Hlist(list) => shipper.hlist_out(list)?,
        Node::Vlist(list) => shipper.vlist_out(list)?,
        // A bare leaf is shipped as if it were the only child of an Hlist.
        leaf => {
            let wrapper = List::hbox(vec![leaf.clone()]);
            shipper.hlist_out(&wrapper)?;
        }
    }
    log::debug!(
        "shipped {} glyphs and {} rules",
        shipper.glyphs,
        shipper.rules
    );
    Ok(())
}

struct Shipper<'v, V: ?Sized> {
    visitor: &'v mut V,
    cur_h: f32,
    cur_v: f32,
    off_h: f32,
    off_v: f32,
    glyphs: usize,
    rules: usize,
}

/// The extra space a glue item receives from its list's glue setting.
fn glue_share(list: &List, glue: &Glue) -> f32 {
    let spec = &glue.spec;
    match list.glue_sign {
        GlueSign::Natural => 0.0,
        GlueSign::Stretch if spec.stretch_order == list.glue_order => {
            list.glue_set * spec.stretch
        }
        GlueSign::Shrink if spec.shrink_order == list.glue_order => list.glue_set * spec.shrink,
        _ => 0.0,
    }
}

impl<V: RenderVisitor + ?Sized> Shipper<'_, V> {
    fn glyph(&mut self, c: &Char, x: f32, y: f32) -> Result<(), RenderError> {
        let (x, y) = if c.is_accent() {
            let m = &c.glyph.metrics;
            (x - m.xmin, y + m.ymin)
        } else {
            (x, y)
        };
        if !x.is_finite() || !y.is_finite() {
            return Err(RenderError::NonFinite { what: "glyph", x, y });
        }
        self.glyphs += 1;
        self.visitor.render_glyph(x, y, &c.glyph)
    }

    /// A rule whose bottom edge sits at `bottom`.
    fn rect(&mut self, x: f32, bottom: f32, width: f32, height: f32) -> Result<(), RenderError> {
        if width <= 0.0 || height <= 0.0 {
            return Ok(());
        }
        if !x.is_finite() || !bottom.is_finite() {
            return Err(RenderError::NonFinite {
                what: "rule",
                x,
                y: bottom,
            });
        }
        self.rules += 1;
        self.visitor
            .render_rect_filled(x, bottom - height, x + width, bottom)
    }

    fn hlist_out(&mut self, list: &List) -> Result<(), RenderError> {
        let base_line = self.cur_v;

        for child in &list.children {
            match child {
                Node::Char(c) => {
                    self.glyph(c, self.cur_h + self.off_h, self.cur_v + self.off_v)?;
                    self.cur_h += c.width;
                }
                Node::Kern(k) => self.cur_h += k.width,
                Node::Glue(g) => self.cur_h += g.spec.width + glue_share(list, g),
                Node::Empty(e) => self.cur_h += e.width,
                Node::Rule(r) => {
                    let height = if r.height.is_infinite() { list.height } else { r.height };
                    let depth = if r.depth.is_infinite() { list.depth } else { r.depth };
                    let width = if r.width.is_infinite() { list.width } else { r.width };
                    self.rect(
                        self.cur_h + self.off_h,
                        base_line + depth + self.off_v,
                        width,
                        height + depth,
                    )?;
                    self.cur_h += width;
                }
                Node::Hlist(inner) | Node::Vlist(inner) => {
                    if inner.children.is_empty() {
                        self.cur_h += inner.width;
                        continue;
                    }
                    let edge = self.cur_h;
                    self.cur_v = base_line + inner.shift_amount;
                    if matches!(child, Node::Hlist(_)) {
                        self.hlist_out(inner)?;
                    } else {
                        self.vlist_out(inner)?;
                    }
                    self.cur_h = edge + inner.width;
                    self.cur_v = base_line;
                }
            }
        }
        Ok(())
    }

    fn vlist_out(&mut self, list: &List) -> Result<(), RenderError> {
        self.cur_v -= list.height;
        let left_edge = self.cur_h;

        for child in &list.children {
            match child {
                Node::Kern(k) => self.cur_v += k.width,
                Node::Glue(g) => self.cur_v += g.spec.width + glue_share(list, g),
                Node::Empty(e) => self.cur_v += e.height + e.depth,
                Node::Rule(r) => {
                    let width = if r.width.is_infinite() { list.width } else { r.width };
                    let thickness = r.height + r.depth;
                    self.cur_v += thickness;
                    self.rect(
                        self.cur_h + self.off_h,
                        self.cur_v + self.off_v,
                        width,
                        thickness,
                    )?;
                }
                // Glyphs are not expected directly in a vertical list; stack
                // them like any other box.
                Node::Char(c) => {
                    self.cur_v += c.height;
                    self.glyph(c, self.cur_h + self.off_h, self.cur_v + self.off_v)?;
                    self.cur_v += c.depth;
                }
                Node::Hlist(inner) | Node::Vlist(inner) => {
                    if inner.children.is_empty() {
                        self.cur_v += inner.height + inner.depth;
                        continue;
                    }
                    self.cur_v += inner.height;
                    self.cur_h = left_edge + inner.shift_amount;
                    let save_v = self.cur_v;
                    if matches!(child, Node::Hlist(_)) {
                        self.hlist_out(inner)?;
                    } else {
                        self.vlist_out(inner)?;
                    }
                    self.cur_v = save_v + inner.depth;
                    self.cur_h = left_edge;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::{DrawCommand, DrawList};
    use mathtext_layout::{EmptyBox, Kern, Rule, State};
    use mathtext_traits::{GlyphMetrics, UniformMetrics};

    fn state() -> State {
        State::new("it", 12.0, 72.0)
    }

    fn glyph(symbol: &str, metrics: &UniformMetrics) -> Node {
        Node::Char(Char::new(symbol, &state(), metrics))
    }

    #[test]
    fn test_hlist_places_glyphs_on_baseline() {
        let _ = env_logger::builder().is_test(true).try_init();
        let metrics = UniformMetrics::new();
        let root = Node::Hlist(List::hlist(
            vec![glyph("a", &metrics), glyph("b", &metrics)],
            true,
            &metrics,
        ));
        let mut out = DrawList::new();
        render(&mut out, &root).unwrap();

        assert_eq!(out.canvas(), Some((20.0, 10.0, 0.0)));
        let positions: Vec<(f32, f32)> = out
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Glyph { x, y, .. } => Some((*x, *y)),
                DrawCommand::Rect { .. } => None,
            })
            .collect();
        assert_eq!(positions, vec![(0.0, 10.0), (10.0, 10.0)]);
    }

    #[test]
    fn test_ship_offsets_origin() {
        let metrics = UniformMetrics::new();
        let root = Node::Hlist(List::hlist(vec![glyph("a", &metrics)], true, &metrics));
        let mut out = DrawList::new();
        ship(&mut out, 5.0, 3.0, &root).unwrap();
        assert!(matches!(
            out.commands()[0],
            DrawCommand::Glyph { x, y, .. } if x == 5.0 && y == 13.0
        ));
    }

    #[test]
    fn test_shifted_child_list() {
        let metrics = UniformMetrics::new();
        let mut inner = List::hlist(vec![glyph("x", &metrics)], true, &metrics);
        inner.shift_amount = -4.0;
        let root = Node::Hlist(List::hbox(vec![
            Node::Kern(Kern::new(2.0)),
            Node::Hlist(inner),
        ]));
        let mut out = DrawList::new();
        render(&mut out, &root).unwrap();
        // root height is 14, so the baseline is at 14 and the raised glyph at 10
        assert!(matches!(
            out.commands()[0],
            DrawCommand::Glyph { x, y, .. } if x == 2.0 && y == 10.0
        ));
    }

    #[test]
    fn test_vlist_running_rule_spans_width() {
        let metrics = UniformMetrics::new();
        let top = List::hlist(vec![glyph("a", &metrics), glyph("b", &metrics)], true, &metrics);
        let root = Node::Vlist(List::vlist(vec![
            Node::Hlist(top),
            Node::Empty(EmptyBox::vbox(0.0, 1.0)),
            Node::Rule(Rule::hrule(2.0)),
        ]));
        let mut out = DrawList::new();
        render(&mut out, &root).unwrap();

        let rect = out
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::Rect { x1, y1, x2, y2 } => Some((*x1, *y1, *x2, *y2)),
                DrawCommand::Glyph { .. } => None,
            })
            .unwrap();
        // glyphs 10 tall, 1 unit gap, then a 2 unit rule
        assert_eq!(rect, (0.0, 11.0, 20.0, 13.0));
    }

    #[test]
    fn test_zero_extent_rule_is_skipped() {
        let root = Node::Hlist(List::hbox(vec![Node::Rule(Rule::new(5.0, 0.0, 0.0))]));
        let mut out = DrawList::new();
        render(&mut out, &root).unwrap();
        assert!(out.commands().is_empty());
    }

    #[test]
    fn test_centering_glue_receives_its_share() {
        let metrics = UniformMetrics::new();
        let centered = List::hcentered(vec![glyph("a", &metrics)], 30.0);
        let root = Node::Hlist(List::hbox(vec![Node::Hlist(centered)]));
        let mut out = DrawList::new();
        render(&mut out, &root).unwrap();
        assert!(matches!(
            out.commands()[0],
            DrawCommand::Glyph { x, .. } if x == 10.0
        ));
    }

    #[test]
    fn test_accent_offset_by_ink_box() {
        let accent_metrics = GlyphMetrics {
            advance: 6.0,
            width: 6.0,
            height: 2.0,
            xmin: 1.0,
            xmax: 5.0,
            ymin: 7.0,
            ymax: 9.0,
            iceberg: 9.0,
            slanted: false,
        };
        let metrics = UniformMetrics::new().with_symbol("\\circumflexaccent", accent_metrics);
        let accent = Char::accent("\\circumflexaccent", &state(), &metrics);
        let root = Node::Hlist(List::hbox(vec![Node::Char(accent)]));
        let mut out = DrawList::new();
        render(&mut out, &root).unwrap();
        // height is the ink height 2: baseline at 2, then offset by (-1, +7)
        assert!(matches!(
            out.commands()[0],
            DrawCommand::Glyph { x, y, .. } if x == -1.0 && y == 9.0
        ));
    }

    #[test]
    fn test_bare_leaf_root() {
        let metrics = UniformMetrics::new();
        let mut out = DrawList::new();
        render(&mut out, &glyph("a", &metrics)).unwrap();
        assert_eq!(out.commands().len(), 1);
    }

    #[test]
    fn test_non_finite_position_is_an_error() {
        let metrics = UniformMetrics::new();
        let root = Node::Hlist(List::hbox(vec![
            Node::Kern(Kern::new(f32::NAN)),
            glyph("a", &metrics),
        ]));
        let mut out = DrawList::new();
        let err = render(&mut out, &root).unwrap_err();
        assert!(matches!(err, RenderError::NonFinite { what: "glyph", .. }));
    }
}

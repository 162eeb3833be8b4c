//! Horizontal and vertical lists and TeX's packing algorithms.

use crate::config::{GLUE_ORDERS, NUM_SIZE_LEVELS, SHRINK_FACTOR};
use crate::node::{Glue, Kern, Node};
use crate::node_kind::ListKind;
use mathtext_traits::MetricsProvider;

/// Whether a packed list stretched or shrank its glue to reach its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlueSign {
    #[default]
    Natural,
    Stretch,
    Shrink,
}

/// How the size passed to `hpack`/`vpack` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackMode {
    /// The list gets exactly the given size.
    Exactly,
    /// The given size is added to the natural size.
    Additional,
}

/// A packed sequence of nodes.
///
/// Whether the children run horizontally or vertically is decided by the
/// wrapping [`Node`] variant (`Hlist` or `Vlist`).
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub kind: ListKind,
    pub children: Vec<Node>,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Moves the list down inside an Hlist, right inside a Vlist.
    pub shift_amount: f32,
    pub glue_set: f32,
    pub glue_sign: GlueSign,
    pub glue_order: usize,
    size_level: u8,
}

impl List {
    fn with_children(kind: ListKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            children,
            width: 0.0,
            height: 0.0,
            depth: 0.0,
            shift_amount: 0.0,
            glue_set: 0.0,
            glue_sign: GlueSign::Natural,
            glue_order: 0,
            size_level: 0,
        }
    }

    /// A horizontal list at its natural width, optionally with
    /// inter-glyph kerns inserted first.
    pub fn hlist(children: Vec<Node>, do_kern: bool, metrics: &dyn MetricsProvider) -> Self {
        Self::hlist_of_kind(ListKind::Plain, children, do_kern, metrics)
    }

    pub fn hlist_of_kind(
        kind: ListKind,
        children: Vec<Node>,
        do_kern: bool,
        metrics: &dyn MetricsProvider,
    ) -> Self {
        let mut list = Self::with_children(kind, children);
        if do_kern {
            list.kern(metrics);
        }
        list.hpack(0.0, PackMode::Additional);
        list
    }

    /// A horizontal list without kerning, for children that are not glyph
    /// runs.
    pub fn hbox(children: Vec<Node>) -> Self {
        let mut list = Self::with_children(ListKind::Plain, children);
        list.hpack(0.0, PackMode::Additional);
        list
    }

    /// A vertical list at its natural height.
    pub fn vlist(children: Vec<Node>) -> Self {
        let mut list = Self::with_children(ListKind::Plain, children);
        list.vpack(0.0, PackMode::Additional, f32::INFINITY);
        list
    }

    /// `children` centered inside a box of exactly `width`.
    pub fn hcentered(children: Vec<Node>, width: f32) -> Self {
        let mut all = Vec::with_capacity(children.len() + 2);
        all.push(Node::Glue(Glue::ss()));
        all.extend(children);
        all.push(Node::Glue(Glue::ss()));
        let mut list = Self::with_children(ListKind::Centered, all);
        list.hpack(width, PackMode::Exactly);
        list
    }

    /// Insert a `Kern` after every child whose kerning against its
    /// successor is non-zero.
    pub fn kern(&mut self, metrics: &dyn MetricsProvider) {
        let children = std::mem::take(&mut self.children);
        let mut kerned = Vec::with_capacity(children.len() * 2);
        let mut iter = children.into_iter().peekable();
        while let Some(elem) = iter.next() {
            let k = elem.kerning(iter.peek(), metrics);
            kerned.push(elem);
            if k != 0.0 {
                kerned.push(Node::Kern(Kern::new(k)));
            }
        }
        self.children = kerned;
    }

    /// Compute the box of a horizontal list and set its glue.
    pub fn hpack(&mut self, w: f32, mode: PackMode) {
        let mut h: f32 = 0.0;
        let mut d: f32 = 0.0;
        let mut x: f32 = 0.0;
        let mut total_stretch = [0.0f32; GLUE_ORDERS];
        let mut total_shrink = [0.0f32; GLUE_ORDERS];

        for p in &self.children {
            match p {
                Node::Char(c) => {
                    x += c.width;
                    h = h.max(c.height);
                    d = d.max(c.depth);
                }
                Node::Glue(g) => {
                    x += g.spec.width;
                    total_stretch[g.spec.stretch_order] += g.spec.stretch;
                    total_shrink[g.spec.shrink_order] += g.spec.shrink;
                }
                Node::Kern(k) => x += k.width,
                other => {
                    x += other.width();
                    if other.height().is_finite() && other.depth().is_finite() {
                        let s = other.shift_amount();
                        h = h.max(other.height() - s);
                        d = d.max(other.depth() + s);
                    }
                }
            }
        }

        self.height = h;
        self.depth = d;
        let w = match mode {
            PackMode::Additional => w + x,
            PackMode::Exactly => w,
        };
        self.width = w;
        let x = w - x;

        if x == 0.0 {
            self.glue_sign = GlueSign::Natural;
            self.glue_order = 0;
            self.glue_set = 0.0;
        } else if x > 0.0 {
            self.set_glue(x, GlueSign::Stretch, &total_stretch, "Underfull");
        } else {
            self.set_glue(x, GlueSign::Shrink, &total_shrink, "Overfull");
        }
    }

    /// Compute the box of a vertical list and set its glue.
    ///
    /// `max_depth` caps the depth of the last box; any excess is moved into
    /// the height.
    pub fn vpack(&mut self, h: f32, mode: PackMode, max_depth: f32) {
        let mut w: f32 = 0.0;
        let mut d: f32 = 0.0;
        let mut x: f32 = 0.0;
        let mut total_stretch = [0.0f32; GLUE_ORDERS];
        let mut total_shrink = [0.0f32; GLUE_ORDERS];

        for p in &self.children {
            match p {
                Node::Glue(g) => {
                    x += d;
                    d = 0.0;
                    x += g.spec.width;
                    total_stretch[g.spec.stretch_order] += g.spec.stretch;
                    total_shrink[g.spec.shrink_order] += g.spec.shrink;
                }
                Node::Kern(k) => {
                    x += d + k.width;
                    d = 0.0;
                }
                other => {
                    x += d + other.height();
                    d = other.depth();
                    if other.width().is_finite() {
                        w = w.max(other.width() + other.shift_amount());
                    }
                }
            }
        }

        self.width = w;
        if d > max_depth {
            x += d - max_depth;
            self.depth = max_depth;
        } else {
            self.depth = d;
        }

        let h = match mode {
            PackMode::Additional => h + x,
            PackMode::Exactly => h,
        };
        self.height = h;
        let x = h - x;

        if x == 0.0 {
            self.glue_sign = GlueSign::Natural;
            self.glue_order = 0;
            self.glue_set = 0.0;
        } else if x > 0.0 {
            self.set_glue(x, GlueSign::Stretch, &total_stretch, "Underfull");
        } else {
            self.set_glue(x, GlueSign::Shrink, &total_shrink, "Overfull");
        }
    }

    fn set_glue(&mut self, x: f32, sign: GlueSign, totals: &[f32; GLUE_ORDERS], what: &str) {
        let order = (0..GLUE_ORDERS)
            .rev()
            .find(|&i| totals[i] != 0.0)
            .unwrap_or(0);
        self.glue_order = order;
        self.glue_sign = sign;
        if totals[order] != 0.0 {
            self.glue_set = x / totals[order];
        } else {
            self.glue_sign = GlueSign::Natural;
            self.glue_set = 0.0;
        }
        if order == 0 && !self.children.is_empty() {
            log::trace!(
                "{} {} list: {:.3} left over with no finite glue",
                what,
                self.kind.as_str(),
                x
            );
        }
    }

    pub(crate) fn shrink(&mut self) {
        for child in &mut self.children {
            child.shrink();
        }
        self.size_level = self.size_level.saturating_add(1);
        if self.size_level < NUM_SIZE_LEVELS {
            self.width *= SHRINK_FACTOR;
            self.height *= SHRINK_FACTOR;
            self.depth *= SHRINK_FACTOR;
            self.shift_amount *= SHRINK_FACTOR;
            self.glue_set *= SHRINK_FACTOR;
        }
    }
}

//! Semantic actions: the box layout each construct produces.

use crate::error::{ParseError, ParseErrorKind};
use crate::parser::{Parser, Script};
use crate::symbols::{
    ACCENTS, DROPSUB_SYMBOLS, OVERUNDER_FUNCTIONS, OVERUNDER_SYMBOLS, PUNCTUATION, SPACED_SYMBOLS,
    WIDE_ACCENTS,
};
use mathtext_layout::config::{DELTA, SCRIPT_SPACE, SUB1, SUBDROP, SUP1};
use mathtext_layout::{
    Char, EmptyBox, Glue, Kern, List, Node, PackMode, Rule, auto_height_char, auto_width_char,
};

/// Size of the `\AA` ring relative to the current font size.
const RING_SCALE: f32 = 0.5;
/// Gap between the ring and the A, in rule thicknesses.
const RING_GAP: f32 = 0.0;

fn is_overunder(nucleus: &Node) -> bool {
    match nucleus {
        Node::Char(c) => OVERUNDER_SYMBOLS.contains(c.symbol()),
        Node::Hlist(l) => l
            .kind
            .function_name()
            .is_some_and(|name| OVERUNDER_FUNCTIONS.contains(name)),
        _ => false,
    }
}

fn is_dropsub(nucleus: &Node) -> bool {
    nucleus
        .as_char()
        .is_some_and(|c| DROPSUB_SYMBOLS.contains(c.symbol()))
}

fn is_slanted(nucleus: &Node) -> bool {
    nucleus.as_char().is_some_and(Char::is_slanted)
}

impl Parser<'_> {
    fn thickness(&self) -> f32 {
        let state = self.state();
        self.metrics
            .get_underline_thickness(state.fontsize, state.dpi)
    }

    /// A glyph, padded with thin space when it is an operator, relation,
    /// arrow or punctuation mark.
    pub(crate) fn symbol(&mut self, symbol: &str) -> Node {
        let c = Node::Char(Char::new(symbol, self.state(), self.metrics));
        if SPACED_SYMBOLS.contains(symbol) {
            let before = self.space(0.2);
            let after = self.space(0.2);
            Node::Hlist(List::hbox(vec![before, c, after]))
        } else if PUNCTUATION.contains(symbol) {
            let after = self.space(0.2);
            Node::Hlist(List::hbox(vec![c, after]))
        } else {
            c
        }
    }

    /// `\AA`: a half-size ring centered over a roman A.
    pub(crate) fn char_over_chars(&mut self) -> Node {
        let state = self.state();
        let thickness = self.thickness();

        let mut over_state = state.clone();
        over_state.fontsize *= RING_SCALE;
        let over = Char::accent("\\circ", &over_state, self.metrics);

        let mut under_state = state.clone();
        under_state.set_font("rm");
        let under = Char::new("A", &under_state, self.metrics);

        let width = over.width.max(under.width);
        Node::Vlist(List::vlist(vec![
            Node::Hlist(List::hcentered(vec![Node::Char(over)], width)),
            Node::Empty(EmptyBox::vbox(0.0, thickness * RING_GAP)),
            Node::Hlist(List::hcentered(vec![Node::Char(under)], width)),
        ]))
    }

    /// An accent centered over its argument, two rule thicknesses above it.
    pub(crate) fn accent(&mut self, name: &str, arg: Node) -> Node {
        let state = self.state();
        let thickness = self.thickness();
        let width = arg.width();

        let accent = if WIDE_ACCENTS.contains(name) {
            Node::Hlist(auto_width_char(
                &format!("\\{name}"),
                width,
                state,
                true,
                self.metrics,
            ))
        } else {
            let glyph = ACCENTS.get(name).copied().unwrap_or("\\circumflexaccent");
            Node::Char(Char::accent(glyph, state, self.metrics))
        };
        log::trace!("accent \\{} over width {:.3}", name, width);

        Node::Vlist(List::vlist(vec![
            Node::Hlist(List::hcentered(vec![accent], width)),
            Node::Empty(EmptyBox::vbox(0.0, thickness * 2.0)),
            Node::Hlist(List::hlist(vec![arg], true, self.metrics)),
        ]))
    }

    /// Stack `num` over `den` around a rule of thickness `rule`, centered on
    /// the math axis, with optional auto-sized delimiters.
    pub(crate) fn genfrac_layout(
        &mut self,
        ldelim: &str,
        rdelim: &str,
        rule: f32,
        mut num: Node,
        mut den: Node,
    ) -> Node {
        let state = self.state();
        let thickness = self.thickness();

        num.shrink();
        den.shrink();
        let width = num.width().max(den.width());
        let cnum = List::hcentered(vec![num], width);
        let cden = List::hcentered(vec![den], width);
        let den_height = cden.height;

        let mut vlist = List::vlist(vec![
            Node::Hlist(cnum),
            Node::Empty(EmptyBox::vbox(0.0, thickness * 2.0)),
            Node::Rule(Rule::hrule(rule)),
            Node::Empty(EmptyBox::vbox(0.0, thickness * 2.0)),
            Node::Hlist(cden),
        ]);

        // Put the rule on the axis: halfway up an equals sign.
        let eq = self
            .metrics
            .get_metrics(&state.font, "it", "=", state.fontsize, state.dpi);
        vlist.shift_amount = den_height - ((eq.ymax + eq.ymin) / 2.0 - thickness * 3.0);

        let result = Node::Hlist(List::hbox(vec![
            Node::Vlist(vlist),
            Node::Empty(EmptyBox::hbox(thickness * 2.0)),
        ]));
        if ldelim.is_empty() && rdelim.is_empty() {
            return result;
        }
        let ldelim = if ldelim.is_empty() { "." } else { ldelim };
        let rdelim = if rdelim.is_empty() { "." } else { rdelim };
        self.auto_sized_delimiter(ldelim, vec![result], rdelim)
    }

    /// A radical sign sized to the body, an overbar and an optional index.
    pub(crate) fn sqrt_layout(&mut self, index: Option<&str>, body: Node) -> Node {
        let state = self.state().clone();
        let thickness = self.thickness();

        // Extra headroom keeps the overbar off the body.
        let height = body.height() - body.shift_amount() + thickness * 5.0;
        let depth = body.depth() + body.shift_amount();
        let check = auto_height_char("\\__sqrt__", height, depth, &state, true, self.metrics);
        let height = check.height - check.shift_amount;
        let depth = check.depth + check.shift_amount;

        let padded_body = List::hbox(vec![
            Node::Empty(EmptyBox::hbox(thickness * 2.0)),
            body,
            Node::Empty(EmptyBox::hbox(thickness * 2.0)),
        ]);
        let mut rightside = List::vlist(vec![
            Node::Rule(Rule::hrule(thickness)),
            Node::Glue(Glue::fill()),
            Node::Hlist(padded_body),
        ]);
        rightside.vpack(
            height + (state.fontsize * state.dpi) / (100.0 * 12.0),
            PackMode::Exactly,
            depth,
        );

        let root = match index {
            None => Node::Empty(EmptyBox::hbox(check.width * 0.5)),
            Some(digits) => {
                let mut buf = [0u8; 4];
                let glyphs = digits
                    .chars()
                    .map(|c| Node::Char(Char::new(c.encode_utf8(&mut buf), &state, self.metrics)))
                    .collect();
                let mut root = Node::Hlist(List::hlist(glyphs, true, self.metrics));
                root.shrink();
                root.shrink();
                root
            }
        };
        let mut root_vlist = List::vlist(vec![Node::Hlist(List::hlist(
            vec![root],
            true,
            self.metrics,
        ))]);
        // Raise the index so it sits over the tick of the radical.
        root_vlist.shift_amount = -height * 0.6;

        let check_width = check.width;
        Node::Hlist(List::hlist(
            vec![
                Node::Vlist(root_vlist),
                Node::Kern(Kern::new(-check_width * 0.5)),
                Node::Hlist(check),
                Node::Vlist(rightside),
            ],
            true,
            self.metrics,
        ))
    }

    /// Place scripts on a nucleus, TeX's Appendix G rules 18a-18f.
    pub(crate) fn attach_scripts(
        &mut self,
        nucleus: Option<Node>,
        scripts: Vec<Script>,
    ) -> Result<Node, ParseError> {
        if let Some(extra) = scripts.get(2) {
            return Err(self.error_at(extra.pos, ParseErrorKind::ScriptsTooLong));
        }
        let mut sub = None;
        let mut sup = None;
        for script in scripts {
            let slot = if script.op == '_' { &mut sub } else { &mut sup };
            if slot.is_some() {
                let kind = if script.op == '_' {
                    ParseErrorKind::DoubleSubscript
                } else {
                    ParseErrorKind::DoubleSuperscript
                };
                return Err(self.error_at(script.pos, kind));
            }
            *slot = Some(script.arg);
        }
        let nucleus = nucleus.unwrap_or_else(|| Node::Empty(EmptyBox::hbox(0.0)));

        let state = self.state();
        let rule_thickness = self
            .metrics
            .get_underline_thickness(state.fontsize, state.dpi);
        let x_height = self
            .metrics
            .get_xheight(&state.font, state.fontsize, state.dpi);

        if is_overunder(&nucleus) {
            return Ok(self.overunder(nucleus, sub, sup, rule_thickness));
        }

        let mut shift_up = nucleus.height() - SUBDROP * x_height;
        let mut shift_down = if is_dropsub(&nucleus) {
            nucleus.depth() + SUBDROP * x_height
        } else {
            SUBDROP * x_height
        };

        let scripts = match (sup, sub) {
            (None, Some(mut sub)) => {
                sub.shrink();
                let mut x = List::hlist(vec![sub], true, self.metrics);
                shift_down = shift_down.max(SUB1);
                shift_down = shift_down.max(x.height - (x_height * 4.0).abs() / 5.0);
                x.shift_amount = shift_down;
                Node::Hlist(x)
            }
            (Some(mut sup), sub) => {
                sup.shrink();
                let mut x = List::hlist(
                    vec![sup, Node::Kern(Kern::new(SCRIPT_SPACE * x_height))],
                    true,
                    self.metrics,
                );
                shift_up = shift_up.max(SUP1 * x_height);
                shift_up = shift_up.max(x.depth + x_height.abs() / 4.0);
                match sub {
                    None => {
                        x.shift_amount = -shift_up;
                        Node::Hlist(x)
                    }
                    Some(mut sub) => {
                        sub.shrink();
                        let y = List::hlist(vec![sub], true, self.metrics);
                        shift_down = shift_down.max(SUB1 * x_height);
                        let clr =
                            2.0 * rule_thickness - ((shift_up - x.depth) - (y.height - shift_down));
                        if clr > 0.0 {
                            shift_up += clr;
                            shift_down += clr;
                        }
                        if is_slanted(&nucleus) {
                            x.shift_amount = DELTA * (shift_up + shift_down);
                        }
                        let gap = (shift_up - x.depth) - (y.height - shift_down);
                        let mut v = List::vlist(vec![
                            Node::Hlist(x),
                            Node::Kern(Kern::new(gap)),
                            Node::Hlist(y),
                        ]);
                        v.shift_amount = shift_down;
                        Node::Vlist(v)
                    }
                }
            }
            (None, None) => return Ok(nucleus),
        };
        log::trace!(
            "scripts placed: up {:.3}, down {:.3}",
            shift_up,
            shift_down
        );

        Ok(Node::Hlist(List::hlist(
            vec![nucleus, scripts],
            true,
            self.metrics,
        )))
    }

    /// Limits above and below a large operator or `\lim`-style function.
    fn overunder(
        &self,
        nucleus: Node,
        sub: Option<Node>,
        sup: Option<Node>,
        rule_thickness: f32,
    ) -> Node {
        let mut width = nucleus.width();
        let sup = sup.map(|mut s| {
            s.shrink();
            width = width.max(s.width());
            s
        });
        let sub = sub.map(|mut s| {
            s.shrink();
            width = width.max(s.width());
            s
        });

        let nucleus_depth = nucleus.depth();
        let mut stack = Vec::with_capacity(5);
        if let Some(sup) = sup {
            stack.push(Node::Hlist(List::hcentered(vec![sup], width)));
            stack.push(Node::Kern(Kern::new(rule_thickness * 3.0)));
        }
        stack.push(Node::Hlist(List::hcentered(vec![nucleus], width)));
        let mut shift = 0.0;
        if let Some(sub) = sub {
            let centered = List::hcentered(vec![sub], width);
            shift = centered.height;
            stack.push(Node::Kern(Kern::new(rule_thickness * 3.0)));
            stack.push(Node::Hlist(centered));
        }

        let mut vlist = List::vlist(stack);
        vlist.shift_amount = shift + nucleus_depth;
        Node::Hlist(List::hlist(vec![Node::Vlist(vlist)], true, self.metrics))
    }

    /// Wrap `middle` in delimiters as tall as its tallest item; `.` means
    /// no delimiter on that side.
    pub(crate) fn auto_sized_delimiter(&mut self, front: &str, middle: Vec<Node>, back: &str) -> Node {
        let state = self.state();
        let height = middle.iter().map(Node::height).fold(0.0, f32::max);
        let depth = middle.iter().map(Node::depth).fold(0.0, f32::max);
        log::trace!(
            "delimiters {} {} around height {:.3}, depth {:.3}",
            front,
            back,
            height,
            depth
        );

        let mut parts = Vec::with_capacity(middle.len() + 2);
        if front != "." {
            parts.push(Node::Hlist(auto_height_char(
                front,
                height,
                depth,
                state,
                false,
                self.metrics,
            )));
        }
        parts.extend(middle);
        if back != "." {
            parts.push(Node::Hlist(auto_height_char(
                back,
                height,
                depth,
                state,
                false,
                self.metrics,
            )));
        }
        Node::Hlist(List::hlist(parts, true, self.metrics))
    }
}

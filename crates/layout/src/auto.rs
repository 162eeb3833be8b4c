//! Glyphs that grow to fit: delimiters, radicals and wide accents.

use crate::list::List;
use crate::node::{Char, Node};
use crate::node_kind::ListKind;
use crate::state::State;
use mathtext_traits::{MetricsProvider, SizedGlyph};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Pre-sized Bakoma variants, smallest first.
static SIZE_ALTERNATIVES: Lazy<HashMap<&'static str, Vec<(&'static str, &'static str)>>> =
    Lazy::new(|| {
        let mut m: HashMap<&'static str, Vec<(&'static str, &'static str)>> = HashMap::new();
        m.insert(
            "(",
            vec![
                ("rm", "("),
                ("ex", "\u{a1}"),
                ("ex", "\u{b3}"),
                ("ex", "\u{b5}"),
                ("ex", "\u{c3}"),
            ],
        );
        m.insert(
            ")",
            vec![
                ("rm", ")"),
                ("ex", "\u{a2}"),
                ("ex", "\u{b4}"),
                ("ex", "\u{b6}"),
                ("ex", "\u{21}"),
            ],
        );
        m.insert(
            "{",
            vec![
                ("cal", "{"),
                ("ex", "\u{a9}"),
                ("ex", "\u{6e}"),
                ("ex", "\u{bd}"),
                ("ex", "\u{28}"),
            ],
        );
        m.insert(
            "}",
            vec![
                ("cal", "}"),
                ("ex", "\u{aa}"),
                ("ex", "\u{6f}"),
                ("ex", "\u{be}"),
                ("ex", "\u{29}"),
            ],
        );
        // The fourth size of the square brackets is missing from Bakoma.
        m.insert(
            "[",
            vec![("rm", "["), ("ex", "\u{a3}"), ("ex", "\u{68}"), ("ex", "\u{22}")],
        );
        m.insert(
            "]",
            vec![("rm", "]"), ("ex", "\u{a4}"), ("ex", "\u{69}"), ("ex", "\u{23}")],
        );
        m.insert(
            "\\lfloor",
            vec![("ex", "\u{a5}"), ("ex", "\u{6a}"), ("ex", "\u{b9}"), ("ex", "\u{24}")],
        );
        m.insert(
            "\\rfloor",
            vec![("ex", "\u{a6}"), ("ex", "\u{6b}"), ("ex", "\u{ba}"), ("ex", "\u{25}")],
        );
        m.insert(
            "\\lceil",
            vec![("ex", "\u{a7}"), ("ex", "\u{6c}"), ("ex", "\u{bb}"), ("ex", "\u{26}")],
        );
        m.insert(
            "\\rceil",
            vec![("ex", "\u{a8}"), ("ex", "\u{6d}"), ("ex", "\u{bc}"), ("ex", "\u{27}")],
        );
        m.insert(
            "\\langle",
            vec![("ex", "\u{ad}"), ("ex", "\u{44}"), ("ex", "\u{bf}"), ("ex", "\u{2a}")],
        );
        m.insert(
            "\\rangle",
            vec![("ex", "\u{ae}"), ("ex", "\u{45}"), ("ex", "\u{c0}"), ("ex", "\u{2b}")],
        );
        m.insert(
            "\\__sqrt__",
            vec![("ex", "\u{70}"), ("ex", "\u{71}"), ("ex", "\u{72}"), ("ex", "\u{73}")],
        );
        m.insert(
            "\\backslash",
            vec![("ex", "\u{b2}"), ("ex", "\u{2f}"), ("ex", "\u{c2}"), ("ex", "\u{2d}")],
        );
        m.insert(
            "/",
            vec![
                ("rm", "/"),
                ("ex", "\u{b1}"),
                ("ex", "\u{2e}"),
                ("ex", "\u{cb}"),
                ("ex", "\u{2c}"),
            ],
        );
        m.insert(
            "\\widehat",
            vec![("rm", "\u{5e}"), ("ex", "\u{62}"), ("ex", "\u{63}"), ("ex", "\u{64}")],
        );
        m.insert(
            "\\widetilde",
            vec![("rm", "\u{7e}"), ("ex", "\u{65}"), ("ex", "\u{66}"), ("ex", "\u{67}")],
        );
        m.insert("<", vec![("cal", "h"), ("ex", "D")]);
        m.insert(">", vec![("cal", "i"), ("ex", "E")]);

        for (alias, target) in [
            ("\\leftparen", "("),
            ("\\rightparen", ")"),
            ("\\leftbrace", "{"),
            ("\\rightbrace", "}"),
            ("\\leftbracket", "["),
            ("\\rightbracket", "]"),
        ] {
            if let Some(entries) = m.get(target).cloned() {
                m.insert(alias, entries);
            }
        }
        m
    });

/// Candidate glyphs for a stretchy symbol, smallest first.
///
/// The provider's own catalog wins; otherwise the built-in Bakoma catalog is
/// used; otherwise the symbol itself in the current font is the only choice.
pub fn size_alternatives(
    font: &str,
    symbol: &str,
    metrics: &dyn MetricsProvider,
) -> Vec<SizedGlyph> {
    if let Some(alts) = metrics.sized_alternatives(font, symbol) {
        if !alts.is_empty() {
            return alts;
        }
    }
    match SIZE_ALTERNATIVES.get(symbol) {
        Some(entries) => entries
            .iter()
            .map(|(f, s)| SizedGlyph::new(*f, *s))
            .collect(),
        None => vec![SizedGlyph::new(font, symbol)],
    }
}

/// A glyph at least `height + depth` tall, shifted so its depth matches
/// `depth`.
///
/// The first catalog entry that is tall enough is used as is. When none is,
/// or when `always` is set, the last candidate's font size is scaled so the
/// glyph matches the target exactly.
pub fn auto_height_char(
    symbol: &str,
    height: f32,
    depth: f32,
    state: &State,
    always: bool,
    metrics: &dyn MetricsProvider,
) -> List {
    let target = height + depth;
    let mut state = state.clone();
    let mut chosen: Option<(Char, String)> = None;
    let mut big_enough = false;

    for alt in size_alternatives(&state.font, symbol, metrics) {
        state.set_font(&alt.font);
        let c = Char::new(&alt.symbol, &state, metrics);
        let tall = c.height + c.depth;
        chosen = Some((c, alt.symbol));
        if tall >= target {
            big_enough = true;
            break;
        }
    }

    let c = match chosen {
        Some((c, sym)) => {
            let total = c.height + c.depth;
            if (always || !big_enough) && total > 0.0 {
                state.fontsize *= target / total;
                Char::new(&sym, &state, metrics)
            } else {
                c
            }
        }
        None => Char::new(symbol, &state, metrics),
    };

    let shift = depth - c.depth;
    log::trace!(
        "auto height '{}': target {:.3}, got {} at {:.3}pt",
        symbol,
        target,
        c.symbol(),
        c.glyph.fontsize
    );
    let mut list = List::hlist_of_kind(ListKind::AutoHeight, vec![Node::Char(c)], false, metrics);
    list.shift_amount = shift;
    list
}

/// A glyph exactly `width` wide: the first wide enough catalog entry,
/// rescaled to the target.
pub fn auto_width_char(
    symbol: &str,
    width: f32,
    state: &State,
    accent: bool,
    metrics: &dyn MetricsProvider,
) -> List {
    let make = |sym: &str, state: &State| {
        if accent {
            Char::accent(sym, state, metrics)
        } else {
            Char::new(sym, state, metrics)
        }
    };

    let mut state = state.clone();
    let mut chosen: Option<(Char, String)> = None;
    for alt in size_alternatives(&state.font, symbol, metrics) {
        state.set_font(&alt.font);
        let c = make(&alt.symbol, &state);
        let wide = c.width;
        chosen = Some((c, alt.symbol));
        if wide >= width {
            break;
        }
    }

    let c = match chosen {
        Some((c, sym)) if c.width > 0.0 => {
            state.fontsize *= width / c.width;
            make(&sym, &state)
        }
        Some((c, _)) => c,
        None => make(symbol, &state),
    };

    List::hlist_of_kind(ListKind::AutoWidth, vec![Node::Char(c)], false, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_close, state, uniform};
    use mathtext_traits::UniformMetrics;

    fn catalog_metrics() -> UniformMetrics {
        let _ = env_logger::builder().is_test(true).try_init();
        UniformMetrics::new()
            .with_reference_size(12.0)
            .unwrap()
            .with_symbol("p1", UniformMetrics::box_metrics(5.0, 8.0, 2.0))
            .with_symbol("p2", UniformMetrics::box_metrics(6.0, 15.0, 5.0))
            .with_symbol("p3", UniformMetrics::box_metrics(7.0, 22.0, 8.0))
            .with_catalog(
                "(",
                vec![
                    SizedGlyph::new("rm", "p1"),
                    SizedGlyph::new("ex", "p2"),
                    SizedGlyph::new("ex", "p3"),
                ],
            )
            .unwrap()
    }

    #[test]
    fn test_builtin_catalog_lookup() {
        let metrics = uniform();
        let alts = size_alternatives("rm", "(", &metrics);
        assert_eq!(alts.len(), 5);
        assert_eq!(alts[0], SizedGlyph::new("rm", "("));
        assert_eq!(alts[1].font, "ex");
        let aliased = size_alternatives("rm", "\\leftparen", &metrics);
        assert_eq!(aliased, alts);
    }

    #[test]
    fn test_unknown_symbol_falls_back_to_itself() {
        let metrics = uniform();
        let alts = size_alternatives("it", "|", &metrics);
        assert_eq!(alts, vec![SizedGlyph::new("it", "|")]);
    }

    #[test]
    fn test_provider_catalog_wins() {
        let metrics = catalog_metrics();
        let alts = size_alternatives("rm", "(", &metrics);
        assert_eq!(alts.len(), 3);
        assert_eq!(alts[2].symbol, "p3");
    }

    #[test]
    fn test_auto_height_picks_first_big_enough() {
        let metrics = catalog_metrics();
        let list = auto_height_char("(", 12.0, 3.0, &state(), false, &metrics);
        let c = list.children[0].as_char().unwrap();
        assert_eq!(c.symbol(), "p2");
        assert_eq!(c.glyph.font, "ex");
        assert_close(list.shift_amount, 3.0 - 5.0);
    }

    #[test]
    fn test_auto_height_monotonic() {
        let metrics = catalog_metrics();
        let mut last = 0.0;
        for target in [1.0, 9.0, 10.0, 11.0, 19.0, 20.0, 25.0, 30.0, 45.0] {
            let list = auto_height_char("(", target, 0.0, &state(), false, &metrics);
            let total = list.height + list.depth;
            assert!(total >= last, "size shrank at target {target}");
            last = total;
        }
    }

    #[test]
    fn test_auto_height_rescales_when_nothing_fits() {
        let metrics = catalog_metrics();
        let list = auto_height_char("(", 50.0, 10.0, &state(), false, &metrics);
        let c = list.children[0].as_char().unwrap();
        assert_eq!(c.symbol(), "p3");
        assert_close(c.height + c.depth, 60.0);
    }

    #[test]
    fn test_auto_height_always_rescales() {
        let metrics = catalog_metrics();
        let list = auto_height_char("(", 5.0, 0.0, &state(), true, &metrics);
        let c = list.children[0].as_char().unwrap();
        assert_eq!(c.symbol(), "p1");
        assert_close(c.height + c.depth, 5.0);
    }

    #[test]
    fn test_auto_width_matches_target() {
        let metrics = UniformMetrics::new().with_reference_size(12.0).unwrap();
        let list = auto_width_char("\\widebar", 25.0, &state(), true, &metrics);
        assert_close(list.width, 25.0);
        assert_eq!(list.kind, ListKind::AutoWidth);
    }
}

//! The recursive grammar.
//!
//! Each rule is a method on [`Parser`] returning `Ok(Some(node))` on a match,
//! `Ok(None)` when the rule does not apply at the current position (the
//! position is then left where it was), and `Err` for malformed input, which
//! aborts the whole parse.

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer;
use crate::memo::{Memo, MemoRule};
use crate::symbols::{
    ACCENTS, AMBI_DELIMS, FONT_NAMES, FUNCTION_NAMES, LEFT_DELIMS, RIGHT_DELIMS, SPACE_WIDTHS,
    WIDE_ACCENTS, is_known_symbol, is_symbol_char,
};
use mathtext_layout::{Char, Kern, List, ListKind, Node, State};
use mathtext_traits::MetricsProvider;
use nom::IResult;
use std::collections::HashMap;

/// A script operator and its argument, with the operator's byte offset.
pub(crate) struct Script {
    pub op: char,
    pub arg: Node,
    pub pos: usize,
}

/// One parse of one input string.
///
/// Owns the state stack, the em-width cache and the packrat memo; none of
/// them outlive the call to [`Parser::parse`].
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    pub(crate) metrics: &'a dyn MetricsProvider,
    config: &'a ParserConfig,
    states: Vec<State>,
    memo: Memo,
    em_widths: HashMap<(String, u32, u32), f32>,
}

impl<'a> Parser<'a> {
    pub fn new(
        input: &'a str,
        metrics: &'a dyn MetricsProvider,
        config: &'a ParserConfig,
        fontsize: f32,
        dpi: f32,
    ) -> Self {
        Self {
            input,
            pos: 0,
            metrics,
            config,
            states: vec![State::new(&config.text_font, fontsize, dpi)],
            memo: Memo::new(),
            em_widths: HashMap::new(),
        }
    }

    /// Parse the whole input into a root `Hlist`.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        log::debug!(
            "parsing {} bytes with {}",
            self.input.len(),
            self.metrics.name()
        );
        let delim = self.config.math_delimiter;
        let mut items = vec![Node::Hlist(self.non_math())];

        while self.peek() == Some(delim) {
            self.pos += delim.len_utf8();
            self.push_state();
            let config = self.config;
            self.state_mut().set_font(&config.math_font);

            let math = self.math()?;
            self.skip_ws();
            match self.peek() {
                Some(c) if c == delim => self.pos += c.len_utf8(),
                Some('}') => return Err(self.error(ParseErrorKind::UnmatchedClose)),
                _ => return Err(self.error(ParseErrorKind::UnclosedMath(delim))),
            }
            self.pop_state();

            if let Some(math) = math {
                items.push(Node::Hlist(math));
            }
            items.push(Node::Hlist(self.non_math()));
        }

        let root = List::hlist(items, true, self.metrics);
        log::debug!(
            "parsed root: width {:.3}, height {:.3}, depth {:.3} ({} memo hits)",
            root.width,
            root.height,
            root.depth,
            self.memo.hits()
        );
        Ok(Node::Hlist(root))
    }

    // --- Cursor & state helpers ---

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Run a lexical parser at the cursor, advancing past what it consumed.
    fn lex<O>(&mut self, parser: fn(&'a str) -> IResult<&'a str, O>) -> Option<O> {
        match parser(self.rest()) {
            Ok((rest, out)) => {
                self.pos = self.input.len() - rest.len();
                Some(out)
            }
            Err(_) => None,
        }
    }

    pub(crate) fn skip_ws(&mut self) {
        self.lex(lexer::whitespace);
    }

    /// The control word at the cursor, without consuming it.
    fn peek_command(&self) -> Option<&'a str> {
        lexer::control_word(self.rest()).ok().map(|(_, name)| name)
    }

    fn consume_command(&mut self, name: &str) {
        self.pos += 1 + name.len();
    }

    fn expect(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(self.pos, kind)
    }

    pub(crate) fn error_at(&self, pos: usize, kind: ParseErrorKind) -> ParseError {
        let err = ParseError::at(self.input, pos, kind);
        log::debug!("parse failed at {}:{}: {}", err.line, err.column, err.kind);
        err
    }

    pub(crate) fn state(&self) -> &State {
        // The stack is seeded in `new` and every pop follows a push.
        &self.states[self.states.len() - 1]
    }

    fn state_mut(&mut self) -> &mut State {
        let top = self.states.len() - 1;
        &mut self.states[top]
    }

    pub(crate) fn push_state(&mut self) {
        let copy = self.state().clone();
        self.states.push(copy);
    }

    pub(crate) fn pop_state(&mut self) {
        if self.states.len() > 1 {
            self.states.pop();
        }
    }

    /// Horizontal space as a fraction of the current em width.
    pub(crate) fn space(&mut self, percentage: f32) -> Node {
        let state = self.state();
        let key = (
            state.font.clone(),
            state.fontsize.to_bits(),
            state.dpi.to_bits(),
        );
        let width = match self.em_widths.get(&key).copied() {
            Some(w) => w,
            None => {
                let m = self
                    .metrics
                    .get_metrics(&state.font, "it", "m", state.fontsize, state.dpi);
                self.em_widths.insert(key, m.advance);
                m.advance
            }
        };
        Node::Kern(Kern::new(width * percentage))
    }

    // --- Top-level segments ---

    /// Literal text up to the next unescaped math delimiter.
    fn non_math(&mut self) -> List {
        let delim = self.config.math_delimiter;
        let rest = self.rest();
        let mut text = String::new();
        let mut end = rest.len();
        let mut chars = rest.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c == delim {
                end = i;
                break;
            }
            if c == '\\' && matches!(chars.peek(), Some(&(_, next)) if next == delim) {
                chars.next();
                text.push(delim);
                continue;
            }
            text.push(c);
        }
        self.pos += end;

        let state = self.state();
        let mut buf = [0u8; 4];
        let symbols = text
            .chars()
            .map(|c| Node::Char(Char::new(c.encode_utf8(&mut buf), state, self.metrics)))
            .collect();
        List::hlist(symbols, true, self.metrics)
    }

    fn math(&mut self) -> Result<Option<List>, ParseError> {
        let items = self.items()?;
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(List::hlist(items, true, self.metrics)))
    }

    /// Zero or more `autoDelim | simple` items.
    fn items(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut out = Vec::new();
        loop {
            self.skip_ws();
            if let Some(node) = self.auto_delim()? {
                out.push(node);
                continue;
            }
            if !self.simple(&mut out)? {
                break;
            }
        }
        Ok(out)
    }

    /// Spaces, font switches and scripted placeables. Returns whether
    /// anything was consumed.
    fn simple(&mut self, out: &mut Vec<Node>) -> Result<bool, ParseError> {
        if let Some(name) = self.peek_command() {
            if let Some(&percentage) = SPACE_WIDTHS.get(name) {
                self.consume_command(name);
                out.push(self.space(percentage));
                return Ok(true);
            }
            if name == "hspace" {
                let start = self.pos;
                self.consume_command(name);
                let node = self.custom_space(start)?;
                out.push(node);
                return Ok(true);
            }
            if FONT_NAMES.contains(name) {
                self.consume_command(name);
                self.state_mut().set_font(name);
                log::trace!("font switch to {}", name);
                return Ok(true);
            }
        }
        match self.subsuper()? {
            Some(node) => {
                out.push(node);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn custom_space(&mut self, start: usize) -> Result<Node, ParseError> {
        let usage = || ParseErrorKind::MissingArgument("\\hspace{n}".to_string());
        if !self.expect('{') {
            return Err(self.error_at(start, usage()));
        }
        self.skip_ws();
        let Some(percentage) = self.lex(lexer::float) else {
            return Err(self.error_at(start, usage()));
        };
        if !self.expect('}') {
            return Err(self.error_at(start, usage()));
        }
        Ok(self.space(percentage))
    }

    // --- Scripts & placeables ---

    fn subsuper(&mut self) -> Result<Option<Node>, ParseError> {
        let start = self.pos;
        let nucleus = self.placeable()?;

        let mut scripts = Vec::new();
        loop {
            self.skip_ws();
            let op = match self.peek() {
                Some(c @ ('_' | '^')) => c,
                _ => break,
            };
            let op_pos = self.pos;
            self.pos += 1;
            match self.placeable()? {
                Some(arg) => scripts.push(Script {
                    op,
                    arg,
                    pos: op_pos,
                }),
                None => {
                    return Err(self.error(ParseErrorKind::MissingArgument(format!(
                        "a subscript or superscript after '{op}'"
                    ))));
                }
            }
        }

        if scripts.is_empty() {
            // Bare placeable: rewind past the whitespace probed above.
            self.pos = start;
            return self.placeable();
        }
        self.attach_scripts(nucleus, scripts).map(Some)
    }

    pub(crate) fn placeable(&mut self) -> Result<Option<Node>, ParseError> {
        self.skip_ws();
        let start = self.pos;
        let entry_state = self.state().clone();
        if let Some(hit) = self.memo.get(MemoRule::Placeable, start, &entry_state) {
            return Ok(hit.map(|(end, node)| {
                self.pos = end;
                node
            }));
        }

        let result = self.placeable_uncached()?;
        if result.is_none() {
            self.pos = start;
        }
        let entry = result.as_ref().map(|node| (self.pos, node.clone()));
        self.memo
            .insert(MemoRule::Placeable, start, &entry_state, entry);
        Ok(result)
    }

    fn placeable_uncached(&mut self) -> Result<Option<Node>, ParseError> {
        match self.peek() {
            None => Ok(None),
            Some('{') => self.group(None),
            Some('\\') => match self.peek_command() {
                Some(name) => self.command(name),
                None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
            },
            // The closing delimiter may itself be a symbol character.
            Some(c) if c == self.config.math_delimiter => Ok(None),
            Some(c) if is_symbol_char(c) => {
                self.pos += c.len_utf8();
                let mut buf = [0u8; 4];
                Ok(Some(self.symbol(c.encode_utf8(&mut buf))))
            }
            Some(_) => Ok(None),
        }
    }

    /// A placeable introduced by a control word.
    fn command(&mut self, name: &'a str) -> Result<Option<Node>, ParseError> {
        let start = self.pos;

        if FUNCTION_NAMES.contains(name) {
            self.consume_command(name);
            return Ok(Some(self.function(name)));
        }
        if name == "AA" {
            self.consume_command(name);
            return Ok(Some(self.char_over_chars()));
        }
        if ACCENTS.contains_key(name) || WIDE_ACCENTS.contains(name) {
            self.consume_command(name);
            let Some(arg) = self.placeable()? else {
                return Err(self.error(ParseErrorKind::MissingArgument(format!(
                    "an argument for \\{name}"
                ))));
            };
            return Ok(Some(self.accent(name, arg)));
        }
        match name {
            "frac" | "stackrel" | "binom" => {
                self.consume_command(name);
                return self.fraction(name, start).map(Some);
            }
            "genfrac" => {
                self.consume_command(name);
                return self.genfrac(start).map(Some);
            }
            "sqrt" => {
                self.consume_command(name);
                return self.sqrt(start).map(Some);
            }
            _ => {}
        }
        if let Some(font) = name.strip_prefix("math").filter(|f| FONT_NAMES.contains(f)) {
            self.consume_command(name);
            self.skip_ws();
            return match self.group(Some(font))? {
                Some(node) => Ok(Some(node)),
                None => Err(self.error(ParseErrorKind::MissingArgument(format!(
                    "'{{' after \\{name}"
                )))),
            };
        }
        if is_known_symbol(name) {
            self.consume_command(name);
            return Ok(Some(self.symbol(&format!("\\{name}"))));
        }
        if SPACE_WIDTHS.contains_key(name)
            || FONT_NAMES.contains(name)
            || matches!(name, "hspace" | "left" | "right")
        {
            return Ok(None);
        }
        Err(self.error(ParseErrorKind::UnknownSymbol(format!("\\{name}"))))
    }

    /// `{ items }`, optionally in a font selected by a `\mathxx` prefix.
    pub(crate) fn group(&mut self, font: Option<&str>) -> Result<Option<Node>, ParseError> {
        if self.peek() != Some('{') {
            return Ok(None);
        }
        let start = self.pos;
        let mut entry_state = self.state().clone();
        if let Some(font) = font {
            entry_state.set_font(font);
        }
        if let Some(hit) = self.memo.get(MemoRule::Group, start, &entry_state) {
            return Ok(hit.map(|(end, node)| {
                self.pos = end;
                node
            }));
        }

        self.pos += 1;
        self.states.push(entry_state.clone());
        let items = self.items()?;
        if !self.expect('}') {
            return Err(self.error(ParseErrorKind::UnclosedGroup));
        }
        self.pop_state();

        let node = Node::Hlist(List::hlist(items, true, self.metrics));
        self.memo.insert(
            MemoRule::Group,
            start,
            &entry_state,
            Some((self.pos, node.clone())),
        );
        Ok(Some(node))
    }

    /// Operands of `\frac`, `\stackrel` and `\binom`.
    fn fraction(&mut self, name: &str, start: usize) -> Result<Node, ParseError> {
        let (num, den) = self.two_groups(name, start, "{num}{den}")?;
        let thickness = self
            .metrics
            .get_underline_thickness(self.state().fontsize, self.state().dpi);
        Ok(match name {
            "frac" => self.genfrac_layout("", "", thickness, num, den),
            "stackrel" => self.genfrac_layout("", "", 0.0, num, den),
            _ => self.genfrac_layout("(", ")", 0.0, num, den),
        })
    }

    fn two_groups(
        &mut self,
        name: &str,
        start: usize,
        usage: &str,
    ) -> Result<(Node, Node), ParseError> {
        let missing = || ParseErrorKind::MissingArgument(format!("\\{name}{usage}"));
        self.skip_ws();
        let Some(first) = self.group(None)? else {
            return Err(self.error_at(start, missing()));
        };
        self.skip_ws();
        let Some(second) = self.group(None)? else {
            return Err(self.error_at(start, missing()));
        };
        Ok((first, second))
    }

    /// `\genfrac{ldelim}{rdelim}{rulesize}{style}{num}{den}`.
    fn genfrac(&mut self, start: usize) -> Result<Node, ParseError> {
        let usage = || {
            ParseErrorKind::MissingArgument(
                "\\genfrac{ldelim}{rdelim}{rulesize}{style}{num}{den}".to_string(),
            )
        };

        let ldelim = self.braced_delimiter(start, usage, |d| {
            d.is_empty() || AMBI_DELIMS.contains(d) || LEFT_DELIMS.contains(d)
        })?;
        let rdelim = self.braced_delimiter(start, usage, |d| {
            d.is_empty()
                || d == "\\}"
                || AMBI_DELIMS.contains(d)
                || (d != "}" && RIGHT_DELIMS.contains(d))
        })?;

        if !self.expect('{') {
            return Err(self.error_at(start, usage()));
        }
        self.skip_ws();
        let size_pos = self.pos;
        let size = self.lex(lexer::rule_size).unwrap_or("");
        if !self.expect('}') {
            self.skip_ws();
            let found = self.rest().split('}').next().unwrap_or("").trim().to_string();
            return Err(self.error_at(size_pos, ParseErrorKind::InvalidNumber(found)));
        }
        let rule = if size.is_empty() || size == "." {
            self.metrics
                .get_underline_thickness(self.state().fontsize, self.state().dpi)
        } else {
            size.parse::<f32>()
                .map_err(|_| self.error_at(size_pos, ParseErrorKind::InvalidNumber(size.into())))?
        };

        // The style slot is accepted for compatibility and has no effect.
        self.skip_ws();
        if self.group(None)?.is_none() {
            return Err(self.error_at(start, usage()));
        }
        let (num, den) = self.two_groups(
            "genfrac",
            start,
            "{ldelim}{rdelim}{rulesize}{style}{num}{den}",
        )?;

        let rdelim = if rdelim == "\\}" { "}" } else { rdelim };
        Ok(self.genfrac_layout(ldelim, rdelim, rule, num, den))
    }

    fn braced_delimiter(
        &mut self,
        start: usize,
        usage: impl Fn() -> ParseErrorKind,
        allowed: impl Fn(&str) -> bool,
    ) -> Result<&'a str, ParseError> {
        if !self.expect('{') {
            return Err(self.error_at(start, usage()));
        }
        self.skip_ws();
        let token = if self.peek() == Some('}') {
            ""
        } else {
            self.lex(lexer::delimiter).unwrap_or("")
        };
        if !allowed(token) || !self.expect('}') {
            return Err(self.error_at(start, usage()));
        }
        Ok(token)
    }

    /// `\sqrt[index]{body}`.
    fn sqrt(&mut self, start: usize) -> Result<Node, ParseError> {
        self.skip_ws();
        let mut index = None;
        if self.peek() == Some('[') {
            self.pos += 1;
            self.skip_ws();
            let Some(digits) = self.lex(lexer::digits) else {
                return Err(self.error(ParseErrorKind::InvalidNumber(
                    self.rest().chars().take_while(|c| *c != ']').collect(),
                )));
            };
            if !self.expect(']') {
                return Err(self.error(ParseErrorKind::MissingArgument("']'".to_string())));
            }
            index = Some(digits);
        }
        self.skip_ws();
        let Some(body) = self.group(None)? else {
            return Err(self.error_at(
                start,
                ParseErrorKind::MissingArgument("\\sqrt{value}".to_string()),
            ));
        };
        Ok(self.sqrt_layout(index, body))
    }

    /// `\left d ... \right d`.
    fn auto_delim(&mut self) -> Result<Option<Node>, ParseError> {
        if self.peek_command() != Some("left") {
            return Ok(None);
        }
        let start = self.pos;
        self.consume_command("left");
        let front = self.delimiter_token(|d| LEFT_DELIMS.contains(d) || AMBI_DELIMS.contains(d))?;

        let middle = self.items()?;

        self.skip_ws();
        if self.peek_command() != Some("right") {
            return Err(self.error_at(start, ParseErrorKind::UnclosedLeft));
        }
        self.consume_command("right");
        let back = self.delimiter_token(|d| RIGHT_DELIMS.contains(d) || AMBI_DELIMS.contains(d))?;

        Ok(Some(self.auto_sized_delimiter(front, middle, back)))
    }

    /// A delimiter after `\left` or `\right`; `\{` and `\}` stand for the
    /// braces.
    fn delimiter_token(&mut self, allowed: impl Fn(&str) -> bool) -> Result<&'a str, ParseError> {
        self.skip_ws();
        let pos = self.pos;
        let token = match self.lex(lexer::delimiter) {
            Some("\\{") => "{",
            Some("\\}") => "}",
            Some(token) => token,
            None => return Err(self.error(ParseErrorKind::InvalidDelimiter(String::new()))),
        };
        if !allowed(token) {
            return Err(self.error_at(pos, ParseErrorKind::InvalidDelimiter(token.to_string())));
        }
        Ok(token)
    }

    fn function(&mut self, name: &str) -> Node {
        self.push_state();
        self.state_mut().set_font("rm");
        let state = self.state();
        let mut buf = [0u8; 4];
        let letters = name
            .chars()
            .map(|c| Node::Char(Char::new(c.encode_utf8(&mut buf), state, self.metrics)))
            .collect();
        self.pop_state();
        Node::Hlist(List::hlist_of_kind(
            ListKind::Function(name.to_string()),
            letters,
            true,
            self.metrics,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathtext_traits::UniformMetrics;

    fn parse(input: &str) -> Result<Node, ParseError> {
        let _ = env_logger::builder().is_test(true).try_init();
        let metrics = UniformMetrics::new();
        let config = ParserConfig::default();
        Parser::new(input, &metrics, &config, 12.0, 72.0).parse()
    }

    fn root_width(input: &str) -> f32 {
        parse(input).unwrap().width()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(root_width("abc"), 30.0);
    }

    #[test]
    fn test_escaped_delimiter_in_text() {
        // "a$b" as literal text: three glyphs
        assert_eq!(root_width("a\\$b"), 30.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(root_width(""), 0.0);
    }

    #[test]
    fn test_math_whitespace_is_skipped() {
        assert_eq!(root_width("$a b$"), root_width("$ab$"));
    }

    #[test]
    fn test_space_commands() {
        // em width is the advance of 'm': 10
        assert!((root_width("$a\\quad b$") - 36.0).abs() < 1e-4);
        assert!((root_width("$a\\!b$") - 16.0).abs() < 1e-4);
        assert!((root_width("$a\\hspace{2}b$") - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_spaced_symbol() {
        // 10 + (2 + 10 + 2) + 10
        assert!((root_width("$a=b$") - 34.0).abs() < 1e-4);
    }

    #[test]
    fn test_punctuation() {
        assert!((root_width("$a,b$") - 32.0).abs() < 1e-4);
    }

    #[test]
    fn test_font_switch_is_scoped_to_group() {
        let node = parse("${\\rm a}b$").unwrap();
        let root = node.as_list().unwrap();
        let math = root.children[1].as_list().unwrap();
        let group = math.children[0].as_list().unwrap();
        let a = group.children[0].as_char().unwrap();
        let b = math.children[1].as_char().unwrap();
        assert_eq!(a.glyph.font, "rm");
        assert_eq!(b.glyph.font, "it");
    }

    #[test]
    fn test_mathrm_group() {
        let node = parse("$\\mathbf{x}$").unwrap();
        let root = node.as_list().unwrap();
        let math = root.children[1].as_list().unwrap();
        let group = math.children[0].as_list().unwrap();
        let x = group.children[0].as_char().unwrap();
        assert_eq!(x.glyph.font, "bf");
        assert_eq!(x.glyph.font_class, "bf");
    }

    #[test]
    fn test_function_name_list() {
        let node = parse("$\\sin$").unwrap();
        let root = node.as_list().unwrap();
        let math = root.children[1].as_list().unwrap();
        let f = math.children[0].as_list().unwrap();
        assert_eq!(f.kind.function_name(), Some("sin"));
        assert_eq!(f.children.len(), 3);
        assert_eq!(f.children[0].as_char().unwrap().glyph.font, "rm");
    }

    #[test]
    fn test_unknown_symbol() {
        let err = parse("$\\foo$").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownSymbol("\\foo".into()));
        assert_eq!(err.column, 2);
    }

    #[test]
    fn test_unclosed_math() {
        let err = parse("$x").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnclosedMath('$'));
    }

    #[test]
    fn test_unclosed_group() {
        let err = parse("${a$").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnclosedGroup);
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_unmatched_close() {
        let err = parse("${a}}$").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnmatchedClose);
    }

    #[test]
    fn test_hspace_requires_number() {
        let err = parse("$\\hspace{x}$").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MissingArgument("\\hspace{n}".into())
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let metrics = UniformMetrics::new();
        let config = ParserConfig {
            math_delimiter: '#',
            ..Default::default()
        };
        let node = Parser::new("a#b#", &metrics, &config, 12.0, 72.0)
            .parse()
            .unwrap();
        let root = node.as_list().unwrap();
        let math = root.children[1].as_list().unwrap();
        assert_eq!(math.children[0].as_char().unwrap().glyph.font, "it");
    }

    #[test]
    fn test_symbol_char_delimiter_closes_math() {
        let metrics = UniformMetrics::new();
        for delim in ['|', '+', '\u{20ac}'] {
            let config = ParserConfig {
                math_delimiter: delim,
                ..Default::default()
            };
            let input = format!("a{delim}x{delim}b");
            let node = Parser::new(&input, &metrics, &config, 12.0, 72.0)
                .parse()
                .unwrap();
            let root = node.as_list().unwrap();
            assert_eq!(root.children.len(), 3);
            let math = root.children[1].as_list().unwrap();
            assert_eq!(math.children.len(), 1);
            assert_eq!(math.children[0].as_char().unwrap().symbol(), "x");
        }
    }

    #[test]
    fn test_memo_serves_bare_placeable() {
        let metrics = UniformMetrics::new();
        let config = ParserConfig::default();
        let mut parser = Parser::new("${ab} c$", &metrics, &config, 12.0, 72.0);
        parser.pos = 1;
        parser.push_state();
        let node = parser.subsuper().unwrap().unwrap();
        assert_eq!(node.width(), 20.0);
        assert!(parser.memo.hits() >= 1);
        assert_eq!(parser.pos, 5);
    }
}

//! Parser for mathtext strings.
//!
//! Input is literal text with `$...$` math segments in TeX notation. The
//! parser lays out boxes as it recognizes constructs, so the result of a
//! successful parse is a fully packed [`Node`] tree ready to be shipped to a
//! renderer.

mod actions;
pub mod config;
pub mod error;
mod lexer;
mod memo;
pub mod parser;
pub mod symbols;

pub use self::config::ParserConfig;
pub use self::error::{ParseError, ParseErrorKind};
pub use self::parser::Parser;
pub use self::symbols::unicode_for;

use mathtext_layout::Node;
use mathtext_traits::MetricsProvider;

/// Parse `input` with the default configuration.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the first malformed construct.
pub fn parse(
    input: &str,
    metrics: &dyn MetricsProvider,
    fontsize: f32,
    dpi: f32,
) -> Result<Node, ParseError> {
    parse_with_config(input, metrics, &ParserConfig::default(), fontsize, dpi)
}

pub fn parse_with_config(
    input: &str,
    metrics: &dyn MetricsProvider,
    config: &ParserConfig,
    fontsize: f32,
    dpi: f32,
) -> Result<Node, ParseError> {
    Parser::new(input, metrics, config, fontsize, dpi).parse()
}

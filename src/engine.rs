use crate::config::{MathTextConfig, check_dimension};
use crate::error::MathTextError;
use mathtext_layout::Node;
use mathtext_parser::{Parser, ParserConfig};
use mathtext_render_core::{DrawList, RenderVisitor, render};
use mathtext_traits::MetricsProvider;

/// Whether `s` contains a math segment: two `$` with something between them.
pub fn is_tex(s: &str) -> bool {
    has_math_segment(s, '$')
}

fn has_math_segment(s: &str, delim: char) -> bool {
    match s.find(delim) {
        Some(open) => s[open + delim.len_utf8()..]
            .chars()
            .skip(1)
            .any(|c| c == delim),
        None => false,
    }
}

/// Entry point: parses strings against one metrics provider and hands the
/// results to renderers.
///
/// The provider is shared by reference across parses, so one `MathText` can
/// serve many threads.
#[derive(Debug)]
pub struct MathText<P: MetricsProvider> {
    metrics: P,
    config: MathTextConfig,
    parser_config: ParserConfig,
}

impl<P: MetricsProvider> MathText<P> {
    pub fn new(metrics: P) -> Self {
        let config = MathTextConfig::default();
        let parser_config = config.parser_config();
        Self {
            metrics,
            config,
            parser_config,
        }
    }

    /// # Errors
    ///
    /// Returns `MathTextError::Config` when the configuration is invalid.
    pub fn with_config(metrics: P, config: MathTextConfig) -> Result<Self, MathTextError> {
        config.validate()?;
        let parser_config = config.parser_config();
        Ok(Self {
            metrics,
            config,
            parser_config,
        })
    }

    pub fn config(&self) -> &MathTextConfig {
        &self.config
    }

    pub fn metrics(&self) -> &P {
        &self.metrics
    }

    /// Like [`is_tex`], but with the configured math delimiter.
    pub fn is_tex(&self, s: &str) -> bool {
        has_math_segment(s, self.config.math_delimiter)
    }

    /// Lay out `input` at the configured size and dpi.
    pub fn parse(&self, input: &str) -> Result<Node, MathTextError> {
        self.parse_at(input, self.config.fontsize, self.config.dpi)
    }

    /// Lay out `input` at an explicit size and dpi.
    pub fn parse_at(&self, input: &str, fontsize: f32, dpi: f32) -> Result<Node, MathTextError> {
        check_dimension("fontsize", fontsize)?;
        check_dimension("dpi", dpi)?;
        let node = Parser::new(input, &self.metrics, &self.parser_config, fontsize, dpi).parse()?;
        Ok(node)
    }

    /// Lay out every input, one result per input in the same order.
    ///
    /// With the `rayon` feature the inputs are spread over rayon's global
    /// pool.
    #[cfg(feature = "rayon")]
    pub fn parse_batch(&self, inputs: &[&str]) -> Vec<Result<Node, MathTextError>> {
        use rayon::prelude::*;

        log::debug!("parsing batch of {} on rayon", inputs.len());
        inputs.par_iter().map(|input| self.parse(input)).collect()
    }

    /// Lay out every input, one result per input in the same order.
    #[cfg(not(feature = "rayon"))]
    pub fn parse_batch(&self, inputs: &[&str]) -> Vec<Result<Node, MathTextError>> {
        log::debug!("parsing batch of {} sequentially", inputs.len());
        inputs.iter().map(|input| self.parse(input)).collect()
    }

    /// Parse `input` and ship it to `visitor`. Returns the laid out tree.
    pub fn render<V: RenderVisitor + ?Sized>(
        &self,
        input: &str,
        visitor: &mut V,
    ) -> Result<Node, MathTextError> {
        let node = self.parse(input)?;
        render(visitor, &node)?;
        Ok(node)
    }

    /// Parse `input` and record its drawing commands.
    pub fn draw_list(&self, input: &str) -> Result<DrawList, MathTextError> {
        let mut list = DrawList::new();
        self.render(input, &mut list)?;
        Ok(list)
    }
}

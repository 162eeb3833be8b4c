use mathtext_parser::ParseError;
use mathtext_render_core::RenderError;
use thiserror::Error;

/// Everything that can go wrong between an input string and drawn output.
#[derive(Error, Debug)]
pub enum MathTextError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

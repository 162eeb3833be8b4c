use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Non-finite coordinate while shipping {what}: ({x}, {y})")]
    NonFinite { what: &'static str, x: f32, y: f32 },
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}

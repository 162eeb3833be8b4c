use crate::error::MathTextError;
use mathtext_parser::ParserConfig;
use serde::{Deserialize, Serialize};

/// Settings for a [`MathText`](crate::MathText) instance.
///
/// Deserializes from camelCase keys; every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MathTextConfig {
    /// Opens and closes math segments.
    pub math_delimiter: char,
    /// Font for text outside math segments.
    pub text_font: String,
    /// Font each math segment starts in.
    pub math_font: String,
    /// Font size in points.
    pub fontsize: f32,
    pub dpi: f32,
}

impl Default for MathTextConfig {
    fn default() -> Self {
        let parser = ParserConfig::default();
        Self {
            math_delimiter: parser.math_delimiter,
            text_font: parser.text_font,
            math_font: parser.math_font,
            fontsize: 12.0,
            dpi: 72.0,
        }
    }
}

impl MathTextConfig {
    /// Checks the settings the parser cannot recover from.
    pub fn validate(&self) -> Result<(), MathTextError> {
        check_dimension("fontsize", self.fontsize)?;
        check_dimension("dpi", self.dpi)?;
        if self.math_delimiter == '\\' || self.math_delimiter.is_whitespace() {
            return Err(MathTextError::Config(format!(
                "math delimiter {:?} cannot open a math segment",
                self.math_delimiter
            )));
        }
        if self.text_font.is_empty() || self.math_font.is_empty() {
            return Err(MathTextError::Config("font names must not be empty".into()));
        }
        Ok(())
    }

    pub(crate) fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            math_delimiter: self.math_delimiter,
            text_font: self.text_font.clone(),
            math_font: self.math_font.clone(),
        }
    }
}

pub(crate) fn check_dimension(name: &str, value: f32) -> Result<(), MathTextError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MathTextError::Config(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MathTextConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.math_delimiter, '$');
        assert_eq!(config.math_font, "it");
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        for (fontsize, dpi) in [(0.0, 72.0), (-1.0, 72.0), (12.0, f32::NAN), (f32::INFINITY, 72.0)] {
            let config = MathTextConfig {
                fontsize,
                dpi,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(MathTextError::Config(_))));
        }
    }

    #[test]
    fn test_rejects_backslash_delimiter() {
        let config = MathTextConfig {
            math_delimiter: '\\',
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let config: MathTextConfig =
            serde_json::from_str(r##"{ "mathDelimiter": "#", "fontsize": 10.0 }"##).unwrap();
        assert_eq!(config.math_delimiter, '#');
        assert_eq!(config.fontsize, 10.0);
        assert_eq!(config.dpi, 72.0);
        assert_eq!(config.text_font, "rm");
    }
}

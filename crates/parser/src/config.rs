/// Options that change how input is split and which faces it starts in.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Character that opens and closes a math segment. A backslash in front
    /// of it in literal text produces the character itself.
    pub math_delimiter: char,

    /// Font for literal text outside math segments.
    ///
    /// Defaults to `"rm"`.
    pub text_font: String,

    /// Font every math segment starts in.
    ///
    /// Defaults to `"it"`.
    pub math_font: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            math_delimiter: '$',
            text_font: "rm".to_string(),
            math_font: "it".to_string(),
        }
    }
}

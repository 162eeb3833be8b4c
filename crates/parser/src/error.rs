use thiserror::Error;

/// What went wrong while parsing a mathtext string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Unexpected end of input")]
    UnexpectedEnd,

    #[error("Expected '}}'")]
    UnclosedGroup,

    #[error("Unmatched '}}'")]
    UnmatchedClose,

    #[error("Double subscript")]
    DoubleSubscript,

    #[error("Double superscript")]
    DoubleSuperscript,

    #[error("Subscript/superscript sequence is too long. Use braces {{ }} to remove ambiguity.")]
    ScriptsTooLong,

    #[error("Expected {0}")]
    MissingArgument(String),

    #[error("Expected a delimiter, found '{0}'")]
    InvalidDelimiter(String),

    #[error("Expected end of math '{0}'")]
    UnclosedMath(char),

    #[error("Expected \\right to close \\left")]
    UnclosedLeft,

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
}

/// A fatal parse error, located in the source.
///
/// Displays as the offending line with a caret under the failing column,
/// followed by the description.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("\n{source_line}\n{}^\n{kind}", caret(.column))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source_line: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

fn caret(column: &usize) -> String {
    " ".repeat(column.saturating_sub(1))
}

impl ParseError {
    pub(crate) fn at(input: &str, pos: usize, kind: ParseErrorKind) -> Self {
        let pos = pos.min(input.len());
        let before = &input[..pos];
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = input[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(input.len());
        Self {
            kind,
            source_line: input[line_start..line_end].to_string(),
            line: before.matches('\n').count() + 1,
            column: input[line_start..pos].chars().count() + 1,
        }
    }
}

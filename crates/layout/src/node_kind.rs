/// Records what construct built a horizontal list.
///
/// The parser inspects finished lists when it places scripts (limits go
/// above `\lim`, not beside it), so the origin survives packing instead of
/// being inferred from the children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// An ordinary list or vertical stack.
    Plain,
    /// Content flanked by centering glue.
    Centered,
    /// The letters of a named function such as `\sin`.
    Function(String),
    /// A glyph picked or scaled to match a width.
    AutoWidth,
    /// A glyph picked or scaled to match a height plus depth.
    AutoHeight,
}

impl ListKind {
    /// Returns a string representation, primarily for debugging or log messages.
    pub fn as_str(&self) -> &str {
        match self {
            ListKind::Plain => "Plain",
            ListKind::Centered => "Centered",
            ListKind::Function(name) => name,
            ListKind::AutoWidth => "AutoWidth",
            ListKind::AutoHeight => "AutoHeight",
        }
    }

    /// The function name, if this list spells one.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            ListKind::Function(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_as_str() {
        assert_eq!(ListKind::Plain.as_str(), "Plain");
        assert_eq!(ListKind::Function("lim".into()).as_str(), "lim");
    }

    #[test]
    fn test_function_name() {
        assert_eq!(ListKind::Function("sin".into()).function_name(), Some("sin"));
        assert_eq!(ListKind::Centered.function_name(), None);
    }
}

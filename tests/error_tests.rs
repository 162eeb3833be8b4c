mod common;

use common::{TestResult, init_logger, uniform_engine};
use mathtext::{MathTextError, ParseErrorKind};

fn parse_error(input: &str) -> Result<mathtext::ParseError, Box<dyn std::error::Error>> {
    match uniform_engine().parse(input) {
        Err(MathTextError::Parse(err)) => Ok(err),
        Err(other) => Err(format!("unexpected error for {input:?}: {other}").into()),
        Ok(_) => Err(format!("{input:?} parsed").into()),
    }
}

#[test]
fn test_unbalanced_braces_are_fatal() -> TestResult {
    init_logger();
    assert_eq!(parse_error("${a}")?.kind, ParseErrorKind::UnclosedMath('$'));
    assert_eq!(parse_error("${a")?.kind, ParseErrorKind::UnclosedGroup);
    assert_eq!(parse_error("${a}}$")?.kind, ParseErrorKind::UnmatchedClose);
    Ok(())
}

#[test]
fn test_double_scripts() -> TestResult {
    assert_eq!(parse_error("$x_a_b$")?.kind, ParseErrorKind::DoubleSubscript);
    assert_eq!(parse_error("$x^a^b$")?.kind, ParseErrorKind::DoubleSuperscript);
    assert_eq!(parse_error("$x^a_b^c$")?.kind, ParseErrorKind::ScriptsTooLong);
    Ok(())
}

#[test]
fn test_missing_arguments() -> TestResult {
    assert!(matches!(
        parse_error("$\\frac{a}$")?.kind,
        ParseErrorKind::MissingArgument(_)
    ));
    assert!(matches!(
        parse_error("$\\sqrt$")?.kind,
        ParseErrorKind::MissingArgument(_)
    ));
    assert!(matches!(
        parse_error("$x^$")?.kind,
        ParseErrorKind::MissingArgument(_)
    ));
    Ok(())
}

#[test]
fn test_unknown_symbol_message() -> TestResult {
    let err = parse_error("one\n$a + \\bogus$")?;
    assert_eq!(err.kind, ParseErrorKind::UnknownSymbol("\\bogus".into()));
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 6);
    assert_eq!(
        err.to_string(),
        "\n$a + \\bogus$\n     ^\nUnknown symbol: \\bogus"
    );
    Ok(())
}

#[test]
fn test_delimiter_errors() -> TestResult {
    assert_eq!(parse_error("$\\left(x$")?.kind, ParseErrorKind::UnclosedLeft);
    assert_eq!(
        parse_error("$\\left(x\\right a$")?.kind,
        ParseErrorKind::InvalidDelimiter("a".into())
    );
    Ok(())
}

#[test]
fn test_error_converts_to_boxed_error() {
    fn run() -> TestResult {
        uniform_engine().parse("$\\frac$")?;
        Ok(())
    }
    let err = run().unwrap_err();
    assert!(err.to_string().starts_with("Parsing failed:"));
}

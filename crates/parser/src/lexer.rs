//! `nom` parsers for the lexical pieces of the grammar.
//!
//! Each function consumes from the front of the remaining input; the
//! recursive grammar in `parser.rs` decides what to do with the result.

use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{alpha1, anychar, char, digit0, digit1, multispace0, one_of},
    combinator::{map_res, opt, recognize},
    sequence::preceded,
};

/// A control sequence, returned without its backslash: a maximal run of
/// ASCII letters (`\alpha`), or exactly one other character (`\,`, `\{`).
pub fn control_word(input: &str) -> IResult<&str, &str> {
    preceded(char('\\'), alt((alpha1, recognize(anychar)))).parse(input)
}

/// A signed decimal number such as `2`, `-0.5` or `.25`.
pub fn float(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// An unsigned run of digits.
pub fn digits(input: &str) -> IResult<&str, &str> {
    digit1(input)
}

/// The rule size slot of `\genfrac`: digits with an optional fraction,
/// possibly empty.
pub fn rule_size(input: &str) -> IResult<&str, &str> {
    recognize((digit0, opt((char('.'), digit0)))).parse(input)
}

/// A delimiter token: a control word with its backslash, or one character.
pub fn delimiter(input: &str) -> IResult<&str, &str> {
    alt((recognize(control_word), recognize(anychar))).parse(input)
}

pub fn whitespace(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_word_letters() {
        assert_eq!(control_word("\\alpha+1"), Ok(("+1", "alpha")));
        assert_eq!(control_word("\\circledast x"), Ok((" x", "circledast")));
    }

    #[test]
    fn test_control_word_single_char() {
        assert_eq!(control_word("\\,x"), Ok(("x", ",")));
        assert_eq!(control_word("\\ x"), Ok(("x", " ")));
        assert_eq!(control_word("\\{"), Ok(("", "{")));
    }

    #[test]
    fn test_control_word_requires_backslash() {
        assert!(control_word("alpha").is_err());
        assert!(control_word("\\").is_err());
    }

    #[test]
    fn test_float() {
        assert_eq!(float("2}"), Ok(("}", 2.0)));
        assert_eq!(float("-0.5}"), Ok(("}", -0.5)));
        assert_eq!(float(".25"), Ok(("", 0.25)));
        assert_eq!(float("3."), Ok(("", 3.0)));
        assert!(float("x").is_err());
        assert!(float(".").is_err());
    }

    #[test]
    fn test_rule_size() {
        assert_eq!(rule_size("1.5}"), Ok(("}", "1.5")));
        assert_eq!(rule_size("}"), Ok(("}", "")));
    }

    #[test]
    fn test_delimiter() {
        assert_eq!(delimiter("(x"), Ok(("x", "(")));
        assert_eq!(delimiter("\\langle x"), Ok((" x", "\\langle")));
        assert_eq!(delimiter("\\|x"), Ok(("x", "\\|")));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits("12]"), Ok(("]", "12")));
        assert!(digits("]").is_err());
    }
}

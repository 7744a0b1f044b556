//! # Python Literals
//!
//! Renders parameter values as Python source literals.

use crate::{GameLabError, GameLabResult, ParamValue};

/// Largest magnitude printed as an integer literal.
const MAX_INTEGRAL: f64 = 1e15;

/// Renders a number. Integral values drop the fractional part.
pub fn number(value: f64) -> GameLabResult<String> {
    if !value.is_finite() {
        return Err(GameLabError::InvalidTemplate(format!(
            "cannot render non-finite number {}",
            value
        )));
    }
    if value.fract() == 0.0 && value.abs() < MAX_INTEGRAL {
        Ok(format!("{}", value as i64))
    } else {
        Ok(format!("{}", value))
    }
}

/// Renders a double-quoted string literal.
pub fn string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // keeps placeholder markers out of generated code
            '$' if chars.peek() == Some(&'{') => out.push_str("\\x24"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn boolean(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Renders any parameter value.
pub fn render(value: &ParamValue) -> GameLabResult<String> {
    match value {
        ParamValue::Number(n) => number(*n),
        ParamValue::Text(s) => Ok(string(s)),
        ParamValue::Boolean(b) => Ok(boolean(*b).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(number(25.0).unwrap(), "25");
        assert_eq!(number(-3.0).unwrap(), "-3");
        assert_eq!(number(0.85).unwrap(), "0.85");
        assert_eq!(number(-0.0).unwrap(), "0");
        assert!(number(f64::NAN).is_err());
        assert!(number(f64::INFINITY).is_err());
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(string("red"), "\"red\"");
        assert_eq!(string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(string("a\\b"), "\"a\\\\b\"");
        assert_eq!(string("line\nnext\t"), "\"line\\nnext\\t\"");
        assert_eq!(string("${x} $5"), "\"\\x24{x} $5\"");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(render(&ParamValue::Boolean(true)).unwrap(), "True");
        assert_eq!(render(&ParamValue::Boolean(false)).unwrap(), "False");
    }
}

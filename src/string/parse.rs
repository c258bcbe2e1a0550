//! Fallible numeric and boolean parsing
//!
//! Every parser consumes the entire input or fails: no leading sign bonus
//! characters (`+` is rejected), no surrounding whitespace, no trailing
//! garbage, no partial results. Failure is reported as `None`.

use std::str::FromStr;

use crate::string::ascii::to_lower;
use crate::string::StrView;

/// Shared strict-parse front end: whole-input `FromStr` with `+` rejected
fn parse_strict<'a, T: FromStr>(input: impl Into<StrView<'a>>) -> Option<T> {
    let v = input.into();
    let s = v.as_str()?;
    if s.is_empty() || s.starts_with('+') {
        return None;
    }
    s.parse().ok()
}

/// Parse a 32-bit signed integer
///
/// # Examples
///
/// ```rust
/// use zerostr::try_parse_int;
///
/// assert_eq!(try_parse_int("-123"), Some(-123));
/// assert_eq!(try_parse_int("123abc"), None);
/// assert_eq!(try_parse_int("+123"), None);
/// ```
pub fn try_parse_int<'a>(input: impl Into<StrView<'a>>) -> Option<i32> {
    parse_strict(input)
}

/// Parse a 32-bit unsigned integer
pub fn try_parse_uint<'a>(input: impl Into<StrView<'a>>) -> Option<u32> {
    parse_strict(input)
}

/// Parse a 64-bit signed integer
pub fn try_parse_long<'a>(input: impl Into<StrView<'a>>) -> Option<i64> {
    parse_strict(input)
}

/// Parse a 32-bit float
pub fn try_parse_float<'a>(input: impl Into<StrView<'a>>) -> Option<f32> {
    parse_strict(input)
}

/// Parse a 64-bit float
pub fn try_parse_double<'a>(input: impl Into<StrView<'a>>) -> Option<f64> {
    parse_strict(input)
}

/// Parse a boolean from its common textual spellings, case-insensitively
///
/// True: `1`, `t`, `y`, `on`, `yes`, `true`.
/// False: `0`, `f`, `n`, `no`, `off`, `false`.
///
/// # Examples
///
/// ```rust
/// use zerostr::try_parse_bool;
///
/// assert_eq!(try_parse_bool("Yes"), Some(true));
/// assert_eq!(try_parse_bool("off"), Some(false));
/// assert_eq!(try_parse_bool("maybe"), None);
/// ```
pub fn try_parse_bool<'a>(input: impl Into<StrView<'a>>) -> Option<bool> {
    let v = input.into();
    let b = v.as_bytes();
    if b.len() == 1 {
        return match to_lower(b[0]) {
            b'1' | b't' | b'y' => Some(true),
            b'0' | b'f' | b'n' => Some(false),
            _ => None,
        };
    }
    if b.eq_ignore_ascii_case(b"on") || b.eq_ignore_ascii_case(b"yes") || b.eq_ignore_ascii_case(b"true")
    {
        Some(true)
    } else if b.eq_ignore_ascii_case(b"no")
        || b.eq_ignore_ascii_case(b"off")
        || b.eq_ignore_ascii_case(b"false")
    {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(try_parse_int("123"), Some(123));
        assert_eq!(try_parse_int("0"), Some(0));
        assert_eq!(try_parse_int("-123"), Some(-123));
        assert_eq!(try_parse_int("2147483647"), Some(i32::MAX));
        assert_eq!(try_parse_int("-2147483648"), Some(i32::MIN));

        assert_eq!(try_parse_int(""), None);
        assert_eq!(try_parse_int("abc"), None);
        assert_eq!(try_parse_int("123abc"), None);
        assert_eq!(try_parse_int("abc123"), None);
        assert_eq!(try_parse_int("12.34"), None);
        assert_eq!(try_parse_int(" 123"), None);
        assert_eq!(try_parse_int("123 "), None);
        assert_eq!(try_parse_int("+123"), None);
        assert_eq!(try_parse_int("2147483648"), None); // max + 1
        assert_eq!(try_parse_int("-2147483649"), None); // min - 1
        assert_eq!(try_parse_int("999999999999999999999"), None);
    }

    #[test]
    fn test_parse_uint() {
        assert_eq!(try_parse_uint("123"), Some(123));
        assert_eq!(try_parse_uint("0"), Some(0));
        assert_eq!(try_parse_uint("4294967295"), Some(u32::MAX));

        assert_eq!(try_parse_uint(""), None);
        assert_eq!(try_parse_uint("-1"), None);
        assert_eq!(try_parse_uint("-123"), None);
        assert_eq!(try_parse_uint("+123"), None);
        assert_eq!(try_parse_uint("4294967296"), None); // max + 1
        assert_eq!(try_parse_uint("12.34"), None);
    }

    #[test]
    fn test_parse_long() {
        assert_eq!(try_parse_long("9223372036854775807"), Some(i64::MAX));
        assert_eq!(try_parse_long("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(try_parse_long("9223372036854775808"), None);
        assert_eq!(try_parse_long("0"), Some(0));
        assert_eq!(try_parse_long(""), None);
    }

    #[test]
    fn test_parse_double() {
        assert_eq!(try_parse_double("123"), Some(123.0));
        assert_eq!(try_parse_double("0"), Some(0.0));
        assert_eq!(try_parse_double("-123.456"), Some(-123.456));
        assert_eq!(try_parse_double("0.123"), Some(0.123));
        assert_eq!(try_parse_double("1.23e2"), Some(123.0));
        assert_eq!(try_parse_double("1.23e-2"), Some(0.0123));

        assert_eq!(try_parse_double(""), None);
        assert_eq!(try_parse_double("abc"), None);
        assert_eq!(try_parse_double("123abc"), None);
        assert_eq!(try_parse_double(" 123.456"), None);
        assert_eq!(try_parse_double("123.456 "), None);
        assert_eq!(try_parse_double("+123.456"), None);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(try_parse_float("1.5"), Some(1.5));
        assert_eq!(try_parse_float("-0.25"), Some(-0.25));
        assert_eq!(try_parse_float("+1.5"), None);
        assert_eq!(try_parse_float(""), None);
    }

    #[test]
    fn test_parse_non_ascii_digits() {
        // full-width and Arabic-Indic digits are not ASCII digits
        assert_eq!(try_parse_int("１２３"), None);
        assert_eq!(try_parse_int("۱۲۳"), None);
    }

    #[test]
    fn test_parse_bool_true_values() {
        for s in ["1", "t", "y", "T", "Y", "on", "On", "ON", "yes", "YES", "true", "True", "TRUE"] {
            assert_eq!(try_parse_bool(s), Some(true), "{:?}", s);
        }
    }

    #[test]
    fn test_parse_bool_false_values() {
        for s in ["0", "f", "n", "F", "N", "no", "No", "NO", "off", "OFF", "false", "False", "FALSE"]
        {
            assert_eq!(try_parse_bool(s), Some(false), "{:?}", s);
        }
    }

    #[test]
    fn test_parse_bool_invalid_values() {
        for s in ["", "2", "x", "tru", "truee", "onn", "yess", "maybe", " true", "false "] {
            assert_eq!(try_parse_bool(s), None, "{:?}", s);
        }
    }

    #[test]
    fn test_parse_from_bytes() {
        let raw: &[u8] = b"42";
        assert_eq!(try_parse_int(raw), Some(42));

        let invalid_utf8: &[u8] = &[0xFF, 0x30];
        assert_eq!(try_parse_int(invalid_utf8), None);
    }
}

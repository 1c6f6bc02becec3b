//! Coercion layer: textual default to typed [`Value`].
//!
//! Dispatch happens once per field on the closed [`Kind`] enum. Integer kinds
//! sniff their base from the literal prefix; booleans accept the usual
//! single-letter and word spellings; strings pass through verbatim.

mod integer;
#[cfg(test)]
mod tests;

use std::fmt::Display;
use std::str::FromStr;

use crate::{DefaultsError, DefaultsResult, Kind, Value};

use integer::{parse_signed, parse_unsigned};

fn invalid(kind: Kind, text: &str, message: impl Display) -> DefaultsError {
    DefaultsError::InvalidDefaultValue {
        kind,
        text: text.to_owned(),
        message: message.to_string(),
    }
}

/// Parses a boolean literal.
///
/// Truthy: `1 t T TRUE true True`. Falsy: `0 f F FALSE false False`.
fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Whether `text` spells infinity outright, as opposed to overflowing to it.
fn explicit_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parses a float of either width, rejecting finite literals that round to
/// infinity.
fn parse_float<F>(kind: Kind, text: &str, is_infinite: fn(F) -> bool) -> DefaultsResult<F>
where
    F: FromStr + Copy,
    F::Err: Display,
{
    let value: F = text.parse().map_err(|e| invalid(kind, text, e))?;
    if is_infinite(value) && !explicit_infinity(text) {
        return Err(invalid(kind, text, "number does not fit in the target type"));
    }
    Ok(value)
}

/// Converts `text` into a value of `kind`.
///
/// # Examples
///
/// ```
/// use field_defaults::{Kind, Value, coerce};
/// assert_eq!(coerce(Kind::U8, "0x10").ok(), Some(Value::U8(16)));
/// assert_eq!(coerce(Kind::U8, "0b10000").ok(), Some(Value::U8(16)));
/// assert_eq!(coerce(Kind::Str, "as-is").ok(), Some(Value::Str("as-is".into())));
/// ```
///
/// # Errors
///
/// Returns [`DefaultsError::InvalidDefaultValue`] naming the kind and the
/// text when it does not parse or does not fit.
pub fn coerce(kind: Kind, text: &str) -> DefaultsResult<Value> {
    match kind {
        Kind::Bool => parse_bool(text)
            .map(Value::Bool)
            .ok_or_else(|| invalid(kind, text, "expected one of 1, t, true, 0, f, false")),
        Kind::I8 => parse_signed(text).map(Value::I8).map_err(|e| invalid(kind, text, e)),
        Kind::I16 => parse_signed(text).map(Value::I16).map_err(|e| invalid(kind, text, e)),
        Kind::I32 => parse_signed(text).map(Value::I32).map_err(|e| invalid(kind, text, e)),
        Kind::I64 => parse_signed(text).map(Value::I64).map_err(|e| invalid(kind, text, e)),
        Kind::Isize => parse_signed(text).map(Value::Isize).map_err(|e| invalid(kind, text, e)),
        Kind::U8 => parse_unsigned(text).map(Value::U8).map_err(|e| invalid(kind, text, e)),
        Kind::U16 => parse_unsigned(text).map(Value::U16).map_err(|e| invalid(kind, text, e)),
        Kind::U32 => parse_unsigned(text).map(Value::U32).map_err(|e| invalid(kind, text, e)),
        Kind::U64 => parse_unsigned(text).map(Value::U64).map_err(|e| invalid(kind, text, e)),
        Kind::Usize => parse_unsigned(text).map(Value::Usize).map_err(|e| invalid(kind, text, e)),
        Kind::F32 => parse_float(kind, text, f32::is_infinite).map(Value::F32),
        Kind::F64 => parse_float(kind, text, f64::is_infinite).map(Value::F64),
        Kind::Str => Ok(Value::Str(text.to_owned())),
    }
}

//! Integer literal parsing with base sniffing.
//!
//! Accepts an optional sign followed by a decimal literal or one prefixed
//! with `0x`, `0o` or `0b` (either case). A leading `0` followed by more
//! digits selects octal. Underscores may separate digits, and may follow a
//! base prefix, but may not lead, trail or repeat.

use thiserror::Error;

/// Why an integer literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum IntegerError {
    #[error("invalid digit or empty literal")]
    Syntax,
    #[error("misplaced `_` separator")]
    Separator,
    #[error("sign not allowed for unsigned kinds")]
    UnexpectedSign,
    #[error("number does not fit in the target type")]
    OutOfRange,
}

struct Literal {
    negative: bool,
    signed: bool,
    magnitude: u128,
}

fn split_sign(text: &str) -> (bool, bool, &str) {
    text.strip_prefix('-').map_or_else(
        || {
            text.strip_prefix('+')
                .map_or((false, false, text), |rest| (false, true, rest))
        },
        |rest| (true, true, rest),
    )
}

fn split_radix(body: &str) -> (u32, &str, bool) {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    for (prefix, radix) in PREFIXES {
        if let Some(rest) = body.strip_prefix(prefix) {
            return (radix, rest, true);
        }
    }
    match body.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => (8, rest, true),
        _ => (10, body, false),
    }
}

/// Removes `_` separators, rejecting ones that do not sit between digits.
///
/// A separator directly after a base prefix counts as sitting between
/// digits, matching `0x_ff`.
fn strip_separators(digits: &str, prefixed: bool) -> Result<String, IntegerError> {
    let mut out = String::with_capacity(digits.len());
    let mut previous_was_digit = prefixed;
    for c in digits.chars() {
        if c == '_' {
            if !previous_was_digit {
                return Err(IntegerError::Separator);
            }
            previous_was_digit = false;
        } else {
            out.push(c);
            previous_was_digit = true;
        }
    }
    if !previous_was_digit && !out.is_empty() {
        return Err(IntegerError::Separator);
    }
    Ok(out)
}

fn parse_literal(text: &str) -> Result<Literal, IntegerError> {
    let (negative, signed, body) = split_sign(text);
    let (radix, raw_digits, prefixed) = split_radix(body);
    let digits = strip_separators(raw_digits, prefixed)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(IntegerError::Syntax);
    }
    let magnitude = u128::from_str_radix(&digits, radix).map_err(|_| IntegerError::OutOfRange)?;
    Ok(Literal {
        negative,
        signed,
        magnitude,
    })
}

/// Parses a signed integer literal into `T`.
pub(crate) fn parse_signed<T>(text: &str) -> Result<T, IntegerError>
where
    T: TryFrom<i128>,
{
    let literal = parse_literal(text)?;
    let magnitude = i128::try_from(literal.magnitude).map_err(|_| IntegerError::OutOfRange)?;
    let value = if literal.negative {
        magnitude.checked_neg().ok_or(IntegerError::OutOfRange)?
    } else {
        magnitude
    };
    T::try_from(value).map_err(|_| IntegerError::OutOfRange)
}

/// Parses an unsigned integer literal into `T`. Any sign is rejected.
pub(crate) fn parse_unsigned<T>(text: &str) -> Result<T, IntegerError>
where
    T: TryFrom<u128>,
{
    let literal = parse_literal(text)?;
    if literal.signed {
        return Err(IntegerError::UnexpectedSign);
    }
    T::try_from(literal.magnitude).map_err(|_| IntegerError::OutOfRange)
}

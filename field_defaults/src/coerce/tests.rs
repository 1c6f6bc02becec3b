//! Unit tests for the coercion layer.

use super::coerce;
use super::integer::{IntegerError, parse_signed, parse_unsigned};
use crate::{DefaultsError, Kind, Value};
use rstest::rstest;

const INTEGER_KINDS: [Kind; 10] = [
    Kind::I8,
    Kind::I16,
    Kind::I32,
    Kind::I64,
    Kind::Isize,
    Kind::U8,
    Kind::U16,
    Kind::U32,
    Kind::U64,
    Kind::Usize,
];

#[rstest]
fn every_literal_form_of_sixteen_agrees_for_every_integer_kind() {
    for kind in INTEGER_KINDS {
        let decimal = coerce(kind, "16");
        for literal in ["0x10", "0X10", "0o20", "0O20", "020", "0b10000", "0B10000", "1_6"] {
            assert_eq!(coerce(kind, literal), decimal, "{kind} from {literal}");
        }
    }
}

#[rstest]
#[case("0", 0)]
#[case("-0x80", -128)]
#[case("0x7f", 127)]
#[case("+0b101", 5)]
#[case("-0o17", -15)]
#[case("0x_ff_f", 4095)]
fn signed_literals_parse(#[case] text: &str, #[case] expected: i64) {
    assert_eq!(parse_signed::<i64>(text), Ok(expected));
}

#[rstest]
#[case::empty("", IntegerError::Syntax)]
#[case::bare_prefix("0x", IntegerError::Syntax)]
#[case::bad_digit("0b102", IntegerError::Syntax)]
#[case::octal_digit("09", IntegerError::Syntax)]
#[case::exponent("1e3", IntegerError::Syntax)]
#[case::whitespace(" 1", IntegerError::Syntax)]
#[case::leading_separator("_1", IntegerError::Separator)]
#[case::trailing_separator("1_", IntegerError::Separator)]
#[case::double_separator("1__0", IntegerError::Separator)]
fn malformed_literals_are_rejected(#[case] text: &str, #[case] expected: IntegerError) {
    assert_eq!(parse_signed::<i32>(text), Err(expected));
}

#[rstest]
#[case::i8_overflow(Kind::I8, "128")]
#[case::i8_underflow(Kind::I8, "-129")]
#[case::u8_overflow(Kind::U8, "0x100")]
#[case::u16_overflow(Kind::U16, "65536")]
#[case::u64_overflow(Kind::U64, "18446744073709551616")]
#[case::unsigned_negative(Kind::U32, "-1")]
#[case::unsigned_plus(Kind::Usize, "+1")]
#[case::f32_overflow(Kind::F32, "1e39")]
#[case::f32_negative_overflow(Kind::F32, "-3.5e38")]
#[case::f64_overflow(Kind::F64, "1e400")]
fn out_of_range_or_signed_unsigned_is_invalid(#[case] kind: Kind, #[case] text: &str) {
    let err = coerce(kind, text).err();
    assert!(
        matches!(
            &err,
            Some(DefaultsError::InvalidDefaultValue { kind: k, text: t, .. }) if *k == kind && t == text
        ),
        "unexpected result {err:?}"
    );
}

#[rstest]
fn unsigned_reports_sign_reason() {
    assert_eq!(parse_unsigned::<u8>("-1"), Err(IntegerError::UnexpectedSign));
    assert_eq!(parse_unsigned::<u64>("18446744073709551615"), Ok(u64::MAX));
}

#[rstest]
#[case("1", true)]
#[case("t", true)]
#[case("T", true)]
#[case("TRUE", true)]
#[case("true", true)]
#[case("True", true)]
#[case("0", false)]
#[case("f", false)]
#[case("F", false)]
#[case("FALSE", false)]
#[case("false", false)]
#[case("False", false)]
fn boolean_spellings(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(coerce(Kind::Bool, text), Ok(Value::Bool(expected)));
}

#[rstest]
#[case("yes")]
#[case("tRUE")]
#[case("")]
fn boolean_rejects_other_text(#[case] text: &str) {
    assert!(matches!(
        coerce(Kind::Bool, text),
        Err(DefaultsError::InvalidDefaultValue { kind: Kind::Bool, .. })
    ));
}

#[rstest]
fn floats_parse_at_both_widths() {
    assert_eq!(coerce(Kind::F32, "1.32"), Ok(Value::F32(1.32)));
    assert_eq!(coerce(Kind::F64, "1.64"), Ok(Value::F64(1.64)));
    assert_eq!(coerce(Kind::F64, "-2.5e3"), Ok(Value::F64(-2500.0)));
    assert_eq!(coerce(Kind::F32, "inf"), Ok(Value::F32(f32::INFINITY)));
    assert_eq!(coerce(Kind::F64, "-Infinity"), Ok(Value::F64(f64::NEG_INFINITY)));
    assert_eq!(coerce(Kind::F32, "3.4028235e38"), Ok(Value::F32(f32::MAX)));
    assert!(coerce(Kind::F64, "1.2.3").is_err());
}

#[rstest]
#[case("")]
#[case("hello")]
#[case("  padded  ")]
#[case("%not_a_token%")]
fn strings_pass_through_verbatim(#[case] text: &str) {
    assert_eq!(coerce(Kind::Str, text), Ok(Value::Str(text.to_owned())));
}

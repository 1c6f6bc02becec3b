//! Tests for error annotation helpers and messages.

use super::DefaultsError;
use crate::Kind;
use rstest::rstest;

fn invalid_u8() -> DefaultsError {
    DefaultsError::InvalidDefaultValue {
        kind: Kind::U8,
        text: "0x100".to_owned(),
        message: "number too large to fit in target type".to_owned(),
    }
}

#[rstest]
fn root_cause_skips_every_annotation() {
    let err = DefaultsError::in_field("outer", DefaultsError::in_field("inner", invalid_u8()));
    assert_eq!(err.root_cause(), &invalid_u8());
}

#[rstest]
#[case::bare(invalid_u8(), "")]
#[case::annotated(DefaultsError::in_field("level", invalid_u8()), "level")]
#[case::nested(
    DefaultsError::in_field(
        "child",
        DefaultsError::UnsupportedKind { field: "hook", kind: "function" },
    ),
    "child.hook"
)]
#[case::not_settable(
    DefaultsError::FieldNotSettable { record: "Config", field: "secret" },
    "secret"
)]
fn field_path_joins_annotations(#[case] err: DefaultsError, #[case] expected: &str) {
    assert_eq!(err.field_path(), expected);
}

#[rstest]
fn messages_name_kind_text_and_field() {
    let err = DefaultsError::in_field("level", invalid_u8());
    let message = err.to_string();
    assert!(message.starts_with("field `level`: "), "{message}");
    assert!(message.contains("\"0x100\""), "{message}");
    assert!(message.contains("`u8`"), "{message}");
}

#[rstest]
fn token_name_errors_quote_the_name() {
    let err = DefaultsError::InvalidTokenName {
        name: "bad name".to_owned(),
    };
    assert!(err.to_string().contains("\"bad name\""));
}

//! Built-in generated-identifier tokens.

use std::sync::Arc;

use uuid::Uuid;

use super::Rewrite;

/// `%rand32%`: eight lowercase hex digits.
fn rand32(_: &str) -> String {
    format!("{:08x}", rand::random::<u32>())
}

/// `%rand64%`: sixteen lowercase hex digits.
fn rand64(_: &str) -> String {
    format!("{:016x}", rand::random::<u64>())
}

/// `%uuid%`: a hyphenated random (v4) UUID.
fn uuid(_: &str) -> String {
    Uuid::new_v4().hyphenated().to_string()
}

pub(super) fn definitions() -> [(&'static str, Rewrite); 3] {
    [
        ("rand32", Arc::new(rand32) as Rewrite),
        ("rand64", Arc::new(rand64) as Rewrite),
        ("uuid", Arc::new(uuid) as Rewrite),
    ]
}

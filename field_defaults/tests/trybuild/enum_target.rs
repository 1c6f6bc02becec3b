//! Trybuild fixture: `#[derive(Defaults)]` only accepts structs with named
//! fields.

use field_defaults::Defaults;

#[derive(Defaults)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}

//! Trybuild fixture: tuple structs have no field names to attach defaults
//! to.

use field_defaults::Defaults;

#[derive(Default, Defaults)]
struct Pair(#[defaults(value = "1")] u8, u8);

fn main() {}

//! Trybuild fixture: a bare scalar is not a record and cannot be populated.

fn main() {
    let mut level = 5_u8;
    let _ = field_defaults::populate(&mut level);
}

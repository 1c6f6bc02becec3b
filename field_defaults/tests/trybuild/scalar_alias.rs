//! Trybuild fixture verifying `#[derive(Scalar)]` honours the `crate`
//! override.

use field_defaults as my_defaults;
use my_defaults::{Defaults, Scalar};

#[derive(Default, Scalar)]
#[defaults(crate = "my_defaults")]
struct Timeout(u32);

#[derive(Default, Defaults)]
#[defaults(crate = "my_defaults")]
struct Client {
    #[defaults(value = "30")]
    timeout: Timeout,
}

fn main() {
    let client = Client::defaulted();
    assert!(client.is_ok_and(|c| c.timeout.0 == 30));
}

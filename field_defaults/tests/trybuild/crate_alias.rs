//! Trybuild fixture verifying `#[defaults(crate = "...")]` with a rename
//! via `use ... as`.

use field_defaults as my_defaults;
use my_defaults::{Defaults, Engine};

#[derive(Default, Defaults)]
#[defaults(crate = "my_defaults")]
struct AliasedConfig {
    #[defaults(value = "0x10")]
    level: u8,
    #[defaults(nested)]
    child: Option<Box<AliasedChild>>,
}

#[derive(Default, Defaults)]
#[defaults(crate = "my_defaults")]
struct AliasedChild {
    #[defaults(value = "child")]
    name: String,
}

fn main() {
    let mut config = AliasedConfig::default();
    let result: my_defaults::DefaultsResult<()> = Engine::new().populate(&mut config);
    assert!(result.is_ok());
    assert_eq!(config.level, 16);
    assert_eq!(config.child.map(|c| c.name), Some("child".to_owned()));
}

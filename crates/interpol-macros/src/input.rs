//! Options accepted by `#[interpolate(...)]`.

use interpol_engine::{Config, StringificationMode};

/// Option names, in the order they are documented.
pub const OPTIONS: &[&str] = &["explicit_to_string", "backslash_escapes"];

/// Parsed `#[interpolate]` arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct InterpolateArgs {
    pub explicit_to_string: bool,
    pub backslash_escapes: bool,
}

impl Default for InterpolateArgs {
    fn default() -> Self {
        InterpolateArgs {
            explicit_to_string: false,
            backslash_escapes: true,
        }
    }
}

impl InterpolateArgs {
    pub fn config(&self) -> Config {
        Config::builder()
            .mode(StringificationMode::from_explicit_flag(self.explicit_to_string))
            .backslash_escapes(self.backslash_escapes)
            .build()
    }
}

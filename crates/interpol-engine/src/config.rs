//! Rewrite configuration.

use bon::Builder;

/// Crate name under which the markers may be written with a path, and which
/// provides runtime support for explicit mode.
pub const DEFAULT_CRATE_NAME: &str = "interpol";

/// How an embedded expression is turned into a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StringificationMode {
    /// `ToString::to_string(&(expr))`: the `Display` form of any value.
    #[default]
    Implicit,
    /// `Some(value)` renders via `ToString`, `None` renders as `"null"`, and
    /// any other `Display` value renders via `ToString`.
    ///
    /// The choice is made per expression type at compile time. Generated code
    /// refers to `::<crate_name>::__private`, so the facade crate must be
    /// reachable under the configured name.
    ExplicitNullSafe,
}

impl StringificationMode {
    /// Select a mode from the `explicit_to_string` option.
    pub fn from_explicit_flag(explicit: bool) -> Self {
        if explicit {
            StringificationMode::ExplicitNullSafe
        } else {
            StringificationMode::Implicit
        }
    }

    /// An expression that renders as a bare `$` under this mode.
    ///
    /// Backslash escapes are rewritten into a marker around this expression.
    pub fn escaped_trigger(self) -> &'static str {
        match self {
            StringificationMode::Implicit => "'$'",
            StringificationMode::ExplicitNullSafe => "::core::option::Option::Some('$')",
        }
    }
}

/// Read-only settings for rewriting one or more compilation units.
///
/// # Example
///
/// ```
/// use interpol_engine::{Config, StringificationMode};
///
/// let config = Config::builder()
///     .mode(StringificationMode::ExplicitNullSafe)
///     .backslash_escapes(false)
///     .build();
///
/// assert_eq!(config.mode(), StringificationMode::ExplicitNullSafe);
/// assert!(!config.backslash_escapes());
/// assert_eq!(config.crate_name(), "interpol");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Config {
    #[builder(default)]
    mode: StringificationMode,

    /// Run the escape pre-pass that turns `\$` into a literal `$`.
    #[builder(default = true)]
    backslash_escapes: bool,

    /// Crate whose path may qualify the markers and that explicit mode calls
    /// into. Must be a plain identifier.
    #[builder(default = DEFAULT_CRATE_NAME.to_string())]
    crate_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    pub fn mode(&self) -> StringificationMode {
        self.mode
    }

    pub fn backslash_escapes(&self) -> bool {
        self.backslash_escapes
    }

    pub fn crate_name(&self) -> &str {
        &self.crate_name
    }
}

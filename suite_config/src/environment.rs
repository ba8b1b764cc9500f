//! The active environment used to pick overlays and runner profiles.

use std::fmt;

/// Process variable naming the active environment.
pub const ENV_VAR: &str = "ENV";

/// Name of an environment such as `dev` or `prod`.
///
/// Resolution takes the environment as an explicit argument; only the
/// outermost callers read it from the process via [`Environment::from_env`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Environment(String);

impl Environment {
    /// Creates an environment handle, returning `None` for an empty name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let owned = name.into();
        if owned.trim().is_empty() {
            None
        } else {
            Some(Self(owned))
        }
    }

    /// Reads the environment from the `ENV` process variable.
    ///
    /// Unset, empty or non-UTF-8 values mean "no environment".
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var(ENV_VAR).ok().and_then(Self::new)
    }

    /// The environment's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Helpers for safely mutating environment variables in tests.
//!
//! Every guard holds a global re-entrant lock until it is dropped, so tests
//! that touch the environment run one at a time while a single test may
//! stack several guards. Dropping a guard restores the previous value, or
//! removes the variable if it was previously absent.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _g = env::set_var("SUITE_HELPER_DOC", "VALUE");
//! assert_eq!(std::env::var("SUITE_HELPER_DOC").ok().as_deref(), Some("VALUE"));
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

/// Sets an environment variable and returns a guard restoring its prior value.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    mutate(key.into(), |k| {
        // SAFETY: every mutation goes through `ENV_MUTEX`.
        unsafe { env::set_var(k, value.as_ref()) };
    })
}

/// Removes an environment variable and returns a guard restoring its prior value.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    mutate(key.into(), |k| {
        // SAFETY: every mutation goes through `ENV_MUTEX`.
        unsafe { env::remove_var(k) };
    })
}

fn mutate<F>(key: String, mutator: F) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let lock = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard {
        key,
        original,
        _lock: lock,
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.original.take() {
            // SAFETY: the guard still holds `ENV_MUTEX`.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: the guard still holds `ENV_MUTEX`.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

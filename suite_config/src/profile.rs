//! Runner profiles selected by the active environment.
//!
//! The same environment name that picks a configuration overlay also picks
//! one of three runner profiles. Each profile fixes the timeouts and retry
//! policy a browser run uses; `E2E_`-prefixed process variables may override
//! individual settings.

use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConfResult, environment::Environment, result_ext::ConfResultExt};

/// Prefix for process variables overriding runner settings.
pub const OVERRIDE_PREFIX: &str = "E2E_";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) HeadlessChrome/101.0.4951.15 Safari/537.36";
const CI_WORKERS: u32 = 3;

/// Named runner profile.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeProfile {
    /// Developer machine defaults.
    #[default]
    Local,
    /// Shared development environment.
    Dev,
    /// Production environment.
    Prod,
}

impl RuntimeProfile {
    /// Picks the profile for `environment`; anything other than `dev` or
    /// `prod` runs with the local profile.
    #[must_use]
    pub fn for_environment(environment: Option<&Environment>) -> Self {
        match environment.map(Environment::as_str) {
            Some("dev") => Self::Dev,
            Some("prod") => Self::Prod,
            _ => Self::Local,
        }
    }

    /// Lower-case profile name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }
}

/// Browser viewport in CSS pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Settings handed to the browser test runner.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RunnerSettings {
    /// Profile the settings were derived from.
    pub profile: RuntimeProfile,
    /// Maximum time one test may run, in milliseconds.
    pub test_timeout_ms: u64,
    /// Maximum time an assertion waits for its condition, in milliseconds.
    pub expect_timeout_ms: u64,
    /// Maximum time a single browser action may take, in milliseconds.
    pub action_timeout_ms: u64,
    /// Retries for a failing test.
    pub retries: u32,
    /// Parallel workers; `None` lets the runner decide.
    pub workers: Option<u32>,
    /// Fail the run when a test is focused with `only`.
    pub forbid_only: bool,
    /// Reporter name.
    pub reporter: String,
    /// Trace capture mode.
    pub trace: String,
    /// Run the browser without a window.
    pub headless: bool,
    /// Accept invalid TLS certificates.
    pub ignore_https_errors: bool,
    /// Browser permissions granted to every page.
    pub permissions: Vec<String>,
    /// Browser project name.
    pub project: String,
    /// Page viewport.
    pub viewport: Viewport,
    /// User agent reported by the browser.
    pub user_agent: String,
}

impl RunnerSettings {
    /// Built-in settings for `profile`.
    ///
    /// `ci` enables the CI-only policies: retries on the prod profile, a
    /// fixed worker count and `forbid_only`.
    #[must_use]
    pub fn for_profile(profile: RuntimeProfile, ci: bool) -> Self {
        let (test_secs, expect_secs, action_secs, ci_retries) = match profile {
            RuntimeProfile::Local => (150, 60, 60, 0),
            RuntimeProfile::Dev => (600, 30, 60, 0),
            RuntimeProfile::Prod => (300, 30, 110, 1),
        };
        Self {
            profile,
            test_timeout_ms: secs_to_ms(test_secs),
            expect_timeout_ms: secs_to_ms(expect_secs),
            action_timeout_ms: secs_to_ms(action_secs),
            retries: if ci { ci_retries } else { 0 },
            workers: ci.then_some(CI_WORKERS),
            forbid_only: ci,
            reporter: "html".to_owned(),
            trace: "on".to_owned(),
            headless: false,
            ignore_https_errors: false,
            permissions: vec!["clipboard-read".to_owned(), "clipboard-write".to_owned()],
            project: "chromium".to_owned(),
            viewport: Viewport {
                width: 1420,
                height: 1080,
            },
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Built-in settings for `profile` with `E2E_` process overrides applied.
    ///
    /// Nested keys use a double underscore, so `E2E_VIEWPORT__WIDTH=800`
    /// overrides `viewport.width`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfError::Profile`] when an override cannot be
    /// parsed into the setting's type.
    pub fn load(profile: RuntimeProfile, ci: bool) -> ConfResult<Self> {
        let settings: Self = Figment::from(Serialized::defaults(Self::for_profile(profile, ci)))
            .merge(Env::prefixed(OVERRIDE_PREFIX).split("__"))
            .extract()
            .into_conf()?;
        debug!(profile = profile.as_str(), ci, "runner settings loaded");
        Ok(settings)
    }

    /// Reads `ENV`, `CI` and `CI_ENV` from the process and loads the matching
    /// settings.
    ///
    /// A set `CI_ENV` forces a headed browser. `0`, `false`, `off` and similar
    /// values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfError::Profile`] when an override is malformed.
    pub fn from_process_env() -> ConfResult<Self> {
        let profile = RuntimeProfile::for_environment(Environment::from_env().as_ref());
        let ci = is_set("CI");
        let mut settings = Self::load(profile, ci)?;
        if is_set("CI_ENV") {
            settings.headless = false;
        }
        Ok(settings)
    }

    /// Test timeout as a [`Duration`].
    #[must_use]
    pub const fn test_timeout(&self) -> Duration {
        Duration::from_millis(self.test_timeout_ms)
    }

    /// Assertion timeout as a [`Duration`].
    #[must_use]
    pub const fn expect_timeout(&self) -> Duration {
        Duration::from_millis(self.expect_timeout_ms)
    }

    /// Action timeout as a [`Duration`].
    #[must_use]
    pub const fn action_timeout(&self) -> Duration {
        Duration::from_millis(self.action_timeout_ms)
    }
}

const fn secs_to_ms(secs: u64) -> u64 {
    secs * 1000
}

const FALSEY: [&str; 6] = ["0", "f", "false", "n", "no", "off"];

/// Whether switch variable `key` is on. Empty values and the usual falsey
/// literals leave it off, matching how `suite-conf` parses its flags.
fn is_set(key: &str) -> bool {
    std::env::var_os(key).is_some_and(|value| {
        let raw = value.to_string_lossy();
        let trimmed = raw.trim();
        !trimmed.is_empty() && !FALSEY.iter().any(|word| trimmed.eq_ignore_ascii_case(word))
    })
}

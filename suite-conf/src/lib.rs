//! Library interface for the `suite-conf` tool.
//!
//! `suite-conf` prints what an end-to-end test would see at run time: the
//! merged suite and case configuration for a test title, or the runner
//! settings for an environment. The binary is a thin wrapper over
//! [`execute`].

pub mod cli;
pub mod error;
pub mod output;

use serde::Serialize;
use serde_json::Value;
use suite_config::{
    CaseConfig, Config, ConfigSource, Environment, RunnerSettings, RuntimeProfile, SuiteConfig,
    case_id_from_title,
};
use tracing::info;

use crate::cli::{Command, ProfileArgs, ResolveArgs, environment};
use crate::error::CliError;

/// What `suite-conf resolve` prints.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    /// Case identifier taken from the title.
    pub case_name: String,
    /// Suite configuration after the environment overlay.
    pub suite: SuiteConfig,
    /// Selected case configuration.
    pub case: CaseConfig,
}

/// Resolves the configuration for `args`.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the title or the fragments are invalid.
pub fn resolve(args: &ResolveArgs) -> Result<ResolveReport, CliError> {
    let case_name = case_id_from_title(&args.title)?;
    let env = environment(args.env.as_deref());
    let source = ConfigSource::for_test_file(&args.test_file);
    let config = Config::resolve(&source, &case_name, env.as_ref())?;
    info!(
        case = %case_name,
        directory = %config.directory(),
        environment = env.as_ref().map_or("none", Environment::as_str),
        "configuration resolved"
    );
    let (suite, case) = config.into_parts();
    Ok(ResolveReport {
        case_name,
        suite,
        case,
    })
}

/// Loads runner settings for `args`.
///
/// # Errors
///
/// Returns [`CliError::Config`] when an `E2E_` override is malformed.
pub fn profile(args: &ProfileArgs) -> Result<RunnerSettings, CliError> {
    let env = environment(args.env.as_deref());
    let runtime = RuntimeProfile::for_environment(env.as_ref());
    let mut settings = RunnerSettings::load(runtime, args.is_ci)?;
    if args.is_headed {
        settings.headless = false;
    }
    info!(
        profile = runtime.as_str(),
        ci = args.is_ci,
        headed = args.is_headed,
        "runner settings loaded"
    );
    Ok(settings)
}

/// Runs `command` and returns its report as JSON.
///
/// # Errors
///
/// Propagates failures from [`resolve`] and [`profile`].
pub fn execute(command: &Command) -> Result<Value, CliError> {
    let report = match command {
        Command::Resolve(args) => serde_json::to_value(resolve(args)?)?,
        Command::Profile(args) => serde_json::to_value(profile(args)?)?,
    };
    Ok(report)
}

//! Command-line interface definitions for `suite-conf`.

use camino::Utf8PathBuf;
use clap::builder::FalseyValueParser;
use clap::{Args as ClapArgs, Parser, Subcommand};
use suite_config::{ENV_VAR, Environment};

/// Parsed CLI arguments for `suite-conf`.
#[derive(Debug, Parser)]
#[command(name = "suite-conf")]
#[command(about = "Inspect the configuration an end-to-end test resolves")]
#[command(version)]
pub struct Args {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
    /// Report destination flags.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Operations supported by `suite-conf`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the suite and case configuration for a test.
    Resolve(ResolveArgs),
    /// Show the runner settings for an environment.
    Profile(ProfileArgs),
}

/// Arguments for `suite-conf resolve`.
#[derive(Debug, ClapArgs)]
pub struct ResolveArgs {
    /// Test source file; JSON fragments are read from its directory.
    #[arg(long, value_name = "path")]
    pub test_file: Utf8PathBuf,
    /// Test title carrying one `@TC_<codename>` marker.
    #[arg(long)]
    pub title: String,
    /// Environment overlay to apply.
    #[arg(long, env = ENV_VAR, value_name = "name")]
    pub env: Option<String>,
}

/// Arguments for `suite-conf profile`.
#[derive(Debug, ClapArgs)]
pub struct ProfileArgs {
    /// Environment whose profile to show.
    #[arg(long, env = ENV_VAR, value_name = "name")]
    pub env: Option<String>,
    /// Apply continuous-integration adjustments.
    ///
    /// Any value of `CI` turns this on except an empty one or a falsey
    /// literal such as `0`, `false` or `off`.
    #[arg(long = "ci", env = "CI", value_parser = FalseyValueParser::new())]
    pub is_ci: bool,
    /// Force a headed browser. `CI_ENV` is read like `CI`.
    #[arg(long = "headed", env = "CI_ENV", value_parser = FalseyValueParser::new())]
    pub is_headed: bool,
}

/// Report destination flags.
#[derive(Debug, ClapArgs, Clone, Default)]
pub struct OutputArgs {
    /// Write the report to this file instead of stdout.
    #[arg(long, global = true, value_name = "path")]
    pub out: Option<Utf8PathBuf>,
    /// Emit single-line JSON.
    #[arg(long = "compact", global = true)]
    pub is_compact: bool,
}

/// Parses an optional environment name; blank names select no environment.
#[must_use]
pub fn environment(name: Option<&str>) -> Option<Environment> {
    name.and_then(Environment::new)
}

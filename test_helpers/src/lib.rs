//! Test helpers shared across crates.
//!
//! [`env`] serialises process-environment mutation and [`config_dir`] builds
//! throwaway configuration directories.

pub mod config_dir;
pub mod env;

//! Shared fixtures for the resolution scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;
use suite_config::{ConfResult, Config};

/// Scenario state shared between overlay steps.
#[derive(Debug, Default, ScenarioState)]
pub struct OverlayContext {
    /// Fragment under construction.
    pub fragment: Slot<Value>,
    /// Outcome of the last resolution.
    pub outcome: Slot<ConfResult<Config>>,
}

/// Creates a clean overlay context.
#[fixture]
pub fn overlay_context() -> OverlayContext {
    OverlayContext::default()
}

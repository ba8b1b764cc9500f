//! Binds the resolution feature files to the step registry.

use crate::fixtures::{OverlayContext, overlay_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/environment_overlay.feature",
    fixtures = [overlay_context: OverlayContext]
);

//! Binds the `suite-conf` feature file to the step registry.

use crate::steps::{CliContext, cli_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/suite_conf.feature",
    fixtures = [cli_context: CliContext]
);

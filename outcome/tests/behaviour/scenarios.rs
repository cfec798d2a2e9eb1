//! Binds the outcome feature file to the step registry.

use crate::fixtures::{OutcomeWorld, outcome_world};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/outcome.feature",
    fixtures = [outcome_world: OutcomeWorld]
);

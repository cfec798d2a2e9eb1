//! Shared fixtures for the behavioural scenarios.

use outcome::{Fault, FaultKind, Outcome};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::text::Scalar;

/// Outcome under test, with placeholder payloads on both sides.
pub type ScalarOutcome = Outcome<Scalar, Scalar>;

/// The observable parts of a raised [`Fault`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedFault {
    pub kind: FaultKind,
    pub message: String,
    pub payload: Option<Scalar>,
}

impl From<Fault> for RaisedFault {
    fn from(fault: Fault) -> Self {
        Self {
            kind: fault.kind(),
            message: fault.message().to_owned(),
            payload: fault.payload::<Scalar>().cloned(),
        }
    }
}

/// Scenario state shared between the outcome steps.
#[derive(Debug, Default, ScenarioState)]
pub struct OutcomeWorld {
    /// The outcome built by a `Given` step and transformed by `When` steps.
    pub outcome: Slot<ScalarOutcome>,
    /// A payload extracted by one of the unwrap-family steps.
    pub unwrapped: Slot<Scalar>,
    /// The fault raised by an unwrap-family step.
    pub fault: Slot<RaisedFault>,
    /// Text produced by `match_with`.
    pub rendered: Slot<String>,
    /// Names of the `match_with` callbacks that ran.
    pub invoked: Slot<Vec<&'static str>>,
}

/// Creates a clean world for each scenario.
#[fixture]
pub fn outcome_world() -> OutcomeWorld {
    OutcomeWorld::default()
}

//! Step definitions for the outcome scenarios.

use anyhow::{Result, anyhow, ensure};
use outcome::{Fault, FaultKind, catch_fault, make_failure, make_success};
use rstest_bdd_macros::{given, then, when};
use test_helpers::calls::CallLog;
use test_helpers::text::{Scalar, unquote};

use crate::fixtures::{OutcomeWorld, RaisedFault, ScalarOutcome};

fn take_outcome(outcome_world: &OutcomeWorld) -> Result<ScalarOutcome> {
    outcome_world
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome was given"))
}

fn record(outcome_world: &OutcomeWorld, extracted: Result<Scalar, Fault>) {
    match extracted {
        Ok(value) => outcome_world.unwrapped.set(value),
        Err(fault) => outcome_world.fault.set(RaisedFault::from(fault)),
    }
}

fn parse_kind(kind: &str) -> Result<FaultKind> {
    match unquote(kind) {
        "unwrap" => Ok(FaultKind::Unwrap),
        "expect" => Ok(FaultKind::Expect),
        "unwrap_error" => Ok(FaultKind::UnwrapError),
        other => Err(anyhow!("unknown fault kind '{other}'")),
    }
}

fn doubled(value: Scalar) -> Scalar {
    match value {
        Scalar::Int(number) => Scalar::Int(number * 2),
        Scalar::Text(text) => Scalar::Text(text.repeat(2)),
    }
}

#[given("a successful outcome holding {value}")]
fn successful_outcome(outcome_world: &OutcomeWorld, value: String) {
    outcome_world.outcome.set(make_success(Scalar::parse(&value)));
}

#[given("a failed outcome holding {value}")]
fn failed_outcome(outcome_world: &OutcomeWorld, value: String) {
    outcome_world.outcome.set(make_failure(Scalar::parse(&value)));
}

#[when("the data is mapped by doubling")]
fn map_doubling(outcome_world: &OutcomeWorld) -> Result<()> {
    let mapped = take_outcome(outcome_world)?.map(doubled);
    outcome_world.outcome.set(mapped);
    Ok(())
}

#[when("the outcome is unwrapped")]
fn unwrap_outcome(outcome_world: &OutcomeWorld) -> Result<()> {
    let outcome = take_outcome(outcome_world)?;
    record(outcome_world, catch_fault(move || outcome.unwrap()));
    Ok(())
}

#[when("the error is unwrapped")]
fn unwrap_error(outcome_world: &OutcomeWorld) -> Result<()> {
    let outcome = take_outcome(outcome_world)?;
    record(outcome_world, catch_fault(move || outcome.unwrap_error()));
    Ok(())
}

#[when("the outcome is expected with {custom}")]
fn expect_outcome(outcome_world: &OutcomeWorld, custom: String) -> Result<()> {
    let outcome = take_outcome(outcome_world)?;
    let custom = Scalar::parse(&custom);
    record(outcome_world, catch_fault(move || outcome.expect(custom)));
    Ok(())
}

#[when("the outcome is unwrapped or defaults to {default}")]
fn unwrap_or_default(outcome_world: &OutcomeWorld, default: String) -> Result<()> {
    let value = take_outcome(outcome_world)?.unwrap_or(Scalar::parse(&default));
    outcome_world.unwrapped.set(value);
    Ok(())
}

#[when("the outcome is matched into text")]
fn match_into_text(outcome_world: &OutcomeWorld) -> Result<()> {
    let log = CallLog::new();
    let rendered = take_outcome(outcome_world)?.match_with(
        log.track("success", |data: Scalar| format!("ok:{data}")),
        log.track("failure", |error: Scalar| format!("err:{error}")),
    );
    outcome_world.rendered.set(rendered);
    outcome_world.invoked.set(log.names());
    Ok(())
}

#[then("the unwrapped value is {expected}")]
fn assert_unwrapped(outcome_world: &OutcomeWorld, expected: String) -> Result<()> {
    let actual = outcome_world
        .unwrapped
        .take()
        .ok_or_else(|| anyhow!("no value was unwrapped"))?;
    ensure!(
        actual == Scalar::parse(&expected),
        "expected {expected}, unwrapped {actual:?}"
    );
    Ok(())
}

#[then("the rendered text is {expected}")]
fn assert_rendered(outcome_world: &OutcomeWorld, expected: String) -> Result<()> {
    let rendered = outcome_world
        .rendered
        .take()
        .ok_or_else(|| anyhow!("nothing was rendered"))?;
    ensure!(rendered == unquote(&expected), "rendered {rendered:?}");
    Ok(())
}

#[then("only the {name} callback ran")]
fn assert_single_callback(outcome_world: &OutcomeWorld, name: String) -> Result<()> {
    let invoked = outcome_world
        .invoked
        .take()
        .ok_or_else(|| anyhow!("no callbacks were tracked"))?;
    ensure!(invoked == [unquote(&name)], "callbacks ran: {invoked:?}");
    Ok(())
}

#[then("a fault of kind {kind} is raised")]
fn assert_fault_kind(outcome_world: &OutcomeWorld, kind: String) -> Result<()> {
    let expected = parse_kind(&kind)?;
    let actual = outcome_world
        .fault
        .with_ref(|fault| fault.kind)
        .ok_or_else(|| anyhow!("no fault was raised"))?;
    ensure!(actual == expected, "expected {expected:?}, raised {actual:?}");
    Ok(())
}

#[then("the fault message is {message}")]
fn assert_fault_message(outcome_world: &OutcomeWorld, message: String) -> Result<()> {
    let actual = outcome_world
        .fault
        .with_ref(|fault| fault.message.clone())
        .ok_or_else(|| anyhow!("no fault was raised"))?;
    ensure!(actual == unquote(&message), "fault message was {actual:?}");
    Ok(())
}

#[then("the fault payload is {payload}")]
fn assert_fault_payload(outcome_world: &OutcomeWorld, payload: String) -> Result<()> {
    let actual = outcome_world
        .fault
        .with_ref(|fault| fault.payload.clone())
        .ok_or_else(|| anyhow!("no fault was raised"))?;
    ensure!(
        actual == Some(Scalar::parse(&payload)),
        "fault payload was {actual:?}"
    );
    Ok(())
}

//! Runs the `outcome-demo` binary end to end.

use assert_cmd::Command;
use rstest::rstest;
use tempfile::TempDir;

/// Builds a command isolated from ambient configuration.
fn demo(workdir: &TempDir) -> Command {
    #[expect(
        deprecated,
        clippy::expect_used,
        reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
    )]
    let mut cmd = Command::cargo_bin("outcome-demo").expect("binary should exist");
    cmd.current_dir(workdir.path());
    for key in [
        "RUST_LOG",
        "OUTCOME_DEMO_TARGET",
        "OUTCOME_DEMO_LOG_LEVEL",
        "OUTCOME_DEMO_CONFIG_PATH",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("RUST_BACKTRACE", "0");
    cmd
}

#[expect(clippy::expect_used, reason = "test panics are acceptable")]
fn workdir() -> TempDir {
    tempfile::tempdir().expect("create temporary directory")
}

#[rstest]
#[case(&["double", "42"], "84\n")]
#[case(&["render", "err", "THIS IS FINE"], "ERROR: THIS IS FINE\n")]
#[case(&["check-uint", "-1"], "error: `x` cannot be negative\n")]
#[case(&["check-uint", "3.5"], "error: `x` must be an integer\n")]
#[case(&["check-uint", "1e20"], "error: `x` is too large\n")]
#[case(&["product", "3"], "Samsung Universe 9 by Samsung\n")]
#[case(&["product", "32532"], "error: product 32532 not found\n")]
fn workflows_print_their_report(#[case] args: &[&str], #[case] expected: &str) {
    let dir = workdir();
    demo(&dir).args(args).assert().success().stdout(expected.to_owned());
}

#[test]
fn guessing_uses_the_environment_target() {
    let dir = workdir();
    demo(&dir)
        .env("OUTCOME_DEMO_TARGET", "7")
        .args(["guess", "3", "7"])
        .assert()
        .success()
        .stdout(
            "[FAIL] Oops! You guessed wrong. My value is more.\n\
             [SUCCESS] Congratulations! You guessed correctly. I am 7\n",
        );
}

#[test]
fn cli_target_beats_the_config_file() -> anyhow::Result<()> {
    let dir = workdir();
    std::fs::write(dir.path().join("outcome-demo.toml"), "target = 1\n")?;
    demo(&dir)
        .args(["guess", "1", "--target", "4"])
        .assert()
        .success()
        .stdout("[FAIL] Oops! You guessed wrong. My value is more.\n");
    Ok(())
}

#[test]
fn strict_check_exits_with_the_fault() {
    let dir = workdir();
    let assert = demo(&dir).args(["check-uint", "3.5", "--strict"]).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(
        stderr.contains("called `Outcome::unwrap` on a failed outcome"),
        "stderr did not report the fault: {stderr}"
    );
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = workdir();
    let assert = demo(&dir)
        .args(["--config", "absent.toml", "double", "1"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("absent.toml"), "unexpected stderr: {stderr}");
}

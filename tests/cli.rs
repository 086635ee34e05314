use std::process::Command;

fn welch() -> Command {
  let mut command = Command::new(env!("CARGO_BIN_EXE_welch"));
  command.env_remove("RUST_LOG");
  command
}

#[test]
fn prints_p_value_for_example_samples() {
  let output = welch().output().unwrap();
  assert!(output.status.success());
  assert_eq!(String::from_utf8_lossy(&output.stdout), "p-value is 0.411520\n");
}

#[test]
fn exits_with_one_on_domain_error() {
  let output = welch()
    .args(["--first", "3,3,3", "--second", "5,5"])
    .output()
    .unwrap();
  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
  // A zero-variance warning is logged before the error itself.
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert_eq!(stderr.lines().last(), Some("zero pooled standard error"));
}

#[test]
fn exits_with_one_on_short_sample() {
  let output = welch().args(["--first", "1"]).output().unwrap();
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("first sample has 1 observations"));
}

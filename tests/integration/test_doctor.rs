//! Integration tests for `ytm-ship doctor`

use crate::helpers::{GhScenario, TestEnv, stdout_of};
use anyhow::Result;

#[test]
fn test_doctor_all_green_json() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario::authenticated())?;

  let output = env.run(&["doctor", "--thorough", "--json"])?;
  assert!(output.status.success());

  let results: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
  let results = results.as_array().expect("JSON array of check results");
  assert_eq!(results.len(), 3);
  assert!(results.iter().all(|r| r["passed"] == true), "all checks pass: {}", results.len());

  Ok(())
}

#[test]
fn test_doctor_skips_auth_probe_without_thorough() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario::authenticated())?;

  let output = env.run(&["doctor", "--json"])?;
  assert!(output.status.success());

  let results: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
  let names: Vec<&str> = results
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["check_name"].as_str().unwrap())
    .collect();

  assert!(names.contains(&"artifact"));
  assert!(names.contains(&"gh-installed"));
  assert!(!names.contains(&"gh-auth"), "auth probe is thorough-only");

  Ok(())
}

#[test]
fn test_doctor_json_exits_validation_on_error() -> Result<()> {
  let env = TestEnv::new()?;
  env.install_fake_gh(&GhScenario::authenticated())?;
  // No artifact: the JSON report must still carry the validation exit code

  let output = env.run(&["doctor", "--json"])?;
  assert_eq!(output.status.code(), Some(3));

  let results: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
  let artifact = results
    .as_array()
    .unwrap()
    .iter()
    .find(|r| r["check_name"] == "artifact")
    .expect("artifact check in report");
  assert_eq!(artifact["passed"], false);
  assert_eq!(artifact["severity"], "Error");

  Ok(())
}

#[test]
fn test_doctor_reports_missing_artifact_as_error() -> Result<()> {
  let env = TestEnv::new()?;
  env.install_fake_gh(&GhScenario::authenticated())?;
  // No artifact

  let output = env.run(&["doctor"])?;

  assert_eq!(output.status.code(), Some(3));
  let stdout = stdout_of(&output);
  assert!(stdout.contains("Artifact not found"));
  assert!(stdout.contains("checks passed"));

  Ok(())
}

#[test]
fn test_doctor_reports_unauthenticated_session() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario {
    authenticated: false,
    ..Default::default()
  })?;

  let output = env.run(&["doctor", "--thorough"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(stdout_of(&output).contains("gh auth login"));

  Ok(())
}

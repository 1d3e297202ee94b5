//! Integration tests for `ytm-ship publish`

use crate::helpers::{GhScenario, TestEnv, stderr_of, stdout_of};
use anyhow::Result;

fn release_calls(env: &TestEnv) -> Vec<String> {
  env
    .gh_calls()
    .into_iter()
    .filter(|c| c.starts_with("release"))
    .collect()
}

#[test]
fn test_missing_artifact_exits_nonzero_without_any_gh_call() -> Result<()> {
  let env = TestEnv::new()?;
  env.install_fake_gh(&GhScenario::authenticated())?;
  // No artifact created

  let output = env.run(&["publish"])?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("Artifact not found"));
  assert!(stderr_of(&output).contains("pyinstaller"), "prints build instructions");
  assert!(env.gh_calls().is_empty(), "no gh invocation at all");

  Ok(())
}

#[test]
fn test_gh_absent_exits_nonzero() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  // No fake gh installed: PATH has no gh at all

  let output = env.run(&["publish"])?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(3));
  assert!(stderr_of(&output).contains("not installed"));
  assert!(
    stderr_of(&output).contains("releases"),
    "prints the manual fallback instructions"
  );

  Ok(())
}

#[test]
fn test_unauthenticated_exits_before_any_release_call() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario {
    authenticated: false,
    ..Default::default()
  })?;

  let output = env.run(&["publish", "v2.0.0"])?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(3));
  assert!(stderr_of(&output).contains("not authenticated"));
  assert!(stderr_of(&output).contains("gh auth login"));
  assert!(release_calls(&env).is_empty(), "no create/upload/view calls");

  Ok(())
}

#[test]
fn test_sentinel_with_no_releases_creates_v1() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario::authenticated())?;

  let output = env.run(&["publish"])?;

  assert!(output.status.success(), "stderr: {}", stderr_of(&output));

  let calls = release_calls(&env);
  let creates: Vec<&String> = calls.iter().filter(|c| c.starts_with("release create")).collect();
  assert_eq!(creates.len(), 1, "exactly one create: {:?}", calls);
  assert!(creates[0].contains("v1.0.0"));
  assert!(creates[0].contains("dist/youtube-transcript-manager"));
  assert!(!calls.iter().any(|c| c.starts_with("release upload")));

  Ok(())
}

#[test]
fn test_sentinel_with_existing_latest_uploads_with_clobber() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario {
    authenticated: true,
    latest: Some("v2.3.0"),
    existing: &["v2.3.0"],
  })?;

  let output = env.run(&["publish"])?;

  assert!(output.status.success(), "stderr: {}", stderr_of(&output));

  let calls = release_calls(&env);
  let uploads: Vec<&String> = calls.iter().filter(|c| c.starts_with("release upload")).collect();
  assert_eq!(uploads.len(), 1);
  assert!(uploads[0].contains("v2.3.0"));
  assert!(uploads[0].contains("--clobber"));
  assert!(
    !calls.iter().any(|c| c.starts_with("release create")),
    "must not create a new release"
  );

  Ok(())
}

#[test]
fn test_explicit_existing_tag_uploads_with_overwrite() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario {
    authenticated: true,
    latest: Some("v1.1.0"),
    existing: &["v1.1.0"],
  })?;

  let output = env.run(&["publish", "v1.1.0"])?;

  assert!(output.status.success(), "stderr: {}", stderr_of(&output));

  let calls = release_calls(&env);
  assert!(calls.iter().any(|c| c.starts_with("release view v1.1.0")));
  assert!(
    calls
      .iter()
      .any(|c| c.starts_with("release upload v1.1.0") && c.contains("--clobber"))
  );
  assert!(!calls.iter().any(|c| c.starts_with("release create")));

  Ok(())
}

#[test]
fn test_explicit_missing_tag_creates_that_exact_tag() -> Result<()> {
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario::authenticated())?;

  let output = env.run(&["publish", "v9.9.9"])?;

  assert!(output.status.success(), "stderr: {}", stderr_of(&output));

  let calls = release_calls(&env);
  assert!(calls.iter().any(|c| c.starts_with("release view v9.9.9")));
  assert!(
    calls
      .iter()
      .any(|c| c.starts_with("release create v9.9.9") && c.contains("dist/youtube-transcript-manager"))
  );

  Ok(())
}

#[test]
fn test_end_to_end_first_release_prints_download_url() -> Result<()> {
  // No arguments, artifact present, gh present and authenticated, no
  // prior releases
  let env = TestEnv::new()?;
  env.create_artifact()?;
  env.install_fake_gh(&GhScenario::authenticated())?;

  let output = env.run(&["publish"])?;

  assert_eq!(output.status.code(), Some(0));

  let stdout = stdout_of(&output);
  assert!(stdout.contains("v1.0.0"));
  assert!(stdout.contains("/releases/latest/download/youtube-transcript-manager"));

  let calls = release_calls(&env);
  assert_eq!(
    calls.iter().filter(|c| c.starts_with("release create")).count(),
    1,
    "asset attached exactly once"
  );

  Ok(())
}

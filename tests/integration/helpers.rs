//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Remote state the fake gh pretends to have
#[derive(Default)]
pub struct GhScenario {
  /// Whether `gh auth status` succeeds
  pub authenticated: bool,
  /// Tag returned by `gh release list --limit 1`
  pub latest: Option<&'static str>,
  /// Tags for which `gh release view` succeeds
  pub existing: &'static [&'static str],
}

impl GhScenario {
  pub fn authenticated() -> Self {
    Self {
      authenticated: true,
      ..Default::default()
    }
  }
}

/// An isolated working directory with its own PATH
///
/// The binary under test only ever spawns `gh`, so PATH is reduced to a
/// single shim directory: installing the fake gh there makes the tool
/// "present", leaving the directory empty makes it "absent".
pub struct TestEnv {
  _root: TempDir,
  pub path: PathBuf,
  bin_dir: PathBuf,
  gh_log: PathBuf,
}

impl TestEnv {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().join("work");
    let bin_dir = root.path().join("bin");
    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(&bin_dir)?;
    let gh_log = root.path().join("gh.log");

    Ok(Self {
      _root: root,
      path,
      bin_dir,
      gh_log,
    })
  }

  /// Place the artifact where the publisher expects it
  pub fn create_artifact(&self) -> Result<()> {
    let dist = self.path.join("dist");
    std::fs::create_dir_all(&dist)?;
    std::fs::write(dist.join("youtube-transcript-manager"), b"\x7fELF fake binary")?;
    Ok(())
  }

  /// Install a scripted gh shim that answers per `scenario` and logs
  /// every invocation
  pub fn install_fake_gh(&self, scenario: &GhScenario) -> Result<()> {
    let auth_exit = if scenario.authenticated { 0 } else { 1 };

    let latest_json = match scenario.latest {
      Some(tag) => format!(r#"[{{"tagName":"{}"}}]"#, tag),
      None => "[]".to_string(),
    };

    let mut view_cases = String::new();
    for tag in scenario.existing {
      view_cases.push_str(&format!(
        "      {}) echo '{{\"tagName\":\"{}\"}}'; exit 0;;\n",
        tag, tag
      ));
    }

    let script = format!(
      r#"#!/bin/sh
echo "$*" >> "{log}"
case "$1" in
  --version)
    echo "gh version 2.62.0"
    exit 0
    ;;
  auth)
    exit {auth_exit}
    ;;
  release)
    case "$2" in
      list)
        echo '{latest_json}'
        exit 0
        ;;
      view)
        case "$3" in
{view_cases}      *) echo "release not found" >&2; exit 1;;
        esac
        ;;
      create)
        exit 0
        ;;
      upload)
        exit 0
        ;;
    esac
    ;;
esac
echo "fake gh: unhandled: $*" >&2
exit 1
"#,
      log = self.gh_log.display(),
      auth_exit = auth_exit,
      latest_json = latest_json,
      view_cases = view_cases,
    );

    let gh_path = self.bin_dir.join("gh");
    std::fs::write(&gh_path, script)?;

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      std::fs::set_permissions(&gh_path, std::fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
  }

  /// Every gh invocation so far, one line per call
  pub fn gh_calls(&self) -> Vec<String> {
    std::fs::read_to_string(&self.gh_log)
      .map(|s| s.lines().map(String::from).collect())
      .unwrap_or_default()
  }

  /// Run ytm-ship in the working directory; does not assert success
  pub fn run(&self, args: &[&str]) -> Result<Output> {
    let bin = env!("CARGO_BIN_EXE_ytm-ship");

    Command::new(bin)
      .current_dir(&self.path)
      .env("PATH", &self.bin_dir)
      .args(args)
      .output()
      .context("Failed to run ytm-ship")
  }
}

pub fn stdout_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).to_string()
}

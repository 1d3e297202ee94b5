//! GitHub release operations via the system gh CLI

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use serde::Deserialize;

use crate::core::constants;
use crate::core::error::{HostError, ResultExt, ShipError, ShipResult};

use super::ReleaseHost;

/// Release host backed by the `gh` binary on PATH
///
/// Credentials are entirely gh's concern; we only ever ask it whether a
/// session exists. Every operation is a single blocking subprocess call.
pub struct GhCli;

impl GhCli {
  pub fn new() -> Self {
    GhCli
  }

  fn gh_cmd(&self) -> Command {
    Command::new("gh")
  }

  /// Run gh and fail with the command line and stderr on non-zero exit
  fn run(&self, args: &[&str]) -> ShipResult<Output> {
    let output = self
      .gh_cmd()
      .args(args)
      .output()
      .with_context(|| format!("Failed to run gh {}", args.join(" ")))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ShipError::Host(HostError::CommandFailed {
        command: format!("gh {}", args.join(" ")),
        stderr: stderr.to_string(),
      }));
    }

    Ok(output)
  }
}

impl Default for GhCli {
  fn default() -> Self {
    Self::new()
  }
}

/// One entry of `gh release list --json tagName`
#[derive(Deserialize)]
struct ReleaseEntry {
  #[serde(rename = "tagName")]
  tag_name: String,
}

impl ReleaseHost for GhCli {
  fn is_installed(&self) -> bool {
    match self.gh_cmd().arg("--version").output() {
      Ok(output) => output.status.success(),
      Err(e) if e.kind() == io::ErrorKind::NotFound => false,
      // Spawned but something else went wrong; the binary is there
      Err(_) => true,
    }
  }

  fn is_authenticated(&self) -> ShipResult<bool> {
    // gh auth status exits non-zero when no session exists; that is an
    // answer, not a failure
    let output = self
      .gh_cmd()
      .args(["auth", "status"])
      .output()
      .context("Failed to run gh auth status")?;

    Ok(output.status.success())
  }

  fn latest_release(&self) -> ShipResult<Option<String>> {
    let output = self.run(&[
      "release",
      "list",
      "--repo",
      constants::REPO_SLUG,
      "--limit",
      "1",
      "--json",
      "tagName",
    ])?;

    let stdout = String::from_utf8(output.stdout)?;
    let entries: Vec<ReleaseEntry> = serde_json::from_str(stdout.trim()).map_err(|e| {
      ShipError::Host(HostError::UnexpectedOutput {
        command: "gh release list".to_string(),
        detail: e.to_string(),
      })
    })?;

    Ok(entries.into_iter().next().map(|e| e.tag_name))
  }

  fn release_exists(&self, tag: &str) -> ShipResult<bool> {
    let output = self
      .gh_cmd()
      .args(["release", "view", tag, "--repo", constants::REPO_SLUG, "--json", "tagName"])
      .output()
      .context("Failed to run gh release view")?;

    if output.status.success() {
      return Ok(true);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.to_lowercase().contains("not found") {
      return Ok(false);
    }

    Err(ShipError::Host(HostError::CommandFailed {
      command: format!("gh release view {}", tag),
      stderr: stderr.to_string(),
    }))
  }

  fn create_release(&self, tag: &str, title: &str, notes: &str, asset: &Path) -> ShipResult<()> {
    let asset = asset.to_string_lossy();
    self.run(&[
      "release",
      "create",
      tag,
      asset.as_ref(),
      "--repo",
      constants::REPO_SLUG,
      "--title",
      title,
      "--notes",
      notes,
    ])?;
    Ok(())
  }

  fn upload_asset(&self, tag: &str, asset: &Path) -> ShipResult<()> {
    let asset = asset.to_string_lossy();
    self.run(&[
      "release",
      "upload",
      tag,
      asset.as_ref(),
      "--repo",
      constants::REPO_SLUG,
      "--clobber",
    ])?;
    Ok(())
  }
}

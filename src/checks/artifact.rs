//! Artifact presence check

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ShipResult;

/// Check that the prebuilt executable exists where the packaging tool
/// leaves it
pub struct ArtifactCheck;

impl Check for ArtifactCheck {
  fn name(&self) -> &str {
    "artifact"
  }

  fn description(&self) -> &str {
    "Validates that the prebuilt executable exists"
  }

  fn run(&self, ctx: &CheckContext) -> ShipResult<CheckResult> {
    if ctx.artifact_path.is_file() {
      Ok(CheckResult::pass(
        self.name(),
        format!("Artifact found: {}", ctx.artifact_path.display()),
      ))
    } else {
      Ok(CheckResult::error(
        self.name(),
        format!("Artifact not found: {}", ctx.artifact_path.display()),
        Some("Build it with: ytm-ship bundle --out youtube-transcript-manager.spec && pyinstaller youtube-transcript-manager.spec"),
      ))
    }
  }
}

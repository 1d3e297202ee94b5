//! GitHub CLI presence check

use std::sync::Arc;

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ShipResult;
use crate::host::ReleaseHost;

/// Check that the gh binary is installed and runnable
pub struct GhInstalledCheck {
  host: Arc<dyn ReleaseHost + Send + Sync>,
}

impl GhInstalledCheck {
  pub fn new(host: Arc<dyn ReleaseHost + Send + Sync>) -> Self {
    Self { host }
  }
}

impl Check for GhInstalledCheck {
  fn name(&self) -> &str {
    "gh-installed"
  }

  fn description(&self) -> &str {
    "Validates that the GitHub CLI is on PATH"
  }

  fn run(&self, _ctx: &CheckContext) -> ShipResult<CheckResult> {
    if self.host.is_installed() {
      Ok(CheckResult::pass(self.name(), "GitHub CLI (gh) is installed"))
    } else {
      Ok(CheckResult::error(
        self.name(),
        "GitHub CLI (gh) not found on PATH",
        Some("Install it from https://cli.github.com"),
      ))
    }
  }
}

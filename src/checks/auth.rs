//! GitHub CLI authentication check

use std::sync::Arc;

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ShipResult;
use crate::host::ReleaseHost;

/// Check that gh reports an authenticated session
///
/// Marked expensive: `gh auth status` may refresh token state over the
/// network, so it only runs under `doctor --thorough`.
pub struct GhAuthCheck {
  host: Arc<dyn ReleaseHost + Send + Sync>,
}

impl GhAuthCheck {
  pub fn new(host: Arc<dyn ReleaseHost + Send + Sync>) -> Self {
    Self { host }
  }
}

impl Check for GhAuthCheck {
  fn name(&self) -> &str {
    "gh-auth"
  }

  fn description(&self) -> &str {
    "Validates that the GitHub CLI has an authenticated session"
  }

  fn run(&self, _ctx: &CheckContext) -> ShipResult<CheckResult> {
    if !self.host.is_installed() {
      return Ok(CheckResult::warning(
        self.name(),
        "Skipped: gh is not installed",
        Some("Install gh first, then re-run doctor"),
      ));
    }

    if self.host.is_authenticated()? {
      Ok(CheckResult::pass(self.name(), "GitHub CLI session is authenticated"))
    } else {
      Ok(CheckResult::error(
        self.name(),
        "GitHub CLI has no authenticated session",
        Some("Run: gh auth login"),
      ))
    }
  }

  fn is_expensive(&self) -> bool {
    true
  }
}

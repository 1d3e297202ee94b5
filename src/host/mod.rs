//! Release hosting abstraction
//!
//! The publisher never talks to GitHub directly; it goes through the
//! `ReleaseHost` trait so the decision logic can be exercised against a
//! recording fake in tests. The production implementation (`GhCli`)
//! shells out to the system `gh` binary.

pub mod gh;

pub use gh::GhCli;

use std::path::Path;

use crate::core::error::ShipResult;

/// The subset of release-hosting operations the publisher needs
///
/// Reads: installed/auth probes, latest-release query, release-exists
/// query. Writes: create-release-with-asset, upload-asset (overwrite).
pub trait ReleaseHost {
  /// Whether the hosting tool is present on this machine (local probe,
  /// no network)
  fn is_installed(&self) -> bool;

  /// Whether the tool reports an authenticated session
  fn is_authenticated(&self) -> ShipResult<bool>;

  /// Tag of the most recent release, or None when the repository has no
  /// releases yet
  fn latest_release(&self) -> ShipResult<Option<String>>;

  /// Whether a release with this exact tag exists
  fn release_exists(&self, tag: &str) -> ShipResult<bool>;

  /// Create a new release under `tag` and attach the asset
  fn create_release(&self, tag: &str, title: &str, notes: &str, asset: &Path) -> ShipResult<()>;

  /// Upload the asset to an existing release, replacing any asset with
  /// the same name
  fn upload_asset(&self, tag: &str, asset: &Path) -> ShipResult<()>;
}

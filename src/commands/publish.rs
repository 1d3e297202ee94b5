//! Publishing the prebuilt executable to GitHub releases
//!
//! Deterministic sequence, terminal on first failure: artifact check,
//! tool check, auth check, then create-or-update depending on the
//! requested tag. Nothing is retried and nothing local is mutated, so a
//! failed run leaves no cleanup behind.

use std::path::Path;

use crate::core::constants;
use crate::core::error::{PreconditionError, ShipError, ShipResult};
use crate::host::{GhCli, ReleaseHost};
use crate::release::ReleaseTag;

/// What the publisher ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishAction {
  /// A new release was created under this tag with the artifact attached
  Created { tag: String },
  /// The artifact replaced the asset on this existing release
  Updated { tag: String },
}

/// Run the publish command against the real gh CLI
pub fn run_publish(tag: Option<String>) -> ShipResult<()> {
  let host = GhCli::new();
  let artifact = Path::new(constants::ARTIFACT_PATH);
  let requested = tag.unwrap_or_else(|| constants::LATEST_SENTINEL.to_string());

  let action = publish_release(&host, artifact, &requested)?;

  match &action {
    PublishAction::Created { tag } => println!("✅ Created release {} with the artifact attached", tag),
    PublishAction::Updated { tag } => println!("✅ Replaced the artifact on release {}", tag),
  }
  println!("⬇️  Download: {}", constants::download_url());

  Ok(())
}

/// The publisher's decision logic, host-injectable for testing
///
/// The sentinel path targets "whatever is currently latest", which can
/// change between runs; explicit tags are idempotent (re-running
/// replaces the same asset).
pub fn publish_release(host: &dyn ReleaseHost, artifact: &Path, requested_tag: &str) -> ShipResult<PublishAction> {
  // Preconditions, in order, before any remote call
  if !artifact.is_file() {
    return Err(ShipError::Precondition(PreconditionError::MissingArtifact {
      path: artifact.to_path_buf(),
    }));
  }

  if !host.is_installed() {
    return Err(ShipError::Precondition(PreconditionError::ToolNotInstalled));
  }

  if !host.is_authenticated()? {
    return Err(ShipError::Precondition(PreconditionError::NotAuthenticated));
  }

  if requested_tag == constants::LATEST_SENTINEL {
    match host.latest_release()? {
      None => {
        println!(
          "📦 No releases yet; creating the first one as {}",
          constants::DEFAULT_FIRST_TAG
        );
        create(host, constants::DEFAULT_FIRST_TAG, artifact)
      }
      Some(tag) => {
        println!("📦 Uploading artifact to latest release {}", tag);
        upload(host, &tag, artifact)
      }
    }
  } else {
    if ReleaseTag::parse(requested_tag).is_none() {
      println!(
        "⚠️  Tag '{}' does not follow the vX.Y.Z convention; publishing anyway",
        requested_tag
      );
    }

    if host.release_exists(requested_tag)? {
      println!("📦 Release {} exists; replacing its artifact", requested_tag);
      upload(host, requested_tag, artifact)
    } else {
      println!("📦 Release {} not found; creating it", requested_tag);
      create(host, requested_tag, artifact)
    }
  }
}

fn create(host: &dyn ReleaseHost, tag: &str, artifact: &Path) -> ShipResult<PublishAction> {
  host.create_release(tag, &constants::release_title(tag), &constants::release_notes(), artifact)?;
  Ok(PublishAction::Created { tag: tag.to_string() })
}

fn upload(host: &dyn ReleaseHost, tag: &str, artifact: &Path) -> ShipResult<PublishAction> {
  host.upload_asset(tag, artifact)?;
  Ok(PublishAction::Updated { tag: tag.to_string() })
}

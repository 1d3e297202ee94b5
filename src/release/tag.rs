//! Version tag parsing
//!
//! Tags on the hosting side are opaque strings; parsing is only used to
//! pretty-print and to warn when an explicit tag strays from the vX.Y.Z
//! convention. A parse failure never blocks publishing.

use semver::Version;

/// A release tag that follows the `vX.Y.Z` convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
  /// Parsed version
  pub version: Version,
  /// Full tag name (e.g., "v1.2.3")
  pub tag_name: String,
}

impl ReleaseTag {
  /// Parse a `vX.Y.Z` tag; returns None for anything else
  pub fn parse(tag_name: &str) -> Option<Self> {
    let version_str = tag_name.strip_prefix('v')?;
    let version = version_str.parse::<Version>().ok()?;
    Some(Self {
      version,
      tag_name: tag_name.to_string(),
    })
  }
}

//! Fixed conventions for the youtube-transcript-manager release pipeline
//!
//! These are deliberately hardcoded: the publisher targets exactly one
//! repository and exactly one artifact, and every invocation re-derives
//! its decisions from the current remote state.

/// GitHub repository the releases live in
pub const REPO_SLUG: &str = "ytm-project/youtube-transcript-manager";

/// Where the packaging tool drops the single-file executable
pub const ARTIFACT_PATH: &str = "dist/youtube-transcript-manager";

/// Reserved tag meaning "whichever release is currently most recent"
pub const LATEST_SENTINEL: &str = "latest";

/// Tag used when the sentinel is requested and no release exists yet
pub const DEFAULT_FIRST_TAG: &str = "v1.0.0";

/// Release title for a given tag
pub fn release_title(tag: &str) -> String {
  format!("YouTube Transcript Manager {}", tag)
}

/// Release notes attached to every release we create
pub fn release_notes() -> String {
  "Single-file executable build of YouTube Transcript Manager.\n\n\
   Download the asset below and run it directly; no Python installation required."
    .to_string()
}

/// Stable public download URL for the latest artifact
pub fn download_url() -> String {
  let basename = ARTIFACT_PATH.rsplit('/').next().unwrap_or(ARTIFACT_PATH);
  format!(
    "https://github.com/{}/releases/latest/download/{}",
    REPO_SLUG, basename
  )
}

//! Error types for ytm-ship with contextual messages and exit codes
//!
//! Every user-facing failure carries a remediation hint so the publisher
//! never exits without telling the user what to do next.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::core::constants;

/// Exit codes for ytm-ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad recipe, missing files, invalid args)
  User = 1,
  /// System error (gh invocation, network, I/O)
  System = 2,
  /// Precondition failure (tool missing, not authenticated)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for ytm-ship
#[derive(Debug)]
pub enum ShipError {
  /// Publish precondition failures (artifact, tool, auth)
  Precondition(PreconditionError),

  /// Release host (gh) failures
  Host(HostError),

  /// Bundle recipe failures
  Bundle(BundleError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ShipError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ShipError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ShipError::Message { message, context, help } => ShipError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ShipError::Precondition(e) => e.exit_code(),
      ShipError::Host(_) => ExitCode::System,
      ShipError::Bundle(_) => ExitCode::User,
      ShipError::Io(_) => ExitCode::System,
      ShipError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ShipError::Precondition(e) => e.help_message(),
      ShipError::Host(e) => e.help_message(),
      ShipError::Bundle(e) => e.help_message(),
      ShipError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ShipError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ShipError::Precondition(e) => write!(f, "{}", e),
      ShipError::Host(e) => write!(f, "{}", e),
      ShipError::Bundle(e) => write!(f, "{}", e),
      ShipError::Io(e) => write!(f, "I/O error: {}", e),
      ShipError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ShipError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ShipError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ShipError {
  fn from(err: io::Error) -> Self {
    ShipError::Io(err)
  }
}

impl From<String> for ShipError {
  fn from(msg: String) -> Self {
    ShipError::message(msg)
  }
}

impl From<&str> for ShipError {
  fn from(msg: &str) -> Self {
    ShipError::message(msg)
  }
}

impl From<toml_edit::de::Error> for ShipError {
  fn from(err: toml_edit::de::Error) -> Self {
    ShipError::Bundle(BundleError::InvalidRecipe {
      reason: err.to_string(),
    })
  }
}

impl From<serde_json::Error> for ShipError {
  fn from(err: serde_json::Error) -> Self {
    ShipError::message(format!("JSON error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for ShipError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    ShipError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Convert anyhow::Error to ShipError (test helpers, ad-hoc contexts)
impl From<anyhow::Error> for ShipError {
  fn from(err: anyhow::Error) -> Self {
    ShipError::message(err.to_string())
  }
}

/// Publish precondition failures
///
/// These are the three terminal checks that run before any remote call.
#[derive(Debug)]
pub enum PreconditionError {
  /// Artifact not found at the expected path
  MissingArtifact { path: PathBuf },

  /// gh CLI not found on PATH
  ToolNotInstalled,

  /// gh CLI found but no authenticated session
  NotAuthenticated,
}

impl PreconditionError {
  fn exit_code(&self) -> ExitCode {
    match self {
      PreconditionError::MissingArtifact { .. } => ExitCode::User,
      PreconditionError::ToolNotInstalled | PreconditionError::NotAuthenticated => ExitCode::Validation,
    }
  }

  fn help_message(&self) -> Option<String> {
    match self {
      PreconditionError::MissingArtifact { .. } => Some(
        "Build the executable first:\n  \
         ytm-ship bundle --out youtube-transcript-manager.spec\n  \
         pyinstaller youtube-transcript-manager.spec"
          .to_string(),
      ),
      PreconditionError::ToolNotInstalled => Some(format!(
        "Install the GitHub CLI from https://cli.github.com, or publish by hand:\n  \
         1. Open https://github.com/{}/releases\n  \
         2. Create the release for your tag\n  \
         3. Attach {}",
        constants::REPO_SLUG,
        constants::ARTIFACT_PATH
      )),
      PreconditionError::NotAuthenticated => Some("Authenticate first: gh auth login".to_string()),
    }
  }
}

impl fmt::Display for PreconditionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PreconditionError::MissingArtifact { path } => {
        write!(f, "Artifact not found: {}", path.display())
      }
      PreconditionError::ToolNotInstalled => {
        write!(f, "GitHub CLI (gh) is not installed")
      }
      PreconditionError::NotAuthenticated => {
        write!(f, "GitHub CLI is not authenticated")
      }
    }
  }
}

/// Release host (gh) failures
#[derive(Debug)]
pub enum HostError {
  /// gh command exited non-zero; stderr surfaced verbatim
  CommandFailed { command: String, stderr: String },

  /// gh produced output we could not interpret
  UnexpectedOutput { command: String, detail: String },
}

impl HostError {
  fn help_message(&self) -> Option<String> {
    match self {
      HostError::CommandFailed { stderr, .. } => {
        if stderr.contains("HTTP 403") || stderr.contains("permission") {
          Some(format!(
            "Check that your account has write access to {}.",
            constants::REPO_SLUG
          ))
        } else {
          None
        }
      }
      HostError::UnexpectedOutput { .. } => {
        Some("Re-run with a newer gh; the JSON output format may have changed.".to_string())
      }
    }
  }
}

impl fmt::Display for HostError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      HostError::CommandFailed { command, stderr } => {
        write!(f, "Command failed: {}\n{}", command, stderr)
      }
      HostError::UnexpectedOutput { command, detail } => {
        write!(f, "Could not parse output of {}: {}", command, detail)
      }
    }
  }
}

/// Bundle recipe failures
#[derive(Debug)]
pub enum BundleError {
  /// bundle.toml exists but could not be deserialized
  InvalidRecipe { reason: String },
}

impl BundleError {
  fn help_message(&self) -> Option<String> {
    match self {
      BundleError::InvalidRecipe { .. } => {
        Some("See bundle.toml in the repository root for the expected layout.".to_string())
      }
    }
  }
}

impl fmt::Display for BundleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BundleError::InvalidRecipe { reason } => {
        write!(f, "Invalid bundle recipe: {}", reason)
      }
    }
  }
}

/// Result type alias for ytm-ship
pub type ShipResult<T> = Result<T, ShipError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ShipResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ShipResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ShipError>,
{
  fn context(self, ctx: impl Into<String>) -> ShipResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ShipResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &ShipError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

//! Bundle recipe: what goes into the single-file executable

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{ResultExt, ShipResult};

/// Declarative recipe for the packaging tool
///
/// A static declaration, not an executable flow: the `bundle` command
/// only renders it; the external packaging tool does the bundling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleRecipe {
  /// Entry-point script of the application
  pub entry: PathBuf,

  /// Non-code files embedded verbatim inside the bundle
  #[serde(default)]
  pub datas: Vec<DataFile>,

  /// Libraries the packaging tool's static import scanner cannot
  /// discover (dynamic, lazy, or plugin-based imports) and must be told
  /// to include
  #[serde(default)]
  pub hidden_imports: Vec<String>,

  /// Output executable configuration
  pub output: OutputOptions,
}

/// A (source file, destination folder) pair to embed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
  /// Source path relative to the repository root
  pub source: PathBuf,
  /// Destination folder inside the bundle ("." for the bundle root)
  pub dest: String,
}

/// Output executable configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
  /// Target executable name
  pub name: String,
  /// Whether a console/terminal attaches on launch
  #[serde(default)]
  pub console: bool,
  /// Whether debug symbols are stripped
  #[serde(default)]
  pub strip: bool,
  /// Whether runtime (UPX) compression is applied
  #[serde(default = "default_true")]
  pub upx: bool,
}

fn default_true() -> bool {
  true
}

impl BundleRecipe {
  /// The youtube-transcript-manager recipe
  ///
  /// The launcher starts the embedded Streamlit app as a subprocess, so
  /// the app module rides along as data rather than code, and the web
  /// stack plus API clients are imported at runtime only.
  pub fn builtin_default() -> Self {
    Self {
      entry: PathBuf::from("src/executables/launcher.py"),
      datas: vec![
        DataFile {
          source: PathBuf::from("src/executables/youtube_app.py"),
          dest: "executables".to_string(),
        },
        DataFile {
          source: PathBuf::from("src/youtube_helper.py"),
          dest: ".".to_string(),
        },
        DataFile {
          source: PathBuf::from("src/constants.py"),
          dest: ".".to_string(),
        },
      ],
      hidden_imports: vec![
        "streamlit".to_string(),
        "streamlit.web.cli".to_string(),
        "youtube_transcript_api".to_string(),
        "googleapiclient".to_string(),
        "googleapiclient.discovery".to_string(),
        "dotenv".to_string(),
        "pandas".to_string(),
      ],
      output: OutputOptions {
        name: "youtube-transcript-manager".to_string(),
        console: false,
        strip: false,
        upx: true,
      },
    }
  }

  /// Load a recipe from a TOML file
  pub fn load(path: &Path) -> ShipResult<Self> {
    let content =
      std::fs::read_to_string(path).with_context(|| format!("Failed to read recipe: {}", path.display()))?;
    let recipe: BundleRecipe = toml_edit::de::from_str(&content)?;
    Ok(recipe)
  }

  /// Load bundle.toml if present, otherwise fall back to the built-in
  /// recipe
  pub fn load_or_default(path: &Path) -> ShipResult<Self> {
    if path.is_file() {
      Self::load(path)
    } else {
      Ok(Self::builtin_default())
    }
  }
}

//! Bundle command: render the package descriptor
//!
//! Loads bundle.toml (or the built-in recipe when the file is absent)
//! and emits the spec file the packaging tool consumes. No bundling
//! happens here; that belongs to the external tool.

use std::path::{Path, PathBuf};

use crate::bundle::{BundleRecipe, render_spec};
use crate::core::error::{ResultExt, ShipResult};

/// Default recipe location, next to the application sources
const RECIPE_PATH: &str = "bundle.toml";

/// Run the bundle command
pub fn run_bundle(out: Option<PathBuf>, json: bool) -> ShipResult<()> {
  let recipe = BundleRecipe::load_or_default(Path::new(RECIPE_PATH))?;

  // --out takes whichever rendering was selected, JSON included
  let rendered = if json {
    let mut body = serde_json::to_string_pretty(&recipe)?;
    body.push('\n');
    body
  } else {
    render_spec(&recipe)
  };

  match out {
    Some(path) => {
      std::fs::write(&path, &rendered).with_context(|| format!("Failed to write {}", path.display()))?;
      println!("✅ Wrote {}", path.display());
      if !json {
        println!("   Build with: pyinstaller {}", path.display());
      }
    }
    None => {
      print!("{}", rendered);
    }
  }

  Ok(())
}

//! Package descriptor for the single-file executable bundle
//!
//! - **recipe**: the declarative bundle recipe (entry script, embedded
//!   data files, forced-include libraries, output options), loaded from
//!   bundle.toml with a built-in default
//! - **render**: deterministic rendering of a recipe to the spec file
//!   the external packaging tool consumes
//!
//! The recipe never validates that a forced-include library is present;
//! resolving those is the packaging tool's job at build time.

pub mod recipe;
pub mod render;

pub use recipe::{BundleRecipe, DataFile, OutputOptions};
pub use render::render_spec;

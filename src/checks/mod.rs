//! Health checks for the publish preconditions
//!
//! This module provides a unified interface for running health checks.
//! All checks implement the `Check` trait, making it easy to add new
//! checks without modifying core logic.
//!
//! # Built-in Checks
//!
//! - **artifact**: the prebuilt executable exists at its expected path
//! - **gh-installed**: the GitHub CLI is present on PATH
//! - **gh-auth**: the GitHub CLI reports an authenticated session
//!
//! Each precondition the publisher enforces is also expressed as a
//! check so `ytm-ship doctor` can report on all of them at once instead
//! of stopping at the first failure the way `publish` does.

mod artifact;
mod auth;
mod runner;
mod tool;
mod trait_def;

// Re-export public API
pub use runner::create_default_runner;
pub use trait_def::{Check, CheckContext, Severity};

// Individual checks are not exported - they're registered in create_default_runner()
// This keeps the API simple and prevents misuse

//! CLI commands for ytm-ship
//!
//! - **publish**: create or update the GitHub release for the artifact
//! - **bundle**: render the package descriptor for the packaging tool
//! - **doctor**: run publish-precondition health checks

pub mod bundle;
pub mod doctor;
pub mod publish;

pub use bundle::run_bundle;
pub use doctor::run_doctor;
pub use publish::run_publish;

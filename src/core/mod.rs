//! Core building blocks for ytm-ship
//!
//! - **constants**: fixed repository/artifact/tag conventions
//! - **error**: error types with contextual help messages and exit codes

pub mod constants;
pub mod error;

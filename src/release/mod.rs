//! Release tag handling

pub mod tag;

pub use tag::ReleaseTag;

//! HTTP handlers. Each one extracts the caller and request data and
//! delegates to [`crate::workflow`].

pub mod directory;
pub mod me;
pub mod operations;
pub mod project;
pub mod status;
pub mod value;

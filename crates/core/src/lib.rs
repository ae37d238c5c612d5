//! Domain rules for weekly project-status reporting.
//!
//! Everything here is pure: no I/O, no database handles. The db and api
//! crates build on these types and call into the policy and validation
//! functions.

pub mod access;
pub mod error;
pub mod operations;
pub mod project;
pub mod roles;
pub mod status_report;
pub mod types;
pub mod week;

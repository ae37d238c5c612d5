//! Request extractors.
//!
//! - [`auth::CurrentCaller`] -- resolves the caller from a Bearer token or,
//!   when enabled, the `X-User-Id` header.

pub mod auth;

//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the authenticated actor, from a JWT Bearer token.

pub mod auth;

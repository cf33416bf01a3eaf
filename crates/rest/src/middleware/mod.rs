//! HTTP middleware for the medication REST API.
//!
//! - [`auth`] - Bearer-token gate attached to the medication routes in production

pub mod auth;

pub use auth::{Claims, JwtAuth, require_bearer_token};

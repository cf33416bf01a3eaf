//! Bearer-token authentication.
//!
//! Requests must carry `Authorization: Bearer <jwt>` where the token is an
//! HS256 JWT signed with the configured secret. `exp` is enforced when the
//! token carries one. Anything else is answered with 401 `Unauthorized`.
//!
//! The gate is only attached when the release target is production; see
//! [`create_routes`](crate::routing::create_routes).

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::HeaderMap;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::RestError;

/// Claims carried by an accepted token.
///
/// Only the registered claims the server looks at are modelled; anything
/// else in the token is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject of the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiry as seconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Reasons a request is refused.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization` header.
    #[error("no Authorization header provided")]
    MissingHeader,
    /// The header is not `Bearer <token>`.
    #[error("Authorization header is not a bearer token")]
    InvalidHeaderFormat,
    /// Bad signature, malformed token or expired.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// HS256 token verifier.
#[derive(Clone)]
pub struct JwtAuth {
    key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuth").finish_non_exhaustive()
    }
}

impl JwtAuth {
    /// Creates a verifier for tokens signed with `secret`.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is checked when present but not required.
        validation.required_spec_claims = HashSet::new();
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a raw token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }

    /// Verifies the bearer token in `headers`.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let token = extract_bearer_token(headers)?;
        self.verify(token)
    }
}

/// Returns the token part of an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingHeader)?;

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::InvalidHeaderFormat),
    }
}

/// Middleware rejecting requests without a valid bearer token.
///
/// Accepted claims are inserted into the request extensions.
pub async fn require_bearer_token(
    State(auth): State<Arc<JwtAuth>>,
    mut req: Request,
    next: Next,
) -> Result<Response, RestError> {
    match auth.authenticate(req.headers()) {
        Ok(claims) => {
            tracing::trace!(sub = ?claims.sub, "Bearer token accepted");
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            debug!(error = %e, path = %req.uri().path(), "Rejected request");
            Err(RestError::Unauthorized)
        }
    }
}

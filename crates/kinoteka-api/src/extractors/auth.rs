//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, validates it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use kinoteka_core::error::AppError;
use kinoteka_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Handlers that declare this extractor can only run once a token has
/// been verified, so an absent identity is impossible past this point.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing authorization header"))?;

        let token = parse_bearer(header)?;

        // Verification is local cryptographic work; the store is not touched.
        let claims = state.jwt_decoder.decode(token)?;

        Ok(AuthUser(RequestContext::new(claims.user_id)))
    }
}

/// Extracts the token from an `Authorization` header value.
///
/// The header must consist of exactly two segments separated by a single
/// space, the first being the literal `Bearer` and the second non-empty.
/// Anything else is rejected without attempting verification.
fn parse_bearer(header: &str) -> Result<&str, AppError> {
    let mut segments = header.split(' ');
    match (segments.next(), segments.next(), segments.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AppError::authentication(
            "Invalid authorization header format",
        )),
    }
}

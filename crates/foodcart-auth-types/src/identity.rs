//! Bearer-token extractor for authenticated routes.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;

use crate::token::{TokenIdentity, validate_access_token};

/// Source of the HMAC secret used to validate bearer tokens.
///
/// Implemented by each service's `AppState` so [`TokenIdentity`] can be used
/// as an axum extractor.
pub trait JwtSecretSource {
    fn jwt_secret(&self) -> &str;
}

// axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
// In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
// causing E0195. Fix: extract values synchronously, return a 'static async move block.
impl<S> FromRequestParts<S> for TokenIdentity
where
    S: JwtSecretSource + Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_owned);

        let result = bearer
            .ok_or(StatusCode::UNAUTHORIZED)
            .and_then(|token| {
                validate_access_token(&token, state.jwt_secret())
                    .map_err(|_| StatusCode::UNAUTHORIZED)
            });

        async move { result }
    }
}

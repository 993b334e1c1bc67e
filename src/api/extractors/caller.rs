use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use tracing::Span;

/// The caller identity, supplied by the surrounding authentication
/// collaborator as an `X-Caller-Id` header. This service never resolves a
/// session itself; role checks happen against the profile store downstream.
pub struct CallerId(pub String);

impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller_id = parts.headers.get("X-Caller-Id")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Span::current().record("caller_id", caller_id.as_str());

        Ok(CallerId(caller_id))
    }
}

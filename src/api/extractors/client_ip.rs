use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

/// Best-effort client identity for rate limiting. Behind the reverse proxy
/// the first `x-forwarded-for` hop is the caller; otherwise `x-real-ip`.
/// Falls back to a shared bucket rather than rejecting the request.
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let real_ip = parts
            .headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(ClientIp(
            forwarded.or(real_ip).unwrap_or_else(|| "unknown".to_string()),
        ))
    }
}

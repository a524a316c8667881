/// Request gate - perimeter session check for API paths
use crate::{
    error::ServerError,
    services::{Claims, SessionIssuer, SESSION_COOKIE},
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Path prefixes that never require a session
const PUBLIC_PREFIXES: &[&str] = &[
    "/api/auth",
    "/auth",
    "/api/health",
    "/_next/",
    "/static/",
    "/assets/",
];

/// Validated session claims, inserted into request extensions by the gate
/// Can be used as an extractor in handlers
#[derive(Debug, Clone)]
pub struct SessionUser(pub Claims);

impl SessionUser {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

/// Whether `path` bypasses the gate
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) || path == "/favicon.ico"
}

/// Session token from the cookie, or from a Bearer header when no cookie is set
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Middleware rejecting API calls without a valid session
///
/// Non-API paths pass through untouched; enforcing login on pages is left to
/// the client. No role checks happen here.
pub async fn session_gate(
    State(sessions): State<Arc<SessionIssuer>>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if is_public_path(&path) || !is_api_path(&path) {
        return next.run(request).await;
    }

    let Some(token) = session_token(request.headers()) else {
        tracing::debug!("Rejected {}: no session", path);
        return unauthorized();
    };

    match sessions.validate(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(SessionUser(claims));
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!("Token verification failed for {}: {}", path, e);
            unauthorized()
        }
    }
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

fn unauthorized() -> Response {
    ServerError::Auth("Unauthorized".to_string()).into_response()
}

/// Implement FromRequestParts so SessionUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionUser>()
            .cloned()
            .ok_or_else(|| ServerError::Auth("Unauthorized".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};
    use staffboard_core::{Role, UserId};

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/api/auth/login"));
        assert!(is_public_path("/api/auth/logout"));
        assert!(is_public_path("/auth/login"));
        assert!(is_public_path("/api/health"));
        assert!(is_public_path("/_next/static/chunk.js"));
        assert!(is_public_path("/favicon.ico"));

        assert!(!is_public_path("/api/jobs"));
        assert!(!is_public_path("/api/dashboard/stats"));
        assert!(!is_public_path("/manage-jobs"));
        assert!(!is_public_path("/api/jobs/favicon.ico"));
        assert!(!is_public_path("/api/favicon.ico.json"));
    }

    #[test]
    fn test_api_paths() {
        assert!(is_api_path("/api/jobs"));
        assert!(is_api_path("/api"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/post-jobs"));
    }

    #[test]
    fn test_token_prefers_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; auth-token=from-cookie"),
        );
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );

        assert_eq!(session_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_token_falls_back_to_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("from-header"));

        assert!(session_token(&HeaderMap::new()).is_none());
    }

    #[tokio::test]
    async fn test_session_user_extractor() {
        let (mut parts, ()) = Request::builder().body(()).unwrap().into_parts();
        let rejected = SessionUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(rejected, Err(ServerError::Auth(_))));

        let claims = Claims {
            sub: UserId::new(4),
            email: "hr@example.com".to_string(),
            role: Role::Hr,
            exp: 0,
            iat: 0,
        };
        parts.extensions.insert(SessionUser(claims.clone()));

        let session = SessionUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(session.claims(), &claims);
    }
}

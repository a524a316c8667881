//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use staffboard_core::{CreateUser, JobStore, Role};
use staffboard_server::{
    config::MIN_BCRYPT_COST, create_router, AppState, CredentialService, SessionIssuer,
};
use staffboard_storage::{seed_document, MemoryStore};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Test credentials
pub mod fixtures {
    pub const TEST_SECRET: &str = "test-secret-key";

    pub const ADMIN_EMAIL: &str = "admin@example.com";
    pub const ADMIN_PASSWORD: &str = "admin123";
    pub const ADMIN_NAME: &str = "Admin User";
}

/// Router plus the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Send one request through a clone of the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Log in as the seeded admin and return the `Cookie` header value
    pub async fn login_cookie(&self) -> String {
        let response = self
            .send(json_request(
                "POST",
                "/api/auth/login",
                &serde_json::json!({
                    "email": fixtures::ADMIN_EMAIL,
                    "password": fixtures::ADMIN_PASSWORD,
                }),
                None,
            ))
            .await;

        cookie_pair(&response).expect("login should set the session cookie")
    }
}

/// App over the sample postings in memory, with one admin account
pub async fn create_test_app() -> TestApp {
    create_test_app_with_store(Arc::new(MemoryStore::new(seed_document()))).await
}

/// App over `jobs`, with one admin account
pub async fn create_test_app_with_store(jobs: Arc<dyn JobStore>) -> TestApp {
    let credentials = CredentialService::new(MIN_BCRYPT_COST);
    credentials
        .create(CreateUser {
            email: fixtures::ADMIN_EMAIL.to_string(),
            name: fixtures::ADMIN_NAME.to_string(),
            password: fixtures::ADMIN_PASSWORD.to_string(),
            role: Role::Admin,
        })
        .await
        .unwrap();

    let sessions = SessionIssuer::new(fixtures::TEST_SECRET, 7);

    let state = AppState::new(jobs, Arc::new(credentials), Arc::new(sessions), false);
    let router = create_router(state.clone(), None);

    TestApp { router, state }
}

/// Build a request with a JSON body and an optional `Cookie` header
pub fn json_request(
    method: &str,
    uri: &str,
    body: &serde_json::Value,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Build a bodiless request with an optional `Cookie` header
pub fn empty_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

/// Full `Set-Cookie` header value, if any
pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// `name=value` part of `Set-Cookie`, ready to send back as `Cookie`
pub fn cookie_pair(response: &Response<Body>) -> Option<String> {
    set_cookie(response).and_then(|v| v.split(';').next().map(str::to_string))
}

/// Read the response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

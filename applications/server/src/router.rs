/// HTTP router assembly
use crate::{api, error::ServerError, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{path::PathBuf, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// All `/api` routes sit behind the session gate; the gate itself lets the
/// public prefixes through. When `web_dir` is set, unmatched paths are served
/// from it with `index.html` as the SPA fallback.
pub fn create_router(app_state: AppState, web_dir: Option<PathBuf>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Auth
        .route("/auth/login", post(api::auth::login))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/me", get(api::auth::me))
        // Jobs
        .route(
            "/jobs",
            get(api::jobs::list_jobs).post(api::jobs::create_job),
        )
        .route(
            "/jobs/:id",
            get(api::jobs::get_job)
                .put(api::jobs::update_job)
                .delete(api::jobs::delete_job),
        )
        // Dashboard
        .route("/dashboard/stats", get(api::dashboard::stats));

    let router = Router::new().nest("/api", api_routes);

    let router = match web_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)))
        }
        None => router.fallback(not_found),
    };

    router
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.sessions),
            middleware::session_gate,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn not_found() -> Response {
    ServerError::NotFound("Not found".to_string()).into_response()
}

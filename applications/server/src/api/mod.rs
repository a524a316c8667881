/// API route modules
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod jobs;

use axum::Json;
use serde::Serialize;

/// Uniform response envelope: `{ data?, success }`
///
/// Failures use `{ error, success: false }`, produced by `ServerError`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            data: Some(data),
            success: true,
        })
    }
}

impl ApiResponse<()> {
    /// Success with no payload
    pub fn empty() -> Json<Self> {
        Json(Self {
            data: None,
            success: true,
        })
    }
}

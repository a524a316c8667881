/// Authentication API routes
use crate::{
    api::ApiResponse,
    error::{Result, ServerError},
    middleware::auth::session_token,
    services::session::removal_cookie,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use staffboard_core::{CreateUser, Role, User};
use validator::Validate;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: User,
}

/// Check a registration before it reaches the credential service
///
/// Required fields first, then email shape, then password length.
pub fn validate_registration(req: &RegisterRequest) -> Result<()> {
    if req.email.is_empty() || req.password.is_empty() || req.name.is_empty() {
        return Err(ServerError::BadRequest(
            "Email, password, and name are required".to_string(),
        ));
    }

    if let Err(errors) = req.validate() {
        let fields = errors.field_errors();
        if fields.contains_key("email") {
            return Err(ServerError::BadRequest("Invalid email format".to_string()));
        }
        if fields.contains_key("password") {
            return Err(ServerError::BadRequest(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }
        return Err(ServerError::BadRequest(errors.to_string()));
    }

    Ok(())
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    let Json(req) = payload?;

    if req.email.is_empty() || req.password.is_empty() {
        return Err(ServerError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let Some(user) = app_state.credentials.verify(&req.email, &req.password).await else {
        tracing::warn!("Failed login for {}", req.email);
        return Err(ServerError::Auth("Invalid email or password".to_string()));
    };

    let token = app_state.sessions.issue(&user)?;
    let cookie = app_state
        .sessions
        .cookie(token.clone(), app_state.secure_cookies);

    tracing::info!("User {} logged in", user.email);
    Ok((jar.add(cookie), ApiResponse::ok(LoginResponse { token, user })))
}

/// POST /api/auth/register
pub async fn register(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    let Json(req) = payload?;
    validate_registration(&req)?;

    let user = app_state
        .credentials
        .create(CreateUser {
            email: req.email,
            name: req.name,
            password: req.password,
            role: Role::Hr,
        })
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::ok(user)))
}

/// POST /api/auth/logout
///
/// Clears the cookie only; the token itself stays valid until it expires.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ApiResponse<()>>) {
    (jar.remove(removal_cookie()), ApiResponse::empty())
}

/// GET /api/auth/me
///
/// Never fails: an absent or invalid session yields no data, and an invalid
/// cookie is cleared.
pub async fn me(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<CurrentUserResponse>>) {
    let empty = || {
        Json(ApiResponse {
            data: None,
            success: true,
        })
    };

    let Some(token) = session_token(&headers) else {
        return (jar, empty());
    };

    let claims = match app_state.sessions.validate(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Clearing invalid session: {}", e);
            return (jar.remove(removal_cookie()), empty());
        }
    };

    match app_state.credentials.get_by_id(claims.user_id()).await {
        Some(user) => (jar, ApiResponse::ok(CurrentUserResponse { user })),
        None => (jar, empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, name: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }

    fn message(result: Result<()>) -> String {
        match result {
            Err(ServerError::BadRequest(msg)) => msg,
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_valid_registration() {
        assert!(validate_registration(&request("new@example.com", "password123", "New")).is_ok());
    }

    #[test]
    fn test_requires_all_fields() {
        let msg = message(validate_registration(&request("", "password123", "New")));
        assert_eq!(msg, "Email, password, and name are required");

        let msg = message(validate_registration(&request("a@example.com", "password123", "")));
        assert_eq!(msg, "Email, password, and name are required");
    }

    #[test]
    fn test_name_only_needs_to_be_present() {
        assert!(validate_registration(&request("a@example.com", "password123", " ")).is_ok());
    }

    #[test]
    fn test_rejects_malformed_email() {
        let msg = message(validate_registration(&request("not-an-email", "password123", "New")));
        assert_eq!(msg, "Invalid email format");
    }

    #[test]
    fn test_rejects_seven_character_password() {
        let msg = message(validate_registration(&request("a@example.com", "1234567", "New")));
        assert_eq!(msg, "Password must be at least 8 characters long");

        assert!(validate_registration(&request("a@example.com", "12345678", "New")).is_ok());
    }
}

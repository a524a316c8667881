/// Session issuer - signed, time-limited session tokens
use crate::error::{Result, ServerError};
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use staffboard_core::{Role, User, UserId};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "auth-token";

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: UserId,
    pub email: String,
    pub role: Role,
    /// Expiration time
    pub exp: i64,
    /// Issued at
    pub iat: i64,
}

impl Claims {
    pub fn user_id(&self) -> UserId {
        self.sub
    }
}

/// Mints and validates HS256 session tokens
///
/// There is no revocation list: a token stays valid until it expires, even
/// after the user logs out.
#[derive(Clone)]
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SessionIssuer {
    pub fn new(secret: &str, ttl_days: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(i64::from(ttl_days)),
        }
    }

    /// Issue a token for `user`, valid from now
    pub fn issue(&self, user: &User) -> Result<String> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as if it had been minted at `issued_at`
    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(ServerError::from)
    }

    /// Verify signature and expiry, returning the embedded claims
    pub fn validate(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| ServerError::Auth(format!("Invalid token: {}", e)))
    }

    /// HTTP-only, same-site-strict cookie carrying `token` for the validity window
    pub fn cookie(&self, token: String, secure: bool) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(secure)
            .max_age(time::Duration::seconds(self.ttl.num_seconds()))
            .build()
    }
}

/// Cookie that clears the session cookie when passed to `CookieJar::remove`
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: UserId::new(7),
            email: "hr@example.com".to_string(),
            name: "HR Person".to_string(),
            role: Role::Hr,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_validate() {
        let issuer = SessionIssuer::new("secret", 7);

        let token = issuer.issue(&user()).unwrap();
        let claims = issuer.validate(&token).unwrap();

        assert_eq!(claims.user_id(), UserId::new(7));
        assert_eq!(claims.email, "hr@example.com");
        assert_eq!(claims.role, Role::Hr);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_token_valid_until_window_closes() {
        let issuer = SessionIssuer::new("secret", 7);

        // Issued just under seven days ago: still inside the window
        let issued_at = Utc::now() - Duration::days(7) + Duration::minutes(1);
        let token = issuer.issue_at(&user(), issued_at).unwrap();
        assert!(issuer.validate(&token).is_ok());
    }

    #[test]
    fn test_token_rejected_after_window() {
        let issuer = SessionIssuer::new("secret", 7);

        let issued_at = Utc::now() - Duration::days(7) - Duration::seconds(5);
        let token = issuer.issue_at(&user(), issued_at).unwrap();
        assert!(matches!(issuer.validate(&token), Err(ServerError::Auth(_))));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = SessionIssuer::new("secret-one", 7);
        let other = SessionIssuer::new("secret-two", 7);

        let token = issuer.issue(&user()).unwrap();
        assert!(other.validate(&token).is_err());
    }

    #[test]
    fn test_cookie_attributes() {
        let issuer = SessionIssuer::new("secret", 7);
        let cookie = issuer.cookie("abc".to_string(), false);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(
            cookie.max_age(),
            Some(time::Duration::seconds(7 * 24 * 60 * 60))
        );

        let secure = issuer.cookie("abc".to_string(), true);
        assert_eq!(secure.secure(), Some(true));
    }

    #[test]
    fn test_garbage_rejected() {
        let issuer = SessionIssuer::new("secret", 7);
        assert!(issuer.validate("invalid.token.here").is_err());
        assert!(issuer.validate("").is_err());
    }
}

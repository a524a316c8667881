/// Authentication service tests
/// Tests session tokens, password checks and the user collection
mod common;

use chrono::{Duration, Utc};
use common::fixtures;
use staffboard_core::{CreateUser, Role, User, UserId};
use staffboard_server::{
    config::MIN_BCRYPT_COST,
    services::{CredentialService, SessionIssuer},
    ServerError,
};

fn create_test_session_issuer() -> SessionIssuer {
    SessionIssuer::new(fixtures::TEST_SECRET, 7)
}

fn create_test_credentials() -> CredentialService {
    CredentialService::new(MIN_BCRYPT_COST)
}

fn new_user(email: &str, password: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        password: password.to_string(),
        role: Role::Hr,
    }
}

fn test_user() -> User {
    User {
        id: UserId::new(3),
        email: "hr@example.com".to_string(),
        name: "HR Person".to_string(),
        role: Role::Hr,
        created_at: Utc::now(),
    }
}

/// Test a freshly issued token carries the user's claims
#[tokio::test]
async fn test_session_token_claims() {
    let sessions = create_test_session_issuer();
    let user = test_user();

    let token = sessions.issue(&user).unwrap();
    let claims = sessions.validate(&token).unwrap();

    assert_eq!(claims.user_id(), user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, Role::Hr);
    assert_eq!(claims.exp - claims.iat, Duration::days(7).num_seconds());
}

/// Test the validity window ends seven days after issue
#[tokio::test]
async fn test_session_token_window() {
    let sessions = create_test_session_issuer();
    let user = test_user();

    let almost_expired = sessions
        .issue_at(&user, Utc::now() - Duration::days(7) + Duration::minutes(1))
        .unwrap();
    assert!(sessions.validate(&almost_expired).is_ok());

    let expired = sessions
        .issue_at(&user, Utc::now() - Duration::days(7) - Duration::seconds(5))
        .unwrap();
    let result = sessions.validate(&expired);
    assert!(matches!(result, Err(ServerError::Auth(_))));
}

/// Test tokens signed with another secret are rejected
#[tokio::test]
async fn test_session_token_wrong_secret() {
    let sessions = create_test_session_issuer();
    let other = SessionIssuer::new("some-other-secret", 7);

    let token = other.issue(&test_user()).unwrap();

    assert!(sessions.validate(&token).is_err());
    assert!(sessions.validate("not.a.token").is_err());
}

/// Test verification with the right and wrong passwords
#[tokio::test]
async fn test_verify_credentials() {
    let credentials = create_test_credentials();
    let created = credentials
        .create(new_user("hr@example.com", "password123"))
        .await
        .unwrap();

    let verified = credentials
        .verify("hr@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(verified.id, created.id);

    assert!(credentials
        .verify("hr@example.com", "wrongpassword")
        .await
        .is_none());
    assert!(credentials
        .verify("nobody@example.com", "password123")
        .await
        .is_none());
}

/// Test duplicate emails are refused and ids are sequential
#[tokio::test]
async fn test_create_users() {
    let credentials = create_test_credentials();

    let first = credentials
        .create(new_user("one@example.com", "password123"))
        .await
        .unwrap();
    let second = credentials
        .create(new_user("two@example.com", "password123"))
        .await
        .unwrap();
    assert_eq!(first.id, UserId::new(1));
    assert_eq!(second.id, UserId::new(2));

    let result = credentials
        .create(new_user("one@example.com", "differentpassword"))
        .await;
    assert!(matches!(result, Err(ServerError::Duplicate(_))));

    // The original password still works
    assert!(credentials
        .verify("one@example.com", "password123")
        .await
        .is_some());
}

/// Test users are returned without any password material
#[tokio::test]
async fn test_user_has_no_password() {
    let credentials = create_test_credentials();
    let user = credentials
        .create(new_user("hr@example.com", "password123"))
        .await
        .unwrap();

    let json = serde_json::to_value(&user).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 5);
    assert!(!json.to_string().contains("password123"));
    assert!(json.get("password").is_none());

    let fetched = credentials.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.email, "hr@example.com");
    assert!(credentials.get_by_id(UserId::new(99)).await.is_none());
}

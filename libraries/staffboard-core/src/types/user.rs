/// User domain types
use super::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, bootstrapped from configuration
    Admin,
    /// Default role for self-registered staff
    Hr,
    /// Hiring manager
    Manager,
}

/// User account as exposed outside the credential store
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login email, unique across users
    pub email: String,

    /// Display name
    pub name: String,

    /// Staff role
    pub role: Role,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a user
///
/// `password` is plaintext and is hashed by the credential store.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Login email
    pub email: String,
    /// Display name
    pub name: String,
    /// Plaintext password
    pub password: String,
    /// Assigned role
    pub role: Role,
}

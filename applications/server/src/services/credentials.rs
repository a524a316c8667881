/// Credential service - in-memory user accounts and password checks
use crate::error::{Result, ServerError};
use chrono::Utc;
use staffboard_core::{CreateUser, User, UserId};
use tokio::sync::RwLock;

/// Stored account: the public user plus its bcrypt hash
#[derive(Debug, Clone)]
struct Account {
    user: User,
    password_hash: String,
}

/// Owns the user collection
///
/// Users live only in process memory. Every read hands out a `User`, which
/// has no password hash.
#[derive(Debug)]
pub struct CredentialService {
    accounts: RwLock<Vec<Account>>,
    hash_cost: u32,
}

impl CredentialService {
    pub fn new(hash_cost: u32) -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
            hash_cost,
        }
    }

    /// Check an email/password pair
    ///
    /// Returns `None` for an unknown email, a wrong password, or a stored hash
    /// bcrypt cannot parse.
    pub async fn verify(&self, email: &str, password: &str) -> Option<User> {
        let account = {
            let accounts = self.accounts.read().await;
            accounts.iter().find(|a| a.user.email == email).cloned()?
        };

        match bcrypt::verify(password, &account.password_hash) {
            Ok(true) => Some(account.user),
            Ok(false) => None,
            Err(e) => {
                tracing::error!("Password comparison error for {}: {}", email, e);
                None
            }
        }
    }

    /// Create an account, hashing its password
    ///
    /// Email and password policy are checked by the caller.
    pub async fn create(&self, new_user: CreateUser) -> Result<User> {
        let password_hash = bcrypt::hash(&new_user.password, self.hash_cost)?;

        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.user.email == new_user.email) {
            return Err(ServerError::Duplicate(
                "User with this email already exists".to_string(),
            ));
        }

        let id = accounts
            .iter()
            .map(|a| a.user.id.get())
            .max()
            .map_or(1, |max| max + 1);

        let user = User {
            id: UserId::new(id),
            email: new_user.email,
            name: new_user.name,
            role: new_user.role,
            created_at: Utc::now(),
        };

        accounts.push(Account {
            user: user.clone(),
            password_hash,
        });

        tracing::info!("Created user {} ({:?})", user.email, user.role);
        Ok(user)
    }

    /// Look up a user by id
    pub async fn get_by_id(&self, id: UserId) -> Option<User> {
        self.accounts
            .read()
            .await
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
    }
}

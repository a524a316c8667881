/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use staffboard_storage::StorageBackend;
use std::path::{Path, PathBuf};

/// Lowest bcrypt cost accepted in configuration
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest bcrypt cost accepted in configuration
pub const MAX_BCRYPT_COST: u32 = 31;

/// Signing secret used when none is configured outside production
const DEVELOPMENT_JWT_SECRET: &str = "staffboard-development-secret-do-not-deploy";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

/// Deployment mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served for non-API paths, if any
    #[serde(default)]
    pub web_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Explicit backend; when unset, production runs in memory and
    /// development uses the JSON file
    #[serde(default)]
    pub backend: Option<StorageBackend>,

    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Start a new store with sample postings
    #[serde(default = "default_seed")]
    pub seed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_session_ttl_days")]
    pub session_ttl_days: u32,

    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Account created at startup
    #[serde(default)]
    pub admin: Option<AdminAccount>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
    #[serde(default = "default_admin_name")]
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or `config.toml` when
    /// `None`) with environment overrides
    ///
    /// Environment variables use the `STAFFBOARD__` prefix and `__` between
    /// sections, e.g. `STAFFBOARD__AUTH__JWT_SECRET`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("STAFFBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() && self.environment.is_production() {
            return Err(ServerError::Config(
                "JWT secret is required in production (set STAFFBOARD__AUTH__JWT_SECRET)"
                    .to_string(),
            ));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ServerError::Config(format!(
                "bcrypt_cost must be between {} and {}",
                MIN_BCRYPT_COST,
                MAX_BCRYPT_COST
            )));
        }

        if self.auth.session_ttl_days == 0 {
            return Err(ServerError::Config(
                "session_ttl_days must be positive".to_string(),
            ));
        }

        if let Some(admin) = &self.auth.admin {
            if admin.email.is_empty() || admin.password.len() < crate::api::auth::MIN_PASSWORD_LEN
            {
                return Err(ServerError::Config(
                    "admin account needs an email and a password of at least 8 characters"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Secret used to sign session tokens
    pub fn jwt_secret(&self) -> String {
        if self.auth.jwt_secret.is_empty() {
            tracing::warn!("No JWT secret configured, using the development secret");
            DEVELOPMENT_JWT_SECRET.to_string()
        } else {
            self.auth.jwt_secret.clone()
        }
    }

    /// Backend to open at startup
    pub fn storage_backend(&self) -> StorageBackend {
        self.storage.backend.unwrap_or(if self.environment.is_production() {
            StorageBackend::Memory
        } else {
            StorageBackend::File
        })
    }

    /// Session cookies carry `Secure` everywhere but local development
    pub fn secure_cookies(&self) -> bool {
        self.environment.is_production()
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        web_dir: None,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        backend: None,
        data_path: default_data_path(),
        seed: default_seed(),
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data/jobs.json")
}

fn default_seed() -> bool {
    true
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        session_ttl_days: default_session_ttl_days(),
        bcrypt_cost: default_bcrypt_cost(),
        admin: None,
    }
}

fn default_session_ttl_days() -> u32 {
    7
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_admin_name() -> String {
    "Admin User".to_string()
}

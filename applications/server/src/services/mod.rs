/// Server services
pub mod credentials;
pub mod session;
pub mod stats;

pub use credentials::CredentialService;
pub use session::{Claims, SessionIssuer, SESSION_COOKIE};
pub use stats::compute_stats;

/// Request middleware
pub mod auth;

pub use auth::{is_public_path, session_gate, SessionUser};

//! Domain types shared across Staffboard crates

mod ids;
mod job;
mod stats;
mod user;

pub use ids::{JobId, UserId};
pub use job::{CreateJob, Job, JobStatus, UpdateJob};
pub use stats::{DashboardStats, RecentJob, RECENT_JOBS_LIMIT};
pub use user::{CreateUser, Role, User};

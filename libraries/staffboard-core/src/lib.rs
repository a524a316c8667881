//! Staffboard Core
//!
//! Domain types, the job store trait, and error handling shared by the
//! storage backends and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Job`, `User`, `DashboardStats`
//! - **Collection Logic**: `JobDocument`, the whole-collection document every
//!   backend reads, mutates and writes back
//! - **Core Traits**: `JobStore`
//! - **Error Handling**: Unified `StaffboardError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use staffboard_core::{CreateJob, JobDocument, JobStatus};
//!
//! let mut document = JobDocument::default();
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//!
//! let job = document.create(
//!     CreateJob {
//!         title: "Backend Engineer".to_string(),
//!         department: "Engineering".to_string(),
//!         location: "Remote".to_string(),
//!         employment_type: "Full Time".to_string(),
//!         experience: "Senior Level".to_string(),
//!         salary: None,
//!         openings: 2,
//!         status: JobStatus::Active,
//!         description: None,
//!         requirements: None,
//!         responsibilities: None,
//!     },
//!     today,
//! )?;
//!
//! assert_eq!(job.id.get(), 1);
//! assert_eq!(job.applications, 0);
//! # Ok::<(), staffboard_core::StaffboardError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod storage;
pub mod types;

pub use document::JobDocument;
pub use error::{Result, StaffboardError};
pub use storage::JobStore;

pub use types::{
    CreateJob, CreateUser, DashboardStats, Job, JobId, JobStatus, RecentJob, Role, UpdateJob,
    User, UserId,
};

//! Storage trait for job postings

use crate::error::Result;
use crate::types::{CreateJob, Job, JobId, UpdateJob};
use async_trait::async_trait;

/// Record store owning the job collection
///
/// Every operation loads the whole collection, mutates it, and writes the
/// whole collection back. Nothing guards the gap between load and write, so
/// two concurrent writers can lose an update (last write wins).
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Get all jobs in stored order
    async fn list_all(&self) -> Result<Vec<Job>>;

    /// Get job by ID
    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>>;

    /// Create a new job
    ///
    /// The store assigns the id, sets `applications` to 0 and `posted` to
    /// today's date.
    async fn create(&self, job: CreateJob) -> Result<Job>;

    /// Merge the provided fields into an existing job
    ///
    /// Returns `None` when no job has this id.
    async fn update(&self, id: JobId, changes: UpdateJob) -> Result<Option<Job>>;

    /// Delete a job, returning whether anything was removed
    async fn delete(&self, id: JobId) -> Result<bool>;
}

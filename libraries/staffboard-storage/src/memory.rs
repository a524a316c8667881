//! In-process backend

use async_trait::async_trait;
use chrono::Utc;
use staffboard_core::{CreateJob, Job, JobDocument, JobId, JobStore, Result, UpdateJob};
use tokio::sync::RwLock;

/// Job store holding the collection in memory
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<JobDocument>,
}

impl MemoryStore {
    /// Start from `document`
    pub fn new(document: JobDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Job>> {
        Ok(self.document.read().await.jobs.clone())
    }

    async fn get_by_id(&self, id: JobId) -> Result<Option<Job>> {
        Ok(self.document.read().await.get(id).cloned())
    }

    async fn create(&self, job: CreateJob) -> Result<Job> {
        let mut document = self.document.write().await;
        document.create(job, Utc::now().date_naive())
    }

    async fn update(&self, id: JobId, changes: UpdateJob) -> Result<Option<Job>> {
        Ok(self.document.write().await.update(id, changes))
    }

    async fn delete(&self, id: JobId) -> Result<bool> {
        Ok(self.document.write().await.remove(id))
    }
}

//! On-disk JSON document backend

use crate::error::{Result, StorageError};
use async_trait::async_trait;
use chrono::Utc;
use staffboard_core::{CreateJob, Job, JobDocument, JobId, JobStore, UpdateJob};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Job store backed by a single pretty-printed JSON file
///
/// Each call reads the file, mutates the parsed document, and overwrites the
/// file. There is no lock across that cycle.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the file when it does not exist
    ///
    /// A new file holds `initial`, usually the seed document or an empty one.
    pub async fn open(path: impl Into<PathBuf>, initial: JobDocument) -> Result<Self> {
        let store = Self { path: path.into() };
        store.initialize(initial).await?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn initialize(&self, initial: JobDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;
        if !exists {
            tracing::info!(
                "Creating job document at {} with {} jobs",
                self.path.display(),
                initial.jobs.len()
            );
            self.save(&initial).await?;
        }

        Ok(())
    }

    async fn load(&self) -> Result<JobDocument> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;

        serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, document: &JobDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;

        tracing::debug!("Wrote {} jobs to {}", document.jobs.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl JobStore for JsonFileStore {
    async fn list_all(&self) -> staffboard_core::Result<Vec<Job>> {
        Ok(self.load().await?.jobs)
    }

    async fn get_by_id(&self, id: JobId) -> staffboard_core::Result<Option<Job>> {
        Ok(self.load().await?.get(id).cloned())
    }

    async fn create(&self, job: CreateJob) -> staffboard_core::Result<Job> {
        let mut document = self.load().await?;
        let job = document.create(job, Utc::now().date_naive())?;
        self.save(&document).await?;
        Ok(job)
    }

    async fn update(&self, id: JobId, changes: UpdateJob) -> staffboard_core::Result<Option<Job>> {
        let mut document = self.load().await?;
        let Some(job) = document.update(id, changes) else {
            return Ok(None);
        };
        self.save(&document).await?;
        Ok(Some(job))
    }

    async fn delete(&self, id: JobId) -> staffboard_core::Result<bool> {
        let mut document = self.load().await?;
        if !document.remove(id) {
            return Ok(false);
        }
        self.save(&document).await?;
        Ok(true)
    }
}

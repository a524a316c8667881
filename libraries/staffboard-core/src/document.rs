//! The persisted job collection
//!
//! Backends load a whole [`JobDocument`], call one of the mutating methods,
//! and persist the whole document back. The id, applications and posted-date
//! rules live here so every backend applies them the same way.

use crate::error::{Result, StaffboardError};
use crate::types::{CreateJob, Job, JobId, UpdateJob};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// On-disk shape: `{ "jobs": [ ... ] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDocument {
    /// Jobs in insertion order
    pub jobs: Vec<Job>,
}

impl JobDocument {
    /// Wrap an existing collection
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Id the next created job will receive: max + 1, or 1 when empty
    ///
    /// Fails when the current max is `u64::MAX`.
    pub fn next_id(&self) -> Result<JobId> {
        match self.jobs.iter().map(|job| job.id).max() {
            None => Ok(JobId::new(1)),
            Some(max) => max.next().ok_or_else(|| {
                StaffboardError::storage(format!("No job id available after {}", max))
            }),
        }
    }

    /// Find a job by id
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Append a new job posted on `today` with no applications
    pub fn create(&mut self, fields: CreateJob, today: NaiveDate) -> Result<Job> {
        let job = Job {
            id: self.next_id()?,
            title: fields.title,
            department: fields.department,
            location: fields.location,
            employment_type: fields.employment_type,
            experience: fields.experience,
            salary: fields.salary,
            openings: fields.openings,
            applications: 0,
            posted: today,
            status: fields.status,
            description: fields.description,
            requirements: fields.requirements,
            responsibilities: fields.responsibilities,
        };
        self.jobs.push(job.clone());
        Ok(job)
    }

    /// Merge `changes` into the job with `id`
    pub fn update(&mut self, id: JobId, changes: UpdateJob) -> Option<Job> {
        let job = self.jobs.iter_mut().find(|job| job.id == id)?;
        changes.apply_to(job);
        Some(job.clone())
    }

    /// Remove the job with `id`, returning whether one was removed
    pub fn remove(&mut self, id: JobId) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.id != id);
        self.jobs.len() < before
    }
}

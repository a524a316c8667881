/// Dashboard summary types
use super::ids::JobId;
use super::job::{Job, JobStatus};
use serde::{Deserialize, Serialize};

/// Number of postings listed under "recent jobs"
pub const RECENT_JOBS_LIMIT: usize = 4;

/// Condensed job entry for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentJob {
    /// Job identifier
    pub id: JobId,
    /// Position title
    pub title: String,
    /// Owning department
    pub department: String,
    /// Employment type
    #[serde(rename = "type")]
    pub employment_type: String,
    /// Number of open positions
    pub openings: u32,
    /// Applications received
    pub applications: u32,
    /// Posting status
    pub status: JobStatus,
}

impl From<&Job> for RecentJob {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            department: job.department.clone(),
            employment_type: job.employment_type.clone(),
            openings: job.openings,
            applications: job.applications,
            status: job.status,
        }
    }
}

/// Aggregate counts over the whole job collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of postings
    pub total_jobs: usize,
    /// Postings with status active
    pub active_jobs: usize,
    /// Postings with status inactive
    pub inactive_jobs: usize,
    /// Sum of applications over all postings
    pub total_applications: u64,
    /// Up to four most recently posted jobs
    pub recent_jobs: Vec<RecentJob>,
}

impl DashboardStats {
    /// Full scan of `jobs`
    ///
    /// Recent jobs are ordered by posted date, newest first. Jobs posted on
    /// the same day keep their stored order.
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let active_jobs = jobs.iter().filter(|j| j.is_active()).count();
        let inactive_jobs = jobs.len() - active_jobs;
        let total_applications = jobs.iter().map(|j| u64::from(j.applications)).sum();

        let mut by_date: Vec<&Job> = jobs.iter().collect();
        by_date.sort_by(|a, b| b.posted.cmp(&a.posted));
        let recent_jobs = by_date
            .into_iter()
            .take(RECENT_JOBS_LIMIT)
            .map(RecentJob::from)
            .collect();

        Self {
            total_jobs: jobs.len(),
            active_jobs,
            inactive_jobs,
            total_applications,
            recent_jobs,
        }
    }
}

/// Job posting API routes
use crate::{
    api::ApiResponse,
    error::{Result, ServerError},
    middleware::SessionUser,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use staffboard_core::{CreateJob, Job, JobId, JobStatus, UpdateJob};

/// Body of POST /api/jobs
///
/// Every field is optional at the wire level so a missing one can be named in
/// the error. Unknown keys, including `id`, `applications` and `posted`, are
/// dropped.
#[derive(Debug, Default, Deserialize)]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub openings: Option<u32>,
    pub status: Option<JobStatus>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
}

impl CreateJobRequest {
    /// Check required fields in a fixed order and build the store input
    pub fn into_create_job(self) -> Result<CreateJob> {
        fn required(field: &str, value: Option<String>) -> Result<String> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(missing(field)),
            }
        }

        fn missing(field: &str) -> ServerError {
            ServerError::BadRequest(format!("Missing required field: {}", field))
        }

        let title = required("title", self.title)?;
        let department = required("department", self.department)?;
        let location = required("location", self.location)?;
        let employment_type = required("type", self.employment_type)?;
        let experience = required("experience", self.experience)?;
        let openings = match self.openings {
            Some(n) if n > 0 => n,
            _ => return Err(missing("openings")),
        };

        Ok(CreateJob {
            title,
            department,
            location,
            employment_type,
            experience,
            salary: self.salary,
            openings,
            status: self.status.unwrap_or_default(),
            description: self.description,
            requirements: self.requirements,
            responsibilities: self.responsibilities,
        })
    }
}

fn parse_job_id(raw: &str) -> Result<JobId> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest("Invalid job ID".to_string()))
}

fn job_not_found() -> ServerError {
    ServerError::NotFound("Job not found".to_string())
}

/// GET /api/jobs
pub async fn list_jobs(State(app_state): State<AppState>) -> Result<Json<ApiResponse<Vec<Job>>>> {
    let jobs = app_state.jobs.list_all().await?;
    Ok(ApiResponse::ok(jobs))
}

/// POST /api/jobs
pub async fn create_job(
    State(app_state): State<AppState>,
    session: SessionUser,
    payload: std::result::Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Job>>)> {
    let Json(req) = payload?;
    let fields = req.into_create_job()?;

    let job = app_state.jobs.create(fields).await?;
    tracing::info!(
        "Job {} ({}) created by {}",
        job.id,
        job.title,
        session.claims().email
    );

    Ok((StatusCode::CREATED, ApiResponse::ok(job)))
}

/// GET /api/jobs/:id
pub async fn get_job(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<Job>>> {
    let id = parse_job_id(&id)?;

    let job = app_state
        .jobs
        .get_by_id(id)
        .await?
        .ok_or_else(job_not_found)?;

    Ok(ApiResponse::ok(job))
}

/// PUT /api/jobs/:id
/// Merge the provided fields; `applications` and `posted` are never changed
pub async fn update_job(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    session: SessionUser,
    payload: std::result::Result<Json<UpdateJob>, JsonRejection>,
) -> Result<Json<ApiResponse<Job>>> {
    let id = parse_job_id(&id)?;
    let Json(changes) = payload?;
    changes.validate()?;

    let job = app_state
        .jobs
        .update(id, changes)
        .await?
        .ok_or_else(job_not_found)?;

    tracing::info!("Job {} updated by {}", job.id, session.claims().email);
    Ok(ApiResponse::ok(job))
}

/// DELETE /api/jobs/:id
pub async fn delete_job(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<()>>> {
    let id = parse_job_id(&id)?;

    if !app_state.jobs.delete(id).await? {
        return Err(job_not_found());
    }

    tracing::info!("Job {} deleted by {}", id, session.claims().email);
    Ok(ApiResponse::empty())
}

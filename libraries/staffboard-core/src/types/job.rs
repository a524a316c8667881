/// Job posting domain types
use super::ids::JobId;
use crate::error::{Result, StaffboardError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Posting status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Open for applications
    #[default]
    Active,
    /// Retired posting, kept for history
    Inactive,
}

/// A recruitment listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier, assigned by the store
    pub id: JobId,

    /// Position title
    pub title: String,

    /// Owning department
    pub department: String,

    /// Work location ("Remote", "Lagos, Nigeria", ...)
    pub location: String,

    /// Employment type ("Full Time", "Internship", ...)
    #[serde(rename = "type")]
    pub employment_type: String,

    /// Experience level ("Entry Level", "Senior Level", ...)
    pub experience: String,

    /// Free-form salary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    /// Number of open positions, always positive
    pub openings: u32,

    /// Applications received, maintained by the server
    pub applications: u32,

    /// Date the posting was created
    pub posted: NaiveDate,

    /// Posting status
    pub status: JobStatus,

    /// Long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Candidate requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,

    /// Role responsibilities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,
}

impl Job {
    /// Whether the posting is currently active
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}

/// Fields accepted when creating a job
///
/// `id`, `applications` and `posted` are not part of this type; the store
/// assigns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJob {
    /// Position title
    pub title: String,
    /// Owning department
    pub department: String,
    /// Work location
    pub location: String,
    /// Employment type
    #[serde(rename = "type")]
    pub employment_type: String,
    /// Experience level
    pub experience: String,
    /// Free-form salary text
    #[serde(default)]
    pub salary: Option<String>,
    /// Number of open positions, must be positive
    pub openings: u32,
    /// Initial status, active unless given
    #[serde(default)]
    pub status: JobStatus,
    /// Long description
    #[serde(default)]
    pub description: Option<String>,
    /// Candidate requirements
    #[serde(default)]
    pub requirements: Option<String>,
    /// Role responsibilities
    #[serde(default)]
    pub responsibilities: Option<String>,
}

/// Partial update of a job
///
/// Only fields that are `Some` are applied. There is deliberately no way to
/// set `id`, `applications` or `posted` through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateJob {
    /// New title, must not be blank
    pub title: Option<String>,
    /// New department, must not be blank
    pub department: Option<String>,
    /// New location, must not be blank
    pub location: Option<String>,
    /// New employment type, must not be blank
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    /// New experience level, must not be blank
    pub experience: Option<String>,
    /// New salary text
    pub salary: Option<String>,
    /// New number of openings, must be positive
    pub openings: Option<u32>,
    /// New status
    pub status: Option<JobStatus>,
    /// New description
    pub description: Option<String>,
    /// New requirements
    pub requirements: Option<String>,
    /// New responsibilities
    pub responsibilities: Option<String>,
}

impl UpdateJob {
    /// Reject updates that would break a job invariant
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("department", &self.department),
            ("location", &self.location),
            ("type", &self.employment_type),
            ("experience", &self.experience),
        ];
        for (field, value) in required {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(StaffboardError::invalid_input(format!(
                    "Field cannot be empty: {}",
                    field
                )));
            }
        }

        if self.openings == Some(0) {
            return Err(StaffboardError::invalid_input(
                "Openings must be a positive number",
            ));
        }

        Ok(())
    }

    /// Merge the provided fields into `job`
    pub fn apply_to(self, job: &mut Job) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut job.title, self.title);
        merge(&mut job.department, self.department);
        merge(&mut job.location, self.location);
        merge(&mut job.employment_type, self.employment_type);
        merge(&mut job.experience, self.experience);
        merge(&mut job.openings, self.openings);
        merge(&mut job.status, self.status);

        if self.salary.is_some() {
            job.salary = self.salary;
        }
        if self.description.is_some() {
            job.description = self.description;
        }
        if self.requirements.is_some() {
            job.requirements = self.requirements;
        }
        if self.responsibilities.is_some() {
            job.responsibilities = self.responsibilities;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job {
            id: JobId::new(1),
            title: "UI UX Designer".to_string(),
            department: "Design".to_string(),
            location: "Lagos, Nigeria".to_string(),
            employment_type: "Full Time".to_string(),
            experience: "Mid Level".to_string(),
            salary: None,
            openings: 12,
            applications: 135,
            posted: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            status: JobStatus::Active,
            description: Some("Design things".to_string()),
            requirements: None,
            responsibilities: None,
        }
    }

    #[test]
    fn test_job_wire_shape() {
        let value = serde_json::to_value(sample_job()).unwrap();

        assert_eq!(value["type"], "Full Time");
        assert_eq!(value["posted"], "2023-04-01");
        assert_eq!(value["status"], "active");
        assert!(value.get("employment_type").is_none());
        assert!(value.get("salary").is_none(), "absent optionals are omitted");
    }

    #[test]
    fn test_update_ignores_server_maintained_fields() {
        let changes: UpdateJob = serde_json::from_value(serde_json::json!({
            "title": "Senior Designer",
            "applications": 9999,
            "posted": "1999-01-01",
            "id": 77
        }))
        .unwrap();

        let mut job = sample_job();
        changes.apply_to(&mut job);

        assert_eq!(job.title, "Senior Designer");
        assert_eq!(job.id, JobId::new(1));
        assert_eq!(job.applications, 135);
        assert_eq!(job.posted, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
    }

    #[test]
    fn test_update_leaves_unspecified_fields() {
        let mut job = sample_job();
        UpdateJob {
            status: Some(JobStatus::Inactive),
            ..Default::default()
        }
        .apply_to(&mut job);

        assert_eq!(job.status, JobStatus::Inactive);
        assert_eq!(job.title, "UI UX Designer");
        assert_eq!(job.description.as_deref(), Some("Design things"));
    }

    #[test]
    fn test_update_validation() {
        let zero_openings = UpdateJob {
            openings: Some(0),
            ..Default::default()
        };
        assert!(zero_openings.validate().is_err());

        let blank_title = UpdateJob {
            title: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank_title.validate().is_err());

        assert!(UpdateJob::default().validate().is_ok());
    }

    #[test]
    fn test_create_job_defaults_status() {
        let create: CreateJob = serde_json::from_value(serde_json::json!({
            "title": "QA Engineer",
            "department": "Engineering",
            "location": "Remote",
            "type": "Contract",
            "experience": "Mid Level",
            "openings": 1
        }))
        .unwrap();

        assert_eq!(create.status, JobStatus::Active);
        assert_eq!(create.employment_type, "Contract");
    }
}

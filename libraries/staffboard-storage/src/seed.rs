//! Sample postings written into a fresh store

use chrono::NaiveDate;
use staffboard_core::{Job, JobDocument, JobId, JobStatus};

struct SeedJob {
    id: u64,
    title: &'static str,
    department: &'static str,
    location: &'static str,
    employment_type: &'static str,
    experience: &'static str,
    openings: u32,
    applications: u32,
    posted: (i32, u32, u32),
    status: JobStatus,
    description: &'static str,
    requirements: &'static str,
    responsibilities: &'static str,
}

const SEED_JOBS: &[SeedJob] = &[
    SeedJob {
        id: 1,
        title: "UI UX Designer",
        department: "Design",
        location: "Lagos, Nigeria",
        employment_type: "Full Time",
        experience: "Mid Level",
        openings: 12,
        applications: 135,
        posted: (2023, 4, 1),
        status: JobStatus::Active,
        description: "We are looking for a talented UI/UX Designer to create amazing user experiences.",
        requirements: "- 3+ years of UI/UX design experience\n- Proficiency in design tools like Figma\n- Portfolio showcasing your work",
        responsibilities: "- Create user-centered designs\n- Develop UI mockups and prototypes\n- Conduct user research",
    },
    SeedJob {
        id: 2,
        title: "Full Stack Developer",
        department: "Engineering",
        location: "Remote",
        employment_type: "Full Time",
        experience: "Senior Level",
        openings: 8,
        applications: 100,
        posted: (2023, 3, 15),
        status: JobStatus::Inactive,
        description: "We're seeking an experienced Full Stack Developer to join our engineering team.",
        requirements: "- 5+ years of full stack development\n- Experience with React and Node.js\n- Strong problem-solving skills",
        responsibilities: "- Develop and maintain web applications\n- Collaborate with cross-functional teams\n- Write clean, maintainable code",
    },
    SeedJob {
        id: 3,
        title: "DevOps Engineer",
        department: "Engineering",
        location: "Lagos, Nigeria",
        employment_type: "Internship",
        experience: "Entry Level",
        openings: 12,
        applications: 5,
        posted: (2023, 4, 10),
        status: JobStatus::Active,
        description: "Join our DevOps team and help us build robust infrastructure.",
        requirements: "- Basic knowledge of cloud platforms\n- Understanding of CI/CD pipelines\n- Eager to learn and grow",
        responsibilities: "- Assist in maintaining cloud infrastructure\n- Help automate deployment processes\n- Learn about monitoring and logging",
    },
    SeedJob {
        id: 4,
        title: "Android Developer",
        department: "Engineering",
        location: "Abuja, Nigeria",
        employment_type: "Full Time",
        experience: "Mid Level",
        openings: 4,
        applications: 45,
        posted: (2023, 3, 20),
        status: JobStatus::Active,
        description: "We're looking for an Android Developer to build innovative mobile applications.",
        requirements: "- 3+ years of Android development\n- Experience with Kotlin\n- Understanding of mobile UX principles",
        responsibilities: "- Develop and maintain Android applications\n- Collaborate with the design team\n- Optimize application performance",
    },
    SeedJob {
        id: 5,
        title: "Product Manager",
        department: "Product",
        location: "Lagos, Nigeria",
        employment_type: "Full Time",
        experience: "Senior Level",
        openings: 2,
        applications: 78,
        posted: (2023, 2, 28),
        status: JobStatus::Inactive,
        description: "We're seeking a Product Manager to lead our product development efforts.",
        requirements: "- 5+ years of product management experience\n- Strong analytical skills\n- Excellent communication abilities",
        responsibilities: "- Define product vision and strategy\n- Work with engineering and design teams\n- Analyze market trends and user feedback",
    },
];

/// The sample collection
pub fn seed_document() -> JobDocument {
    let jobs = SEED_JOBS
        .iter()
        .map(|seed| Job {
            id: JobId::new(seed.id),
            title: seed.title.to_string(),
            department: seed.department.to_string(),
            location: seed.location.to_string(),
            employment_type: seed.employment_type.to_string(),
            experience: seed.experience.to_string(),
            salary: None,
            openings: seed.openings,
            applications: seed.applications,
            posted: NaiveDate::from_ymd_opt(seed.posted.0, seed.posted.1, seed.posted.2)
                .unwrap_or(NaiveDate::MIN),
            status: seed.status,
            description: Some(seed.description.to_string()),
            requirements: Some(seed.requirements.to_string()),
            responsibilities: Some(seed.responsibilities.to_string()),
        })
        .collect();

    JobDocument::new(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique_and_dates_valid() {
        let doc = seed_document();
        let ids: HashSet<_> = doc.jobs.iter().map(|j| j.id).collect();

        assert_eq!(ids.len(), doc.jobs.len());
        assert_eq!(doc.next_id().unwrap(), JobId::new(6));
        assert!(doc.jobs.iter().all(|j| j.posted != NaiveDate::MIN));
        assert!(doc.jobs.iter().all(|j| j.openings > 0));
    }
}

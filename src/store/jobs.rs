//! Job listing operations and validation

use chrono::Utc;
use tracing::info;

use super::memory::MemoryStore;
use super::models::{Job, NewJob};
use crate::common::{generate_job_id, ValidationResult, Validator};

impl MemoryStore {
    /// All listings, newest first
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    pub fn get_jobs_by_profession(&self, profession: &str) -> Vec<Job> {
        let needle = profession.to_lowercase();
        self.jobs
            .iter()
            .filter(|j| j.profession.to_lowercase() == needle)
            .cloned()
            .collect()
    }

    /// Create a listing. Callers validate with `JobValidator` first.
    pub fn add_job(&mut self, new_job: NewJob) -> Job {
        let job = Job {
            id: generate_job_id(),
            client_id: new_job.client_id,
            title: new_job.title,
            profession: new_job.profession,
            budget: new_job.budget,
            location: new_job.location,
            description: new_job.description,
            posted_at: Utc::now(),
        };

        info!(
            job_id = %job.id,
            client_id = %job.client_id,
            profession = %job.profession,
            "Job listing created"
        );

        self.jobs.insert(0, job.clone());
        job
    }
}

// ============================================================================
// Job Validators
// ============================================================================

pub struct JobValidator;

impl Validator<NewJob> for JobValidator {
    fn validate(&self, data: &NewJob) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Job title is required");
        } else if data.title.len() > 255 {
            result.add_error("title", "Job title must be less than 255 characters");
        }

        // Profession drives matching; a listing without one is unreachable
        if data.profession.trim().is_empty() {
            result.add_error("profession", "Profession is required");
        }

        if data.budget < 0 {
            result.add_error("budget", "Budget cannot be negative");
        }

        if data.location.trim().is_empty() {
            result.add_error("location", "Location is required");
        } else if data.location.len() > 255 {
            result.add_error("location", "Location must be less than 255 characters");
        }

        if let Some(description) = &data.description {
            if description.len() > 10000 {
                result.add_error(
                    "description",
                    "Description must be less than 10000 characters",
                );
            }
        }

        result
    }
}

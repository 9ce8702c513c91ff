use std::{path::Path, str::FromStr};

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::prelude::Result;

const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    UnderReview,
    Shortlisted,
    Rejected,
    Accepted,
    Withdrawn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkAuthorization {
    #[default]
    Citizen,
    #[serde(rename = "Permanent Resident")]
    PermanentResident,
    #[serde(rename = "Work Visa")]
    WorkVisa,
    #[serde(rename = "Student Visa")]
    StudentVisa,
    #[serde(rename = "Requires Sponsorship")]
    RequiresSponsorship,
}

impl WorkAuthorization {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkAuthorization::Citizen => "Citizen",
            WorkAuthorization::PermanentResident => "Permanent Resident",
            WorkAuthorization::WorkVisa => "Work Visa",
            WorkAuthorization::StudentVisa => "Student Visa",
            WorkAuthorization::RequiresSponsorship => "Requires Sponsorship",
        }
    }
}

impl FromStr for WorkAuthorization {
    type Err = StandardError;

    fn from_str(s: &str) -> Result<Self> {
        [
            WorkAuthorization::Citizen,
            WorkAuthorization::PermanentResident,
            WorkAuthorization::WorkVisa,
            WorkAuthorization::StudentVisa,
            WorkAuthorization::RequiresSponsorship,
        ]
        .into_iter()
        .find(|w| w.as_str() == s)
        .ok_or_else(|| invalid(format!("unknown work authorization '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationEntry {
    pub id: String,
    pub job_id: String,
    pub applicant_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub cover_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub available_start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<String>,
    pub work_authorization: WorkAuthorization,
    pub is_willing_to_relocate: bool,
    pub applied_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    pub status: ApplicationStatus,
}

/// What listings expose about an application; contact details stay private.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: String,
    pub job_id: String,
    pub first_name: String,
    pub last_name: String,
    pub applied_date: String,
    pub status: ApplicationStatus,
}

impl From<&ApplicationEntry> for ApplicationSummary {
    fn from(entry: &ApplicationEntry) -> Self {
        ApplicationSummary {
            id: entry.id.clone(),
            job_id: entry.job_id.clone(),
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            applied_date: entry.applied_date.clone(),
            status: entry.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub size: usize,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct NewApplication {
    #[validate(length(min = 1, message = "jobId is required"))]
    pub job_id: String,
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "coverLetter is required"))]
    pub cover_letter: String,
    #[validate(length(min = 1, message = "availableStartDate is required"))]
    pub available_start_date: String,
    pub portfolio: Option<String>,
    pub linked_in: Option<String>,
    pub github: Option<String>,
    pub expected_salary: Option<String>,
    pub work_authorization: WorkAuthorization,
    pub is_willing_to_relocate: bool,
    pub resume: Option<ResumeUpload>,
}

impl NewApplication {
    /// Assigns one multipart text field by its form name. Unknown names are
    /// ignored; blank optional fields stay unset.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        let optional = |v: String| (!v.trim().is_empty()).then_some(v);
        match name {
            "jobId" => self.job_id = value,
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "coverLetter" => self.cover_letter = value,
            "availableStartDate" => self.available_start_date = value,
            "portfolio" => self.portfolio = optional(value),
            "linkedIn" => self.linked_in = optional(value),
            "github" => self.github = optional(value),
            "expectedSalary" => self.expected_salary = optional(value),
            "workAuthorization" => {
                if !value.is_empty() {
                    self.work_authorization = value.parse()?;
                }
            }
            "isWillingToRelocate" => self.is_willing_to_relocate = value == "true",
            _ => tracing::debug!("ignoring unknown application field {}", name),
        }
        Ok(())
    }

    /// Required fields, email format and the resume constraints.
    pub fn check(&self, max_resume_bytes: usize) -> Result<()> {
        self.validate().map_err(|e| invalid(e.to_string()))?;
        let resume = self
            .resume
            .as_ref()
            .filter(|r| r.size > 0)
            .ok_or_else(|| invalid("resume is required".into()))?;
        let extension = Path::new(&resume.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !RESUME_EXTENSIONS.contains(&extension.as_str()) {
            return Err(invalid("resume must be a PDF or Word document".into()));
        }
        if resume.size > max_resume_bytes {
            return Err(invalid(format!(
                "resume is {} bytes, the limit is {} bytes",
                resume.size, max_resume_bytes
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub cover_letter: Option<String>,
    pub portfolio: Option<String>,
    pub linked_in: Option<String>,
    pub github: Option<String>,
    pub available_start_date: Option<String>,
    pub expected_salary: Option<String>,
    pub work_authorization: Option<WorkAuthorization>,
    pub is_willing_to_relocate: Option<bool>,
}

/// In-memory application rows and the id sequence.
#[derive(Debug, Default)]
pub struct ApplicationTable {
    pub rows: Vec<ApplicationEntry>,
    pub seq: u64,
}

pub(crate) fn invalid(detail: String) -> StandardError {
    StandardError::new("ERR-APP-001")
        .interpolate_err(detail)
        .code(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewApplication {
        NewApplication {
            job_id: "job-1".into(),
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            email: "ada@example.com".into(),
            phone: "+234 800 000 0000".into(),
            cover_letter: "I would like to apply.".into(),
            available_start_date: "2026-11-01".into(),
            resume: Some(ResumeUpload { file_name: "cv.pdf".into(), size: 512 }),
            ..Default::default()
        }
    }

    #[test]
    fn complete_application_passes() {
        assert!(complete().check(1024).is_ok());
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut app = complete();
        app.phone.clear();
        assert!(app.check(1024).is_err());

        let mut app = complete();
        app.resume = None;
        assert!(app.check(1024).is_err());

        let mut app = complete();
        app.resume = Some(ResumeUpload { file_name: "cv.pdf".into(), size: 0 });
        assert!(app.check(1024).is_err());
    }

    #[test]
    fn email_format_is_checked() {
        let mut app = complete();
        app.email = "not-an-email".into();
        assert!(app.check(1024).is_err());
    }

    #[test]
    fn resume_type_and_size_are_checked() {
        let mut app = complete();
        app.resume = Some(ResumeUpload { file_name: "cv.exe".into(), size: 10 });
        assert!(app.check(1024).is_err());

        app.resume = Some(ResumeUpload { file_name: "CV.DOCX".into(), size: 10 });
        assert!(app.check(1024).is_ok());

        app.resume = Some(ResumeUpload { file_name: "cv.doc".into(), size: 2048 });
        assert!(app.check(1024).is_err());
    }

    #[test]
    fn form_fields_are_assigned_by_name() {
        let mut app = NewApplication::default();
        app.set_field("firstName", "Ada".into()).unwrap();
        app.set_field("github", "  ".into()).unwrap();
        app.set_field("workAuthorization", "Work Visa".into()).unwrap();
        app.set_field("isWillingToRelocate", "true".into()).unwrap();
        app.set_field("unexpected", "x".into()).unwrap();

        assert_eq!(app.first_name, "Ada");
        assert!(app.github.is_none());
        assert_eq!(app.work_authorization, WorkAuthorization::WorkVisa);
        assert!(app.is_willing_to_relocate);
        assert!(app.set_field("workAuthorization", "Tourist".into()).is_err());
    }

    #[test]
    fn enums_use_wire_names() {
        assert_eq!(
            serde_json::to_value(ApplicationStatus::UnderReview).unwrap(),
            serde_json::json!("under_review")
        );
        assert_eq!(
            serde_json::to_value(WorkAuthorization::RequiresSponsorship).unwrap(),
            serde_json::json!("Requires Sponsorship")
        );
    }
}

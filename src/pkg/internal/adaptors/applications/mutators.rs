use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::pkg::internal::adaptors::applications::spec::{
    ApplicationEntry, ApplicationPatch, ApplicationStatus, ApplicationTable, NewApplication,
};

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub struct ApplicationMutator<'a> {
    table: &'a mut ApplicationTable,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(table: &'a mut ApplicationTable) -> Self {
        ApplicationMutator { table }
    }

    /// Stores an already checked application. The resume itself is not kept,
    /// only a storage URL under `resume_base_url`.
    pub fn create(&mut self, input: NewApplication, resume_base_url: &str) -> ApplicationEntry {
        self.table.seq += 1;
        let uploaded_at = Utc::now();
        let resume_name = input.resume.map(|r| r.file_name).unwrap_or_default();
        let entry = ApplicationEntry {
            id: format!("app_{}", self.table.seq),
            job_id: input.job_id,
            applicant_id: format!("applicant_{}", Uuid::new_v4()),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            resume: format!(
                "{}/{}-{}",
                resume_base_url.trim_end_matches('/'),
                uploaded_at.timestamp_millis(),
                resume_name
            ),
            cover_letter: input.cover_letter,
            portfolio: input.portfolio,
            linked_in: input.linked_in,
            github: input.github,
            available_start_date: input.available_start_date,
            expected_salary: input.expected_salary,
            work_authorization: input.work_authorization,
            is_willing_to_relocate: input.is_willing_to_relocate,
            applied_date: uploaded_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_date: None,
            status: ApplicationStatus::Pending,
        };
        self.table.rows.push(entry.clone());
        entry
    }

    pub fn update(&mut self, id: &str, patch: ApplicationPatch) -> Option<ApplicationEntry> {
        let app = self.table.rows.iter_mut().find(|app| app.id == id)?;
        if let Some(status) = patch.status {
            app.status = status;
        }
        if let Some(first_name) = patch.first_name {
            app.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            app.last_name = last_name;
        }
        if let Some(email) = patch.email {
            app.email = email;
        }
        if let Some(phone) = patch.phone {
            app.phone = phone;
        }
        if let Some(cover_letter) = patch.cover_letter {
            app.cover_letter = cover_letter;
        }
        if let Some(start) = patch.available_start_date {
            app.available_start_date = start;
        }
        if let Some(work_authorization) = patch.work_authorization {
            app.work_authorization = work_authorization;
        }
        if let Some(relocate) = patch.is_willing_to_relocate {
            app.is_willing_to_relocate = relocate;
        }
        if patch.portfolio.is_some() {
            app.portfolio = patch.portfolio;
        }
        if patch.linked_in.is_some() {
            app.linked_in = patch.linked_in;
        }
        if patch.github.is_some() {
            app.github = patch.github;
        }
        if patch.expected_salary.is_some() {
            app.expected_salary = patch.expected_salary;
        }
        app.updated_date = Some(now());
        Some(app.clone())
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.table.rows.len();
        self.table.rows.retain(|app| app.id != id);
        self.table.rows.len() < before
    }
}

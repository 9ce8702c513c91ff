use crate::pkg::internal::adaptors::applications::spec::{
    ApplicationEntry, ApplicationSummary, ApplicationTable,
};

pub struct ApplicationSelector<'a> {
    table: &'a ApplicationTable,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(table: &'a ApplicationTable) -> Self {
        ApplicationSelector { table }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'a ApplicationEntry> {
        self.table.rows.iter().find(|app| app.id == id)
    }

    /// Summaries in submission order, narrowed by exact job id and/or email.
    pub fn list(&self, job_id: Option<&str>, email: Option<&str>) -> Vec<ApplicationSummary> {
        self.table
            .rows
            .iter()
            .filter(|app| job_id.is_none_or(|id| app.job_id == id))
            .filter(|app| email.is_none_or(|e| app.email == e))
            .map(ApplicationSummary::from)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.table.rows.len()
    }
}

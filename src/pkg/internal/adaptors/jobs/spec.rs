use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job posting as served to clients.
///
/// Missing text fields deserialize as empty strings and a missing tag list as
/// empty, so a partial record can still flow through filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub experience_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub tags: Vec<String>,
    pub posted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_remote: Option<bool>,
}

/// Most recently fetched job records, in the order the provider returned them.
#[derive(Debug, Default)]
pub struct JobCache {
    pub jobs: Vec<JobRecord>,
    pub last_updated: Option<DateTime<Utc>>,
}

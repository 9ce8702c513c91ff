use std::{borrow::Cow, time::Duration};

use reqwest::{StatusCode, header::ACCEPT};
use serde_json::Value;
use standard_error::{Interpolate, StandardError, Status};

use crate::{
    conf::Settings,
    pkg::internal::{
        adaptors::jobs::spec::JobRecord,
        listing::FilterSpec,
        upstream::mapping::{map_job, map_jobs},
    },
    prelude::Result,
};

/// One page request against the provider's search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub location: String,
    pub page: u32,
}

impl SearchParams {
    /// Picks the provider query from an explicit `query`, then the free-text
    /// search filter, then the configured default. Location follows the
    /// location filter or the configured default.
    pub fn resolve(query: &str, filters: &FilterSpec, page: Option<u32>, conf: &Settings) -> Self {
        let query = [query, filters.search.as_str()]
            .into_iter()
            .find(|q| !q.is_empty())
            .unwrap_or(conf.default_query.as_str());
        let location = if filters.location.is_empty() {
            &conf.default_location
        } else {
            &filters.location
        };
        SearchParams {
            query: query.to_string(),
            location: location.to_string(),
            page: page.unwrap_or(1).max(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobsClient {
    http: reqwest::Client,
    base_url: String,
    host: String,
    api_key: Option<String>,
}

impl JobsClient {
    pub fn new(
        base_url: &str,
        host: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StandardError::new("ERR-UPSTREAM-004").interpolate_err(e.to_string()))?;
        Ok(JobsClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            host: host.to_string(),
            api_key,
        })
    }

    pub fn from_settings(conf: &Settings) -> Result<Self> {
        JobsClient::new(
            &conf.jobs_api_url,
            &conf.jobs_api_host,
            conf.rapidapi_key.clone(),
            Duration::from_secs(conf.jobs_api_timeout_secs),
        )
    }

    pub async fn search(&self, params: &SearchParams) -> Result<Vec<JobRecord>> {
        tracing::debug!(
            query = %params.query,
            location = %params.location,
            page = params.page,
            "searching jobs"
        );
        let body = self
            .fetch(
                "search",
                &[
                    ("query", format!("{} jobs in {}", params.query, params.location)),
                    ("page", params.page.to_string()),
                    ("num_pages", "1".into()),
                    ("country", "us".into()),
                    ("date_posted", "all".into()),
                ],
            )
            .await?;
        let jobs = map_jobs(&body);
        tracing::debug!("mapped {} jobs from provider", jobs.len());
        Ok(jobs)
    }

    pub async fn details(&self, id: &str) -> Result<JobRecord> {
        // some provider links carry an already encoded id
        let id = urlencoding::decode(id).unwrap_or(Cow::Borrowed(id));
        let body = self
            .fetch("job-details", &[("job_id", id.to_string()), ("country", "us".into())])
            .await?;
        let item = body
            .get("data")
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .ok_or_else(|| {
                StandardError::new("ERR-JOBS-404")
                    .interpolate_err(id.to_string())
                    .code(StatusCode::NOT_FOUND)
            })?;
        let mut job = map_job(item, 0);
        if item.get("job_id").and_then(Value::as_str).is_none_or(str::is_empty) {
            job.id = id.into_owned();
        }
        Ok(job)
    }

    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            tracing::error!("missing RapidAPI key, cannot reach job search provider");
            StandardError::new("ERR-UPSTREAM-000").code(StatusCode::INTERNAL_SERVER_ERROR)
        })?;
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(params)
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", &self.host)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("job search provider unreachable: {}", e);
                StandardError::new("ERR-UPSTREAM-001")
                    .interpolate_err(e.to_string())
                    .code(StatusCode::BAD_GATEWAY)
            })?;
        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            StandardError::new("ERR-UPSTREAM-001")
                .interpolate_err(e.to_string())
                .code(StatusCode::BAD_GATEWAY)
        })?;
        if !status.is_success() {
            tracing::error!(status = %status, body = %raw, "job search provider returned an error");
            return Err(StandardError::new("ERR-UPSTREAM-002")
                .interpolate_err(format!("{status}: {raw}"))
                .code(status));
        }
        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("invalid JSON from job search provider: {}", e);
            StandardError::new("ERR-UPSTREAM-003")
                .interpolate_err(e.to_string())
                .code(StatusCode::BAD_GATEWAY)
        })
    }
}

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobRecord},
            listing::{FilterSpec, Page, filter_jobs, list_page},
            upstream::client::SearchParams,
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListJobsQuery {
    /// Provider search term; falls back to `search`.
    pub query: String,
    pub upstream_page: Option<u32>,
    pub search: String,
    pub category: String,
    pub location: String,
    pub experience_level: String,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl ListJobsQuery {
    fn filters(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            experience_level: self.experience_level.clone(),
        }
    }

    fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }

    fn page_size(&self, state: &AppState) -> usize {
        self.page_size
            .filter(|size| *size > 0)
            .unwrap_or(state.settings.page_size)
    }
}

/// Fetches a fresh page from the provider, caches it and returns the
/// requested slice of the filtered result.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListJobsQuery>,
) -> Result<Json<Page<JobRecord>>> {
    let filters = params.filters();
    let search = SearchParams::resolve(&params.query, &filters, params.upstream_page, &state.settings);
    let records = state.jobs_client.search(&search).await?;

    let matching = filter_jobs(&records, &filters);
    tracing::debug!(
        fetched = records.len(),
        matching = matching.len(),
        "filtered provider jobs"
    );
    JobMutator::new(&mut *state.jobs.write().await).set_jobs(records);

    Ok(Json(Page::of(&matching, params.page(), params.page_size(&state))))
}

/// Same filtering and paging over whatever was fetched last.
pub async fn cached(
    State(state): State<AppState>,
    Query(params): Query<ListJobsQuery>,
) -> Result<Json<Page<JobRecord>>> {
    let cache = state.jobs.read().await;
    let page = list_page(
        JobSelector::new(&cache).get_all(),
        &params.filters(),
        params.page(),
        params.page_size(&state),
    );
    Ok(Json(page))
}

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let cached = JobSelector::new(&*state.jobs.read().await)
        .get_by_id(&id)
        .cloned();
    let job = match cached {
        Some(job) => {
            tracing::debug!("serving job {} from cache", &id);
            job
        }
        None => {
            let job = state.jobs_client.details(&id).await?;
            JobMutator::new(&mut *state.jobs.write().await).upsert(job.clone());
            job
        }
    };
    Ok(Json(json!({ "job": job })))
}

pub async fn clear_cache(State(state): State<AppState>) -> Result<StatusCode> {
    JobMutator::new(&mut *state.jobs.write().await).clear();
    tracing::info!("job cache cleared");
    Ok(StatusCode::NO_CONTENT)
}

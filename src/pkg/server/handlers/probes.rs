use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::adaptors::{applications::selectors::ApplicationSelector, jobs::selectors::JobSelector},
        server::state::AppState,
    },
    prelude::Result,
};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

/// Reports the in-memory stores; both locks must be obtainable.
pub async fn healthz(State(state): State<AppState>) -> Result<Json<Value>> {
    let (cached_jobs, jobs_updated) = {
        let cache = state.jobs.read().await;
        let selector = JobSelector::new(&cache);
        (selector.get_all().len(), selector.last_updated())
    };
    let applications = ApplicationSelector::new(&*state.applications.read().await).count();
    tracing::debug!("service is healthy");
    Ok(Json(json!({
        "service": state.settings.service_name,
        "cachedJobs": cached_jobs,
        "jobsUpdatedAt": jobs_updated,
        "applications": applications
    })))
}

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{delete, post};
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

/// Headroom for the text fields sent alongside a resume.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new()?;
    Ok(routes(state))
}

pub fn routes(state: AppState) -> Router {
    let body_limit = state.settings.max_resume_bytes + FORM_OVERHEAD_BYTES;
    Router::new()
        .route(
            "/applications/:id",
            get(handlers::applications::retrieve)
                .put(handlers::applications::update)
                .delete(handlers::applications::delete),
        )
        .route("/admin/jobs/cache", delete(handlers::jobs::clear_cache))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs/cached", get(handlers::jobs::cached))
        .route("/jobs/:id", get(handlers::jobs::details))
        .route(
            "/applications",
            post(handlers::applications::create).get(handlers::applications::list),
        )
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

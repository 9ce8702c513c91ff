use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::applications::{
            mutators::ApplicationMutator,
            selectors::ApplicationSelector,
            spec::{ApplicationEntry, ApplicationPatch, ApplicationSummary, NewApplication, ResumeUpload},
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationsQuery {
    pub job_id: Option<String>,
    pub email: Option<String>,
}

fn read_error(e: impl ToString) -> StandardError {
    StandardError::new("ERR-APP-002")
        .interpolate_err(e.to_string())
        .code(StatusCode::BAD_REQUEST)
}

fn not_found(id: &str) -> StandardError {
    StandardError::new("ERR-APP-404")
        .interpolate_err(id.to_string())
        .code(StatusCode::NOT_FOUND)
}

pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    let mut input = NewApplication::default();
    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await.map_err(read_error)?;
                input.resume = Some(ResumeUpload {
                    file_name,
                    size: data.len(),
                });
            }
            _ => {
                let value = field.text().await.map_err(read_error)?;
                input.set_field(&field_name, value)?;
            }
        }
    }
    input.check(state.settings.max_resume_bytes)?;

    let application = ApplicationMutator::new(&mut *state.applications.write().await)
        .create(input, &state.settings.resume_base_url);
    tracing::info!(
        application_id = %application.id,
        job_id = %application.job_id,
        email = %application.email,
        "new application received from {} {}",
        &application.first_name,
        &application.last_name
    );
    Ok(Json(json!({
        "success": true,
        "applicationId": application.id,
        "message": "Application submitted successfully"
    })))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ApplicationsQuery>,
) -> Result<Json<Vec<ApplicationSummary>>> {
    let job_id = params.job_id.as_deref().filter(|s| !s.is_empty());
    let email = params.email.as_deref().filter(|s| !s.is_empty());
    let table = state.applications.read().await;
    Ok(Json(ApplicationSelector::new(&table).list(job_id, email)))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApplicationEntry>> {
    let table = state.applications.read().await;
    let application = ApplicationSelector::new(&table)
        .get_by_id(&id)
        .cloned()
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(application))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ApplicationPatch>,
) -> Result<Json<Value>> {
    patch.validate().map_err(|e| {
        StandardError::new("ERR-APP-001")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    let application = ApplicationMutator::new(&mut *state.applications.write().await)
        .update(&id, patch)
        .ok_or_else(|| not_found(&id))?;
    tracing::info!("application {} updated, status {:?}", &id, application.status);
    Ok(Json(json!({ "success": true, "application": application })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let removed = ApplicationMutator::new(&mut *state.applications.write().await).delete(&id);
    if !removed {
        return Err(not_found(&id));
    }
    tracing::info!("application {} deleted", &id);
    Ok(Json(json!({
        "success": true,
        "message": "Application deleted successfully"
    })))
}

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    conf::{Settings, settings},
    pkg::internal::{
        adaptors::{applications::spec::ApplicationTable, jobs::spec::JobCache},
        upstream::client::JobsClient,
    },
    prelude::Result,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub jobs_client: Arc<JobsClient>,
    pub jobs: Arc<RwLock<JobCache>>,
    pub applications: Arc<RwLock<ApplicationTable>>,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        AppState::from_settings((*settings).clone())
    }

    pub fn from_settings(conf: Settings) -> Result<AppState> {
        Ok(AppState {
            jobs_client: Arc::new(JobsClient::from_settings(&conf)?),
            settings: Arc::new(conf),
            jobs: Arc::new(RwLock::new(JobCache::default())),
            applications: Arc::new(RwLock::new(ApplicationTable::default())),
        })
    }
}

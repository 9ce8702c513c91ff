use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::pkg::internal::listing::DEFAULT_PAGE_SIZE;

const DEFAULT_JOBS_API_URL: &str = "https://jsearch.p.rapidapi.com";
const DEFAULT_JOBS_API_HOST: &str = "jsearch.p.rapidapi.com";
const DEFAULT_RESUME_BASE_URL: &str = "https://storage.jobfrica.com/resumes";
const DEFAULT_MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    //upstream job search
    pub jobs_api_url: String,
    pub jobs_api_host: String,
    pub rapidapi_key: Option<String>,
    pub jobs_api_timeout_secs: u64,
    pub default_query: String,
    pub default_location: String,
    //listing
    pub page_size: usize,
    //applications
    pub max_resume_bytes: usize,
    pub resume_base_url: String,
    pub admin_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            service_name: "jobfrica".into(),
            listen_port: "8000".into(),
            jobs_api_url: DEFAULT_JOBS_API_URL.into(),
            jobs_api_host: DEFAULT_JOBS_API_HOST.into(),
            rapidapi_key: None,
            jobs_api_timeout_secs: 15,
            default_query: "developer".into(),
            default_location: "chicago".into(),
            page_size: DEFAULT_PAGE_SIZE,
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
            resume_base_url: DEFAULT_RESUME_BASE_URL.into(),
            admin_token: None,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let d = Settings::default();
        let conf = Config::builder()
            .set_default("service_name", d.service_name)?
            .set_default("listen_port", d.listen_port)?
            .set_default("jobs_api_url", d.jobs_api_url)?
            .set_default("jobs_api_host", d.jobs_api_host)?
            .set_default("jobs_api_timeout_secs", d.jobs_api_timeout_secs)?
            .set_default("default_query", d.default_query)?
            .set_default("default_location", d.default_location)?
            .set_default("page_size", d.page_size as u64)?
            .set_default("max_resume_bytes", d.max_resume_bytes as u64)?
            .set_default("resume_base_url", d.resume_base_url)?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        s.rapidapi_key = s.rapidapi_key.filter(|k| !k.is_empty());
        s.admin_token = s.admin_token.filter(|t| !t.is_empty());
        if s.page_size == 0 {
            s.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

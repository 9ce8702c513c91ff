use clap::Args;
use standard_error::{Interpolate, StandardError};

use crate::{
    conf::settings,
    pkg::internal::{
        listing::{FilterSpec, list_page},
        upstream::client::{JobsClient, SearchParams},
    },
    prelude::Result,
};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Provider search term, defaults to --search or the configured query
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long)]
    pub upstream_page: Option<u32>,
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub experience_level: String,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl SearchArgs {
    fn filters(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            experience_level: self.experience_level.clone(),
        }
    }
}

pub async fn run(args: SearchArgs) -> Result<()> {
    let client = JobsClient::from_settings(&settings)?;
    let filters = args.filters();
    let params = SearchParams::resolve(&args.query, &filters, args.upstream_page, &settings);
    tracing::debug!("searching provider for {:?}", &params);

    let records = client.search(&params).await?;
    let page_size = args.page_size.filter(|s| *s > 0).unwrap_or(settings.page_size);
    let page = list_page(&records, &filters, args.page, page_size);

    let out = serde_json::to_string_pretty(&page)
        .map_err(|e| StandardError::new("ERR-CLI-001").interpolate_err(e.to_string()))?;
    println!("{}", out);
    Ok(())
}

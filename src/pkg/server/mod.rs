pub mod handlers;
pub mod middlewares;
pub mod router;
pub mod state;

use axum::http::StatusCode;
use standard_error::{Interpolate, StandardError, Status};

use crate::{conf::settings, prelude::Result};
use router::build_routes;

pub async fn listen() -> Result<()> {
    let addr = format!("0.0.0.0:{}", settings.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        StandardError::new("ERR-SRV-001")
            .interpolate_err(e.to_string())
            .code(StatusCode::INTERNAL_SERVER_ERROR)
    })?;
    let app = build_routes().await?;
    tracing::info!("{} listening at {}", settings.service_name, &addr);
    tokio::select! {
        r = axum::serve(listener, app) => {
            if let Err(e) = r {
                tracing::error!("server ended unexpectedly: {:?}", &e);
                return Err(StandardError::new("ERR-SRV-002").interpolate_err(e.to_string()));
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}

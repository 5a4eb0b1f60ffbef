//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It prepares shared state, warms the asset cache and serves the page.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use tracing::{error, warn};

use crate::config::StaticConfig;
use crate::runtime::lifetime::startup;

/// Run the HTTP server
///
/// This function:
/// 1. Prepares server components (storage, link service, asset worker)
/// 2. Installs and activates the asset cache
/// 3. Configures and starts the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let context = startup::prepare_server_startup(config).map_err(|e| {
        error!("Server startup failed: {}", e);
        e
    })?;

    startup::start_asset_worker(&context.worker).await;

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let page_url = context.site.base_url.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache")))
            .app_data(web::FormConfig::default().limit(64 * 1024))
            .configure(|cfg| context.configure(cfg))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .bind(&bind_address)?;

    warn!("Starting server at http://{} (page: {})", bind_address, page_url);
    server.run().await?;
    warn!("Server stopped");

    Ok(())
}

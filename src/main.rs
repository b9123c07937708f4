use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use textlens::api::server::start_server;
use textlens::config::{self, ServiceConfig};
use textlens::pipeline::detect::HeuristicDetector;
use textlens::pipeline::gateway::InferenceClient;
use textlens::pipeline::processor::TextPipeline;
use textlens::pipeline::scanner::ParseClient;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = ServiceConfig::from_env();

    // Model handles are built once, before the runtime starts, and shared
    // read-only by every request. The blocking HTTP clients must not be
    // created inside the async runtime.
    let inference = Arc::new(InferenceClient::from_config(&config));
    if inference.is_ready() {
        tracing::info!(url = %config.inference_url, "inference server ready");
    } else {
        tracing::warn!(
            url = %config.inference_url,
            "inference server not reachable; model calls will fail until it comes up"
        );
    }

    let pipeline = Arc::new(TextPipeline::new(
        Arc::new(HeuristicDetector::new()),
        inference.clone(),
        inference.clone(),
        inference,
        Arc::new(ParseClient::from_config(&config)),
    ));

    serve(config, pipeline);
}

#[tokio::main]
async fn serve(config: ServiceConfig, pipeline: Arc<TextPipeline>) {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let mut server = match start_server(pipeline, addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("failed to start server: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.session.server_addr, "listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }

    server.shutdown();
    // Give the graceful shutdown a moment to drain in-flight requests.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
}

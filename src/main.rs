mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{docs_router, ApiDoc, SwaggerInfoModifier};
use crate::core::{listener, middleware};
use crate::features::places::{routes as places_routes, EnrichmentPipeline, GooglePlacesClient};
use crate::modules::supervisor::{CommandLauncher, WorkerSupervisor};
use crate::shared::constants::WORKER_SLOT_ENV;
use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;

const POOL_REPORT_INTERVAL: Duration = Duration::from_secs(60);

fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Each process (supervisor or worker) runs a single-threaded scheduler;
    // parallelism comes from the process pool.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match std::env::var(WORKER_SLOT_ENV) {
        Ok(slot) => runtime.block_on(run_worker(config, slot)),
        Err(_) => runtime.block_on(run_supervisor(config)),
    }
}

async fn run_supervisor(config: Config) -> anyhow::Result<()> {
    tracing::info!("Primary process {} is running", std::process::id());
    tracing::info!(
        "Setting up {} workers on {}",
        config.supervisor.worker_count,
        config.app.server_address()
    );

    let launcher = CommandLauncher::current_exe()
        .map_err(|e| anyhow::anyhow!("Failed to resolve worker executable: {}", e))?;
    let supervisor = WorkerSupervisor::new(&config.supervisor, launcher);

    let pool = supervisor.handle();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(POOL_REPORT_INTERVAL);
        // First tick fires immediately, before any worker had a chance to start
        interval.tick().await;
        loop {
            interval.tick().await;
            pool.report().await;
        }
    });

    supervisor.run().await;

    Ok(())
}

async fn run_worker(config: Config, slot: String) -> anyhow::Result<()> {
    tracing::info!("Worker {} starting in slot {}", std::process::id(), slot);
    tracing::debug!("Places configuration: {:?}", config.places);

    let places_client = Arc::new(
        GooglePlacesClient::new(&config.places)
            .map_err(|e| anyhow::anyhow!("Failed to initialize places client: {}", e))?,
    );
    let pipeline = Arc::new(EnrichmentPipeline::new(
        places_client,
        config.places.page_token_delay,
    ));
    tracing::info!("Places pipeline initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = docs_router(openapi);

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(swagger)
        .merge(places_routes::routes(pipeline))
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(config.app.cors_allowed_origins.clone()))
                .layer(CatchPanicLayer::custom(middleware::handle_panic)),
        );

    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let listener = listener::bind_shared(socket_addr)?;
    tracing::info!("Worker {} is running on http://{}", std::process::id(), addr);

    axum::serve(listener, app).await?;

    Ok(())
}

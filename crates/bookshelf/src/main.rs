use std::net::Ipv4Addr;

use anyhow::Context;
use bookshelf_lib::graphql_api::{self, ApiSchemaContext};
use bookshelf_lib::{api_server, CliOptions, PrometheusExporter, BOOKSHELF_VERSION};
use bookshelf_store::Store;
use clap::Parser;
use prometheus_exporter::prometheus;
use tokio::net::TcpListener;
use tracing::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!(version = BOOKSHELF_VERSION, "Parse options");
    let cli_options = CliOptions::parse();

    info!("Loading configuration");
    let config = cli_options.load_config()?;

    let store = if config.sample_data {
        Store::with_sample_data()
    } else {
        Store::new()
    };

    // Kept alive for as long as `main` runs.
    let _exporter = if config.prometheus_port == 0 {
        info!("Prometheus exporter disabled");
        None
    } else {
        let registry = prometheus::default_registry().clone();
        let exporter = PrometheusExporter::start(config.prometheus_port, registry)
            .context("failed to start Prometheus exporter")?;
        info!(port = exporter.port(), "Prometheus exporter started");
        Some(exporter)
    };

    let api_schema = graphql_api::api_schema(ApiSchemaContext::new(store));
    let router = api_server::router(api_schema, &config.graphql);

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.graphql.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.graphql.port))?;
    info!(
        address = %listener.local_addr()?,
        path = %config.graphql.path,
        "Now listening for requests"
    );

    // Listen to requests forever.
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

mod cli;
mod telemetry;

use crate::cli::{GeneratorArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tinylink_core::Shortener;
use tinylink_gateway::{App, AppState};
use tinylink_generator::{Generator, RandomGenerator, SeqGenerator};
use tinylink_shortener::{ShortenerService, ShortenerSettings};
use tinylink_storage::InMemoryRepository;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        domain_url = %config.domain_url,
        generator = %config.generator,
        max_attempts = config.max_attempts,
        "starting gateway"
    );

    let settings = ShortenerSettings::builder()
        .domain_url(config.domain_url)
        .max_attempts(config.max_attempts)
        .build();

    let shortener = match config.generator {
        GeneratorArg::Random => build_shortener(RandomGenerator::new(), settings),
        GeneratorArg::Seq => build_shortener(
            SeqGenerator::with_prefix(config.generator_prefix)
                .context("invalid generator prefix")?,
            settings,
        ),
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(AppState::new(shortener)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("gateway server failed")?;

    info!("gateway stopped");
    Ok(())
}

fn build_shortener<G: Generator>(generator: G, settings: ShortenerSettings) -> Arc<dyn Shortener> {
    Arc::new(ShortenerService::new(
        InMemoryRepository::new(),
        generator,
        settings,
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

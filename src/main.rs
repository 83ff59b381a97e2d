#![warn(clippy::pedantic)]

use anyhow::Context;
use blog::{config::Config, store, trace, State};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenvy::dotenv().ok();

	let config = Config::from_env().context("invalid configuration")?;
	let _guard = trace::init_tracing_subscriber(&config).context("failed to initialize tracing")?;

	let state = State {
		store: store::connect(&config)
			.await
			.context("failed to open storage")?,
	};

	let app = blog::app(state);

	let listener = tokio::net::TcpListener::bind((config.host, config.port))
		.await
		.with_context(|| format!("failed to bind to {}:{}", config.host, config.port))?;

	tracing::info!("listening on {}", listener.local_addr()?);

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	tracing::info!("server stopped");

	Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(error) = tokio::signal::ctrl_c().await {
			tracing::error!(%error, "failed to listen for ctrl-c");
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(error) => {
				tracing::error!(%error, "failed to listen for SIGTERM");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		() = ctrl_c => {},
		() = terminate => {},
	}

	tracing::info!("shutting down");
}

pub mod routers;

use chat::dependencies::{config, message_repository};
use chat::services::handlers::MessageState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
	let config = match config() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("{}", err);
			std::process::exit(1);
		}
	};

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!(backend = ?config.store_backend, "Message store is being prepared...");
	let state: MessageState = match message_repository(config).await {
		Ok(repository) => repository.into(),
		Err(err) => {
			tracing::error!("{}", err);
			std::process::exit(1);
		}
	};

	let app = routers::app(config, state);

	let server = match axum::Server::try_bind(&config.server_ip_port) {
		Ok(server) => server,
		Err(err) => {
			tracing::error!("Failed to bind {}: {}", config.server_ip_port, err);
			std::process::exit(1);
		}
	};

	tracing::info!("Start Web Server on {}...", config.server_ip_port);
	if let Err(err) = server.serve(app.into_make_service()).await {
		tracing::error!("Server error: {}", err);
		std::process::exit(1);
	}
}

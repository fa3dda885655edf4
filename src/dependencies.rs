use std::sync::{Arc, OnceLock};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
	adapters::repositories::{InMemoryMessageRepository, MessageRepository, PgMessageRepository},
	config::{Config, StoreBackend},
	services::response::ServiceError,
};

pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

/// Builds the pool without connecting; connections are opened on first use,
/// so an unreachable database surfaces as per-request store errors.
pub fn connection_pool(config: &Config) -> Result<PgPool, ServiceError> {
	PgPoolOptions::new()
		.max_connections(config.database_max_connections)
		.acquire_timeout(config.database_acquire_timeout)
		.connect_lazy(&config.database_url)
		.map_err(|err| ServiceError::ConfigError(format!("DATABASE_URL: {err}")))
}

pub async fn message_repository(config: &Config) -> Result<Arc<dyn MessageRepository>, ServiceError> {
	match config.store_backend {
		StoreBackend::Memory => {
			tracing::warn!("Using in-memory message store; messages are lost on exit");
			Ok(Arc::new(InMemoryMessageRepository::new()))
		}
		StoreBackend::Postgres => {
			let repository = PgMessageRepository::new(connection_pool(config)?);
			if let Err(err) = repository.ensure_schema().await {
				tracing::warn!("Schema bootstrap skipped, database unavailable: {}", err);
			}
			Ok(Arc::new(repository))
		}
	}
}

use async_trait::async_trait;
use sqlx::PgPool;

use super::MessageRepository;
use crate::{domain::message::Message, services::response::ServiceError};

pub const CREATE_MESSAGES_TABLE: &str = "CREATE TABLE IF NOT EXISTS messages (
	id BIGSERIAL PRIMARY KEY,
	content TEXT NOT NULL
)";

pub struct PgMessageRepository {
	pool: PgPool,
}

impl PgMessageRepository {
	pub fn new(pool: PgPool) -> Self {
		Self { pool }
	}

	/// Creates the `messages` table when it does not exist yet.
	pub async fn ensure_schema(&self) -> Result<(), ServiceError> {
		sqlx::query(CREATE_MESSAGES_TABLE).execute(&self.pool).await.map_err(|err| {
			tracing::error!("Failed to create messages table: {}", err);
			ServiceError::from(err)
		})?;
		Ok(())
	}
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
	async fn list(&self) -> Result<Vec<Message>, ServiceError> {
		let messages = sqlx::query_as::<_, Message>("SELECT id, content FROM messages")
			.fetch_all(&self.pool)
			.await
			.map_err(|err| {
				tracing::error!("Error occurred while listing messages: {:?}", err);
				ServiceError::from(err)
			})?;
		tracing::debug!(count = messages.len(), "Messages listed");
		Ok(messages)
	}

	async fn insert(
		&self,
		content: &str,
	) -> Result<Message, ServiceError> {
		let message = sqlx::query_as::<_, Message>("INSERT INTO messages (content) VALUES ($1) RETURNING id, content")
			.bind(content)
			.fetch_one(&self.pool)
			.await
			.map_err(|err| {
				tracing::error!("Error occurred while inserting message: {:?}", err);
				ServiceError::from(err)
			})?;
		tracing::debug!(id = message.id, "Message inserted");
		Ok(message)
	}
}

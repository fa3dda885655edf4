use async_trait::async_trait;
use tokio::sync::RwLock;

use super::MessageRepository;
use crate::{domain::message::Message, services::response::ServiceError};

/// Process-local message store. Ids start at 1 and grow by one per insert.
#[derive(Default)]
pub struct InMemoryMessageRepository {
	messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
	pub fn new() -> Self {
		Default::default()
	}
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
	async fn list(&self) -> Result<Vec<Message>, ServiceError> {
		Ok(self.messages.read().await.clone())
	}

	async fn insert(
		&self,
		content: &str,
	) -> Result<Message, ServiceError> {
		let mut messages = self.messages.write().await;
		let id = messages.last().map_or(1, |last| last.id + 1);
		let message = Message::new(id, content);
		messages.push(message.clone());
		tracing::debug!(id, "Message inserted");
		Ok(message)
	}
}

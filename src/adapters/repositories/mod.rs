pub(crate) mod in_memory;
pub(crate) mod message_repository;

use async_trait::async_trait;

pub use in_memory::InMemoryMessageRepository;
pub use message_repository::PgMessageRepository;

use crate::{domain::message::Message, services::response::ServiceError};

/// Storage seam for messages. Failures are reported as
/// [`ServiceError::StoreError`] carrying the backend's error text.
#[async_trait]
pub trait MessageRepository: Send + Sync {
	/// Every stored message, in whatever order the backend yields them.
	async fn list(&self) -> Result<Vec<Message>, ServiceError>;

	/// Store `content` as a new message and return it with its assigned id.
	async fn insert(
		&self,
		content: &str,
	) -> Result<Message, ServiceError>;
}

use std::{ops::Deref, sync::Arc};

use crate::{
	adapters::repositories::{InMemoryMessageRepository, MessageRepository, PgMessageRepository},
	domain::message::{schemas::SendMessage, Message},
};

use super::response::ServiceError;

/// Store handle shared by every request for the lifetime of the process.
#[derive(Clone)]
pub struct MessageState(pub Arc<dyn MessageRepository>);
impl From<Arc<dyn MessageRepository>> for MessageState {
	fn from(value: Arc<dyn MessageRepository>) -> Self {
		Self(value)
	}
}
impl From<InMemoryMessageRepository> for MessageState {
	fn from(value: InMemoryMessageRepository) -> Self {
		Self(Arc::new(value))
	}
}
impl From<PgMessageRepository> for MessageState {
	fn from(value: PgMessageRepository) -> Self {
		Self(Arc::new(value))
	}
}
impl Deref for MessageState {
	type Target = dyn MessageRepository;
	fn deref(&self) -> &Self::Target {
		self.0.as_ref()
	}
}

pub struct MessageHandler;
impl MessageHandler {
	pub async fn fetch_messages(state: &MessageState) -> Result<Vec<Message>, ServiceError> {
		state.list().await
	}

	/// Binds the raw body and stores its content. Any client-supplied id is dropped here.
	pub async fn send_message(
		body: &[u8],
		state: &MessageState,
	) -> Result<Message, ServiceError> {
		let SendMessage { content, .. } = SendMessage::try_from(body)?;
		state.insert(&content).await
	}
}

#[cfg(test)]
mod test {
	use crate::{
		adapters::repositories::InMemoryMessageRepository,
		domain::message::Message,
		services::{
			handlers::{MessageHandler, MessageState},
			response::ServiceError,
		},
	};

	#[tokio::test]
	async fn test_send_ignores_client_id() {
		let state: MessageState = InMemoryMessageRepository::new().into();

		let sent = MessageHandler::send_message(br#"{"id":99,"content":"hi"}"#, &state).await.unwrap();
		assert_eq!(sent, Message::new(1, "hi"));
		assert_eq!(MessageHandler::fetch_messages(&state).await.unwrap(), vec![sent]);
	}

	#[tokio::test]
	async fn test_bad_body_does_not_touch_store() {
		let state: MessageState = InMemoryMessageRepository::new().into();

		let err = MessageHandler::send_message(br#"{"content":123}"#, &state).await.unwrap_err();
		assert!(matches!(err, ServiceError::BindingError(_)));
		assert!(MessageHandler::fetch_messages(&state).await.unwrap().is_empty());
	}
}

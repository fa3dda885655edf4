use axum::{body::Bytes, extract::State, Json};
use axum_macros::debug_handler;

use crate::{
	domain::message::{schemas::SendMessageResponse, Message},
	services::{
		handlers::{MessageHandler, MessageState},
		response::ServiceError,
	},
};

#[debug_handler]
pub(super) async fn fetch_messages(State(state): State<MessageState>) -> Result<Json<Vec<Message>>, ServiceError> {
	let messages = MessageHandler::fetch_messages(&state).await?;
	Ok(Json(messages))
}

// The body is read as raw bytes so that JSON is decoded whatever the Content-Type says.
#[debug_handler]
pub(super) async fn send_message(
	State(state): State<MessageState>,
	body: Bytes,
) -> Result<Json<SendMessageResponse>, ServiceError> {
	let message = MessageHandler::send_message(&body, &state).await.map_err(|err| {
		tracing::info!("Message rejected: {}", err);
		err
	})?;
	Ok(Json(message.into()))
}

use serde::{Deserialize, Deserializer, Serialize};

use super::Message;
use crate::services::response::ServiceError;

pub const SEND_SUCCESS_MESSAGE: &str = "Message sent successfully";

/// Body of `POST /send`.
///
/// A missing or `null` content binds as the empty string. A client-supplied
/// `id` must still be an integer when present, but it is never forwarded to
/// the store.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct SendMessage {
	#[serde(default, alias = "Content", deserialize_with = "null_as_empty")]
	pub content: String,
	#[serde(alias = "ID", alias = "Id")]
	pub id: Option<i64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TryFrom<&[u8]> for SendMessage {
	type Error = ServiceError;
	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		serde_json::from_slice::<SendMessage>(value).map_err(|err| ServiceError::BindingError(err.to_string()))
	}
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
	pub message: &'static str,
	pub data: Message,
}

impl From<Message> for SendMessageResponse {
	fn from(value: Message) -> Self {
		Self {
			message: SEND_SUCCESS_MESSAGE,
			data: value,
		}
	}
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
}

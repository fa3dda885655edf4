pub mod schemas;

use serde::{Deserialize, Serialize};

/// A single chat message. `id` is assigned by the store on insert.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
	pub id: i64,
	pub content: String,
}

impl Message {
	pub fn new(
		id: i64,
		content: impl Into<String>,
	) -> Self {
		Self { id, content: content.into() }
	}
}

mod messages;

use axum::{
	routing::{get, post},
	Router,
};

use crate::services::handlers::MessageState;

pub fn create_routes(state: MessageState) -> Router {
	Router::new()
		.route("/messages", get(messages::fetch_messages))
		.route("/send", post(messages::send_message))
		.with_state(state)
}

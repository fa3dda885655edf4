use axum::{http::Method, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use chat::{config::Config, routes::create_routes, services::handlers::MessageState};

pub fn app(
	config: &Config,
	state: MessageState,
) -> Router {
	create_routes(state)
		.layer(
			CorsLayer::new()
				.allow_origin(config.cors_origins())
				.allow_methods([Method::GET, Method::POST]),
		)
		.layer(TraceLayer::new_for_http())
}

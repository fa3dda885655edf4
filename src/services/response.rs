use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};

use crate::domain::message::schemas::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	/// Request body did not match the expected shape.
	#[error("{0}")]
	BindingError(String),

	/// Any failure reported by the message store.
	#[error("{0}")]
	StoreError(String),

	#[error("Invalid configuration: {0}")]
	ConfigError(String),
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::BindingError(_) => StatusCode::BAD_REQUEST,
			ServiceError::StoreError(_) | ServiceError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<sqlx::Error> for ServiceError {
	fn from(value: sqlx::Error) -> Self {
		ServiceError::StoreError(value.to_string())
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		(status, Json(ErrorResponse { error: self.to_string() })).into_response()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_status_mapping() {
		assert_eq!(ServiceError::BindingError("bad".into()).status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(ServiceError::StoreError("down".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_error_text_is_passed_through() {
		let err = ServiceError::StoreError("connection refused".into());
		assert_eq!(err.to_string(), "connection refused");

		let response = err.into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_from_sqlx_error() {
		let err: ServiceError = sqlx::Error::RowNotFound.into();
		assert!(matches!(err, ServiceError::StoreError(text) if !text.is_empty()));
	}
}

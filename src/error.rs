use aide::{
	gen::GenContext,
	openapi::{Operation, Response as ApiResponse},
	OperationOutput,
};
use axum::{
	body::Body,
	extract::rejection,
	http::{Response, StatusCode},
	response::IntoResponse,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{extract::Json, store::StoreError};

/// Error type for the application.
///
/// There is a single failure class: whatever went wrong, the client receives
/// a 500 carrying the underlying message verbatim.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Store(#[from] StoreError),
	#[error(transparent)]
	Json(#[from] rejection::JsonRejection),
	#[error(transparent)]
	Path(#[from] rejection::PathRejection),
}

/// The body of every failed response.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ErrorResponse {
	/// The raw message of the underlying failure.
	pub error: String,
}

impl Error {
	pub fn status(&self) -> StatusCode {
		StatusCode::INTERNAL_SERVER_ERROR
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response<Body> {
		tracing::error!(error = %self, "request failed");

		(
			self.status(),
			Json(ErrorResponse {
				error: self.to_string(),
			}),
		)
			.into_response()
	}
}

impl OperationOutput for Error {
	type Inner = ErrorResponse;

	fn operation_response(ctx: &mut GenContext, operation: &mut Operation) -> Option<ApiResponse> {
		axum::Json::<ErrorResponse>::operation_response(ctx, operation)
	}

	fn inferred_responses(
		ctx: &mut GenContext,
		operation: &mut Operation,
	) -> Vec<(Option<u16>, ApiResponse)> {
		Self::operation_response(ctx, operation)
			.map(|response| vec![(Some(500), response)])
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[tokio::test]
	async fn test_error_response_shape() {
		let response = Error::from(StoreError::NotFound(7)).into_response();

		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

		let body = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		let body = serde_json::from_slice::<serde_json::Value>(&body).unwrap();

		assert_eq!(body, serde_json::json!({ "error": "no post with id 7" }));
	}
}

use std::sync::Arc;

use aide::{
	axum::{
		routing::{get, get_with},
		ApiRouter, IntoApiResponse,
	},
	openapi::OpenApi,
	scalar::Scalar,
};
use axum::{response::IntoResponse, Extension};

use crate::{extract::Json, AppState};

pub const OPENAPI_PATH: &str = "/docs/api.json";

pub fn routes() -> ApiRouter<AppState> {
	ApiRouter::new()
		.api_route(
			"/",
			get_with(
				Scalar::new(OPENAPI_PATH).with_title("Blog API").axum_handler(),
				|op| op.description("This documentation page."),
			),
		)
		.route("/api.json", get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
	Json(api.as_ref()).into_response()
}

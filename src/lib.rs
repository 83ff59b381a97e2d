#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod route;
pub mod store;
pub mod trace;
pub mod view;

#[cfg(test)]
mod test;

use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};

pub use error::Error;
pub use store::{PostStore, Store};

pub type Database = sqlx::Pool<sqlx::Postgres>;
pub type AppState = State;

/// The shared application state.
///
/// Handlers only ever talk to the storage client, so that is all it holds.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub store: Store,
}

impl State {
	pub fn new(store: impl PostStore + 'static) -> Self {
		Self {
			store: Arc::new(store),
		}
	}
}

/// Builds the full application router: the post API under `/api/posts`,
/// its documentation under `/docs`, and the HTTP middleware stack.
pub fn app(state: State) -> Router {
	let mut api = OpenApi::default();

	aide::gen::on_error(|error| tracing::warn!("openapi generation: {error}"));
	aide::gen::extract_schemas(true);

	let router = aide::axum::ApiRouter::new()
		.nest("/api/posts", route::post::routes())
		.nest("/docs", route::docs::routes())
		.finish_api_with(&mut api, openapi::docs);

	router
		.layer(Extension(Arc::new(api)))
		.layer(
			ServiceBuilder::new()
				.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
				.layer(TraceLayer::new_for_http())
				.layer(PropagateRequestIdLayer::x_request_id())
				.layer(CompressionLayer::new())
				.layer(CorsLayer::permissive()),
		)
		.with_state(state)
}

//! Shared helpers for the test modules.

pub use axum_test::TestServer;
pub use serde_json::{json, Value};

pub use crate::{route::post::model::Post, store::MemoryPostStore, State};

/// A test server over an empty in-memory store.
pub fn app() -> TestServer {
	TestServer::new(crate::app(State::new(MemoryPostStore::default()))).unwrap()
}

/// Serves an empty in-memory store on an ephemeral port,
/// returning its base url.
pub async fn spawn() -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let address = listener.local_addr().unwrap();
	let app = crate::app(State::new(MemoryPostStore::default()));

	tokio::spawn(async move { axum::serve(listener, app).await });

	format!("http://{address}")
}

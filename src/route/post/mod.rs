use aide::axum::{routing::get_with, ApiRouter};

use crate::AppState;

pub mod model;
pub mod route;

pub type RouteError = crate::Error;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/",
			get_with(list_posts, list_posts_docs).post_with(create_post, create_post_docs),
		)
		.api_route("/:id", get_with(get_post, get_post_docs))
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_list_empty() {
		let app = app();

		let response = app.get("/api/posts").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Value>(), json!([]));
	}

	#[tokio::test]
	async fn test_create_flow() {
		let app = app();

		let response = app
			.post("/api/posts")
			.json(&json!({
				"title": "Hello",
				"content": "My first post",
			}))
			.await;

		assert_eq!(response.status_code(), 200);

		let created = response.json::<Post>();

		assert_eq!(created.title, "Hello");
		assert_eq!(created.content, "My first post");

		let response = app.get("/api/posts").await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Vec<Post>>(), vec![created.clone()]);

		let response = app.get(&format!("/api/posts/{}", created.id)).await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Post>(), created);
	}

	#[tokio::test]
	async fn test_post_shape() {
		let app = app();

		let response = app
			.post("/api/posts")
			.json(&json!({ "title": "Shape", "content": "Fields" }))
			.await;

		let body = response.json::<Value>();
		let mut fields = body
			.as_object()
			.unwrap()
			.keys()
			.map(String::as_str)
			.collect::<Vec<_>>();

		fields.sort_unstable();

		assert_eq!(fields, ["content", "created_at", "id", "title"]);
		assert!(body["id"].is_i64());
		assert!(chrono::DateTime::parse_from_rfc3339(body["created_at"].as_str().unwrap()).is_ok());
	}

	#[tokio::test]
	async fn test_get_missing_post() {
		let app = app();

		let response = app.get("/api/posts/1").await;

		assert_eq!(response.status_code(), 500);
		assert_eq!(
			response.json::<Value>(),
			json!({ "error": "no post with id 1" })
		);

		// the server keeps serving afterwards
		let response = app.get("/api/posts").await;

		assert_eq!(response.status_code(), 200);
	}

	#[tokio::test]
	async fn test_create_accepts_empty_strings() {
		let app = app();

		let response = app
			.post("/api/posts")
			.json(&json!({ "title": "", "content": "" }))
			.await;

		assert_eq!(response.status_code(), 200);
		assert_eq!(response.json::<Post>().title, "");
	}

	#[tokio::test]
	async fn test_malformed_body() {
		let app = app();

		let response = app
			.post("/api/posts")
			.json(&json!({ "title": "No content" }))
			.await;

		assert_eq!(response.status_code(), 500);
		assert!(response.json::<Value>()["error"].is_string());
	}

	#[tokio::test]
	async fn test_non_numeric_id() {
		let app = app();

		let response = app.get("/api/posts/first").await;

		assert_eq!(response.status_code(), 500);
		assert!(response.json::<Value>()["error"].is_string());
	}
}

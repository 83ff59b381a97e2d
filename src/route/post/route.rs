use axum::extract::State;
use macros::route;

use crate::{
	extract::{Json, Path},
	openapi::tag,
	Store,
};

use super::{model, RouteError};

/// List posts
/// Returns every stored post.
#[route(tag = tag::POST)]
pub async fn list_posts(State(store): State<Store>) -> Result<Json<Vec<model::Post>>, RouteError> {
	let posts = store.list().await?;

	Ok(Json(posts))
}

/// Get single post
/// Returns a single post by its id.
/// A missing post is reported like any other storage failure.
#[route(tag = tag::POST)]
pub async fn get_post(
	State(store): State<Store>,
	Path(path): Path<model::IdInput>,
) -> Result<Json<model::Post>, RouteError> {
	let post = store.get(path.id).await?;

	Ok(Json(post))
}

/// Create post
/// Stores a new post and returns the inserted row.
#[route(tag = tag::POST)]
pub async fn create_post(
	State(store): State<Store>,
	Json(input): Json<model::CreatePostInput>,
) -> Result<Json<model::Post>, RouteError> {
	let post = store.create(input).await?;

	tracing::info!(id = post.id, "created post");

	Ok(Json(post))
}

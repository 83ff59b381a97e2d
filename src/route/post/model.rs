pub use crate::route::model::IdInput;

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single blog post.
#[model]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema, sqlx::FromRow)]
pub struct Post {
	/// The sequential identifier of the post.
	#[generated]
	pub id: i64,
	/// The title of the post.
	pub title: String,
	/// The body of the post.
	pub content: String,
	/// When the post was stored, in UTC.
	#[generated]
	pub created_at: chrono::DateTime<chrono::Utc>,
}

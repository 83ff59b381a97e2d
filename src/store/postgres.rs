use super::{PostStore, StoreError};
use crate::{
	route::post::model::{CreatePostInput, Post},
	Database,
};

/// Storage client backed by the `posts` table in PostgreSQL.
#[derive(Clone)]
pub struct PgPostStore {
	database: Database,
}

impl PgPostStore {
	pub fn new(database: Database) -> Self {
		Self { database }
	}
}

#[async_trait::async_trait]
impl PostStore for PgPostStore {
	async fn list(&self) -> Result<Vec<Post>, StoreError> {
		let posts = sqlx::query_as::<_, Post>(
			r#"
				SELECT id, title, content, created_at FROM posts
				ORDER BY id
			"#,
		)
		.fetch_all(&self.database)
		.await?;

		Ok(posts)
	}

	async fn get(&self, id: i64) -> Result<Post, StoreError> {
		let post = sqlx::query_as::<_, Post>(
			r#"
				SELECT id, title, content, created_at FROM posts
				WHERE id = $1
			"#,
		)
		.bind(id)
		.fetch_optional(&self.database)
		.await?;

		post.ok_or(StoreError::NotFound(id))
	}

	async fn create(&self, input: CreatePostInput) -> Result<Post, StoreError> {
		let post = sqlx::query_as::<_, Post>(
			r#"
				INSERT INTO posts (title, content)
				VALUES ($1, $2)
				RETURNING id, title, content, created_at
			"#,
		)
		.bind(input.title)
		.bind(input.content)
		.fetch_one(&self.database)
		.await?;

		Ok(post)
	}
}

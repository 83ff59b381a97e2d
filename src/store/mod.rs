mod memory;
mod postgres;

pub use memory::MemoryPostStore;
pub use postgres::PgPostStore;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::{
	config::Config,
	route::post::model::{CreatePostInput, Post},
};

/// A failed call to the storage client.
///
/// Messages are forwarded to the client unchanged.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("no post with id {0}")]
	NotFound(i64),
	#[error(transparent)]
	Database(#[from] sqlx::Error),
	#[error(transparent)]
	Migrate(#[from] sqlx::migrate::MigrateError),
}

/// The storage client every route forwards to.
///
/// Each method is a single call against the `posts` table.
#[async_trait::async_trait]
pub trait PostStore: Send + Sync {
	/// Returns every post.
	async fn list(&self) -> Result<Vec<Post>, StoreError>;

	/// Returns the post with the given id.
	async fn get(&self, id: i64) -> Result<Post, StoreError>;

	/// Inserts a post and returns the stored row.
	async fn create(&self, input: CreatePostInput) -> Result<Post, StoreError>;
}

pub type Store = Arc<dyn PostStore>;

/// Opens the configured storage client.
///
/// With a `DATABASE_URL` this connects to PostgreSQL and applies the
/// embedded migrations, otherwise posts only live as long as the process.
pub async fn connect(config: &Config) -> Result<Store, StoreError> {
	let Some(url) = config.database_url.as_deref() else {
		tracing::warn!("DATABASE_URL is not set, posts will be kept in memory");

		return Ok(Arc::new(MemoryPostStore::default()));
	};

	let pool = PgPoolOptions::new()
		.max_connections(config.max_connections.get())
		.connect(url)
		.await?;

	sqlx::migrate!().run(&pool).await?;

	tracing::info!("connected to database");

	Ok(Arc::new(PgPostStore::new(pool)))
}

#[cfg(test)]
mod test {
	use super::*;

	#[tokio::test]
	async fn test_connect_without_database_url() {
		let config = Config::from_lookup(|_| None).unwrap();
		let store = connect(&config).await.unwrap();

		let created = store
			.create(CreatePostInput {
				title: "Kept in memory".into(),
				content: "No database configured".into(),
			})
			.await
			.unwrap();

		assert_eq!(created.id, 1);
		assert_eq!(store.get(created.id).await.unwrap(), created);
		assert_eq!(store.list().await.unwrap(), vec![created]);
	}
}

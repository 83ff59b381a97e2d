use tokio::sync::RwLock;

use super::{PostStore, StoreError};
use crate::route::post::model::{CreatePostInput, Post};

/// Storage client that keeps posts in process memory.
///
/// Ids are assigned sequentially from 1, like an identity column.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
	posts: RwLock<Vec<Post>>,
}

#[async_trait::async_trait]
impl PostStore for MemoryPostStore {
	async fn list(&self) -> Result<Vec<Post>, StoreError> {
		Ok(self.posts.read().await.clone())
	}

	async fn get(&self, id: i64) -> Result<Post, StoreError> {
		self.posts
			.read()
			.await
			.iter()
			.find(|post| post.id == id)
			.cloned()
			.ok_or(StoreError::NotFound(id))
	}

	async fn create(&self, input: CreatePostInput) -> Result<Post, StoreError> {
		let mut posts = self.posts.write().await;
		let id = posts.last().map_or(1, |post| post.id + 1);
		let post = Post {
			id,
			title: input.title,
			content: input.content,
			created_at: chrono::Utc::now(),
		};

		posts.push(post.clone());

		Ok(post)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn input(title: &str) -> CreatePostInput {
		CreatePostInput {
			title: title.into(),
			content: format!("{title} content"),
		}
	}

	#[tokio::test]
	async fn test_sequential_ids() {
		let store = MemoryPostStore::default();

		let first = store.create(input("first")).await.unwrap();
		let second = store.create(input("second")).await.unwrap();

		assert_eq!(first.id, 1);
		assert_eq!(second.id, 2);
		assert!(first.created_at <= second.created_at);
	}

	#[tokio::test]
	async fn test_list_in_insertion_order() {
		let store = MemoryPostStore::default();

		assert!(store.list().await.unwrap().is_empty());

		store.create(input("a")).await.unwrap();
		store.create(input("b")).await.unwrap();

		let titles = store
			.list()
			.await
			.unwrap()
			.into_iter()
			.map(|post| post.title)
			.collect::<Vec<_>>();

		assert_eq!(titles, ["a", "b"]);
	}

	#[tokio::test]
	async fn test_get_missing() {
		let store = MemoryPostStore::default();

		store.create(input("a")).await.unwrap();

		assert!(matches!(store.get(2).await, Err(StoreError::NotFound(2))));
		assert_eq!(store.get(1).await.unwrap().title, "a");
	}
}

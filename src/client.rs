use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
	error::ErrorResponse,
	route::post::model::{CreatePostInput, Post},
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("server responded with {status}: {message}")]
	Api { status: StatusCode, message: String },
}

/// HTTP client for the post API.
#[derive(Clone, Debug)]
pub struct PostClient {
	http: reqwest::Client,
	posts_url: String,
}

impl PostClient {
	/// Creates a client for the API served at `base_url`,
	/// e.g. `http://127.0.0.1:3000`.
	pub fn new(base_url: &str) -> Self {
		Self {
			http: reqwest::Client::new(),
			posts_url: format!("{}/api/posts", base_url.trim_end_matches('/')),
		}
	}

	pub async fn list(&self) -> Result<Vec<Post>, ClientError> {
		let response = self.http.get(&self.posts_url).send().await?;

		decode(response).await
	}

	pub async fn get(&self, id: i64) -> Result<Post, ClientError> {
		let response = self
			.http
			.get(format!("{}/{id}", self.posts_url))
			.send()
			.await?;

		decode(response).await
	}

	pub async fn create(&self, input: &CreatePostInput) -> Result<Post, ClientError> {
		let response = self.http.post(&self.posts_url).json(input).send().await?;

		decode(response).await
	}
}

/// Decodes a success body as `T`, or a failure body as [`ErrorResponse`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
	let status = response.status();

	if status.is_success() {
		return Ok(response.json().await?);
	}

	// Fall back to the raw body if it is not the usual error shape.
	let body = response.text().await?;
	let message = serde_json::from_str::<ErrorResponse>(&body).map_or(body, |error| error.error);

	Err(ClientError::Api { status, message })
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::test::*;

	#[tokio::test]
	async fn test_client_round_trip() {
		let client = PostClient::new(&spawn().await);

		assert!(client.list().await.unwrap().is_empty());

		let created = client
			.create(&CreatePostInput {
				title: "Over the wire".into(),
				content: "Served by a real listener".into(),
			})
			.await
			.unwrap();

		assert_eq!(client.get(created.id).await.unwrap(), created);
		assert_eq!(client.list().await.unwrap(), vec![created]);
	}

	#[tokio::test]
	async fn test_client_api_error() {
		let client = PostClient::new(&spawn().await);

		let error = client.get(99).await.unwrap_err();

		match error {
			ClientError::Api { status, message } => {
				assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
				assert_eq!(message, "no post with id 99");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_trailing_slash_base_url() {
		let client = PostClient::new("http://localhost:3000/");

		assert_eq!(client.posts_url, "http://localhost:3000/api/posts");
	}
}

//! Plain-text renderings of the three blog screens.

use crate::route::post::model::Post;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders the list screen, one post per line.
pub fn list(posts: &[Post]) -> String {
	if posts.is_empty() {
		return "No posts yet.\n".into();
	}

	let width = posts
		.iter()
		.map(|post| post.id.to_string().len())
		.max()
		.unwrap_or(1);

	posts
		.iter()
		.map(|post| {
			format!(
				"{:>width$}  {}  {}\n",
				post.id,
				post.created_at.format(DATE_FORMAT),
				post.title,
			)
		})
		.collect()
}

/// Renders the detail screen of a single post.
pub fn detail(post: &Post) -> String {
	format!(
		"{title}\n{rule}\n#{id}, posted {at}\n\n{content}\n",
		title = post.title,
		rule = "=".repeat(post.title.chars().count().max(1)),
		id = post.id,
		at = post.created_at.format(TIMESTAMP_FORMAT),
		content = post.content,
	)
}

/// Renders the screen shown after creating a post.
pub fn created(post: &Post) -> String {
	format!("Created post #{}.\n\n{}", post.id, detail(post))
}

#[cfg(test)]
mod test {
	use chrono::{TimeZone, Utc};

	use super::*;

	fn post(id: i64, title: &str) -> Post {
		Post {
			id,
			title: title.into(),
			content: "Line one\nLine two".into(),
			created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap(),
		}
	}

	#[test]
	fn test_list_empty() {
		assert_eq!(list(&[]), "No posts yet.\n");
	}

	#[test]
	fn test_list_aligns_ids() {
		let rendered = list(&[post(9, "Nine"), post(10, "Ten")]);

		assert_eq!(rendered, " 9  2024-03-09  Nine\n10  2024-03-09  Ten\n");
	}

	#[test]
	fn test_detail_keeps_content() {
		let rendered = detail(&post(3, "Hello"));

		assert_eq!(
			rendered,
			"Hello\n=====\n#3, posted 2024-03-09 14:05:00 UTC\n\nLine one\nLine two\n"
		);
	}

	#[test]
	fn test_created() {
		let rendered = created(&post(4, "New"));

		assert!(rendered.starts_with("Created post #4.\n\nNew\n===\n"));
	}
}

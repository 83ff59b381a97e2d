use aide::{openapi::Tag, transform::TransformOpenApi};

use crate::{error::ErrorResponse, extract::Json};

pub mod tag {
	pub const POST: &str = "Post";
}

pub fn docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Blog API")
		.summary("A minimal blog backed by a single posts table")
		.description(include_str!("../README.md"))
		.tag(Tag {
			name: tag::POST.into(),
			description: Some("Listing, reading and creating posts".into()),
			..Default::default()
		})
		.default_response_with::<Json<ErrorResponse>, _>(|res| {
			res.description("The storage call failed.")
				.example(ErrorResponse {
					error: "no post with id 1".into(),
				})
		})
}

use schemars::JsonSchema;
use serde::Deserialize;

/// Path parameters of a route addressing a single row.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct IdInput {
	/// The identifier of the row.
	pub id: i64,
}

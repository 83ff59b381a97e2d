mod model;
mod route;

use proc_macro::TokenStream;

/// Creates a documentation function for the route, named after the original
/// function with the suffix `_docs`.
///
/// The first line of the doc comment becomes the operation summary and the
/// remaining lines its description.
#[proc_macro_attribute]
pub fn route(args: TokenStream, input: TokenStream) -> TokenStream {
	route::from_input(args, input)
}

/// Creates a `CreateXInput` struct for the model, holding every field that
/// is not marked `#[generated]`.
///
/// Struct attributes (derives included) and field attributes are copied
/// verbatim, and the `#[generated]` markers are removed from the model itself.
#[proc_macro_attribute]
pub fn model(_args: TokenStream, input: TokenStream) -> TokenStream {
	model::from_input(input)
}

use darling::{ast, FromMeta};
use proc_macro::TokenStream;
use quote::{format_ident, quote};

#[derive(FromMeta)]
struct RouteArgs {
	#[darling(multiple)]
	tag: Vec<syn::Expr>,
	#[darling(multiple)]
	response: Vec<ResponseArgs>,
}

#[derive(FromMeta)]
struct ResponseArgs {
	status: syn::LitInt,
	shape: Option<syn::Type>,
	description: Option<String>,
}

pub fn from_input(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = match ast::NestedMeta::parse_meta_list(args.into()) {
		Ok(x) => x,
		Err(e) => return e.into_compile_error().into(),
	};

	let args = match RouteArgs::from_list(&args) {
		Ok(x) => x,
		Err(e) => return e.write_errors().into(),
	};

	let function = syn::parse_macro_input!(input as syn::ItemFn);

	let Some((summary, description)) = extract_doc_comment(&function.attrs) else {
		return syn::Error::new_spanned(
			&function.sig.ident,
			"a route needs a doc comment, its first line is the summary",
		)
		.into_compile_error()
		.into();
	};

	let fn_name = format_ident!("{}_docs", function.sig.ident);
	let fn_vis = &function.vis;

	let description = description.map(|description| quote!(.description(#description)));
	let tags = args.tag.iter();
	let responses = args.response.into_iter().map(|response| {
		let status = response.status;
		let shape = response.shape.map_or_else(|| quote!(()), |x| quote!(#x));

		match response.description {
			Some(description) => quote! {
				.response_with::<#status, #shape, _>(|res| res.description(#description))
			},
			None => quote! {
				.response::<#status, #shape>()
			},
		}
	});

	quote! {
		#function

		#fn_vis fn #fn_name(op: aide::transform::TransformOperation) -> aide::transform::TransformOperation {
			op.summary(#summary)
				#description
				#(
					.tag(#tags)
				)*
				#(
					#responses
				)*
		}
	}
	.into()
}

/// Splits a doc comment into its first line and the (optional) remainder.
fn extract_doc_comment(attrs: &[syn::Attribute]) -> Option<(String, Option<String>)> {
	let lines = attrs
		.iter()
		.filter_map(|attr| {
			let syn::Meta::NameValue(meta) = &attr.meta else {
				return None;
			};

			if !meta.path.is_ident("doc") {
				return None;
			}

			let syn::Expr::Lit(syn::ExprLit {
				lit: syn::Lit::Str(literal),
				..
			}) = &meta.value
			else {
				return None;
			};

			// rustdoc trims each line as well
			Some(literal.value().trim().to_owned())
		})
		.collect::<Vec<_>>();

	let mut lines = lines.into_iter().skip_while(String::is_empty);
	let summary = lines.next()?;
	let description = lines.collect::<Vec<_>>().join("\n").trim().to_owned();

	Some((summary, (!description.is_empty()).then_some(description)))
}

use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

/// Marks a field whose value is assigned by the storage layer.
const GENERATED: &str = "generated";

pub fn from_input(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let mut item = syn::parse_macro_input!(input as ItemStruct);

	let Fields::Named(fields) = &mut item.fields else {
		return syn::Error::new_spanned(
			&item.ident,
			"#[model] only supports structs with named fields",
		)
		.to_compile_error()
		.into();
	};

	let mut create_fields = Vec::new();

	for field in &mut fields.named {
		let count = field.attrs.len();

		field.attrs.retain(|attr| !attr.path().is_ident(GENERATED));

		if field.attrs.len() == count {
			create_fields.push(field.clone());
		}
	}

	let ident = &item.ident;
	let vis = &item.vis;
	let generics = &item.generics;
	let create_ident = format_ident!("Create{}Input", ident);
	let doc = format!(" The caller-supplied fields of a new [`{ident}`].");

	// Doc comments describe the model, not the input.
	let attrs = item
		.attrs
		.iter()
		.filter(|attr| !attr.path().is_ident("doc"));

	quote! {
		#item

		#[doc = #doc]
		#(#attrs)*
		#vis struct #create_ident #generics {
			#(
				#create_fields,
			)*
		}
	}
	.into()
}

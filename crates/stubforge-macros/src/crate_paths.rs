//! Helper functions for dynamic crate path resolution using proc_macro_crate

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the path of the crate exporting the stubforge registration API.
///
/// Prefers the `stubforge` facade and falls back to `stubforge-core`, so the
/// derive also works for crates depending on the engine directly (renamed
/// dependencies included).
pub(crate) fn get_stubforge_crate() -> syn::Result<TokenStream> {
	use proc_macro_crate::{FoundCrate, crate_name};

	let found = crate_name("stubforge")
		.map(|found| (found, quote!(::stubforge)))
		.or_else(|_| crate_name("stubforge-core").map(|found| (found, quote!(::stubforge_core))));

	match found {
		Ok((FoundCrate::Itself, path)) => Ok(path),
		Ok((FoundCrate::Name(name), _)) => {
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			Ok(quote!(::#ident))
		}
		Err(e) => Err(syn::Error::new(
			proc_macro2::Span::call_site(),
			format!(
				"failed to resolve `stubforge` crate: {}. Ensure it is listed in Cargo.toml dependencies.",
				e
			),
		)),
	}
}

//! Implementation of `#[derive(Stub)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields, Ident, Type};

use crate::crate_paths::get_stubforge_crate;

/// How a field takes part in synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FieldMode {
	#[default]
	Mutator,
	ReadOnly,
	Skip,
}

pub(crate) fn derive_stub_impl(input: DeriveInput) -> syn::Result<TokenStream> {
	if !input.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&input.generics,
			"Stub cannot be derived for generic types; implement Bean or Stubbable by hand",
		));
	}

	let krate = get_stubforge_crate()?;
	match &input.data {
		Data::Struct(data) => derive_bean(&input.ident, data, &krate),
		Data::Enum(data) => derive_enum(&input.ident, data, &krate),
		Data::Union(_) => Err(syn::Error::new_spanned(
			&input.ident,
			"Stub can only be derived for structs and enums",
		)),
	}
}

fn derive_bean(name: &Ident, data: &DataStruct, krate: &TokenStream) -> syn::Result<TokenStream> {
	let Fields::Named(fields) = &data.fields else {
		return Err(syn::Error::new_spanned(
			name,
			"Stub can only be derived for structs with named fields",
		));
	};

	let mut defaults = Vec::new();
	let mut members = Vec::new();
	for field in &fields.named {
		let Some(ident) = &field.ident else {
			continue;
		};
		defaults.push(quote! { #ident: ::core::default::Default::default() });

		let property = ident.unraw().to_string();
		match field_mode(field)? {
			FieldMode::Skip => {}
			FieldMode::Mutator => {
				let setter = format!("set_{}", property);
				let member = match extract_option_type(&field.ty) {
					Some(inner) => quote! {
						bean.mutator(#setter, |bean: &mut Self, value: #inner| {
							bean.#ident = ::core::option::Option::Some(value)
						});
					},
					None => {
						let ty = &field.ty;
						quote! {
							bean.mutator(#setter, |bean: &mut Self, value: #ty| bean.#ident = value);
						}
					}
				};
				members.push(member);
			}
			FieldMode::ReadOnly => {
				let getter = format!("get_{}", property);
				let member = if let Some(element) = extract_vec_type(&field.ty) {
					quote! {
						bean.sequence_accessor::<#element>(#getter, |bean: &mut Self| &mut bean.#ident);
					}
				} else if let Some(element) = extract_option_type(&field.ty).and_then(extract_vec_type) {
					quote! {
						bean.sequence_accessor::<#element>(#getter, |bean: &mut Self| {
							bean.#ident.get_or_insert_with(::std::vec::Vec::new)
						});
					}
				} else {
					return Err(syn::Error::new_spanned(
						&field.ty,
						"#[stub(read_only)] requires a Vec<E> or Option<Vec<E>> field",
					));
				};
				members.push(member);
			}
		}
	}

	Ok(quote! {
		impl #krate::Bean for #name {
			fn describe(bean: &mut #krate::BeanBuilder<'_, Self>) {
				bean.no_arg(|| Self {
					#(#defaults,)*
				});
				#(#members)*
			}
		}
	})
}

fn derive_enum(name: &Ident, data: &DataEnum, krate: &TokenStream) -> syn::Result<TokenStream> {
	let mut constants = Vec::new();
	for variant in &data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Err(syn::Error::new_spanned(
				variant,
				"Stub can only be derived for enums whose variants carry no data",
			));
		}
		let variant = &variant.ident;
		constants.push(quote! { Self::#variant });
	}

	Ok(quote! {
		impl #krate::Stubbable for #name {
			fn register(registry: &mut #krate::TypeRegistry) {
				registry.enumeration::<Self>([#(#constants),*]);
			}
		}
	})
}

fn field_mode(field: &syn::Field) -> syn::Result<FieldMode> {
	let mut mode = FieldMode::default();
	for attr in &field.attrs {
		if !attr.path().is_ident("stub") {
			continue;
		}
		attr.parse_nested_meta(|meta| {
			let requested = if meta.path.is_ident("skip") {
				FieldMode::Skip
			} else if meta.path.is_ident("read_only") {
				FieldMode::ReadOnly
			} else {
				return Err(meta.error("unsupported stub attribute"));
			};
			if mode != FieldMode::Mutator && mode != requested {
				return Err(meta.error("skip and read_only cannot be combined"));
			}
			mode = requested;
			Ok(())
		})?;
	}
	Ok(mode)
}

/// Extracts `T` from `Option<T>`
fn extract_option_type(ty: &Type) -> Option<&Type> {
	extract_single_argument(ty, "Option")
}

/// Extracts `E` from `Vec<E>`
fn extract_vec_type(ty: &Type) -> Option<&Type> {
	extract_single_argument(ty, "Vec")
}

fn extract_single_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
	if let Type::Path(type_path) = ty
		&& let Some(last_segment) = type_path.path.segments.last()
		&& last_segment.ident == wrapper
		&& let syn::PathArguments::AngleBracketed(args) = &last_segment.arguments
		&& let Some(syn::GenericArgument::Type(inner_ty)) = args.args.first()
	{
		return Some(inner_ty);
	}
	None
}

//! Procedural macros for stubforge.
//!
//! This crate provides the `#[derive(Stub)]` macro generating type
//! registrations for the synthesis engine.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod crate_paths;
mod stub_derive;

/// Derives the stubforge registration of a struct or a fieldless enum.
///
/// On a struct with named fields this implements `Bean`: the no-argument
/// constructor fills every field with `Default::default()`, and every field
/// `x` becomes a mutator `set_x`. A field of type `Option<V>` is assigned
/// through a mutator taking `V`.
///
/// On an enum whose variants carry no data this implements `Stubbable`,
/// registering every variant as a constant. The enum must be
/// `Clone + Send + Sync`.
///
/// # Attributes
///
/// ## Field-level attributes
///
/// - `#[stub(skip)]` - Leave the field at its default value
/// - `#[stub(read_only)]` - Register a read-only accessor `get_x` instead of a
///   mutator; the field must be a `Vec<E>` or `Option<Vec<E>>`, which receives
///   synthesized elements
///
/// # Example
///
/// ```ignore
/// use stubforge::Stub;
///
/// #[derive(Default, Stub)]
/// pub struct Order {
///     pub reference: String,
///     pub note: Option<String>,
///     #[stub(read_only)]
///     pub lines: Vec<u32>,
///     #[stub(skip)]
///     pub audit: Vec<String>,
/// }
/// ```
///
/// This generates:
///
/// ```ignore
/// impl stubforge::Bean for Order {
///     fn describe(bean: &mut stubforge::BeanBuilder<'_, Self>) {
///         bean.no_arg(|| Self {
///             reference: Default::default(),
///             note: Default::default(),
///             lines: Default::default(),
///             audit: Default::default(),
///         });
///         bean.mutator("set_reference", |bean: &mut Self, value: String| bean.reference = value);
///         bean.mutator("set_note", |bean: &mut Self, value: String| bean.note = Some(value));
///         bean.sequence_accessor("get_lines", |bean: &mut Self| &mut bean.lines);
///     }
/// }
/// ```
#[proc_macro_derive(Stub, attributes(stub))]
pub fn derive_stub(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	stub_derive::derive_stub_impl(input)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}

//! Procedural macros for hookwire.
//!
//! These macros expand to paths under `::hookwire`, so they are meant to be
//! used through the facade crate with its `macros` feature.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, ItemFn, parse_macro_input};

mod hook_fn;
mod set_error;

use hook_fn::{HookArgs, HookShape};

/// Derive macro for implementing the `Message` marker trait.
#[proc_macro_derive(Message)]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::hookwire::Message for #name #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}

/// Derive macro for implementing `SetError`.
///
/// Exactly one field must be marked `#[set_error]`. Its type must be an
/// `Option` of something a `BoxError` converts into, typically
/// `Option<SharedError>`.
///
/// ```rust,ignore
/// #[derive(Clone, SetError)]
/// struct OrderQuery {
///     filters: Vec<String>,
///     #[set_error]
///     error: Option<SharedError>,
/// }
/// ```
#[proc_macro_derive(SetError, attributes(set_error))]
pub fn derive_set_error(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    set_error::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Turn an async function into a unit struct implementing `Mutator`.
///
/// The function takes either the value alone or `(ctx, kinds, value)` and
/// returns `Result<Value, BoxError>`.
///
/// ```rust,ignore
/// #[hookwire::mutator]
/// async fn add_tax(ctx: &Context, kinds: &Kinds, order: Order) -> Result<Order, BoxError> {
///     Ok(order.with_tax())
/// }
///
/// orders.registry("billing").add(None, Arc::new(add_tax));
/// ```
#[proc_macro_attribute]
pub fn mutator(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as HookArgs);
    let input = parse_macro_input!(item as ItemFn);
    hook_fn::expand(&input, &args, HookShape::Mutator)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Turn an async function into a unit struct implementing `EventHook`.
///
/// Same as [`macro@mutator`], except the value is taken by reference and the
/// function returns `Result<(), BoxError>`.
#[proc_macro_attribute]
pub fn event(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as HookArgs);
    let input = parse_macro_input!(item as ItemFn);
    hook_fn::expand(&input, &args, HookShape::Event)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

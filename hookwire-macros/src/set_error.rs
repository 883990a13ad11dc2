use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Index, Member};

fn is_marked(field: &Field) -> bool {
    field.attrs.iter().any(|a| a.path().is_ident("set_error"))
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(SetError)] can only be used on structs",
            ));
        }
    };

    let marked: Vec<Member> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| is_marked(field))
        .map(|(i, field)| match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        })
        .collect();

    let member = match marked.as_slice() {
        [member] => member,
        [] => {
            return Err(syn::Error::new_spanned(
                name,
                "#[derive(SetError)] needs one field marked #[set_error]",
            ));
        }
        _ => {
            return Err(syn::Error::new_spanned(
                fields,
                "only one field may be marked #[set_error]",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics ::hookwire::SetError for #name #ty_generics #where_clause {
            fn set_error(mut self, err: ::hookwire::BoxError) -> Self {
                self.#member = ::core::option::Option::Some(::core::convert::Into::into(err));
                self
            }
        }
    })
}

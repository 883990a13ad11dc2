use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ItemFn, LitStr, Pat, PatType, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

#[derive(Clone, Copy)]
pub enum HookShape {
    Mutator,
    Event,
}

impl HookShape {
    fn attr_name(self) -> &'static str {
        match self {
            HookShape::Mutator => "mutator",
            HookShape::Event => "event",
        }
    }
}

pub struct HookArgs {
    name: Option<String>,
}

impl Parse for HookArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(HookArgs { name })
    }
}

fn typed(arg: &FnArg) -> syn::Result<&PatType> {
    match arg {
        FnArg::Typed(pat_type) => Ok(pat_type),
        FnArg::Receiver(receiver) => Err(syn::Error::new_spanned(
            receiver,
            "hook function cannot take `self`",
        )),
    }
}

pub fn expand(input: &ItemFn, args: &HookArgs, shape: HookShape) -> syn::Result<TokenStream> {
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;

    if input.sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            input.sig.fn_token,
            "hook function must be async",
        ));
    }

    let wildcard: Pat = syn::parse_quote!(_);
    let inputs: Vec<&PatType> = input.sig.inputs.iter().map(typed).collect::<syn::Result<_>>()?;
    let (ctx_pat, kinds_pat, value) = match inputs.as_slice() {
        [value] => (&wildcard, &wildcard, *value),
        [ctx, kinds, value] => (&*ctx.pat, &*kinds.pat, *value),
        _ => {
            return Err(syn::Error::new(
                input.sig.inputs.span(),
                "hook function must take `(value)` or `(ctx, kinds, value)`",
            ));
        }
    };
    let value_pat = &value.pat;

    let value_type: &Type = match shape {
        HookShape::Mutator => &value.ty,
        HookShape::Event => match &*value.ty {
            Type::Reference(type_ref) => &type_ref.elem,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "event hook value argument must be a reference (&Value)",
                ));
            }
        },
    };

    let struct_name = match args.name {
        Some(ref custom_name) => Ident::new(custom_name, fn_name.span()),
        None => fn_name.clone(),
    };
    let doc = format!(
        "Auto-generated hook from `#[hookwire::{}]` on `{}`",
        shape.attr_name(),
        fn_name
    );

    let hook_impl = match shape {
        HookShape::Mutator => quote! {
            impl ::hookwire::Mutator<#value_type> for #struct_name {
                async fn mutate(
                    &self,
                    #ctx_pat: &::hookwire::Context,
                    #kinds_pat: &::hookwire::Kinds,
                    #value_pat: #value_type,
                ) -> ::core::result::Result<#value_type, ::hookwire::BoxError> {
                    #fn_block
                }
            }
        },
        HookShape::Event => quote! {
            impl ::hookwire::EventHook<#value_type> for #struct_name {
                async fn on_event(
                    &self,
                    #ctx_pat: &::hookwire::Context,
                    #kinds_pat: &::hookwire::Kinds,
                    #value_pat: &#value_type,
                ) -> ::core::result::Result<(), ::hookwire::BoxError> {
                    #fn_block
                }
            }
        },
    };

    Ok(quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = #doc]
        #fn_vis struct #struct_name;

        #hook_impl
    })
}

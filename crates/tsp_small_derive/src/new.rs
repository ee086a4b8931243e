use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, parse_macro_input};

use crate::utils;

/// `new` takes every non-`Option` field in declaration order; `Option` fields
/// start as `None`. Each field also gets a `with_<field>` builder.
pub fn derive_new_inner(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(&name, "`New` requires named fields")
                    .to_compile_error()
                    .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&name, "`New` can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let mut new_args = Vec::new();
    let mut inits = Vec::new();
    let mut builders = Vec::new();

    for field in named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let method = format_ident!("with_{}", ident);

        match utils::inner_of_option(&field.ty) {
            Some(inner) => {
                inits.push(quote! { #ident: None });
                builders.push(quote! {
                    pub fn #method(mut self, #ident: #inner) -> Self {
                        self.#ident = Some(#ident);
                        self
                    }
                });
            }
            None => {
                let ty = &field.ty;
                new_args.push(quote! { #ident: #ty });
                inits.push(quote! { #ident });
                builders.push(quote! {
                    pub fn #method(mut self, #ident: #ty) -> Self {
                        self.#ident = #ident;
                        self
                    }
                });
            }
        }
    }

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            pub const fn new(#(#new_args),*) -> Self {
                Self { #(#inits),* }
            }

            #(#builders)*
        }
    };

    TokenStream::from(expanded)
}

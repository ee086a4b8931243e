use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    Attribute, DeriveInput, Fields, Ident, LitStr, Variant, parse_macro_input, spanned::Spanned,
};

use crate::utils;

/// A unit variant together with every spelling that selects it.
struct CliVariant {
    ident: Ident,
    canonical: String,
    aliases: Vec<String>,
}

impl CliVariant {
    fn parse(variant: &Variant) -> syn::Result<Self> {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "CliValue only supports enums with unit variants",
            ));
        }

        let mut out = Self {
            ident: variant.ident.clone(),
            canonical: utils::to_kebab_case(&variant.ident.to_string()),
            aliases: Vec::new(),
        };
        for attr in variant.attrs.iter().filter(|a| a.path().is_ident("cli")) {
            attr.parse_nested_meta(|meta| {
                let lit: LitStr = meta.value()?.parse()?;
                if meta.path.is_ident("name") {
                    out.canonical = lit.value();
                } else if meta.path.is_ident("alias") {
                    out.aliases.push(lit.value());
                } else {
                    return Err(meta.error("unsupported cli attribute; expected name/alias"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }

    /// `"a" | "b" => Ok(Self::V),` with each spelling normalized like user input.
    fn parse_arm(&self) -> TokenStream2 {
        let ident = &self.ident;
        let spellings = std::iter::once(&self.canonical)
            .chain(&self.aliases)
            .map(|s| LitStr::new(&utils::normalize_cli_token(s), Span::call_site()));
        quote! { #(#spellings)|* => Ok(Self::#ident), }
    }

    fn display_arm(&self) -> TokenStream2 {
        let ident = &self.ident;
        let canonical = LitStr::new(&self.canonical, Span::call_site());
        quote! { Self::#ident => #canonical, }
    }
}

/// Reads `#[cli_value(option = "...")]`, defaulting to the kebab-cased type name.
fn option_name(enum_ident: &Ident, attrs: &[Attribute]) -> syn::Result<String> {
    let mut name = utils::to_kebab_case(&enum_ident.to_string());
    for attr in attrs.iter().filter(|a| a.path().is_ident("cli_value")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("option") {
                return Err(meta.error("unsupported cli_value attribute; expected option = \"...\""));
            }
            let lit: LitStr = meta.value()?.parse()?;
            name = lit.value();
            Ok(())
        })?;
    }
    Ok(name)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let syn::Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "CliValue can only be derived for enums",
        ));
    };

    let enum_ident = &input.ident;
    let option = LitStr::new(&option_name(enum_ident, &input.attrs)?, Span::call_site());
    let variants = data_enum
        .variants
        .iter()
        .map(CliVariant::parse)
        .collect::<syn::Result<Vec<_>>>()?;

    let expected = LitStr::new(
        &variants
            .iter()
            .map(|v| v.canonical.as_str())
            .collect::<Vec<_>>()
            .join("|"),
        Span::call_site(),
    );
    let parse_arms = variants.iter().map(CliVariant::parse_arm);
    let display_arms = variants.iter().map(CliVariant::display_arm);

    Ok(quote! {
        impl #enum_ident {
            pub const EXPECTED: &'static str = #expected;

            pub fn parse(raw: &str) -> crate::Result<Self> {
                let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
                match normalized.as_str() {
                    #(#parse_arms)*
                    _ => Err(crate::Error::invalid_input(format!(
                        "Invalid value for --{}: {} (expected {})",
                        #option,
                        raw,
                        Self::EXPECTED
                    ))),
                }
            }
        }

        impl std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    #(#display_arms)*
                })
            }
        }
    })
}

pub fn derive_cli_value_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

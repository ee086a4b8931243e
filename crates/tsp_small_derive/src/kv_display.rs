use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr, parse_macro_input, spanned::Spanned};

/// How a field value is rendered after its `key =`.
enum KvFormat {
    Display,
    Len,
    Opt,
}

impl KvFormat {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "display" => Ok(Self::Display),
            "len" => Ok(Self::Len),
            "opt" => Ok(Self::Opt),
            other => Err(syn::Error::new(
                lit.span(),
                format!("unsupported kv fmt `{other}`; expected display/len/opt"),
            )),
        }
    }

    fn value_expr(&self, ident: &Ident) -> TokenStream2 {
        match self {
            Self::Display => quote! { &self.#ident },
            Self::Len => quote! { &self.#ident.len() },
            Self::Opt => quote! {
                &self.#ident
                    .as_ref()
                    .map_or_else(|| String::from("-"), |v| v.to_string())
            },
        }
    }
}

struct KvField<'a> {
    ident: &'a Ident,
    key: String,
    format: KvFormat,
}

impl<'a> KvField<'a> {
    fn parse(field: &'a Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "KvDisplay requires named fields"))?;
        let mut out = Self {
            ident,
            key: ident.to_string(),
            format: KvFormat::Display,
        };

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("kv")) {
            attr.parse_nested_meta(|meta| {
                let lit: LitStr = meta.value()?.parse()?;
                if meta.path.is_ident("name") {
                    out.key = lit.value();
                } else if meta.path.is_ident("fmt") {
                    out.format = KvFormat::from_lit(&lit)?;
                } else {
                    return Err(meta.error("unsupported kv attribute; expected name/fmt"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

/// Renders one `\n\t<key> = <value>` line per field, keys padded so the `=`
/// signs line up.
pub fn derive_kv_display_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let struct_ident = &input.ident;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(input.span(), "KvDisplay can only be derived for structs")
            .to_compile_error()
            .into();
    };
    let Fields::Named(named) = &data_struct.fields else {
        return syn::Error::new(input.span(), "KvDisplay requires named fields")
            .to_compile_error()
            .into();
    };

    let fields = match named
        .named
        .iter()
        .map(KvField::parse)
        .collect::<syn::Result<Vec<_>>>()
    {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let width = fields.iter().map(|f| f.key.len()).max().unwrap_or(0);
    let lines = fields.iter().map(|field| {
        let prefix = LitStr::new(
            &format!("\n\t{:<width$} = ", field.key),
            proc_macro2::Span::call_site(),
        );
        let value = field.format.value_expr(field.ident);
        quote! {
            f.write_str(#prefix)?;
            std::fmt::Display::fmt(#value, f)?;
        }
    });

    let expanded = quote! {
        impl std::fmt::Display for #struct_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                #(#lines)*
                Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}

//! Expansion of #[derive(Entity)].

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields};

/// Parsed #[column(...)] metadata for one field.
#[derive(Default)]
struct ColumnAttr {
    index: Option<usize>,
    label: Option<String>,
    tooltip: Option<String>,
    width: Option<u16>,
    editable: bool,
}

pub fn expand(input: TokenStream) -> TokenStream {
    let input = match syn::parse2::<DeriveInput>(input) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error(),
    };
    match generate(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn generate(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Entity can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "Entity requires named fields",
        ));
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut names = Vec::new();
    let mut get_arms = Vec::new();
    let mut set_arms = Vec::new();
    let mut specs = Vec::new();

    for field in &fields.named {
        let field_ident = field.ident.as_ref().expect("named field");
        let name = field_ident.to_string();
        let ty = &field.ty;
        let attr = column_attr(field)?;

        names.push(name.clone());

        get_arms.push(quote! {
            #name => Ok(::gridbind::value::Value::from(self.#field_ident.clone())),
        });

        set_arms.push(quote! {
            #name => {
                self.#field_ident = <#ty as ::gridbind::value::FromValue>::from_value(&value)
                    .ok_or_else(|| ::gridbind::error::FieldError::type_mismatch(
                        #name,
                        <#ty as ::gridbind::value::FromValue>::KIND.name(),
                        value.type_name(),
                    ))?;
                Ok(())
            }
        });

        let mut spec = quote! {
            ::gridbind::schema::ColumnSpec::new(
                #name,
                <#ty as ::gridbind::value::FromValue>::KIND,
            )
        };
        if let Some(index) = attr.index {
            spec = quote! { #spec.at(#index) };
        }
        if let Some(label) = &attr.label {
            spec = quote! { #spec.label(#label) };
        }
        if let Some(tooltip) = &attr.tooltip {
            spec = quote! { #spec.tooltip(#tooltip) };
        }
        if let Some(width) = attr.width {
            spec = quote! { #spec.width(#width) };
        }
        if attr.editable {
            spec = quote! { #spec.editable() };
        }
        specs.push(spec);
    }

    Ok(quote! {
        impl #impl_generics ::gridbind::entity::Entity for #ident #ty_generics #where_clause {
            fn fields() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn field(
                &self,
                name: &str,
            ) -> ::core::result::Result<::gridbind::value::Value, ::gridbind::error::FieldError> {
                match name {
                    #(#get_arms)*
                    _ => Err(::gridbind::error::FieldError::missing(name)),
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: ::gridbind::value::Value,
            ) -> ::core::result::Result<(), ::gridbind::error::FieldError> {
                match name {
                    #(#set_arms)*
                    _ => Err(::gridbind::error::FieldError::missing(name)),
                }
            }

            fn column_specs() -> ::std::vec::Vec<::gridbind::schema::ColumnSpec<Self>> {
                ::std::vec![#(#specs),*]
            }
        }
    })
}

/// Scan a field's attributes for #[column(...)].
fn column_attr(field: &Field) -> syn::Result<ColumnAttr> {
    let mut out = ColumnAttr::default();
    for attr in &field.attrs {
        if !attr.path().is_ident("column") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("index") {
                let lit: syn::LitInt = meta.value()?.parse()?;
                out.index = Some(lit.base10_parse::<usize>()?);
            } else if meta.path.is_ident("label") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                out.label = Some(lit.value());
            } else if meta.path.is_ident("tooltip") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                out.tooltip = Some(lit.value());
            } else if meta.path.is_ident("width") {
                let lit: syn::LitInt = meta.value()?.parse()?;
                out.width = Some(lit.base10_parse::<u16>()?);
            } else if meta.path.is_ident("editable") {
                out.editable = true;
            } else {
                return Err(meta.error("unknown #[column] option"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

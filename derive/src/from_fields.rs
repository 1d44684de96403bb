use std::collections::HashMap;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, ExprClosure, Field, Fields, Ident, LitInt, Pat, PathArguments,
    Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

pub(crate) fn expand_from_fields(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`FromFields` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`FromFields` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut seen: HashMap<u8, &Ident> = HashMap::new();

    for field in &fields {
        let number = field.number.base10_parse::<u8>()?;

        if seen.insert(number, &field.name).is_some() {
            Err(Error::new_spanned(
                &field.number,
                "Field numbers must be unique.",
            ))?
        }
    }

    let cases = fields.iter().map(|field| {
        let FieldMetadata {
            name,
            ty,
            number,
            handler,
        } = field;

        let assignment = if let Some(handler) = handler {
            let body = &handler.body;
            let mut inputs = handler.inputs.iter();
            let acc = inputs.next();
            let val = inputs.next();

            quote! {
                (|#acc: &mut #ty, #val| { #body })(&mut self.#name, value)
            }
        } else {
            quote! {
                if let Some(value) = ::cassette::avec::FromValue::from_value(value) {
                    self.#name = Some(value);
                }
            }
        };

        quote! { #number => { #assignment } }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::cassette::avec::FromFields for #name #ty_generics #where_clause {
            fn add_field(&mut self, field: u8, value: &::cassette::sans::data::Value) {
                match field {
                    #(#cases)*
                    _ => {}
                };
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    ty: Type,
    number: LitInt,
    handler: Option<ExprClosure>,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let Some(name) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let FieldAttribute { number, handler } = attr.meta.require_list()?.parse_args()?;

        if let Some(handler) = &handler {
            let mut inputs = handler.inputs.iter();

            let (Some(_), Some(parameter), None) = (inputs.next(), inputs.next(), inputs.next())
            else {
                Err(Error::new_spanned(
                    handler,
                    "Handler closure must have two parameters.",
                ))?
            };

            if !matches!(parameter, Pat::Type(_)) {
                Err(Error::new_spanned(
                    parameter,
                    "Handler closure's second parameter must be annotated as `&Value`.",
                ))?
            }
        } else {
            let Type::Path(path) = &field.ty else {
                Err(Error::new_spanned(
                    &field.ty,
                    "Field must have a type annotation.",
                ))?
            };

            let Some(segment) = path.path.segments.last() else {
                Err(Error::new_spanned(
                    &path.path.segments,
                    "Field must have a type annotation.",
                ))?
            };

            if segment.ident != "Option" {
                Err(Error::new_spanned(
                    &segment.ident,
                    "Field without a handler must have type `Option<T>`.",
                ))?
            }

            if !matches!(segment.arguments, PathArguments::AngleBracketed(_)) {
                Err(Error::new_spanned(
                    &segment.arguments,
                    "Field of type `Option<T>` must have a generic parameter.",
                ))?
            }
        }

        Ok(Some(Self {
            name,
            ty: field.ty.clone(),
            number,
            handler,
        }))
    }
}

#[derive(Debug)]
struct FieldAttribute {
    number: LitInt,
    handler: Option<ExprClosure>,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let number = input.parse::<LitInt>()?;

        let handler = if !input.is_empty() {
            input.parse::<Token![,]>()?;
            Some(input.parse::<ExprClosure>()?)
        } else {
            None
        };

        Ok(Self { number, handler })
    }
}

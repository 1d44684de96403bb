use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_fields;

#[proc_macro_derive(FromFields, attributes(field))]
pub fn derive_from_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_fields::expand_from_fields(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}

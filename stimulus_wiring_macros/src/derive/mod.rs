//! Expansion of `#[derive(Component)]`.

mod generate;
mod parse;

pub(crate) use generate::generate_impl;
pub(crate) use parse::{ComponentInput, parse_input};
#[cfg(test)]
pub(crate) use parse::default_scope;

/// Parse `input` and generate the `Component` implementation.
pub(crate) fn expand(input: &syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let component = parse_input(input)?;
    Ok(generate_impl(&component))
}

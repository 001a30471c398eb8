//! Procedural macros for `stimulus_wiring`.
//!
//! `#[derive(Component)]` implements `stimulus_wiring::Component` for structs
//! with named fields. Every field becomes a property readable by name,
//! serialized with `serde_json`, so field types must implement
//! `serde::Serialize`.
//!
//! Attributes:
//!
//! - `#[stimulus(scope = "admin/user_row")]` on the struct sets the scope
//!   path. Without it the path is the struct name in snake case.
//! - `#[stimulus(id)]` on a `String` or `Option<String>` field backs the
//!   element id.
//! - `#[stimulus(skip)]` on a field hides it from property lookup.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `stimulus_wiring::Component`.
#[proc_macro_derive(Component, attributes(stimulus))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    derive::expand(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[cfg(test)]
mod tests;

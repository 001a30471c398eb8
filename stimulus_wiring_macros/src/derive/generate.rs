//! Token generation for the `Component` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, parse_quote};

use super::ComponentInput;

/// Copy of the struct generics with a `Serialize` predicate per exposed field
/// type. Non-generic structs are returned unchanged.
fn bounded_generics(input: &ComponentInput) -> Generics {
    let mut generics = input.generics.clone();
    if generics.type_params().next().is_none() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for prop in &input.props {
        let ty = &prop.ty;
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::stimulus_wiring::__private::Serialize));
    }
    generics
}

/// Generate `impl ::stimulus_wiring::Component for ...`.
pub(crate) fn generate_impl(input: &ComponentInput) -> TokenStream {
    let ident = &input.ident;
    let generics = bounded_generics(input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let scope = &input.scope;
    let arms = input.props.iter().map(|prop| {
        let name = &prop.name;
        let field = &prop.ident;
        quote! {
            #name => ::stimulus_wiring::__private::to_prop(&self.#field),
        }
    });
    let element_id = input.id_field.as_ref().map(|field| {
        quote! {
            fn element_id(&self) -> ::core::option::Option<&str> {
                ::stimulus_wiring::__private::ElementIdField::as_element_id(&self.#field)
            }
        }
    });

    quote! {
        impl #impl_generics ::stimulus_wiring::Component for #ident #ty_generics #where_clause {
            fn prop(
                &self,
                name: &str,
            ) -> ::core::result::Result<
                ::core::option::Option<::stimulus_wiring::__private::serde_json::Value>,
                ::stimulus_wiring::BoxError,
            > {
                match name {
                    #( #arms )*
                    _ => ::core::result::Result::Ok(::core::option::Option::None),
                }
            }

            #element_id

            fn scope_path(&self) -> ::core::option::Option<&str> {
                ::core::option::Option::Some(#scope)
            }
        }
    }
}

//! Unit tests for parsing and generating the `Component` implementation.

use crate::derive::{default_scope, expand, generate_impl, parse_input};
use anyhow::{Context, Result, anyhow, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote, parse_str};

#[rstest]
#[case("GreeterComponent", "greeter_component")]
#[case("Row", "row")]
#[case("HTTPPanel", "http_panel")]
fn default_scope_is_snake_case(#[case] ident: &str, #[case] expected: &str) -> Result<()> {
    let ident = parse_str(ident).context("parse ident")?;
    ensure!(default_scope(&ident) == expected);
    Ok(())
}

#[rstest]
fn parse_input_collects_props_and_id() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[stimulus(scope = "admin/user_row")]
        struct UserRow {
            #[stimulus(id)]
            id: Option<String>,
            name: String,
            #[stimulus(skip)]
            secret: String,
            r#type: String,
        }
    };
    let parsed = parse_input(&input).map_err(|e| anyhow!(e.to_string()))?;
    ensure!(parsed.scope == "admin/user_row");
    ensure!(
        parsed
            .id_field
            .as_ref()
            .is_some_and(|ident| ident == "id")
    );
    let names: Vec<_> = parsed.props.iter().map(|p| p.name.as_str()).collect();
    ensure!(names == ["id", "name", "type"], "unexpected props: {names:?}");
    Ok(())
}

#[rstest]
fn parse_input_defaults_scope_to_struct_name() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct SearchBox {
            query: String,
        }
    };
    let parsed = parse_input(&input).map_err(|e| anyhow!(e.to_string()))?;
    ensure!(parsed.scope == "search_box");
    ensure!(parsed.id_field.is_none());
    Ok(())
}

#[rstest]
#[case::enum_input(parse_quote! { enum Choice { A, B } }, "only be derived for structs")]
#[case::tuple_struct(parse_quote! { struct Pair(String, String); }, "named fields")]
#[case::unit_struct(parse_quote! { struct Marker; }, "named fields")]
#[case::unknown_struct_key(
    parse_quote! {
        #[stimulus(prefix = "x")]
        struct Panel { title: String }
    },
    "unsupported stimulus attribute"
)]
#[case::unknown_field_key(
    parse_quote! {
        struct Panel {
            #[stimulus(rename = "x")]
            title: String,
        }
    },
    "unsupported stimulus field attribute"
)]
#[case::duplicate_id(
    parse_quote! {
        struct Panel {
            #[stimulus(id)]
            a: String,
            #[stimulus(id)]
            b: String,
        }
    },
    "only one field"
)]
fn parse_input_rejects_invalid_input(
    #[case] input: DeriveInput,
    #[case] fragment: &str,
) -> Result<()> {
    let Err(err) = parse_input(&input) else {
        return Err(anyhow!("expected parse error"));
    };
    let message = err.to_string();
    ensure!(message.contains(fragment), "unexpected error: {message}");
    Ok(())
}

#[rstest]
fn generate_impl_without_id_field() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Panel {
            title: String,
        }
    };
    let parsed = parse_input(&input).map_err(|e| anyhow!(e.to_string()))?;
    let tokens = generate_impl(&parsed);
    let expected = quote! {
        impl ::stimulus_wiring::Component for Panel {
            fn prop(
                &self,
                name: &str,
            ) -> ::core::result::Result<
                ::core::option::Option<::stimulus_wiring::__private::serde_json::Value>,
                ::stimulus_wiring::BoxError,
            > {
                match name {
                    "title" => ::stimulus_wiring::__private::to_prop(&self.title),
                    _ => ::core::result::Result::Ok(::core::option::Option::None),
                }
            }

            fn scope_path(&self) -> ::core::option::Option<&str> {
                ::core::option::Option::Some("panel")
            }
        }
    };
    ensure!(
        tokens.to_string() == expected.to_string(),
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn generate_impl_keeps_generics_and_id_accessor() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Card<T: Clone> {
            #[stimulus(id)]
            dom_id: String,
            body: T,
        }
    };
    let tokens = expand(&input).map_err(|e| anyhow!(e.to_string()))?.to_string();
    ensure!(
        tokens.contains(
            &quote! {
                impl<T: Clone> ::stimulus_wiring::Component for Card<T>
                where
                    String: ::stimulus_wiring::__private::Serialize,
                    T: ::stimulus_wiring::__private::Serialize
            }
            .to_string()
        ),
        "generics or serialize bounds missing: {tokens}"
    );
    ensure!(
        tokens.contains(
            &quote! {
                ::stimulus_wiring::__private::ElementIdField::as_element_id(&self.dom_id)
            }
            .to_string()
        ),
        "id accessor missing: {tokens}"
    );
    Ok(())
}

#[rstest]
fn skipped_fields_add_no_serialize_bound() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Holder<T, U> where U: Default {
            #[stimulus(skip)]
            inner: T,
            label: U,
        }
    };
    let tokens = expand(&input).map_err(|e| anyhow!(e.to_string()))?.to_string();
    let expected = quote! {
        where
            U: Default,
            U: ::stimulus_wiring::__private::Serialize
    }
    .to_string();
    ensure!(tokens.contains(&expected), "unexpected where clause: {tokens}");
    ensure!(
        !tokens.contains(&quote! { T: ::stimulus_wiring::__private::Serialize }.to_string()),
        "skipped field was bounded: {tokens}"
    );
    Ok(())
}

//! Tests for `#[derive(Component)]` as seen by resolution.

use std::collections::HashMap;

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde::Serialize;
use serde_json::json;
use stimulus_wiring::{BoxError, Component, DeclarationRegistry, ReferenceContext};

#[derive(Serialize, Component)]
#[stimulus(scope = "admin/user_row_component")]
struct UserRow {
    #[stimulus(id)]
    dom_id: Option<String>,
    name: String,
    tags: Vec<String>,
    #[stimulus(skip)]
    password: String,
}

#[derive(Serialize, Component)]
struct SearchBox {
    #[stimulus(id)]
    id: String,
    r#type: String,
}

#[derive(Serialize, Component)]
#[stimulus(scope = "panels/wrapper")]
struct Wrapper<T> {
    body: T,
    #[stimulus(skip)]
    cache: std::marker::PhantomData<fn() -> T>,
}

#[derive(Serialize, Component)]
struct Grid {
    cells: HashMap<(i32, i32), i32>,
}

fn read(component: &dyn Component, name: &str) -> Result<Option<serde_json::Value>> {
    component.prop(name).map_err(|e: BoxError| anyhow!(e.to_string()))
}

fn user_row() -> UserRow {
    UserRow {
        dom_id: Some("row-7".into()),
        name: "Ada".into(),
        tags: vec!["admin".into(), "ops".into()],
        password: "hunter2".into(),
    }
}

#[rstest]
#[case("name", Some(json!("Ada")))]
#[case("tags", Some(json!(["admin", "ops"])))]
#[case("dom_id", Some(json!("row-7")))]
#[case("password", None)]
#[case("unknown", None)]
fn props_serialize_fields(#[case] name: &str, #[case] expected: Option<serde_json::Value>) -> Result<()> {
    let row = user_row();
    ensure!(read(&row, name)? == expected, "prop {name} mismatch");
    Ok(())
}

#[rstest]
fn derived_context_carries_scope_and_id() -> Result<()> {
    let ctx = user_row().reference_context();
    ensure!(
        ctx == ReferenceContext::with_scope("admin/user_row_component").element_id("row-7")
    );
    ensure!(ctx.implied_identifier().as_deref() == Some("admin--user-row-component"));
    Ok(())
}

#[rstest]
fn scope_defaults_to_snake_case_struct_name() -> Result<()> {
    let search = SearchBox {
        id: String::new(),
        r#type: "search".into(),
    };
    ensure!(search.scope_path() == Some("search_box"));
    ensure!(search.element_id().is_none(), "empty ids count as unset");
    ensure!(read(&search, "type")? == Some(json!("search")));
    Ok(())
}

#[rstest]
fn generic_structs_expose_serializable_fields() -> Result<()> {
    let wrapper = Wrapper {
        body: vec![1, 2, 3],
        cache: std::marker::PhantomData,
    };
    ensure!(read(&wrapper, "body")? == Some(json!([1, 2, 3])));
    ensure!(read(&wrapper, "cache")?.is_none());
    ensure!(wrapper.scope_path() == Some("panels/wrapper"));
    Ok(())
}

#[rstest]
fn unserializable_fields_are_errors_not_missing_props() -> Result<()> {
    let grid = Grid {
        cells: HashMap::from([((0, 0), 1)]),
    };
    ensure!(grid.prop("cells").is_err(), "defined field must not read as absent");
    ensure!(read(&grid, "rows")?.is_none());

    let mut registry = DeclarationRegistry::new();
    registry.define("Grid", None)?;
    registry.declare("Grid")?.declare_values_from_props(["cells"]);
    ensure!(registry.resolve_attributes("Grid", &grid).is_err());
    Ok(())
}

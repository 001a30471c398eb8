//! Unit tests for data attribute and class list assembly.

use std::sync::Arc;

use rstest::rstest;
use serde_json::json;

use super::{ClassConflictResolver, ClassListAssembler, ClassSource, DataAttributeAssembler, NamedClasses};
use crate::StimulusError;
use crate::args::StimulusArg;
use crate::collection::AttributeCollection;
use crate::reference::{AttributeReference, ClassRef, ReferenceContext, ValueRef};
use crate::settings::RenderSettings;

#[rstest]
#[case(json!(["btn  primary", ["", null, "large"], "   "]), Some("btn primary large"))]
#[case(json!(["", [], null, "  "]), None)]
#[case(json!(["btn primary large", "btn small primary"]), Some("btn primary large small"))]
#[case(json!([["a", ["b", ["a c"]]], 7]), Some("a b c 7"))]
fn builds_class_strings(#[case] sources: serde_json::Value, #[case] expected: Option<&str>) {
    let built = ClassListAssembler::new().build(&[ClassSource::from(sources)]);
    assert_eq!(built.as_deref(), expected);
}

#[test]
fn named_groups_require_allow_listing() {
    let sources = [
        ClassSource::from("card"),
        ClassSource::from(NamedClasses::new("error", "border-red")),
        ClassSource::from(NamedClasses::new("loading", "opacity-50 card")),
    ];
    let assembler = ClassListAssembler::new();
    assert_eq!(
        assembler.build_allowing(&sources, &["loading"]).as_deref(),
        Some("card opacity-50")
    );
    assert_eq!(assembler.build(&sources).as_deref(), Some("card"));
}

#[test]
fn class_references_act_as_named_groups() {
    let ctx = ReferenceContext::with_scope("uploader");
    let class = ClassRef::parse(
        &[StimulusArg::symbol("is_busy"), StimulusArg::text("animate-pulse")],
        &ctx,
    )
    .expect("class parses");
    let sources = [ClassSource::from(&class)];
    let built = ClassListAssembler::new().build_allowing(&sources, &["is_busy"]);
    assert_eq!(built.as_deref(), Some("animate-pulse"));
}

#[test]
fn resolver_output_is_returned_verbatim() {
    let assembler = ClassListAssembler::with_resolver(|classes: &str| {
        classes.replace("p-2 p-4", "p-4")
    });
    assert!(assembler.resolves_conflicts());
    let built = assembler.build(&[ClassSource::from("p-2 p-4")]);
    assert_eq!(built.as_deref(), Some("p-4"));
}

#[test]
fn resolver_is_skipped_when_nothing_remains() {
    let assembler = ClassListAssembler::with_resolver(|_: &str| String::from("always"));
    assert_eq!(assembler.build(&[ClassSource::Nil]), None);
}

#[test]
fn settings_without_resolver_fail_at_construction() {
    let settings = RenderSettings {
        resolve_class_conflicts: true,
        ..RenderSettings::default()
    };
    let err = ClassListAssembler::from_settings(&settings, None).expect_err("missing resolver");
    assert!(matches!(err, StimulusError::MissingDependency { .. }));

    let resolver: Arc<dyn ClassConflictResolver> = Arc::new(|c: &str| c.to_owned());
    let assembler =
        ClassListAssembler::from_settings(&settings, Some(resolver)).expect("resolver supplied");
    assert!(assembler.resolves_conflicts());
}

#[test]
fn disabled_settings_ignore_resolver() {
    let assembler = ClassListAssembler::from_settings(&RenderSettings::default(), None)
        .expect("no resolver needed");
    assert!(!assembler.resolves_conflicts());
}

#[test]
fn assembler_combines_variants_and_drops_blanks() {
    let ctx = ReferenceContext::with_scope("card");
    let values: AttributeCollection<ValueRef> = AttributeCollection::parse_all(
        [
            ("title", StimulusArg::text("Hello")),
            ("empty", StimulusArg::Data(json!(null))),
        ],
        &ctx,
    )
    .expect("values parse");
    let controllers = AttributeCollection::parse_all([crate::args::ReferenceArgs::new()], &ctx)
        .expect("controller parses");

    let data = DataAttributeAssembler::assemble(
        &controllers,
        &AttributeCollection::new(),
        &AttributeCollection::new(),
        &AttributeCollection::new(),
        &values,
        &AttributeCollection::new(),
    );

    assert_eq!(
        data.iter().collect::<Vec<_>>(),
        vec![("controller", "card"), ("card-title-value", "Hello")]
    );
    assert_eq!(
        data.to_html_attributes().first().map(|(k, _)| k.as_str()),
        Some("data-controller")
    );
}

//! Unit tests for error construction and display.

use rstest::rstest;
use serde_json::json;

use super::StimulusError;
use crate::args::StimulusArg;
use crate::reference::ReferenceKind;

#[rstest]
#[case(StimulusArg::symbol("greet"), "Symbol")]
#[case(StimulusArg::text("greet"), "String")]
#[case(StimulusArg::Data(json!(null)), "Null")]
#[case(StimulusArg::Data(json!(true)), "Boolean")]
#[case(StimulusArg::Data(json!(4)), "Number")]
#[case(StimulusArg::Data(json!([1])), "Array")]
#[case(StimulusArg::Data(json!({"a": 1})), "Object")]
fn argument_type_reports_runtime_type(#[case] arg: StimulusArg, #[case] expected: &str) {
    let err = StimulusError::argument_type(ReferenceKind::Target, 1, &arg);
    match err {
        StimulusError::InvalidArgumentType {
            kind,
            position,
            found,
        } => {
            assert_eq!(kind, ReferenceKind::Target);
            assert_eq!(position, 2, "positions are reported 1-based");
            assert_eq!(found, expected);
        }
        other => panic!("expected InvalidArgumentType, got {other:?}"),
    }
}

#[test]
fn display_names_the_variant() {
    let err = StimulusError::missing_scope(ReferenceKind::Outlet);
    assert_eq!(
        err.to_string(),
        "Outlet reference requires an implied scope but none is established"
    );
}

#[test]
fn missing_dependency_names_the_collaborator() {
    let err = StimulusError::missing_dependency("class conflict resolver");
    assert!(matches!(
        &err,
        StimulusError::MissingDependency { dependency } if dependency == "class conflict resolver"
    ));
    assert_eq!(err.to_string(), "missing dependency: class conflict resolver");
}

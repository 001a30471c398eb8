//! Layered composition and element attribute assembly.

use std::sync::Arc;

use anyhow::{Result, ensure};
use rstest::rstest;
use stimulus_wiring::{
    ActionRef, AttributeCollection, AttributeReference, ClassConflictResolver, ClassListAssembler,
    ClassRef,
    ClassSource, ControllerRef, ElementAttributes, ElementIdGenerator, ReferenceContext,
    RenderSettings, StimulusArg, StimulusWiring, ValueRef, WiringComposer, WiringProvenance,
};

fn ctx() -> ReferenceContext {
    ReferenceContext::with_scope("toasts/toast_component")
}

#[rstest]
fn later_layers_override_values_and_extend_actions() -> Result<()> {
    let ctx = ctx();
    let declared = StimulusWiring {
        controllers: AttributeCollection::new().append(ControllerRef::parse(&[], &ctx)?),
        actions: AttributeCollection::parse_all(["dismiss"], &ctx)?,
        values: AttributeCollection::parse_all([("timeout", StimulusArg::from(3000_i64))], &ctx)?,
        ..StimulusWiring::new()
    };
    let instance = StimulusWiring {
        values: AttributeCollection::parse_all([("timeout", StimulusArg::from(5000_i64))], &ctx)?,
        ..StimulusWiring::new()
    };
    let render_site = StimulusWiring {
        actions: AttributeCollection::new().append(ActionRef::parse(
            &[StimulusArg::from("keydown.esc"), StimulusArg::from("dismiss")],
            &ctx,
        )?),
        controllers: AttributeCollection::parse_all(["tooltip"], &ctx)?,
        ..StimulusWiring::new()
    };

    let mut composer = WiringComposer::new();
    composer.push_declared(declared);
    composer.push_instance(instance);
    composer.push_render_site(render_site);
    let provenance: Vec<_> = composer.layers().iter().map(|l| l.provenance()).collect();
    ensure!(
        provenance
            == [
                WiringProvenance::Declared,
                WiringProvenance::Instance,
                WiringProvenance::RenderSite
            ]
    );

    let data = composer.compose().to_data_attributes();
    ensure!(data.get("controller") == Some("toasts--toast-component tooltip"));
    ensure!(
        data.get("action")
            == Some("toasts--toast-component#dismiss keydown.esc->toasts--toast-component#dismiss")
    );
    ensure!(data.get("toasts--toast-component-timeout-value") == Some("5000"));
    Ok(())
}

#[rstest]
fn element_attributes_filter_class_groups() -> Result<()> {
    let ctx = ctx();
    let wiring = StimulusWiring {
        classes: AttributeCollection::new()
            .append(ClassRef::parse(&["hidden_state".into(), "opacity-0".into()], &ctx)?)
            .append(ClassRef::parse(&["loading".into(), "animate-spin".into()], &ctx)?),
        values: AttributeCollection::new().append(ValueRef::parse(
            &["note".into(), StimulusArg::from(serde_json::Value::Null)],
            &ctx,
        )?),
        ..StimulusWiring::new()
    };
    let element = ElementAttributes::assemble(
        &wiring,
        &[ClassSource::from("toast  toast"), ClassSource::from(None::<&str>)],
        &["hidden-state"],
        &ClassListAssembler::new(),
        Some("toast-1".into()),
    );

    ensure!(element.class.as_deref() == Some("toast opacity-0"));
    ensure!(element.data.get("toasts--toast-component-note-value").is_none());
    ensure!(
        element.data.get("toasts--toast-component-hidden-state-class") == Some("opacity-0")
    );
    let html = element.to_html_attributes();
    ensure!(html.first() == Some(&("id".to_owned(), "toast-1".to_owned())));
    ensure!(html.get(1) == Some(&("class".to_owned(), "toast opacity-0".to_owned())));
    ensure!(!html.iter().any(|(name, _)| name == "data-controller"));
    Ok(())
}

#[rstest]
fn settings_drive_ids_and_class_resolution() -> Result<()> {
    let settings = RenderSettings::from_value(serde_json::json!({
        "resolve_class_conflicts": true,
        "element_id_prefix": "toast",
        "id_strategy": "sequential",
    }))?;
    let mut ids = ElementIdGenerator::from_settings(&settings);
    ensure!(ids.id_for(Some("given")) == "given");
    ensure!(ids.next_id() == "toast-0");
    ensure!(ids.id_for(None) == "toast-1");

    ensure!(ClassListAssembler::from_settings(&settings, None).is_err());
    let resolver: Arc<dyn ClassConflictResolver> =
        Arc::new(|classes: &str| classes.replace("p-2 p-4", "p-4"));
    let assembler = ClassListAssembler::from_settings(&settings, Some(resolver))?;
    ensure!(assembler.build(&[ClassSource::from("p-2 p-4")]).as_deref() == Some("p-4"));
    Ok(())
}

//! Stimulus `data-*` attribute wiring for server-rendered components.
//!
//! Components declare which Stimulus controllers, actions, targets, outlets,
//! values and CSS classes apply to their elements. This crate resolves those
//! declarations, across inheritance, class-level declaration blocks and
//! per-render overrides, into a deterministic map of attribute names to
//! values plus a deduplicated class string.
//!
//! The pieces, leaf first:
//!
//! - [`naming`] converts paths into controller identifiers.
//! - [`reference`] holds the six immutable reference variants.
//! - [`AttributeCollection`] merges references and flattens them to maps.
//! - [`DataAttributeAssembler`] and [`ClassListAssembler`] produce the final
//!   attribute values.
//! - [`DeclarationBuilder`] and [`DeclarationRegistry`] accumulate the
//!   declarative wiring of component types.
//!
//! ```
//! use serde::Serialize;
//! use stimulus_wiring::{
//!     ClassListAssembler, ClassSource, Component, DeclarationRegistry, ElementAttributes,
//!     StimulusWiring, WiringComposer,
//! };
//!
//! #[derive(Serialize, Component)]
//! #[stimulus(scope = "greeters/greeter_component")]
//! struct Greeter {
//!     name: String,
//! }
//!
//! let mut registry = DeclarationRegistry::new();
//! registry.define("Greeter", None)?;
//! registry
//!     .declare("Greeter")?
//!     .declare_actions([("click", "greet")])
//!     .declare_values_from_props(["name"]);
//! let registry = registry.seal()?;
//!
//! let greeter = Greeter { name: "Ada".into() };
//! let ctx = greeter.reference_context();
//! let resolved = registry.resolve_attributes("Greeter", &greeter)?;
//!
//! let mut composer = WiringComposer::new();
//! composer.push_declared(StimulusWiring::from_declarations(&resolved, &ctx)?);
//! let element = ElementAttributes::assemble(
//!     &composer.compose(),
//!     &[ClassSource::from("greeting")],
//!     &[] as &[&str],
//!     &ClassListAssembler::new(),
//!     None,
//! );
//!
//! assert_eq!(element.class.as_deref(), Some("greeting"));
//! assert_eq!(element.data.get("controller"), Some("greeters--greeter-component"));
//! assert_eq!(
//!     element.data.get("action"),
//!     Some("click->greeters--greeter-component#greet")
//! );
//! assert_eq!(element.data.get("greeters--greeter-component-name-value"), Some("Ada"));
//! # Ok::<_, Box<dyn std::error::Error + Send + Sync>>(())
//! ```

pub use stimulus_wiring_macros::Component;

pub mod args;
mod assemble;
pub mod collection;
pub mod component;
pub mod declarative;
mod element;
pub mod element_id;
mod error;
pub mod naming;
pub mod reference;
mod settings;
pub mod wiring;

pub use args::{ReferenceArgs, StimulusArg};
pub use assemble::{
    ClassConflictResolver, ClassListAssembler, ClassSource, DataAttributeAssembler,
    DataAttributes, NamedClasses,
};
pub use collection::{AnyCollection, AttributeCollection};
pub use component::Component;
#[doc(hidden)]
pub use component::__private;
pub use declarative::{
    DeclarationBuilder, DeclarationRegistry, DeclaredValue, DeferredFn, ResolvedDeclarations,
    SealedRegistry,
};
pub use element::ElementAttributes;
pub use element_id::{ElementIdGenerator, IdSequence, RandomIds, SequentialIds};
pub use error::{BoxError, StimulusError, StimulusResult};
pub use reference::{
    ActionRef, Aggregation, AttributeReference, ClassRef, ControllerRef, OutletRef,
    ReferenceContext, ReferenceKind, TargetRef, ValueRef,
};
pub use settings::{IdStrategy, RenderSettings};
pub use wiring::{StimulusWiring, WiringComposer, WiringLayer, WiringProvenance};

//! Class-level declarations: the authoring DSL behind component wiring.
//!
//! A [`DeclarationBuilder`] accumulates the actions, targets, values, classes
//! and outlets a component type declares. Builders are owned by a
//! [`DeclarationRegistry`], which records each type's parent and merges the
//! parent's declarations into the child exactly once, before the child is
//! first read or extended. Values, classes and outlets may be
//! [`DeclaredValue::Deferred`], in which case they are evaluated against the
//! rendering instance by [`DeclarationBuilder::to_resolved_attributes`].
//!
//! ```
//! use serde_json::json;
//! use stimulus_wiring::{DeclarationRegistry, DeclaredValue};
//!
//! let mut registry = DeclarationRegistry::new();
//! registry.define("Base", None)?;
//! registry.define("Child", Some("Base"))?;
//! registry.declare("Base")?.declare_actions(["click"]);
//! registry
//!     .declare("Child")?
//!     .declare_actions(["submit"])
//!     .declare_values([("shared", DeclaredValue::from("child"))]);
//!
//! let child = registry.builder("Child")?;
//! assert_eq!(child.actions().len(), 2);
//! assert_eq!(child.values().get("shared").and_then(DeclaredValue::as_literal), Some(&json!("child")));
//! # Ok::<_, stimulus_wiring::StimulusError>(())
//! ```

mod builder;
mod deferred;
mod registry;
mod resolved;

pub use builder::DeclarationBuilder;
pub use deferred::{DeclaredValue, DeferredFn};
pub use registry::{DeclarationRegistry, SealedRegistry};
pub use resolved::ResolvedDeclarations;

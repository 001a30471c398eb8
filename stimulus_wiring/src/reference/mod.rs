//! Immutable Stimulus references and their argument dispatch.
//!
//! Each reference records one wiring fact (a controller, an action, a target,
//! an outlet, a value or a CSS class) and knows the `data-*` attribute it
//! contributes. References are built from positional [`StimulusArg`]s: the
//! argument count and the shape of each argument select which fields are
//! populated, falling back to the implied scope carried by a
//! [`ReferenceContext`] when no scope is named explicitly.
//!
//! ```
//! use stimulus_wiring::{ActionRef, AttributeReference, ReferenceContext, StimulusArg};
//!
//! let ctx = ReferenceContext::with_scope("greeters/greeter_component");
//! let action = ActionRef::parse(&[StimulusArg::symbol("greet")], &ctx)?;
//! assert_eq!(action.to_canonical_string(), "greeters--greeter-component#greet");
//! # Ok::<_, stimulus_wiring::StimulusError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::args::StimulusArg;
use crate::collection::{AnyCollection, AttributeCollection};
use crate::naming::stimulize;
use crate::{StimulusError, StimulusResult};

mod action;
mod class;
mod controller;
mod outlet;
mod target;
mod value;

pub use action::ActionRef;
pub use class::ClassRef;
pub use controller::ControllerRef;
pub use outlet::OutletRef;
pub use target::TargetRef;
pub use value::{ValueRef, serialize_value};

/// The six reference variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// `data-controller`.
    Controller,
    /// `data-action`.
    Action,
    /// `data-<scope>-target`.
    Target,
    /// `data-<scope>-<name>-outlet`.
    Outlet,
    /// `data-<scope>-<name>-value`.
    Value,
    /// `data-<scope>-<name>-class`.
    Class,
}

impl ReferenceKind {
    /// How references of this kind combine when they share an attribute key.
    #[must_use]
    pub const fn aggregation(self) -> Aggregation {
        match self {
            Self::Controller | Self::Action | Self::Target => Aggregation::Concatenate,
            Self::Outlet | Self::Value | Self::Class => Aggregation::Override,
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Controller => "Controller",
            Self::Action => "Action",
            Self::Target => "Target",
            Self::Outlet => "Outlet",
            Self::Value => "Value",
            Self::Class => "Class",
        };
        f.write_str(name)
    }
}

/// Aggregation rule applied when converting a collection into a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregation {
    /// Values sharing a key are space-joined in append order.
    Concatenate,
    /// The last reference with a given key wins.
    Override,
}

/// Scope and element information used while parsing references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceContext {
    implied_scope: Option<String>,
    element_id: Option<String>,
}

impl ReferenceContext {
    /// A context with neither an implied scope nor an element id.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            implied_scope: None,
            element_id: None,
        }
    }

    /// A context whose implied scope is the owner's scope path, such as
    /// `greeters/greeter_component`.
    #[must_use]
    pub fn with_scope(scope_path: impl Into<String>) -> Self {
        Self {
            implied_scope: Some(scope_path.into()),
            element_id: None,
        }
    }

    /// Attach the owning element's id, used to prefix outlet selectors.
    #[must_use]
    pub fn element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Replace the element id with an optional value.
    #[must_use]
    pub fn with_element_id(mut self, id: Option<String>) -> Self {
        self.element_id = id;
        self
    }

    /// The owner scope path, if established.
    #[must_use]
    pub fn implied_scope(&self) -> Option<&str> {
        self.implied_scope.as_deref()
    }

    /// The owning element id, if known.
    #[must_use]
    pub fn owner_element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// The implied scope converted to a controller identifier.
    #[must_use]
    pub fn implied_identifier(&self) -> Option<String> {
        self.implied_scope.as_deref().map(stimulize)
    }
}

/// Behaviour shared by all reference variants.
pub trait AttributeReference: Clone + fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    /// The variant implemented by this type.
    const KIND: ReferenceKind;

    /// Parse positional arguments into a reference.
    ///
    /// # Errors
    ///
    /// Returns [`StimulusError::InvalidArgumentCount`],
    /// [`StimulusError::InvalidArgumentType`] or
    /// [`StimulusError::MissingImpliedScope`] when the arguments do not match
    /// a supported form.
    fn parse(args: &[StimulusArg], ctx: &ReferenceContext) -> StimulusResult<Self>;

    /// The `data-*` attribute key without the `data-` prefix.
    fn data_attribute_key(&self) -> String;

    /// The attribute value contributed by this reference.
    fn data_attribute_value(&self) -> String;

    /// Select the collection of this variant from an erased collection.
    fn downcast_collection(any: &AnyCollection) -> Option<&AttributeCollection<Self>>;

    /// The Stimulus descriptor for this reference.
    fn to_canonical_string(&self) -> String {
        self.data_attribute_value()
    }

    /// The `(key, value)` attribute pair.
    fn to_attribute_pair(&self) -> (String, String) {
        (self.data_attribute_key(), self.data_attribute_value())
    }
}

/// Positional arguments paired with the variant and context they are parsed
/// for.
pub(crate) struct Arguments<'a> {
    kind: ReferenceKind,
    args: &'a [StimulusArg],
    ctx: &'a ReferenceContext,
}

impl<'a> Arguments<'a> {
    /// Wrap `args`, failing fast when no arguments were given and no scope can
    /// be implied.
    pub(crate) fn new(
        kind: ReferenceKind,
        args: &'a [StimulusArg],
        ctx: &'a ReferenceContext,
    ) -> StimulusResult<Self> {
        if args.is_empty() && ctx.implied_scope.is_none() {
            return Err(StimulusError::missing_scope(kind));
        }
        tracing::trace!(kind = %kind, count = args.len(), "parsing reference");
        Ok(Self { kind, args, ctx })
    }

    pub(crate) const fn as_slice(&self) -> &'a [StimulusArg] {
        self.args
    }

    pub(crate) const fn context(&self) -> &'a ReferenceContext {
        self.ctx
    }

    /// The identifier at zero-based `index`.
    pub(crate) fn identifier(&self, index: usize) -> StimulusResult<&'a str> {
        let arg = self
            .args
            .get(index)
            .ok_or_else(|| self.count_error())?;
        arg.as_identifier()
            .ok_or_else(|| StimulusError::argument_type(self.kind, index, arg))
    }

    /// The argument at zero-based `index`.
    pub(crate) fn arg(&self, index: usize) -> StimulusResult<&'a StimulusArg> {
        self.args.get(index).ok_or_else(|| self.count_error())
    }

    /// The explicit scope path at `index`, converted to an identifier.
    pub(crate) fn scope_at(&self, index: usize) -> StimulusResult<String> {
        self.identifier(index).map(stimulize)
    }

    /// The implied scope as an identifier.
    pub(crate) fn implied_scope(&self) -> StimulusResult<String> {
        self.ctx
            .implied_identifier()
            .ok_or_else(|| StimulusError::missing_scope(self.kind))
    }

    pub(crate) const fn type_error(&self, index: usize, arg: &StimulusArg) -> StimulusError {
        StimulusError::argument_type(self.kind, index, arg)
    }

    pub(crate) const fn count_error(&self) -> StimulusError {
        StimulusError::argument_count(self.kind, self.args.len())
    }
}

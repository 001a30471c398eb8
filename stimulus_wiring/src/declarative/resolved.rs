//! Declarations evaluated for one instance.

use indexmap::IndexMap;
use serde_json::Value;

use crate::StimulusResult;
use crate::args::{ReferenceArgs, StimulusArg};
use crate::collection::AttributeCollection;
use crate::reference::{
    ActionRef, AttributeReference, ClassRef, OutletRef, ReferenceContext, TargetRef, ValueRef,
};

/// Declarations with every deferred entry evaluated, ready to be parsed into
/// collections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedDeclarations {
    /// Action argument lists, parents first.
    pub actions: Vec<ReferenceArgs>,
    /// Target argument lists, parents first.
    pub targets: Vec<ReferenceArgs>,
    /// Value names to values, explicit values overriding prop-mapped ones.
    pub values: IndexMap<String, Value>,
    /// Class group names to class lists.
    pub classes: IndexMap<String, Value>,
    /// Outlet names to selectors; null selects the default selector.
    pub outlets: IndexMap<String, Value>,
}

impl ResolvedDeclarations {
    /// Parse the action declarations.
    ///
    /// # Errors
    ///
    /// Propagates the first reference parse failure.
    pub fn action_collection(
        &self,
        ctx: &ReferenceContext,
    ) -> StimulusResult<AttributeCollection<ActionRef>> {
        AttributeCollection::parse_all(self.actions.iter().cloned(), ctx)
    }

    /// Parse the target declarations.
    ///
    /// # Errors
    ///
    /// Propagates the first reference parse failure.
    pub fn target_collection(
        &self,
        ctx: &ReferenceContext,
    ) -> StimulusResult<AttributeCollection<TargetRef>> {
        AttributeCollection::parse_all(self.targets.iter().cloned(), ctx)
    }

    /// Build value references on the implied scope.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::StimulusError::MissingImpliedScope`] when `ctx`
    /// has no implied scope.
    pub fn value_collection(
        &self,
        ctx: &ReferenceContext,
    ) -> StimulusResult<AttributeCollection<ValueRef>> {
        named_collection(&self.values, ctx, |value| StimulusArg::Data(value.clone()))
    }

    /// Build class references on the implied scope.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::StimulusError::MissingImpliedScope`] when `ctx`
    /// has no implied scope.
    pub fn class_collection(
        &self,
        ctx: &ReferenceContext,
    ) -> StimulusResult<AttributeCollection<ClassRef>> {
        named_collection(&self.classes, ctx, |classes| StimulusArg::Data(classes.clone()))
    }

    /// Build outlet references on the implied scope.
    ///
    /// # Errors
    ///
    /// Fails when `ctx` has no implied scope or a selector is neither a
    /// string nor null.
    pub fn outlet_collection(
        &self,
        ctx: &ReferenceContext,
    ) -> StimulusResult<AttributeCollection<OutletRef>> {
        named_collection(&self.outlets, ctx, |selector| match selector {
            Value::String(selector) => StimulusArg::Text(selector.clone()),
            other => StimulusArg::Data(other.clone()),
        })
    }
}

fn named_collection<R, F>(
    entries: &IndexMap<String, Value>,
    ctx: &ReferenceContext,
    to_arg: F,
) -> StimulusResult<AttributeCollection<R>>
where
    R: AttributeReference,
    F: Fn(&Value) -> StimulusArg,
{
    entries
        .iter()
        .map(|(name, value)| R::parse(&[StimulusArg::symbol(name.as_str()), to_arg(value)], ctx))
        .collect()
}

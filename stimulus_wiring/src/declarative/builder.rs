//! Per-type accumulator for declared wiring.

use indexmap::IndexMap;

use super::{DeclaredValue, ResolvedDeclarations};
use crate::args::ReferenceArgs;
use crate::component::Component;
use crate::error::BoxError;

/// Declarations accumulated for one component type.
///
/// Lists concatenate across calls; maps merge with later keys overriding
/// earlier ones. Inheritance is merged once by
/// [`DeclarationBuilder::resolve_inheritance`], normally driven by the
/// [`super::DeclarationRegistry`].
#[derive(Clone, Debug, Default)]
pub struct DeclarationBuilder {
    actions: Vec<ReferenceArgs>,
    targets: Vec<ReferenceArgs>,
    values: IndexMap<String, DeclaredValue>,
    values_from_props: Vec<String>,
    classes: IndexMap<String, DeclaredValue>,
    outlets: IndexMap<String, DeclaredValue>,
    inheritance_resolved: bool,
}

impl DeclarationBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append action declarations. Each entry is the argument list of one
    /// action reference.
    pub fn declare_actions<I, A>(&mut self, actions: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ReferenceArgs>,
    {
        self.actions.extend(actions.into_iter().map(Into::into));
        self
    }

    /// Append target declarations.
    pub fn declare_targets<I, A>(&mut self, targets: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ReferenceArgs>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    /// Declare outlets by name. A null selector requests the default one.
    pub fn declare_outlets<I, K, V>(&mut self, outlets: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DeclaredValue>,
    {
        extend_map(&mut self.outlets, outlets);
        self
    }

    /// Declare values; later declarations of a name override earlier ones.
    pub fn declare_values<I, K, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DeclaredValue>,
    {
        extend_map(&mut self.values, values);
        self
    }

    /// Map instance properties to values of the same name.
    pub fn declare_values_from_props<I, S>(&mut self, props: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values_from_props
            .extend(props.into_iter().map(Into::into));
        self
    }

    /// Declare class groups; later declarations of a name override earlier
    /// ones.
    pub fn declare_classes<I, K, V>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DeclaredValue>,
    {
        extend_map(&mut self.classes, classes);
        self
    }

    /// Merge `parent` beneath this builder's own declarations, once.
    ///
    /// Parent list entries are placed first; on map key collisions this
    /// builder's entries win. Subsequent calls are no-ops, as is a call with
    /// no parent (which still marks the builder resolved).
    pub fn resolve_inheritance(&mut self, parent: Option<&Self>) {
        if self.inheritance_resolved {
            return;
        }
        self.inheritance_resolved = true;
        let Some(base) = parent else {
            return;
        };
        prepend(&mut self.actions, &base.actions);
        prepend(&mut self.targets, &base.targets);
        prepend(&mut self.values_from_props, &base.values_from_props);
        underlay(&mut self.values, &base.values);
        underlay(&mut self.classes, &base.classes);
        underlay(&mut self.outlets, &base.outlets);
    }

    /// Whether inheritance has been merged.
    #[must_use]
    pub const fn is_inheritance_resolved(&self) -> bool {
        self.inheritance_resolved
    }

    /// Declared actions, in order.
    #[must_use]
    pub fn actions(&self) -> &[ReferenceArgs] {
        &self.actions
    }

    /// Declared targets, in order.
    #[must_use]
    pub fn targets(&self) -> &[ReferenceArgs] {
        &self.targets
    }

    /// Declared values.
    #[must_use]
    pub const fn values(&self) -> &IndexMap<String, DeclaredValue> {
        &self.values
    }

    /// Property names mapped to values.
    #[must_use]
    pub fn values_from_props(&self) -> &[String] {
        &self.values_from_props
    }

    /// Declared class groups.
    #[must_use]
    pub const fn classes(&self) -> &IndexMap<String, DeclaredValue> {
        &self.classes
    }

    /// Declared outlets.
    #[must_use]
    pub const fn outlets(&self) -> &IndexMap<String, DeclaredValue> {
        &self.outlets
    }

    /// Evaluate the declarations for `instance`.
    ///
    /// Prop-mapped values are read from the instance and skipped when the
    /// instance lacks the property; explicit values override prop-mapped ones
    /// of the same name. Deferred entries are invoked with `instance`.
    ///
    /// Inheritance is not merged here; builders handed out by the registry
    /// are already merged, and [`super::DeclarationRegistry::resolve_attributes`]
    /// runs the merge before evaluating.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while reading a prop-mapped property or
    /// by a deferred entry, unchanged.
    pub fn to_resolved_attributes(
        &self,
        instance: &dyn Component,
    ) -> Result<ResolvedDeclarations, BoxError> {
        let mut values = IndexMap::new();
        for prop in &self.values_from_props {
            if let Some(value) = instance.prop(prop)? {
                values.insert(prop.clone(), value);
            }
        }
        for (name, declared) in &self.values {
            values.insert(name.clone(), declared.resolve(instance)?);
        }
        Ok(ResolvedDeclarations {
            actions: self.actions.clone(),
            targets: self.targets.clone(),
            values,
            classes: resolve_map(&self.classes, instance)?,
            outlets: resolve_map(&self.outlets, instance)?,
        })
    }
}

fn extend_map<I, K, V>(map: &mut IndexMap<String, DeclaredValue>, entries: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<DeclaredValue>,
{
    map.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
}

fn prepend<T: Clone>(own: &mut Vec<T>, parent: &[T]) {
    let mut merged = parent.to_vec();
    merged.append(own);
    *own = merged;
}

fn underlay(own: &mut IndexMap<String, DeclaredValue>, parent: &IndexMap<String, DeclaredValue>) {
    let mut merged = parent.clone();
    merged.extend(own.drain(..));
    *own = merged;
}

fn resolve_map(
    map: &IndexMap<String, DeclaredValue>,
    instance: &dyn Component,
) -> Result<IndexMap<String, serde_json::Value>, BoxError> {
    map.iter()
        .map(|(name, declared)| Ok((name.clone(), declared.resolve(instance)?)))
        .collect()
}

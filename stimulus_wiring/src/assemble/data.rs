//! Combination of the six per-variant collections into one attribute map.

use indexmap::IndexMap;
use serde::Serialize;

use crate::collection::AttributeCollection;
use crate::reference::{ActionRef, ClassRef, ControllerRef, OutletRef, TargetRef, ValueRef};

/// Final map of `data-*` attribute names (without the `data-` prefix) to
/// values.
///
/// Entries appear in variant order (controllers, actions, targets, outlets,
/// values, classes) and, within a variant, in the order established by the
/// collection. No HTML escaping is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DataAttributes(IndexMap<String, String>);

impl DataAttributes {
    /// Look up the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no attributes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attribute pairs with their `data-` prefix, ready for rendering.
    #[must_use]
    pub fn to_html_attributes(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (format!("data-{k}"), v.clone()))
            .collect()
    }

    /// Consume the wrapper and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a DataAttributes {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Converts six collections into a [`DataAttributes`] map.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataAttributeAssembler;

impl DataAttributeAssembler {
    /// Flatten each collection with its aggregation rule and combine the
    /// results, dropping entries whose value is blank.
    ///
    /// Keys never collide across variants: controllers and actions use fixed
    /// keys and every other variant carries a kind-specific suffix.
    #[must_use]
    pub fn assemble(
        controllers: &AttributeCollection<ControllerRef>,
        actions: &AttributeCollection<ActionRef>,
        targets: &AttributeCollection<TargetRef>,
        outlets: &AttributeCollection<OutletRef>,
        values: &AttributeCollection<ValueRef>,
        classes: &AttributeCollection<ClassRef>,
    ) -> DataAttributes {
        let maps = [
            controllers.to_map(),
            actions.to_map(),
            targets.to_map(),
            outlets.to_map(),
            values.to_map(),
            classes.to_map(),
        ];
        DataAttributes(
            maps.into_iter()
                .flatten()
                .filter(|(_, value)| !value.trim().is_empty())
                .collect(),
        )
    }
}

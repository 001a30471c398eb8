//! `data-<scope>-<name>-value` references.

use serde_json::Value;

use super::{Arguments, AttributeReference, ReferenceContext, ReferenceKind};
use crate::StimulusResult;
use crate::args::StimulusArg;
use crate::collection::{AnyCollection, AttributeCollection};
use crate::naming::dasherize;

/// Serialize a value the way Stimulus value attributes expect.
///
/// Booleans and numbers use their literal text, strings pass through, lists
/// and maps become compact JSON, and null becomes the empty string.
///
/// ```
/// use serde_json::json;
/// use stimulus_wiring::reference::serialize_value;
///
/// assert_eq!(serialize_value(&json!(true)), "true");
/// assert_eq!(serialize_value(&json!([1, 2, 3])), "[1,2,3]");
/// assert_eq!(serialize_value(&json!(null)), "");
/// assert_eq!(serialize_value(&json!(42)), "42");
/// ```
#[must_use]
pub fn serialize_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// A typed value passed to a controller.
///
/// Accepted forms are `(name, value)` on the implied scope and
/// `(scope_path, name, value)`. Names are dash-cased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueRef {
    scope: String,
    name: String,
    value: Value,
}

impl ValueRef {
    /// The controller identifier owning the value.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The dash-cased value name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value before serialization.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

impl AttributeReference for ValueRef {
    const KIND: ReferenceKind = ReferenceKind::Value;

    fn parse(args: &[StimulusArg], ctx: &ReferenceContext) -> StimulusResult<Self> {
        let parsed = Arguments::new(Self::KIND, args, ctx)?;
        match parsed.as_slice().len() {
            2 => Ok(Self {
                name: dasherize(parsed.identifier(0)?),
                value: parsed.arg(1)?.to_value(),
                scope: parsed.implied_scope()?,
            }),
            3 => Ok(Self {
                scope: parsed.scope_at(0)?,
                name: dasherize(parsed.identifier(1)?),
                value: parsed.arg(2)?.to_value(),
            }),
            _ => Err(parsed.count_error()),
        }
    }

    fn data_attribute_key(&self) -> String {
        format!("{}-{}-value", self.scope, self.name)
    }

    fn data_attribute_value(&self) -> String {
        serialize_value(&self.value)
    }

    fn downcast_collection(any: &AnyCollection) -> Option<&AttributeCollection<Self>> {
        match any {
            AnyCollection::Values(collection) => Some(collection),
            _ => None,
        }
    }
}

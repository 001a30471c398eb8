//! `data-<scope>-<name>-class` references.

use serde_json::Value;

use super::{Arguments, AttributeReference, ReferenceContext, ReferenceKind};
use crate::StimulusResult;
use crate::args::StimulusArg;
use crate::collection::{AnyCollection, AttributeCollection};
use crate::naming::dasherize;

/// A named group of CSS classes a controller can toggle.
///
/// Accepted forms are `(name, classes)` on the implied scope and
/// `(scope_path, name, classes)`. Strings are split on whitespace, lists are
/// stringified per element and empty tokens are dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassRef {
    scope: String,
    name: String,
    tokens: Vec<String>,
}

impl ClassRef {
    /// The controller identifier owning the class group.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The dash-cased class group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized class tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn normalize(arg: &StimulusArg) -> Vec<String> {
        match arg {
            StimulusArg::Symbol(text) | StimulusArg::Text(text) => split_tokens(text),
            StimulusArg::Data(value) => normalize_value(value),
        }
    }
}

fn split_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

fn normalize_value(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(text) => split_tokens(text),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.trim().to_owned(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .filter(|token| !token.is_empty())
            .collect(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => vec![value.to_string()],
    }
}

impl AttributeReference for ClassRef {
    const KIND: ReferenceKind = ReferenceKind::Class;

    fn parse(args: &[StimulusArg], ctx: &ReferenceContext) -> StimulusResult<Self> {
        let parsed = Arguments::new(Self::KIND, args, ctx)?;
        match parsed.as_slice().len() {
            2 => Ok(Self {
                name: dasherize(parsed.identifier(0)?),
                tokens: Self::normalize(parsed.arg(1)?),
                scope: parsed.implied_scope()?,
            }),
            3 => Ok(Self {
                scope: parsed.scope_at(0)?,
                name: dasherize(parsed.identifier(1)?),
                tokens: Self::normalize(parsed.arg(2)?),
            }),
            _ => Err(parsed.count_error()),
        }
    }

    fn data_attribute_key(&self) -> String {
        format!("{}-{}-class", self.scope, self.name)
    }

    fn data_attribute_value(&self) -> String {
        self.tokens.join(" ")
    }

    fn downcast_collection(any: &AnyCollection) -> Option<&AttributeCollection<Self>> {
        match any {
            AnyCollection::Classes(collection) => Some(collection),
            _ => None,
        }
    }
}

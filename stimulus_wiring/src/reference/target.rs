//! `data-<scope>-target` references.

use super::{Arguments, AttributeReference, ReferenceContext, ReferenceKind};
use crate::StimulusResult;
use crate::args::StimulusArg;
use crate::collection::{AnyCollection, AttributeCollection};
use crate::naming::camelize;

/// A named target within a controller scope. Names are camel-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetRef {
    scope: String,
    name: String,
}

impl TargetRef {
    /// The controller identifier owning the target.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The camel-cased target name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AttributeReference for TargetRef {
    const KIND: ReferenceKind = ReferenceKind::Target;

    fn parse(args: &[StimulusArg], ctx: &ReferenceContext) -> StimulusResult<Self> {
        let parsed = Arguments::new(Self::KIND, args, ctx)?;
        match parsed.as_slice().len() {
            1 => Ok(Self {
                name: camelize(parsed.identifier(0)?),
                scope: parsed.implied_scope()?,
            }),
            2 => Ok(Self {
                scope: parsed.scope_at(0)?,
                name: camelize(parsed.identifier(1)?),
            }),
            _ => Err(parsed.count_error()),
        }
    }

    fn data_attribute_key(&self) -> String {
        format!("{}-target", self.scope)
    }

    fn data_attribute_value(&self) -> String {
        self.name.clone()
    }

    fn downcast_collection(any: &AnyCollection) -> Option<&AttributeCollection<Self>> {
        match any {
            AnyCollection::Targets(collection) => Some(collection),
            _ => None,
        }
    }
}

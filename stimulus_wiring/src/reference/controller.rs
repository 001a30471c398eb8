//! `data-controller` references.

use super::{Arguments, AttributeReference, ReferenceContext, ReferenceKind};
use crate::StimulusResult;
use crate::args::StimulusArg;
use crate::collection::{AnyCollection, AttributeCollection};
use crate::naming::stimulize;

/// A controller attached to an element.
///
/// With no arguments the implied scope names the controller; a single
/// argument is a controller path such as `admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControllerRef {
    name: String,
}

impl ControllerRef {
    /// The controller identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AttributeReference for ControllerRef {
    const KIND: ReferenceKind = ReferenceKind::Controller;

    fn parse(args: &[StimulusArg], ctx: &ReferenceContext) -> StimulusResult<Self> {
        let parsed = Arguments::new(Self::KIND, args, ctx)?;
        let name = match parsed.as_slice().len() {
            0 => parsed.implied_scope()?,
            1 => stimulize(parsed.identifier(0)?),
            _ => return Err(parsed.count_error()),
        };
        Ok(Self { name })
    }

    fn data_attribute_key(&self) -> String {
        String::from("controller")
    }

    fn data_attribute_value(&self) -> String {
        self.name.clone()
    }

    fn downcast_collection(any: &AnyCollection) -> Option<&AttributeCollection<Self>> {
        match any {
            AnyCollection::Controllers(collection) => Some(collection),
            _ => None,
        }
    }
}

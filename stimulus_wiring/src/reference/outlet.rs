//! `data-<scope>-<outlet>-outlet` references.

use serde_json::Value;

use super::{Arguments, AttributeReference, ReferenceContext, ReferenceKind};
use crate::StimulusResult;
use crate::args::StimulusArg;
use crate::collection::{AnyCollection, AttributeCollection};
use crate::naming::stimulize;

/// An outlet connecting a controller to other controllers on the page.
///
/// The outlet identifier is derived from a controller path. Without an
/// explicit selector the outlet matches `[data-controller~=<identifier>]`,
/// prefixed with `#<element id> ` when the owning element has an id. Passing
/// a null selector selects the same default.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutletRef {
    scope: String,
    outlet: String,
    selector: String,
}

impl OutletRef {
    /// The controller identifier owning the outlet.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The outlet's controller identifier.
    #[must_use]
    pub fn outlet(&self) -> &str {
        &self.outlet
    }

    /// The CSS selector locating outlet elements.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The selector synthesized for `outlet` when none is supplied.
    #[must_use]
    pub fn default_selector(outlet: &str, element_id: Option<&str>) -> String {
        let selector = format!("[data-controller~={outlet}]");
        let Some(id) = element_id else {
            return selector;
        };
        format!("#{id} {selector}")
    }

    fn selector_at(args: &Arguments<'_>, index: usize, outlet: &str) -> StimulusResult<String> {
        let arg = args.arg(index)?;
        match arg {
            StimulusArg::Symbol(selector)
            | StimulusArg::Text(selector)
            | StimulusArg::Data(Value::String(selector)) => Ok(selector.clone()),
            StimulusArg::Data(Value::Null) => Ok(Self::default_selector(
                outlet,
                args.context().owner_element_id(),
            )),
            StimulusArg::Data(_) => Err(args.type_error(index, arg)),
        }
    }
}

impl AttributeReference for OutletRef {
    const KIND: ReferenceKind = ReferenceKind::Outlet;

    fn parse(args: &[StimulusArg], ctx: &ReferenceContext) -> StimulusResult<Self> {
        let parsed = Arguments::new(Self::KIND, args, ctx)?;
        match parsed.as_slice().len() {
            1 => {
                let outlet = stimulize(parsed.identifier(0)?);
                Ok(Self {
                    scope: parsed.implied_scope()?,
                    selector: Self::default_selector(&outlet, ctx.owner_element_id()),
                    outlet,
                })
            }
            2 => {
                let outlet = stimulize(parsed.identifier(0)?);
                Ok(Self {
                    scope: parsed.implied_scope()?,
                    selector: Self::selector_at(&parsed, 1, &outlet)?,
                    outlet,
                })
            }
            3 => {
                let scope = parsed.scope_at(0)?;
                let outlet = stimulize(parsed.identifier(1)?);
                Ok(Self {
                    scope,
                    selector: Self::selector_at(&parsed, 2, &outlet)?,
                    outlet,
                })
            }
            _ => Err(parsed.count_error()),
        }
    }

    fn data_attribute_key(&self) -> String {
        format!("{}-{}-outlet", self.scope, self.outlet)
    }

    fn data_attribute_value(&self) -> String {
        self.selector.clone()
    }

    fn downcast_collection(any: &AnyCollection) -> Option<&AttributeCollection<Self>> {
        match any {
            AnyCollection::Outlets(collection) => Some(collection),
            _ => None,
        }
    }
}

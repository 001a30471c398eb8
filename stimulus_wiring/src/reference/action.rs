//! `data-action` references.

use super::{Arguments, AttributeReference, ReferenceContext, ReferenceKind};
use crate::StimulusResult;
use crate::args::StimulusArg;
use crate::collection::{AnyCollection, AttributeCollection};
use crate::naming::camelize;

const EVENT_SEPARATOR: &str = "->";
const METHOD_SEPARATOR: char = '#';

/// An action descriptor, `event->scope#action` or `scope#action`.
///
/// Accepted forms:
///
/// - `(descriptor)` where the text contains `->` or `#`, parsed verbatim;
/// - `(action)` on the implied scope;
/// - `(event, action)` on the implied scope;
/// - `(event, scope_path, action)`.
///
/// Action names given as separate arguments are camel-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionRef {
    event: Option<String>,
    scope: String,
    action: String,
}

impl ActionRef {
    /// The DOM event, when one was named.
    #[must_use]
    pub fn event(&self) -> Option<&str> {
        self.event.as_deref()
    }

    /// The controller identifier handling the action.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The controller method name.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    fn parse_descriptor(descriptor: &str, args: &Arguments<'_>) -> StimulusResult<Self> {
        let (event, rest) = descriptor
            .split_once(EVENT_SEPARATOR)
            .map_or((None, descriptor), |(name, tail)| {
                (Some(name.trim()).filter(|e| !e.is_empty()), tail)
            });
        let (scope, action) = match rest.split_once(METHOD_SEPARATOR) {
            Some((scope, action)) => (scope.trim().to_owned(), action.trim().to_owned()),
            None => (args.implied_scope()?, rest.trim().to_owned()),
        };
        Ok(Self {
            event: event.map(str::to_owned),
            scope,
            action,
        })
    }
}

impl AttributeReference for ActionRef {
    const KIND: ReferenceKind = ReferenceKind::Action;

    fn parse(args: &[StimulusArg], ctx: &ReferenceContext) -> StimulusResult<Self> {
        let parsed = Arguments::new(Self::KIND, args, ctx)?;
        match parsed.as_slice() {
            [StimulusArg::Text(descriptor)]
                if descriptor.contains(EVENT_SEPARATOR) || descriptor.contains(METHOD_SEPARATOR) =>
            {
                Self::parse_descriptor(descriptor, &parsed)
            }
            [_] => Ok(Self {
                event: None,
                action: camelize(parsed.identifier(0)?),
                scope: parsed.implied_scope()?,
            }),
            [_, _] => Ok(Self {
                event: Some(parsed.identifier(0)?.to_owned()),
                action: camelize(parsed.identifier(1)?),
                scope: parsed.implied_scope()?,
            }),
            [_, _, _] => Ok(Self {
                event: Some(parsed.identifier(0)?.to_owned()),
                scope: parsed.scope_at(1)?,
                action: camelize(parsed.identifier(2)?),
            }),
            _ => Err(parsed.count_error()),
        }
    }

    fn data_attribute_key(&self) -> String {
        String::from("action")
    }

    fn data_attribute_value(&self) -> String {
        let Some(event) = &self.event else {
            return format!("{}#{}", self.scope, self.action);
        };
        format!("{event}{EVENT_SEPARATOR}{}#{}", self.scope, self.action)
    }

    fn downcast_collection(any: &AnyCollection) -> Option<&AttributeCollection<Self>> {
        match any {
            AnyCollection::Actions(collection) => Some(collection),
            _ => None,
        }
    }
}

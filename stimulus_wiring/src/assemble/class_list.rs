//! Deduplicating CSS class list assembly.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use serde_json::Value;

use crate::naming::dasherize;
use crate::reference::ClassRef;
use crate::settings::RenderSettings;
use crate::{StimulusError, StimulusResult};

/// Name reported when conflict resolution is enabled without a resolver.
pub const CONFLICT_RESOLVER_DEPENDENCY: &str = "class conflict resolver";

/// Rewrites a joined class string to remove conflicting utility classes.
///
/// Implemented for any `Fn(&str) -> String + Send + Sync`.
pub trait ClassConflictResolver: Send + Sync {
    /// Return the class string with conflicts resolved.
    fn resolve_conflicts(&self, classes: &str) -> String;
}

impl<F> ClassConflictResolver for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn resolve_conflicts(&self, classes: &str) -> String {
        self(classes)
    }
}

/// A named, state-dependent group of classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedClasses {
    name: String,
    tokens: Vec<String>,
}

impl NamedClasses {
    /// Create a named group from a whitespace-separated class string.
    #[must_use]
    pub fn new(name: impl Into<String>, classes: &str) -> Self {
        Self {
            name: name.into(),
            tokens: classes.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// The group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group's classes joined by spaces.
    #[must_use]
    pub fn to_class_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl From<&ClassRef> for NamedClasses {
    fn from(class: &ClassRef) -> Self {
        Self {
            name: class.name().to_owned(),
            tokens: class.tokens().to_vec(),
        }
    }
}

/// One input to [`ClassListAssembler::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassSource {
    /// Contributes nothing.
    Nil,
    /// A whitespace-separated class string.
    Text(String),
    /// Nested sources, flattened depth-first.
    List(Vec<Self>),
    /// A named group, included only when its name is allowed.
    Named(NamedClasses),
    /// Any other value, already converted to text and tokenized like
    /// [`ClassSource::Text`].
    Other(String),
}

impl From<&str> for ClassSource {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ClassSource {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for ClassSource {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ClassSource {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<NamedClasses> for ClassSource {
    fn from(named: NamedClasses) -> Self {
        Self::Named(named)
    }
}

impl From<&ClassRef> for ClassSource {
    fn from(class: &ClassRef) -> Self {
        Self::Named(class.into())
    }
}

impl From<Value> for ClassSource {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Nil,
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            other @ (Value::Bool(_) | Value::Number(_) | Value::Object(_)) => {
                Self::Other(other.to_string())
            }
        }
    }
}

/// Flattens, deduplicates and joins class sources.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stimulus_wiring::{ClassListAssembler, ClassSource};
///
/// let assembler = ClassListAssembler::new();
/// let sources = [ClassSource::from(json!(["btn  primary", ["", null, "large"], "   "]))];
/// assert_eq!(assembler.build(&sources).as_deref(), Some("btn primary large"));
/// assert_eq!(assembler.build(&[ClassSource::from("  ")]), None);
/// ```
#[derive(Clone, Default)]
pub struct ClassListAssembler {
    resolver: Option<Arc<dyn ClassConflictResolver>>,
}

impl ClassListAssembler {
    /// An assembler without conflict resolution.
    #[must_use]
    pub const fn new() -> Self {
        Self { resolver: None }
    }

    /// An assembler passing its output through `resolver`.
    #[must_use]
    pub fn with_resolver(resolver: impl ClassConflictResolver + 'static) -> Self {
        Self {
            resolver: Some(Arc::new(resolver)),
        }
    }

    /// Configure an assembler from render settings.
    ///
    /// # Errors
    ///
    /// Returns [`StimulusError::MissingDependency`] when the settings enable
    /// conflict resolution but no resolver is supplied.
    pub fn from_settings(
        settings: &RenderSettings,
        resolver: Option<Arc<dyn ClassConflictResolver>>,
    ) -> StimulusResult<Self> {
        if !settings.resolve_class_conflicts {
            return Ok(Self::new());
        }
        resolver
            .map(|configured| Self {
                resolver: Some(configured),
            })
            .ok_or_else(|| StimulusError::missing_dependency(CONFLICT_RESOLVER_DEPENDENCY))
    }

    /// Whether a conflict resolver is configured.
    #[must_use]
    pub const fn resolves_conflicts(&self) -> bool {
        self.resolver.is_some()
    }

    /// Build a class string, excluding every named group.
    #[must_use]
    pub fn build(&self, sources: &[ClassSource]) -> Option<String> {
        self.build_allowing::<&str>(sources, &[])
    }

    /// Build a class string, including named groups whose name is listed in
    /// `allowed`.
    ///
    /// Returns `None` when no tokens remain, meaning the element should carry
    /// no `class` attribute at all.
    #[must_use]
    pub fn build_allowing<S: AsRef<str>>(
        &self,
        sources: &[ClassSource],
        allowed: &[S],
    ) -> Option<String> {
        let allowed_names: Vec<String> =
            allowed.iter().map(|name| dasherize(name.as_ref())).collect();
        let mut tokens = IndexSet::new();
        for source in sources {
            collect_tokens(source, &allowed_names, &mut tokens);
        }
        if tokens.is_empty() {
            return None;
        }
        let joined = tokens.into_iter().collect::<Vec<_>>().join(" ");
        let Some(resolver) = &self.resolver else {
            return Some(joined);
        };
        Some(resolver.resolve_conflicts(&joined))
    }
}

fn collect_tokens(source: &ClassSource, allowed: &[String], tokens: &mut IndexSet<String>) {
    match source {
        ClassSource::Nil => {}
        ClassSource::Text(text) | ClassSource::Other(text) => push_tokens(text, tokens),
        ClassSource::List(items) => {
            for item in items {
                collect_tokens(item, allowed, tokens);
            }
        }
        ClassSource::Named(named) => {
            if allowed.iter().any(|name| *name == dasherize(named.name())) {
                push_tokens(&named.to_class_string(), tokens);
            } else {
                tracing::debug!(name = %named.name(), "excluding class group not listed as allowed");
            }
        }
    }
}

fn push_tokens(text: &str, tokens: &mut IndexSet<String>) {
    for token in text.split_whitespace() {
        if !tokens.contains(token) {
            tokens.insert(token.to_owned());
        }
    }
}

impl fmt::Debug for ClassListAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassListAssembler")
            .field(
                "resolver",
                &self.resolver.as_ref().map(|_| "<resolver>"),
            )
            .finish()
    }
}

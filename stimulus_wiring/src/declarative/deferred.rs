//! Literal and deferred declaration values.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::component::Component;
use crate::error::BoxError;

/// Closure evaluated against the rendering instance.
pub type DeferredFn = Arc<dyn Fn(&dyn Component) -> Result<Value, BoxError> + Send + Sync>;

/// A declared value, class list or outlet selector.
#[derive(Clone)]
pub enum DeclaredValue {
    /// Used as-is.
    Literal(Value),
    /// Evaluated once per render against the instance.
    Deferred(DeferredFn),
}

impl DeclaredValue {
    /// Wrap a closure evaluated against the rendering instance.
    ///
    /// ```
    /// use serde_json::{Value, json};
    /// use stimulus_wiring::{BoxError, Component, DeclaredValue};
    ///
    /// struct Counter;
    /// impl Component for Counter {
    ///     fn prop(&self, name: &str) -> Result<Option<Value>, BoxError> {
    ///         Ok((name == "count").then(|| json!(3)))
    ///     }
    /// }
    ///
    /// let doubled = DeclaredValue::deferred(|c| {
    ///     let count = c.prop("count")?.and_then(|v| v.as_i64()).unwrap_or_default();
    ///     Ok(json!(count * 2))
    /// });
    /// assert_eq!(doubled.resolve(&Counter).ok(), Some(json!(6)));
    /// ```
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn(&dyn Component) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(f))
    }

    /// The literal value, if this is not deferred.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// Whether the value must be evaluated per instance.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Produce the value for `instance`.
    ///
    /// # Errors
    ///
    /// Returns the closure's error unchanged.
    pub fn resolve(&self, instance: &dyn Component) -> Result<Value, BoxError> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Deferred(f) => f(instance),
        }
    }
}

impl fmt::Debug for DeclaredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Deferred(_) => f.debug_tuple("Deferred").field(&"<closure>").finish(),
        }
    }
}

impl From<Value> for DeclaredValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for DeclaredValue {
    fn from(value: &str) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<String> for DeclaredValue {
    fn from(value: String) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<bool> for DeclaredValue {
    fn from(value: bool) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<i64> for DeclaredValue {
    fn from(value: i64) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<f64> for DeclaredValue {
    fn from(value: f64) -> Self {
        Self::Literal(Value::from(value))
    }
}

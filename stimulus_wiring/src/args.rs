//! Positional arguments accepted by reference constructors.
//!
//! Reference constructors dispatch on the number of arguments and on the
//! shape of each one, so arguments keep the distinction between an
//! identifier-like [`StimulusArg::Symbol`], a free-form
//! [`StimulusArg::Text`] and arbitrary [`StimulusArg::Data`].

use serde_json::Value;

/// One positional argument to a reference constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StimulusArg {
    /// Identifier-like token. Never parsed for separators.
    Symbol(String),
    /// Free-form string, such as a scope path or an action descriptor.
    Text(String),
    /// Any other value: booleans, numbers, lists, maps or null.
    Data(Value),
}

impl StimulusArg {
    /// Construct a [`StimulusArg::Symbol`].
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Construct a [`StimulusArg::Text`].
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Runtime type name reported in argument errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Symbol(_) => "Symbol",
            Self::Text(_) => "String",
            Self::Data(Value::Null) => "Null",
            Self::Data(Value::Bool(_)) => "Boolean",
            Self::Data(Value::Number(_)) => "Number",
            Self::Data(Value::String(_)) => "String",
            Self::Data(Value::Array(_)) => "Array",
            Self::Data(Value::Object(_)) => "Object",
        }
    }

    /// Borrow the argument as an identifier, if it has an identifier shape.
    ///
    /// Symbols and text qualify; data values never do, even JSON strings.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) | Self::Text(name) => Some(name),
            Self::Data(_) => None,
        }
    }

    /// Convert the argument into a JSON value, treating identifiers as strings.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Symbol(name) | Self::Text(name) => Value::String(name.clone()),
            Self::Data(value) => value.clone(),
        }
    }
}

impl From<&str> for StimulusArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StimulusArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Value> for StimulusArg {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<bool> for StimulusArg {
    fn from(value: bool) -> Self {
        Self::Data(Value::Bool(value))
    }
}

impl From<i64> for StimulusArg {
    fn from(value: i64) -> Self {
        Self::Data(Value::from(value))
    }
}

impl From<f64> for StimulusArg {
    fn from(value: f64) -> Self {
        Self::Data(Value::from(value))
    }
}

/// Ordered argument list for one reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceArgs(Vec<StimulusArg>);

impl ReferenceArgs {
    /// Create an empty argument list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Borrow the arguments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[StimulusArg] {
        &self.0
    }

    /// Number of arguments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no arguments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<StimulusArg>> for ReferenceArgs {
    fn from(args: Vec<StimulusArg>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[StimulusArg; N]> for ReferenceArgs {
    fn from(args: [StimulusArg; N]) -> Self {
        Self(args.into())
    }
}

impl From<StimulusArg> for ReferenceArgs {
    fn from(arg: StimulusArg) -> Self {
        Self(vec![arg])
    }
}

impl From<&str> for ReferenceArgs {
    fn from(value: &str) -> Self {
        Self(vec![StimulusArg::from(value)])
    }
}

impl From<String> for ReferenceArgs {
    fn from(value: String) -> Self {
        Self(vec![StimulusArg::from(value)])
    }
}

impl<A, B> From<(A, B)> for ReferenceArgs
where
    A: Into<StimulusArg>,
    B: Into<StimulusArg>,
{
    fn from((first, second): (A, B)) -> Self {
        Self(vec![first.into(), second.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for ReferenceArgs
where
    A: Into<StimulusArg>,
    B: Into<StimulusArg>,
    C: Into<StimulusArg>,
{
    fn from((first, second, third): (A, B, C)) -> Self {
        Self(vec![first.into(), second.into(), third.into()])
    }
}

impl<'a> IntoIterator for &'a ReferenceArgs {
    type Item = &'a StimulusArg;
    type IntoIter = std::slice::Iter<'a, StimulusArg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Constructors for `StimulusError`.

use super::StimulusError;
use crate::args::StimulusArg;
use crate::reference::ReferenceKind;

impl StimulusError {
    /// Build an [`StimulusError::InvalidArgumentCount`] for `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stimulus_wiring::{ReferenceKind, StimulusError};
    /// let err = StimulusError::argument_count(ReferenceKind::Action, 4);
    /// assert_eq!(err.to_string(), "Action reference does not accept 4 argument(s)");
    /// ```
    #[must_use]
    pub const fn argument_count(kind: ReferenceKind, count: usize) -> Self {
        Self::InvalidArgumentCount { kind, count }
    }

    /// Build an [`StimulusError::InvalidArgumentType`] describing `arg`, which
    /// sits at zero-based `index` in the argument list.
    #[must_use]
    pub const fn argument_type(kind: ReferenceKind, index: usize, arg: &StimulusArg) -> Self {
        Self::InvalidArgumentType {
            kind,
            position: index + 1,
            found: arg.type_name(),
        }
    }

    /// Build an [`StimulusError::MissingImpliedScope`] for `kind`.
    #[must_use]
    pub const fn missing_scope(kind: ReferenceKind) -> Self {
        Self::MissingImpliedScope { kind }
    }

    /// Build an [`StimulusError::MissingDependency`] naming `dependency`.
    #[must_use]
    pub fn missing_dependency(dependency: impl Into<String>) -> Self {
        Self::MissingDependency {
            dependency: dependency.into(),
        }
    }

    /// Build an [`StimulusError::UnknownComponent`] for `name`.
    #[must_use]
    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent { name: name.into() }
    }

    /// Wrap a settings parser failure.
    #[must_use]
    pub fn settings(source: &impl std::fmt::Display) -> Self {
        Self::Settings {
            message: source.to_string(),
        }
    }
}

//! Primary error enum for reference parsing and wiring resolution.

use thiserror::Error;

use crate::reference::ReferenceKind;

/// Boxed error returned by deferred declarations.
///
/// Resolution hands this value back untouched, so callers can recover the
/// original error with [`std::error::Error::downcast_ref`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias used throughout the crate.
pub type StimulusResult<T> = Result<T, StimulusError>;

/// Errors raised while constructing references or assembling attributes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StimulusError {
    /// A reference constructor received an unsupported number of arguments.
    #[error("{kind} reference does not accept {count} argument(s)")]
    InvalidArgumentCount {
        /// Reference variant being constructed.
        kind: ReferenceKind,
        /// Number of positional arguments received.
        count: usize,
    },

    /// An argument had the wrong shape for its position.
    #[error("{kind} reference argument {position} has unexpected type {found}")]
    InvalidArgumentType {
        /// Reference variant being constructed.
        kind: ReferenceKind,
        /// 1-based position of the offending argument.
        position: usize,
        /// Runtime type name of the offending argument.
        found: &'static str,
    },

    /// The reference form requires an implied scope but none was set.
    #[error("{kind} reference requires an implied scope but none is established")]
    MissingImpliedScope {
        /// Reference variant being constructed.
        kind: ReferenceKind,
    },

    /// A configured collaborator is not available.
    #[error("missing dependency: {dependency}")]
    MissingDependency {
        /// Name of the unavailable collaborator.
        dependency: String,
    },

    /// A component type name was not registered.
    #[error("unknown component type '{name}'")]
    UnknownComponent {
        /// The name that failed to resolve.
        name: String,
    },

    /// A component type name was registered twice.
    #[error("component type '{name}' is already defined")]
    DuplicateComponent {
        /// The name registered twice.
        name: String,
    },

    /// Render settings could not be parsed.
    #[error("invalid render settings: {message}")]
    Settings {
        /// Human-readable description of the failure.
        message: String,
    },
}

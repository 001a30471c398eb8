//! Naming conventions shared by every reference variant.
//!
//! Stimulus identifies controllers with dash-joined identifiers derived from
//! file paths (`admin/users_controller` becomes `admin--users-controller`),
//! while targets and action methods use lower camel case. The helpers here are
//! pure string conversions; they perform no validation of their input.

use heck::{ToLowerCamelCase, ToSnakeCase};

/// Separator placed between path segments in a controller identifier.
pub const SEGMENT_SEPARATOR: &str = "--";

/// Convert a slash-separated path into a Stimulus controller identifier.
///
/// Each segment has its underscores replaced by dashes and the segments are
/// joined with `--`.
///
/// # Examples
///
/// ```
/// use stimulus_wiring::naming::stimulize;
/// assert_eq!(stimulize("admin/user_profile"), "admin--user-profile");
/// assert_eq!(stimulize("simple"), "simple");
/// ```
#[must_use]
pub fn stimulize(path: &str) -> String {
    path.split('/')
        .map(dasherize)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Replace underscores with dashes.
///
/// ```
/// use stimulus_wiring::naming::dasherize;
/// assert_eq!(dasherize("user_name"), "user-name");
/// ```
#[must_use]
pub fn dasherize(word: &str) -> String {
    word.replace('_', "-")
}

/// Convert an underscore word to lower camel case.
///
/// ```
/// use stimulus_wiring::naming::camelize;
/// assert_eq!(camelize("handle_form_submission"), "handleFormSubmission");
/// ```
#[must_use]
pub fn camelize(word: &str) -> String {
    word.to_lower_camel_case()
}

/// Convert a type path into a scope path.
///
/// Both `::` and `/` act as segment separators; each segment is converted to
/// snake case.
///
/// ```
/// use stimulus_wiring::naming::underscore;
/// assert_eq!(underscore("Greeters::GreeterComponent"), "greeters/greeter_component");
/// ```
#[must_use]
pub fn underscore(type_path: &str) -> String {
    type_path
        .split("::")
        .flat_map(|segment| segment.split('/'))
        .filter(|segment| !segment.is_empty())
        .map(ToSnakeCase::to_snake_case)
        .collect::<Vec<_>>()
        .join("/")
}

/// Build a controller-scoped Stimulus event name (`identifier:eventName`).
///
/// ```
/// use stimulus_wiring::naming::scoped_event;
/// assert_eq!(
///     scoped_event("greeters/greeter_component", "name_changed"),
///     "greeters--greeter-component:nameChanged"
/// );
/// ```
#[must_use]
pub fn scoped_event(scope_path: &str, event: &str) -> String {
    format!("{}:{}", stimulize(scope_path), camelize(event))
}

/// Like [`scoped_event`], but listening on `window`.
#[must_use]
pub fn scoped_window_event(scope_path: &str, event: &str) -> String {
    format!("{}@window", scoped_event(scope_path, event))
}

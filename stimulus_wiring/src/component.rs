//! The component instance interface consumed during resolution.

use serde_json::Value;

use crate::error::BoxError;
use crate::reference::ReferenceContext;

/// A rendered component instance.
///
/// Deferred declarations run against `&dyn Component`, and prop-mapped values
/// are read through [`Component::prop`]. The interface is usually implemented
/// with `#[derive(Component)]`:
///
/// ```
/// use serde::Serialize;
/// use stimulus_wiring::Component;
///
/// #[derive(Serialize, Component)]
/// #[stimulus(scope = "greeters/greeter_component")]
/// struct Greeter {
///     #[stimulus(id)]
///     id: Option<String>,
///     name: String,
/// }
///
/// let greeter = Greeter { id: Some("g-1".into()), name: "Ada".into() };
/// assert_eq!(greeter.prop("name")?, Some(serde_json::json!("Ada")));
/// assert_eq!(greeter.prop("missing")?, None);
/// assert_eq!(greeter.element_id(), Some("g-1"));
/// assert_eq!(greeter.scope_path(), Some("greeters/greeter_component"));
/// # Ok::<_, stimulus_wiring::BoxError>(())
/// ```
pub trait Component {
    /// Read the named property, or `None` when the instance has no such
    /// property.
    ///
    /// # Errors
    ///
    /// Fails when the property exists but cannot be converted to a value.
    fn prop(&self, name: &str) -> Result<Option<Value>, BoxError>;

    /// The element id, when one has been assigned.
    fn element_id(&self) -> Option<&str> {
        None
    }

    /// The owner scope path used as the implied scope.
    fn scope_path(&self) -> Option<&str> {
        None
    }

    /// Reference context derived from [`Self::scope_path`] and
    /// [`Self::element_id`].
    fn reference_context(&self) -> ReferenceContext {
        let ctx = self
            .scope_path()
            .map_or_else(ReferenceContext::new, ReferenceContext::with_scope);
        ctx.with_element_id(self.element_id().map(str::to_owned))
    }
}

/// Support code for `#[derive(Component)]`. Not a public API.
#[doc(hidden)]
pub mod __private {
    use serde_json::Value;

    pub use serde::Serialize;
    pub use serde_json;

    use crate::error::BoxError;

    /// Serialize a field for [`super::Component::prop`].
    ///
    /// # Errors
    ///
    /// Returns the serializer's error, boxed.
    pub fn to_prop<T: Serialize + ?Sized>(field: &T) -> Result<Option<Value>, BoxError> {
        Ok(Some(serde_json::to_value(field)?))
    }

    /// Field types usable as an element id.
    pub trait ElementIdField {
        /// Borrow the id, if set.
        fn as_element_id(&self) -> Option<&str>;
    }

    impl ElementIdField for String {
        fn as_element_id(&self) -> Option<&str> {
            Some(self.as_str()).filter(|id| !id.is_empty())
        }
    }

    impl ElementIdField for Option<String> {
        fn as_element_id(&self) -> Option<&str> {
            self.as_deref().filter(|id| !id.is_empty())
        }
    }
}

//! Render settings shared by the assemblers and the element id generator.
//!
//! Settings are plain data loaded once at boot. Every field is optional in
//! the serialized form and falls back to its default.
//!
//! ```
//! use serde_json::json;
//! use stimulus_wiring::{IdStrategy, RenderSettings};
//!
//! let settings = RenderSettings::from_value(json!({"id_strategy": "sequential"}))?;
//! assert_eq!(settings.id_strategy, IdStrategy::Sequential);
//! assert_eq!(settings.element_id_prefix, "stimulus");
//! assert!(!settings.resolve_class_conflicts);
//! # Ok::<_, stimulus_wiring::StimulusError>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{StimulusError, StimulusResult};

/// How element ids are generated when a component has none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Deterministic `prefix-N` ids from a per-render counter.
    Sequential,
    /// Random ids.
    #[default]
    Random,
}

/// Settings controlling attribute assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Pass class strings through a conflict resolver.
    pub resolve_class_conflicts: bool,
    /// Prefix for generated element ids.
    pub element_id_prefix: String,
    /// Strategy for generated element ids.
    pub id_strategy: IdStrategy,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolve_class_conflicts: false,
            element_id_prefix: String::from("stimulus"),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl RenderSettings {
    /// Deserialize settings from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`StimulusError::Settings`] when the value has the wrong shape
    /// or names an unknown field.
    pub fn from_value(value: Value) -> StimulusResult<Self> {
        serde_json::from_value(value).map_err(|e| StimulusError::settings(&e))
    }

    /// Parse settings from TOML text.
    ///
    /// ```
    /// use stimulus_wiring::RenderSettings;
    ///
    /// let settings = RenderSettings::from_toml_str("resolve_class_conflicts = true")?;
    /// assert!(settings.resolve_class_conflicts);
    /// # Ok::<_, stimulus_wiring::StimulusError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StimulusError::Settings`] when the text is not valid TOML or
    /// does not describe settings.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> StimulusResult<Self> {
        toml::from_str(input).map_err(|e| StimulusError::settings(&e))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{IdStrategy, RenderSettings};
    use crate::StimulusError;

    #[test]
    fn empty_value_yields_defaults() {
        let settings = RenderSettings::from_value(json!({})).expect("defaults");
        assert_eq!(settings, RenderSettings::default());
    }

    #[rstest]
    #[case(json!({"unknown": 1}))]
    #[case(json!({"id_strategy": "sometimes"}))]
    #[case(json!("sequential"))]
    fn malformed_settings_are_rejected(#[case] value: serde_json::Value) {
        let err = RenderSettings::from_value(value).expect_err("settings rejected");
        assert!(matches!(err, StimulusError::Settings { .. }));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_settings_are_parsed() {
        let settings = RenderSettings::from_toml_str(
            "element_id_prefix = \"cmp\"\nid_strategy = \"sequential\"\n",
        )
        .expect("toml parses");
        assert_eq!(settings.element_id_prefix, "cmp");
        assert_eq!(settings.id_strategy, IdStrategy::Sequential);
    }
}

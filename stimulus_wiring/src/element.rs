//! Attributes handed to the template layer for one element.

use serde::Serialize;

use crate::assemble::{ClassListAssembler, ClassSource, DataAttributes};
use crate::wiring::StimulusWiring;

/// The `id`, `class` and `data-*` attributes of one element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ElementAttributes {
    /// Element id, if any.
    pub id: Option<String>,
    /// Class string; `None` means the element carries no `class` attribute.
    pub class: Option<String>,
    /// `data-*` attributes without their prefix.
    pub data: DataAttributes,
}

impl ElementAttributes {
    /// Assemble attributes from composed wiring and class sources.
    ///
    /// The wiring's class references are appended to `class_sources` as named
    /// groups, so only groups listed in `allowed_class_groups` reach the
    /// `class` attribute.
    #[must_use]
    pub fn assemble<S: AsRef<str>>(
        wiring: &StimulusWiring,
        class_sources: &[ClassSource],
        allowed_class_groups: &[S],
        assembler: &ClassListAssembler,
        id: Option<String>,
    ) -> Self {
        let mut sources = class_sources.to_vec();
        sources.extend(wiring.classes.iter().map(ClassSource::from));
        Self {
            id,
            class: assembler.build_allowing(&sources, allowed_class_groups),
            data: wiring.to_data_attributes(),
        }
    }

    /// Flatten to ordered `(name, value)` pairs: `id`, `class`, then the
    /// prefixed data attributes. Values are not HTML-escaped.
    #[must_use]
    pub fn to_html_attributes(&self) -> Vec<(String, String)> {
        let mut attributes = Vec::with_capacity(self.data.len() + 2);
        if let Some(id) = &self.id {
            attributes.push((String::from("id"), id.clone()));
        }
        if let Some(class) = &self.class {
            attributes.push((String::from("class"), class.clone()));
        }
        attributes.extend(self.data.to_html_attributes());
        attributes
    }
}

//! Ownership of builders per component type, with lazy inheritance.

use indexmap::IndexMap;

use super::{DeclarationBuilder, ResolvedDeclarations};
use crate::component::Component;
use crate::error::BoxError;
use crate::{StimulusError, StimulusResult};

#[derive(Clone, Debug, Default)]
struct Entry {
    parent: Option<String>,
    builder: Option<DeclarationBuilder>,
}

/// Registry of component types and their declarations.
///
/// Types are defined in parent-first order, so inheritance chains cannot
/// form cycles. A type's builder is created on first use and merged with its
/// parent's fully merged builder before it is first returned.
#[derive(Clone, Debug, Default)]
pub struct DeclarationRegistry {
    entries: IndexMap<String, Entry>,
}

impl DeclarationRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, optionally inheriting from `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`StimulusError::DuplicateComponent`] when `name` is already
    /// registered and [`StimulusError::UnknownComponent`] when `parent` is
    /// not.
    pub fn define(&mut self, name: &str, parent: Option<&str>) -> StimulusResult<()> {
        if self.entries.contains_key(name) {
            return Err(StimulusError::DuplicateComponent {
                name: name.to_owned(),
            });
        }
        if let Some(parent_name) = parent
            && !self.entries.contains_key(parent_name)
        {
            return Err(StimulusError::unknown_component(parent_name));
        }
        self.entries.insert(
            name.to_owned(),
            Entry {
                parent: parent.map(str::to_owned),
                builder: None,
            },
        );
        Ok(())
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The parent of `name`, if any.
    #[must_use]
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|e| e.parent.as_deref())
    }

    /// Mutable access to the builder of `name` for further declarations.
    ///
    /// # Errors
    ///
    /// Returns [`StimulusError::UnknownComponent`] for unregistered names.
    pub fn declare(&mut self, name: &str) -> StimulusResult<&mut DeclarationBuilder> {
        self.ensure_resolved(name)?;
        self.entries
            .get_mut(name)
            .and_then(|entry| entry.builder.as_mut())
            .ok_or_else(|| StimulusError::unknown_component(name))
    }

    /// The merged builder of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StimulusError::UnknownComponent`] for unregistered names.
    pub fn builder(&mut self, name: &str) -> StimulusResult<&DeclarationBuilder> {
        self.declare(name).map(|builder| &*builder)
    }

    /// Evaluate the declarations of `name` for `instance`.
    ///
    /// # Errors
    ///
    /// Returns a boxed [`StimulusError::UnknownComponent`] for unregistered
    /// names, or a deferred entry's error unchanged.
    pub fn resolve_attributes(
        &mut self,
        name: &str,
        instance: &dyn Component,
    ) -> Result<ResolvedDeclarations, BoxError> {
        let builder = self.builder(name)?;
        builder.to_resolved_attributes(instance)
    }

    /// Merge inheritance for every type and freeze the registry.
    ///
    /// # Errors
    ///
    /// Cannot fail for a registry built through [`Self::define`]; the result
    /// mirrors [`Self::declare`].
    pub fn seal(mut self) -> StimulusResult<SealedRegistry> {
        let names: Vec<String> = self.entries.keys().cloned().collect();
        let mut builders = IndexMap::with_capacity(names.len());
        for name in names {
            let builder = self.builder(&name)?.clone();
            builders.insert(name, builder);
        }
        Ok(SealedRegistry { builders })
    }

    fn ensure_resolved(&mut self, name: &str) -> StimulusResult<()> {
        let current = self
            .entries
            .get(name)
            .ok_or_else(|| StimulusError::unknown_component(name))?;
        if current
            .builder
            .as_ref()
            .is_some_and(DeclarationBuilder::is_inheritance_resolved)
        {
            return Ok(());
        }
        let parent_name = current.parent.clone();
        let inherited = self.parent_builder(parent_name.as_deref())?;
        let slot = self
            .entries
            .get_mut(name)
            .ok_or_else(|| StimulusError::unknown_component(name))?;
        slot.builder
            .get_or_insert_with(DeclarationBuilder::new)
            .resolve_inheritance(inherited.as_ref());
        tracing::debug!(
            component = %name,
            parent = ?parent_name,
            "merged inherited declarations"
        );
        Ok(())
    }

    /// The fully merged builder of `parent`, resolving it first.
    fn parent_builder(&mut self, parent: Option<&str>) -> StimulusResult<Option<DeclarationBuilder>> {
        let Some(parent_name) = parent else {
            return Ok(None);
        };
        self.ensure_resolved(parent_name)?;
        Ok(self
            .entries
            .get(parent_name)
            .and_then(|e| e.builder.clone()))
    }
}

/// Read-only registry with inheritance merged for every type.
///
/// Safe to share across rendering threads.
#[derive(Clone, Debug, Default)]
pub struct SealedRegistry {
    builders: IndexMap<String, DeclarationBuilder>,
}

impl SealedRegistry {
    /// The merged builder of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StimulusError::UnknownComponent`] for unregistered names.
    pub fn builder(&self, name: &str) -> StimulusResult<&DeclarationBuilder> {
        self.builders
            .get(name)
            .ok_or_else(|| StimulusError::unknown_component(name))
    }

    /// Evaluate the declarations of `name` for `instance`.
    ///
    /// # Errors
    ///
    /// Returns a boxed [`StimulusError::UnknownComponent`] for unregistered
    /// names, or a deferred entry's error unchanged.
    pub fn resolve_attributes(
        &self,
        name: &str,
        instance: &dyn Component,
    ) -> Result<ResolvedDeclarations, BoxError> {
        self.builder(name)?.to_resolved_attributes(instance)
    }

    /// Registered type names, in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }
}

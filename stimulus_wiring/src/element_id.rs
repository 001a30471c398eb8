//! Element id generation.
//!
//! Ids are produced by an injectable [`IdSequence`]. A sequence lives as long
//! as the render or request that owns it, so concurrent renders holding their
//! own generators never interleave ids. Without a sequence the generator
//! falls back to [`RandomIds`].

use uuid::Uuid;

use crate::settings::{IdStrategy, RenderSettings};

/// Source of element ids.
pub trait IdSequence: Send {
    /// Produce the next id, starting with `prefix`.
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Deterministic `prefix-N` ids, counting from zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// A sequence starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// A sequence starting at `start`.
    #[must_use]
    pub const fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl IdSequence for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Random `prefix-<hex>` ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdSequence for RandomIds {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4().simple())
    }
}

/// Generates element ids with a configured prefix.
pub struct ElementIdGenerator {
    prefix: String,
    sequence: Box<dyn IdSequence>,
}

impl ElementIdGenerator {
    /// A generator using `sequence`, or random ids when `None`.
    #[must_use]
    pub fn new(prefix: impl Into<String>, sequence: Option<Box<dyn IdSequence>>) -> Self {
        Self {
            prefix: prefix.into(),
            sequence: sequence.unwrap_or_else(|| Box::new(RandomIds)),
        }
    }

    /// A generator following the settings' prefix and id strategy.
    #[must_use]
    pub fn from_settings(settings: &RenderSettings) -> Self {
        let sequence: Box<dyn IdSequence> = match settings.id_strategy {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Random => Box::new(RandomIds),
        };
        Self::new(settings.element_id_prefix.clone(), Some(sequence))
    }

    /// Produce the next id.
    pub fn next_id(&mut self) -> String {
        self.sequence.next_id(&self.prefix)
    }

    /// Return `existing` when present, otherwise generate a fresh id.
    pub fn id_for(&mut self, existing: Option<&str>) -> String {
        existing.map_or_else(|| self.next_id(), str::to_owned)
    }
}

impl std::fmt::Debug for ElementIdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementIdGenerator")
            .field("prefix", &self.prefix)
            .field("sequence", &"<sequence>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementIdGenerator, IdSequence, SequentialIds};
    use crate::settings::{IdStrategy, RenderSettings};

    #[test]
    fn sequential_ids_count_up() {
        let mut generator = ElementIdGenerator::new("cmp", Some(Box::new(SequentialIds::new())));
        assert_eq!(generator.next_id(), "cmp-0");
        assert_eq!(generator.next_id(), "cmp-1");
    }

    #[test]
    fn independent_sequences_do_not_interleave() {
        let mut first = SequentialIds::starting_at(5);
        let mut second = SequentialIds::new();
        assert_eq!(first.next_id("a"), "a-5");
        assert_eq!(second.next_id("a"), "a-0");
        assert_eq!(first.next_id("a"), "a-6");
    }

    #[test]
    fn missing_sequence_falls_back_to_random() {
        let mut generator = ElementIdGenerator::new("cmp", None);
        let first = generator.next_id();
        let second = generator.next_id();
        assert!(first.starts_with("cmp-"));
        assert_ne!(first, second);
    }

    #[test]
    fn existing_ids_are_kept() {
        let mut generator = ElementIdGenerator::new("cmp", Some(Box::new(SequentialIds::new())));
        assert_eq!(generator.id_for(Some("given")), "given");
        assert_eq!(generator.id_for(None), "cmp-0");
    }

    #[test]
    fn settings_select_strategy() {
        let settings = RenderSettings {
            element_id_prefix: String::from("el"),
            id_strategy: IdStrategy::Sequential,
            ..RenderSettings::default()
        };
        let mut generator = ElementIdGenerator::from_settings(&settings);
        assert_eq!(generator.next_id(), "el-0");
    }
}

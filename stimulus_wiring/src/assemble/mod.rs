//! Final assembly of `data-*` attribute maps and CSS class strings.

mod class_list;
mod data;

pub use class_list::{ClassConflictResolver, ClassListAssembler, ClassSource, NamedClasses};
pub use data::{DataAttributeAssembler, DataAttributes};

#[cfg(test)]
mod tests;

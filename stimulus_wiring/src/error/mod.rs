//! Error types produced while parsing references and resolving wiring.

mod constructors;
mod types;

pub use types::{BoxError, StimulusError, StimulusResult};

#[cfg(test)]
mod tests;

//! Pattern files, the pattern library and initial grid generation

pub mod builtin;
pub mod definition;
pub mod generator;
pub mod library;

pub use builtin::{write_builtin_patterns, BUILTIN_PATTERNS};
pub use definition::{format_pattern, PatternDefinition};
pub use generator::{PatternGenerator, PatternKind, PatternRequest};
pub use library::PatternLibrary;

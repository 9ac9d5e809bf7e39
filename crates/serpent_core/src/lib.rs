//! serpent_core: Core utilities for the serpent Python analysis engine.
//!
//! Provides source positions, line mapping, and string interning used by
//! every stage of the pipeline.

pub mod intern;
pub mod text;

// Re-export commonly used types
pub use intern::{InternedString, StringInterner};
pub use text::{TextRange, TextSpan};

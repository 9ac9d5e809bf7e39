//! serpent_ast: AST node model for the serpent Python analysis engine.
//!
//! Defines the closed set of statement and expression node kinds, the
//! `Walker` traversal protocol, and the language-version value. Nodes are
//! allocated in a bump arena and are immutable once built; analysis passes
//! attach their results in side tables keyed by `NodeId`.

pub mod node;
pub mod version;
pub mod walker;

pub use node::NodeId;
pub use version::PythonVersion;
pub use walker::Walker;

//! serpent_binder: Symbol table construction and static name resolution.
//!
//! The binder walks an already-parsed tree and decides, for every use of an
//! identifier, which declaration it refers to: a local, a parameter, a
//! closure capture from an enclosing function, a module global, or — when
//! wildcard imports or unqualified dynamic eval make static analysis
//! impossible — nothing at all, leaving the lookup fully dynamic.
//!
//! Binding happens in three phases:
//! 1. a full recursive walk discovers scopes, declarations, and references;
//! 2. references resolve innermost-scope-first, computing free and cell
//!    variables as lookups cross function boundaries;
//! 3. an outermost-first pass validates `nonlocal` bindings and finalizes
//!    each scope's closure variable list.
//!
//! The tree itself is never mutated; all results live in the returned
//! [`BoundModule`].

mod binder;
mod scope;
mod variable;

pub use binder::{Binder, BoundModule};
pub use scope::{Scope, ScopeFlags, ScopeId, ScopeKind};
pub use variable::{
    ClosureVariable, FreeVariable, Reference, ReferenceId, Variable, VariableId, VariableKind,
};

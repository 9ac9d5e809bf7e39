//! Scope records and symbol tables.
//!
//! A scope is created for the module, every function/lambda, and every
//! class body. The parent link is an index into the binder's scope table,
//! not an owning pointer, so upward lookup never forms a reference cycle
//! with the tree.

use crate::variable::{ClosureVariable, FreeVariable, VariableId};
use rustc_hash::FxHashMap;
use serpent_ast::node::NodeId;
use serpent_core::intern::InternedString;
use serpent_core::text::TextRange;

/// Handle to a [`Scope`] in the binder's scope table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ScopeId(pub u32);

impl ScopeId {
    /// The module scope is always the first entry of the scope table.
    pub const MODULE: ScopeId = ScopeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of region a scope covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// Top level of one compilation unit, terminal in every lookup chain.
    Module,
    Function,
    /// A class body. Its locals are invisible to nested functions, except
    /// the synthetic class cell.
    Class,
    /// An anonymous function scope.
    Lambda,
}

bitflags::bitflags! {
    /// Conditions discovered in phase 1 that change how names in the scope
    /// resolve.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScopeFlags: u8 {
        /// Contains `from m import *`.
        const CONTAINS_IMPORT_STAR            = 1 << 0;
        /// Contains an `exec` statement with no globals/locals mapping.
        const CONTAINS_UNQUALIFIED_EXEC       = 1 << 1;
        /// The locals dictionary must be materializable (wildcard import,
        /// exec, or a call to a dynamic-eval builtin).
        const NEEDS_LOCALS_SNAPSHOT           = 1 << 2;
        /// Names can be introduced into this scope invisibly; static
        /// resolution that would fall through this scope to an implicit
        /// global must give up instead.
        const HAS_LATE_BOUND_SETS             = 1 << 3;
        /// Some nested scope resolves names through this scope.
        const CONTAINS_NESTED_FREE_VARIABLES  = 1 << 4;
        /// Contains `try` or `with`.
        const CONTAINS_EXCEPTION_HANDLING     = 1 << 5;
    }
}

/// One scope with its symbol table and closure bookkeeping.
///
/// The symbol table and the free/global/cell lists are written during
/// binding; after phase 3 the record is read-only.
#[derive(Debug)]
pub struct Scope {
    pub id: ScopeId,
    pub kind: ScopeKind,
    /// The AST node that introduced this scope.
    pub node: NodeId,
    /// Source range of the introducing node.
    pub range: TextRange,
    /// `def`/`class` name; None for the module and lambdas.
    pub name: Option<InternedString>,
    /// Lexically enclosing scope; None only for the module.
    pub parent: Option<ScopeId>,
    pub flags: ScopeFlags,
    table: FxHashMap<InternedString, VariableId>,
    free_variables: Vec<FreeVariable>,
    global_variables: Vec<InternedString>,
    cell_variables: Vec<InternedString>,
    closure_variables: Vec<ClosureVariable>,
}

impl Scope {
    pub fn new(
        id: ScopeId,
        kind: ScopeKind,
        node: NodeId,
        range: TextRange,
        name: Option<InternedString>,
        parent: Option<ScopeId>,
    ) -> Self {
        Self {
            id,
            kind,
            node,
            range,
            name,
            parent,
            flags: ScopeFlags::empty(),
            table: FxHashMap::default(),
            free_variables: Vec::new(),
            global_variables: Vec::new(),
            cell_variables: Vec::new(),
            closure_variables: Vec::new(),
        }
    }

    /// Existence query without creation.
    #[inline]
    pub fn try_get_variable(&self, name: InternedString) -> Option<VariableId> {
        self.table.get(&name).copied()
    }

    #[inline]
    pub fn has_variable(&self, name: InternedString) -> bool {
        self.table.contains_key(&name)
    }

    /// Insert a binding. The variable need not be owned by this scope: a
    /// `global` declaration aliases the module's variable here.
    pub(crate) fn insert(&mut self, name: InternedString, variable: VariableId) {
        self.table.insert(name, variable);
    }

    /// Iterate the symbol table. Insertion order is not meaningful.
    pub fn variables(&self) -> impl Iterator<Item = (InternedString, VariableId)> + '_ {
        self.table.iter().map(|(n, v)| (*n, *v))
    }

    pub fn variable_count(&self) -> usize {
        self.table.len()
    }

    /// Variables captured from ancestor scopes, plus captures passing
    /// through this scope on their way to a descendant.
    pub fn free_variables(&self) -> &[FreeVariable] {
        &self.free_variables
    }

    /// Names this scope resolves to the module namespace.
    pub fn global_variables(&self) -> &[InternedString] {
        &self.global_variables
    }

    /// Names of locals some descendant scope captures; this scope must make
    /// them available to its children.
    pub fn cell_variables(&self) -> &[InternedString] {
        &self.cell_variables
    }

    /// The finalized closure-variable list. Valid only after phase 3.
    pub fn closure_variables(&self) -> &[ClosureVariable] {
        &self.closure_variables
    }

    pub(crate) fn set_closure_variables(&mut self, closure: Vec<ClosureVariable>) {
        self.closure_variables = closure;
    }

    /// A closure is a scope with at least one captured variable.
    #[inline]
    pub fn is_closure(&self) -> bool {
        !self.free_variables.is_empty()
    }

    #[inline]
    pub fn is_free(&self, variable: VariableId) -> bool {
        self.free_variables.iter().any(|f| f.variable == variable)
    }

    #[inline]
    pub fn has_cell_variable(&self, name: InternedString) -> bool {
        self.cell_variables.contains(&name)
    }

    #[inline]
    pub fn has_global_variable(&self, name: InternedString) -> bool {
        self.global_variables.contains(&name)
    }

    /// Record a capture. Idempotent; the accessed bit of the first
    /// insertion wins.
    pub(crate) fn add_free_variable(&mut self, variable: VariableId, accessed_in_scope: bool) {
        if !self.is_free(variable) {
            self.free_variables.push(FreeVariable {
                variable,
                accessed_in_scope,
            });
        }
    }

    /// Record that a local of this scope is captured by a descendant.
    /// Idempotent.
    pub(crate) fn add_cell_variable(&mut self, name: InternedString) {
        if !self.cell_variables.contains(&name) {
            self.cell_variables.push(name);
        }
    }

    /// Record a name resolved to the module namespace. Idempotent.
    pub(crate) fn add_referenced_global(&mut self, name: InternedString) {
        if !self.global_variables.contains(&name) {
            self.global_variables.push(name);
        }
    }

    /// Whether this scope makes all of its locals reachable by descendants
    /// without explicit capture: class bodies always do, function scopes
    /// only once their locals dictionary must be materializable.
    pub fn exposes_local_variables(&self) -> bool {
        match self.kind {
            ScopeKind::Class => true,
            ScopeKind::Function | ScopeKind::Lambda => {
                self.flags.contains(ScopeFlags::NEEDS_LOCALS_SNAPSHOT)
            }
            ScopeKind::Module => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serpent_core::intern::StringInterner;

    fn scope() -> Scope {
        Scope::new(
            ScopeId(1),
            ScopeKind::Function,
            NodeId(0),
            TextRange::empty(0),
            None,
            Some(ScopeId::MODULE),
        )
    }

    #[test]
    fn test_free_variable_add_is_idempotent() {
        let mut s = scope();
        s.add_free_variable(VariableId(3), true);
        s.add_free_variable(VariableId(3), false);
        assert_eq!(s.free_variables().len(), 1);
        // First insertion wins
        assert!(s.free_variables()[0].accessed_in_scope);
        assert!(s.is_closure());
    }

    #[test]
    fn test_cell_and_global_adds_are_idempotent() {
        let interner = StringInterner::new();
        let name = interner.intern("y");
        let mut s = scope();
        s.add_cell_variable(name);
        s.add_cell_variable(name);
        s.add_referenced_global(name);
        s.add_referenced_global(name);
        assert_eq!(s.cell_variables().len(), 1);
        assert_eq!(s.global_variables().len(), 1);
    }

    #[test]
    fn test_exposes_local_variables() {
        let mut f = scope();
        assert!(!f.exposes_local_variables());
        f.flags |= ScopeFlags::NEEDS_LOCALS_SNAPSHOT;
        assert!(f.exposes_local_variables());

        let c = Scope::new(
            ScopeId(2),
            ScopeKind::Class,
            NodeId(0),
            TextRange::empty(0),
            None,
            Some(ScopeId::MODULE),
        );
        assert!(c.exposes_local_variables());
    }
}

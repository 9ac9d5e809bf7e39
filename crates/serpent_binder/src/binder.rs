//! The binder implementation.
//!
//! Name binding happens in three passes over one tree:
//!
//! Phase 1 is a full recursive walk. Entering a function, class, or lambda
//! pushes a new scope; assignment targets, parameters, imports, and
//! `global`/`nonlocal` statements declare variables; every name use
//! registers a reference in its scope. Default values, decorators, base
//! classes, and annotations are walked in the *enclosing* scope because
//! they evaluate at definition time. Scopes are collected innermost-first
//! as they are popped.
//!
//! Phase 2 resolves the collected scopes' references innermost-first, the
//! module last. Lookups that cross a function boundary lift the variable
//! into the closure: the referencing scope records it free, the owner
//! records the cell, and intermediate scopes pass it through. Lookups that
//! reach a scope where names can be set invisibly (wildcard import,
//! unqualified exec) stay unresolved rather than guessing.
//!
//! Phase 3 runs outermost-first: it validates `nonlocal` declarations,
//! rejects wildcard import / unqualified exec in closures, and finalizes
//! each scope's closure-variable list. A deleted local that a nested scope
//! captures is illegal:
//!
//! ```text
//! def f():
//!     x = 10
//!     if cond: del x        # illegal, x is a closure variable
//!     def g():
//!         print(x)
//! ```
//!
//! The binder never mutates the tree. Each `bind` run is a pure function
//! from tree to a fresh [`BoundModule`], so binding the same tree twice
//! simply yields two equal, independent results.

use crate::scope::{Scope, ScopeFlags, ScopeId, ScopeKind};
use crate::variable::{
    ClosureVariable, Reference, ReferenceId, Variable, VariableId, VariableKind,
};
use rustc_hash::FxHashMap;
use serpent_ast::node::*;
use serpent_ast::version::PythonVersion;
use serpent_ast::walker::Walker;
use serpent_core::intern::{InternedString, StringInterner};
use serpent_core::text::TextRange;
use serpent_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

/// Interned names the binder looks for or synthesizes.
struct WellKnownNames {
    dunder_name: InternedString,
    dunder_doc: InternedString,
    dunder_module: InternedString,
    dunder_class: InternedString,
    dynamic_eval: [InternedString; 6],
}

impl WellKnownNames {
    fn new(interner: &StringInterner) -> Self {
        Self {
            dunder_name: interner.intern_static("__name__"),
            dunder_doc: interner.intern_static("__doc__"),
            dunder_module: interner.intern_static("__module__"),
            dunder_class: interner.intern_static("__class__"),
            dynamic_eval: [
                interner.intern_static("eval"),
                interner.intern_static("exec"),
                interner.intern_static("execfile"),
                interner.intern_static("locals"),
                interner.intern_static("vars"),
                interner.intern_static("dir"),
            ],
        }
    }

    #[inline]
    fn is_dynamic_eval(&self, name: InternedString) -> bool {
        self.dynamic_eval.contains(&name)
    }
}

/// Phase-1 per-scope bookkeeping, discarded once binding completes.
#[derive(Default)]
struct Registry {
    /// One reference per distinct name used in the scope.
    references: FxHashMap<InternedString, ReferenceId>,
    /// Reference creation order, for deterministic phase-2 processing.
    order: Vec<ReferenceId>,
    /// `nonlocal` declarations awaiting phase-3 validation.
    nonlocals: Vec<(InternedString, TextRange)>,
}

/// The read-only result of binding one module.
///
/// All collections are final once returned: the scope table (module scope
/// first, then in creation pre-order), the variable and reference arenas,
/// and the side tables mapping AST nodes to what they resolve to or define.
#[derive(Debug)]
pub struct BoundModule {
    scopes: Vec<Scope>,
    variables: Vec<Variable>,
    references: Vec<Reference>,
    /// Name-use node -> its scope's reference for that name.
    resolved: FxHashMap<NodeId, ReferenceId>,
    /// Declaration node (def/class/parameter/import alias) -> the variable
    /// it defines.
    defined: FxHashMap<NodeId, VariableId>,
    /// Scope-introducing node -> its scope.
    scope_by_node: FxHashMap<NodeId, ScopeId>,
    diagnostics: DiagnosticCollection,
    interner: StringInterner,
}

impl BoundModule {
    pub fn module_scope(&self) -> &Scope {
        &self.scopes[ScopeId::MODULE.index()]
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    /// The scope introduced by a `def`, `class`, lambda, or module node.
    pub fn scope_of(&self, node: NodeId) -> Option<&Scope> {
        self.scope_by_node.get(&node).map(|id| self.scope(*id))
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.index()]
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn reference(&self, id: ReferenceId) -> &Reference {
        &self.references[id.index()]
    }

    /// The resolved reference for a name-use node. Definition sites count
    /// as uses, so `def`/`class` statements, parameters of sublist form,
    /// and import aliases are mapped as well. `None` for nodes that use no
    /// name; a reference whose `variable` is `None` means the lookup is
    /// fully dynamic.
    pub fn resolved(&self, node: NodeId) -> Option<&Reference> {
        self.resolved.get(&node).map(|id| self.reference(*id))
    }

    /// The variable a declaration node defines.
    pub fn defined(&self, node: NodeId) -> Option<&Variable> {
        self.defined.get(&node).map(|id| self.variable(*id))
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticCollection {
        self.diagnostics
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Look a variable up by scope and source-text name.
    pub fn variable_named(&self, scope: ScopeId, name: &str) -> Option<&Variable> {
        let interned = self.interner.get(name)?;
        let id = self.scope(scope).try_get_variable(interned)?;
        Some(self.variable(id))
    }
}

/// The three-phase name binder. Construct-and-run via [`Binder::bind`].
pub struct Binder {
    version: PythonVersion,
    interner: StringInterner,
    names: WellKnownNames,
    scopes: Vec<Scope>,
    variables: Vec<Variable>,
    references: Vec<Reference>,
    registries: Vec<Registry>,
    resolved: FxHashMap<NodeId, ReferenceId>,
    defined: FxHashMap<NodeId, VariableId>,
    scope_by_node: FxHashMap<NodeId, ScopeId>,
    current: ScopeId,
    /// Scopes in pop order: innermost before their ancestors.
    processed: Vec<ScopeId>,
    diagnostics: DiagnosticCollection,
}

impl Binder {
    /// Bind a module tree, returning the annotated result. The tree is not
    /// modified; binding the same tree again produces an equal, independent
    /// result.
    pub fn bind(module: &Module<'_>) -> BoundModule {
        let mut binder = Binder::new(module);

        // Phase 1: find all scopes, variables, and references.
        module.walk(&mut binder);

        // Phase 2: resolve references, innermost scopes first, then the
        // module last.
        let order = binder.processed.clone();
        for scope in &order {
            binder.bind_scope(*scope);
        }
        binder.bind_scope(ScopeId::MODULE);

        // Phase 3: finish with the outermost scopes first, the module last.
        for scope in order.iter().rev() {
            binder.finish_scope(*scope);
        }
        binder.finish_scope(ScopeId::MODULE);

        binder.into_bound_module()
    }

    fn new(module: &Module<'_>) -> Self {
        let interner = module.interner.clone();
        let names = WellKnownNames::new(&interner);
        let mut binder = Self {
            version: module.version,
            interner,
            names,
            scopes: Vec::new(),
            variables: Vec::new(),
            references: Vec::new(),
            registries: Vec::new(),
            resolved: FxHashMap::default(),
            defined: FxHashMap::default(),
            scope_by_node: FxHashMap::default(),
            current: ScopeId::MODULE,
            processed: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        };
        binder.new_scope(ScopeKind::Module, module.data.id, module.data.range, None, None);
        binder
    }

    fn into_bound_module(self) -> BoundModule {
        // The phase-1 registries do not survive binding.
        BoundModule {
            scopes: self.scopes,
            variables: self.variables,
            references: self.references,
            resolved: self.resolved,
            defined: self.defined,
            scope_by_node: self.scope_by_node,
            diagnostics: self.diagnostics,
            interner: self.interner,
        }
    }

    // ========================================================================
    // Scope management
    // ========================================================================

    fn new_scope(
        &mut self,
        kind: ScopeKind,
        node: NodeId,
        range: TextRange,
        name: Option<InternedString>,
        parent: Option<ScopeId>,
    ) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope::new(id, kind, node, range, name, parent));
        self.registries.push(Registry::default());
        self.scope_by_node.insert(node, id);
        id
    }

    fn push_scope(
        &mut self,
        kind: ScopeKind,
        node: NodeId,
        range: TextRange,
        name: Option<InternedString>,
    ) {
        let parent = Some(self.current);
        self.current = self.new_scope(kind, node, range, name, parent);
    }

    fn pop_scope(&mut self) {
        self.processed.push(self.current);
        if let Some(parent) = self.scopes[self.current.index()].parent {
            self.current = parent;
        }
    }

    #[inline]
    fn current_scope_mut(&mut self) -> &mut Scope {
        &mut self.scopes[self.current.index()]
    }

    // ========================================================================
    // Variable and reference creation
    // ========================================================================

    fn create_variable(
        &mut self,
        scope: ScopeId,
        name: InternedString,
        kind: VariableKind,
    ) -> VariableId {
        let id = VariableId(self.variables.len() as u32);
        self.variables.push(Variable::new(id, name, scope, kind));
        self.scopes[scope.index()].insert(name, id);
        id
    }

    fn ensure_variable_in(&mut self, scope: ScopeId, name: InternedString) -> VariableId {
        if let Some(existing) = self.scopes[scope.index()].try_get_variable(name) {
            return existing;
        }
        // Module-level bindings live in the global namespace.
        let kind = if scope == ScopeId::MODULE {
            VariableKind::Global
        } else {
            VariableKind::Local
        };
        self.create_variable(scope, name, kind)
    }

    /// Return the existing variable for `name` in the current scope or
    /// create a Local (Global at module level). Idempotent.
    fn define_name(&mut self, name: InternedString) -> VariableId {
        self.ensure_variable_in(self.current, name)
    }

    fn define_parameter(&mut self, name: InternedString) -> VariableId {
        self.create_variable(self.current, name, VariableKind::Parameter)
    }

    fn define_deleted(&mut self, name: InternedString) -> VariableId {
        let variable = self.define_name(name);
        self.variables[variable.index()].deleted = true;
        variable
    }

    fn ensure_global_variable(&mut self, name: InternedString) -> VariableId {
        self.ensure_variable_in(ScopeId::MODULE, name)
    }

    /// Get or create the current scope's reference record for `name`. All
    /// uses of one name in one scope share a single record.
    fn reference(&mut self, name: InternedString) -> ReferenceId {
        if let Some(&existing) = self.registries[self.current.index()].references.get(&name) {
            return existing;
        }
        let id = ReferenceId(self.references.len() as u32);
        self.references.push(Reference::new(name, self.current));
        let registry = &mut self.registries[self.current.index()];
        registry.references.insert(name, id);
        registry.order.push(id);
        id
    }

    /// Register a reference and map the AST node to it.
    fn reference_node(&mut self, node: NodeId, name: InternedString) {
        let reference = self.reference(name);
        self.resolved.insert(node, reference);
    }

    /// Whether the current scope has already seen a use of `name`.
    fn is_referenced(&self, name: InternedString) -> bool {
        self.registries[self.current.index()]
            .references
            .contains_key(&name)
    }

    // ========================================================================
    // Target binding
    // ========================================================================

    /// Declare every plain name in an assignment-like target, recursing
    /// through destructuring.
    fn define_targets(&mut self, target: &Expression<'_>) {
        match target {
            Expression::Name(n) => {
                self.define_name(n.name);
            }
            Expression::Tuple(seq) | Expression::List(seq) => {
                for item in seq.items {
                    self.define_targets(item);
                }
            }
            Expression::Starred(s) => self.define_targets(s.target),
            Expression::Parenthesized(p) => self.define_targets(p.expression),
            // Member/index targets bind no names.
            _ => {}
        }
    }

    /// Declare every plain name in a `del` target and mark it deleted.
    fn define_deleted_targets(&mut self, target: &Expression<'_>) {
        match target {
            Expression::Name(n) => {
                self.define_deleted(n.name);
            }
            Expression::Tuple(seq) | Expression::List(seq) => {
                for item in seq.items {
                    self.define_deleted_targets(item);
                }
            }
            Expression::Parenthesized(p) => self.define_deleted_targets(p.expression),
            _ => {}
        }
    }

    /// Declare the names of a 2.x sublist parameter. The names are ordinary
    /// locals of the new scope, not parameters.
    fn define_sublist_names(&mut self, target: &Expression<'_>) {
        match target {
            Expression::Name(n) => {
                self.define_name(n.name);
                self.reference_node(n.data.id, n.name);
            }
            Expression::Tuple(seq) => {
                for item in seq.items {
                    self.define_sublist_names(item);
                }
            }
            Expression::Parenthesized(p) => self.define_sublist_names(p.expression),
            _ => {}
        }
    }

    fn define_parameters(&mut self, parameters: &[Parameter<'_>]) {
        for param in parameters {
            let variable = self.define_parameter(param.name);
            self.defined.insert(param.data.id, variable);
            if let Some(sublist) = param.sublist {
                self.define_sublist_names(sublist);
            }
        }
    }

    /// Walk the parts of a function or lambda header that evaluate at
    /// definition time, in the scope enclosing the definition.
    fn walk_definition_time_parts<'a>(
        &mut self,
        parameters: &'a [Parameter<'a>],
        decorators: &'a [Expression<'a>],
        return_annotation: Option<&'a Expression<'a>>,
    ) {
        for param in parameters {
            if let Some(default) = param.default {
                default.walk(self);
            }
            if let Some(annotation) = param.annotation {
                annotation.walk(self);
            }
        }
        for decorator in decorators {
            decorator.walk(self);
        }
        if let Some(annotation) = return_annotation {
            annotation.walk(self);
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    fn report(&mut self, range: TextRange, message: &DiagnosticMessage, name: InternedString) {
        let text = self.interner.resolve(name).to_string();
        self.diagnostics
            .add(Diagnostic::with_span(range.to_span(), message, &[&text]));
    }

    fn report_scope(&mut self, scope: ScopeId, message: &DiagnosticMessage) {
        let range = self.scopes[scope.index()].range;
        let display = match self.scopes[scope.index()].name {
            Some(name) => self.interner.resolve(name).to_string(),
            None => "<lambda>".to_string(),
        };
        self.diagnostics
            .add(Diagnostic::with_span(range.to_span(), message, &[&display]));
    }

    // ========================================================================
    // Phase 2: reference resolution
    // ========================================================================

    fn bind_scope(&mut self, scope: ScopeId) {
        let order = self.registries[scope.index()].order.clone();
        for id in order {
            let name = self.references[id.index()].name;
            let variable = self.bind_reference(scope, name);
            self.references[id.index()].variable = variable;
        }
    }

    fn bind_reference(&mut self, from: ScopeId, name: InternedString) -> Option<VariableId> {
        // Try to bind locally first.
        if let Some(variable) = self.scopes[from.index()].try_get_variable(name) {
            if self.variables[variable.index()].kind == VariableKind::Global {
                self.scopes[from.index()].add_referenced_global(name);
            }
            if self.variables[variable.index()].kind != VariableKind::Nonlocal {
                return Some(variable);
            }
        }

        // Walk ancestor scopes outward.
        let mut ancestor = self.scopes[from.index()].parent;
        while let Some(scope) = ancestor {
            if let Some(variable) = self.try_bind_outer(scope, from, name, true) {
                return Some(variable);
            }
            ancestor = self.scopes[scope.index()].parent;
        }

        // A module-scope reference with no binding is itself a global
        // namespace lookup.
        if from == ScopeId::MODULE {
            return self.try_bind_outer(ScopeId::MODULE, from, name, true);
        }
        None
    }

    /// Ask `scope` whether it exposes `name` to the nested scope `from`.
    fn try_bind_outer(
        &mut self,
        scope: ScopeId,
        from: ScopeId,
        name: InternedString,
        allow_globals: bool,
    ) -> Option<VariableId> {
        match self.scopes[scope.index()].kind {
            ScopeKind::Class => {
                // Class locals are invisible to nested scopes; only the
                // synthetic class cell leaks through.
                if name == self.names.dunder_class {
                    self.scopes[scope.index()].try_get_variable(name)
                } else {
                    None
                }
            }
            ScopeKind::Function | ScopeKind::Lambda => {
                // Functions expose their locals to direct access.
                self.scopes[scope.index()].flags |= ScopeFlags::CONTAINS_NESTED_FREE_VARIABLES;
                let variable = self.scopes[scope.index()].try_get_variable(name)?;
                self.variables[variable.index()].accessed_in_nested_scope = true;
                match self.variables[variable.index()].kind {
                    VariableKind::Local | VariableKind::Parameter => {
                        self.scopes[from.index()].add_free_variable(variable, true);
                        let mut between = self.scopes[from.index()].parent;
                        while let Some(mid) = between {
                            if mid == scope {
                                break;
                            }
                            self.scopes[mid.index()].add_free_variable(variable, false);
                            between = self.scopes[mid.index()].parent;
                        }
                        self.scopes[scope.index()].add_cell_variable(name);
                    }
                    _ => {
                        self.scopes[from.index()].add_referenced_global(name);
                    }
                }
                Some(variable)
            }
            ScopeKind::Module => {
                if !allow_globals {
                    return None;
                }
                self.scopes[from.index()].add_referenced_global(name);
                if self.late_bound_on_path(from) {
                    // Names can be set invisibly somewhere on this chain;
                    // the lookup must stay fully dynamic.
                    return None;
                }
                Some(self.ensure_global_variable(name))
            }
        }
    }

    /// Whether any scope from `from` up to and including the module allows
    /// late-bound variable sets.
    fn late_bound_on_path(&self, from: ScopeId) -> bool {
        let mut scope = Some(from);
        while let Some(id) = scope {
            if self.scopes[id.index()]
                .flags
                .contains(ScopeFlags::HAS_LATE_BOUND_SETS)
            {
                return true;
            }
            scope = self.scopes[id.index()].parent;
        }
        false
    }

    // ========================================================================
    // Phase 3: closure finalization
    // ========================================================================

    fn finish_scope(&mut self, scope: ScopeId) {
        self.validate_nonlocals(scope);

        let kind = self.scopes[scope.index()].kind;
        if matches!(kind, ScopeKind::Function | ScopeKind::Lambda) {
            self.check_late_bound_constructs(scope);
        }

        // Assemble the closure list: captured variables first, then owned
        // locals that descendants reach.
        let mut closure: Vec<ClosureVariable> = self.scopes[scope.index()]
            .free_variables()
            .iter()
            .map(|free| ClosureVariable {
                variable: free.variable,
                accessed_in_scope: kind != ScopeKind::Class,
            })
            .collect();

        let mut owned: Vec<(InternedString, VariableId)> =
            self.scopes[scope.index()].variables().collect();
        owned.sort_by_key(|(_, variable)| *variable);

        let exposes = self.scopes[scope.index()].exposes_local_variables();
        for (name, id) in owned {
            let variable = &self.variables[id.index()];
            if variable.scope != scope {
                // An alias inserted by a `global` declaration.
                continue;
            }
            let is_cell_like = matches!(
                variable.kind,
                VariableKind::Local | VariableKind::Parameter
            );
            if is_cell_like && variable.deleted && variable.accessed_in_nested_scope {
                let range = self.scopes[scope.index()].range;
                self.report(range, &messages::DELETE_OF_CELL_VARIABLE, name);
            }
            let variable = &self.variables[id.index()];
            if variable.kind != VariableKind::Global
                && !closure.iter().any(|c| c.variable == id)
                && (variable.accessed_in_nested_scope || exposes)
            {
                closure.push(ClosureVariable {
                    variable: id,
                    accessed_in_scope: true,
                });
            }
        }
        self.scopes[scope.index()].set_closure_variables(closure);
    }

    /// Every `nonlocal` name must re-resolve to a non-global binding in
    /// some ancestor function scope.
    fn validate_nonlocals(&mut self, scope: ScopeId) {
        let nonlocals = std::mem::take(&mut self.registries[scope.index()].nonlocals);
        for (name, range) in &nonlocals {
            let mut bound = false;
            let mut ancestor = self.scopes[scope.index()].parent;
            while let Some(parent) = ancestor {
                if let Some(variable) = self.try_bind_outer(parent, scope, *name, false) {
                    bound = self.variables[variable.index()].kind != VariableKind::Global;
                    break;
                }
                ancestor = self.scopes[parent.index()].parent;
            }
            if !bound {
                self.report(*range, &messages::NO_BINDING_FOR_NONLOCAL, *name);
            }
        }
    }

    /// Wildcard import and unqualified exec make free-variable capture
    /// ambiguous, so they are illegal in any function that is a closure or
    /// contains nested closures.
    fn check_late_bound_constructs(&mut self, scope: ScopeId) {
        let flags = self.scopes[scope.index()].flags;
        let is_closure = self.scopes[scope.index()].is_closure();
        let nested_free = flags.contains(ScopeFlags::CONTAINS_NESTED_FREE_VARIABLES);

        if flags.contains(ScopeFlags::CONTAINS_IMPORT_STAR) {
            if is_closure {
                self.report_scope(scope, &messages::IMPORT_STAR_IN_NESTED_FUNCTION);
            }
            if nested_free {
                self.report_scope(scope, &messages::IMPORT_STAR_WITH_NESTED_FREE_VARIABLES);
            }
        }
        if flags.contains(ScopeFlags::CONTAINS_UNQUALIFIED_EXEC) {
            if is_closure {
                self.report_scope(scope, &messages::UNQUALIFIED_EXEC_IN_NESTED_FUNCTION);
            }
            if nested_free {
                self.report_scope(scope, &messages::UNQUALIFIED_EXEC_WITH_NESTED_FREE_VARIABLES);
            }
        }
    }
}

// ============================================================================
// Phase 1: discovery walk
// ============================================================================

impl<'a> Walker<'a> for Binder {
    fn enter_assign(&mut self, node: &'a AssignStmt<'a>) -> bool {
        for target in node.targets {
            self.define_targets(target);
        }
        true
    }

    fn enter_aug_assign(&mut self, node: &'a AugAssignStmt<'a>) -> bool {
        self.define_targets(node.target);
        true
    }

    fn enter_name(&mut self, node: &'a NameExpr) -> bool {
        self.reference_node(node.data.id, node.name);
        true
    }

    fn leave_call(&mut self, node: &'a CallExpr<'a>) {
        // A bare call to a dynamic-eval builtin means the locals dictionary
        // must stay materializable.
        if let Expression::Name(target) = node.target {
            if self.names.is_dynamic_eval(target.name) {
                self.current_scope_mut().flags |= ScopeFlags::NEEDS_LOCALS_SNAPSHOT;
            }
        }
    }

    fn enter_for(&mut self, node: &'a ForStmt<'a>) -> bool {
        self.define_targets(node.target);
        true
    }

    fn enter_with(&mut self, node: &'a WithStmt<'a>) -> bool {
        self.current_scope_mut().flags |= ScopeFlags::CONTAINS_EXCEPTION_HANDLING;
        for item in node.items {
            if let Some(target) = item.target {
                self.define_targets(target);
            }
        }
        true
    }

    fn enter_try(&mut self, node: &'a TryStmt<'a>) -> bool {
        let _ = node;
        self.current_scope_mut().flags |= ScopeFlags::CONTAINS_EXCEPTION_HANDLING;
        true
    }

    fn enter_except_handler(&mut self, node: &'a ExceptHandler<'a>) -> bool {
        if let Some(target) = node.target {
            self.define_targets(target);
        }
        true
    }

    fn enter_del(&mut self, node: &'a DelStmt<'a>) -> bool {
        for target in node.targets {
            self.define_deleted_targets(target);
        }
        true
    }

    fn enter_exec(&mut self, node: &'a ExecStmt<'a>) -> bool {
        if node.is_unqualified() {
            self.current_scope_mut().flags |= ScopeFlags::CONTAINS_UNQUALIFIED_EXEC;
        }
        true
    }

    fn leave_exec(&mut self, node: &'a ExecStmt<'a>) {
        if node.is_unqualified() {
            self.current_scope_mut().flags |= ScopeFlags::NEEDS_LOCALS_SNAPSHOT;
        }
        if node.locals.is_none() {
            self.current_scope_mut().flags |= ScopeFlags::HAS_LATE_BOUND_SETS;
        }
    }

    fn enter_import(&mut self, node: &'a ImportStmt<'a>) -> bool {
        for alias in node.names {
            if let Some(bound) = alias.bound_name() {
                let variable = self.define_name(bound);
                self.defined.insert(alias.data.id, variable);
                self.reference_node(alias.data.id, bound);
            }
        }
        true
    }

    fn enter_from_import(&mut self, node: &'a FromImportStmt<'a>) -> bool {
        match &node.names {
            FromImportNames::Star => {
                // Any name in this scope can now be introduced invisibly;
                // static resolution through it must give up.
                let scope = self.current_scope_mut();
                scope.flags |= ScopeFlags::CONTAINS_IMPORT_STAR
                    | ScopeFlags::NEEDS_LOCALS_SNAPSHOT
                    | ScopeFlags::HAS_LATE_BOUND_SETS;
            }
            FromImportNames::Names(names) => {
                for alias in *names {
                    let bound = alias.bound_name();
                    let variable = self.define_name(bound);
                    self.defined.insert(alias.data.id, variable);
                    self.reference_node(alias.data.id, bound);
                }
            }
        }
        true
    }

    fn enter_global(&mut self, node: &'a GlobalStmt<'a>) -> bool {
        for name_node in node.names {
            let name = name_node.name;

            // Check the current scope for a conflicting declaration.
            let conflict = self.scopes[self.current.index()].try_get_variable(name);
            let mut assigned_global = false;
            if let Some(existing) = conflict {
                match self.variables[existing.index()].kind {
                    VariableKind::Global | VariableKind::Local => {
                        assigned_global = true;
                        self.report(
                            node.data.range,
                            &messages::ASSIGNED_BEFORE_GLOBAL_DECLARATION,
                            name,
                        );
                    }
                    VariableKind::Parameter => {
                        self.report(node.data.range, &messages::PARAMETER_DECLARED_GLOBAL, name);
                    }
                    VariableKind::Nonlocal => {}
                }
            }

            if self.is_referenced(name) && !assigned_global {
                self.report(
                    node.data.range,
                    &messages::USED_BEFORE_GLOBAL_DECLARATION,
                    name,
                );
            }

            // Create the variable in the module scope and force it global.
            let variable = self.ensure_global_variable(name);
            self.variables[variable.index()].kind = VariableKind::Global;

            if conflict.is_none() {
                // No previous declaration here: alias the module variable
                // into the current scope.
                self.scopes[self.current.index()].insert(name, variable);
            }

            self.reference_node(name_node.data.id, name);
        }
        true
    }

    fn enter_nonlocal(&mut self, node: &'a NonlocalStmt<'a>) -> bool {
        for name_node in node.names {
            let name = name_node.name;

            let conflict = self.scopes[self.current.index()].try_get_variable(name);
            let mut assigned_local = false;
            if let Some(existing) = conflict {
                match self.variables[existing.index()].kind {
                    VariableKind::Global => {
                        self.report(node.data.range, &messages::NONLOCAL_AND_GLOBAL, name);
                    }
                    VariableKind::Local => {
                        assigned_local = true;
                        self.report(
                            node.data.range,
                            &messages::ASSIGNED_BEFORE_NONLOCAL_DECLARATION,
                            name,
                        );
                    }
                    VariableKind::Parameter => {
                        self.report(node.data.range, &messages::PARAMETER_DECLARED_NONLOCAL, name);
                    }
                    VariableKind::Nonlocal => {}
                }
            }

            if self.is_referenced(name) && !assigned_local {
                self.report(
                    node.data.range,
                    &messages::USED_BEFORE_NONLOCAL_DECLARATION,
                    name,
                );
            }

            if conflict.is_none() {
                self.create_variable(self.current, name, VariableKind::Nonlocal);
            }
            self.registries[self.current.index()]
                .nonlocals
                .push((name, node.data.range));
            self.reference_node(name_node.data.id, name);
        }
        true
    }

    fn enter_function_def(&mut self, node: &'a FunctionDef<'a>) -> bool {
        self.ensure_global_variable(self.names.dunder_name);

        // The name binds in the enclosing scope.
        let variable = self.define_name(node.name);
        self.defined.insert(node.data.id, variable);
        self.reference_node(node.data.id, node.name);

        // Defaults, annotations, and decorators evaluate at definition
        // time, in the enclosing scope.
        self.walk_definition_time_parts(node.parameters, node.decorators, node.return_annotation);

        self.push_scope(
            ScopeKind::Function,
            node.data.id,
            node.data.range,
            Some(node.name),
        );
        self.define_parameters(node.parameters);
        node.body.walk(self);
        false
    }

    fn leave_function_def(&mut self, node: &'a FunctionDef<'a>) {
        let _ = node;
        self.pop_scope();
    }

    fn enter_lambda(&mut self, node: &'a LambdaExpr<'a>) -> bool {
        self.ensure_global_variable(self.names.dunder_name);
        self.walk_definition_time_parts(node.parameters, &[], None);

        self.push_scope(ScopeKind::Lambda, node.data.id, node.data.range, None);
        self.define_parameters(node.parameters);
        node.body.walk(self);
        false
    }

    fn leave_lambda(&mut self, node: &'a LambdaExpr<'a>) {
        let _ = node;
        self.pop_scope();
    }

    fn enter_class_def(&mut self, node: &'a ClassDef<'a>) -> bool {
        // The class name binds in the enclosing scope, and bases and
        // decorators evaluate there.
        let variable = self.define_name(node.name);
        self.defined.insert(node.data.id, variable);
        self.reference_node(node.data.id, node.name);

        for base in node.bases {
            base.walk(self);
        }
        for decorator in node.decorators {
            decorator.walk(self);
        }

        self.push_scope(
            ScopeKind::Class,
            node.data.id,
            node.data.range,
            Some(node.name),
        );

        self.ensure_global_variable(self.names.dunder_name);
        if node.body.docstring().is_some() {
            self.define_name(self.names.dunder_doc);
        }
        self.define_name(self.names.dunder_module);
        if self.version.is_3x() {
            // The synthetic cell exposing the class object to nested
            // scopes.
            self.define_name(self.names.dunder_class);
        }

        node.body.walk(self);
        false
    }

    fn leave_class_def(&mut self, node: &'a ClassDef<'a>) {
        let _ = node;
        self.pop_scope();
    }

    fn enter_comprehension_for(&mut self, node: &'a ComprehensionFor<'a>) -> bool {
        // Comprehension targets bind into the enclosing scope; no hidden
        // scope is created for any comprehension form.
        self.define_targets(node.target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use serpent_nodebuilder::AstBuilder;

    #[test]
    fn test_bind_empty_module() {
        let arena = Bump::new();
        let builder = AstBuilder::new(&arena, PythonVersion::V37);
        let module = builder.module(vec![], "empty");

        let bound = Binder::bind(module);
        assert_eq!(bound.scopes().len(), 1);
        assert_eq!(bound.module_scope().kind, ScopeKind::Module);
        assert!(bound.diagnostics().is_empty());
        assert_eq!(bound.module_scope().variable_count(), 0);
    }

    #[test]
    fn test_function_def_ensures_module_dunder_name() {
        let arena = Bump::new();
        let mut builder = AstBuilder::new(&arena, PythonVersion::V37);
        let pass = builder.pass_stmt();
        let body = builder.suite(vec![pass]);
        let f = builder.function_def("f", vec![], body);
        let module = builder.module(vec![f], "test");

        let bound = Binder::bind(module);
        let dunder = bound
            .variable_named(ScopeId::MODULE, "__name__")
            .expect("__name__ not ensured");
        assert_eq!(dunder.kind, VariableKind::Global);
    }

    #[test]
    fn test_references_are_deduplicated_per_scope() {
        // x; x; x -- one reference record, three resolved nodes
        let arena = Bump::new();
        let mut builder = AstBuilder::new(&arena, PythonVersion::V37);
        let mut ids = Vec::new();
        let mut statements = Vec::new();
        for _ in 0..3 {
            let use_expr = builder.name("x");
            ids.push(use_expr.id());
            statements.push(builder.expr_stmt(use_expr));
        }
        let module = builder.module(statements, "test");

        let bound = Binder::bind(module);
        let first = bound.resolved(ids[0]).expect("x not referenced");
        for id in &ids[1..] {
            let reference = bound.resolved(*id).expect("x not referenced");
            assert_eq!(reference.variable, first.variable);
        }
    }
}

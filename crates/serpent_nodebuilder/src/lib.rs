//! serpent_nodebuilder: Programmatic AST construction.
//!
//! Builds well-formed trees without going through a parser: nodes are
//! allocated in the caller's arena, identifiers are interned, and every node
//! gets a fresh `NodeId` plus a synthetic source range that increases
//! monotonically in construction order. The binder's test suites and benches
//! use this as their tree source.

use bumpalo::Bump;
use serpent_ast::node::*;
use serpent_ast::version::PythonVersion;
use serpent_core::intern::{InternedString, StringInterner};
use serpent_core::text::TextRange;

/// Builds one `Module` tree. Create one builder per tree; `finish` consumes
/// it and seals the id space.
pub struct AstBuilder<'a> {
    arena: &'a Bump,
    interner: StringInterner,
    version: PythonVersion,
    next_id: u32,
    cursor: u32,
}

impl<'a> AstBuilder<'a> {
    pub fn new(arena: &'a Bump, version: PythonVersion) -> Self {
        Self {
            arena,
            interner: StringInterner::new(),
            version,
            next_id: 0,
            cursor: 0,
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[inline]
    pub fn intern(&self, s: &str) -> InternedString {
        self.interner.intern(s)
    }

    /// Assign a header for the next node: fresh id, synthetic one-byte range
    /// at the current cursor.
    fn data(&mut self, kind: NodeKind) -> NodeData {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let pos = self.cursor;
        self.cursor += 1;
        NodeData::new(kind, TextRange::new(pos, pos + 1), id)
    }

    fn alloc_expr(&mut self, expr: Expression<'a>) -> &'a Expression<'a> {
        self.arena.alloc(expr)
    }

    fn alloc_exprs(&mut self, exprs: Vec<Expression<'a>>) -> &'a [Expression<'a>] {
        self.arena.alloc_slice_fill_iter(exprs)
    }

    // ========================================================================
    // Module and suites
    // ========================================================================

    pub fn suite(&mut self, statements: Vec<Statement<'a>>) -> &'a Suite<'a> {
        let data = self.data(NodeKind::Suite);
        let statements = self.arena.alloc_slice_fill_iter(statements);
        self.arena.alloc(Suite { data, statements })
    }

    /// Seal the tree. The module takes the interner and the id count with it.
    pub fn finish(mut self, body: &'a Suite<'a>, module_name: &str) -> &'a Module<'a> {
        let data = self.data(NodeKind::Module);
        let node_count = self.next_id;
        self.arena.alloc(Module {
            data,
            body,
            module_name: module_name.to_string(),
            version: self.version,
            interner: self.interner,
            node_count,
        })
    }

    /// Convenience: wrap statements in a suite and seal the tree.
    pub fn module(mut self, statements: Vec<Statement<'a>>, module_name: &str) -> &'a Module<'a> {
        let body = self.suite(statements);
        self.finish(body, module_name)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn name(&mut self, name: &str) -> Expression<'a> {
        let data = self.data(NodeKind::Name);
        Expression::Name(NameExpr {
            data,
            name: self.intern(name),
        })
    }

    pub fn none(&mut self) -> Expression<'a> {
        let data = self.data(NodeKind::Constant);
        Expression::Constant(ConstantExpr {
            data,
            value: Constant::None,
        })
    }

    pub fn int(&mut self, value: i64) -> Expression<'a> {
        let data = self.data(NodeKind::Constant);
        Expression::Constant(ConstantExpr {
            data,
            value: Constant::Int(value),
        })
    }

    pub fn float(&mut self, value: f64) -> Expression<'a> {
        let data = self.data(NodeKind::Constant);
        Expression::Constant(ConstantExpr {
            data,
            value: Constant::Float(value),
        })
    }

    pub fn str_lit(&mut self, value: &str) -> Expression<'a> {
        let data = self.data(NodeKind::Constant);
        Expression::Constant(ConstantExpr {
            data,
            value: Constant::Str(self.intern(value)),
        })
    }

    pub fn bool_lit(&mut self, value: bool) -> Expression<'a> {
        let data = self.data(NodeKind::Constant);
        Expression::Constant(ConstantExpr {
            data,
            value: Constant::Bool(value),
        })
    }

    pub fn tuple(&mut self, items: Vec<Expression<'a>>) -> Expression<'a> {
        let data = self.data(NodeKind::Tuple);
        let items = self.alloc_exprs(items);
        Expression::Tuple(SequenceExpr { data, items })
    }

    pub fn list(&mut self, items: Vec<Expression<'a>>) -> Expression<'a> {
        let data = self.data(NodeKind::List);
        let items = self.alloc_exprs(items);
        Expression::List(SequenceExpr { data, items })
    }

    pub fn set(&mut self, items: Vec<Expression<'a>>) -> Expression<'a> {
        let data = self.data(NodeKind::Set);
        let items = self.alloc_exprs(items);
        Expression::Set(SequenceExpr { data, items })
    }

    pub fn dict(&mut self, items: Vec<(Option<Expression<'a>>, Expression<'a>)>) -> Expression<'a> {
        let data = self.data(NodeKind::Dict);
        let items: Vec<DictItem<'a>> = items
            .into_iter()
            .map(|(key, value)| DictItem {
                key: key.map(|k| &*self.arena.alloc(k)),
                value: self.arena.alloc(value),
            })
            .collect();
        let items = self.arena.alloc_slice_fill_iter(items);
        Expression::Dict(DictExpr { data, items })
    }

    pub fn starred(&mut self, target: Expression<'a>) -> Expression<'a> {
        let data = self.data(NodeKind::Starred);
        let target = self.alloc_expr(target);
        Expression::Starred(StarredExpr { data, target })
    }

    pub fn paren(&mut self, expression: Expression<'a>) -> Expression<'a> {
        let data = self.data(NodeKind::Parenthesized);
        let expression = self.alloc_expr(expression);
        Expression::Parenthesized(ParenthesizedExpr { data, expression })
    }

    pub fn member(&mut self, target: Expression<'a>, member: &str) -> Expression<'a> {
        let data = self.data(NodeKind::Member);
        let target = self.alloc_expr(target);
        Expression::Member(MemberExpr {
            data,
            target,
            member: self.intern(member),
        })
    }

    pub fn index(&mut self, target: Expression<'a>, index: Expression<'a>) -> Expression<'a> {
        let data = self.data(NodeKind::Index);
        let target = self.alloc_expr(target);
        let index = self.alloc_expr(index);
        Expression::Index(IndexExpr {
            data,
            target,
            index,
        })
    }

    pub fn slice(
        &mut self,
        lower: Option<Expression<'a>>,
        upper: Option<Expression<'a>>,
        step: Option<Expression<'a>>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::Slice);
        Expression::Slice(SliceExpr {
            data,
            lower: lower.map(|e| &*self.arena.alloc(e)),
            upper: upper.map(|e| &*self.arena.alloc(e)),
            step: step.map(|e| &*self.arena.alloc(e)),
        })
    }

    /// A call with positional arguments only.
    pub fn call(&mut self, target: Expression<'a>, args: Vec<Expression<'a>>) -> Expression<'a> {
        let args = args
            .into_iter()
            .map(|value| self.pos_arg(value))
            .collect();
        self.call_args(target, args)
    }

    pub fn call_args(&mut self, target: Expression<'a>, args: Vec<Argument<'a>>) -> Expression<'a> {
        let data = self.data(NodeKind::Call);
        let target = self.alloc_expr(target);
        let args = self.arena.alloc_slice_fill_iter(args);
        Expression::Call(CallExpr { data, target, args })
    }

    pub fn pos_arg(&mut self, value: Expression<'a>) -> Argument<'a> {
        let data = self.data(NodeKind::Argument);
        Argument {
            data,
            kind: ArgumentKind::Positional,
            value: self.alloc_expr(value),
        }
    }

    pub fn kw_arg(&mut self, name: &str, value: Expression<'a>) -> Argument<'a> {
        let data = self.data(NodeKind::Argument);
        Argument {
            data,
            kind: ArgumentKind::Keyword(self.intern(name)),
            value: self.alloc_expr(value),
        }
    }

    pub fn unary(&mut self, op: UnaryOperator, operand: Expression<'a>) -> Expression<'a> {
        let data = self.data(NodeKind::Unary);
        let operand = self.alloc_expr(operand);
        Expression::Unary(UnaryExpr { data, op, operand })
    }

    pub fn binary(
        &mut self,
        op: BinaryOperator,
        left: Expression<'a>,
        right: Expression<'a>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::Binary);
        let left = self.alloc_expr(left);
        let right = self.alloc_expr(right);
        Expression::Binary(BinaryExpr {
            data,
            op,
            left,
            right,
        })
    }

    pub fn bool_op(
        &mut self,
        op: BoolOperator,
        left: Expression<'a>,
        right: Expression<'a>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::BoolOp);
        let left = self.alloc_expr(left);
        let right = self.alloc_expr(right);
        Expression::BoolOp(BoolOpExpr {
            data,
            op,
            left,
            right,
        })
    }

    pub fn conditional(
        &mut self,
        if_true: Expression<'a>,
        test: Expression<'a>,
        if_false: Expression<'a>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::Conditional);
        let if_true = self.alloc_expr(if_true);
        let test = self.alloc_expr(test);
        let if_false = self.alloc_expr(if_false);
        Expression::Conditional(ConditionalExpr {
            data,
            test,
            if_true,
            if_false,
        })
    }

    pub fn lambda(
        &mut self,
        parameters: Vec<Parameter<'a>>,
        body: Expression<'a>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::Lambda);
        let parameters = self.arena.alloc_slice_fill_iter(parameters);
        let body = self.alloc_expr(body);
        Expression::Lambda(LambdaExpr {
            data,
            parameters,
            body,
        })
    }

    pub fn comp_for(
        &mut self,
        target: Expression<'a>,
        iter: Expression<'a>,
    ) -> ComprehensionClause<'a> {
        let data = self.data(NodeKind::ComprehensionFor);
        let target = self.alloc_expr(target);
        let iter = self.alloc_expr(iter);
        ComprehensionClause::For(ComprehensionFor { data, target, iter })
    }

    pub fn comp_if(&mut self, test: Expression<'a>) -> ComprehensionClause<'a> {
        let data = self.data(NodeKind::ComprehensionIf);
        let test = self.alloc_expr(test);
        ComprehensionClause::If(ComprehensionIf { data, test })
    }

    pub fn list_comp(
        &mut self,
        element: Expression<'a>,
        clauses: Vec<ComprehensionClause<'a>>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::ListComp);
        let element = self.alloc_expr(element);
        let clauses = self.arena.alloc_slice_fill_iter(clauses);
        Expression::ListComp(ComprehensionExpr {
            data,
            element,
            clauses,
        })
    }

    pub fn set_comp(
        &mut self,
        element: Expression<'a>,
        clauses: Vec<ComprehensionClause<'a>>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::SetComp);
        let element = self.alloc_expr(element);
        let clauses = self.arena.alloc_slice_fill_iter(clauses);
        Expression::SetComp(ComprehensionExpr {
            data,
            element,
            clauses,
        })
    }

    pub fn generator(
        &mut self,
        element: Expression<'a>,
        clauses: Vec<ComprehensionClause<'a>>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::Generator);
        let element = self.alloc_expr(element);
        let clauses = self.arena.alloc_slice_fill_iter(clauses);
        Expression::Generator(ComprehensionExpr {
            data,
            element,
            clauses,
        })
    }

    pub fn dict_comp(
        &mut self,
        key: Expression<'a>,
        value: Expression<'a>,
        clauses: Vec<ComprehensionClause<'a>>,
    ) -> Expression<'a> {
        let data = self.data(NodeKind::DictComp);
        let key = self.alloc_expr(key);
        let value = self.alloc_expr(value);
        let clauses = self.arena.alloc_slice_fill_iter(clauses);
        Expression::DictComp(DictCompExpr {
            data,
            key,
            value,
            clauses,
        })
    }

    pub fn await_expr(&mut self, value: Expression<'a>) -> Expression<'a> {
        let data = self.data(NodeKind::Await);
        let value = self.alloc_expr(value);
        Expression::Await(AwaitExpr { data, value })
    }

    pub fn yield_expr(&mut self, value: Option<Expression<'a>>) -> Expression<'a> {
        let data = self.data(NodeKind::Yield);
        Expression::Yield(YieldExpr {
            data,
            value: value.map(|e| &*self.arena.alloc(e)),
        })
    }

    pub fn yield_from(&mut self, value: Expression<'a>) -> Expression<'a> {
        let data = self.data(NodeKind::YieldFrom);
        let value = self.alloc_expr(value);
        Expression::YieldFrom(YieldFromExpr { data, value })
    }

    pub fn error_expr(&mut self) -> Expression<'a> {
        let data = self.data(NodeKind::ErrorExpr);
        Expression::Error(ErrorExpr { data })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn expr_stmt(&mut self, expression: Expression<'a>) -> Statement<'a> {
        let data = self.data(NodeKind::ExprStmt);
        let expression = self.alloc_expr(expression);
        Statement::Expr(ExprStmt { data, expression })
    }

    pub fn assign(&mut self, targets: Vec<Expression<'a>>, value: Expression<'a>) -> Statement<'a> {
        let data = self.data(NodeKind::Assign);
        let targets = self.alloc_exprs(targets);
        let value = self.alloc_expr(value);
        Statement::Assign(AssignStmt {
            data,
            targets,
            value,
        })
    }

    /// `name = value`, the common single-target case.
    pub fn assign_name(&mut self, name: &str, value: Expression<'a>) -> Statement<'a> {
        let target = self.name(name);
        self.assign(vec![target], value)
    }

    pub fn aug_assign(
        &mut self,
        target: Expression<'a>,
        op: BinaryOperator,
        value: Expression<'a>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::AugAssign);
        let target = self.alloc_expr(target);
        let value = self.alloc_expr(value);
        Statement::AugAssign(AugAssignStmt {
            data,
            target,
            op,
            value,
        })
    }

    pub fn if_stmt(
        &mut self,
        test: Expression<'a>,
        body: &'a Suite<'a>,
        orelse: Option<&'a Suite<'a>>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::If);
        let test = self.alloc_expr(test);
        Statement::If(IfStmt {
            data,
            test,
            body,
            orelse,
        })
    }

    pub fn while_stmt(
        &mut self,
        test: Expression<'a>,
        body: &'a Suite<'a>,
        orelse: Option<&'a Suite<'a>>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::While);
        let test = self.alloc_expr(test);
        Statement::While(WhileStmt {
            data,
            test,
            body,
            orelse,
        })
    }

    pub fn for_stmt(
        &mut self,
        target: Expression<'a>,
        iter: Expression<'a>,
        body: &'a Suite<'a>,
        orelse: Option<&'a Suite<'a>>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::For);
        let target = self.alloc_expr(target);
        let iter = self.alloc_expr(iter);
        Statement::For(ForStmt {
            data,
            target,
            iter,
            body,
            orelse,
        })
    }

    pub fn with_item(
        &mut self,
        context: Expression<'a>,
        target: Option<Expression<'a>>,
    ) -> WithItem<'a> {
        let data = self.data(NodeKind::WithItem);
        WithItem {
            data,
            context: self.alloc_expr(context),
            target: target.map(|e| &*self.arena.alloc(e)),
        }
    }

    pub fn with_stmt(&mut self, items: Vec<WithItem<'a>>, body: &'a Suite<'a>) -> Statement<'a> {
        let data = self.data(NodeKind::With);
        let items = self.arena.alloc_slice_fill_iter(items);
        Statement::With(WithStmt { data, items, body })
    }

    pub fn except_handler(
        &mut self,
        test: Option<Expression<'a>>,
        target: Option<Expression<'a>>,
        body: &'a Suite<'a>,
    ) -> ExceptHandler<'a> {
        let data = self.data(NodeKind::ExceptHandler);
        ExceptHandler {
            data,
            test: test.map(|e| &*self.arena.alloc(e)),
            target: target.map(|e| &*self.arena.alloc(e)),
            body,
        }
    }

    pub fn try_stmt(
        &mut self,
        body: &'a Suite<'a>,
        handlers: Vec<ExceptHandler<'a>>,
        orelse: Option<&'a Suite<'a>>,
        finally: Option<&'a Suite<'a>>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::Try);
        let handlers = self.arena.alloc_slice_fill_iter(handlers);
        Statement::Try(TryStmt {
            data,
            body,
            handlers,
            orelse,
            finally,
        })
    }

    pub fn raise(
        &mut self,
        exc: Option<Expression<'a>>,
        cause: Option<Expression<'a>>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::Raise);
        Statement::Raise(RaiseStmt {
            data,
            exc: exc.map(|e| &*self.arena.alloc(e)),
            cause: cause.map(|e| &*self.arena.alloc(e)),
        })
    }

    pub fn return_stmt(&mut self, value: Option<Expression<'a>>) -> Statement<'a> {
        let data = self.data(NodeKind::Return);
        Statement::Return(ReturnStmt {
            data,
            value: value.map(|e| &*self.arena.alloc(e)),
        })
    }

    pub fn break_stmt(&mut self) -> Statement<'a> {
        let data = self.data(NodeKind::Break);
        Statement::Break(BreakStmt { data })
    }

    pub fn continue_stmt(&mut self) -> Statement<'a> {
        let data = self.data(NodeKind::Continue);
        Statement::Continue(ContinueStmt { data })
    }

    pub fn pass_stmt(&mut self) -> Statement<'a> {
        let data = self.data(NodeKind::Pass);
        Statement::Pass(PassStmt { data })
    }

    pub fn assert_stmt(
        &mut self,
        test: Expression<'a>,
        msg: Option<Expression<'a>>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::Assert);
        let test = self.alloc_expr(test);
        Statement::Assert(AssertStmt {
            data,
            test,
            msg: msg.map(|e| &*self.arena.alloc(e)),
        })
    }

    pub fn del_stmt(&mut self, targets: Vec<Expression<'a>>) -> Statement<'a> {
        let data = self.data(NodeKind::Del);
        let targets = self.alloc_exprs(targets);
        Statement::Del(DelStmt { data, targets })
    }

    fn name_list(&mut self, names: &[&str]) -> &'a [NameExpr] {
        let nodes: Vec<NameExpr> = names
            .iter()
            .map(|n| {
                let data = self.data(NodeKind::Name);
                NameExpr {
                    data,
                    name: self.intern(n),
                }
            })
            .collect();
        self.arena.alloc_slice_fill_iter(nodes)
    }

    pub fn global_stmt(&mut self, names: &[&str]) -> Statement<'a> {
        let data = self.data(NodeKind::Global);
        let names = self.name_list(names);
        Statement::Global(GlobalStmt { data, names })
    }

    pub fn nonlocal_stmt(&mut self, names: &[&str]) -> Statement<'a> {
        let data = self.data(NodeKind::Nonlocal);
        let names = self.name_list(names);
        Statement::Nonlocal(NonlocalStmt { data, names })
    }

    fn dotted(&mut self, name: &str) -> &'a [InternedString] {
        let segments: Vec<InternedString> =
            name.split('.').map(|s| self.intern(s)).collect();
        self.arena.alloc_slice_fill_iter(segments)
    }

    /// `import a.b as c, d` — pairs of dotted name and optional alias.
    pub fn import(&mut self, names: Vec<(&str, Option<&str>)>) -> Statement<'a> {
        let data = self.data(NodeKind::Import);
        let aliases: Vec<ImportAlias<'a>> = names
            .into_iter()
            .map(|(name, as_name)| {
                let data = self.data(NodeKind::ImportAlias);
                ImportAlias {
                    data,
                    name: self.dotted(name),
                    as_name: as_name.map(|a| self.intern(a)),
                }
            })
            .collect();
        let names = self.arena.alloc_slice_fill_iter(aliases);
        Statement::Import(ImportStmt { data, names })
    }

    /// `from module import x as y, z`
    pub fn from_import(
        &mut self,
        module: &str,
        names: Vec<(&str, Option<&str>)>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::FromImport);
        let module = self.dotted(module);
        let aliases: Vec<FromImportAlias> = names
            .into_iter()
            .map(|(name, as_name)| {
                let data = self.data(NodeKind::FromImportAlias);
                FromImportAlias {
                    data,
                    name: self.intern(name),
                    as_name: as_name.map(|a| self.intern(a)),
                }
            })
            .collect();
        let names = self.arena.alloc_slice_fill_iter(aliases);
        Statement::FromImport(FromImportStmt {
            data,
            module,
            names: FromImportNames::Names(names),
        })
    }

    /// `from module import *`
    pub fn from_import_star(&mut self, module: &str) -> Statement<'a> {
        let data = self.data(NodeKind::FromImport);
        let module = self.dotted(module);
        Statement::FromImport(FromImportStmt {
            data,
            module,
            names: FromImportNames::Star,
        })
    }

    pub fn exec_stmt(
        &mut self,
        body: Expression<'a>,
        globals: Option<Expression<'a>>,
        locals: Option<Expression<'a>>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::Exec);
        let body = self.alloc_expr(body);
        Statement::Exec(ExecStmt {
            data,
            body,
            globals: globals.map(|e| &*self.arena.alloc(e)),
            locals: locals.map(|e| &*self.arena.alloc(e)),
        })
    }

    pub fn param(&mut self, name: &str) -> Parameter<'a> {
        let data = self.data(NodeKind::Parameter);
        Parameter {
            data,
            kind: ParameterKind::Normal,
            name: self.intern(name),
            sublist: None,
            annotation: None,
            default: None,
        }
    }

    pub fn param_with_default(&mut self, name: &str, default: Expression<'a>) -> Parameter<'a> {
        let mut param = self.param(name);
        param.default = Some(self.arena.alloc(default));
        param
    }

    pub fn param_annotated(&mut self, name: &str, annotation: Expression<'a>) -> Parameter<'a> {
        let mut param = self.param(name);
        param.annotation = Some(self.arena.alloc(annotation));
        param
    }

    pub fn list_splat_param(&mut self, name: &str) -> Parameter<'a> {
        let mut param = self.param(name);
        param.kind = ParameterKind::ListSplat;
        param
    }

    pub fn dict_splat_param(&mut self, name: &str) -> Parameter<'a> {
        let mut param = self.param(name);
        param.kind = ParameterKind::DictSplat;
        param
    }

    /// 2.x sublist parameter: `def f(a, (b, c)):` — `name` is the synthetic
    /// positional name, `tuple` the unpacking target.
    pub fn sublist_param(&mut self, name: &str, tuple: Expression<'a>) -> Parameter<'a> {
        let mut param = self.param(name);
        param.sublist = Some(self.arena.alloc(tuple));
        param
    }

    pub fn function_def(
        &mut self,
        name: &str,
        parameters: Vec<Parameter<'a>>,
        body: &'a Suite<'a>,
    ) -> Statement<'a> {
        self.function_def_full(name, parameters, vec![], None, body)
    }

    pub fn function_def_full(
        &mut self,
        name: &str,
        parameters: Vec<Parameter<'a>>,
        decorators: Vec<Expression<'a>>,
        return_annotation: Option<Expression<'a>>,
        body: &'a Suite<'a>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::FunctionDef);
        let parameters = self.arena.alloc_slice_fill_iter(parameters);
        let decorators = self.alloc_exprs(decorators);
        Statement::FunctionDef(FunctionDef {
            data,
            name: self.intern(name),
            parameters,
            decorators,
            return_annotation: return_annotation.map(|e| &*self.arena.alloc(e)),
            body,
        })
    }

    pub fn class_def(
        &mut self,
        name: &str,
        bases: Vec<Expression<'a>>,
        body: &'a Suite<'a>,
    ) -> Statement<'a> {
        self.class_def_full(name, bases, vec![], body)
    }

    pub fn class_def_full(
        &mut self,
        name: &str,
        bases: Vec<Expression<'a>>,
        decorators: Vec<Expression<'a>>,
        body: &'a Suite<'a>,
    ) -> Statement<'a> {
        let data = self.data(NodeKind::ClassDef);
        let bases = self.alloc_exprs(bases);
        let decorators = self.alloc_exprs(decorators);
        Statement::ClassDef(ClassDef {
            data,
            name: self.intern(name),
            bases,
            decorators,
            body,
        })
    }

    pub fn error_stmt(&mut self) -> Statement<'a> {
        let data = self.data(NodeKind::ErrorStmt);
        Statement::Error(ErrorStmt { data })
    }
}

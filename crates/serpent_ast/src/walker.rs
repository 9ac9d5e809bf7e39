//! The `Walker` double-dispatch traversal protocol.
//!
//! Callers implement `enter_*` and `leave_*` hooks for the node kinds they
//! care about. `enter_*` returns `true` to recurse into the node's children
//! in source order; `leave_*` is called unconditionally after the node is
//! done, whether or not children were walked. The default hooks recurse
//! everywhere and do nothing, so a walker only overrides what it needs.

use crate::node::*;

/// Per-kind traversal hooks. All hooks have recursive defaults.
#[allow(unused_variables)]
pub trait Walker<'a> {
    // -- Root --
    fn enter_module(&mut self, node: &'a Module<'a>) -> bool {
        true
    }
    fn leave_module(&mut self, node: &'a Module<'a>) {}

    fn enter_suite(&mut self, node: &'a Suite<'a>) -> bool {
        true
    }
    fn leave_suite(&mut self, node: &'a Suite<'a>) {}

    // -- Statements --
    fn enter_expr_stmt(&mut self, node: &'a ExprStmt<'a>) -> bool {
        true
    }
    fn leave_expr_stmt(&mut self, node: &'a ExprStmt<'a>) {}

    fn enter_assign(&mut self, node: &'a AssignStmt<'a>) -> bool {
        true
    }
    fn leave_assign(&mut self, node: &'a AssignStmt<'a>) {}

    fn enter_aug_assign(&mut self, node: &'a AugAssignStmt<'a>) -> bool {
        true
    }
    fn leave_aug_assign(&mut self, node: &'a AugAssignStmt<'a>) {}

    fn enter_if(&mut self, node: &'a IfStmt<'a>) -> bool {
        true
    }
    fn leave_if(&mut self, node: &'a IfStmt<'a>) {}

    fn enter_while(&mut self, node: &'a WhileStmt<'a>) -> bool {
        true
    }
    fn leave_while(&mut self, node: &'a WhileStmt<'a>) {}

    fn enter_for(&mut self, node: &'a ForStmt<'a>) -> bool {
        true
    }
    fn leave_for(&mut self, node: &'a ForStmt<'a>) {}

    fn enter_with(&mut self, node: &'a WithStmt<'a>) -> bool {
        true
    }
    fn leave_with(&mut self, node: &'a WithStmt<'a>) {}

    fn enter_with_item(&mut self, node: &'a WithItem<'a>) -> bool {
        true
    }
    fn leave_with_item(&mut self, node: &'a WithItem<'a>) {}

    fn enter_try(&mut self, node: &'a TryStmt<'a>) -> bool {
        true
    }
    fn leave_try(&mut self, node: &'a TryStmt<'a>) {}

    fn enter_except_handler(&mut self, node: &'a ExceptHandler<'a>) -> bool {
        true
    }
    fn leave_except_handler(&mut self, node: &'a ExceptHandler<'a>) {}

    fn enter_raise(&mut self, node: &'a RaiseStmt<'a>) -> bool {
        true
    }
    fn leave_raise(&mut self, node: &'a RaiseStmt<'a>) {}

    fn enter_return(&mut self, node: &'a ReturnStmt<'a>) -> bool {
        true
    }
    fn leave_return(&mut self, node: &'a ReturnStmt<'a>) {}

    fn enter_break(&mut self, node: &'a BreakStmt) -> bool {
        true
    }
    fn leave_break(&mut self, node: &'a BreakStmt) {}

    fn enter_continue(&mut self, node: &'a ContinueStmt) -> bool {
        true
    }
    fn leave_continue(&mut self, node: &'a ContinueStmt) {}

    fn enter_pass(&mut self, node: &'a PassStmt) -> bool {
        true
    }
    fn leave_pass(&mut self, node: &'a PassStmt) {}

    fn enter_assert(&mut self, node: &'a AssertStmt<'a>) -> bool {
        true
    }
    fn leave_assert(&mut self, node: &'a AssertStmt<'a>) {}

    fn enter_del(&mut self, node: &'a DelStmt<'a>) -> bool {
        true
    }
    fn leave_del(&mut self, node: &'a DelStmt<'a>) {}

    fn enter_global(&mut self, node: &'a GlobalStmt<'a>) -> bool {
        true
    }
    fn leave_global(&mut self, node: &'a GlobalStmt<'a>) {}

    fn enter_nonlocal(&mut self, node: &'a NonlocalStmt<'a>) -> bool {
        true
    }
    fn leave_nonlocal(&mut self, node: &'a NonlocalStmt<'a>) {}

    fn enter_import(&mut self, node: &'a ImportStmt<'a>) -> bool {
        true
    }
    fn leave_import(&mut self, node: &'a ImportStmt<'a>) {}

    fn enter_from_import(&mut self, node: &'a FromImportStmt<'a>) -> bool {
        true
    }
    fn leave_from_import(&mut self, node: &'a FromImportStmt<'a>) {}

    fn enter_exec(&mut self, node: &'a ExecStmt<'a>) -> bool {
        true
    }
    fn leave_exec(&mut self, node: &'a ExecStmt<'a>) {}

    fn enter_function_def(&mut self, node: &'a FunctionDef<'a>) -> bool {
        true
    }
    fn leave_function_def(&mut self, node: &'a FunctionDef<'a>) {}

    fn enter_parameter(&mut self, node: &'a Parameter<'a>) -> bool {
        true
    }
    fn leave_parameter(&mut self, node: &'a Parameter<'a>) {}

    fn enter_class_def(&mut self, node: &'a ClassDef<'a>) -> bool {
        true
    }
    fn leave_class_def(&mut self, node: &'a ClassDef<'a>) {}

    fn enter_error_stmt(&mut self, node: &'a ErrorStmt) -> bool {
        true
    }
    fn leave_error_stmt(&mut self, node: &'a ErrorStmt) {}

    // -- Expressions --
    fn enter_name(&mut self, node: &'a NameExpr) -> bool {
        true
    }
    fn leave_name(&mut self, node: &'a NameExpr) {}

    fn enter_member(&mut self, node: &'a MemberExpr<'a>) -> bool {
        true
    }
    fn leave_member(&mut self, node: &'a MemberExpr<'a>) {}

    fn enter_index(&mut self, node: &'a IndexExpr<'a>) -> bool {
        true
    }
    fn leave_index(&mut self, node: &'a IndexExpr<'a>) {}

    fn enter_slice(&mut self, node: &'a SliceExpr<'a>) -> bool {
        true
    }
    fn leave_slice(&mut self, node: &'a SliceExpr<'a>) {}

    fn enter_call(&mut self, node: &'a CallExpr<'a>) -> bool {
        true
    }
    fn leave_call(&mut self, node: &'a CallExpr<'a>) {}

    fn enter_argument(&mut self, node: &'a Argument<'a>) -> bool {
        true
    }
    fn leave_argument(&mut self, node: &'a Argument<'a>) {}

    fn enter_unary(&mut self, node: &'a UnaryExpr<'a>) -> bool {
        true
    }
    fn leave_unary(&mut self, node: &'a UnaryExpr<'a>) {}

    fn enter_binary(&mut self, node: &'a BinaryExpr<'a>) -> bool {
        true
    }
    fn leave_binary(&mut self, node: &'a BinaryExpr<'a>) {}

    fn enter_bool_op(&mut self, node: &'a BoolOpExpr<'a>) -> bool {
        true
    }
    fn leave_bool_op(&mut self, node: &'a BoolOpExpr<'a>) {}

    fn enter_conditional(&mut self, node: &'a ConditionalExpr<'a>) -> bool {
        true
    }
    fn leave_conditional(&mut self, node: &'a ConditionalExpr<'a>) {}

    fn enter_lambda(&mut self, node: &'a LambdaExpr<'a>) -> bool {
        true
    }
    fn leave_lambda(&mut self, node: &'a LambdaExpr<'a>) {}

    fn enter_list_comp(&mut self, node: &'a ComprehensionExpr<'a>) -> bool {
        true
    }
    fn leave_list_comp(&mut self, node: &'a ComprehensionExpr<'a>) {}

    fn enter_set_comp(&mut self, node: &'a ComprehensionExpr<'a>) -> bool {
        true
    }
    fn leave_set_comp(&mut self, node: &'a ComprehensionExpr<'a>) {}

    fn enter_dict_comp(&mut self, node: &'a DictCompExpr<'a>) -> bool {
        true
    }
    fn leave_dict_comp(&mut self, node: &'a DictCompExpr<'a>) {}

    fn enter_generator(&mut self, node: &'a ComprehensionExpr<'a>) -> bool {
        true
    }
    fn leave_generator(&mut self, node: &'a ComprehensionExpr<'a>) {}

    fn enter_comprehension_for(&mut self, node: &'a ComprehensionFor<'a>) -> bool {
        true
    }
    fn leave_comprehension_for(&mut self, node: &'a ComprehensionFor<'a>) {}

    fn enter_comprehension_if(&mut self, node: &'a ComprehensionIf<'a>) -> bool {
        true
    }
    fn leave_comprehension_if(&mut self, node: &'a ComprehensionIf<'a>) {}

    fn enter_tuple(&mut self, node: &'a SequenceExpr<'a>) -> bool {
        true
    }
    fn leave_tuple(&mut self, node: &'a SequenceExpr<'a>) {}

    fn enter_list(&mut self, node: &'a SequenceExpr<'a>) -> bool {
        true
    }
    fn leave_list(&mut self, node: &'a SequenceExpr<'a>) {}

    fn enter_set(&mut self, node: &'a SequenceExpr<'a>) -> bool {
        true
    }
    fn leave_set(&mut self, node: &'a SequenceExpr<'a>) {}

    fn enter_dict(&mut self, node: &'a DictExpr<'a>) -> bool {
        true
    }
    fn leave_dict(&mut self, node: &'a DictExpr<'a>) {}

    fn enter_starred(&mut self, node: &'a StarredExpr<'a>) -> bool {
        true
    }
    fn leave_starred(&mut self, node: &'a StarredExpr<'a>) {}

    fn enter_await_expr(&mut self, node: &'a AwaitExpr<'a>) -> bool {
        true
    }
    fn leave_await_expr(&mut self, node: &'a AwaitExpr<'a>) {}

    fn enter_yield_expr(&mut self, node: &'a YieldExpr<'a>) -> bool {
        true
    }
    fn leave_yield_expr(&mut self, node: &'a YieldExpr<'a>) {}

    fn enter_yield_from(&mut self, node: &'a YieldFromExpr<'a>) -> bool {
        true
    }
    fn leave_yield_from(&mut self, node: &'a YieldFromExpr<'a>) {}

    fn enter_constant(&mut self, node: &'a ConstantExpr) -> bool {
        true
    }
    fn leave_constant(&mut self, node: &'a ConstantExpr) {}

    fn enter_parenthesized(&mut self, node: &'a ParenthesizedExpr<'a>) -> bool {
        true
    }
    fn leave_parenthesized(&mut self, node: &'a ParenthesizedExpr<'a>) {}

    fn enter_error_expr(&mut self, node: &'a ErrorExpr) -> bool {
        true
    }
    fn leave_error_expr(&mut self, node: &'a ErrorExpr) {}
}

// ============================================================================
// Traversal
// ============================================================================

impl<'a> Module<'a> {
    pub fn walk<W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        if walker.enter_module(self) {
            self.body.walk(walker);
        }
        walker.leave_module(self);
    }
}

impl<'a> Suite<'a> {
    pub fn walk<W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        if walker.enter_suite(self) {
            for stmt in self.statements {
                stmt.walk(walker);
            }
        }
        walker.leave_suite(self);
    }
}

impl<'a> Statement<'a> {
    pub fn walk<W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        match self {
            Statement::Expr(n) => {
                if walker.enter_expr_stmt(n) {
                    n.expression.walk(walker);
                }
                walker.leave_expr_stmt(n);
            }
            Statement::Assign(n) => {
                if walker.enter_assign(n) {
                    for target in n.targets {
                        target.walk(walker);
                    }
                    n.value.walk(walker);
                }
                walker.leave_assign(n);
            }
            Statement::AugAssign(n) => {
                if walker.enter_aug_assign(n) {
                    n.target.walk(walker);
                    n.value.walk(walker);
                }
                walker.leave_aug_assign(n);
            }
            Statement::If(n) => {
                if walker.enter_if(n) {
                    n.test.walk(walker);
                    n.body.walk(walker);
                    if let Some(orelse) = n.orelse {
                        orelse.walk(walker);
                    }
                }
                walker.leave_if(n);
            }
            Statement::While(n) => {
                if walker.enter_while(n) {
                    n.test.walk(walker);
                    n.body.walk(walker);
                    if let Some(orelse) = n.orelse {
                        orelse.walk(walker);
                    }
                }
                walker.leave_while(n);
            }
            Statement::For(n) => {
                if walker.enter_for(n) {
                    n.target.walk(walker);
                    n.iter.walk(walker);
                    n.body.walk(walker);
                    if let Some(orelse) = n.orelse {
                        orelse.walk(walker);
                    }
                }
                walker.leave_for(n);
            }
            Statement::With(n) => {
                if walker.enter_with(n) {
                    for item in n.items {
                        item.walk(walker);
                    }
                    n.body.walk(walker);
                }
                walker.leave_with(n);
            }
            Statement::Try(n) => {
                if walker.enter_try(n) {
                    n.body.walk(walker);
                    for handler in n.handlers {
                        handler.walk(walker);
                    }
                    if let Some(orelse) = n.orelse {
                        orelse.walk(walker);
                    }
                    if let Some(finally) = n.finally {
                        finally.walk(walker);
                    }
                }
                walker.leave_try(n);
            }
            Statement::Raise(n) => {
                if walker.enter_raise(n) {
                    if let Some(exc) = n.exc {
                        exc.walk(walker);
                    }
                    if let Some(cause) = n.cause {
                        cause.walk(walker);
                    }
                }
                walker.leave_raise(n);
            }
            Statement::Return(n) => {
                if walker.enter_return(n) {
                    if let Some(value) = n.value {
                        value.walk(walker);
                    }
                }
                walker.leave_return(n);
            }
            Statement::Break(n) => {
                walker.enter_break(n);
                walker.leave_break(n);
            }
            Statement::Continue(n) => {
                walker.enter_continue(n);
                walker.leave_continue(n);
            }
            Statement::Pass(n) => {
                walker.enter_pass(n);
                walker.leave_pass(n);
            }
            Statement::Assert(n) => {
                if walker.enter_assert(n) {
                    n.test.walk(walker);
                    if let Some(msg) = n.msg {
                        msg.walk(walker);
                    }
                }
                walker.leave_assert(n);
            }
            Statement::Del(n) => {
                if walker.enter_del(n) {
                    for target in n.targets {
                        target.walk(walker);
                    }
                }
                walker.leave_del(n);
            }
            Statement::Global(n) => {
                if walker.enter_global(n) {
                    for name in n.names {
                        name.walk(walker);
                    }
                }
                walker.leave_global(n);
            }
            Statement::Nonlocal(n) => {
                if walker.enter_nonlocal(n) {
                    for name in n.names {
                        name.walk(walker);
                    }
                }
                walker.leave_nonlocal(n);
            }
            Statement::Import(n) => {
                walker.enter_import(n);
                walker.leave_import(n);
            }
            Statement::FromImport(n) => {
                walker.enter_from_import(n);
                walker.leave_from_import(n);
            }
            Statement::Exec(n) => {
                if walker.enter_exec(n) {
                    n.body.walk(walker);
                    if let Some(globals) = n.globals {
                        globals.walk(walker);
                    }
                    if let Some(locals) = n.locals {
                        locals.walk(walker);
                    }
                }
                walker.leave_exec(n);
            }
            Statement::FunctionDef(n) => {
                if walker.enter_function_def(n) {
                    for dec in n.decorators {
                        dec.walk(walker);
                    }
                    for param in n.parameters {
                        param.walk(walker);
                    }
                    if let Some(annotation) = n.return_annotation {
                        annotation.walk(walker);
                    }
                    n.body.walk(walker);
                }
                walker.leave_function_def(n);
            }
            Statement::ClassDef(n) => {
                if walker.enter_class_def(n) {
                    for dec in n.decorators {
                        dec.walk(walker);
                    }
                    for base in n.bases {
                        base.walk(walker);
                    }
                    n.body.walk(walker);
                }
                walker.leave_class_def(n);
            }
            Statement::Suite(n) => n.walk(walker),
            Statement::Error(n) => {
                walker.enter_error_stmt(n);
                walker.leave_error_stmt(n);
            }
        }
    }
}

impl<'a> WithItem<'a> {
    pub fn walk<W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        if walker.enter_with_item(self) {
            self.context.walk(walker);
            if let Some(target) = self.target {
                target.walk(walker);
            }
        }
        walker.leave_with_item(self);
    }
}

impl<'a> ExceptHandler<'a> {
    pub fn walk<W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        if walker.enter_except_handler(self) {
            if let Some(test) = self.test {
                test.walk(walker);
            }
            if let Some(target) = self.target {
                target.walk(walker);
            }
            self.body.walk(walker);
        }
        walker.leave_except_handler(self);
    }
}

impl<'a> Parameter<'a> {
    pub fn walk<W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        if walker.enter_parameter(self) {
            if let Some(sublist) = self.sublist {
                sublist.walk(walker);
            }
            if let Some(annotation) = self.annotation {
                annotation.walk(walker);
            }
            if let Some(default) = self.default {
                default.walk(walker);
            }
        }
        walker.leave_parameter(self);
    }
}

impl NameExpr {
    pub fn walk<'a, W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        walker.enter_name(self);
        walker.leave_name(self);
    }
}

impl<'a> ComprehensionClause<'a> {
    pub fn walk<W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        match self {
            ComprehensionClause::For(n) => {
                if walker.enter_comprehension_for(n) {
                    n.target.walk(walker);
                    n.iter.walk(walker);
                }
                walker.leave_comprehension_for(n);
            }
            ComprehensionClause::If(n) => {
                if walker.enter_comprehension_if(n) {
                    n.test.walk(walker);
                }
                walker.leave_comprehension_if(n);
            }
        }
    }
}

impl<'a> Expression<'a> {
    pub fn walk<W: Walker<'a> + ?Sized>(&'a self, walker: &mut W) {
        match self {
            Expression::Name(n) => n.walk(walker),
            Expression::Member(n) => {
                if walker.enter_member(n) {
                    n.target.walk(walker);
                }
                walker.leave_member(n);
            }
            Expression::Index(n) => {
                if walker.enter_index(n) {
                    n.target.walk(walker);
                    n.index.walk(walker);
                }
                walker.leave_index(n);
            }
            Expression::Slice(n) => {
                if walker.enter_slice(n) {
                    if let Some(lower) = n.lower {
                        lower.walk(walker);
                    }
                    if let Some(upper) = n.upper {
                        upper.walk(walker);
                    }
                    if let Some(step) = n.step {
                        step.walk(walker);
                    }
                }
                walker.leave_slice(n);
            }
            Expression::Call(n) => {
                if walker.enter_call(n) {
                    n.target.walk(walker);
                    for arg in n.args {
                        if walker.enter_argument(arg) {
                            arg.value.walk(walker);
                        }
                        walker.leave_argument(arg);
                    }
                }
                walker.leave_call(n);
            }
            Expression::Unary(n) => {
                if walker.enter_unary(n) {
                    n.operand.walk(walker);
                }
                walker.leave_unary(n);
            }
            Expression::Binary(n) => {
                if walker.enter_binary(n) {
                    n.left.walk(walker);
                    n.right.walk(walker);
                }
                walker.leave_binary(n);
            }
            Expression::BoolOp(n) => {
                if walker.enter_bool_op(n) {
                    n.left.walk(walker);
                    n.right.walk(walker);
                }
                walker.leave_bool_op(n);
            }
            Expression::Conditional(n) => {
                if walker.enter_conditional(n) {
                    n.if_true.walk(walker);
                    n.test.walk(walker);
                    n.if_false.walk(walker);
                }
                walker.leave_conditional(n);
            }
            Expression::Lambda(n) => {
                if walker.enter_lambda(n) {
                    for param in n.parameters {
                        param.walk(walker);
                    }
                    n.body.walk(walker);
                }
                walker.leave_lambda(n);
            }
            Expression::ListComp(n) => {
                if walker.enter_list_comp(n) {
                    n.element.walk(walker);
                    for clause in n.clauses {
                        clause.walk(walker);
                    }
                }
                walker.leave_list_comp(n);
            }
            Expression::SetComp(n) => {
                if walker.enter_set_comp(n) {
                    n.element.walk(walker);
                    for clause in n.clauses {
                        clause.walk(walker);
                    }
                }
                walker.leave_set_comp(n);
            }
            Expression::DictComp(n) => {
                if walker.enter_dict_comp(n) {
                    n.key.walk(walker);
                    n.value.walk(walker);
                    for clause in n.clauses {
                        clause.walk(walker);
                    }
                }
                walker.leave_dict_comp(n);
            }
            Expression::Generator(n) => {
                if walker.enter_generator(n) {
                    n.element.walk(walker);
                    for clause in n.clauses {
                        clause.walk(walker);
                    }
                }
                walker.leave_generator(n);
            }
            Expression::Tuple(n) => {
                if walker.enter_tuple(n) {
                    for item in n.items {
                        item.walk(walker);
                    }
                }
                walker.leave_tuple(n);
            }
            Expression::List(n) => {
                if walker.enter_list(n) {
                    for item in n.items {
                        item.walk(walker);
                    }
                }
                walker.leave_list(n);
            }
            Expression::Set(n) => {
                if walker.enter_set(n) {
                    for item in n.items {
                        item.walk(walker);
                    }
                }
                walker.leave_set(n);
            }
            Expression::Dict(n) => {
                if walker.enter_dict(n) {
                    for item in n.items {
                        if let Some(key) = item.key {
                            key.walk(walker);
                        }
                        item.value.walk(walker);
                    }
                }
                walker.leave_dict(n);
            }
            Expression::Starred(n) => {
                if walker.enter_starred(n) {
                    n.target.walk(walker);
                }
                walker.leave_starred(n);
            }
            Expression::Await(n) => {
                if walker.enter_await_expr(n) {
                    n.value.walk(walker);
                }
                walker.leave_await_expr(n);
            }
            Expression::Yield(n) => {
                if walker.enter_yield_expr(n) {
                    if let Some(value) = n.value {
                        value.walk(walker);
                    }
                }
                walker.leave_yield_expr(n);
            }
            Expression::YieldFrom(n) => {
                if walker.enter_yield_from(n) {
                    n.value.walk(walker);
                }
                walker.leave_yield_from(n);
            }
            Expression::Constant(n) => {
                walker.enter_constant(n);
                walker.leave_constant(n);
            }
            Expression::Parenthesized(n) => {
                if walker.enter_parenthesized(n) {
                    n.expression.walk(walker);
                }
                walker.leave_parenthesized(n);
            }
            Expression::Error(n) => {
                walker.enter_error_expr(n);
                walker.leave_error_expr(n);
            }
        }
    }
}

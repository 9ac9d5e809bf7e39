//! Walker traversal tests: child order, enter-gating, unconditional leave.

use bumpalo::Bump;
use serpent_ast::node::*;
use serpent_ast::version::PythonVersion;
use serpent_ast::walker::Walker;
use serpent_nodebuilder::AstBuilder;

/// Records traversal events for a handful of node kinds.
#[derive(Default)]
struct EventLog {
    events: Vec<String>,
    skip_functions: bool,
}

impl<'a> Walker<'a> for EventLog {
    fn enter_name(&mut self, _node: &'a NameExpr) -> bool {
        self.events.push("name".to_string());
        true
    }

    fn enter_constant(&mut self, _node: &'a ConstantExpr) -> bool {
        self.events.push("constant".to_string());
        true
    }

    fn enter_assign(&mut self, _node: &'a AssignStmt<'a>) -> bool {
        self.events.push("enter:assign".to_string());
        true
    }

    fn leave_assign(&mut self, _node: &'a AssignStmt<'a>) {
        self.events.push("leave:assign".to_string());
    }

    fn enter_function_def(&mut self, _node: &'a FunctionDef<'a>) -> bool {
        self.events.push("enter:def".to_string());
        !self.skip_functions
    }

    fn leave_function_def(&mut self, _node: &'a FunctionDef<'a>) {
        self.events.push("leave:def".to_string());
    }
}

#[test]
fn test_assign_walks_targets_before_value() {
    // x = 1
    let arena = Bump::new();
    let mut b = AstBuilder::new(&arena, PythonVersion::V37);
    let one = b.int(1);
    let assign = b.assign_name("x", one);
    let module = b.module(vec![assign], "test");

    let mut log = EventLog::default();
    module.walk(&mut log);
    assert_eq!(
        log.events,
        vec!["enter:assign", "name", "constant", "leave:assign"]
    );
}

#[test]
fn test_enter_false_skips_children_but_leave_still_fires() {
    // def f(): return x
    let arena = Bump::new();
    let mut b = AstBuilder::new(&arena, PythonVersion::V37);
    let x_use = b.name("x");
    let ret = b.return_stmt(Some(x_use));
    let body = b.suite(vec![ret]);
    let f = b.function_def("f", vec![], body);
    let module = b.module(vec![f], "test");

    let mut log = EventLog {
        skip_functions: true,
        ..Default::default()
    };
    module.walk(&mut log);
    // The body name never fires, but leave does.
    assert_eq!(log.events, vec!["enter:def", "leave:def"]);

    let mut full = EventLog::default();
    module.walk(&mut full);
    assert_eq!(full.events, vec!["enter:def", "name", "leave:def"]);
}

#[test]
fn test_function_walks_header_before_body() {
    // @dec
    // def f(p=d): return p
    let arena = Bump::new();
    let mut b = AstBuilder::new(&arena, PythonVersion::V37);
    let d_use = b.name("d");
    let p_param = b.param_with_default("p", d_use);
    let dec = b.name("dec");
    let p_use = b.name("p");
    let ret = b.return_stmt(Some(p_use));
    let body = b.suite(vec![ret]);
    let f = b.function_def_full("f", vec![p_param], vec![dec], None, body);
    let module = b.module(vec![f], "test");

    let mut log = EventLog::default();
    module.walk(&mut log);
    // decorator, then parameter default, then body use
    assert_eq!(log.events, vec!["enter:def", "name", "name", "name", "leave:def"]);
}

#[test]
fn test_error_nodes_are_inert_leaves() {
    let arena = Bump::new();
    let mut b = AstBuilder::new(&arena, PythonVersion::V37);
    let bad_expr = b.error_expr();
    let stmt = b.expr_stmt(bad_expr);
    let bad_stmt = b.error_stmt();
    let module = b.module(vec![stmt, bad_stmt], "test");

    let mut log = EventLog::default();
    module.walk(&mut log);
    assert!(log.events.is_empty());
}

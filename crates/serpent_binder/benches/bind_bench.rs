//! Binder benchmarks: wide modules and deep closure chains.

use bumpalo::Bump;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serpent_ast::node::{Module, Statement, Suite};
use serpent_ast::version::PythonVersion;
use serpent_binder::Binder;
use serpent_nodebuilder::AstBuilder;

/// `v0 = 0; v1 = v0; ...` plus a function reading every tenth variable.
fn build_wide_module(arena: &Bump, width: usize) -> &Module<'_> {
    let mut b = AstBuilder::new(arena, PythonVersion::V37);
    let mut statements = Vec::with_capacity(width + 1);
    let zero = b.int(0);
    statements.push(b.assign_name("v0", zero));
    for i in 1..width {
        let prev = b.name(&format!("v{}", i - 1));
        statements.push(b.assign_name(&format!("v{}", i), prev));
    }
    let mut body = Vec::new();
    for i in (0..width).step_by(10) {
        let use_expr = b.name(&format!("v{}", i));
        body.push(b.expr_stmt(use_expr));
    }
    let suite = b.suite(body);
    statements.push(b.function_def("reader", vec![], suite));
    b.module(statements, "wide")
}

/// `def f0(): x0 = 0; def f1(): x1 = x0; ...` — every level captures the
/// previous one, exercising free/cell propagation.
fn build_closure_chain(arena: &Bump, depth: usize) -> &Module<'_> {
    let mut b = AstBuilder::new(arena, PythonVersion::V37);

    fn level<'a>(b: &mut AstBuilder<'a>, index: usize, depth: usize) -> &'a Suite<'a> {
        let value = if index == 0 {
            b.int(0)
        } else {
            b.name(&format!("x{}", index - 1))
        };
        let assign = b.assign_name(&format!("x{}", index), value);
        let mut statements: Vec<Statement<'a>> = vec![assign];
        if index + 1 < depth {
            let inner_body = level(b, index + 1, depth);
            statements.push(b.function_def(&format!("f{}", index + 1), vec![], inner_body));
        }
        b.suite(statements)
    }

    let body = level(&mut b, 0, depth);
    let f0 = b.function_def("f0", vec![], body);
    b.module(vec![f0], "deep")
}

fn bench_bind_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind_wide");
    for width in [100usize, 1000] {
        let arena = Bump::new();
        let module = build_wide_module(&arena, width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |bencher, _| {
            bencher.iter(|| Binder::bind(module));
        });
    }
    group.finish();
}

fn bench_bind_closure_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind_closure_chain");
    for depth in [8usize, 64] {
        let arena = Bump::new();
        let module = build_closure_chain(&arena, depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bencher, _| {
            bencher.iter(|| Binder::bind(module));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bind_wide, bench_bind_closure_chain);
criterion_main!(benches);

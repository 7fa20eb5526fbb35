//! Benchmark harness for facade emitting.
//!
//! Run with: cargo bench -p tsfacade_emitter

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsfacade_ast::*;
use tsfacade_emitter::Emitter;

/// Generate a document with `count` classes, interfaces and aliases.
fn generate_document(count: usize) -> SourceFile {
    let mut statements = Vec::with_capacity(count * 3);
    for i in 0..count {
        statements.push(Statement::ClassDeclaration(ClassDeclaration {
            name: Some(format!("Class{i}")),
            members: vec![
                Member::property(format!("field{i}"), TypeNode::keyword(Keyword::Number)),
                Member::method(
                    format!("method{i}"),
                    vec![Parameter::new("x", TypeNode::keyword(Keyword::String))],
                    Some(TypeNode::reference("Array", vec![TypeNode::keyword(Keyword::Number)])),
                ),
            ],
            ..Default::default()
        }));
        statements.push(Statement::InterfaceDeclaration(InterfaceDeclaration {
            name: format!("Options{i}"),
            members: vec![
                Member::property(
                    "mode",
                    TypeNode::union(vec![
                        TypeNode::string_literal("fast"),
                        TypeNode::string_literal("slow"),
                    ]),
                ),
                Member::method("get", vec![], Some(TypeNode::keyword(Keyword::Number))),
                Member::method("get", vec![], Some(TypeNode::keyword(Keyword::Number))),
            ],
            ..Default::default()
        }));
        statements.push(Statement::TypeAliasDeclaration(TypeAliasDeclaration {
            name: format!("Alias{i}"),
            type_node: TypeNode::union(vec![
                TypeNode::keyword(Keyword::String),
                TypeNode::keyword(Keyword::Null),
                TypeNode::keyword(Keyword::Undefined),
            ]),
            ..Default::default()
        }));
    }
    SourceFile::new("bench.d.ts", statements)
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    let emitter = Emitter::new("bench");

    for size in [10, 100, 1000] {
        let document = generate_document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| black_box(emitter.emit(black_box(document))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);

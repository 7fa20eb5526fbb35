//! Benchmark harness for tsfacade conversion.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p tsfacade_compiler

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsfacade_compiler::Program;
use tsfacade_options::FacadeOptions;

/// Generate a JSON declaration tree with `num_classes` classes and as many
/// type aliases.
fn generate_document(num_classes: usize) -> String {
    let mut statements = Vec::with_capacity(num_classes * 2);
    for i in 0..num_classes {
        statements.push(format!(
            r#"{{ "kind": "ClassDeclaration", "name": "Class{i}", "members": [
                {{ "kind": "PropertyDeclaration", "name": "field{i}", "type": {{ "kind": "KeywordType", "keyword": "number" }} }},
                {{ "kind": "MethodDeclaration", "name": "method{i}",
                   "parameters": [{{ "name": "value", "type": {{ "kind": "KeywordType", "keyword": "string" }} }}],
                   "type": {{ "kind": "ArrayType", "elementType": {{ "kind": "TypeReference", "typeName": "Class{i}" }} }} }}
            ] }}"#
        ));
        statements.push(format!(
            r#"{{ "kind": "TypeAliasDeclaration", "name": "Alias{i}", "type": {{ "kind": "UnionType", "types": [
                {{ "kind": "LiteralType", "literal": "string", "text": "\"a{i}\"" }},
                {{ "kind": "LiteralType", "literal": "string", "text": "\"b{i}\"" }}
            ] }} }}"#
        ));
    }
    format!(r#"{{ "statements": [{}] }}"#, statements.join(",\n"))
}

// ============================================================================
// Program Benchmarks
// ============================================================================

fn bench_single_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_document");

    for size in [10, 100, 1000] {
        let text = generate_document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let mut program = Program::new(vec![], FacadeOptions::default());
                program.add_source("bench.d.ts.json", text.as_str());
                black_box(program.convert().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_many_documents(c: &mut Criterion) {
    let text = generate_document(100);
    c.bench_function("many_documents", |b| {
        b.iter(|| {
            let mut program = Program::new(vec![], FacadeOptions::default());
            for i in 0..32 {
                program.add_source(format!("doc{i}.json"), text.as_str());
            }
            black_box(program.convert().unwrap());
        });
    });
}

criterion_group!(benches, bench_single_document, bench_many_documents);
criterion_main!(benches);

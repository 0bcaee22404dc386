//! Benchmarks for rendering the golden fixture documents.
//!
//! Run with: cargo bench
//! Results are saved to target/criterion/

use adt_debug::adt::{Node, Vertex};
use adt_debug::label::{LabelKind, LabelTable};
use adt_debug::{node_string, Config, Document};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glob::glob;
use std::fs;

/// Load all fixture documents, sorted by name.
fn load_fixtures() -> Vec<(String, Document)> {
    let pattern = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/*.json");
    let mut docs: Vec<(String, Document)> = glob(pattern)
        .expect("Failed to read glob pattern")
        .flatten()
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_string();
            let json = fs::read_to_string(&path).ok()?;
            Document::from_json(&json).ok().map(|doc| (name, doc))
        })
        .collect();
    docs.sort_by(|a, b| a.0.cmp(&b.0));
    docs
}

/// A struct vertex with `width` arcs nested `depth` levels deep.
fn wide_vertex(labels: &mut LabelTable, width: usize, depth: usize) -> Vertex {
    let mut v = Vertex::leaf(Node::StructMarker);
    for i in 0..width {
        let label = labels.intern(LabelKind::String, &format!("f{}", i));
        let child = if depth == 0 {
            Vertex::leaf(Node::int(i as i64))
        } else {
            wide_vertex(labels, width, depth - 1)
        };
        v = v.with_arc(label, child);
    }
    v
}

fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixtures");
    for (name, doc) in load_fixtures() {
        group.bench_with_input(BenchmarkId::from_parameter(&name), &doc, |b, doc| {
            b.iter(|| black_box(doc.render()))
        });
    }
    group.finish();
}

fn bench_wide_vertex(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_vertex");
    for depth in [1usize, 2, 3] {
        let mut labels = LabelTable::new();
        let root: Node = wide_vertex(&mut labels, 8, depth).into();
        let len = node_string(&root, &labels, Config::default()).len();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &root, |b, root| {
            b.iter(|| black_box(node_string(root, &labels, Config::default())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixtures, bench_wide_vertex);
criterion_main!(benches);

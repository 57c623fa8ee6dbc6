use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_lax::{from_str, from_value, to_string, PropertySet, Rect, Value};

fn document(entries: usize) -> String {
    let mut members = Vec::with_capacity(entries);
    for i in 0..entries {
        members.push(format!(
            r#""Item{i}": {{"Enabled": "true", "Count": {i}, "Bounds": {{"x": {i}, "y": 0, "width": 100, "height": 50}}}}"#
        ));
    }
    format!("{{{}}}", members.join(","))
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [10, 100, 500].iter() {
        let text = document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_normalize_tree(c: &mut Criterion) {
    let tree: serde_json::Value = serde_json::from_str(&document(100)).unwrap();

    c.bench_function("normalize_parsed_tree", |b| {
        b.iter(|| Value::from_json(black_box(&tree)))
    });
}

fn benchmark_caseless_lookup(c: &mut Criterion) {
    let value = from_str(&document(100)).unwrap();
    let map = value.as_object().unwrap();

    c.bench_function("caseless_lookup_hit", |b| {
        b.iter(|| map.get(black_box("ITEM50")))
    });
    c.bench_function("caseless_lookup_miss", |b| {
        b.iter(|| map.get(black_box("missing")))
    });
}

fn benchmark_coerce_rect(c: &mut Criterion) {
    let value = from_str(r#"{"x": 1, "y": 2, "width": 3, "height": 4}"#).unwrap();

    c.bench_function("coerce_rect", |b| {
        b.iter(|| from_value::<Rect>(black_box(&value)))
    });
}

#[derive(Default)]
struct Target {
    enabled: bool,
    count: i64,
    bounds: Rect,
}

fn benchmark_bind(c: &mut Criterion) {
    let set = PropertySet::builder()
        .field("Enabled", |t: &Target| t.enabled, |t, v| t.enabled = v)
        .field("Count", |t: &Target| t.count, |t, v| t.count = v)
        .field("Bounds", |t: &Target| t.bounds, |t, v| t.bounds = v)
        .build();

    let value = from_str(
        r#"{"enabled": "true", "count": 7, "bounds": {"x": 1, "y": 2, "width": 3, "height": 4}}"#,
    )
    .unwrap();
    let properties = value.as_object().unwrap();

    c.bench_function("bind_three_members", |b| {
        b.iter(|| {
            let mut target = Target::default();
            set.bind(&mut target, black_box(properties));
            target
        })
    });

    let target = Target {
        enabled: true,
        count: 7,
        bounds: Rect::new(1, 2, 3, 4),
    };
    c.bench_function("extract_three_members", |b| {
        b.iter(|| set.extract(black_box(&target)))
    });
}

fn benchmark_serialize(c: &mut Criterion) {
    let value = from_str(&document(100)).unwrap();

    c.bench_function("serialize_document", |b| {
        b.iter(|| to_string(black_box(&value)))
    });
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_normalize_tree,
    benchmark_caseless_lookup,
    benchmark_coerce_rect,
    benchmark_bind,
    benchmark_serialize
);
criterion_main!(benches);

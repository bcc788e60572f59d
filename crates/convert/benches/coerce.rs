// Benchmarks for the coercion matrix
//
// Covers the scalar fast paths, the text parsers and the collection lifters

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use morph_convert::{
    Value, coerce_map_of, dedupe, parse_timestamp, to_bool, to_duration, to_f64, to_i64,
    to_i64_vec, to_string, to_string_map, to_u8,
};

fn bench_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalars");

    let int_val = Value::from(42);
    group.bench_function("int_to_i64", |b| {
        b.iter(|| to_i64(black_box(&int_val)).unwrap());
    });

    let text_val = Value::from("0009");
    group.bench_function("text_to_i64", |b| {
        b.iter(|| to_i64(black_box(&text_val)).unwrap());
    });

    let float_val = Value::from(3.75);
    group.bench_function("float_to_u8", |b| {
        b.iter(|| to_u8(black_box(&float_val)).unwrap());
    });

    group.bench_function("float_to_string", |b| {
        b.iter(|| to_string(black_box(&float_val)).unwrap());
    });

    let bool_val = Value::from("True");
    group.bench_function("text_to_bool", |b| {
        b.iter(|| to_bool(black_box(&bool_val)).unwrap());
    });

    let nested = Value::reference(Value::reference(Value::from("2.5")));
    group.bench_function("reference_to_f64", |b| {
        b.iter(|| to_f64(black_box(&nested)).unwrap());
    });

    group.finish();
}

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsers");

    group.bench_function("timestamp_first_layout", |b| {
        b.iter(|| parse_timestamp(black_box("2021-07-01T08:30:00Z")).unwrap());
    });

    group.bench_function("timestamp_late_layout", |b| {
        b.iter(|| parse_timestamp(black_box("2021-07-01 08:30:00")).unwrap());
    });

    let duration_val = Value::from("1h15m30.5s");
    group.bench_function("duration_literal", |b| {
        b.iter(|| to_duration(black_box(&duration_val)).unwrap());
    });

    group.finish();
}

fn bench_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("collections");

    let seq = Value::seq((0..100).map(|i| Value::from(i.to_string())));
    group.bench_function("seq_to_i64_vec_100", |b| {
        b.iter(|| to_i64_vec(black_box(&seq)).unwrap());
    });

    let map = Value::map((0..100).map(|i| (i, i)));
    group.bench_function("map_to_i64_map_100", |b| {
        b.iter(|| coerce_map_of(black_box(&map), to_i64).unwrap());
    });

    let json = Value::from(r#"{"a":"1","b":"2","c":"3","d":"4"}"#);
    group.bench_function("json_text_to_string_map", |b| {
        b.iter(|| to_string_map(black_box(&json)).unwrap());
    });

    let items: Vec<u32> = (0..1000).map(|i| i % 37).collect();
    group.bench_function("dedupe_1000", |b| {
        b.iter(|| dedupe(black_box(&items)));
    });

    group.finish();
}

criterion_group!(benches, bench_scalars, bench_parsers, bench_collections);
criterion_main!(benches);

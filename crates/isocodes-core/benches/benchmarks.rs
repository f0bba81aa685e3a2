use criterion::{criterion_group, criterion_main, Criterion};
use isocodes_core::prelude::*;
use std::hint::black_box;

fn bench_lookups(c: &mut Criterion) {
    let countries = countries().expect("bundled countries");
    let subdivisions = subdivisions().expect("bundled subdivisions");
    // Build the indexes outside the timed loops.
    countries.find("alpha_2", "US");
    subdivisions.find("code", "US-CA");

    c.bench_function("find_country_alpha_2", |b| {
        b.iter(|| countries.find(black_box("alpha_2"), black_box("DE")))
    });

    c.bench_function("find_subdivision_code", |b| {
        b.iter(|| subdivisions.find(black_box("code"), black_box("US-CA")))
    });

    c.bench_function("search_country_name", |b| {
        b.iter(|| countries.search(black_box(&[("name", "island")])))
    });

    c.bench_function("former_name_burma", |b| {
        b.iter(|| countries.get_by_former_name(black_box("Burma")))
    });
}

fn bench_views(c: &mut Criterion) {
    let subdivisions = subdivisions().expect("bundled subdivisions");

    c.bench_function("subdivisions_by_code", |b| b.iter(|| subdivisions.by_code()));

    c.bench_function("load_extended_languages", |b| {
        b.iter(|| DataSource::default().load(DatasetKey::ExtendedLanguages))
    });
}

criterion_group!(benches, bench_lookups, bench_views);
criterion_main!(benches);

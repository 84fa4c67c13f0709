use criterion::{Criterion, criterion_group, criterion_main};
use name_census_core::census;
use std::hint::black_box;

const ROLES: &[&str] = &[
    "Resolver", "Factory", "Reader", "Handler", "Utils", "Exception", "Support", "Adapter",
];

fn synthetic_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let role = ROLES[i % ROLES.len()];
            if i % 7 == 0 {
                format!("org.example.pkg{}.Outer{i}$Inner", i % 13)
            } else {
                format!("org.example.pkg{}.Thing{i}{role}", i % 13)
            }
        })
        .collect()
}

fn benchmark_census(c: &mut Criterion) {
    let names = synthetic_names(20_000);
    c.bench_function("census_20k_names", |b| {
        b.iter(|| black_box(census(black_box(names.clone()))));
    });
}

criterion_group!(benches, benchmark_census);
criterion_main!(benches);

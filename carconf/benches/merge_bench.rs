use carconf::config::{ConfigFormat, ConfigLoader};
use carconf::{merge, merge_all, Adas, Camera, CarConfiguration, Engine, Smartphone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn base() -> CarConfiguration {
    CarConfiguration::build_with(123, "Audi", Engine::Diesel, |b| {
        b.camera(Camera::Front).smartphone(Smartphone::CarPlay);
    })
    .unwrap()
}

fn update() -> CarConfiguration {
    CarConfiguration::build_with(124, "VW", Engine::Electric, |b| {
        b.adas(Adas::Copilot);
    })
    .unwrap()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let (base, update) = (base(), update());

    group.bench_function("single", |b| {
        b.iter(|| merge(black_box(&base), black_box(&update)));
    });

    group.bench_function("in_place", |b| {
        b.iter(|| {
            let mut current = base.clone();
            current.update(black_box(&update));
            current
        });
    });

    for count in [1usize, 10, 100] {
        let updates: Vec<_> = (0..count).map(|_| update.clone()).collect();
        group.bench_with_input(BenchmarkId::new("chain", count), &updates, |b, updates| {
            b.iter(|| merge_all(black_box(&base), updates.iter()));
        });
    }

    group.finish();
}

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("documents");
    let yaml = ConfigLoader::render(&base(), ConfigFormat::Yaml).unwrap();

    group.bench_function("parse_yaml", |b| {
        b.iter(|| ConfigLoader::parse(black_box(&yaml), ConfigFormat::Yaml));
    });

    group.finish();
}

criterion_group!(benches, bench_merge, bench_documents);
criterion_main!(benches);

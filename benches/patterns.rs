use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gof_creational::*;

// ===== Singleton accessors =====

fn bench_settings_access(c: &mut Criterion) {
    // Prime the holders
    let _ = Settings::get_instance();
    let _ = PlainSettings::get_instance();

    let mut group = c.benchmark_group("settings_access");
    group.bench_function("once_cell_holder", |b| {
        b.iter(|| black_box(Settings::get_instance()))
    });
    group.bench_function("mutex_guarded_holder", |b| {
        b.iter(|| black_box(PlainSettings::get_instance()))
    });
    group.bench_function("enum_constant", |b| {
        b.iter(|| black_box(EnumSettings::get_instance()))
    });
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let bytes = to_bytes(Settings::get_instance()).unwrap();

    let mut group = c.benchmark_group("round_trip");
    group.bench_function("resolve_hook", |b| {
        b.iter(|| black_box(from_bytes::<Settings>(&bytes).unwrap()))
    });
    group.bench_function("no_hook", |b| {
        b.iter(|| black_box(from_bytes::<PlainSettings>(&bytes).unwrap()))
    });
    group.finish();
}

// ===== Ship ordering =====

fn bench_order_ship(c: &mut Criterion) {
    let plain = WhiteShipFactory::new();
    let pro = WhiteShipFactory::with_parts(WhiteShipPartsProFactory);
    let observers = Observers::new();

    let mut group = c.benchmark_group("order_ship");
    for (label, factory) in [("plain", &plain), ("with_parts", &pro)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), factory, |b, factory| {
            b.iter(|| black_box(order_ship(factory, "Whiteship", "keesun@mail.com", &observers).unwrap()))
        });
    }
    group.finish();
}

// ===== Bean lookups =====

fn bench_bean_lookup(c: &mut Criterion) {
    let mut beans = BeanCollection::new();
    beans.add_factory_bean(ShipFactoryBean);
    beans.add_named_singleton("hello", "hello".to_string());
    let context = beans.build();

    // Prime the singleton
    let _ = context.get_bean::<Ship>().unwrap();

    c.bench_function("bean_singleton_hit", |b| {
        b.iter(|| black_box(context.get_bean::<Ship>().unwrap()))
    });
    c.bench_function("bean_named_hit", |b| {
        b.iter(|| black_box(context.get_named_bean::<String>("hello").unwrap()))
    });
}

criterion_group!(benches, bench_settings_access, bench_round_trip, bench_order_ship, bench_bean_lookup);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphoneformat::{
    COUNTRY_CATALOG, CountryCatalog, grammar::PhoneGrammar, i18n::LocaleDatabase,
};

fn catalog_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut group = c.benchmark_group("Country catalog");

    group.bench_function("build", |b| {
        b.iter(|| CountryCatalog::build(black_box(&LocaleDatabase::new()), &PhoneGrammar).unwrap())
    });

    let catalog = &*COUNTRY_CATALOG;
    group.bench_function("name_to_iso", |b| {
        b.iter(|| catalog.name_to_iso(black_box("United States")))
    });
    group.bench_function("entry_for_calling_code", |b| {
        b.iter(|| catalog.entry_for_calling_code(black_box(49)))
    });
    group.finish();
}

criterion_group!(benches, catalog_benchmark);
criterion_main!(benches);

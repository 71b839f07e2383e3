use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphoneformat::{PHONE_FORMATTER, trim_phone};

use phonenumber::{self as rlp, Mode};

fn setup_numbers() -> Vec<&'static str> {
    vec![
        "+17203520676",
        "720.352.0676",
        "+1 (650) 253-0000",
        "+44 20 8765 4321",
        "+41446681800",
        "+7 495 123-45-67",
        "+1 (720) 352-067",
        "not a phone number",
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let mut group = c.benchmark_group("Formatting");

    group.bench_function("rphoneformat: format", |b| {
        b.iter(|| {
            for number in &numbers {
                PHONE_FORMATTER.format(black_box(number));
            }
        })
    });

    // baseline: plain libphonenumber international formatting of the
    // numbers that carry their own calling code
    let parsed: Vec<rlp::PhoneNumber> = numbers
        .iter()
        .filter_map(|number| rlp::parse(None, number).ok())
        .collect();
    group.bench_function("rust-phonenumber: format(International)", |b| {
        b.iter(|| {
            for number in &parsed {
                rlp::format(black_box(number)).mode(Mode::International).to_string();
            }
        })
    });

    group.bench_function("rphoneformat: components", |b| {
        b.iter(|| {
            for number in &numbers {
                PHONE_FORMATTER.components(black_box(number));
            }
        })
    });
    group.finish();
}

fn validation_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let mut group = c.benchmark_group("Validation");

    group.bench_function("rphoneformat: trim_phone", |b| {
        b.iter(|| {
            for number in &numbers {
                trim_phone(black_box(number));
            }
        })
    });

    group.bench_function("rphoneformat: is_valid", |b| {
        b.iter(|| {
            for number in &numbers {
                PHONE_FORMATTER.is_valid(black_box(number));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, formatting_benchmark, validation_benchmark);
criterion_main!(benches);

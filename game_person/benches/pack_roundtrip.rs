// benches/pack_roundtrip.rs

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use game_person::{PersonRecord, Step};

fn steps_for(i: u32) -> Vec<Step> {
    vec![
        Step::Name(format!("person_{i}")),
        Step::Coordinates {
            x: i as i32,
            y: -(i as i32),
            z: 0,
        },
        Step::Gold(i * 37),
        Step::Mana(i % 1001),
        Step::Health(1000 - (i % 1001)),
        Step::Respect((i % 11) as u32),
        Step::Strength(((i + 3) % 11) as u32),
        Step::Experience((i % 16) as u32),
        Step::Level((i % 11) as u8),
        Step::House,
        Step::Kind((i % 4) as u8),
    ]
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_record", |b| {
        b.iter(|| {
            let record = PersonRecord::build(black_box(steps_for(42)));
            black_box(record)
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let record = PersonRecord::build(steps_for(42));

    c.bench_function("decode_all_fields", |b| {
        b.iter(|| {
            let sum = black_box(&record).gold() as u64
                + record.mana() as u64
                + record.health() as u64
                + record.respect() as u64
                + record.strength() as u64
                + record.experience() as u64
                + record.level() as u64
                + record.kind_raw() as u64;
            black_box(sum)
        });
    });
}

fn bench_byte_roundtrip(c: &mut Criterion) {
    let record = PersonRecord::build(steps_for(42));

    c.bench_function("byte_roundtrip", |b| {
        b.iter(|| {
            let bytes = black_box(record.as_bytes());
            let restored = PersonRecord::try_from_bytes(bytes).unwrap();
            black_box(restored)
        });
    });
}

criterion_group!(benches, bench_build, bench_decode, bench_byte_roundtrip);
criterion_main!(benches);

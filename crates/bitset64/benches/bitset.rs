use bitset64::{BitSet64, xor};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_set_clear_toggle(c: &mut Criterion) {
    let set = BitSet64::from_bits(0x8100_0000_0000_0081);

    c.bench_function("bitset_set_clear_toggle", |b| {
        b.iter(|| {
            black_box(set)
                .set(black_box(12))
                .clear(black_box(0))
                .toggle(black_box(63))
        })
    });
}

fn bench_has(c: &mut Criterion) {
    let set = BitSet64::from_bits(0x00FF_0000_0000_FF00);

    c.bench_function("bitset_has", |b| {
        b.iter(|| black_box(set).has(black_box(42)))
    });
}

fn bench_xor(c: &mut Criterion) {
    let left = BitSet64::from_bits(0x0F0F_0F0F_0F0F_0F0F);
    let right = BitSet64::from_bits(0x00FF_00FF_00FF_00FF);

    c.bench_function("bitset_xor", |b| {
        b.iter(|| xor(black_box(left), black_box(right)))
    });
}

fn bench_display(c: &mut Criterion) {
    let set = BitSet64::from_bits(0x8000_0000_0040_0029);

    c.bench_function("bitset_display", |b| b.iter(|| black_box(set).to_string()));
}

fn bench_to_string_with(c: &mut Criterion) {
    const NAMES: [&str; 8] = ["r", "w", "x", "", "s", "", "t", ""];
    let set = BitSet64::from_bits(0xFF);

    c.bench_function("bitset_to_string_with", |b| {
        b.iter(|| black_box(set).to_string_with("<", ">", "|", |i| NAMES[i]))
    });
}

criterion_group!(
    benches,
    bench_set_clear_toggle,
    bench_has,
    bench_xor,
    bench_display,
    bench_to_string_with
);
criterion_main!(benches);

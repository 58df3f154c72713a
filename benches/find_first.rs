use criterion::*;
use searchb_core::find_first;

/// Around a megabyte of repetitive text with the needle placed near the end.
fn build_haystack() -> Vec<u8> {
    let mut haystack = b"lorem ipsum ".repeat(87_000);
    let at = haystack.len() - 100;
    haystack[at..at + 6].copy_from_slice(b"dolore");
    haystack
}

fn cr_bench_find_first(c: &mut Criterion) {
    let haystack = build_haystack();
    let needle = b"dolore";

    c.bench_function("find_first_1mib", |b| {
        b.iter(|| find_first(black_box(&haystack), black_box(needle)))
    });
}

criterion_group!(benches, cr_bench_find_first);
criterion_main!(benches);

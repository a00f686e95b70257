use criterion::{Criterion, criterion_group, criterion_main};
use linecount_engine::scanner::count_lines;
use std::hint::black_box;
use std::io::Cursor;

fn benchmark_count_lines(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog\n".repeat(20_000);

    c.bench_function("count_lines_880k", |b| {
        b.iter(|| {
            let lines = count_lines(&mut Cursor::new(black_box(text.as_bytes()))).unwrap();
            black_box(lines);
        })
    });
}

criterion_group!(benches, benchmark_count_lines);
criterion_main!(benches);

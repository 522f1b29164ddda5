//! Throughput benchmark for the parser over a representative program.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pebble_util::diagnostic::Handler;

const SAMPLE: &str = r#"
function fib(n:int):int {
    if (n < 2) {
        return n;
    }
    return fib(n - 1) + fib(n - 2);
}

var i:int = 0;
while (i < 20) {
    print(string(fib(i)) + " ");
    i = i + 1;
}
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));
    group.bench_function("parse_sample_program", |b| {
        b.iter(|| {
            let handler = Handler::new();
            black_box(pebble_par::parse_source(black_box(SAMPLE), &handler));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io;

use ctxlog::{LogConfig, Logger, Sink, Value, args};

/// Logger que escribe a io::sink para medir solo el formateo
fn logger(format: &str, level: &str) -> Logger {
    let handler = LogConfig::from_vars(format, level).handler_with_sink(Sink::new(io::sink()));
    Logger::with_handler(handler)
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    for format in ["TEXT", "JSON"] {
        let logger = logger(format, "INFO");
        group.bench_with_input(BenchmarkId::new("info_4_attrs", format), &logger, |b, l| {
            b.iter(|| {
                l.info(
                    black_box("request completed"),
                    args!["method", "GET", "path", "/users/42", "status", 200, "ms", 3.5],
                )
            })
        });
    }

    let quiet = logger("JSON", "ERROR");
    group.bench_function("disabled_level", |b| {
        b.iter(|| quiet.debug(black_box("dropped"), args!["k", "v"]))
    });

    group.finish();
}

fn bench_bound_attrs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bound_attrs");

    for count in [1usize, 8, 32] {
        let pairs: Vec<Value> = (0..count)
            .flat_map(|i| [Value::from(format!("key{i}")), Value::from(i)])
            .collect();
        let logger = logger("JSON", "INFO").with(pairs);

        group.bench_with_input(BenchmarkId::from_parameter(count), &logger, |b, l| {
            b.iter(|| l.info(black_box("tick"), args![]))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_emit, bench_bound_attrs);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rpn_calculator::interpreter::evaluate_expression;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "42".to_string(),
        "4 + 3 * 2 / 1".to_string(),
        "3 + 5 * (2 - 8)".to_string(),
        "((1.5 + 2.25) * (3 - 0.5)) / (4 * (2 + 6) - 7.75)".to_string(),
        "1 - 2 + 3 - 4 + 5 - 6 + 7 - 8 + 9 - 10 * 11 / 12 * 13 / 14".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate_expression(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

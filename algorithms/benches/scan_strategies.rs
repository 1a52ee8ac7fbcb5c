use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linear_scans::arrays_hashing::DuplicateStrategy;
use linear_scans::data_structures::linked_list::{ListNode, ReversalStrategy};
use linear_scans::two_pointers::PalindromeStrategy;

fn bench_duplicate_strategies(c: &mut Criterion) {
    let distinct: Vec<u64> = (0..10_000).collect();
    let mut early_repeat = distinct.clone();
    early_repeat[1] = early_repeat[0];

    let mut group = c.benchmark_group("duplicates");
    for strategy in DuplicateStrategy::ALL {
        group.bench_with_input(
            BenchmarkId::new(format!("{strategy:?}"), "distinct"),
            &distinct,
            |b, nums| b.iter(|| strategy.detect(black_box(nums))),
        );
        group.bench_with_input(
            BenchmarkId::new(format!("{strategy:?}"), "repeat-at-1"),
            &early_repeat,
            |b, nums| b.iter(|| strategy.detect(black_box(nums))),
        );
    }
    group.finish();
}

fn bench_palindrome_strategies(c: &mut Criterion) {
    let half = "Was it a car or a cat I saw? ".repeat(200);
    let text: String = half.chars().chain(half.chars().rev()).collect();

    let mut group = c.benchmark_group("palindrome");
    for strategy in PalindromeStrategy::ALL {
        group.bench_function(BenchmarkId::from_parameter(format!("{strategy:?}")), |b| {
            b.iter(|| strategy.check(black_box(&text)))
        });
    }
    group.finish();
}

fn bench_reversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_list");
    for strategy in ReversalStrategy::ALL {
        group.bench_function(BenchmarkId::from_parameter(format!("{strategy:?}")), |b| {
            b.iter_batched(
                || ListNode::from_values(0..1_000u32),
                |head| strategy.reverse(head),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_duplicate_strategies,
    bench_palindrome_strategies,
    bench_reversal
);
criterion_main!(benches);

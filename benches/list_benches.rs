use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linked_dsa::prelude::*;

const SAMPLE_SIZE: usize = 10_000;

fn end_push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_push");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("doubly_push_back", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = DoublyLinked::new();
            for i in 0..SAMPLE_SIZE {
                list.push_back(black_box(i));
            }
            list
        })
    });

    group.bench_function(BenchmarkId::new("singly_push_back", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = SinglyLinked::new();
            for i in 0..SAMPLE_SIZE {
                list.push_back(black_box(i));
            }
            list
        })
    });

    group.bench_function(BenchmarkId::new("circular_push_back", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut ring = CircularSingly::new();
            for i in 0..SAMPLE_SIZE {
                ring.push_back(black_box(i));
            }
            ring
        })
    });

    group.finish();
}

fn adapter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("stack_push_pop", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut stack = LinkedStack::new();
            for i in 0..SAMPLE_SIZE {
                stack.push(black_box(i));
            }
            while stack.pop().is_ok() {}
            stack
        })
    });

    group.bench_function(BenchmarkId::new("queue_enqueue_dequeue", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut queue = LinkedQueue::new();
            for i in 0..SAMPLE_SIZE {
                queue.enqueue(black_box(i));
            }
            while queue.dequeue().is_ok() {}
            queue
        })
    });

    group.finish();
}

fn positional_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");

    group.bench_function(BenchmarkId::new("doubly_insert_middle", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                let mut list = DoublyLinked::new();
                for i in 0..SAMPLE_SIZE {
                    list.push_back(i);
                }
                list
            },
            |mut list| {
                list.insert_at(black_box(0), SAMPLE_SIZE / 2);
                list
            },
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    end_push_benchmark,
    adapter_benchmark,
    positional_benchmark
);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use interview_structures::{AnyHeap, BinaryHeap, Min, PriorityQueue};
use std::cmp::Reverse;
use std::collections::BinaryHeap as StdBinaryHeap;

fn fill<H: AnyHeap<u32>>(heap: &mut H, n: u32) {
    // Multiplying by an odd constant permutes the values, so they stay unique.
    for i in 0..n {
        let _ = heap.push(black_box(i.wrapping_mul(2_654_435_761)));
    }
}

fn drain<H: AnyHeap<u32>>(heap: &mut H) -> u64 {
    let mut sum = 0u64;
    while let Ok(v) = heap.pop() {
        sum += u64::from(v);
    }
    sum
}

fn bench_binary_heap(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("BinaryHeap vs std (Push)");
        for n in [64u32, 1024] {
            group.bench_with_input(BenchmarkId::new("std::collections::BinaryHeap", n), &n, |b, &n| {
                b.iter(|| {
                    let mut h = StdBinaryHeap::new();
                    fill(&mut h, n);
                    h
                })
            });
            group.bench_with_input(BenchmarkId::new("BinaryHeap<u32, Min>", n), &n, |b, &n| {
                b.iter(|| {
                    let mut h: BinaryHeap<u32, Min> = BinaryHeap::new();
                    fill(&mut h, n);
                    h
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs std (Push + Drain)");
        let n = 1024;
        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h = StdBinaryHeap::new();
                fill(&mut h, n);
                black_box(drain(&mut h))
            })
        });
        group.bench_function("BinaryHeap<u32, Min>", |b| {
            b.iter(|| {
                let mut h: BinaryHeap<u32, Min> = BinaryHeap::new();
                fill(&mut h, n);
                black_box(drain(&mut h))
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs std (Peek)");
        let mut h_std = StdBinaryHeap::new();
        let mut h_ours: BinaryHeap<u32> = BinaryHeap::new();
        fill(&mut h_std, 1024);
        fill(&mut h_ours, 1024);

        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                black_box(h_std.peek());
            })
        });
        group.bench_function("BinaryHeap<u32, Max>", |b| {
            b.iter(|| {
                black_box(h_ours.top().ok());
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("PriorityQueue (Enqueue + Dequeue)");
        group.bench_function("PriorityQueue<u32, Reverse<u32>>", |b| {
            b.iter(|| {
                let mut q = PriorityQueue::new();
                for i in 0..1024u32 {
                    // Repeated priorities exercise the FIFO tie-break.
                    q.enqueue(i, Reverse(black_box(i % 37)));
                }
                while q.dequeue().is_ok() {}
                q
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_binary_heap);
criterion_main!(benches);

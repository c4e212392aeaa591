use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfarer_lib::{find_least_cost_path, Edge, Graph, PriorityQueue};

const OPERATIONS: usize = 50_000;

/// Interleaved insert/extract workload: `Some(key)` inserts, `None` extracts.
static WORKLOAD: Lazy<Vec<Option<i32>>> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(0xbeef);
    let mut last = 0;
    (0..OPERATIONS)
        .map(|_| {
            if rng.gen_bool(0.55) {
                Some(last + rng.gen_range(0..1_000))
            } else {
                last += 1;
                None
            }
        })
        .collect()
});

static GRID: Lazy<Graph> = Lazy::new(|| {
    const SIDE: u32 = 100;
    let mut rng = StdRng::seed_from_u64(3);
    let mut edges = Vec::new();
    for row in 0..SIDE {
        for col in 0..SIDE {
            let node = row * SIDE + col;
            if col + 1 < SIDE {
                edges.push(Edge {
                    from: node,
                    to: node + 1,
                    cost: rng.gen_range(1..100),
                    bidirectional: true,
                });
            }
            if row + 1 < SIDE {
                edges.push(Edge {
                    from: node,
                    to: node + SIDE,
                    cost: rng.gen_range(1..100),
                    bidirectional: true,
                });
            }
        }
    }
    Graph::from_edges(&edges).expect("grid costs are positive")
});

fn benchmark_queue(c: &mut Criterion) {
    let workload = &*WORKLOAD;

    c.bench_function("bin_merging_queue_interleaved", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for op in workload {
                match op {
                    Some(key) => queue.insert(*key, *key),
                    None => {
                        black_box(queue.extract_min());
                    }
                }
            }
            black_box(queue.peak_size())
        });
    });

    c.bench_function("binary_heap_interleaved", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for op in workload {
                match op {
                    Some(key) => heap.push(Reverse(*key)),
                    None => {
                        black_box(heap.pop());
                    }
                }
            }
            black_box(heap.len())
        });
    });

    c.bench_function("least_cost_path_grid_100x100", |b| {
        let graph = &*GRID;
        b.iter(|| {
            let result = find_least_cost_path(graph, 0, 9_999).expect("grid is connected");
            black_box(result.cost)
        });
    });
}

criterion_group!(benches, benchmark_queue);
criterion_main!(benches);

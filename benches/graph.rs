use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use interview_structures::{AdjacencyList, AdjacencyMatrix, DirectedWeightedGraph};

/// A ring with chords: every vertex links to the next one and to the one
/// `stride` ahead, so Dijkstra has real choices to make.
fn build<G: DirectedWeightedGraph>(graph: &mut G, n: usize, stride: usize) -> Vec<String> {
    let labels: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
    for label in &labels {
        let _ = graph.add_vertex(label);
    }
    for i in 0..n {
        let _ = graph.add_edge(&labels[i], &labels[(i + 1) % n], 1 + (i % 7) as u64);
        let _ = graph.add_edge(&labels[i], &labels[(i + stride) % n], 5 + (i % 11) as u64);
    }
    labels
}

fn bench_graph(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("Dijkstra (List vs Matrix)");
        for n in [64usize, 256] {
            let mut list = AdjacencyList::new();
            let mut matrix = AdjacencyMatrix::with_capacity(n);
            let labels = build(&mut list, n, 9);
            build(&mut matrix, n, 9);

            group.bench_with_input(BenchmarkId::new("AdjacencyList", n), &labels[0], |b, source| {
                b.iter(|| black_box(list.dijkstra(source).ok()))
            });
            group.bench_with_input(BenchmarkId::new("AdjacencyMatrix", n), &labels[0], |b, source| {
                b.iter(|| black_box(matrix.dijkstra(source).ok()))
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Traversal (List vs Matrix)");
        let n = 256;
        let mut list = AdjacencyList::new();
        let mut matrix = AdjacencyMatrix::with_capacity(n);
        let labels = build(&mut list, n, 13);
        build(&mut matrix, n, 13);

        group.bench_function("AdjacencyList BFS", |b| b.iter(|| black_box(list.bfs(&labels[0]).ok())));
        group.bench_function("AdjacencyMatrix BFS", |b| b.iter(|| black_box(matrix.bfs(&labels[0]).ok())));
        group.bench_function("AdjacencyList DFS", |b| b.iter(|| black_box(list.dfs(&labels[0]).ok())));
        group.bench_function("AdjacencyMatrix DFS", |b| b.iter(|| black_box(matrix.dfs(&labels[0]).ok())));
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Remove Vertex (List vs Matrix)");
        let n = 128;
        group.bench_function("AdjacencyList", |b| {
            b.iter(|| {
                let mut g = AdjacencyList::new();
                let labels = build(&mut g, n, 5);
                for label in labels.iter().step_by(3) {
                    let _ = g.remove_vertex(label);
                }
                g
            })
        });
        group.bench_function("AdjacencyMatrix", |b| {
            b.iter(|| {
                let mut g = AdjacencyMatrix::with_capacity(n);
                let labels = build(&mut g, n, 5);
                for label in labels.iter().step_by(3) {
                    let _ = g.remove_vertex(label);
                }
                g
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_graph);
criterion_main!(benches);

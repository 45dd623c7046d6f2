//! Directed weighted graphs with string-labelled vertices.
//!
//! [`DirectedWeightedGraph`] holds the operations both representations share;
//! traversals and shortest paths are provided on top of `neighbours`.
//! [`Undirected`] wraps either layout and mirrors every edge.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod shortest_path;
pub mod undirected;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use shortest_path::{PathStep, ShortestPaths};
pub use undirected::{Undirected, UndirectedAdjacencyList, UndirectedAdjacencyMatrix};

use fnv::FnvBuildHasher;
use hashbrown::HashSet;

use crate::error::{Result, StructureError};
use crate::queue::{AnyQueue, LinkedQueue};

pub trait DirectedWeightedGraph {
    /// Adds an isolated vertex; an existing label gives `VertexExists`.
    fn add_vertex(&mut self, vertex: &str) -> Result<()>;

    /// Removes a vertex together with every edge into or out of it.
    fn remove_vertex(&mut self, vertex: &str) -> Result<()>;

    /// Adds `from -> to`. Both endpoints must exist and the edge must be new.
    fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<()>;

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<()>;

    /// Adds `from -> to` with unit weight, so path distances count hops.
    fn add_unweighted_edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.add_edge(from, to, 1)
    }

    fn clear(&mut self);

    fn contains_vertex(&self, vertex: &str) -> bool;

    /// Vertex labels in insertion order.
    fn vertices(&self) -> Vec<&str>;

    /// Outgoing `(target, weight)` pairs, or `None` for an unknown vertex.
    fn neighbours(&self, vertex: &str) -> Option<Vec<(&str, u64)>>;

    fn number_of_vertices(&self) -> usize;

    fn number_of_edges(&self) -> usize;

    /// Adds each vertex in turn; returns the last failure, if any.
    fn add_all_vertices<'a, I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
        Self: Sized,
    {
        let mut outcome = Ok(());
        for vertex in vertices {
            if let Err(e) = self.add_vertex(vertex) {
                outcome = Err(e);
            }
        }
        outcome
    }

    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Every edge as `(from, to, weight)`, grouped by source vertex.
    fn edges(&self) -> Vec<(&str, &str, u64)> {
        self.vertices()
            .into_iter()
            .flat_map(|from| {
                self.neighbours(from)
                    .unwrap_or_default()
                    .into_iter()
                    .map(move |(to, w)| (from, to, w))
            })
            .collect()
    }

    /// Depth-first pre-order from `source`.
    fn dfs(&self, source: &str) -> Result<Vec<String>> {
        fn visit<'g, G: DirectedWeightedGraph + ?Sized>(
            graph: &'g G,
            vertex: &'g str,
            seen: &mut HashSet<&'g str, FnvBuildHasher>,
            order: &mut Vec<String>,
        ) {
            seen.insert(vertex);
            order.push(vertex.to_owned());
            for (next, _) in graph.neighbours(vertex).unwrap_or_default() {
                if !seen.contains(next) {
                    visit(graph, next, seen, order);
                }
            }
        }

        let start = self.vertex_label(source)?;
        let mut seen = HashSet::default();
        let mut order = Vec::new();
        visit(self, start, &mut seen, &mut order);
        Ok(order)
    }

    /// Breadth-first order from `source`.
    fn bfs(&self, source: &str) -> Result<Vec<String>> {
        let start = self.vertex_label(source)?;
        let mut seen: HashSet<&str, FnvBuildHasher> = HashSet::default();
        let mut queue = LinkedQueue::new();
        let mut order = Vec::new();

        seen.insert(start);
        queue.enqueue(start);
        while let Ok(vertex) = queue.dequeue() {
            order.push(vertex.to_owned());
            for (next, _) in self.neighbours(vertex).unwrap_or_default() {
                if seen.insert(next) {
                    queue.enqueue(next);
                }
            }
        }
        Ok(order)
    }

    /// Single-source shortest paths from `source`.
    fn dijkstra(&self, source: &str) -> Result<ShortestPaths> {
        shortest_path::dijkstra(self, source)
    }

    /// Cheapest path from `source` to `target`, source first.
    fn shortest_path(&self, source: &str, target: &str) -> Result<Vec<PathStep>> {
        self.dijkstra(source)?.path_to(target)
    }

    /// The graph's own copy of the label `vertex`.
    fn vertex_label(&self, vertex: &str) -> Result<&str> {
        self.vertices()
            .into_iter()
            .find(|v| *v == vertex)
            .ok_or_else(|| StructureError::VertexNotFound(vertex.to_owned()))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub(crate) const VERTICES: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

    pub(crate) const EDGES: [(&str, &str, u64); 17] = [
        ("a", "c", 10),
        ("a", "f", 7),
        ("b", "c", 5),
        ("b", "d", 14),
        ("c", "f", 15),
        ("c", "g", 6),
        ("d", "a", 9),
        ("d", "c", 4),
        ("d", "f", 8),
        ("d", "g", 6),
        ("e", "a", 13),
        ("e", "d", 2),
        ("f", "b", 11),
        ("f", "d", 10),
        ("g", "a", 3),
        ("g", "b", 3),
        ("g", "e", 6),
    ];

    pub(crate) fn populate<G: DirectedWeightedGraph>(graph: &mut G) {
        graph.add_all_vertices(VERTICES).unwrap();
        for (from, to, w) in EDGES {
            graph.add_edge(from, to, w).unwrap();
        }
    }

    /// Shared behaviour checks run against every representation.
    pub(crate) fn exercise_graph<G: DirectedWeightedGraph>(graph: &mut G) {
        assert!(graph.is_empty());
        populate(graph);
        assert_eq!(graph.number_of_vertices(), 7);
        assert_eq!(graph.number_of_edges(), 17);
        assert_eq!(graph.vertices(), VERTICES.to_vec());
        assert_eq!(graph.edges().len(), 17);

        assert_eq!(
            graph.add_vertex("a"),
            Err(StructureError::VertexExists("a".into()))
        );
        assert_eq!(
            graph.add_edge("a", "c", 1),
            Err(StructureError::edge_exists("a", "c"))
        );
        assert_eq!(
            graph.add_edge("a", "z", 1),
            Err(StructureError::VertexNotFound("z".into()))
        );
        assert_eq!(
            graph.remove_edge("c", "a"),
            Err(StructureError::edge_not_found("c", "a"))
        );

        assert_eq!(graph.dfs("a").unwrap(), ["a", "c", "f", "b", "d", "g", "e"]);
        assert_eq!(graph.bfs("a").unwrap(), ["a", "c", "f", "g", "b", "d", "e"]);
        assert!(graph.dfs("z").is_err());

        let path = graph.shortest_path("a", "e").unwrap();
        let vertices: Vec<&str> = path.iter().map(|s| s.vertex.as_str()).collect();
        let distances: Vec<u64> = path.iter().map(|s| s.distance).collect();
        assert_eq!(vertices, ["a", "c", "g", "e"]);
        assert_eq!(distances, [0, 10, 16, 22]);

        graph.add_vertex("h").unwrap();
        assert_eq!(
            graph.shortest_path("a", "h"),
            Err(StructureError::Unreachable("h".into()))
        );
        graph.remove_vertex("h").unwrap();

        graph.remove_vertex("a").unwrap();
        assert_eq!(graph.number_of_vertices(), 6);
        assert_eq!(graph.number_of_edges(), 12);
        assert!(!graph.contains_vertex("a"));
        assert_eq!(
            graph.remove_vertex("a"),
            Err(StructureError::VertexNotFound("a".into()))
        );

        graph.remove_vertex("b").unwrap();
        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 8);

        graph.remove_edge("d", "f").unwrap();
        assert_eq!(graph.number_of_edges(), 7);
        assert!(
            !graph
                .neighbours("d")
                .unwrap()
                .iter()
                .any(|(to, _)| *to == "f")
        );

        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_edges(), 0);
    }
}

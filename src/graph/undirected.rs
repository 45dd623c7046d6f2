use fnv::FnvBuildHasher;
use hashbrown::HashSet;

use super::{AdjacencyList, AdjacencyMatrix, DirectedWeightedGraph};
use crate::error::Result;

/// An undirected view over any directed layout.
///
/// Each edge `a - b` is stored as the pair `a -> b` and `b -> a` with the same
/// weight, so traversals and shortest paths from the trait work unchanged. A
/// self-loop is stored once. Edge counts and [`edges`](DirectedWeightedGraph::edges)
/// report every undirected edge a single time.
#[derive(Clone, Debug, Default)]
pub struct Undirected<G> {
    inner: G,
}

pub type UndirectedAdjacencyList = Undirected<AdjacencyList>;
pub type UndirectedAdjacencyMatrix = Undirected<AdjacencyMatrix>;

impl<G: DirectedWeightedGraph + Default> Undirected<G> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: DirectedWeightedGraph> Undirected<G> {
    /// The directed layout holding both halves of every edge.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: DirectedWeightedGraph> DirectedWeightedGraph for Undirected<G> {
    fn add_vertex(&mut self, vertex: &str) -> Result<()> {
        self.inner.add_vertex(vertex)
    }

    fn remove_vertex(&mut self, vertex: &str) -> Result<()> {
        self.inner.remove_vertex(vertex)
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<()> {
        self.inner.add_edge(from, to, weight)?;
        if from != to {
            if let Err(e) = self.inner.add_edge(to, from, weight) {
                self.inner.remove_edge(from, to)?;
                return Err(e);
            }
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.inner.remove_edge(from, to)?;
        if from != to {
            self.inner.remove_edge(to, from)?;
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn contains_vertex(&self, vertex: &str) -> bool {
        self.inner.contains_vertex(vertex)
    }

    fn vertices(&self) -> Vec<&str> {
        self.inner.vertices()
    }

    fn neighbours(&self, vertex: &str) -> Option<Vec<(&str, u64)>> {
        self.inner.neighbours(vertex)
    }

    fn number_of_vertices(&self) -> usize {
        self.inner.number_of_vertices()
    }

    fn number_of_edges(&self) -> usize {
        self.edges().len()
    }

    /// Each edge once, listed from whichever endpoint was added first.
    fn edges(&self) -> Vec<(&str, &str, u64)> {
        let mut done: HashSet<&str, FnvBuildHasher> = HashSet::default();
        let mut edges = Vec::new();
        for from in self.inner.vertices() {
            for (to, weight) in self.inner.neighbours(from).unwrap_or_default() {
                if !done.contains(to) {
                    edges.push((from, to, weight));
                }
            }
            done.insert(from);
        }
        edges
    }

    fn vertex_label(&self, vertex: &str) -> Result<&str> {
        self.inner.vertex_label(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructureError;

    fn town_map<G: DirectedWeightedGraph + Default>() -> Undirected<G> {
        let mut graph = Undirected::<G>::new();
        graph.add_all_vertices(["a", "b", "c", "d", "e"]).unwrap();
        for (a, b, w) in [("a", "b", 4), ("a", "c", 1), ("c", "b", 2), ("b", "d", 5), ("d", "e", 3)] {
            graph.add_edge(a, b, w).unwrap();
        }
        graph
    }

    fn exercise_undirected<G: DirectedWeightedGraph + Default>() {
        let mut graph = town_map::<G>();
        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(graph.inner().number_of_edges(), 10);
        assert!(graph.neighbours("b").unwrap().contains(&("a", 4)));
        assert!(graph.neighbours("a").unwrap().contains(&("b", 4)));

        assert_eq!(graph.add_edge("b", "a", 9), Err(StructureError::edge_exists("b", "a")));
        assert_eq!(graph.add_edge("a", "z", 1), Err(StructureError::VertexNotFound("z".into())));
        assert_eq!(graph.number_of_edges(), 5);

        let forward = graph.dijkstra("a").unwrap();
        let backward = graph.dijkstra("e").unwrap();
        assert_eq!(forward.distance_to("e"), Some(11));
        assert_eq!(backward.distance_to("a"), Some(11));
        let path: Vec<String> = graph
            .shortest_path("e", "a")
            .unwrap()
            .into_iter()
            .map(|step| step.vertex)
            .collect();
        assert_eq!(path, ["e", "d", "b", "c", "a"]);

        graph.remove_edge("b", "c").unwrap();
        assert!(!graph.neighbours("c").unwrap().iter().any(|(to, _)| *to == "b"));
        assert!(!graph.neighbours("b").unwrap().iter().any(|(to, _)| *to == "c"));
        assert_eq!(graph.remove_edge("c", "b"), Err(StructureError::edge_not_found("c", "b")));
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.dijkstra("e").unwrap().distance_to("c"), Some(13));

        graph.remove_vertex("d").unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.bfs("e").unwrap(), ["e"]);
        assert_eq!(graph.dfs("c").unwrap().len(), 3);
    }

    #[test]
    fn test_undirected_list() {
        exercise_undirected::<AdjacencyList>();
    }

    #[test]
    fn test_undirected_matrix() {
        exercise_undirected::<AdjacencyMatrix>();
    }

    #[test]
    fn test_undirected_edges_listed_once() {
        let graph = town_map::<AdjacencyList>();
        assert_eq!(
            graph.edges(),
            [("a", "b", 4), ("a", "c", 1), ("b", "c", 2), ("b", "d", 5), ("d", "e", 3)]
        );
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph = UndirectedAdjacencyMatrix::new();
        graph.add_vertex("a").unwrap();
        graph.add_edge("a", "a", 7).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.neighbours("a").unwrap(), [("a", 7)]);
        graph.remove_edge("a", "a").unwrap();
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.into_inner().number_of_edges(), 0);
    }

    #[test]
    fn test_unweighted_edge() {
        let mut graph = UndirectedAdjacencyList::new();
        graph.add_all_vertices(["a", "b", "c"]).unwrap();
        graph.add_unweighted_edge("a", "b").unwrap();
        graph.add_unweighted_edge("b", "c").unwrap();
        assert_eq!(graph.dijkstra("c").unwrap().distance_to("a"), Some(2));
    }
}

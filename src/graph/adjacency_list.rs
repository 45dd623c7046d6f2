use fnv::FnvBuildHasher;
use log::debug;
use ordermap::OrderMap;

use super::DirectedWeightedGraph;
use crate::error::{Result, StructureError};

/// A graph stored as one outgoing edge list per vertex.
///
/// Vertices keep insertion order, and so does each edge list, which makes
/// traversal order deterministic.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyList {
    adjacency: OrderMap<String, Vec<(String, u64)>, FnvBuildHasher>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    fn edges_mut(&mut self, vertex: &str) -> Result<&mut Vec<(String, u64)>> {
        self.adjacency
            .get_mut(vertex)
            .ok_or_else(|| StructureError::VertexNotFound(vertex.to_owned()))
    }
}

impl DirectedWeightedGraph for AdjacencyList {
    fn add_vertex(&mut self, vertex: &str) -> Result<()> {
        if self.adjacency.contains_key(vertex) {
            return Err(StructureError::VertexExists(vertex.to_owned()));
        }
        self.adjacency.insert(vertex.to_owned(), Vec::new());
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &str) -> Result<()> {
        let outgoing = self
            .adjacency
            .remove(vertex)
            .ok_or_else(|| StructureError::VertexNotFound(vertex.to_owned()))?;
        let mut incoming = 0;
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|(to, _)| to != vertex);
            incoming += before - edges.len();
        }
        debug!(
            "adjacency list: removed vertex {} with {} outgoing and {} incoming edges",
            vertex,
            outgoing.len(),
            incoming
        );
        Ok(())
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<()> {
        if !self.adjacency.contains_key(to) {
            return Err(StructureError::VertexNotFound(to.to_owned()));
        }
        let edges = self.edges_mut(from)?;
        if edges.iter().any(|(t, _)| t == to) {
            return Err(StructureError::edge_exists(from, to));
        }
        edges.push((to.to_owned(), weight));
        Ok(())
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let edges = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| StructureError::edge_not_found(from, to))?;
        let position = edges
            .iter()
            .position(|(t, _)| t == to)
            .ok_or_else(|| StructureError::edge_not_found(from, to))?;
        edges.remove(position);
        debug!("adjacency list: removed edge {}->{}", from, to);
        Ok(())
    }

    fn clear(&mut self) {
        self.adjacency.clear();
    }

    fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertices(&self) -> Vec<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    fn neighbours(&self, vertex: &str) -> Option<Vec<(&str, u64)>> {
        self.adjacency
            .get(vertex)
            .map(|edges| edges.iter().map(|(to, w)| (to.as_str(), *w)).collect())
    }

    fn number_of_vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn number_of_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    fn vertex_label(&self, vertex: &str) -> Result<&str> {
        self.adjacency
            .get_key_value(vertex)
            .map(|(label, _)| label.as_str())
            .ok_or_else(|| StructureError::VertexNotFound(vertex.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::{exercise_graph, populate};

    #[test]
    fn test_list_graph_behaviour() {
        exercise_graph(&mut AdjacencyList::new());
    }

    #[test]
    fn test_list_graph_edge_order_is_insertion_order() {
        let mut graph = AdjacencyList::new();
        graph.add_all_vertices(["x", "b", "a"]).unwrap();
        graph.add_edge("x", "b", 2).unwrap();
        graph.add_edge("x", "a", 1).unwrap();
        assert_eq!(graph.vertices(), ["x", "b", "a"]);
        assert_eq!(graph.neighbours("x").unwrap(), [("b", 2), ("a", 1)]);
        assert_eq!(graph.neighbours("q"), None);
    }

    #[test]
    fn test_list_graph_remove_edge_is_real() {
        let mut graph = AdjacencyList::new();
        populate(&mut graph);
        graph.remove_edge("g", "e").unwrap();
        assert_eq!(
            graph.remove_edge("g", "e"),
            Err(StructureError::edge_not_found("g", "e"))
        );
        assert_eq!(graph.number_of_edges(), 16);
        // g->e was the only edge into e.
        assert_eq!(
            graph.shortest_path("a", "e"),
            Err(StructureError::Unreachable("e".into()))
        );
    }

    #[test]
    fn test_list_graph_remove_vertex_keeps_order() {
        let mut graph = AdjacencyList::new();
        populate(&mut graph);
        graph.remove_vertex("c").unwrap();
        assert_eq!(graph.vertices(), ["a", "b", "d", "e", "f", "g"]);
        assert_eq!(graph.neighbours("d").unwrap(), [("a", 9), ("f", 8), ("g", 6)]);
    }
}

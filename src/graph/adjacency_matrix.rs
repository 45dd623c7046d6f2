use fnv::FnvBuildHasher;
use hashbrown::HashMap;
use log::debug;

use super::DirectedWeightedGraph;
use crate::error::{Result, StructureError};

/// A graph stored as a square weight matrix; `matrix[i][j]` is the weight of
/// the edge from vertex `i` to vertex `j`, if any.
///
/// Vertices are numbered in insertion order. Removing one deletes its row and
/// column, so every later vertex moves down one index.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    index: HashMap<String, usize, FnvBuildHasher>,
    matrix: Vec<Vec<Option<u64>>>,
}

impl AdjacencyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            labels: Vec::with_capacity(vertices),
            index: HashMap::with_capacity_and_hasher(vertices, FnvBuildHasher::default()),
            matrix: Vec::with_capacity(vertices),
        }
    }

    fn position(&self, vertex: &str) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| StructureError::VertexNotFound(vertex.to_owned()))
    }
}

impl DirectedWeightedGraph for AdjacencyMatrix {
    fn add_vertex(&mut self, vertex: &str) -> Result<()> {
        if self.index.contains_key(vertex) {
            return Err(StructureError::VertexExists(vertex.to_owned()));
        }
        let n = self.labels.len();
        self.labels.push(vertex.to_owned());
        self.index.insert(vertex.to_owned(), n);
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; n + 1]);
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &str) -> Result<()> {
        let i = self
            .index
            .remove(vertex)
            .ok_or_else(|| StructureError::VertexNotFound(vertex.to_owned()))?;
        self.labels.remove(i);
        self.matrix.remove(i);
        for row in &mut self.matrix {
            row.remove(i);
        }
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        debug!(
            "adjacency matrix: removed vertex {} at index {}, {} vertices remain",
            vertex,
            i,
            self.labels.len()
        );
        Ok(())
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<()> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        let cell = &mut self.matrix[i][j];
        if cell.is_some() {
            return Err(StructureError::edge_exists(from, to));
        }
        *cell = Some(weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let not_found = || StructureError::edge_not_found(from, to);
        let i = self.index.get(from).copied().ok_or_else(not_found)?;
        let j = self.index.get(to).copied().ok_or_else(not_found)?;
        self.matrix[i][j].take().ok_or_else(not_found)?;
        debug!("adjacency matrix: removed edge {}->{}", from, to);
        Ok(())
    }

    fn clear(&mut self) {
        self.labels.clear();
        self.index.clear();
        self.matrix.clear();
    }

    fn contains_vertex(&self, vertex: &str) -> bool {
        self.index.contains_key(vertex)
    }

    fn vertices(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }

    /// Targets come back in vertex order, not edge insertion order.
    fn neighbours(&self, vertex: &str) -> Option<Vec<(&str, u64)>> {
        let i = *self.index.get(vertex)?;
        let row = &self.matrix[i];
        Some(
            row.iter()
                .zip(&self.labels)
                .filter_map(|(cell, label)| cell.map(|w| (label.as_str(), w)))
                .collect(),
        )
    }

    fn number_of_vertices(&self) -> usize {
        self.labels.len()
    }

    fn number_of_edges(&self) -> usize {
        self.matrix.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    fn vertex_label(&self, vertex: &str) -> Result<&str> {
        self.position(vertex).map(|i| self.labels[i].as_str())
    }
}

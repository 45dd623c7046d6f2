use std::cmp::Reverse;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;
use log::trace;

use super::DirectedWeightedGraph;
use crate::error::{Result, StructureError};
use crate::priority_queue::PriorityQueue;

/// One vertex on a shortest path with its distance from the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathStep {
    pub vertex: String,
    pub distance: u64,
}

/// Result of a single-source Dijkstra run.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: String,
    distances: HashMap<String, u64, FnvBuildHasher>,
    previous: HashMap<String, String, FnvBuildHasher>,
}

impl ShortestPaths {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distance from the source, or `None` if `vertex` was never reached.
    pub fn distance_to(&self, vertex: &str) -> Option<u64> {
        self.distances.get(vertex).copied()
    }

    /// The path from the source to `target`, source first.
    pub fn path_to(&self, target: &str) -> Result<Vec<PathStep>> {
        let mut distance = self
            .distance_to(target)
            .ok_or_else(|| StructureError::Unreachable(target.to_owned()))?;
        let mut steps = Vec::new();
        let mut vertex = target;
        loop {
            steps.push(PathStep {
                vertex: vertex.to_owned(),
                distance,
            });
            let Some(prev) = self.previous.get(vertex) else {
                break;
            };
            vertex = prev;
            distance = self.distances.get(vertex).copied().unwrap_or_default();
        }
        steps.reverse();
        Ok(steps)
    }
}

/// Dijkstra over non-negative weights with lazy deletion: stale queue entries
/// are skipped when they surface instead of being decreased in place.
pub(crate) fn dijkstra<G>(graph: &G, source: &str) -> Result<ShortestPaths>
where
    G: DirectedWeightedGraph + ?Sized,
{
    if !graph.contains_vertex(source) {
        return Err(StructureError::VertexNotFound(source.to_owned()));
    }

    let mut distances: HashMap<String, u64, FnvBuildHasher> = HashMap::default();
    let mut previous: HashMap<String, String, FnvBuildHasher> = HashMap::default();
    let mut queue = PriorityQueue::new();

    distances.insert(source.to_owned(), 0);
    queue.enqueue(source.to_owned(), Reverse(0u64));

    while let Ok((vertex, Reverse(cost))) = queue.dequeue_with_priority() {
        if distances.get(&vertex).is_some_and(|&best| cost > best) {
            continue;
        }
        for (next, weight) in graph.neighbours(&vertex).unwrap_or_default() {
            let next_cost = cost.saturating_add(weight);
            if distances.get(next).is_none_or(|&best| next_cost < best) {
                trace!("dijkstra: relax {} -> {} = {}", vertex, next, next_cost);
                distances.insert(next.to_owned(), next_cost);
                previous.insert(next.to_owned(), vertex.clone());
                queue.enqueue(next.to_owned(), Reverse(next_cost));
            }
        }
    }

    Ok(ShortestPaths {
        source: source.to_owned(),
        distances,
        previous,
    })
}

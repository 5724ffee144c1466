use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// A path through the graph together with its total weight.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Distances and predecessors recorded during a Dijkstra search, stored in
/// flat vectors with `MAX` sentinels for "not set".
pub struct DijkstraData {
    distances: Vec<Distance>,
    predecessors: Vec<Vertex>,
}

impl DijkstraData {
    pub fn new(number_of_vertices: u32) -> DijkstraData {
        DijkstraData {
            distances: vec![Distance::MAX; number_of_vertices as usize],
            predecessors: vec![Vertex::MAX; number_of_vertices as usize],
        }
    }

    pub fn get_distance(&self, vertex: Vertex) -> Distance {
        self.distances[vertex as usize]
    }

    pub fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance;
    }

    pub fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let predecessor = self.predecessors[vertex as usize];

        if predecessor == Vertex::MAX {
            return None;
        }

        Some(predecessor)
    }

    pub fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = predecessor;
    }

    /// Constructs the path to a target vertex by tracing predecessor links.
    /// Returns `None` if the target was never reached.
    pub fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Distance::MAX {
            return None;
        }

        let mut vertices = vec![target];

        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

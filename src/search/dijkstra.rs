use std::{cmp::Reverse, collections::BinaryHeap};

use thiserror::Error;

use super::dijkstra_data::{DijkstraData, Path};
use crate::graphs::{Graph, Vertex};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    VertexOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },
}

/// Dijkstra between a single source and target, stopping as soon as the
/// target is expanded. `Ok(None)` means the target is unreachable, which is
/// a normal outcome and distinct from a precondition error.
pub fn dijkstra_single_pair(
    graph: &dyn Graph,
    source: Vertex,
    target: Vertex,
) -> Result<Option<Path>, SearchError> {
    for vertex in [source, target] {
        if vertex >= graph.number_of_vertices() {
            return Err(SearchError::VertexOutOfRange {
                vertex,
                number_of_vertices: graph.number_of_vertices(),
            });
        }
    }

    let mut data = DijkstraData::new(graph.number_of_vertices());
    let mut expanded = vec![false; graph.number_of_vertices() as usize];
    let mut queue = BinaryHeap::new();

    data.set_distance(source, 0);
    queue.push(Reverse((0, source)));

    // Reverse turns the max-heap into a min-heap; distance ties fall back
    // to the vertex id, which keeps expansion order reproducible.
    while let Some(Reverse((distance_tail, tail))) = queue.pop() {
        if expanded[tail as usize] {
            continue;
        }
        expanded[tail as usize] = true;

        if tail == target {
            break;
        }

        for edge in graph.edges(tail) {
            let alternative_distance = distance_tail + edge.weight;
            if alternative_distance < data.get_distance(edge.head) {
                data.set_distance(edge.head, alternative_distance);
                data.set_predecessor(edge.head, tail);
                queue.push(Reverse((alternative_distance, edge.head)));
            }
        }
    }

    Ok(data.get_path(target))
}

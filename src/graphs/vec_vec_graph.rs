use serde::{Deserialize, Serialize};

use super::{Distance, Edge, Graph, TaillessEdge, Vertex, WeightedEdge};

/// Adjacency-list graph. Each undirected edge is stored as two directed
/// arcs; the arc lists are kept sorted by head for binary-search lookups.
#[derive(Clone, Serialize, Deserialize)]
pub struct VecVecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecVecGraph {
    pub fn new(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Builds a graph with exactly `number_of_vertices` vertices, so
    /// isolated vertices survive. When the same vertex pair appears more
    /// than once, the minimum weight wins.
    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> VecVecGraph {
        let mut graph = VecVecGraph::new(number_of_vertices);

        edges.iter().for_each(|edge| {
            if edge.weight
                < graph
                    .get_weight(&edge.remove_weight())
                    .unwrap_or(Distance::MAX)
            {
                graph.set_weight(&edge.remove_weight(), Some(edge.weight));
                graph.set_weight(&edge.reversed().remove_weight(), Some(edge.weight));
            }
        });

        graph
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Define a struct for iterating over edges with the same tail. Struct is needed
        // as tail would otherwise not live enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.edges[tail as usize].iter(),
            tail,
        })
    }

    fn get_weight(&self, edge: &Edge) -> Option<Distance> {
        let edges_sharing_tail = self.edges.get(edge.tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&edge.head, |tailless_edge| tailless_edge.head)
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight)
    }

    fn set_weight(&mut self, edge: &Edge, weight: Option<Distance>) {
        // Ensure the edge endpoints are within the bounds of self.edges.
        let max_edge_endpoint = std::cmp::max(edge.tail, edge.head) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        let edges_sharing_tail = &mut self.edges[edge.tail as usize];

        let edge_index = edges_sharing_tail.binary_search_by_key(&edge.head, |other| other.head);

        if let Some(weight) = weight {
            match edge_index {
                Ok(index) => {
                    edges_sharing_tail[index].weight = weight;
                }
                Err(index) => {
                    let new_edge = TaillessEdge {
                        head: edge.head,
                        weight,
                    };
                    edges_sharing_tail.insert(index, new_edge);
                }
            }
        } else {
            // No weight means disconnecting the edge.
            if let Ok(index) = edge_index {
                edges_sharing_tail.remove(index);
            }
        }
    }
}

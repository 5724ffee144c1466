use incidence_paths::{
    graphs::{graph_functions::add_edge_bidirectional, vec_vec_graph::VecVecGraph, WeightedEdge},
    search::dijkstra::{dijkstra_single_pair, SearchError},
};

fn ring_graph() -> VecVecGraph {
    // 0-1-2-3-0, all weights 1.
    let mut graph = VecVecGraph::new(4);
    add_edge_bidirectional(&mut graph, &WeightedEdge::new(0, 1, 1));
    add_edge_bidirectional(&mut graph, &WeightedEdge::new(1, 2, 1));
    add_edge_bidirectional(&mut graph, &WeightedEdge::new(2, 3, 1));
    add_edge_bidirectional(&mut graph, &WeightedEdge::new(3, 0, 1));
    graph
}

#[test]
fn ring_distance_uses_either_diagonal() {
    let graph = ring_graph();

    let path = dijkstra_single_pair(&graph, 0, 2).unwrap().unwrap();

    assert_eq!(path.distance, 2);
    assert_eq!(path.vertices.first(), Some(&0));
    assert_eq!(path.vertices.last(), Some(&2));
    assert_eq!(path.vertices.len(), 3);
}

#[test]
fn path_graph_distance() {
    let graph = VecVecGraph::from_edges(3, &[WeightedEdge::new(0, 1, 5), WeightedEdge::new(1, 2, 3)]);

    let path = dijkstra_single_pair(&graph, 0, 2).unwrap().unwrap();

    assert_eq!(path.distance, 8);
    assert_eq!(path.vertices, vec![0, 1, 2]);
}

#[test]
fn unreachable_is_a_normal_result() {
    let graph = VecVecGraph::from_edges(4, &[WeightedEdge::new(0, 1, 1), WeightedEdge::new(2, 3, 1)]);

    assert!(dijkstra_single_pair(&graph, 0, 3).unwrap().is_none());
}

#[test]
fn out_of_range_vertices_are_rejected() {
    let graph = ring_graph();

    let result = dijkstra_single_pair(&graph, 0, 7);

    assert_eq!(
        result.unwrap_err(),
        SearchError::VertexOutOfRange {
            vertex: 7,
            number_of_vertices: 4
        }
    );
}

#[test]
fn distance_ties_expand_the_lowest_vertex_first() {
    // Diamond with two equal-weight routes from 0 to 3.
    let graph = VecVecGraph::from_edges(
        4,
        &[
            WeightedEdge::new(0, 1, 1),
            WeightedEdge::new(0, 2, 1),
            WeightedEdge::new(1, 3, 1),
            WeightedEdge::new(2, 3, 1),
        ],
    );

    let path = dijkstra_single_pair(&graph, 0, 3).unwrap().unwrap();

    assert_eq!(path.distance, 2);
    assert_eq!(path.vertices, vec![0, 1, 3]);
}

#[test]
fn parallel_edges_collapse_to_the_minimum_weight() {
    let graph = VecVecGraph::from_edges(2, &[WeightedEdge::new(0, 1, 5), WeightedEdge::new(0, 1, 2)]);

    let path = dijkstra_single_pair(&graph, 0, 1).unwrap().unwrap();

    assert_eq!(path.distance, 2);
}

#[test]
fn self_loops_never_improve_a_path() {
    let graph = VecVecGraph::from_edges(
        3,
        &[
            WeightedEdge::new(0, 1, 5),
            WeightedEdge::new(1, 2, 3),
            WeightedEdge::new(1, 1, 1),
        ],
    );

    let path = dijkstra_single_pair(&graph, 0, 2).unwrap().unwrap();

    assert_eq!(path.distance, 8);
    assert_eq!(path.vertices, vec![0, 1, 2]);
}

#[test]
fn source_equals_target() {
    let graph = ring_graph();

    let path = dijkstra_single_pair(&graph, 1, 1).unwrap().unwrap();

    assert_eq!(path.distance, 0);
    assert_eq!(path.vertices, vec![1]);
}

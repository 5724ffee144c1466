use ahash::{HashSet, HashSetExt};
use clap::ValueEnum;
use itertools::Itertools;
use rand::prelude::*;
use thiserror::Error;

use crate::graphs::{
    graph_functions::is_connected, vec_vec_graph::VecVecGraph, Distance, Vertex, WeightedEdge,
};

/// Sampling attempts before connected-mode generation gives up.
const MAX_CONNECT_ATTEMPTS: u32 = 100;

#[derive(Debug, ValueEnum, Clone, Copy)]
pub enum GenerateMode {
    /// No connectivity constraint.
    Unconstrained,
    /// Resample until every vertex is reachable from every other.
    Connected,
    /// Two independently sampled halves with no edge between them.
    Disconnected,
}

#[derive(Clone, Debug)]
pub struct GenerateConfig {
    pub number_of_vertices: u32,
    /// Requested edge count; capped at the number of distinct vertex pairs.
    pub number_of_edges: u32,
    pub min_weight: Distance,
    pub max_weight: Distance,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("too few edges ({number_of_edges}) to connect {number_of_vertices} vertices")]
    TooFewEdgesForConnectivity {
        number_of_vertices: u32,
        number_of_edges: u32,
    },

    #[error("no connected graph found after {0} attempts")]
    ConnectivityAttemptsExhausted(u32),

    #[error("cannot split {0} vertex/vertices into two non-empty components")]
    UnsplittableVertexCount(u32),

    #[error("empty weight range [{min_weight}, {max_weight}]")]
    EmptyWeightRange {
        min_weight: Distance,
        max_weight: Distance,
    },
}

/// Samples a random simple graph. The returned edge list's length is the
/// achieved edge count, which may be below the request when the request
/// exceeds the pair space.
pub fn generate(
    config: &GenerateConfig,
    mode: GenerateMode,
    rng: &mut impl Rng,
) -> Result<Vec<WeightedEdge>, GenerateError> {
    if config.min_weight > config.max_weight {
        return Err(GenerateError::EmptyWeightRange {
            min_weight: config.min_weight,
            max_weight: config.max_weight,
        });
    }

    match mode {
        GenerateMode::Unconstrained => Ok(random_edges(config, rng)),
        GenerateMode::Connected => generate_connected(config, rng),
        GenerateMode::Disconnected => generate_disconnected(config, rng),
    }
}

fn random_edges(config: &GenerateConfig, rng: &mut impl Rng) -> Vec<WeightedEdge> {
    sample_pairs(config.number_of_vertices, config.number_of_edges, rng)
        .into_iter()
        .map(|(tail, head)| {
            WeightedEdge::new(
                tail,
                head,
                rng.gen_range(config.min_weight..=config.max_weight),
            )
        })
        .collect()
}

fn generate_connected(
    config: &GenerateConfig,
    rng: &mut impl Rng,
) -> Result<Vec<WeightedEdge>, GenerateError> {
    let number_of_vertices = config.number_of_vertices;

    // A spanning tree needs V - 1 edges; fail fast instead of looping.
    if number_of_vertices >= 2 && config.number_of_edges < number_of_vertices - 1 {
        return Err(GenerateError::TooFewEdgesForConnectivity {
            number_of_vertices,
            number_of_edges: config.number_of_edges,
        });
    }

    for _ in 0..MAX_CONNECT_ATTEMPTS {
        let edges = random_edges(config, rng);
        let graph = VecVecGraph::from_edges(number_of_vertices, &edges);
        if is_connected(&graph) {
            return Ok(edges);
        }
    }

    Err(GenerateError::ConnectivityAttemptsExhausted(
        MAX_CONNECT_ATTEMPTS,
    ))
}

fn generate_disconnected(
    config: &GenerateConfig,
    rng: &mut impl Rng,
) -> Result<Vec<WeightedEdge>, GenerateError> {
    let number_of_vertices = config.number_of_vertices;
    if number_of_vertices < 2 {
        return Err(GenerateError::UnsplittableVertexCount(number_of_vertices));
    }

    let first_vertices = number_of_vertices / 2;
    let first_edges = config.number_of_edges / 2;

    let first_half = GenerateConfig {
        number_of_vertices: first_vertices,
        number_of_edges: first_edges,
        ..config.clone()
    };
    let second_half = GenerateConfig {
        number_of_vertices: number_of_vertices - first_vertices,
        number_of_edges: config.number_of_edges - first_edges,
        ..config.clone()
    };

    let mut edges = random_edges(&first_half, rng);
    edges.extend(
        random_edges(&second_half, rng)
            .into_iter()
            .map(|edge| {
                WeightedEdge::new(
                    edge.tail + first_vertices,
                    edge.head + first_vertices,
                    edge.weight,
                )
            }),
    );

    Ok(edges)
}

/// Uniformly samples distinct unordered vertex pairs, no self-loops. Sparse
/// requests rejection-sample; requests for more than half the pair space
/// enumerate it and choose directly. Insertion order is kept so a seeded
/// rng always yields the same edge (and thus column) order.
fn sample_pairs(
    number_of_vertices: u32,
    number_of_edges: u32,
    rng: &mut impl Rng,
) -> Vec<(Vertex, Vertex)> {
    let possible_pairs =
        number_of_vertices as u64 * number_of_vertices.saturating_sub(1) as u64 / 2;
    let target = (number_of_edges as u64).min(possible_pairs) as usize;
    if target == 0 {
        return Vec::new();
    }

    if target as u64 * 2 >= possible_pairs {
        let pairs: Vec<(Vertex, Vertex)> = (0..number_of_vertices).tuple_combinations().collect();
        return pairs.choose_multiple(rng, target).copied().collect();
    }

    let mut seen = HashSet::with_capacity(target);
    let mut pairs = Vec::with_capacity(target);
    while pairs.len() < target {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if tail == head {
            continue;
        }

        let pair = (tail.min(head), tail.max(head));
        if seen.insert(pair) {
            pairs.push(pair);
        }
    }

    pairs
}

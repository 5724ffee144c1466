use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// A shortest-path query together with its reference distance, `None` when
/// the target is unreachable. Serialized as JSON for comparison against an
/// external solver.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub source: Vertex,
    pub target: Vertex,
    pub distance: Option<Distance>,
}

//! Residual network definitions
//! - ResidueNode
//! - ResidueEdge
//! - ResidueGraph
//!
use itertools::Itertools; // for tuple_windows
use petgraph::graph::{DiGraph, NodeIndex};

// basic definitions

/// Node attributes used in ResidueGraph
///
/// `capacity` is the remaining throughput budget of the node for the
/// current computation. It only ever decreases; backward-edge slack lives
/// on edges, never on nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResidueNode {
    /// The remaining amount of flow this node may still pass
    pub capacity: u32,
}

impl ResidueNode {
    pub fn new(capacity: u32) -> ResidueNode {
        ResidueNode { capacity }
    }
    /// Node without a meaningful throughput ceiling (the aggregator).
    pub fn unbounded() -> ResidueNode {
        ResidueNode { capacity: u32::MAX }
    }
}

impl std::fmt::Display for ResidueNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.capacity)
    }
}

/// Edge attributes used in ResidueGraph
///
/// Forward edges start at the declared connection throughput, backward
/// edges at zero. Augmentation moves capacity between the two.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResidueEdge {
    /// The movable amount of flow remaining on this directed slot
    pub residual: u32,
}

impl ResidueEdge {
    pub fn new(residual: u32) -> ResidueEdge {
        ResidueEdge { residual }
    }
}

impl std::fmt::Display for ResidueEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.residual)
    }
}

/// ResidueGraph definition
pub type ResidueGraph = DiGraph<ResidueNode, ResidueEdge>;

//
// bookkeeping
//

///
/// Apply one augmentation of `bottleneck` units along `path` (a node
/// sequence from source to target).
///
/// The source endpoint is consumed exactly once, up front; every later
/// node on the path is consumed in the edge walk. Each traversed edge
/// loses `bottleneck` residual and its paired opposite edge gains it, so
/// a later path may retract the flow.
///
/// `bottleneck` must not exceed any capacity on the path, which
/// `find_augmenting_path` guarantees for the paths it returns.
///
pub fn augment_along_path(graph: &mut ResidueGraph, path: &[NodeIndex], bottleneck: u32) {
    let source = path[0];
    graph[source].capacity -= bottleneck;

    for (v, w) in path.iter().copied().tuple_windows() {
        let forward = graph
            .find_edge(v, w)
            .expect("path node pair has no connecting edge");
        graph[forward].residual -= bottleneck;

        // paired opposite slot always exists: edges are only ever created
        // in forward/backward pairs
        let backward = graph
            .find_edge(w, v)
            .expect("residual edge has no paired opposite edge");
        graph[backward].residual += bottleneck;

        graph[w].capacity -= bottleneck;
    }
}

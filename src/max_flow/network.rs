//!
//! Residual network construction from raw ceilings, connections and sinks
//!
use super::residue::{ResidueEdge, ResidueGraph, ResidueNode};
use super::ValidationError;
use petgraph::graph::NodeIndex;
use tracing::trace;

/// Declared connection `(from, to, throughput)`
pub type Connection = (usize, usize, u32);

///
/// A built residual network, ready for the augmentation loop.
///
/// `target` is the effective search target: the sole declared sink, or the
/// synthetic aggregator draining all declared sinks when there are several.
///
#[derive(Debug, Clone)]
pub struct Network {
    pub graph: ResidueGraph,
    pub source: NodeIndex,
    pub target: NodeIndex,
}

impl Network {
    ///
    /// Build the residual network for `max_throughput`.
    ///
    /// Node capacities follow the conservation rule: the origin is limited
    /// by its outbound ceiling only, a declared sink by its inbound ceiling
    /// only, and every other node by the smaller of the two.
    ///
    /// Every declared connection becomes a forward/backward edge pair,
    /// except that a connection whose directed slot is already occupied by
    /// the backward placeholder of an earlier opposite declaration
    /// overwrites that placeholder's capacity instead of duplicating the
    /// edge (last declared direction wins).
    ///
    pub fn build(
        max_in: &[u32],
        max_out: &[u32],
        connections: &[Connection],
        origin: usize,
        sinks: &[usize],
    ) -> Result<Network, ValidationError> {
        validate(max_in, max_out, connections, origin, sinks)?;

        let n = max_in.len();
        let mut graph =
            ResidueGraph::with_capacity(n + 1, 2 * connections.len() + 2 * sinks.len());

        for id in 0..n {
            let capacity = if id == origin {
                max_out[id]
            } else if sinks.contains(&id) {
                max_in[id]
            } else {
                max_in[id].min(max_out[id])
            };
            graph.add_node(ResidueNode::new(capacity));
        }

        // a single sink is searched for directly; several sinks drain into
        // an unbounded aggregator, each over an edge carrying the sink's
        // own capacity
        let target = if let [sink] = *sinks {
            NodeIndex::new(sink)
        } else {
            let aggregator = graph.add_node(ResidueNode::unbounded());
            for &sink in sinks {
                let sink = NodeIndex::new(sink);
                let capacity = graph[sink].capacity;
                graph.add_edge(sink, aggregator, ResidueEdge::new(capacity));
                graph.add_edge(aggregator, sink, ResidueEdge::new(0));
            }
            aggregator
        };

        for &(from, to, capacity) in connections {
            // flow never has to leave the sole sink
            if sinks == [from] {
                continue;
            }
            let (from, to) = (NodeIndex::new(from), NodeIndex::new(to));
            match graph.find_edge(from, to) {
                Some(placeholder) => {
                    trace!(?from, ?to, capacity, "overwriting backward placeholder");
                    graph[placeholder].residual = capacity;
                }
                None => {
                    graph.add_edge(from, to, ResidueEdge::new(capacity));
                    graph.add_edge(to, from, ResidueEdge::new(0));
                }
            }
        }

        Ok(Network {
            graph,
            source: NodeIndex::new(origin),
            target,
        })
    }
}

fn validate(
    max_in: &[u32],
    max_out: &[u32],
    connections: &[Connection],
    origin: usize,
    sinks: &[usize],
) -> Result<(), ValidationError> {
    if max_in.len() != max_out.len() {
        return Err(ValidationError::CeilingLengthMismatch {
            inbound: max_in.len(),
            outbound: max_out.len(),
        });
    }
    if sinks.is_empty() {
        return Err(ValidationError::EmptySinkSet);
    }

    let nodes = max_in.len();
    let out_of_range = |id: usize| ValidationError::NodeOutOfRange { id, nodes };
    if origin >= nodes {
        return Err(out_of_range(origin));
    }
    for &sink in sinks {
        if sink >= nodes {
            return Err(out_of_range(sink));
        }
    }
    for &(from, to, _) in connections {
        if from >= nodes {
            return Err(out_of_range(from));
        }
        if to >= nodes {
            return Err(out_of_range(to));
        }
    }
    Ok(())
}

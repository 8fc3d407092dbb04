//!
//! Augmenting-path search over the residual network
//!
use super::residue::ResidueGraph;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::VecDeque;

///
/// Find one shortest augmenting path from `source` to `target` and its
/// bottleneck, or `None` when no augmenting path remains.
///
/// Breadth-first search with first-arrival-wins visitation, so returned
/// paths have minimal hop count and the number of augmentation phases
/// stays polynomially bounded (Edmonds-Karp). An edge is traversable only
/// while its residual and its head node's capacity are both positive.
///
pub fn find_augmenting_path(
    graph: &ResidueGraph,
    source: NodeIndex,
    target: NodeIndex,
) -> Option<(Vec<NodeIndex>, u32)> {
    // a drained source can never start a path
    if graph[source].capacity == 0 {
        return None;
    }

    let mut visited = vec![false; graph.node_count()];
    // edge over which each node was first reached, valid for this pass only
    let mut reached_by: Vec<Option<EdgeIndex>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[source.index()] = true;
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        if v == target {
            return backtrack(graph, source, target, &reached_by);
        }
        for edge in graph.edges(v) {
            let w = edge.target();
            if visited[w.index()] || edge.weight().residual == 0 || graph[w].capacity == 0 {
                continue;
            }
            visited[w.index()] = true;
            reached_by[w.index()] = Some(edge.id());
            queue.push_back(w);
        }
    }

    None
}

///
/// Walk the recorded arrival edges back from `target` to `source`,
/// collecting the path and its bottleneck: the minimum over every
/// traversed edge's residual and every path node's capacity, source and
/// target included.
///
fn backtrack(
    graph: &ResidueGraph,
    source: NodeIndex,
    target: NodeIndex,
    reached_by: &[Option<EdgeIndex>],
) -> Option<(Vec<NodeIndex>, u32)> {
    let mut path = vec![target];
    let mut bottleneck = graph[target].capacity;

    let mut current = target;
    while current != source {
        let edge = reached_by[current.index()]?;
        let (previous, _) = graph.edge_endpoints(edge)?;
        bottleneck = bottleneck.min(graph[edge].residual);
        bottleneck = bottleneck.min(graph[previous].capacity);
        path.push(previous);
        current = previous;
    }
    path.reverse();

    // a single-node path carries nothing
    if path.len() <= 1 {
        return None;
    }
    Some((path, bottleneck))
}

//!
//! Node-capacitated maximum flow.
//!
//! The network is kept as a residual graph from the start: every declared
//! connection contributes a forward edge carrying its remaining throughput
//! and a backward edge carrying the amount that can be retracted. Nodes
//! carry their own remaining throughput budget, so an augmenting path is
//! constrained by edges and nodes alike.
//!
pub mod augment;
pub mod error;
pub mod mocks;
pub mod network;
pub mod residue;
pub mod utils;

pub use self::augment::find_augmenting_path;
pub use self::error::ValidationError;
pub use self::network::{Connection, Network};
pub use self::residue::{augment_along_path, ResidueEdge, ResidueGraph, ResidueNode};

use tracing::debug;

//
// public functions
//

///
/// Maximum total throughput deliverable from `origin` to the `sinks`,
/// where node `v` may pass at most `max_in[v]` inbound and `max_out[v]`
/// outbound units.
///
/// Builds the residual network and runs the augmentation loop to
/// exhaustion. Rejects malformed input before any graph is built.
///
pub fn max_throughput(
    max_in: &[u32],
    max_out: &[u32],
    connections: &[Connection],
    origin: usize,
    sinks: &[usize],
) -> Result<u32, ValidationError> {
    let network = Network::build(max_in, max_out, connections, origin, sinks)?;
    Ok(accumulate_flow(network))
}

///
/// Run the augmentation loop on a built network until no augmenting path
/// remains and return the accumulated total.
///
/// Consumes the network: one computation uses up the residual capacities,
/// so the graph must be rebuilt before answering a second query.
///
pub fn accumulate_flow(mut network: Network) -> u32 {
    let mut total = 0;

    while let Some((path, bottleneck)) =
        find_augmenting_path(&network.graph, network.source, network.target)
    {
        debug!(bottleneck, hops = path.len() - 1, "applying augmenting path");
        augment_along_path(&mut network.graph, &path, bottleneck);
        total += bottleneck;
    }

    debug!(total, "no augmenting path remains");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::max_flow::mocks::*;

    #[test]
    fn line_network_is_limited_by_its_weakest_edge() {
        // 0 --5--> 1 --3--> 2, all ceilings 10
        assert_eq!(accumulate_flow(mock_line_network()), 3);
    }

    #[test]
    fn relay_node_ceiling_caps_the_flow() {
        // edges would admit 10, but node 1 only accepts 2 inbound
        assert_eq!(accumulate_flow(mock_choked_relay()), 2);
    }

    #[test]
    fn multiple_sinks_drain_through_the_aggregator() {
        // origin feeds sinks 1 and 2 with 4 each, sinks accept 3 each
        assert_eq!(accumulate_flow(mock_twin_sinks()), 6);
    }

    #[test]
    fn multi_sink_equals_hand_built_aggregator() {
        let implicit = max_throughput(
            &[10, 3, 3],
            &[10, 10, 10],
            &[(0, 1, 4), (0, 2, 4)],
            0,
            &[1, 2],
        )
        .unwrap();

        // same network with the aggregator declared explicitly: node 3
        // accepts the sum of the sinks' inbound ceilings and each sink
        // forwards at most its own inbound ceiling
        let explicit = max_throughput(
            &[10, 3, 3, 6],
            &[10, 10, 10, 0],
            &[(0, 1, 4), (0, 2, 4), (1, 3, 3), (2, 3, 3)],
            0,
            &[3],
        )
        .unwrap();

        assert_eq!(implicit, explicit);
        assert_eq!(implicit, 6);
    }

    #[test]
    fn overwritten_reverse_placeholders_flow_both_ways() {
        // (0,1,5) then (1,0,7) share one edge pair
        let forward = max_throughput(&[10, 10], &[10, 10], &[(0, 1, 5), (1, 0, 7)], 0, &[1]);
        assert_eq!(forward, Ok(5));

        let backward = max_throughput(&[10, 10], &[10, 10], &[(0, 1, 5), (1, 0, 7)], 1, &[0]);
        assert_eq!(backward, Ok(7));
    }

    #[test]
    fn zero_capacity_origin_yields_zero() {
        let total = max_throughput(
            &[10, 10, 10],
            &[0, 10, 10],
            &[(0, 1, 5), (1, 2, 5)],
            0,
            &[2],
        );
        assert_eq!(total, Ok(0));
    }

    #[test]
    fn flow_can_be_retracted_through_backward_edges() {
        // the unique shortest path saturates an edge that the second
        // (longer) path must partially undo
        assert_eq!(accumulate_flow(mock_retraction_network()), 2);
    }

    #[test]
    fn result_is_deterministic_across_rebuilds() {
        let max_in = [7, 4, 9, 6, 8];
        let max_out = [9, 5, 3, 7, 8];
        let connections = [
            (0, 1, 4),
            (0, 2, 6),
            (1, 3, 3),
            (2, 3, 5),
            (2, 4, 2),
            (3, 4, 9),
        ];
        let a = max_throughput(&max_in, &max_out, &connections, 0, &[4]).unwrap();
        let b = max_throughput(&max_in, &max_out, &connections, 0, &[4]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn result_respects_the_trivial_upper_bounds() {
        let max_in = [10, 6, 4, 5];
        let max_out = [7, 10, 10, 10];
        let connections = [(0, 1, 9), (0, 2, 9), (1, 3, 9), (2, 3, 9), (1, 2, 1)];
        let sinks = [2, 3];

        let total = max_throughput(&max_in, &max_out, &connections, 0, &sinks).unwrap();
        let sink_bound: u32 = sinks.iter().map(|&s| max_in[s]).sum();
        assert!(total <= max_out[0]);
        assert!(total <= sink_bound);
    }

    #[test]
    fn raising_a_ceiling_never_decreases_the_result() {
        let base = max_throughput(&[10, 10, 10], &[10, 10, 10], &[(0, 1, 5), (1, 2, 3)], 0, &[2])
            .unwrap();

        // wider edge
        let wider_edge =
            max_throughput(&[10, 10, 10], &[10, 10, 10], &[(0, 1, 5), (1, 2, 4)], 0, &[2])
                .unwrap();
        assert!(wider_edge >= base);

        // wider relay node
        let wider_node =
            max_throughput(&[10, 12, 10], &[10, 12, 10], &[(0, 1, 5), (1, 2, 3)], 0, &[2])
                .unwrap();
        assert!(wider_node >= base);
    }

    #[test]
    fn malformed_input_is_rejected_up_front() {
        let err = max_throughput(&[1, 2], &[1], &[], 0, &[1]);
        assert_eq!(
            err,
            Err(ValidationError::CeilingLengthMismatch {
                inbound: 2,
                outbound: 1,
            })
        );
    }
}

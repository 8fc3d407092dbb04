//! mock network generation functions
//!
//! Built inputs are valid by construction, so the builder result is
//! unwrapped here.
use super::network::Network;

/// 0 --5--> 1 --3--> 2, all ceilings 10. Max throughput 3 (edge bound).
pub fn mock_line_network() -> Network {
    Network::build(
        &[10, 10, 10],
        &[10, 10, 10],
        &[(0, 1, 5), (1, 2, 3)],
        0,
        &[2],
    )
    .unwrap()
}

/// Wide edges through a relay that only accepts 2 inbound units.
/// Max throughput 2 (node bound).
pub fn mock_choked_relay() -> Network {
    Network::build(
        &[10, 2, 10],
        &[10, 10, 10],
        &[(0, 1, 10), (1, 2, 10)],
        0,
        &[2],
    )
    .unwrap()
}

/// Origin feeding two sinks (inbound ceilings 3 each) over edges of 4.
/// Max throughput 6, reached through the synthetic aggregator.
pub fn mock_twin_sinks() -> Network {
    Network::build(
        &[10, 3, 3],
        &[10, 10, 10],
        &[(0, 1, 4), (0, 2, 4)],
        0,
        &[1, 2],
    )
    .unwrap()
}

/// Network whose unique shortest path 0-1-2-3 blocks the sink edge, so
/// the second augmentation must retract flow across 1->2:
///
/// ```text
/// 0 -> 1 -> 2 -> 3      (all unit edges)
/// 0 -> 4 -> 5 -> 2
/// 1 -> 6 -> 7 -> 3
/// ```
///
/// Max throughput 2; only 1 is reachable without backward edges.
pub fn mock_retraction_network() -> Network {
    Network::build(
        &[10; 8],
        &[10; 8],
        &[
            (0, 1, 1),
            (1, 2, 1),
            (2, 3, 1),
            (0, 4, 1),
            (4, 5, 1),
            (5, 2, 1),
            (1, 6, 1),
            (6, 7, 1),
            (7, 3, 1),
        ],
        0,
        &[3],
    )
    .unwrap()
}

//!
//! maxflow solves the [maximum flow problem](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! on directed networks whose nodes (not only edges) carry integer throughput ceilings,
//! from a single origin to one or more sink nodes.
//!
pub mod max_flow;

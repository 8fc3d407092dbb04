//!
//! Input validation errors
//!
use thiserror::Error;

///
/// Rejection of a malformed network description, raised before any graph
/// is built. Capacities are unsigned throughout the crate, so negative
/// values are unrepresentable rather than a runtime error.
///
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The two ceiling arrays must describe the same node set
    #[error("inbound ceilings describe {inbound} nodes but outbound ceilings describe {outbound}")]
    CeilingLengthMismatch { inbound: usize, outbound: usize },
    /// An origin, sink or connection endpoint beyond the declared nodes
    #[error("node id {id} is out of range for a network of {nodes} nodes")]
    NodeOutOfRange { id: usize, nodes: usize },
    /// At least one sink is required
    #[error("sink list is empty")]
    EmptySinkSet,
}

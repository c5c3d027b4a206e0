//!
//! FlowEdge trait definition
//!
use super::FlowRate;

/// Edge of FlowNetwork
///
/// * `capacity()`: capacity `u(e)`, the upper limit of the flow
///
/// Any petgraph edge weight implementing this trait can be used as an input of
/// `max_flow`.
pub trait FlowEdge {
    /// Integer type of the flow amount
    type Rate: FlowRate;
    /// Capacity of the edge, Upper limit of the flow
    fn capacity(&self) -> Self::Rate;
}

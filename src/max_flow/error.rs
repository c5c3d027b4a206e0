//!
//! Error type of max flow computation
//!
use thiserror::Error;

/// Errors raised while building a network or computing its maximum flow.
///
/// `NodeOutOfRange` and `NegativeCapacity` are input errors and are detected before
/// any flow is pushed. `ExcessFlow` is an invariant violation of the residual graph.
#[derive(Debug, Error)]
pub enum MaxFlowError {
    #[error("node {node} is out of range (node_count={node_count})")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("edge ({from}, {to}) has negative capacity {capacity}")]
    NegativeCapacity {
        from: usize,
        to: usize,
        capacity: i128,
    },

    #[error("pushing {amount} along ({from}, {to}) exceeds its residual capacity {residual}")]
    ExcessFlow {
        from: usize,
        to: usize,
        amount: i128,
        residual: i128,
    },

    #[error("flow or capacity overflows the flow rate type")]
    Overflow,

    #[error("failed to read graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse graph: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MaxFlowError>;

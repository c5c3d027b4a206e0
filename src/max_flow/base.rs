//! # `FlowNetwork`
//!
//! Basic implementation of a capacitated flow network
//!
//! `FlowNetwork` is a DiGraph whose edge is `CapacityEdge`.
//! Nodes carry no attributes; node `i` is `NodeIndex::new(i)`.
//!
use super::error::{MaxFlowError, Result};
use super::{FlowEdge, FlowRate};
use petgraph::graph::{DiGraph, NodeIndex};

/// FlowNetwork definition
pub type FlowNetwork<F> = DiGraph<(), CapacityEdge<F>>;

/// Edge attributes used in FlowNetwork.
///
/// It has only a capacity u(e). Reverse direction `w -> v` of an edge `v -> w` is
/// an independent edge with its own capacity, or absent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CapacityEdge<F: FlowRate> {
    /// capacity (upper limit of flow) of the edge u(e)
    pub capacity: F,
}

impl<F: FlowRate> CapacityEdge<F> {
    pub fn new(capacity: F) -> CapacityEdge<F> {
        CapacityEdge { capacity }
    }
}

impl<F: FlowRate> std::fmt::Display for CapacityEdge<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.capacity)
    }
}

impl<F: FlowRate> FlowEdge for CapacityEdge<F> {
    type Rate = F;
    fn capacity(&self) -> F {
        self.capacity
    }
}

///
/// Build a FlowNetwork with `node_count` nodes from `(v, w, capacity)` triples.
///
/// Fails with `NodeOutOfRange` or `NegativeCapacity` before creating any edge.
///
pub fn flow_network_from_edges<F: FlowRate>(
    node_count: usize,
    edges: &[(usize, usize, F)],
) -> Result<FlowNetwork<F>> {
    for &(v, w, capacity) in edges {
        check_edge(node_count, v, w, capacity)?;
    }

    let mut graph: FlowNetwork<F> = FlowNetwork::with_capacity(node_count, edges.len());
    for _ in 0..node_count {
        graph.add_node(());
    }
    for &(v, w, capacity) in edges {
        graph.add_edge(NodeIndex::new(v), NodeIndex::new(w), CapacityEdge::new(capacity));
    }
    Ok(graph)
}

pub(crate) fn check_edge<F: FlowRate>(node_count: usize, v: usize, w: usize, capacity: F) -> Result<()> {
    for node in [v, w] {
        if node >= node_count {
            return Err(MaxFlowError::NodeOutOfRange { node, node_count });
        }
    }
    if capacity.is_negative() {
        return Err(MaxFlowError::NegativeCapacity {
            from: v,
            to: w,
            capacity: capacity.to_i128(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_builds_nodes_and_edges() {
        let g = flow_network_from_edges(4, &[(0, 1, 3u32), (1, 3, 2), (3, 1, 5)]).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        let e = g.find_edge(NodeIndex::new(3), NodeIndex::new(1)).unwrap();
        assert_eq!(g[e].capacity(), 5);
        assert!(g.find_edge(NodeIndex::new(1), NodeIndex::new(0)).is_none());
    }

    #[test]
    fn from_edges_rejects_invalid_input() {
        let r = flow_network_from_edges(3, &[(0, 1, 1u32), (1, 3, 1)]);
        assert!(matches!(
            r,
            Err(MaxFlowError::NodeOutOfRange {
                node: 3,
                node_count: 3
            })
        ));

        let r = flow_network_from_edges(3, &[(0, 1, 1i64), (1, 2, -4)]);
        match r {
            Err(MaxFlowError::NegativeCapacity { from, to, capacity }) => {
                assert_eq!((from, to), (1, 2));
                assert_eq!(capacity, -4);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn zero_capacity_edge_is_kept() {
        let g = flow_network_from_edges(2, &[(0, 1, 0u32)]).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(format!("{}", g[g.edge_indices().next().unwrap()]), "[0]");
    }
}

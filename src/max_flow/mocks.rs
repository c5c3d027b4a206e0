use super::base::{CapacityEdge, FlowNetwork};
use petgraph::graph::{Graph, NodeIndex};

/// Directed edges of the 7-node reference network `(v, w, capacity)`.
pub const REFERENCE_EDGES: [(usize, usize, u32); 11] = [
    (0, 1, 3),
    (0, 3, 3),
    (1, 2, 4),
    (2, 0, 3),
    (2, 3, 1),
    (2, 4, 2),
    (3, 4, 2),
    (3, 5, 6),
    (4, 1, 1),
    (4, 6, 1),
    (5, 6, 9),
];

fn mock_network(node_count: usize, edges: &[(usize, usize, u32)]) -> FlowNetwork<u32> {
    let mut graph: FlowNetwork<u32> = Graph::new();
    let nodes: Vec<NodeIndex> = (0..node_count).map(|_| graph.add_node(())).collect();
    for &(v, w, capacity) in edges {
        graph.add_edge(nodes[v], nodes[w], CapacityEdge::new(capacity));
    }
    graph
}

// mock graph generation functions

/// 0 -> 1 -> 2 -> 3 with capacity 5, 5, 3
pub fn mock_flow_network_line() -> FlowNetwork<u32> {
    mock_network(4, &[(0, 1, 5), (1, 2, 5), (2, 3, 3)])
}

/// The 7-node reference network. max flow from 0 to 6 is 5.
pub fn mock_reference_network() -> FlowNetwork<u32> {
    mock_network(7, &REFERENCE_EDGES)
}

/// The reference network whose every edge is paired with a reverse edge
/// of the same capacity. max flow from 0 to 6 is 7.
pub fn mock_reference_network_symmetric() -> FlowNetwork<u32> {
    let edges: Vec<_> = REFERENCE_EDGES
        .iter()
        .flat_map(|&(v, w, c)| [(v, w, c), (w, v, c)])
        .collect();
    mock_network(7, &edges)
}

/// single edge 0 -> 1 of capacity 10. max flow is 10.
pub fn mock_single_edge() -> FlowNetwork<u32> {
    mock_network(2, &[(0, 1, 10)])
}

/// {0, 1} and {2, 3} are not connected. max flow from 0 to 3 is 0.
pub fn mock_disconnected() -> FlowNetwork<u32> {
    mock_network(4, &[(0, 1, 4), (1, 0, 2), (2, 3, 7)])
}

/// mock network cited from Introduction to Algorithms (CLRS) Figure 26.1.
/// max flow from 0 to 5 is 23.
pub fn mock_clrs_network() -> FlowNetwork<u32> {
    mock_network(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_sizes() {
        assert_eq!(mock_reference_network().edge_count(), 11);
        assert_eq!(mock_reference_network_symmetric().edge_count(), 22);
        assert_eq!(mock_reference_network_symmetric().node_count(), 7);
        assert_eq!(mock_clrs_network().node_count(), 6);
    }
}

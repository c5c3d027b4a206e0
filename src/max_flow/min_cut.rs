//!
//! Minimum s-t cut read off the residual graph after Edmonds-Karp has terminated.
//!
use super::residue::ResidualGraph;
use super::{FlowEdge, FlowRate};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// s-t cut of a FlowNetwork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut<F: FlowRate> {
    /// nodes reachable from the source in the final residual graph, sorted
    pub source_side: Vec<NodeIndex>,
    /// edges going from the source side to the sink side
    pub edges: Vec<EdgeIndex>,
    /// sum of capacities of `edges`
    pub capacity: F,
}

impl<F: FlowRate> MinCut<F> {
    pub fn contains(&self, v: NodeIndex) -> bool {
        self.source_side.binary_search(&v).is_ok()
    }
}

///
/// Cut induced by the set of nodes reachable from `source` in `rg`.
///
/// If `rg` has no augmenting path left, the capacity equals the max flow value.
///
pub fn min_cut<F, N, E>(rg: &ResidualGraph<F>, graph: &DiGraph<N, E>, source: usize) -> MinCut<F>
where
    F: FlowRate,
    E: FlowEdge<Rate = F>,
{
    let reachable = rg.reachable_from(source);
    let is_source_side = |v: NodeIndex| reachable.get(v.index()).copied().unwrap_or(false);

    let source_side: Vec<NodeIndex> = graph.node_indices().filter(|&v| is_source_side(v)).collect();
    let edges: Vec<EdgeIndex> = graph
        .edge_references()
        .filter(|er| is_source_side(er.source()) && !is_source_side(er.target()))
        .map(|er| er.id())
        .collect();
    let capacity: F = edges.iter().map(|&e| graph[e].capacity()).sum();

    MinCut {
        source_side,
        edges,
        capacity,
    }
}

#[cfg(test)]
mod tests {
    use super::super::augment::EdmondsKarp;
    use super::super::mocks::mock_clrs_network;
    use super::*;

    #[test]
    fn min_cut_of_clrs_network() {
        let g = mock_clrs_network();
        let mut rg = ResidualGraph::from_network(&g).unwrap();
        let value = EdmondsKarp::new(&mut rg).run(0, 5).unwrap();
        assert_eq!(value, 23);

        let cut = min_cut(&rg, &g, 0);
        assert_eq!(cut.capacity, 23);
        let side: Vec<usize> = cut.source_side.iter().map(|v| v.index()).collect();
        assert_eq!(side, vec![0, 1, 2, 4]);
        assert!(cut.contains(NodeIndex::new(4)));
        assert!(!cut.contains(NodeIndex::new(5)));
        // 1 -> 3 (12), 4 -> 3 (7), 4 -> 5 (4)
        assert_eq!(cut.edges.len(), 3);
    }

    #[test]
    fn min_cut_before_any_flow_is_everything_reachable() {
        let g = mock_clrs_network();
        let rg = ResidualGraph::from_network(&g).unwrap();
        let cut = min_cut(&rg, &g, 0);
        assert_eq!(cut.source_side.len(), 6);
        assert!(cut.edges.is_empty());
        assert_eq!(cut.capacity, 0);
    }
}

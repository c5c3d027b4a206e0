pub mod augment;
pub mod base;
pub mod error;
pub mod flow;
pub mod flow_edge;
pub mod flow_rate;
pub mod io;
pub mod min_cut;
pub mod mocks;
pub mod residue;
pub mod utils;

pub use augment::{Augmentation, AugmentingPath, EdmondsKarp};
pub use base::{flow_network_from_edges, CapacityEdge, FlowNetwork};
pub use error::{MaxFlowError, Result};
pub use flow::Flow;
pub use flow_edge::FlowEdge;
pub use flow_rate::FlowRate;
pub use min_cut::MinCut;
pub use residue::ResidualGraph;

use min_cut::min_cut;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Result of the max flow computation
#[derive(Debug, Clone)]
pub struct MaxFlow<F: FlowRate> {
    /// total flow from source to sink
    pub value: F,
    /// flow on each edge of the network
    pub flow: Flow<F>,
    /// minimum cut certifying `value`
    pub min_cut: MinCut<F>,
    /// augmenting paths in the order they were applied
    pub augmentations: Vec<Augmentation<F>>,
}

//
// public functions
//

///
/// Find maximum flow from `source` to `sink` on the FlowNetwork
///
/// The network is not modified, so calling twice returns the same result.
///
pub fn max_flow<N, E>(
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Result<MaxFlow<E::Rate>>
where
    E: FlowEdge,
{
    let (s, t) = (source.index(), sink.index());
    let mut rg = ResidualGraph::from_network(graph)?;

    let mut ek = EdmondsKarp::new(&mut rg);
    let value = ek.run(s, t)?;
    let augmentations = ek.into_history();

    Ok(MaxFlow {
        value,
        flow: assign_flow(graph, &rg),
        min_cut: min_cut(&rg, graph, s),
        augmentations,
    })
}

///
/// Find the value of maximum flow from `source` to `sink`
///
pub fn max_flow_value<N, E>(graph: &DiGraph<N, E>, source: NodeIndex, sink: NodeIndex) -> Result<E::Rate>
where
    E: FlowEdge,
{
    let mut rg = ResidualGraph::from_network(graph)?;
    EdmondsKarp::new(&mut rg).run(source.index(), sink.index())
}

//
// internal functions
//

///
/// Distribute the flow of each node pair in the residual graph
/// over the (possibly parallel) edges of the network, in edge index order.
///
fn assign_flow<F, N, E>(graph: &DiGraph<N, E>, rg: &ResidualGraph<F>) -> Flow<F>
where
    F: FlowRate,
    E: FlowEdge<Rate = F>,
{
    let mut remaining: HashMap<(usize, usize), F> = HashMap::new();
    let mut flow = Flow::empty();
    for er in graph.edge_references() {
        let (v, w) = (er.source().index(), er.target().index());
        let left = remaining.entry((v, w)).or_insert_with(|| rg.flow(v, w));
        let f = std::cmp::min(*left, er.weight().capacity());
        *left -= f;
        flow.set(er.id(), f);
    }
    flow
}

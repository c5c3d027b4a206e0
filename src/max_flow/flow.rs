//! Flow definitions
//! - Flow
//! - validators of a flow on FlowNetwork
use super::{FlowEdge, FlowRate};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef; // for EdgeReference.id()
use petgraph::Direction;
use std::collections::HashMap;

/// Flow definitions
///
/// Flow f is a mapping of F f(e) to each edge e
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Flow<F: FlowRate>(HashMap<EdgeIndex, F>);

impl<F: FlowRate> Flow<F> {
    pub fn empty() -> Flow<F> {
        Flow(HashMap::new())
    }
    pub fn zero<N, E>(graph: &DiGraph<N, E>) -> Flow<F> {
        Flow(graph.edge_indices().map(|e| (e, F::zero())).collect())
    }
    pub fn from_vec(vec: &[(EdgeIndex, F)]) -> Flow<F> {
        Flow(vec.iter().copied().collect())
    }
    pub fn get(&self, e: EdgeIndex) -> Option<F> {
        self.0.get(&e).copied()
    }
    pub fn set(&mut self, e: EdgeIndex, v: F) {
        self.0.insert(e, v);
    }
    pub fn has(&self, e: EdgeIndex) -> bool {
        self.0.contains_key(&e)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<F: FlowRate> std::ops::Index<EdgeIndex> for Flow<F> {
    type Output = F;
    fn index(&self, e: EdgeIndex) -> &F {
        &self.0[&e]
    }
}

///
/// Check if the flow is a valid s-t flow, i.e. it satisfies
/// - flows of all edges are defined
/// - capacity constraint
/// - flow constraint on all nodes except source and sink
///
pub fn is_valid_flow<F, N, E>(
    flow: &Flow<F>,
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> bool
where
    F: FlowRate,
    E: FlowEdge<Rate = F>,
{
    is_defined_for_all_edges(flow, graph)
        && is_in_capacity(flow, graph)
        && is_satisfying_flow_constraint(flow, graph, source, sink)
}

///
/// Check if the flow contains all edges
///
pub fn is_defined_for_all_edges<F: FlowRate, N, E>(flow: &Flow<F>, graph: &DiGraph<N, E>) -> bool {
    graph.edge_indices().all(|e| flow.has(e))
}

///
/// For each edge, the flow must satisfy `0 <= flow <= capacity`.
/// This function checks it
///
pub fn is_in_capacity<F, N, E>(flow: &Flow<F>, graph: &DiGraph<N, E>) -> bool
where
    F: FlowRate,
    E: FlowEdge<Rate = F>,
{
    graph.edge_references().all(|er| match flow.get(er.id()) {
        Some(f) => !f.is_negative() && f <= er.weight().capacity(),
        None => false,
    })
}

///
/// For each node except source and sink,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_satisfying_flow_constraint<F: FlowRate, N, E>(
    flow: &Flow<F>,
    graph: &DiGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> bool {
    graph
        .node_indices()
        .filter(|&v| v != source && v != sink)
        .all(|v| {
            let (out_flow, in_flow) = out_in_flow(flow, graph, v);
            in_flow == out_flow
        })
}

///
/// Value of the flow, i.e. (out-going flow) minus (in-coming flow) of the source.
///
/// Returns None if more flow is entering the source than leaving it.
///
pub fn flow_value<F: FlowRate, N, E>(
    flow: &Flow<F>,
    graph: &DiGraph<N, E>,
    source: NodeIndex,
) -> Option<F> {
    let (out_flow, in_flow) = out_in_flow(flow, graph, source);
    if out_flow >= in_flow {
        Some(out_flow - in_flow)
    } else {
        None
    }
}

fn out_in_flow<F: FlowRate, N, E>(flow: &Flow<F>, graph: &DiGraph<N, E>, v: NodeIndex) -> (F, F) {
    // self loops are counted on both sides
    let sum = |dir| -> F {
        graph
            .edges_directed(v, dir)
            .map(|er| flow.get(er.id()).unwrap_or_else(F::zero))
            .sum()
    };
    (sum(Direction::Outgoing), sum(Direction::Incoming))
}

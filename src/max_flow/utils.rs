//!
//! utils
//!
use super::flow::Flow;
use super::{FlowEdge, FlowRate};
use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;

///
/// Graphviz dot of the network, whose edges are labeled `[capacity]`.
///
pub fn draw<N, E>(graph: &DiGraph<N, E>) -> String
where
    E: FlowEdge,
{
    let labeled = graph.map(|v, _| v.index(), |_, ew| format!("[{}]", ew.capacity()));
    format!("{}", Dot::with_config(&labeled, &[Config::NodeIndexLabel]))
}

///
/// Graphviz dot of the network, whose edges are labeled `flow/capacity`.
///
pub fn draw_with_flow<F, N, E>(graph: &DiGraph<N, E>, flow: &Flow<F>) -> String
where
    F: FlowRate,
    E: FlowEdge<Rate = F>,
{
    let labeled = graph.map(
        |v, _| v.index(),
        |e, ew| {
            let f = flow.get(e).unwrap_or_else(F::zero);
            format!("{}/{}", f, ew.capacity())
        },
    );
    format!("{}", Dot::with_config(&labeled, &[Config::NodeIndexLabel]))
}

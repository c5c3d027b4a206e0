//! Residual graph related definitions
//! - ResidueArc
//! - ResidualGraph
//!
//! The residual capacity is never stored. It is derived from capacity and flow
//! of both directions of a node pair:
//!
//! ```text
//! residual(v, w) = (capacity(v, w) - flow(v, w)) + flow(w, v)
//! ```
//!
//! where a missing direction has capacity 0 and flow 0. The sum is clamped at
//! `F::max_value()`; antiparallel edges of large capacity can exceed it.
//!
use super::base::check_edge;
use super::error::{MaxFlowError, Result};
use super::{FlowEdge, FlowRate};
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, VecDeque};

/// Capacity and flow of the direction `v -> w` of a node pair.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ResidueArc<F: FlowRate> {
    /// capacity of `v -> w`, or None if there is no such edge
    pub capacity: Option<F>,
    /// current flow along `v -> w`
    pub flow: F,
}

/// Residual graph model.
///
/// `arcs[v]` has an entry `w` iff `v -> w` or `w -> v` is an edge, so both
/// directions of an edge can be scanned from either endpoint in increasing node index.
#[derive(Debug, Clone)]
pub struct ResidualGraph<F: FlowRate> {
    arcs: Vec<BTreeMap<usize, ResidueArc<F>>>,
}

impl<F: FlowRate> ResidualGraph<F> {
    ///
    /// Create a residual graph of `node_count` nodes from `(v, w, capacity)` triples
    /// with zero flow.
    ///
    /// Parallel edges are merged by summing their capacities. `Overflow` if the
    /// sum does not fit in `F`.
    ///
    pub fn new(node_count: usize, edges: &[(usize, usize, F)]) -> Result<ResidualGraph<F>> {
        for &(v, w, capacity) in edges {
            check_edge(node_count, v, w, capacity)?;
        }

        let mut arcs = vec![BTreeMap::new(); node_count];
        for &(v, w, capacity) in edges {
            let arc: &mut ResidueArc<F> = arcs[v].entry(w).or_default();
            let merged = arc
                .capacity
                .unwrap_or_else(F::zero)
                .checked_add(capacity)
                .ok_or(MaxFlowError::Overflow)?;
            arc.capacity = Some(merged);
            arcs[w].entry(v).or_default();
        }
        Ok(ResidualGraph { arcs })
    }

    ///
    /// Create a residual graph of the flow network with zero flow.
    ///
    pub fn from_network<N, E>(graph: &DiGraph<N, E>) -> Result<ResidualGraph<F>>
    where
        E: FlowEdge<Rate = F>,
    {
        let edges: Vec<(usize, usize, F)> = graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), e.weight().capacity()))
            .collect();
        ResidualGraph::new(graph.node_count(), &edges)
    }

    pub fn node_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn check_node(&self, node: usize) -> Result<()> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(MaxFlowError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    fn arc(&self, v: usize, w: usize) -> Option<&ResidueArc<F>> {
        self.arcs.get(v).and_then(|m| m.get(&w))
    }

    /// Capacity of the edge `v -> w`, None if there is no such edge.
    pub fn capacity(&self, v: usize, w: usize) -> Option<F> {
        self.arc(v, w).and_then(|arc| arc.capacity)
    }

    /// Current flow along the edge `v -> w`. Zero if there is no such edge.
    pub fn flow(&self, v: usize, w: usize) -> F {
        self.arc(v, w).map_or_else(F::zero, |arc| arc.flow)
    }

    ///
    /// Amount of flow that can still be moved from `v` to `w`.
    ///
    /// Zero if neither `v -> w` nor `w -> v` is an edge, and always zero for a self loop.
    /// Clamped at `F::max_value()`, which never admits more than the true residual.
    ///
    pub fn residual_capacity(&self, v: usize, w: usize) -> F {
        if v == w {
            return F::zero();
        }
        match self.arc(v, w) {
            Some(arc) => {
                (arc.capacity.unwrap_or_else(F::zero) - arc.flow).saturating_add(self.flow(w, v))
            }
            None => F::zero(),
        }
    }

    ///
    /// Nodes adjacent to `v` in either direction, in increasing node index.
    ///
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.arcs.get(v).into_iter().flat_map(|m| m.keys().copied())
    }

    ///
    /// Move `amount` of flow from `v` to `w`.
    ///
    /// Flow on `w -> v` is cancelled first and the rest is added to `v -> w`,
    /// so `0 <= flow <= capacity` holds on both directions afterwards.
    /// Pushing more than `residual_capacity(v, w)` is rejected with `ExcessFlow`
    /// and leaves the graph untouched.
    ///
    pub fn push_flow(&mut self, v: usize, w: usize, amount: F) -> Result<()> {
        self.check_node(v)?;
        self.check_node(w)?;
        let residual = self.residual_capacity(v, w);
        if amount.is_negative() || amount > residual {
            return Err(MaxFlowError::ExcessFlow {
                from: v,
                to: w,
                amount: amount.to_i128(),
                residual: residual.to_i128(),
            });
        }
        if amount == F::zero() {
            return Ok(());
        }

        let cancel = std::cmp::min(self.flow(w, v), amount);
        if cancel > F::zero() {
            if let Some(back) = self.arcs[w].get_mut(&v) {
                back.flow -= cancel;
            }
        }
        let rest = amount - cancel;
        if rest > F::zero() {
            if let Some(forward) = self.arcs[v].get_mut(&w) {
                forward.flow += rest;
            }
        }
        Ok(())
    }

    ///
    /// Nodes reachable from `source` through edges of positive residual capacity.
    ///
    /// `reachable[v]` is true if v is reachable. source itself is always reachable.
    ///
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut reachable = vec![false; self.node_count()];
        if source >= self.node_count() {
            return reachable;
        }
        reachable[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            for w in self.neighbors(v) {
                if !reachable[w] && self.residual_capacity(v, w) > F::zero() {
                    reachable[w] = true;
                    queue.push_back(w);
                }
            }
        }
        reachable
    }

    ///
    /// List up all `(v, w, flow)` of edges carrying positive flow.
    ///
    pub fn flows(&self) -> Vec<(usize, usize, F)> {
        self.arcs
            .iter()
            .enumerate()
            .flat_map(|(v, m)| {
                m.iter()
                    .filter(|(_, arc)| arc.flow > F::zero())
                    .map(move |(&w, arc)| (v, w, arc.flow))
            })
            .collect()
    }

    /// Total flow `(leaving, entering)` the node `v`.
    pub fn out_in_flow(&self, v: usize) -> (F, F) {
        let out_flow: F = self.neighbors(v).map(|w| self.flow(v, w)).sum();
        let in_flow: F = self.neighbors(v).map(|w| self.flow(w, v)).sum();
        (out_flow, in_flow)
    }
}

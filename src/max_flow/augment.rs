//! Augmenting path search and the Edmonds-Karp main loop
//! - AugmentingPath
//! - Augmentation
//! - EdmondsKarp
//!
use super::error::{MaxFlowError, Result};
use super::residue::ResidualGraph;
use super::FlowRate;
use itertools::Itertools; // for tuple_windows
use log::{debug, info, trace};
use std::collections::VecDeque;

/// Shortest source-to-sink path with positive residual capacity on every edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath<F: FlowRate> {
    /// nodes from source to sink
    pub nodes: Vec<usize>,
    /// minimum residual capacity along the path
    pub bottleneck: F,
}

/// Record of a single augmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation<F: FlowRate> {
    pub path: Vec<usize>,
    pub bottleneck: F,
    /// total flow after this augmentation
    pub total: F,
}

/// Max-flow algorithm of Edmonds and Karp.
///
/// It borrows the residual graph mutably and is the only writer of its flow
/// while it is alive.
pub struct EdmondsKarp<'a, F: FlowRate> {
    residue: &'a mut ResidualGraph<F>,
    value: F,
    history: Vec<Augmentation<F>>,
}

impl<'a, F: FlowRate> EdmondsKarp<'a, F> {
    pub fn new(residue: &'a mut ResidualGraph<F>) -> Self {
        EdmondsKarp {
            residue,
            value: F::zero(),
            history: Vec::new(),
        }
    }

    pub fn residual_graph(&self) -> &ResidualGraph<F> {
        &*self.residue
    }

    /// Total flow pushed so far.
    pub fn value(&self) -> F {
        self.value
    }

    pub fn history(&self) -> &[Augmentation<F>] {
        &self.history
    }

    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    pub fn into_history(self) -> Vec<Augmentation<F>> {
        self.history
    }

    ///
    /// Find the augmenting path with the fewest edges by BFS.
    ///
    /// Neighbors are scanned in increasing node index, so ties are broken towards
    /// smaller indices. The search stops as soon as `sink` is dequeued.
    /// Returns None if sink is unreachable, source equals sink, or either node
    /// is out of range.
    ///
    pub fn find_augmenting_path(&self, source: usize, sink: usize) -> Option<AugmentingPath<F>> {
        let n = self.residue.node_count();
        if source >= n || sink >= n || source == sink {
            return None;
        }

        let mut parents: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        let mut reached = false;
        while let Some(v) = queue.pop_front() {
            if v == sink {
                reached = true;
                break;
            }
            for w in self.residue.neighbors(v) {
                if !visited[w] && self.residue.residual_capacity(v, w) > F::zero() {
                    trace!("bfs {} -> {}", v, w);
                    visited[w] = true;
                    parents[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }
        if !reached {
            return None;
        }

        // retrace the parents from sink back to source
        let mut nodes = vec![sink];
        let mut v = sink;
        while let Some(parent) = parents[v] {
            nodes.push(parent);
            v = parent;
        }
        nodes.reverse();

        let bottleneck = nodes
            .iter()
            .tuple_windows()
            .map(|(&v, &w)| self.residue.residual_capacity(v, w))
            .min()?;

        Some(AugmentingPath { nodes, bottleneck })
    }

    ///
    /// Find one augmenting path and push its bottleneck along it.
    ///
    /// Returns None when no augmenting path remains.
    ///
    pub fn augment(&mut self, source: usize, sink: usize) -> Result<Option<Augmentation<F>>> {
        self.residue.check_node(source)?;
        self.residue.check_node(sink)?;

        let path = match self.find_augmenting_path(source, sink) {
            Some(path) => path,
            None => return Ok(None),
        };

        // the total is checked before pushing so an overflow leaves the flow untouched
        let total = self
            .value
            .checked_add(path.bottleneck)
            .ok_or(MaxFlowError::Overflow)?;
        for (&v, &w) in path.nodes.iter().tuple_windows() {
            self.residue.push_flow(v, w, path.bottleneck)?;
        }
        self.value = total;

        let augmentation = Augmentation {
            path: path.nodes,
            bottleneck: path.bottleneck,
            total: self.value,
        };
        debug!(
            "augment #{} path={:?} bottleneck={} total={}",
            self.history.len() + 1,
            augmentation.path,
            augmentation.bottleneck,
            augmentation.total
        );
        self.history.push(augmentation.clone());
        Ok(Some(augmentation))
    }

    ///
    /// Augment repeatedly until no augmenting path remains,
    /// and return the total flow.
    ///
    pub fn run(&mut self, source: usize, sink: usize) -> Result<F> {
        self.residue.check_node(source)?;
        self.residue.check_node(sink)?;
        if source == sink {
            info!("source and sink are the same node {}", source);
            return Ok(self.value);
        }

        while self.augment(source, sink)?.is_some() {}

        info!(
            "max flow from {} to {} is {} after {} augmentations",
            source,
            sink,
            self.value,
            self.iterations()
        );
        Ok(self.value)
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> ResidualGraph<u32> {
        //     1
        //   /   \
        //  0     3
        //   \   /
        //     2
        ResidualGraph::new(4, &[(0, 1, 2), (0, 2, 3), (1, 3, 3), (2, 3, 2), (1, 2, 1)]).unwrap()
    }

    #[test]
    fn bfs_finds_shortest_path_with_index_tie_break() {
        let mut rg = diamond();
        let ek = EdmondsKarp::new(&mut rg);
        let path = ek.find_augmenting_path(0, 3).unwrap();
        assert_eq!(path.nodes, vec![0, 1, 3]);
        assert_eq!(path.bottleneck, 2);
    }

    #[test]
    fn bfs_prefers_fewer_edges_over_smaller_index() {
        // 0 -> 1 -> 2 -> 4 and 0 -> 3 -> 4
        let mut rg =
            ResidualGraph::new(5, &[(0, 1, 5u32), (1, 2, 5), (2, 4, 5), (0, 3, 1), (3, 4, 1)])
                .unwrap();
        let ek = EdmondsKarp::new(&mut rg);
        let path = ek.find_augmenting_path(0, 4).unwrap();
        assert_eq!(path.nodes, vec![0, 3, 4]);
        assert_eq!(path.bottleneck, 1);
    }

    #[test]
    fn bfs_returns_none() {
        let mut rg = ResidualGraph::new(3, &[(0, 1, 1u32), (2, 1, 1)]).unwrap();
        let ek = EdmondsKarp::new(&mut rg);
        assert_eq!(ek.find_augmenting_path(0, 2), None);
        assert_eq!(ek.find_augmenting_path(0, 0), None);
        assert_eq!(ek.find_augmenting_path(0, 5), None);
    }

    #[test]
    fn augment_step_by_step() {
        let mut rg = diamond();
        let mut ek = EdmondsKarp::new(&mut rg);
        let a1 = ek.augment(0, 3).unwrap().unwrap();
        assert_eq!(a1.path, vec![0, 1, 3]);
        assert_eq!((a1.bottleneck, a1.total), (2, 2));
        let a2 = ek.augment(0, 3).unwrap().unwrap();
        assert_eq!(a2.path, vec![0, 2, 3]);
        assert_eq!((a2.bottleneck, a2.total), (2, 4));
        assert_eq!(ek.augment(0, 3).unwrap(), None);
        assert_eq!(ek.value(), 4);
        assert_eq!(ek.iterations(), 2);
    }

    #[test]
    fn run_uses_reverse_residual() {
        // the first shortest path 0 -> 1 -> 4 -> 5 has to be undone on 1 -> 4
        let mut rg = ResidualGraph::new(
            7,
            &[
                (0, 1, 1u32),
                (1, 4, 1),
                (4, 5, 1),
                (0, 2, 1),
                (2, 4, 1),
                (1, 3, 1),
                (3, 6, 1),
                (6, 5, 1),
            ],
        )
        .unwrap();
        let mut ek = EdmondsKarp::new(&mut rg);
        assert_eq!(ek.run(0, 5).unwrap(), 2);
        assert_eq!(ek.history()[0].path, vec![0, 1, 4, 5]);
        assert_eq!(ek.history()[1].path, vec![0, 2, 4, 1, 3, 6, 5]);
        let rg = ek.residual_graph();
        assert_eq!(rg.flow(1, 4), 0);
        assert_eq!(rg.flow(4, 1), 0);
        assert_eq!(rg.flow(0, 1), 1);
        assert_eq!(rg.flow(2, 4), 1);
    }

    #[test]
    fn run_source_equals_sink() {
        let mut rg = diamond();
        let mut ek = EdmondsKarp::new(&mut rg);
        assert_eq!(ek.run(2, 2).unwrap(), 0);
        assert!(ek.history().is_empty());
        assert!(rg.flows().is_empty());
    }

    #[test]
    fn run_rejects_out_of_range_nodes() {
        let mut rg = diamond();
        let mut ek = EdmondsKarp::new(&mut rg);
        assert!(matches!(
            ek.run(0, 4),
            Err(MaxFlowError::NodeOutOfRange {
                node: 4,
                node_count: 4
            })
        ));
        assert!(matches!(ek.run(7, 0), Err(MaxFlowError::NodeOutOfRange { node: 7, .. })));
        assert!(rg.flows().is_empty());
    }

    #[test]
    fn run_detects_overflow() {
        let mut rg =
            ResidualGraph::new(4, &[(0, 1, u32::MAX), (1, 3, u32::MAX), (0, 2, 1), (2, 3, 1)])
                .unwrap();
        let mut ek = EdmondsKarp::new(&mut rg);
        assert!(matches!(ek.run(0, 3), Err(MaxFlowError::Overflow)));

        // the failed augmentation along 0 -> 2 -> 3 pushed nothing
        assert_eq!(ek.value(), u32::MAX);
        assert_eq!(ek.iterations(), 1);
        let rg = ek.residual_graph();
        assert_eq!(rg.flow(0, 1), u32::MAX);
        assert_eq!(rg.flow(1, 3), u32::MAX);
        assert_eq!(rg.flow(0, 2), 0);
        assert_eq!(rg.flow(2, 3), 0);
    }
}

//!
//! maxflow solves [maximum flow problem](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! of integer capacity by the Edmonds-Karp algorithm
//! (Ford-Fulkerson with shortest augmenting paths found by BFS).
//!
//! ```
//! use maxflow::max_flow::{flow_network_from_edges, max_flow};
//! use petgraph::graph::NodeIndex;
//!
//! let g = flow_network_from_edges(4, &[(0, 1, 3u32), (0, 2, 2), (1, 3, 2), (2, 3, 3), (1, 2, 1)]).unwrap();
//! let mf = max_flow(&g, NodeIndex::new(0), NodeIndex::new(3)).unwrap();
//! assert_eq!(mf.value, 5);
//! assert_eq!(mf.min_cut.capacity, 5);
//! ```
//!
pub mod max_flow;

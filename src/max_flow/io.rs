//!
//! Loading a flow network from JSON
//!
//! ```text
//! {
//!   "node_count": 4,
//!   "edges": [[0, 1, 3], [1, 3, 2], [0, 2, 1], [2, 3, 4]],
//!   "source": 0,
//!   "sink": 3
//! }
//! ```
//!
//! `source` and `sink` are optional.
//!
use super::base::{flow_network_from_edges, FlowNetwork};
use super::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Capacities are signed so that negative values in the input are reported
/// as `NegativeCapacity` instead of a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphSpec {
    pub node_count: usize,
    pub edges: Vec<(usize, usize, i64)>,
    #[serde(default)]
    pub source: Option<usize>,
    #[serde(default)]
    pub sink: Option<usize>,
}

impl GraphSpec {
    pub fn from_json(json: &str) -> Result<GraphSpec> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<GraphSpec> {
        let json = fs::read_to_string(path)?;
        GraphSpec::from_json(&json)
    }

    pub fn to_network(&self) -> Result<FlowNetwork<i64>> {
        flow_network_from_edges(self.node_count, &self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::super::error::MaxFlowError;
    use super::*;

    #[test]
    fn parse_graph_spec() {
        let spec = GraphSpec::from_json(
            r#"{"node_count": 3, "edges": [[0, 1, 3], [1, 2, 2]], "source": 0, "sink": 2}"#,
        )
        .unwrap();
        assert_eq!(spec.node_count, 3);
        assert_eq!(spec.edges, vec![(0, 1, 3), (1, 2, 2)]);
        assert_eq!((spec.source, spec.sink), (Some(0), Some(2)));
        let g = spec.to_network().unwrap();
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn source_and_sink_are_optional() {
        let spec = GraphSpec::from_json(r#"{"node_count": 2, "edges": []}"#).unwrap();
        assert_eq!(spec.source, None);
        assert_eq!(spec.sink, None);
        assert_eq!(spec.to_network().unwrap().node_count(), 2);
    }

    #[test]
    fn invalid_graph_spec() {
        assert!(matches!(
            GraphSpec::from_json(r#"{"node_count": 2, "edges": [[0, 1]]}"#),
            Err(MaxFlowError::Json(_))
        ));
        let spec = GraphSpec::from_json(r#"{"node_count": 2, "edges": [[0, 1, -1]]}"#).unwrap();
        assert!(matches!(
            spec.to_network(),
            Err(MaxFlowError::NegativeCapacity { from: 0, to: 1, .. })
        ));
        assert!(matches!(
            GraphSpec::from_path("/nonexistent/graph.json"),
            Err(MaxFlowError::Io(_))
        ));
    }
}

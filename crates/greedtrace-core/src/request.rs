//! Request validation and run orchestration
//!
//! Turns a raw algorithm selector and edge tokens into a typed
//! [`TraceRequest`], failing before any record is emitted. A valid request
//! then runs end to end: `init`, engine steps, `final`, `end`.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::debug;

use crate::bail_invalid_number;
use crate::config::TraceConfig;
use crate::error::{GreedError, Result};
use crate::graph::{
    minimum_spanning_tree, shortest_path, Edge, Graph, NodeId, ShortestPath, SpanningTree, Weight,
};
use crate::trace::{TraceRecord, TraceSink};
use crate::trace_time;

/// Token that alone selects the default graph
const DEFAULT_GRAPH_TOKEN: &str = "0";

/// Algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    Prims,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Prims => "prims",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = GreedError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "prims" => Ok(Algorithm::Prims),
            other => Err(GreedError::unknown_algorithm(other)),
        }
    }
}

/// Parse a flat `u v w u v w ...` token list into edges.
///
/// Returns `Ok(None)` when the tokens select the default graph: no tokens
/// at all, or the single token `0`.
pub fn parse_edge_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Option<Vec<Edge>>> {
    if tokens.is_empty() || (tokens.len() == 1 && tokens[0].as_ref() == DEFAULT_GRAPH_TOKEN) {
        return Ok(None);
    }

    if tokens.len() % 3 != 0 {
        return Err(GreedError::MalformedRequest {
            count: tokens.len(),
        });
    }

    let mut edges = Vec::with_capacity(tokens.len() / 3);
    for triple in tokens.chunks_exact(3) {
        edges.push(Edge::new(
            parse_number(triple[0].as_ref())?,
            parse_number(triple[1].as_ref())?,
            parse_number(triple[2].as_ref())?,
        ));
    }
    Ok(Some(edges))
}

fn parse_number(token: &str) -> Result<i64> {
    match token.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) => bail_invalid_number!(token),
    }
}

/// Node choices supplied on the command line, overriding config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeOverrides {
    pub source: Option<NodeId>,
    pub destination: Option<NodeId>,
    pub start: Option<NodeId>,
}

/// A validated algorithm request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRequest {
    pub algorithm: Algorithm,
    pub source: NodeId,
    pub destination: NodeId,
    pub start: NodeId,
    /// Supplied edges; `None` selects the default graph
    pub edges: Option<Vec<Edge>>,
}

impl TraceRequest {
    /// Validate a raw request. The selector is checked before the edge
    /// tokens, and both before any graph is built.
    pub fn parse<S: AsRef<str>>(
        selector: &str,
        tokens: &[S],
        config: &TraceConfig,
        overrides: NodeOverrides,
    ) -> Result<Self> {
        let algorithm = selector.parse::<Algorithm>()?;
        let edges = parse_edge_tokens(tokens)?;

        Ok(Self {
            algorithm,
            source: overrides.source.unwrap_or(config.dijkstra.source),
            destination: overrides.destination.unwrap_or(config.dijkstra.destination),
            start: overrides.start.unwrap_or(config.prims.start),
            edges,
        })
    }

    pub fn build_graph(&self) -> Graph {
        match &self.edges {
            Some(edges) => Graph::from_edges(edges.iter().copied()),
            None => Graph::default_graph(),
        }
    }
}

/// Result of a completed run
#[derive(Debug)]
pub enum RunOutcome {
    Path(ShortestPath),
    Tree(SpanningTree),
}

impl RunOutcome {
    /// Path cost or tree weight; `None` for an unreachable destination
    pub fn cost(&self) -> Option<Weight> {
        match self {
            RunOutcome::Path(result) => result.cost,
            RunOutcome::Tree(tree) => Some(tree.cost),
        }
    }
}

/// Run a validated request against `sink`, bracketed by `init` and `end`.
///
/// The first failed emission aborts the run and is returned.
#[tracing::instrument(skip(request, sink), fields(algorithm = %request.algorithm))]
pub fn run_request(request: &TraceRequest, sink: &mut dyn TraceSink) -> Result<RunOutcome> {
    let start = Instant::now();
    let graph = request.build_graph();

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        default_graph = request.edges.is_none(),
        "graph built"
    );

    sink.emit(&TraceRecord::Init {
        nodes: graph.nodes(),
        edges: graph.edges().to_vec(),
    })?;

    let outcome = match request.algorithm {
        Algorithm::Dijkstra => RunOutcome::Path(shortest_path(
            &graph,
            request.source,
            request.destination,
            sink,
        )?),
        Algorithm::Prims => RunOutcome::Tree(minimum_spanning_tree(&graph, request.start, sink)?),
    };

    sink.emit(&TraceRecord::End)?;

    trace_time!(start, "run_request");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{FinalRecord, RecordingSink};

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    fn request(selector: &str, args: &str) -> Result<TraceRequest> {
        TraceRequest::parse(
            selector,
            &tokens(args),
            &TraceConfig::default(),
            NodeOverrides::default(),
        )
    }

    #[test]
    fn test_algorithm_selector() {
        assert_eq!("dijkstra".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
        assert_eq!("prims".parse::<Algorithm>().unwrap(), Algorithm::Prims);
        assert!(matches!(
            "kruskal".parse::<Algorithm>(),
            Err(GreedError::UnknownAlgorithm(ref s)) if s == "kruskal"
        ));
        assert!("Dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_no_tokens_selects_default_graph() {
        assert_eq!(parse_edge_tokens::<&str>(&[]).unwrap(), None);
        assert_eq!(parse_edge_tokens(&["0"]).unwrap(), None);
    }

    #[test]
    fn test_parse_triples() {
        let edges = parse_edge_tokens(&tokens("0 1 4 1 2 -3")).unwrap().unwrap();
        assert_eq!(edges, vec![Edge::new(0, 1, 4), Edge::new(1, 2, -3)]);
    }

    #[test]
    fn test_wrong_token_count() {
        let err = parse_edge_tokens(&tokens("0 1 4 2")).unwrap_err();
        assert!(matches!(err, GreedError::MalformedRequest { count: 4 }));
        assert!(err.is_request_error());
    }

    #[test]
    fn test_non_numeric_token() {
        let err = parse_edge_tokens(&tokens("0 1 x")).unwrap_err();
        assert!(matches!(err, GreedError::InvalidNumber { ref token } if token == "x"));
        assert!(parse_edge_tokens(&tokens("0 1 2.5")).is_err());
    }

    #[test]
    fn test_selector_checked_before_tokens() {
        let err = request("bogus", "1 2").unwrap_err();
        assert!(matches!(err, GreedError::UnknownAlgorithm(_)));
    }

    #[test]
    fn test_overrides_win_over_config() {
        let config = TraceConfig::default();
        let overrides = NodeOverrides {
            source: Some(3),
            destination: None,
            start: Some(2),
        };
        let req = TraceRequest::parse("dijkstra", &tokens(""), &config, overrides).unwrap();
        assert_eq!(req.source, 3);
        assert_eq!(req.destination, config.dijkstra.destination);
        assert_eq!(req.start, 2);
    }

    #[test]
    fn test_run_brackets_with_init_and_end() {
        let req = request("dijkstra", "").unwrap();
        let mut sink = RecordingSink::new();
        let outcome = run_request(&req, &mut sink).unwrap();

        let records = sink.records();
        assert_eq!(
            records.first(),
            Some(&TraceRecord::Init {
                nodes: vec![0, 1, 2, 3],
                edges: Graph::default_graph().edges().to_vec(),
            })
        );
        assert_eq!(records.last(), Some(&TraceRecord::End));
        assert_eq!(
            records[records.len() - 2],
            TraceRecord::Final(FinalRecord::path(vec![0, 2, 1, 3], 8))
        );
        assert_eq!(outcome.cost(), Some(8));
    }

    #[test]
    fn test_run_prims_on_supplied_edges() {
        let req = request("prims", "1 2 3 2 3 1 1 3 5").unwrap();
        let mut sink = RecordingSink::new();
        let outcome = run_request(&TraceRequest { start: 1, ..req }, &mut sink).unwrap();

        assert_eq!(outcome.cost(), Some(4));
        assert_eq!(sink.of_kind("init").len(), 1);
        assert_eq!(sink.of_kind("final").len(), 1);
        assert_eq!(sink.of_kind("end").len(), 1);
    }

    #[test]
    fn test_unreachable_outcome_has_no_cost() {
        let req = TraceRequest {
            destination: 9,
            ..request("dijkstra", "0 1 1 9 10 1").unwrap()
        };
        let mut sink = RecordingSink::new();
        let outcome = run_request(&req, &mut sink).unwrap();

        assert_eq!(outcome.cost(), None);
        assert_eq!(sink.records().last(), Some(&TraceRecord::End));
    }
}

use super::*;
use crate::trace::RecordingSink;

fn run(graph: &Graph, start: NodeId) -> (SpanningTree, RecordingSink) {
    let mut sink = RecordingSink::new();
    let tree = minimum_spanning_tree(graph, start, &mut sink).unwrap();
    (tree, sink)
}

fn steps(sink: &RecordingSink) -> Vec<(&'static str, NodeId, Weight)> {
    sink.records()
        .iter()
        .filter_map(|r| r.step().map(|s| (r.kind(), s.node, s.value)))
        .collect()
}

#[test]
fn test_default_graph_tree() {
    let graph = Graph::default_graph();
    let (tree, sink) = run(&graph, 0);

    assert_eq!(tree.cost, 8);
    assert_eq!(tree.edges.len(), graph.node_count() - 1);
    assert_eq!(
        tree.edges,
        vec![Edge::new(0, 2, 1), Edge::new(2, 1, 2), Edge::new(1, 3, 5)]
    );
    assert!(tree.is_spanning(&graph));
    assert_eq!(
        sink.records().last(),
        Some(&TraceRecord::Final(FinalRecord::tree(tree.edges.clone(), 8)))
    );
}

#[test]
fn test_default_graph_event_sequence() {
    let (tree, sink) = run(&Graph::default_graph(), 0);

    assert_eq!(
        steps(&sink),
        vec![
            ("include", 0, 0),
            ("update", 1, 4),
            ("update", 2, 1),
            ("include", 2, 1),
            ("update", 1, 2),
            ("update", 3, 8),
            ("include", 1, 2),
            ("update", 3, 5),
            ("include", 3, 5),
        ]
    );
    assert_eq!(tree.inclusion_order, vec![0, 2, 1, 3]);
}

#[test]
fn test_every_node_included_exactly_once() {
    let graph = Graph::from_edges([
        (0, 1, 3),
        (1, 2, 1),
        (0, 2, 1),
        (2, 3, 4),
        (3, 0, 2),
        (1, 3, 1),
    ]);
    let (tree, sink) = run(&graph, 1);

    let mut included: Vec<NodeId> = sink
        .of_kind("include")
        .iter()
        .map(|r| r.step().unwrap().node)
        .collect();
    included.sort_unstable();
    assert_eq!(included, graph.nodes());
    assert_eq!(tree.edges.len(), 3);
    assert_eq!(tree.cost, 3);
}

#[test]
fn test_total_is_sum_of_include_values() {
    let graph = Graph::from_edges([
        (0, 1, 7),
        (1, 2, 3),
        (0, 2, 9),
        (2, 3, 6),
        (3, 4, 2),
        (1, 4, 8),
    ]);
    let (tree, sink) = run(&graph, 0);

    let included_sum: Weight = sink
        .of_kind("include")
        .iter()
        .map(|r| r.step().unwrap().value)
        .sum();
    let edge_sum: Weight = tree.edges.iter().map(|e| e.weight).sum();
    assert_eq!(tree.cost, included_sum);
    assert_eq!(tree.cost, edge_sum);
    assert_eq!(tree.cost, 18);
}

#[test]
fn test_keys_never_increase() {
    let graph = Graph::from_edges([
        (0, 1, 9),
        (0, 2, 8),
        (2, 1, 7),
        (1, 3, 1),
        (2, 3, 6),
        (3, 1, 2),
    ]);
    let (_, sink) = run(&graph, 0);

    let mut last: HashMap<NodeId, Weight> = HashMap::new();
    for record in sink.of_kind("update") {
        let step = record.step().unwrap();
        if let Some(previous) = last.insert(step.node, step.value) {
            assert!(step.value < previous);
        }
    }
}

/// Disconnected input yields a tree of the start's component only,
/// with no diagnostic record
#[test]
fn test_disconnected_graph_covers_start_component() {
    let graph = Graph::from_edges([(0, 1, 2), (1, 2, 3), (5, 6, 1)]);
    let (tree, sink) = run(&graph, 0);

    assert_eq!(tree.cost, 5);
    assert_eq!(tree.edges.len(), 2);
    assert_eq!(tree.inclusion_order, vec![0, 1, 2]);
    assert!(!tree.is_spanning(&graph));
    assert_eq!(sink.of_kind("final").len(), 1);
}

#[test]
fn test_start_absent_from_graph() {
    let (tree, sink) = run(&Graph::default_graph(), 42);

    assert_eq!(tree.cost, 0);
    assert!(tree.edges.is_empty());
    assert!(tree.inclusion_order.is_empty());
    assert!(steps(&sink).is_empty());
    assert_eq!(
        sink.records(),
        &[TraceRecord::Final(FinalRecord::tree(Vec::new(), 0))]
    );
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let graph = Graph::from_edges([(0, 1, 5), (0, 1, 2), (0, 1, 3)]);
    let (tree, sink) = run(&graph, 0);

    assert_eq!(tree.edges, vec![Edge::new(0, 1, 2)]);
    assert_eq!(
        steps(&sink),
        vec![
            ("include", 0, 0),
            ("update", 1, 5),
            ("update", 1, 2),
            ("include", 1, 2),
        ]
    );
}

#[test]
fn test_tie_break_follows_insertion_order() {
    let graph = Graph::from_edges([(0, 3, 1), (0, 1, 1), (0, 2, 1)]);
    let (tree, _) = run(&graph, 0);

    assert_eq!(tree.inclusion_order, vec![0, 3, 1, 2]);
}

#[test]
fn test_path_from_start_follows_tree() {
    let (tree, _) = run(&Graph::default_graph(), 0);

    assert_eq!(tree.path_from_start(3), Some(vec![0, 2, 1, 3]));
    assert_eq!(tree.path_from_start(0), Some(vec![0]));
    assert_eq!(tree.path_from_start(9), None);
}

#[test]
fn test_step_exposes_intermediate_state() {
    let graph = Graph::default_graph();
    let mut sink = RecordingSink::new();
    let mut state = PrimState::new(0);

    assert!(state.step(&graph, &mut sink).unwrap());
    assert!(state.is_included(0));
    assert_eq!(state.key(1), Some(4));
    assert_eq!(state.key(2), Some(1));
    assert_eq!(state.parent(2), Some(0));
    assert!(state.edges().is_empty());

    assert!(state.step(&graph, &mut sink).unwrap());
    assert_eq!(state.total(), 1);
    assert_eq!(state.key(1), Some(2));
    assert_eq!(state.parent(1), Some(2));
    assert_eq!(state.edges(), &[Edge::new(0, 2, 1)]);
}

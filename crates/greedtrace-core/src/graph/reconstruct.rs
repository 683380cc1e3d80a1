//! Path reconstruction from a predecessor map

use std::collections::HashMap;

use crate::graph::types::NodeId;

/// Walk predecessor links from `endpoint` back to `seed`.
///
/// Returns the path in seed-to-endpoint order, `Some(vec![seed])` when the
/// endpoint is the seed itself, and `None` when a link is missing. The walk
/// is bounded by the map size, so a map containing a cycle yields `None`.
pub fn reconstruct_path(
    seed: NodeId,
    endpoint: NodeId,
    predecessors: &HashMap<NodeId, NodeId>,
) -> Option<Vec<NodeId>> {
    let mut path = vec![endpoint];
    let mut current = endpoint;

    while current != seed {
        if path.len() > predecessors.len() {
            return None;
        }
        current = *predecessors.get(&current)?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_equal_to_seed() {
        let predecessors = HashMap::new();
        assert_eq!(reconstruct_path(3, 3, &predecessors), Some(vec![3]));
    }

    #[test]
    fn test_walks_back_to_seed() {
        let predecessors = HashMap::from([(2, 0), (1, 2), (3, 1)]);
        assert_eq!(reconstruct_path(0, 3, &predecessors), Some(vec![0, 2, 1, 3]));
    }

    #[test]
    fn test_missing_link_is_unreachable() {
        let predecessors = HashMap::from([(2, 0)]);
        assert_eq!(reconstruct_path(0, 9, &predecessors), None);
    }

    #[test]
    fn test_cycle_terminates() {
        let predecessors = HashMap::from([(1, 2), (2, 1)]);
        assert_eq!(reconstruct_path(0, 1, &predecessors), None);
    }
}

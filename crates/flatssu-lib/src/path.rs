use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cost::{edge_cost, RoutingMode};
use crate::graph::{Graph, NodeIndex};

/// Run Dijkstra's algorithm from `start` to `goal` under the cost policy of
/// `mode`.
///
/// Returns the node indices from `start` to `goal` inclusive, or an empty
/// vector when `goal` is unreachable. Both indices must be valid for `graph`;
/// bounds checking belongs to the caller (see [`crate::PathEngine`]).
pub fn shortest_path(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    mode: RoutingMode,
) -> Vec<NodeIndex> {
    let node_count = graph.node_count();
    let mut costs = vec![u64::MAX; node_count];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut queue = BinaryHeap::new();

    costs[start] = 0;
    queue.push(QueueEntry { node: start, cost: 0 });

    while let Some(entry) = queue.pop() {
        if entry.cost > costs[entry.node] {
            continue;
        }
        if entry.node == goal {
            break;
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = entry.cost.saturating_add(edge_cost(edge, mode));
            if next_cost < costs[next] {
                costs[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry {
                    node: next,
                    cost: next_cost,
                });
            }
        }
    }

    if costs[goal] == u64::MAX {
        return Vec::new();
    }
    reconstruct_path(&parents, start, goal)
}

/// Total cost of walking `path` under `mode`, taking the cheapest edge between
/// each consecutive pair. `None` if two consecutive nodes are not adjacent.
pub fn path_cost(graph: &Graph, path: &[NodeIndex], mode: RoutingMode) -> Option<u64> {
    path.windows(2).try_fold(0u64, |total, pair| {
        let hop = graph
            .neighbours(pair[0])
            .iter()
            .filter(|edge| edge.target == pair[1])
            .map(|edge| edge_cost(edge, mode))
            .min()?;
        Some(total + hop)
    })
}

fn reconstruct_path(
    parents: &[Option<NodeIndex>],
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

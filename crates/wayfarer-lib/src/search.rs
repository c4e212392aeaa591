//! Least-cost path search over a [`Graph`] using the bin-merging
//! [`PriorityQueue`] as frontier.
//!
//! Improved costs re-insert a node instead of decreasing its key; stale
//! entries are skipped when they surface.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::queue::PriorityQueue;

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Nodes from start to goal inclusive.
    pub path: Vec<NodeId>,
    pub cost: i32,
    /// Number of nodes settled before the goal was reached.
    pub expanded: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

impl SearchResult {
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    node: NodeId,
    cost: i32,
}

/// Find the least-cost path from `start` to `goal`, or `None` when the goal is
/// unreachable. Path costs saturate at `i32::MAX`.
pub fn find_least_cost_path(graph: &Graph, start: NodeId, goal: NodeId) -> Option<SearchResult> {
    if start == goal {
        return Some(SearchResult {
            path: vec![start],
            cost: 0,
            expanded: 0,
            peak_frontier: 0,
        });
    }

    let mut best: HashMap<NodeId, i32> = HashMap::new();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut frontier = PriorityQueue::new();
    let mut expanded = 0;

    best.insert(start, 0);
    frontier.insert(
        0,
        FrontierEntry {
            node: start,
            cost: 0,
        },
    );

    while let Some(entry) = frontier.extract_min() {
        match best.get(&entry.node) {
            Some(cost) if *cost < entry.cost => continue,
            _ => {}
        }
        expanded += 1;

        if entry.node == goal {
            let result = SearchResult {
                path: reconstruct_path(&parents, start, goal),
                cost: entry.cost,
                expanded,
                peak_frontier: frontier.peak_size(),
            };
            debug!(
                start,
                goal,
                cost = result.cost,
                expanded,
                peak_frontier = result.peak_frontier,
                "least-cost path found"
            );
            return Some(result);
        }

        for hop in graph.neighbours(entry.node) {
            let next_cost = entry.cost.saturating_add(hop.cost);
            let improves = match best.get(&hop.target) {
                Some(known) => next_cost < *known,
                None => true,
            };
            if improves {
                best.insert(hop.target, next_cost);
                parents.insert(hop.target, entry.node);
                frontier.insert(
                    next_cost,
                    FrontierEntry {
                        node: hop.target,
                        cost: next_cost,
                    },
                );
            }
        }
    }

    debug!(
        start,
        goal,
        expanded,
        peak_frontier = frontier.peak_size(),
        "goal unreachable"
    );
    None
}

/// Validate both endpoints and search for a route between them.
pub fn plan_route(graph: &Graph, start: NodeId, goal: NodeId) -> Result<SearchResult> {
    for node in [start, goal] {
        if !graph.contains(node) {
            return Err(Error::UnknownNode { node });
        }
    }
    find_least_cost_path(graph, start, goal).ok_or(Error::RouteNotFound { start, goal })
}

fn reconstruct_path(parents: &HashMap<NodeId, NodeId>, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(parent) => {
                current = *parent;
                path.push(current);
            }
            None => break,
        }
    }
    path.reverse();
    path
}

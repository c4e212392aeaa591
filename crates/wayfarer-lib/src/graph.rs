use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a graph node.
pub type NodeId = u32;

/// Edge as stored in graph files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Non-negative traversal cost.
    pub cost: i32,
    /// Also add the reverse edge with the same cost.
    #[serde(default)]
    pub bidirectional: bool,
}

/// Outgoing hop within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub target: NodeId,
    pub cost: i32,
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    edges: Vec<Edge>,
}

/// Directed graph with integer edge costs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<NodeId, Vec<Hop>>>,
}

impl Graph {
    /// Build a graph from an edge list. Nodes only appear through edges.
    pub fn from_edges(edges: &[Edge]) -> Result<Self> {
        let mut adjacency: HashMap<NodeId, Vec<Hop>> = HashMap::new();
        for edge in edges {
            if edge.cost < 0 {
                return Err(Error::NegativeEdgeCost {
                    from: edge.from,
                    to: edge.to,
                    cost: edge.cost,
                });
            }
            adjacency.entry(edge.from).or_default().push(Hop {
                target: edge.to,
                cost: edge.cost,
            });
            let reverse = adjacency.entry(edge.to).or_default();
            if edge.bidirectional {
                reverse.push(Hop {
                    target: edge.from,
                    cost: edge.cost,
                });
            }
        }
        Ok(Self {
            adjacency: Arc::new(adjacency),
        })
    }

    /// Load a graph from a JSON document of the form `{"edges": [...]}`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let file: GraphFile = serde_json::from_str(&raw)?;
        Self::from_edges(&file.edges)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Return the outgoing hops of `node`.
    pub fn neighbours(&self, node: NodeId) -> &[Hop] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

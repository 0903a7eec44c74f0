use serde::{Deserialize, Serialize};

/// Directed graph over the dense node ids 1..=n. Index 0 of the adjacency
/// vector is never a node; 0 is reserved as the input sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiGraph {
    adj: Vec<Vec<usize>>,
}

impl DiGraph {
    pub fn with_nodes(n: usize) -> DiGraph {
        DiGraph {
            adj: vec![Vec::new(); n + 1],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Appends the edge u -> v. Parallel edges and self-loops are kept as
    /// given.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adj[u].push(v);
    }

    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }
}

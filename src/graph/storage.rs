//! Memory-efficient undirected graph storage with stable identifiers

use serde::{Deserialize, Serialize};

/// An undirected edge. Its position in `Graph::edges` is its stable
/// identifier, used by edge filters and the partition hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: u32,
    pub target: u32,
}

/// Compressed sparse incidence representation of an undirected graph.
///
/// Vertices are identified by `0..node_count` and edges by their index in
/// `edges`. The incidence array stores `(neighbor, edge_id)` pairs per
/// vertex, so filtered traversals can test edge visibility inline instead of
/// consulting a separate lookup structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Number of vertices in the graph
    pub node_count: usize,

    /// Edge endpoint list; the index of an edge is its identifier
    pub edges: Vec<Edge>,

    /// Offset array: index where each vertex's incidence entries begin
    offsets: Vec<u32>,

    /// Incidence array: concatenated `(neighbor, edge_id)` lists
    incidence: Vec<(u32, u32)>,

    /// Optional mapping from vertex identifiers to original string IDs
    pub node_ids: Option<Vec<String>>,
}

impl Graph {
    pub(crate) fn new(node_count: usize, edges: Vec<Edge>, node_ids: Option<Vec<String>>) -> Self {
        // Each endpoint of every edge contributes one incidence entry, so a
        // self-loop shows up twice in its vertex's list.
        let mut degree = vec![0u32; node_count];
        for e in &edges {
            degree[e.source as usize] += 1;
            degree[e.target as usize] += 1;
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        offsets.push(0);
        let mut total = 0;
        for &d in &degree {
            total += d;
            offsets.push(total);
        }

        let mut incidence = vec![(0u32, 0u32); total as usize];
        let mut cursor: Vec<u32> = offsets[..node_count].to_vec();
        for (idx, e) in edges.iter().enumerate() {
            let id = idx as u32;
            incidence[cursor[e.source as usize] as usize] = (e.target, id);
            cursor[e.source as usize] += 1;
            incidence[cursor[e.target as usize] as usize] = (e.source, id);
            cursor[e.target as usize] += 1;
        }

        Self {
            node_count,
            edges,
            offsets,
            incidence,
            node_ids,
        }
    }

    /// Build a graph directly from `(source, target)` pairs. Mainly useful
    /// for tests and embedding callers that already hold integer ids.
    pub fn from_edges(node_count: usize, pairs: &[(u32, u32)]) -> Self {
        let edges = pairs
            .iter()
            .map(|&(source, target)| Edge { source, target })
            .collect();
        Self::new(node_count, edges, None)
    }

    pub fn num_vertices(&self) -> usize {
        self.node_count
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the `(neighbor, edge_id)` incidence entries for a vertex
    pub fn incident_edges(&self, vertex: u32) -> &[(u32, u32)] {
        let start = self.offsets[vertex as usize] as usize;
        let end = self.offsets[vertex as usize + 1] as usize;
        &self.incidence[start..end]
    }

    /// Unfiltered degree of a vertex
    pub fn degree(&self, vertex: u32) -> usize {
        self.incident_edges(vertex).len()
    }

    /// Display label for a vertex: its original string ID when one was
    /// recorded at build time, otherwise the numeric identifier.
    pub fn vertex_label(&self, vertex: u32) -> String {
        match &self.node_ids {
            Some(ids) => ids[vertex as usize].clone(),
            None => vertex.to_string(),
        }
    }
}

//! Graph construction module

use crate::graph::storage::{Edge, Graph};
use std::collections::HashMap;

/// Builder for incrementally constructing a Graph
pub struct GraphBuilder {
    /// Number of vertices
    node_count: usize,

    /// Mapping from string IDs to vertex indices
    id_to_index: HashMap<String, u32>,

    /// Vertex string IDs, aligned with vertex indices
    node_ids: Vec<String>,

    /// Edge endpoint list in insertion order
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new graph builder with the given vertex capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            node_count: 0,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            edges: Vec::new(),
        }
    }

    /// Get or create a vertex index for the given string ID
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_count as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.node_count += 1;

        idx
    }

    /// Reserve `count` anonymous vertices. Vertex IDs are assigned densely,
    /// so mixing this with string-ID vertices drops the label mapping.
    pub fn add_vertices(&mut self, count: usize) {
        self.node_count += count;
    }

    /// Add an undirected edge between two vertex indices, returning the new
    /// edge's identifier. Grows the vertex range if the endpoints exceed it.
    pub fn add_edge(&mut self, source: u32, target: u32) -> u32 {
        let needed = source.max(target) as usize + 1;
        if needed > self.node_count {
            self.node_count = needed;
        }

        let id = self.edges.len() as u32;
        self.edges.push(Edge { source, target });
        id
    }

    /// Add an edge between two string-identified vertices
    pub fn add_labeled_edge(&mut self, src_id: &str, dst_id: &str) -> u32 {
        let source = self.get_or_create_node(src_id);
        let target = self.get_or_create_node(dst_id);
        self.add_edge(source, target)
    }

    /// Build the graph, computing the incidence structure
    pub fn build(self) -> Graph {
        // Labels are only meaningful when every vertex got one.
        let node_ids = if !self.node_ids.is_empty() && self.node_ids.len() == self.node_count {
            Some(self.node_ids)
        } else {
            None
        };

        Graph::new(self.node_count, self.edges, node_ids)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Hierarchical partition trees produced by the upstream clustering process
//!
//! A tree's leaves partition the full vertex/edge set into clusters; a
//! cluster is addressed by a path of child indices encoded in a label such
//! as `"root|cluster_2|cluster_5"`. Trees arrive fully built and are
//! read-only here.

mod resolve;

use std::collections::HashSet;

/// A node in the partition hierarchy.
///
/// A node either directly owns the vertex/edge indices of one cluster or it
/// owns children; the enum makes the exactly-one-representation invariant
/// unrepresentable to violate.
#[derive(Debug, Clone)]
pub enum PartitionNode {
    Leaf {
        vertex_indices: Vec<u32>,
        edge_indices: Vec<u32>,
    },
    Internal {
        children: Vec<PartitionNode>,
    },
}

/// A partition hierarchy with a single root node
#[derive(Debug, Clone)]
pub struct PartitionTree {
    pub root: PartitionNode,
}

impl PartitionTree {
    pub fn new(root: PartitionNode) -> Self {
        Self { root }
    }

    /// Union the vertex and edge indices of every leaf descendant of `node`,
    /// depth-first with children visited in stored order.
    ///
    /// Leaves of a well-formed tree are disjoint; the union still
    /// deduplicates, keeping first-visit order.
    pub fn collect_indices(node: &PartitionNode) -> (Vec<u32>, Vec<u32>) {
        let mut vertex_indices = Vec::new();
        let mut edge_indices = Vec::new();
        let mut seen_vertices = HashSet::new();
        let mut seen_edges = HashSet::new();

        fn walk(
            node: &PartitionNode,
            vertex_indices: &mut Vec<u32>,
            edge_indices: &mut Vec<u32>,
            seen_vertices: &mut HashSet<u32>,
            seen_edges: &mut HashSet<u32>,
        ) {
            match node {
                PartitionNode::Leaf {
                    vertex_indices: vlist,
                    edge_indices: elist,
                } => {
                    for &v in vlist {
                        if seen_vertices.insert(v) {
                            vertex_indices.push(v);
                        }
                    }
                    for &e in elist {
                        if seen_edges.insert(e) {
                            edge_indices.push(e);
                        }
                    }
                }
                PartitionNode::Internal { children } => {
                    for child in children {
                        walk(child, vertex_indices, edge_indices, seen_vertices, seen_edges);
                    }
                }
            }
        }

        walk(
            node,
            &mut vertex_indices,
            &mut edge_indices,
            &mut seen_vertices,
            &mut seen_edges,
        );
        (vertex_indices, edge_indices)
    }
}

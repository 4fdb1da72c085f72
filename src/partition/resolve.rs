//! Resolution of hierarchical path labels to partition-tree nodes

use crate::error::AnalysisError;
use crate::partition::{PartitionNode, PartitionTree};

impl PartitionTree {
    /// Resolve a fully-qualified label to the vertex and edge index sets it
    /// denotes.
    ///
    /// A leaf returns its own lists verbatim, preserving order; an internal
    /// node returns the depth-first union of its leaf descendants. Pure
    /// read, no side effects.
    pub fn resolve(&self, label: &str) -> Result<(Vec<u32>, Vec<u32>), AnalysisError> {
        let node = self.traverse(label)?;
        Ok(match node {
            PartitionNode::Leaf {
                vertex_indices,
                edge_indices,
            } => (vertex_indices.clone(), edge_indices.clone()),
            internal => Self::collect_indices(internal),
        })
    }

    /// Walk the hierarchy to the node named by a fully-qualified label.
    ///
    /// Labels are `|`-separated tokens; the literal `root` (case-insensitive)
    /// may appear only as the first token. Every other token names a child by
    /// its trailing integer, e.g. `cluster_5` walks into child 5.
    pub fn traverse(&self, label: &str) -> Result<&PartitionNode, AnalysisError> {
        if label.eq_ignore_ascii_case("root") {
            return Ok(&self.root);
        }

        let mut tokens = label.split('|').peekable();
        if tokens
            .peek()
            .is_some_and(|first| first.eq_ignore_ascii_case("root"))
        {
            tokens.next();
        }

        let mut node = &self.root;
        for token in tokens {
            let index = child_index(token)
                .ok_or_else(|| AnalysisError::invalid_label(label, format!("token {token:?} has no child index")))?;

            node = match node {
                PartitionNode::Internal { children } => children.get(index).ok_or_else(|| {
                    AnalysisError::invalid_label(
                        label,
                        format!("child index {index} out of range ({} children)", children.len()),
                    )
                })?,
                PartitionNode::Leaf { .. } => {
                    return Err(AnalysisError::invalid_label(
                        label,
                        format!("token {token:?} descends past a leaf"),
                    ));
                }
            };
        }
        Ok(node)
    }
}

/// Child position encoded as the trailing integer of a token, e.g.
/// `cluster_5` -> 5.
fn child_index(token: &str) -> Option<usize> {
    token.rsplit('_').next()?.parse().ok()
}

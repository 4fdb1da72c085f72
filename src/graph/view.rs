//! Non-mutating induced-subgraph views
//!
//! A view carries its own visibility masks instead of mutating filter state
//! on the shared graph object, so every request can hold its own view and
//! concurrent readers of one graph never contend.

use crate::graph::storage::{Edge, Graph};

/// A read-only induced-subgraph view over a [`Graph`].
///
/// An edge is visible only if the edge itself and both of its endpoints pass
/// their respective masks. A `None` mask means that dimension is unfiltered.
pub struct SubgraphView<'g> {
    graph: &'g Graph,
    vertex_mask: Option<Vec<bool>>,
    edge_mask: Option<Vec<bool>>,
}

impl<'g> SubgraphView<'g> {
    /// An unfiltered view over the whole graph
    pub fn full(graph: &'g Graph) -> Self {
        Self {
            graph,
            vertex_mask: None,
            edge_mask: None,
        }
    }

    /// Build the view induced by the given vertex and edge index sets.
    ///
    /// Both lists empty means "no filter" and yields the full graph, not an
    /// error. An individually empty list leaves that dimension unfiltered;
    /// indices out of range are ignored.
    pub fn induce(graph: &'g Graph, vertex_indices: &[u32], edge_indices: &[u32]) -> Self {
        if vertex_indices.is_empty() && edge_indices.is_empty() {
            return Self::full(graph);
        }

        let vertex_mask = if vertex_indices.is_empty() {
            None
        } else {
            let mut mask = vec![false; graph.num_vertices()];
            for &v in vertex_indices {
                if let Some(slot) = mask.get_mut(v as usize) {
                    *slot = true;
                }
            }
            Some(mask)
        };

        let edge_mask = if edge_indices.is_empty() {
            None
        } else {
            let mut mask = vec![false; graph.num_edges()];
            for &e in edge_indices {
                if let Some(slot) = mask.get_mut(e as usize) {
                    *slot = true;
                }
            }
            Some(mask)
        };

        Self {
            graph,
            vertex_mask,
            edge_mask,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Whether any vertex or edge filter is active. Drives the peeling
    /// strategy selection: the fast whole-graph path is only legal when this
    /// returns false.
    pub fn is_filtered(&self) -> bool {
        self.vertex_mask.is_some() || self.edge_mask.is_some()
    }

    pub fn has_vertex(&self, vertex: u32) -> bool {
        match &self.vertex_mask {
            Some(mask) => mask[vertex as usize],
            None => true,
        }
    }

    /// Edge visibility: the edge passes its mask and both endpoints pass the
    /// vertex mask.
    pub fn has_edge(&self, edge_id: u32) -> bool {
        let passes_mask = match &self.edge_mask {
            Some(mask) => mask[edge_id as usize],
            None => true,
        };
        if !passes_mask {
            return false;
        }
        let edge = &self.graph.edges[edge_id as usize];
        self.has_vertex(edge.source) && self.has_vertex(edge.target)
    }

    /// Iterate visible vertex identifiers in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.graph.num_vertices() as u32).filter(move |&v| self.has_vertex(v))
    }

    /// Iterate the visible `(neighbor, edge_id)` incidence entries of a vertex
    pub fn incident(&self, vertex: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.graph
            .incident_edges(vertex)
            .iter()
            .copied()
            .filter(move |&(_, edge_id)| self.has_edge(edge_id))
    }

    /// Iterate the visible neighbors of a vertex
    pub fn neighbors(&self, vertex: u32) -> impl Iterator<Item = u32> + '_ {
        self.incident(vertex).map(|(neighbor, _)| neighbor)
    }

    /// Iterate visible edges as `(edge_id, edge)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (u32, &'g Edge)> + '_ {
        self.graph
            .edges
            .iter()
            .enumerate()
            .filter(move |&(id, _)| self.has_edge(id as u32))
            .map(|(id, edge)| (id as u32, edge))
    }

    /// Degree of a vertex counting only visible incident edges
    pub fn degree(&self, vertex: u32) -> usize {
        self.incident(vertex).count()
    }

    pub fn num_vertices(&self) -> usize {
        match &self.vertex_mask {
            Some(mask) => mask.iter().filter(|&&visible| visible).count(),
            None => self.graph.num_vertices(),
        }
    }

    pub fn num_edges(&self) -> usize {
        if self.is_filtered() {
            self.edges().count()
        } else {
            self.graph.num_edges()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)])
    }

    #[test]
    fn test_empty_index_lists_mean_no_filter() {
        let g = path_graph();
        let view = SubgraphView::induce(&g, &[], &[]);

        assert!(!view.is_filtered());
        assert_eq!(view.num_vertices(), 5);
        assert_eq!(view.num_edges(), 4);
    }

    #[test]
    fn test_edge_needs_both_endpoints_visible() {
        let g = path_graph();
        // Edge 1 is selected, but vertex 2 is not.
        let view = SubgraphView::induce(&g, &[0, 1], &[0, 1]);

        assert!(view.has_edge(0));
        assert!(!view.has_edge(1));
        assert_eq!(view.num_edges(), 1);
    }

    #[test]
    fn test_degree_counts_only_visible_edges() {
        let g = path_graph();
        let view = SubgraphView::induce(&g, &[1, 2, 3], &[1, 2]);

        assert_eq!(view.degree(2), 2);
        assert_eq!(view.degree(1), 1);
        // Vertex 0 is filtered out entirely.
        assert_eq!(view.degree(0), 0);
        assert_eq!(view.neighbors(2).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_empty_vertex_list_leaves_vertices_unfiltered() {
        let g = path_graph();
        let view = SubgraphView::induce(&g, &[], &[0]);

        assert!(view.is_filtered());
        assert_eq!(view.num_vertices(), 5);
        assert_eq!(view.num_edges(), 1);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let g = path_graph();
        let view = SubgraphView::induce(&g, &[0, 1, 99], &[0]);

        assert_eq!(view.num_vertices(), 2);
        assert_eq!(view.num_edges(), 1);
    }
}

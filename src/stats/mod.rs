//! Aggregate statistics over induced subgraphs

use crate::error::AnalysisError;
use crate::graph::{algorithms, Graph, SubgraphView};
use crate::partition::PartitionTree;
use crate::peel;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Snapshot of the structural statistics of one (sub)graph.
///
/// Field names are the external report keys; the `*_bins`/`*_counts` and
/// `*_sizes`/`*_counts` pairs are aligned by index and sorted ascending.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    pub num_vertices: usize,
    pub num_edges: usize,
    pub num_cc: usize,
    pub num_singletons: usize,
    /// Complexity estimate `V * log2(V)`, two decimal places; "0.00" for an
    /// empty vertex set
    pub vlogv: String,
    pub deg_bins: Vec<usize>,
    pub deg_counts: Vec<usize>,
    pub cc_sizes: Vec<usize>,
    pub cc_counts: Vec<usize>,
    pub peel_bins: Vec<u32>,
    pub peel_counts: Vec<usize>,
}

/// Compute the combined statistics report for a view.
///
/// Peeling strategy follows the filter rule: exact on filtered views,
/// whole-graph reuse otherwise. Underlying failures propagate verbatim.
pub fn statistics(view: &SubgraphView) -> Result<StatisticsReport, AnalysisError> {
    let num_vertices = view.num_vertices();
    let num_edges = view.num_edges();

    let deg_hist = algorithms::vertex_hist(view);
    let num_singletons = deg_hist.get(&0).copied().unwrap_or(0);
    let (deg_bins, deg_counts): (Vec<usize>, Vec<usize>) = deg_hist.into_iter().unzip();

    let component_sizes = algorithms::label_components(view);
    let num_cc = component_sizes.len();
    let size_hist: BTreeMap<usize, usize> =
        component_sizes.into_iter().counts().into_iter().collect();
    let (cc_sizes, cc_counts): (Vec<usize>, Vec<usize>) = size_hist.into_iter().unzip();

    let peel_partition = peel::peel(view)?;
    let (peel_bins, peel_counts): (Vec<u32>, Vec<usize>) = peel_partition
        .iter()
        .map(|(&core, members)| (core, members.len()))
        .unzip();

    let vlogv = if num_vertices == 0 {
        "0.00".to_string()
    } else {
        let v = num_vertices as f64;
        format!("{:.2}", v * v.log2())
    };

    Ok(StatisticsReport {
        num_vertices,
        num_edges,
        num_cc,
        num_singletons,
        vlogv,
        deg_bins,
        deg_counts,
        cc_sizes,
        cc_counts,
        peel_bins,
        peel_counts,
    })
}

/// Session state for label-addressed analysis requests.
///
/// Holds the loaded graph and partition hierarchy and enforces the request
/// boundary: statistics and exports fail with [`AnalysisError::NoGraph`]
/// until a graph is loaded.
#[derive(Debug, Default)]
pub struct Analyzer {
    graph: Option<Graph>,
    hierarchy: Option<PartitionTree>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(graph: Graph) -> Self {
        Self {
            graph: Some(graph),
            hierarchy: None,
        }
    }

    pub fn set_graph(&mut self, graph: Graph) {
        self.graph = Some(graph);
    }

    pub fn set_hierarchy(&mut self, hierarchy: PartitionTree) {
        self.hierarchy = Some(hierarchy);
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Resolve an optional hierarchy label into an induced-subgraph view
    pub fn view_for(&self, label: Option<&str>) -> Result<SubgraphView<'_>, AnalysisError> {
        let graph = self.graph.as_ref().ok_or(AnalysisError::NoGraph)?;
        match label {
            None => Ok(SubgraphView::full(graph)),
            Some(label) => {
                let hierarchy = self
                    .hierarchy
                    .as_ref()
                    .ok_or_else(|| AnalysisError::invalid_label(label, "no hierarchy loaded"))?;
                let (vertex_indices, edge_indices) = hierarchy.resolve(label)?;
                Ok(SubgraphView::induce(graph, &vertex_indices, &edge_indices))
            }
        }
    }

    /// Statistics for the subgraph a label denotes, or the whole graph when
    /// no label is given
    pub fn statistics(&self, label: Option<&str>) -> Result<StatisticsReport, AnalysisError> {
        let view = self.view_for(label)?;
        log::info!(
            "computing statistics over {} vertices / {} edges{}",
            view.num_vertices(),
            view.num_edges(),
            label.map(|l| format!(" (label {l:?})")).unwrap_or_default()
        );
        statistics(&view)
    }

    /// Export the adjacency list of the subgraph a label denotes
    pub fn save_adjacency(
        &self,
        label: Option<&str>,
        path: &Path,
    ) -> Result<String, AnalysisError> {
        let view = self.view_for(label)?;
        crate::storage::save_adjacency(&view, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::PartitionNode;

    fn path_graph() -> Graph {
        Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)])
    }

    #[test]
    fn test_path_graph_report() {
        let g = path_graph();
        let report = statistics(&SubgraphView::full(&g)).unwrap();

        assert_eq!(report.num_vertices, 5);
        assert_eq!(report.num_edges, 4);
        assert_eq!(report.num_cc, 1);
        assert_eq!(report.num_singletons, 0);
        assert_eq!(report.deg_bins, vec![1, 2]);
        assert_eq!(report.deg_counts, vec![2, 3]);
        assert_eq!(report.cc_sizes, vec![5]);
        assert_eq!(report.cc_counts, vec![1]);
        assert_eq!(report.peel_bins, vec![1]);
        assert_eq!(report.peel_counts, vec![5]);
    }

    #[test]
    fn test_isolated_vertices_report() {
        let g = Graph::from_edges(3, &[]);
        let report = statistics(&SubgraphView::full(&g)).unwrap();

        assert_eq!(report.num_singletons, 3);
        assert_eq!(report.num_cc, 3);
        assert_eq!(report.deg_bins, vec![0]);
        assert_eq!(report.deg_counts, vec![3]);
        assert_eq!(report.peel_bins, vec![0]);
        assert_eq!(report.peel_counts, vec![3]);
    }

    #[test]
    fn test_component_histogram_weights_sum_to_vertex_count() {
        let g = Graph::from_edges(7, &[(0, 1), (1, 2), (3, 4)]);
        let report = statistics(&SubgraphView::full(&g)).unwrap();

        let weighted: usize = report
            .cc_sizes
            .iter()
            .zip(&report.cc_counts)
            .map(|(size, count)| size * count)
            .sum();
        assert_eq!(weighted, report.num_vertices);
    }

    #[test]
    fn test_peel_counts_sum_to_vertex_count() {
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (4, 5)]);
        let report = statistics(&SubgraphView::full(&g)).unwrap();

        let total: usize = report.peel_counts.iter().sum();
        assert_eq!(total, report.num_vertices);
    }

    #[test]
    fn test_empty_graph_reports_zero_vlogv() {
        let g = Graph::from_edges(0, &[]);
        let report = statistics(&SubgraphView::full(&g)).unwrap();

        assert_eq!(report.num_vertices, 0);
        assert_eq!(report.vlogv, "0.00");
        assert!(report.deg_bins.is_empty());
        assert!(report.peel_bins.is_empty());
    }

    #[test]
    fn test_vlogv_formatting() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let report = statistics(&SubgraphView::full(&g)).unwrap();

        // 4 * log2(4) = 8
        assert_eq!(report.vlogv, "8.00");
    }

    #[test]
    fn test_analyzer_without_graph_is_no_graph() {
        let analyzer = Analyzer::new();
        assert!(matches!(
            analyzer.statistics(None),
            Err(AnalysisError::NoGraph)
        ));
    }

    #[test]
    fn test_analyzer_resolves_label_to_filtered_stats() {
        let mut analyzer = Analyzer::with_graph(path_graph());
        analyzer.set_hierarchy(PartitionTree::new(PartitionNode::Internal {
            children: vec![
                PartitionNode::Leaf {
                    vertex_indices: vec![0, 1],
                    edge_indices: vec![0],
                },
                PartitionNode::Leaf {
                    vertex_indices: vec![2, 3, 4],
                    edge_indices: vec![2, 3],
                },
            ],
        }));

        let report = analyzer.statistics(Some("root|cluster_0")).unwrap();
        assert_eq!(report.num_vertices, 2);
        assert_eq!(report.num_edges, 1);
        assert_eq!(report.peel_bins, vec![1]);
        assert_eq!(report.peel_counts, vec![2]);

        let err = analyzer.statistics(Some("root|cluster_9")).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidLabel { .. }));
    }

    #[test]
    fn test_analyzer_label_without_hierarchy_is_invalid() {
        let analyzer = Analyzer::with_graph(path_graph());
        let err = analyzer.statistics(Some("root|cluster_0")).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidLabel { .. }));
    }
}

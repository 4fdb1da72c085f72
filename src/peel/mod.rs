//! K-core peeling over induced-subgraph views
//!
//! Two interchangeable strategies produce the same `core -> vertices`
//! partition. [`PeelStrategy::Exact`] recomputes degeneracy peeling on
//! exactly the visible edges and is correct for any view.
//! [`PeelStrategy::WholeGraph`] regroups the decomposition of the unfiltered
//! graph and is cheaper, but its core numbers ignore any active filter, so
//! callers may only use it on unfiltered views. [`peel`] applies that rule
//! automatically.

use crate::error::AnalysisError;
use crate::graph::{algorithms, SubgraphView};
use std::collections::BTreeMap;

/// Mapping of core number to the vertices whose core number equals it.
///
/// Every visible vertex appears in exactly one bucket; the bucket union is
/// the visible vertex set.
pub type PeelPartition = BTreeMap<u32, Vec<u32>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeelStrategy {
    /// Peel the visible edge set from scratch
    Exact,

    /// Regroup the whole-graph decomposition over the visible vertex set
    WholeGraph,
}

/// Peel with the strategy the filter state allows: exact whenever any
/// filter is active, whole-graph reuse otherwise.
pub fn peel(view: &SubgraphView) -> Result<PeelPartition, AnalysisError> {
    let strategy = if view.is_filtered() {
        PeelStrategy::Exact
    } else {
        PeelStrategy::WholeGraph
    };
    peel_with_strategy(view, strategy)
}

pub fn peel_with_strategy(
    view: &SubgraphView,
    strategy: PeelStrategy,
) -> Result<PeelPartition, AnalysisError> {
    // Neither strategy is meaningful on zero vertices.
    if view.num_vertices() == 0 {
        return Ok(PeelPartition::new());
    }

    log::debug!(
        "peeling {} vertices with {:?} strategy",
        view.num_vertices(),
        strategy
    );

    match strategy {
        PeelStrategy::Exact => Ok(peel_exact(view)),
        PeelStrategy::WholeGraph => peel_whole_graph(view),
    }
}

fn peel_exact(view: &SubgraphView) -> PeelPartition {
    let core = algorithms::core_numbers(view);
    group_by_core(view, &core)
}

fn peel_whole_graph(view: &SubgraphView) -> Result<PeelPartition, AnalysisError> {
    let whole = SubgraphView::full(view.graph());
    let core = algorithms::core_numbers(&whole);

    let expected = view.graph().num_vertices();
    if core.len() != expected {
        return Err(AnalysisError::MissingDecomposition {
            expected,
            got: core.len(),
        });
    }

    Ok(group_by_core(view, &core))
}

fn group_by_core(view: &SubgraphView, core: &[u32]) -> PeelPartition {
    let mut partition = PeelPartition::new();
    for v in view.vertices() {
        partition.entry(core[v as usize]).or_insert_with(Vec::new).push(v);
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn triangle_with_tail() -> Graph {
        Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (2, 3)])
    }

    #[test]
    fn test_empty_graph_yields_empty_partition() {
        let g = Graph::from_edges(0, &[]);
        let view = SubgraphView::full(&g);

        assert!(peel(&view).unwrap().is_empty());
        assert!(peel_with_strategy(&view, PeelStrategy::Exact).unwrap().is_empty());
    }

    #[test]
    fn test_strategies_agree_on_unfiltered_view() {
        let g = triangle_with_tail();
        let view = SubgraphView::full(&g);

        let exact = peel_with_strategy(&view, PeelStrategy::Exact).unwrap();
        let fast = peel_with_strategy(&view, PeelStrategy::WholeGraph).unwrap();
        assert_eq!(exact, fast);
    }

    #[test]
    fn test_buckets_partition_the_vertex_set() {
        let g = triangle_with_tail();
        let view = SubgraphView::full(&g);

        let partition = peel(&view).unwrap();
        let mut all: Vec<u32> = partition.values().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_filtered_view_selects_exact_strategy() {
        let g = triangle_with_tail();
        // Keep only one triangle edge: both surviving vertices drop to core 1,
        // which the whole-graph numbers (core 2) would get wrong.
        let view = SubgraphView::induce(&g, &[0, 1], &[0]);

        let partition = peel(&view).unwrap();
        assert_eq!(partition, PeelPartition::from([(1, vec![0, 1])]));
    }

    #[test]
    fn test_whole_graph_strategy_groups_expected_cores() {
        let g = triangle_with_tail();
        let view = SubgraphView::full(&g);

        let partition = peel(&view).unwrap();
        assert_eq!(partition.get(&2), Some(&vec![0, 1, 2]));
        assert_eq!(partition.get(&1), Some(&vec![3]));
        // Vertex 4 is isolated.
        assert_eq!(partition.get(&0), Some(&vec![4]));
    }
}

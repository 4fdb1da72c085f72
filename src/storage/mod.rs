//! Analysis result persistence

use crate::error::AnalysisError;
use crate::graph::SubgraphView;
use crate::stats::StatisticsReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the adjacency list of the visible subgraph, one line per visible
/// vertex: the vertex followed by its visible neighbors.
///
/// NOTE: the listing is redundant for undirected graphs, every edge appears
/// on both endpoints' lines.
///
/// Returns a confirmation message on success.
pub fn save_adjacency(view: &SubgraphView, path: &Path) -> Result<String, AnalysisError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for v in view.vertices() {
        write!(writer, "{}", v)?;
        for neighbor in view.neighbors(v) {
            write!(writer, " {}", neighbor)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;

    log::info!("adjacency written to {}", path.display());
    Ok(format!("Adjacency saved as {}", path.display()))
}

/// Write a statistics report as pretty-printed JSON
pub fn save_report(report: &StatisticsReport, path: &Path) -> Result<(), AnalysisError> {
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
    std::fs::write(path, json)?;

    log::info!("statistics report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::stats;

    #[test]
    fn test_save_adjacency_two_vertices_one_edge() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let view = SubgraphView::induce(&g, &[1, 2], &[1]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adjacency.txt");
        let msg = save_adjacency(&view, &path).unwrap();
        assert!(msg.contains("Adjacency saved as"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["1 2", "2 1"]);
    }

    #[test]
    fn test_save_adjacency_full_graph_lists_all_neighbors() {
        let g = Graph::from_edges(3, &[(0, 1), (0, 2)]);
        let view = SubgraphView::full(&g);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adjacency.txt");
        save_adjacency(&view, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["0 1 2", "1 0", "2 0"]);
    }

    #[test]
    fn test_save_report_round_trips_as_json() {
        let g = Graph::from_edges(2, &[(0, 1)]);
        let report = stats::statistics(&SubgraphView::full(&g)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        save_report(&report, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["num_vertices"], 2);
        assert_eq!(value["num_edges"], 1);
        assert_eq!(value["vlogv"], "2.00");
    }
}

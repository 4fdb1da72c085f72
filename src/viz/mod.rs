//! Network-visualization export module
//!
//! Read-only transformations of graph and partition structures into
//! `{nodes: [...], edges: [...]}` records for a Vis.js-style renderer.
//! Nothing here touches the algorithmic core.

use crate::graph::SubgraphView;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashSet};

const AP_GROUP: u32 = 0;
const BCC_METANODE_GROUP: u32 = 1;

/// General network data: one node per visible vertex sized by degree, one
/// edge record per visible edge.
pub fn to_vis_json(view: &SubgraphView) -> Value {
    let nodes: Vec<Value> = view
        .vertices()
        .map(|v| {
            let label = view.graph().vertex_label(v);
            json!({
                "id": v,
                "label": label,
                "title": label,
                "value": view.degree(v),
                "group": 1,
            })
        })
        .collect();

    let edges: Vec<Value> = view
        .edges()
        .map(|(id, edge)| {
            json!({
                "id": id,
                "from": edge.source,
                "to": edge.target,
            })
        })
        .collect();

    json!({ "nodes": nodes, "edges": edges })
}

/// Network data for a block-cut tree: articulation points keep their vertex
/// label, block metanodes are labeled by their id and member count.
///
/// `counts` and `is_articulation` are indexed by vertex id, `edge_counts` by
/// edge id.
pub fn to_vis_json_bcc_tree(
    view: &SubgraphView,
    counts: &[u32],
    is_articulation: &[bool],
    edge_counts: &[u32],
) -> Value {
    let nodes: Vec<Value> = view
        .vertices()
        .map(|v| {
            let count = counts[v as usize];
            let (label, title, group) = if is_articulation[v as usize] {
                let label = view.graph().vertex_label(v);
                let title = format!("AP: {}", label);
                (label, title, AP_GROUP)
            } else {
                let title = format!("BCC: {} | Count: {}", v, count);
                (title.clone(), title, BCC_METANODE_GROUP)
            };
            json!({
                "id": v,
                "label": label,
                "title": title,
                "value": count,
                "group": group,
            })
        })
        .collect();

    let edges: Vec<Value> = view
        .edges()
        .map(|(id, edge)| {
            json!({
                "id": id,
                "from": edge.source,
                "to": edge.target,
                "value": edge_counts[id as usize],
            })
        })
        .collect();

    json!({ "nodes": nodes, "edges": edges })
}

/// Network data with cluster grouping: landmark vertices render as stars
/// with a thicker border, edges carry their spine/branch category.
///
/// `cluster_assignment` is indexed by vertex id; `landmarks` holds vertex
/// ids, `spine` and `branches` hold edge ids.
pub fn to_vis_json_cluster_map(
    view: &SubgraphView,
    cluster_assignment: &[u32],
    landmarks: &HashSet<u32>,
    spine: &HashSet<u32>,
    branches: &HashSet<u32>,
) -> Value {
    let nodes: Vec<Value> = view
        .vertices()
        .map(|v| {
            let label = view.graph().vertex_label(v);
            let (shape, border_width) = if landmarks.contains(&v) {
                ("star", 2)
            } else {
                ("dot", 1)
            };
            json!({
                "id": v,
                "label": label,
                "title": label,
                "value": view.degree(v),
                "group": cluster_assignment[v as usize],
                "shape": shape,
                "borderWidth": border_width,
            })
        })
        .collect();

    let edges: Vec<Value> = view
        .edges()
        .map(|(id, edge)| {
            let category = if spine.contains(&id) {
                "spine"
            } else if branches.contains(&id) {
                "branch"
            } else {
                "none"
            };
            json!({
                "id": id,
                "from": edge.source,
                "to": edge.target,
                "category": category,
            })
        })
        .collect();

    json!({ "nodes": nodes, "edges": edges })
}

/// Summary of one metanode of a children metagraph
#[derive(Debug, Clone)]
pub struct MetanodeInfo {
    pub fully_qualified_label: String,
    pub short_label: String,
    pub num_vertices: usize,
    pub num_edges: usize,
}

/// Network data for a children metagraph: one node per metanode sized by
/// its vertex count, one edge per metanode pair weighted by the number of
/// underlying cross edges.
pub fn to_vis_json_metagraph(
    metanodes: &BTreeMap<u32, MetanodeInfo>,
    cross_edges: &[((u32, u32), Vec<u32>)],
) -> Value {
    let nodes: Vec<Value> = metanodes
        .iter()
        .map(|(&id, info)| {
            let title = format!(
                "<p>{}<br>|V|: {}<br>|E|: {}",
                info.fully_qualified_label, info.num_vertices, info.num_edges
            );
            json!({
                "id": id,
                "label": info.short_label,
                "title": title,
                "value": info.num_vertices,
            })
        })
        .collect();

    let edges: Vec<Value> = cross_edges
        .iter()
        .enumerate()
        .map(|(idx, ((from, to), edge_indices))| {
            let value = edge_indices.len();
            json!({
                "id": idx,
                "from": from,
                "to": to,
                "value": value,
                "title": format!("meta-edge size: {}", value),
            })
        })
        .collect();

    json!({ "nodes": nodes, "edges": edges })
}

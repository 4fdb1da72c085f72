//! Graph algorithms backing the statistics primitives

use crate::graph::view::SubgraphView;
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};

/// Vertex sets below this size skip the parallel code paths
const PARALLEL_THRESHOLD: usize = 1000;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of vertex i)
    parent: Vec<u32>,

    /// Size of the set rooted at each index (for union by size)
    size: Vec<u32>,
}

impl DisjointSets {
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count as u32).collect(),
            size: vec![1; count],
        }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut current = x;
        while self.parent[current as usize] != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        // Attach the smaller tree under the root of the larger one
        let (small, large) = if self.size[root_x as usize] < self.size[root_y as usize] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small as usize] = large;
        self.size[large as usize] += self.size[small as usize];
    }
}

/// Degree histogram of the visible vertices: degree bin -> vertex count,
/// sorted by bin value ascending. Only nonzero bins appear.
pub fn vertex_hist(view: &SubgraphView) -> BTreeMap<usize, usize> {
    let vertices: Vec<u32> = view.vertices().collect();

    let degrees: Vec<usize> = if vertices.len() < PARALLEL_THRESHOLD {
        vertices.iter().map(|&v| view.degree(v)).collect()
    } else {
        vertices.par_iter().map(|&v| view.degree(v)).collect()
    };

    degrees.into_iter().counts().into_iter().collect()
}

/// Sizes of the connected components among the visible vertices.
///
/// Isolated visible vertices each form a component of size 1.
pub fn label_components(view: &SubgraphView) -> Vec<usize> {
    let mut sets = DisjointSets::new(view.graph().num_vertices());
    for (_, edge) in view.edges() {
        sets.union(edge.source, edge.target);
    }

    let mut size_by_root: HashMap<u32, usize> = HashMap::new();
    for v in view.vertices() {
        let root = sets.find(v);
        *size_by_root.entry(root).or_default() += 1;
    }

    size_by_root.into_values().collect()
}

/// Core number of every visible vertex, computed by min-degree peeling
/// (bucket-queue degeneracy ordering).
///
/// Returns a vector indexed by vertex identifier over the whole graph;
/// entries for vertices outside the view are 0 and carry no meaning. The
/// computation only ever touches visible vertices and edges, so it is
/// correct for filtered views.
pub fn core_numbers(view: &SubgraphView) -> Vec<u32> {
    let node_count = view.graph().num_vertices();
    let mut core = vec![0u32; node_count];

    let vertices: Vec<u32> = view.vertices().collect();
    if vertices.is_empty() {
        return core;
    }

    let mut degree = vec![0u32; node_count];
    let mut max_degree = 0usize;
    for &v in &vertices {
        let d = view.degree(v);
        degree[v as usize] = d as u32;
        max_degree = max_degree.max(d);
    }

    // Counting sort of the visible vertices by degree. `bin[d]` becomes the
    // start offset of the block holding degree-d vertices.
    let mut bin = vec![0usize; max_degree + 1];
    for &v in &vertices {
        bin[degree[v as usize] as usize] += 1;
    }
    let mut start = 0;
    for slot in bin.iter_mut() {
        let count = *slot;
        *slot = start;
        start += count;
    }

    let mut vert = vec![0u32; vertices.len()];
    let mut pos = vec![0usize; node_count];
    for &v in &vertices {
        let d = degree[v as usize] as usize;
        vert[bin[d]] = v;
        pos[v as usize] = bin[d];
        bin[d] += 1;
    }
    for d in (1..=max_degree).rev() {
        bin[d] = bin[d - 1];
    }
    bin[0] = 0;

    // Peel in degree order. Removing a vertex freezes its core number at its
    // current degree; neighbors above the current level slide one bucket
    // down, keeping `vert` sorted by the remaining degrees.
    for i in 0..vert.len() {
        let v = vert[i];
        core[v as usize] = degree[v as usize];

        for u in view.neighbors(v) {
            if degree[u as usize] > degree[v as usize] {
                let du = degree[u as usize] as usize;
                let pu = pos[u as usize];
                let pw = bin[du];
                let w = vert[pw];
                if u != w {
                    vert[pu] = w;
                    pos[w as usize] = pu;
                    vert[pw] = u;
                    pos[u as usize] = pw;
                }
                bin[du] += 1;
                degree[u as usize] -= 1;
            }
        }
    }

    core
}

//! Kruskal's minimum spanning tree over a disjoint-set forest.

use crate::matrix::{DistanceMatrix, WeightedEdge};

/// Disjoint-set forest with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of `v`'s set. Compresses the path on the way back.
    pub fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = v;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns false if they were already
    /// the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        true
    }
}

/// Minimum spanning tree of the matrix read as an undirected graph.
///
/// Only `(i, j)` with `i < j` is considered, weighted by `distance[i][j]`.
/// The stable sort keeps row-major order among equal weights, which makes
/// the tree deterministic. Returns `n - 1` edges for `n >= 1`.
pub fn minimum_spanning_tree(matrix: &DistanceMatrix) -> Vec<WeightedEdge> {
    let n = matrix.len();
    let mut edges: Vec<WeightedEdge> = matrix
        .to_edge_list()
        .into_iter()
        .filter(|e| e.u < e.v)
        .collect();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    for edge in edges {
        if sets.union(edge.u, edge.v) {
            tree.push(edge);
            if tree.len() + 1 == n {
                break;
            }
        }
    }
    tree
}

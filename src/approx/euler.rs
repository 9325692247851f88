//! Doubled spanning tree and Eulerian circuit extraction.

use crate::matrix::WeightedEdge;

/// Undirected multigraph holding every spanning-tree edge twice.
///
/// Stored as an `n x n` multiplicity table so every degree is even by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubledTree {
    n: usize,
    multiplicity: Vec<u32>,
}

impl DoubledTree {
    pub fn new(n: usize, tree: &[WeightedEdge]) -> Self {
        let mut multiplicity = vec![0u32; n * n];
        for e in tree {
            multiplicity[e.u * n + e.v] += 2;
            multiplicity[e.v * n + e.u] += 2;
        }
        Self { n, multiplicity }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of edge copies incident to `v`.
    pub fn degree(&self, v: usize) -> u32 {
        self.multiplicity[v * self.n..(v + 1) * self.n].iter().sum()
    }

    /// Number of undirected edge copies.
    pub fn edge_count(&self) -> usize {
        self.multiplicity.iter().map(|&m| m as usize).sum::<usize>() / 2
    }
}

/// Closed walk from vertex 0 that uses every edge copy of `graph` exactly
/// once. The walk starts and ends at 0, so it holds `edge_count + 1`
/// entries.
///
/// Works on a private copy; `graph` is left untouched. At each step the
/// lowest-indexed neighbour with a remaining copy is taken.
pub fn eulerian_circuit(graph: &DoubledTree) -> Vec<usize> {
    let n = graph.n;
    if n == 0 {
        return Vec::new();
    }
    let mut remaining = graph.multiplicity.clone();
    // first column that may still hold an unused copy, per row
    let mut cursor = vec![0usize; n];

    let mut stack = vec![0usize];
    let mut walk = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&v) = stack.last() {
        let row = v * n;
        while cursor[v] < n && remaining[row + cursor[v]] == 0 {
            cursor[v] += 1;
        }
        if cursor[v] == n {
            walk.push(v);
            stack.pop();
        } else {
            let u = cursor[v];
            remaining[row + u] -= 1;
            remaining[u * n + v] -= 1;
            stack.push(u);
        }
    }
    walk
}

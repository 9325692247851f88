//! Turning an Eulerian walk into a Hamiltonian cycle.

use crate::algorithm::Cycle;
use crate::matrix::DistanceMatrix;

/// Scans `walk` circularly from `offset`, keeping the first occurrence of
/// each vertex until all `n` have been seen.
///
/// A walk that misses some vertex cannot come out of a connected doubled
/// tree; if it happens anyway the missing vertices are appended in
/// ascending order so the result is still a permutation.
pub fn shortcut_from(walk: &[usize], offset: usize, n: usize) -> Cycle {
    let mut visited = vec![false; n];
    let mut cycle = Vec::with_capacity(n);
    let len = walk.len();
    for i in 0..len {
        if cycle.len() == n {
            break;
        }
        let v = walk[(offset + i) % len];
        if !visited[v] {
            visited[v] = true;
            cycle.push(v);
        }
    }
    if cycle.len() < n {
        cycle.extend((0..n).filter(|&v| !visited[v]));
    }
    cycle
}

/// Tries every offset into `walk` and returns the cheapest shortcut cycle.
/// Equal costs keep the smallest offset.
pub fn best_starting_node(walk: &[usize], matrix: &DistanceMatrix) -> Cycle {
    let n = matrix.len();
    let mut best = shortcut_from(walk, 0, n);
    let mut best_cost = matrix.cycle_cost(&best);
    let mut best_offset = 0;
    for offset in 1..walk.len() {
        let candidate = shortcut_from(walk, offset, n);
        let cost = matrix.cycle_cost(&candidate);
        if cost < best_cost {
            best = candidate;
            best_cost = cost;
            best_offset = offset;
        }
    }
    log::debug!(
        "shortcut kept offset {best_offset} of {} (cost {best_cost})",
        walk.len()
    );
    best
}

/// Drops immediate back-and-forth repetitions: whenever `a, b, a, b`
/// appears, the inner `b, a` is skipped. Every vertex of `walk` is still
/// present afterwards.
pub fn collapse_backtracks(walk: &[usize]) -> Vec<usize> {
    let Some(&first) = walk.first() else {
        return Vec::new();
    };
    let mut shorter = Vec::with_capacity(walk.len());
    shorter.push(first);
    let mut i = 1;
    while i < walk.len() {
        if i + 2 < walk.len() && walk[i + 1] == walk[i - 1] && walk[i + 2] == walk[i] {
            i += 2;
            continue;
        }
        shorter.push(walk[i]);
        i += 1;
    }
    shorter
}

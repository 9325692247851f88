//! Cost matrices and the conversions between graph representations.
//!
//! A [`DistanceMatrix`] holds `distance[i][j]`, the cost of placing item
//! `j` immediately after item `i`. Rows are stored as given, so a ragged
//! matrix can be represented and later rejected by
//! [`DistanceMatrix::is_square`] rather than at construction time.
//!
//! # Affinity vs. distance
//!
//! Every algorithm in this crate minimizes cost. An affinity matrix (larger
//! means "keep these together") must go through
//! [`DistanceMatrix::invert_values`] first.

/// Value an inverted zero affinity maps to. Large and finite so that sums
/// over a cycle stay comparable.
pub const INVERTED_ZERO: f32 = 1e9;

/// A directed, weighted edge `u -> v`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    pub u: usize,
    pub v: usize,
    pub weight: f32,
}

impl WeightedEdge {
    pub fn new(u: usize, v: usize, weight: f32) -> Self {
        Self { u, v, weight }
    }
}

/// Square (or, before validation, possibly ragged) matrix of pairwise costs.
///
/// The diagonal is ignored by every algorithm.
///
/// # Examples
///
/// ```
/// use u_tour::matrix::DistanceMatrix;
///
/// let m = DistanceMatrix::from([
///     [0.0, 1.0, 2.0],
///     [1.0, 0.0, 4.0],
///     [1.0, 10.0, 0.0],
/// ]);
/// assert_eq!(m.len(), 3);
/// assert!((m.cycle_cost(&[0, 1, 2]) - 6.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    rows: Vec<Vec<f32>>,
}

impl DistanceMatrix {
    /// Wraps the given rows without validating them.
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// Builds an `n x n` matrix from a cost function.
    pub fn from_fn<F: FnMut(usize, usize) -> f32>(n: usize, mut f: F) -> Self {
        let rows = (0..n).map(|i| (0..n).map(|j| f(i, j)).collect()).collect();
        Self { rows }
    }

    /// Converts a directed edge list back into an `n x n` matrix.
    ///
    /// Pairs with no edge are left at `0.0`. Edges with an endpoint
    /// outside `0..n` are skipped.
    pub fn from_edge_list(edges: &[WeightedEdge], n: usize) -> Self {
        let mut rows = vec![vec![0.0f32; n]; n];
        for e in edges {
            if e.u < n && e.v < n {
                rows[e.u][e.v] = e.weight;
            }
        }
        Self { rows }
    }

    /// Number of rows (the item count for a square matrix).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f32>> {
        self.rows
    }

    /// Cost of placing `j` right after `i`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.rows[i][j]
    }

    /// True when every row has exactly `len()` entries.
    pub fn is_square(&self) -> bool {
        let n = self.rows.len();
        self.rows.iter().all(|row| row.len() == n)
    }

    /// True when every off-diagonal entry is `>= 0`. NaN counts as negative.
    pub fn is_non_negative(&self) -> bool {
        self.rows.iter().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, &x)| i == j || x >= 0.0)
        })
    }

    /// Base acceptance check shared by every algorithm: square, non-empty
    /// and non-negative off the diagonal.
    pub fn is_valid_input(&self) -> bool {
        !self.is_empty() && self.is_square() && self.is_non_negative()
    }

    /// True when `distance[i][j] == distance[j][i]` for every pair.
    ///
    /// Assumes the matrix is square.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Returns the first triple `(i, j, k)` of distinct indices for which
    /// `distance[i][j] > distance[i][k] + distance[k][j]`, scanning in
    /// row-major order.
    ///
    /// Assumes the matrix is square. O(n^3).
    pub fn find_triangle_violation(&self) -> Option<(usize, usize, usize)> {
        let n = self.len();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let direct = self.rows[i][j];
                for k in 0..n {
                    if k == i || k == j {
                        continue;
                    }
                    if direct > self.rows[i][k] + self.rows[k][j] {
                        return Some((i, j, k));
                    }
                }
            }
        }
        None
    }

    pub fn satisfies_triangle_inequality(&self) -> bool {
        self.find_triangle_violation().is_none()
    }

    /// Every ordered pair `(i, j)` with `i != j` as one directed edge,
    /// row-major.
    pub fn to_edge_list(&self) -> Vec<WeightedEdge> {
        let mut edges = Vec::with_capacity(self.len() * self.len().saturating_sub(1));
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                if i != j {
                    edges.push(WeightedEdge::new(i, j, w));
                }
            }
        }
        edges
    }

    /// Turns an affinity matrix into a cost matrix in place: `x := 1/x`,
    /// with zero mapped to [`INVERTED_ZERO`]. The diagonal is inverted too.
    pub fn invert_values(&mut self) -> &mut Self {
        for x in self.rows.iter_mut().flat_map(|row| row.iter_mut()) {
            *x = if *x != 0.0 { 1.0 / *x } else { INVERTED_ZERO };
        }
        self
    }

    /// Closed-tour cost: `sum distance[c[i]][c[(i + 1) % n]]`.
    ///
    /// The empty cycle costs `0.0`; a single item costs its own diagonal
    /// entry, which is conventionally zero.
    pub fn cycle_cost(&self, cycle: &[usize]) -> f32 {
        let n = cycle.len();
        if n == 0 {
            return 0.0;
        }
        let mut total = 0.0f32;
        for i in 1..n {
            total += self.rows[cycle[i - 1]][cycle[i]];
        }
        total + self.rows[cycle[n - 1]][cycle[0]]
    }

    /// True when `cycle` is a permutation of `0..len()`.
    pub fn is_valid_cycle(&self, cycle: &[usize]) -> bool {
        is_permutation(cycle, self.len())
    }
}

impl From<Vec<Vec<f32>>> for DistanceMatrix {
    fn from(rows: Vec<Vec<f32>>) -> Self {
        Self::new(rows)
    }
}

impl<const N: usize> From<[[f32; N]; N]> for DistanceMatrix {
    fn from(rows: [[f32; N]; N]) -> Self {
        Self::new(rows.iter().map(|r| r.to_vec()).collect())
    }
}

/// True when `cycle` holds every index in `0..n` exactly once.
pub fn is_permutation(cycle: &[usize], n: usize) -> bool {
    if cycle.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in cycle {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from([[0.0, 1.0, 2.0], [1.0, 0.0, 4.0], [1.0, 10.0, 0.0]])
    }

    #[test]
    fn test_edge_list_skips_diagonal() {
        let edges = sample().to_edge_list();
        assert_eq!(edges.len(), 6);
        assert!(edges.iter().all(|e| e.u != e.v));
        assert_eq!(edges[0], WeightedEdge::new(0, 1, 1.0));
        assert_eq!(edges[5], WeightedEdge::new(2, 1, 10.0));
    }

    #[test]
    fn test_edge_list_round_trip() {
        let m = sample();
        let back = DistanceMatrix::from_edge_list(&m.to_edge_list(), 3);
        assert_eq!(back, m, "diagonal is zero so the round trip is exact");
    }

    #[test]
    fn test_from_edge_list_defaults_missing_to_zero() {
        let m = DistanceMatrix::from_edge_list(&[WeightedEdge::new(0, 2, 5.0)], 3);
        assert_eq!(m.get(0, 2), 5.0);
        assert_eq!(m.get(2, 0), 0.0);
        assert_eq!(m.get(1, 2), 0.0);
    }

    #[test]
    fn test_invert_values() {
        let mut m = DistanceMatrix::from([[0.0, 4.0], [0.5, 0.0]]);
        m.invert_values();
        assert_eq!(m.get(0, 0), INVERTED_ZERO);
        assert_eq!(m.get(0, 0), 1e9);
        assert!((m.get(0, 1) - 0.25).abs() < 1e-7);
        assert!((m.get(1, 0) - 2.0).abs() < 1e-7);
    }

    #[test]
    fn test_cycle_cost() {
        let m = sample();
        assert!((m.cycle_cost(&[0, 1, 2]) - 6.0).abs() < 1e-6);
        assert!((m.cycle_cost(&[1, 2, 0]) - 6.0).abs() < 1e-6);
        assert_eq!(m.cycle_cost(&[]), 0.0);
        assert_eq!(m.cycle_cost(&[2]), 0.0);
    }

    #[test]
    fn test_validity_checks() {
        assert!(sample().is_valid_input());
        assert!(!DistanceMatrix::default().is_valid_input());
        assert!(!DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]).is_valid_input());
        assert!(!DistanceMatrix::from([[0.0, -1.0], [1.0, 0.0]]).is_valid_input());
        assert!(!DistanceMatrix::from([[0.0, f32::NAN], [1.0, 0.0]]).is_valid_input());
        // diagonal is ignored
        assert!(DistanceMatrix::from([[-0.1, 1.2], [1.2, 0.0]]).is_valid_input());
    }

    #[test]
    fn test_symmetry_and_triangle() {
        let metric = DistanceMatrix::from([[0.0, 1.0, 2.0], [1.0, 0.0, 2.0], [2.0, 2.0, 0.0]]);
        assert!(metric.is_symmetric());
        assert!(metric.satisfies_triangle_inequality());

        let broken = DistanceMatrix::from([[0.0, 10.0, 1.0], [10.0, 0.0, 1.0], [1.0, 1.0, 0.0]]);
        assert_eq!(broken.find_triangle_violation(), Some((0, 1, 2)));
        assert!(!sample().is_symmetric());
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[], 0));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }
}

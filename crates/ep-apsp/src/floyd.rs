//! Floyd–Warshall all-pairs shortest distances.
//!
//! `dist` starts at 0 on the diagonal, the edge weight for declared edges
//! (both directions), and `+∞` elsewhere.  Then for every intermediate `k`,
//! outermost, every pair is relaxed through `k`.  O(n³) time, O(n²) memory.

use tracing::debug;

use crate::WeightedGraph;

/// Largest finite off-diagonal distance in a row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RowMax {
    Finite(f64),
    /// The node reaches nothing but itself.
    NoFiniteNeighbors,
}

/// Dense, symmetric `n × n` distance matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    dist:   Vec<f64>,
}

impl DistanceMatrix {
    pub fn compute(graph: &WeightedGraph) -> Self {
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n * n];
        for i in 0..n {
            dist[i * n + i] = 0.0;
        }
        for &(i, j, w) in graph.edges() {
            // Parallel declarations keep the lightest; self-loops never beat 0.
            if w < dist[i * n + j] {
                dist[i * n + j] = w;
                dist[j * n + i] = w;
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let via = d_ik + dist[k * n + j];
                    if via < dist[i * n + j] {
                        dist[i * n + j] = via;
                    }
                }
            }
        }

        debug!(nodes = n, edges = graph.edges().len(), "all-pairs distances computed");
        Self { labels: graph.labels().to_vec(), dist }
    }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.dist[i * self.len() + j]
    }

    /// Distance between two labels, `None` if either is unknown.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.get(i, j))
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.len();
        &self.dist[i * n..(i + 1) * n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.len()).map(move |i| self.row(i))
    }

    pub fn row_max(&self, i: usize) -> RowMax {
        self.row(i)
            .iter()
            .enumerate()
            .filter(|&(j, d)| j != i && d.is_finite())
            .map(|(_, &d)| d)
            .reduce(f64::max)
            .map_or(RowMax::NoFiniteNeighbors, RowMax::Finite)
    }

    pub fn row_maxima(&self) -> Vec<RowMax> {
        (0..self.len()).map(|i| self.row_max(i)).collect()
    }
}

//! Vietoris-Rips Filtration Construction
//!
//! The Vietoris-Rips complex VR_ε(X) is a simplicial complex where:
//! - 0-simplices are the points in X
//! - A k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ ε for all i,j
//!
//! Rather than materializing the complex at discrete ε steps, this module
//! enumerates every simplex together with the exact filtration value at which
//! it appears (the largest pairwise distance among its vertices). The
//! persistence stage consumes that filtered list directly.
//!
//! The distance matrix is O(n²) and simplex enumeration grows steeply with
//! the clique dimension; point clouds beyond a few hundred points make this
//! the dominant cost of the whole pipeline.

use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;

/// A simplex with the filtration value at which it enters the complex.
#[derive(Debug, Clone)]
pub(crate) struct FilteredSimplex {
    /// Vertex indices, strictly ascending.
    pub vertices: Vec<usize>,
    /// Largest pairwise distance among the vertices (0 for points).
    pub birth: f64,
}

impl FilteredSimplex {
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }
}

fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Compute the full Euclidean pairwise distance matrix.
///
/// Rows fan out over a rayon pool; the result is identical to a serial
/// computation regardless of thread count.
pub fn distance_matrix(points: &Array2<f64>) -> Array2<f64> {
    let n = points.nrows();
    let data: Vec<f64> = (0..n * n)
        .into_par_iter()
        .map(|idx| {
            let (i, j) = (idx / n, idx % n);
            if i == j {
                0.0
            } else {
                euclidean(points.row(i), points.row(j))
            }
        })
        .collect();

    // n*n elements by construction
    Array2::from_shape_vec((n, n), data).expect("distance matrix shape")
}

/// Largest entry of a distance matrix.
pub fn max_distance(distances: &Array2<f64>) -> f64 {
    distances.iter().copied().fold(0.0, f64::max)
}

/// Enumerate all simplices of dimension ≤ `max_dim` with birth ≤ `max_epsilon`.
///
/// Enumeration proceeds by clique expansion: each (k-1)-simplex is extended
/// with every vertex above its largest index whose distance to all current
/// vertices is within `max_epsilon`. The extended simplex is born at the
/// maximum of the parent's birth and the new edge lengths.
pub(crate) fn build_filtration(
    distances: &Array2<f64>,
    max_epsilon: f64,
    max_dim: usize,
) -> Vec<FilteredSimplex> {
    let n = distances.nrows();

    let mut all: Vec<FilteredSimplex> = (0..n)
        .map(|i| FilteredSimplex {
            vertices: vec![i],
            birth: 0.0,
        })
        .collect();

    if max_dim == 0 {
        return all;
    }

    let mut frontier: Vec<FilteredSimplex> = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            let d = distances[[i, j]];
            if d <= max_epsilon {
                frontier.push(FilteredSimplex {
                    vertices: vec![i, j],
                    birth: d,
                });
            }
        }
    }

    let mut dim = 1;
    while dim < max_dim && !frontier.is_empty() {
        all.extend(frontier.iter().cloned());

        let next: Vec<FilteredSimplex> = frontier
            .par_iter()
            .flat_map_iter(|simplex| {
                let last = *simplex.vertices.last().unwrap_or(&0);
                let mut extensions = Vec::new();
                for v in last + 1..n {
                    let mut birth = simplex.birth;
                    let mut ok = true;
                    for &u in &simplex.vertices {
                        let d = distances[[u, v]];
                        if d > max_epsilon {
                            ok = false;
                            break;
                        }
                        birth = birth.max(d);
                    }
                    if ok {
                        let mut vertices = simplex.vertices.clone();
                        vertices.push(v);
                        extensions.push(FilteredSimplex { vertices, birth });
                    }
                }
                extensions
            })
            .collect();

        frontier = next;
        dim += 1;
    }
    all.extend(frontier);

    all
}

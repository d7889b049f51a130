//! Persistent Homology via Boundary-Matrix Reduction
//!
//! Computes exact persistence diagrams from a Vietoris-Rips filtration using
//! the standard algorithm:
//!
//! 1. Enumerate all filtered simplices up to one dimension above the highest
//!    requested homology dimension
//! 2. Sort simplices by (birth, dimension, lexicographic vertices)
//! 3. Reduce the Z/2 boundary matrix by column additions
//! 4. Read persistence pairs off the reduced matrix pivots
//!
//! A pair (creator, destroyer) yields one interval [birth, death); unpaired
//! creators are essential features with infinite death. Long-lived intervals
//! (large death - birth) represent robust topological structure; short-lived
//! ones are usually sampling noise.
//!
//! ## Reference
//!
//! Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//! and Simplification". Discrete & Computational Geometry.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::embedding::PointCloud;
use crate::error::PipelineError;
use crate::topology::vietoris_rips::{build_filtration, distance_matrix, max_distance};

/// A persistence interval [birth, death) in one homology dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersistenceInterval {
    pub birth: f64,
    pub death: f64,
    pub dimension: usize,
}

impl PersistenceInterval {
    pub fn new(birth: f64, death: f64, dimension: usize) -> Self {
        Self {
            birth,
            death,
            dimension,
        }
    }

    /// Lifetime of the feature.
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    /// Essential features never die within the filtration.
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

/// Persistence diagram: all intervals detected across the requested
/// homology dimensions. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistenceDiagram {
    pub intervals: Vec<PersistenceInterval>,
    /// Homology dimensions this diagram was computed for.
    pub homology_dimensions: Vec<usize>,
}

impl PersistenceDiagram {
    /// All intervals in dimension d.
    pub fn dim(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals.iter().filter(|i| i.dimension == d).collect()
    }

    /// Finite intervals in dimension d.
    pub fn finite_intervals(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && !i.is_essential())
            .collect()
    }

    /// Number of finite intervals in dimension d.
    pub fn count(&self, d: usize) -> usize {
        self.finite_intervals(d).len()
    }

    /// Number of essential features in dimension d.
    pub fn essential_count(&self, d: usize) -> usize {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && i.is_essential())
            .count()
    }

    /// Longest finite lifetime in dimension d.
    pub fn max_persistence(&self, d: usize) -> f64 {
        self.finite_intervals(d)
            .iter()
            .map(|i| i.persistence())
            .fold(0.0, f64::max)
    }

    /// Sum of finite lifetimes in dimension d.
    pub fn total_persistence(&self, d: usize) -> f64 {
        self.finite_intervals(d).iter().map(|i| i.persistence()).sum()
    }

    /// Shannon entropy over normalized finite lifetimes in dimension d.
    ///
    /// H = -Σᵢ pᵢ ln(pᵢ) with pᵢ = lᵢ / Σⱼ lⱼ. Zero for empty or
    /// single-interval diagrams.
    pub fn persistence_entropy(&self, d: usize) -> f64 {
        let lifetimes: Vec<f64> = self
            .finite_intervals(d)
            .iter()
            .map(|i| i.persistence())
            .filter(|&l| l > 0.0)
            .collect();

        let total: f64 = lifetimes.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }

        let mut entropy = 0.0;
        for l in lifetimes {
            let p = l / total;
            entropy -= p * p.ln();
        }
        entropy
    }
}

/// Sparse Z/2 column of the boundary matrix.
#[derive(Debug, Clone)]
struct SparseColumn {
    rows: BTreeSet<usize>,
}

impl SparseColumn {
    fn new() -> Self {
        Self {
            rows: BTreeSet::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest non-zero row index (the pivot).
    fn low(&self) -> Option<usize> {
        self.rows.iter().next_back().copied()
    }

    /// Symmetric difference: column addition over Z/2.
    fn add_assign(&mut self, other: &SparseColumn) {
        for &row in &other.rows {
            if !self.rows.remove(&row) {
                self.rows.insert(row);
            }
        }
    }
}

/// Compute the persistence diagram of a point cloud across the requested
/// homology dimensions, with the filtration running to the maximum pairwise
/// distance (all finite features resolve; one essential H₀ remains).
///
/// Fails with `DegenerateInput` for clouds of fewer than 2 points.
///
/// # Panics
///
/// Panics if `homology_dimensions` is empty.
pub fn compute_persistence(
    cloud: &PointCloud,
    homology_dimensions: &[usize],
) -> Result<PersistenceDiagram, PipelineError> {
    if cloud.n_points() < 2 {
        return Err(PipelineError::DegenerateInput(cloud.n_points()));
    }
    let distances = distance_matrix(cloud.coords());
    let max_epsilon = max_distance(&distances);
    persistence_from_distances(&distances, max_epsilon, homology_dimensions)
}

/// As [`compute_persistence`], but with an explicit filtration cutoff.
/// Features still alive at `max_epsilon` are reported as essential.
pub fn compute_persistence_with(
    cloud: &PointCloud,
    homology_dimensions: &[usize],
    max_epsilon: f64,
) -> Result<PersistenceDiagram, PipelineError> {
    if cloud.n_points() < 2 {
        return Err(PipelineError::DegenerateInput(cloud.n_points()));
    }
    let distances = distance_matrix(cloud.coords());
    persistence_from_distances(&distances, max_epsilon, homology_dimensions)
}

fn persistence_from_distances(
    distances: &ndarray::Array2<f64>,
    max_epsilon: f64,
    homology_dimensions: &[usize],
) -> Result<PersistenceDiagram, PipelineError> {
    assert!(
        !homology_dimensions.is_empty(),
        "homology_dimensions must be non-empty"
    );
    let mut requested: Vec<usize> = homology_dimensions.to_vec();
    requested.sort_unstable();
    requested.dedup();
    let max_hom_dim = *requested.last().unwrap_or(&0);

    // Simplices one dimension above the top homology dimension are needed
    // to destroy its features.
    let mut simplices = build_filtration(distances, max_epsilon, max_hom_dim + 1);

    simplices.sort_by(|a, b| {
        a.birth
            .partial_cmp(&b.birth)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.dimension().cmp(&b.dimension()))
            .then(a.vertices.cmp(&b.vertices))
    });

    let mut simplex_index: HashMap<Vec<usize>, usize> = HashMap::with_capacity(simplices.len());
    for (idx, s) in simplices.iter().enumerate() {
        simplex_index.insert(s.vertices.clone(), idx);
    }

    let m = simplices.len();
    let mut columns: Vec<SparseColumn> = Vec::with_capacity(m);
    let mut low_to_col: HashMap<usize, usize> = HashMap::new();

    for simplex in &simplices {
        let mut boundary = SparseColumn::new();

        if simplex.dimension() > 0 {
            // ∂[v₀,...,vₖ] = Σᵢ [v₀,...,v̂ᵢ,...,vₖ] over Z/2
            for i in 0..simplex.vertices.len() {
                let mut face = simplex.vertices.clone();
                face.remove(i);
                if let Some(&face_idx) = simplex_index.get(&face) {
                    if !boundary.rows.remove(&face_idx) {
                        boundary.rows.insert(face_idx);
                    }
                }
            }
        }

        while let Some(low_idx) = boundary.low() {
            match low_to_col.get(&low_idx) {
                Some(&pivot_col) => boundary.add_assign(&columns[pivot_col]),
                None => break,
            }
        }

        if let Some(low_idx) = boundary.low() {
            low_to_col.insert(low_idx, columns.len());
        }
        columns.push(boundary);
    }

    let mut intervals = Vec::new();
    let mut paired = vec![false; m];

    for (col_idx, column) in columns.iter().enumerate() {
        if let Some(low_idx) = column.low() {
            paired[low_idx] = true;
            paired[col_idx] = true;

            let birth_simplex = &simplices[low_idx];
            let death_simplex = &simplices[col_idx];
            let d = birth_simplex.dimension();

            // Zero-persistence pairs carry no information
            if death_simplex.birth > birth_simplex.birth && requested.contains(&d) {
                intervals.push(PersistenceInterval::new(
                    birth_simplex.birth,
                    death_simplex.birth,
                    d,
                ));
            }
        }
    }

    // Unpaired creators are essential. Simplices at the truncation dimension
    // are excluded: their homology was never given destroyers.
    for (idx, simplex) in simplices.iter().enumerate() {
        let d = simplex.dimension();
        if !paired[idx] && columns[idx].is_zero() && d <= max_hom_dim && requested.contains(&d) {
            intervals.push(PersistenceInterval::new(simplex.birth, f64::INFINITY, d));
        }
    }

    Ok(PersistenceDiagram {
        intervals,
        homology_dimensions: requested,
    })
}

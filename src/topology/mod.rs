//! Topology Module: Vietoris-Rips Filtration and Persistent Homology
//!
//! For an embedded point cloud X we construct the Vietoris-Rips filtration
//! VR_ε(X) indexed by the scale parameter ε and track the birth and death of
//! topological features (connected components, loops, voids) across it.
//!
//! The computation is exact: simplices carry their true filtration values and
//! the persistence pairs come from standard Z/2 boundary-matrix reduction, so
//! the diagrams match those of Ripser-style reference implementations.

mod persistence;
mod vietoris_rips;

pub use persistence::{
    compute_persistence, compute_persistence_with, PersistenceDiagram, PersistenceInterval,
};
pub use vietoris_rips::{distance_matrix, max_distance};

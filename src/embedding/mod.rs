//! Embedding Module: Phase-Space Reconstruction
//!
//! Reconstructs a trajectory in a higher-dimensional phase space from a
//! single scalar time series via time-delay (Takens) embedding. A periodic
//! signal traces out a closed loop in the reconstructed space; that loop is
//! what the persistence stage later detects as a long-lived H₁ feature.

mod takens;

pub use takens::{PointCloud, TakensEmbedding};

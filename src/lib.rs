//! # ecg-topology
//!
//! Topological analysis of ECG time series: Takens embedding and
//! Vietoris-Rips persistent homology.
//!
//! ## Pipeline
//!
//! A recording flows one way through three stages, each owning its output:
//!
//! 1. **Signal loader**: extracts the "ECG" column of a tabular file into an
//!    ordered sequence of samples
//! 2. **Takens embedder**: reconstructs a phase-space trajectory from the
//!    scalar series by forming tuples of time-delayed samples
//!    (default dimension 3, delay 8, stride 10)
//! 3. **Persistence computer**: builds the Vietoris-Rips filtration over the
//!    embedded cloud and extracts exact (birth, death) pairs per homology
//!    dimension via boundary-matrix reduction
//!
//! ## Why topology
//!
//! A healthy quasi-periodic heartbeat traces a closed orbit in the
//! reconstructed phase space; that orbit is a 1-dimensional cycle whose
//! persistence dominates the diagram. Arrhythmic recordings lose the orbit
//! structure, and with it the long-lived H₁ feature. Persistence diagrams
//! make that difference quantitative without any model of the waveform.
//!
//! ## Example
//!
//! ```no_run
//! use ecg_topology::Pipeline;
//!
//! let analysis = Pipeline::default().run_path("patient.csv")?;
//! println!(
//!     "{} points, max H1 persistence {:.3}",
//!     analysis.cloud.n_points(),
//!     analysis.diagram.max_persistence(1),
//! );
//! # Ok::<(), ecg_topology::PipelineError>(())
//! ```
//!
//! ## References
//!
//! - Takens, "Detecting strange attractors in turbulence" (1981)
//! - Edelsbrunner, Letscher, Zomorodian, "Topological Persistence and
//!   Simplification" (2002)
//! - Edelsbrunner & Harer, "Computational Topology" (2010)

pub mod embedding;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod signal;
pub mod topology;

pub use embedding::{PointCloud, TakensEmbedding};
pub use error::PipelineError;
pub use pipeline::{Analysis, Pipeline, DEFAULT_HOMOLOGY_DIMENSIONS};
pub use render::{cloud_scatter, diagram_points, signal_series, ChartBundle, ChartTheme};
pub use signal::{load_signal, load_signal_path, Signal, DEFAULT_COLUMN};
pub use topology::{
    compute_persistence, compute_persistence_with, distance_matrix, max_distance,
    PersistenceDiagram, PersistenceInterval,
};

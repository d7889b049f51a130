//! Analysis Pipeline: Load -> Embed -> Persistence
//!
//! One `Pipeline` value describes how to analyze an uploaded recording; each
//! `run` is a fresh, fully independent invocation that owns every entity it
//! produces. Data flows strictly one way and any stage failure aborts the
//! run with no partial result.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::embedding::{PointCloud, TakensEmbedding};
use crate::error::PipelineError;
use crate::signal::{load_signal, load_signal_path, Signal};
use crate::topology::{compute_persistence, compute_persistence_with, PersistenceDiagram};

/// Default homology dimensions: connected components and loops.
pub const DEFAULT_HOMOLOGY_DIMENSIONS: [usize; 2] = [0, 1];

/// Configuration of one analysis pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Name of the signal column in the input table.
    pub column: String,
    /// Delay-embedding parameters.
    pub embedding: TakensEmbedding,
    /// Homology dimensions to report.
    pub homology_dimensions: Vec<usize>,
    /// Filtration cutoff; `None` runs to the maximum pairwise distance.
    pub max_epsilon: Option<f64>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            column: crate::signal::DEFAULT_COLUMN.to_string(),
            embedding: TakensEmbedding::default(),
            homology_dimensions: DEFAULT_HOMOLOGY_DIMENSIONS.to_vec(),
            max_epsilon: None,
        }
    }
}

/// Everything one pipeline invocation produced. Immutable after creation.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub signal: Signal,
    pub cloud: PointCloud,
    pub diagram: PersistenceDiagram,
}

impl Pipeline {
    /// Run the full pipeline on CSV bytes from `reader`.
    pub fn run<R: Read>(&self, reader: R) -> Result<Analysis, PipelineError> {
        let signal = load_signal(reader, &self.column)?;
        self.analyze(signal)
    }

    /// Run the full pipeline on the CSV file at `path`.
    pub fn run_path<P: AsRef<Path>>(&self, path: P) -> Result<Analysis, PipelineError> {
        let signal = load_signal_path(path, &self.column)?;
        self.analyze(signal)
    }

    /// Embed an already-loaded signal and compute its persistence diagram.
    pub fn analyze(&self, signal: Signal) -> Result<Analysis, PipelineError> {
        debug!(samples = signal.len(), label = ?signal.label(), "signal loaded");

        let cloud = self.embedding.embed(&signal)?;
        debug!(
            points = cloud.n_points(),
            dimension = cloud.dimension(),
            "embedding complete"
        );

        let diagram = match self.max_epsilon {
            Some(eps) => compute_persistence_with(&cloud, &self.homology_dimensions, eps)?,
            None => compute_persistence(&cloud, &self.homology_dimensions)?,
        };
        debug!(intervals = diagram.intervals.len(), "persistence complete");

        Ok(Analysis {
            signal,
            cloud,
            diagram,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    fn sine_csv(n: usize, period: f64) -> String {
        let mut csv = String::from("ECG,patient\n");
        for i in 0..n {
            let v = (2.0 * std::f64::consts::PI * i as f64 / period).sin();
            csv.push_str(&format!("{v},vt_01\n"));
        }
        csv
    }

    fn noise_csv(n: usize, seed: u64) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0.0, 1.0).expect("valid normal");
        let mut csv = String::from("ECG\n");
        for _ in 0..n {
            csv.push_str(&format!("{}\n", normal.sample(&mut rng)));
        }
        csv
    }

    #[test]
    fn test_full_run_on_reference_length() {
        // 4797 samples embed to 479 points with the default parameters.
        // Persistence on a cloud that size is the complexity boundary of the
        // pipeline, so only the embedding is exercised here.
        let csv = sine_csv(4797, 500.0);
        let pipeline = Pipeline::default();
        let signal = load_signal(csv.as_bytes(), &pipeline.column).unwrap();
        let cloud = pipeline.embedding.embed(&signal).unwrap();
        assert_eq!(cloud.n_points(), 479);
        assert_eq!(cloud.dimension(), 3);
    }

    #[test]
    fn test_sine_cloud_carries_a_long_lived_loop() {
        // A shorter sine keeps the complex tractable: 600 samples -> 59
        // embedded points. With period 26 the delay of 8 spans ~111° of
        // phase, so the embedded orbit is a nearly circular loop of radius
        // ~1.2 and its H1 feature persists for well over 1.0.
        let csv = sine_csv(600, 26.0);
        let analysis = Pipeline::default().run(csv.as_bytes()).unwrap();
        assert_eq!(analysis.cloud.n_points(), 59);

        // One connected component survives the whole filtration
        assert_eq!(analysis.diagram.essential_count(0), 1);

        // The closed orbit shows up as a dominant H1 feature
        let sine_loop = analysis.diagram.max_persistence(1);
        assert!(
            sine_loop > 1.0,
            "periodic signal must produce a long-lived H1 feature, got {sine_loop}"
        );

        let noise = Pipeline::default()
            .run(noise_csv(600, 42).as_bytes())
            .unwrap();
        let noise_loop = noise.diagram.max_persistence(1);
        assert!(
            sine_loop > 2.0 * noise_loop,
            "sine loop ({sine_loop}) should dominate noise loop ({noise_loop})"
        );
    }

    #[test]
    fn test_idempotent_across_runs() {
        let csv = sine_csv(400, 100.0);
        let pipeline = Pipeline::default();
        let a = pipeline.run(csv.as_bytes()).unwrap();
        let b = pipeline.run(csv.as_bytes()).unwrap();

        assert_eq!(a.signal, b.signal);
        assert_eq!(a.cloud, b.cloud);
        assert_eq!(a.diagram.intervals.len(), b.diagram.intervals.len());
        for (x, y) in a.diagram.intervals.iter().zip(&b.diagram.intervals) {
            assert_eq!(x.dimension, y.dimension);
            assert!((x.birth - y.birth).abs() < 1e-9);
            assert!(x.death == y.death || (x.death - y.death).abs() < 1e-9);
        }
    }

    #[test]
    fn test_missing_column_aborts_before_embedding() {
        let err = Pipeline::default()
            .run("time,voltage\n0,0.5\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn(_)));
    }

    #[test]
    fn test_failed_run_does_not_poison_the_next() {
        let pipeline = Pipeline::default();
        assert!(pipeline.run("ECG\n".as_bytes()).is_err());
        assert!(pipeline.run(sine_csv(400, 100.0).as_bytes()).is_ok());
    }
}

//! Signal Module: ECG Time Series Representation and Loading
//!
//! A `Signal` is an ordered sequence of real-valued samples taken at a fixed
//! sampling interval. It is the sole input to the embedding stage; nothing
//! downstream looks back at the raw table.
//!
//! The optional record label ("patient" vs. "healthy") travels with the
//! signal for presentation purposes only. It never influences the embedding
//! or the persistence computation.

mod loader;

pub use loader::{load_signal, load_signal_path, DEFAULT_COLUMN};

use serde::Serialize;

/// Sampling interval of the reference ECG recordings, in milliseconds.
pub const DEFAULT_SAMPLE_INTERVAL_MS: f64 = 4.0;

/// An ordered, uniformly sampled scalar time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    samples: Vec<f64>,
    /// Time between consecutive samples, in milliseconds.
    sample_interval_ms: f64,
    /// Record annotation from the optional "patient" column, if present.
    label: Option<String>,
}

impl Signal {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples,
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            label: None,
        }
    }

    pub fn with_sample_interval(mut self, interval_ms: f64) -> Self {
        self.sample_interval_ms = interval_ms;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_interval_ms(&self) -> f64 {
        self.sample_interval_ms
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Timestamp of sample `i` in milliseconds.
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.sample_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_axis() {
        let s = Signal::new(vec![0.0; 10]).with_sample_interval(4.0);
        assert_eq!(s.time_at(0), 0.0);
        assert_eq!(s.time_at(3), 12.0);
    }

    #[test]
    fn test_label_is_metadata_only() {
        let a = Signal::new(vec![1.0, 2.0]);
        let b = Signal::new(vec![1.0, 2.0]).with_label("patient");
        assert_eq!(a.samples(), b.samples());
        assert_eq!(b.label(), Some("patient"));
    }
}

//! Takens Delay Embedding
//!
//! Maps a scalar series s into a point cloud in R^d by forming tuples of
//! time-delayed samples:
//!
//!   x_i = (s[i·σ], s[i·σ + τ], ..., s[i·σ + (d-1)·τ])
//!
//! with dimension d, delay τ, and stride σ. The number of points is
//!
//!   n = ⌊(len(s) - (d-1)·τ - 1) / σ⌋ + 1
//!
//! Parameters are fixed, not searched: no mutual-information delay selection
//! or false-nearest-neighbor dimension estimation is performed. The defaults
//! (d=3, τ=8, σ=10) are the values used for the reference ECG recordings.

use ndarray::Array2;

use crate::error::PipelineError;
use crate::signal::Signal;

/// Points of one embedded signal: shape `(n_points, dimension)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    coords: Array2<f64>,
}

impl PointCloud {
    pub fn from_coords(coords: Array2<f64>) -> Self {
        Self { coords }
    }

    pub fn n_points(&self) -> usize {
        self.coords.nrows()
    }

    pub fn dimension(&self) -> usize {
        self.coords.ncols()
    }

    pub fn coords(&self) -> &Array2<f64> {
        &self.coords
    }
}

/// Delay-embedding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakensEmbedding {
    /// Number of reconstructed coordinates per point.
    pub dimension: usize,
    /// Time lag between consecutive coordinates of one point.
    pub delay: usize,
    /// Step between consecutive embedded points.
    pub stride: usize,
}

impl Default for TakensEmbedding {
    fn default() -> Self {
        Self {
            dimension: 3,
            delay: 8,
            stride: 10,
        }
    }
}

impl TakensEmbedding {
    pub fn new(dimension: usize, delay: usize, stride: usize) -> Self {
        assert!(dimension > 0, "dimension must be positive");
        assert!(delay > 0, "delay must be positive");
        assert!(stride > 0, "stride must be positive");
        Self {
            dimension,
            delay,
            stride,
        }
    }

    /// Minimum signal length yielding at least one embedded point.
    pub fn min_signal_len(&self) -> usize {
        (self.dimension - 1) * self.delay + 1
    }

    /// Number of points produced from a signal of length `len`, if any.
    pub fn n_points(&self, len: usize) -> usize {
        let span = (self.dimension - 1) * self.delay;
        if len <= span {
            return 0;
        }
        (len - span - 1) / self.stride + 1
    }

    /// Embed `signal` into a point cloud.
    ///
    /// Deterministic: the same signal and parameters always produce the same
    /// cloud. Fails with `InsufficientSamples` when the signal is shorter
    /// than `min_signal_len()`.
    pub fn embed(&self, signal: &Signal) -> Result<PointCloud, PipelineError> {
        let samples = signal.samples();
        let n = self.n_points(samples.len());
        if n == 0 {
            return Err(PipelineError::InsufficientSamples {
                required: self.min_signal_len(),
                actual: samples.len(),
            });
        }

        let mut coords = Array2::<f64>::zeros((n, self.dimension));
        for i in 0..n {
            let base = i * self.stride;
            for k in 0..self.dimension {
                coords[[i, k]] = samples[base + k * self.delay];
            }
        }

        Ok(PointCloud::from_coords(coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Signal {
        Signal::new((0..len).map(|i| i as f64).collect())
    }

    #[test]
    fn test_point_count_formula() {
        let emb = TakensEmbedding::default();
        // n = floor((L - 17) / 10) + 1 for the default parameters
        for (len, expected) in [(17, 1), (26, 1), (27, 2), (100, 9), (4797, 479)] {
            assert_eq!(emb.n_points(len), expected, "len = {len}");
            assert_eq!(emb.embed(&ramp(len)).unwrap().n_points(), expected);
        }
    }

    #[test]
    fn test_too_short_signal_fails() {
        let emb = TakensEmbedding::default();
        for len in [0, 1, 16] {
            let err = emb.embed(&ramp(len)).unwrap_err();
            match err {
                PipelineError::InsufficientSamples { required, actual } => {
                    assert_eq!(required, 17);
                    assert_eq!(actual, len);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_coordinate_layout() {
        // For a ramp signal the coordinates are the sample indices themselves,
        // so point i, coordinate k must equal i*stride + k*delay.
        let emb = TakensEmbedding::new(3, 8, 10);
        let cloud = emb.embed(&ramp(60)).unwrap();
        assert_eq!(cloud.dimension(), 3);
        for i in 0..cloud.n_points() {
            for k in 0..3 {
                assert_eq!(cloud.coords()[[i, k]], (i * 10 + k * 8) as f64);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let emb = TakensEmbedding::default();
        let signal = Signal::new((0..200).map(|i| (i as f64 * 0.13).sin()).collect());
        let a = emb.embed(&signal).unwrap();
        let b = emb.embed(&signal).unwrap();
        assert_eq!(a, b);
    }
}

//! Rendering Boundary: Chart-Ready Data Series
//!
//! The presentation layer (interactive charting) lives outside this crate;
//! this module only shapes pipeline outputs into the series such a layer
//! consumes: a time/voltage line for the raw signal, a scatter for the
//! embedded cloud, and birth/death pairs grouped by homology dimension for
//! the diagram.
//!
//! Theming is an explicit value handed to the boundary, never a process-wide
//! default.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::embedding::PointCloud;
use crate::pipeline::Analysis;
use crate::signal::Signal;
use crate::topology::PersistenceDiagram;

/// Chart appearance, passed explicitly alongside the data series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTheme {
    pub template: String,
    pub title: Option<String>,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            template: "white".to_string(),
            title: None,
            x_axis_label: "Time (milliseconds)".to_string(),
            y_axis_label: "Electric Signal (millivolts)".to_string(),
        }
    }
}

impl ChartTheme {
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Raw-signal line chart: (time in ms, sample value) pairs.
pub fn signal_series(signal: &Signal) -> Vec<(f64, f64)> {
    signal
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &y)| (signal.time_at(i), y))
        .collect()
}

/// Point-cloud scatter: one coordinate row per embedded point.
pub fn cloud_scatter(cloud: &PointCloud) -> Vec<Vec<f64>> {
    cloud
        .coords()
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect()
}

/// Birth/death scatter points grouped by homology dimension.
///
/// Essential features have their infinite death capped at the largest finite
/// death in the diagram so every point is plottable; the cap mirrors how
/// reference implementations substitute the maximum filtration value.
pub fn diagram_points(diagram: &PersistenceDiagram) -> BTreeMap<usize, Vec<(f64, f64)>> {
    let cap = diagram
        .intervals
        .iter()
        .filter(|i| !i.is_essential())
        .map(|i| i.death)
        .fold(0.0, f64::max);

    let mut groups: BTreeMap<usize, Vec<(f64, f64)>> = BTreeMap::new();
    for d in &diagram.homology_dimensions {
        groups.insert(*d, Vec::new());
    }
    for interval in &diagram.intervals {
        let death = if interval.is_essential() {
            cap
        } else {
            interval.death
        };
        groups
            .entry(interval.dimension)
            .or_default()
            .push((interval.birth, death));
    }
    groups
}

/// Full chart payload for one analysis, serializable for an external viewer.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBundle {
    pub theme: ChartTheme,
    pub label: Option<String>,
    pub signal: Vec<(f64, f64)>,
    pub cloud: Vec<Vec<f64>>,
    pub diagram: BTreeMap<usize, Vec<(f64, f64)>>,
}

impl ChartBundle {
    pub fn from_analysis(analysis: &Analysis, theme: ChartTheme) -> Self {
        Self {
            theme,
            label: analysis.signal.label().map(str::to_string),
            signal: signal_series(&analysis.signal),
            cloud: cloud_scatter(&analysis.cloud),
            diagram: diagram_points(&analysis.diagram),
        }
    }
}

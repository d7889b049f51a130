//! Tabular Signal Loader
//!
//! Extracts one named numeric column from a CSV table, in row order, into a
//! `Signal`. The loader requires only header-indexed column access and row
//! iteration; everything else in the table is ignored, except an optional
//! "patient" column whose first value becomes the record label.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::PipelineError;
use crate::signal::Signal;

/// Column name the reference recordings use for the ECG trace.
pub const DEFAULT_COLUMN: &str = "ECG";

/// Name of the optional label column.
const LABEL_COLUMN: &str = "patient";

/// Read the named column of a CSV table into a `Signal`.
///
/// Fails with `MissingColumn` if the header lacks `column`, `EmptyInput` if
/// there are no data rows, and `NonNumeric` on the first unparsable cell.
pub fn load_signal<R: Read>(reader: R, column: &str) -> Result<Signal, PipelineError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let col_idx = headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| PipelineError::MissingColumn(column.to_string()))?;
    let label_idx = headers.iter().position(|h| h.trim() == LABEL_COLUMN);

    let mut samples = Vec::new();
    let mut label: Option<String> = None;

    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let cell = record.get(col_idx).unwrap_or("").trim();
        let value = cell.parse::<f64>().map_err(|_| PipelineError::NonNumeric {
            column: column.to_string(),
            row,
            value: cell.to_string(),
        })?;
        samples.push(value);

        if label.is_none() {
            if let Some(idx) = label_idx {
                let cell = record.get(idx).unwrap_or("").trim();
                if !cell.is_empty() {
                    label = Some(cell.to_string());
                }
            }
        }
    }

    if samples.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let mut signal = Signal::new(samples);
    if let Some(label) = label {
        signal = signal.with_label(label);
    }
    Ok(signal)
}

/// Convenience wrapper opening `path` for reading.
pub fn load_signal_path<P: AsRef<Path>>(path: P, column: &str) -> Result<Signal, PipelineError> {
    let file = File::open(path)?;
    load_signal(file, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_named_column_in_row_order() {
        let csv = "t,ECG\n0,0.5\n1,-0.25\n2,1.0\n";
        let signal = load_signal(csv.as_bytes(), DEFAULT_COLUMN).unwrap();
        assert_eq!(signal.samples(), &[0.5, -0.25, 1.0]);
        assert_eq!(signal.label(), None);
    }

    #[test]
    fn test_missing_column() {
        let csv = "t,voltage\n0,0.5\n";
        let err = load_signal(csv.as_bytes(), DEFAULT_COLUMN).unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn(ref c) if c == "ECG"));
    }

    #[test]
    fn test_empty_table() {
        let csv = "t,ECG\n";
        let err = load_signal(csv.as_bytes(), DEFAULT_COLUMN).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput));
    }

    #[test]
    fn test_non_numeric_cell_names_row() {
        let csv = "ECG\n0.5\nnot-a-number\n";
        let err = load_signal(csv.as_bytes(), DEFAULT_COLUMN).unwrap_err();
        match err {
            PipelineError::NonNumeric { row, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_patient_label_carried() {
        let csv = "ECG,patient\n0.5,vt_patient_01\n0.6,vt_patient_01\n";
        let signal = load_signal(csv.as_bytes(), DEFAULT_COLUMN).unwrap();
        assert_eq!(signal.label(), Some("vt_patient_01"));
        assert_eq!(signal.len(), 2);
    }
}

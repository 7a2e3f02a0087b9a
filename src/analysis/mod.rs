//! Statistical core of the app.
//!
//! Everything in here is a pure function from loaded data to plain result
//! structs: no I/O, no UI types, no shared state. The UI renders the structs
//! and the export path serializes them, but neither feeds anything back.

pub mod error;
pub mod histogram;
pub mod regression;
pub mod summary;

use serde::Serialize;

use crate::data::model::RiverDataset;

pub use error::AnalysisError;
pub use histogram::Histogram;
pub use regression::{fit_least_squares, RegressionResult};
pub use summary::SummaryStatistics;

/// Everything derived from one dataset in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: SummaryStatistics,
    pub regression: RegressionResult,
}

/// Run the full analysis: summary statistics over the concentration column
/// plus the least-squares fit of concentration against distance.
///
/// Either both parts succeed or the whole report is an error; nothing
/// partial ever reaches the UI.
pub fn analyze(dataset: &RiverDataset) -> Result<AnalysisReport, AnalysisError> {
    let concentrations = dataset.concentrations();
    let summary = SummaryStatistics::compute(&concentrations)?;
    let regression = fit_least_squares(&dataset.distances(), &concentrations)?;
    Ok(AnalysisReport {
        summary,
        regression,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn dataset(pairs: &[(f64, f64)]) -> RiverDataset {
        let samples = pairs
            .iter()
            .map(|&(distance_km, concentration_mg_l)| Sample {
                distance_km,
                concentration_mg_l,
            })
            .collect();
        RiverDataset::new(samples, "test")
    }

    #[test]
    fn report_covers_both_columns() {
        let data = dataset(&[(0.0, 10.0), (5.0, 8.0), (10.0, 6.5), (15.0, 4.0)]);
        let report = analyze(&data).unwrap();
        assert_eq!(report.summary.count, 4);
        assert_eq!(report.regression.predicted.len(), data.len());
        assert!(report.regression.slope < 0.0);
    }

    #[test]
    fn empty_dataset_fails_before_any_statistic() {
        let data = dataset(&[]);
        assert_eq!(analyze(&data), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn single_sample_cannot_be_fitted() {
        let data = dataset(&[(3.0, 7.0)]);
        assert_eq!(
            analyze(&data),
            Err(AnalysisError::TooFewPoints { got: 1, min: 2 })
        );
    }

    #[test]
    fn constant_distance_fails_the_fit() {
        let data = dataset(&[(2.0, 1.0), (2.0, 9.0), (2.0, 5.0)]);
        assert_eq!(
            analyze(&data),
            Err(AnalysisError::DegenerateInput { x: 2.0 })
        );
    }

    #[test]
    fn report_serializes_to_json() {
        let data = dataset(&[(0.0, 4.0), (1.0, 3.0), (2.0, 2.2)]);
        let report = analyze(&data).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"regression\""));
        assert!(json.contains("\"predicted\""));
    }

    #[test]
    fn same_dataset_gives_identical_reports() {
        let data = dataset(&[(0.0, 9.0), (4.0, 7.5), (8.0, 5.0), (12.0, 3.1)]);
        assert_eq!(analyze(&data).unwrap(), analyze(&data).unwrap());
    }
}

use std::path::PathBuf;

use crate::analysis::{analyze, AnalysisReport};
use crate::color::ChartPalette;
use crate::data::model::RiverDataset;

/// Default number of histogram bins; adjustable from the side panel.
pub const DEFAULT_BIN_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `dataset` and `report` are either both present or both absent: a file
/// whose analysis fails is rejected outright and only its error message
/// stays behind.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<RiverDataset>,

    /// Analysis of the loaded dataset, computed once per load.
    pub report: Option<AnalysisReport>,

    /// Colours assigned to the chart series.
    pub palette: ChartPalette,

    /// Histogram bin count.
    pub bin_count: usize,

    /// Show the per-record table instead of the chart grid.
    pub show_table: bool,

    /// Show the formula walkthrough under the statistics.
    pub show_formulas: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Destination for a chart export; set when the user picks a file,
    /// consumed when the screenshot arrives a frame later.
    pub pending_chart_export: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            report: None,
            palette: ChartPalette::new(),
            bin_count: DEFAULT_BIN_COUNT,
            show_table: false,
            show_formulas: true,
            status_message: None,
            pending_chart_export: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and run the analysis once.
    ///
    /// A dataset that cannot be analyzed is dropped and the error becomes
    /// the status message, so the charts never render a half-usable state.
    pub fn set_dataset(&mut self, dataset: RiverDataset) {
        match analyze(&dataset) {
            Ok(report) => {
                log::info!(
                    "analyzed {}: {} samples, slope {:.4} mg/L per km, r² {:.4}",
                    dataset.source_name,
                    dataset.len(),
                    report.regression.slope,
                    report.regression.r_squared,
                );
                self.report = Some(report);
                self.dataset = Some(dataset);
                self.status_message = None;
            }
            Err(err) => {
                log::error!("analysis of {} failed: {err}", dataset.source_name);
                self.report = None;
                self.dataset = None;
                self.status_message = Some(format!("Analysis failed: {err}"));
            }
        }
    }

    /// Dataset and report together, when a load has succeeded.
    pub fn loaded(&self) -> Option<(&RiverDataset, &AnalysisReport)> {
        self.dataset.as_ref().zip(self.report.as_ref())
    }
}

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
    fn good_dataset_installs_a_report() {
        let mut state = AppState::default();
        state.set_dataset(dataset(&[(0.0, 8.0), (5.0, 6.0), (10.0, 4.5)]));
        assert!(state.loaded().is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn unanalyzable_dataset_is_rejected_with_a_message() {
        let mut state = AppState::default();
        state.set_dataset(dataset(&[(2.0, 1.0), (2.0, 9.0)]));
        assert!(state.dataset.is_none());
        assert!(state.report.is_none());
        let message = state.status_message.as_deref().unwrap();
        assert!(message.contains("Analysis failed"));
    }

    #[test]
    fn a_good_load_clears_an_earlier_failure() {
        let mut state = AppState::default();
        state.set_dataset(dataset(&[(2.0, 1.0), (2.0, 9.0)]));
        assert!(state.status_message.is_some());
        state.set_dataset(dataset(&[(0.0, 8.0), (5.0, 6.0)]));
        assert!(state.loaded().is_some());
        assert!(state.status_message.is_none());
    }
}

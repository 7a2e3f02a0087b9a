use thiserror::Error;

/// Failure modes of the statistical core.
///
/// Surfaced to the caller, never recovered internally: the app reports the
/// message in the status line and draws no charts for the failed run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Summary statistics were requested over an empty column.
    #[error("dataset is empty, nothing to summarize")]
    EmptyInput,

    /// Regression needs at least two (distance, concentration) pairs.
    #[error("too few points for a regression: got {got}, need at least {min}")]
    TooFewPoints { got: usize, min: usize },

    /// Every distance value is identical, so the slope denominator is zero.
    #[error("all distance values equal {x} km; the slope is undefined")]
    DegenerateInput { x: f64 },
}

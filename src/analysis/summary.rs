use serde::Serialize;

use super::error::AnalysisError;

/// Descriptive statistics for one numeric column.
///
/// All fields are plain values computed once; the UI reads them directly and
/// the results export serializes the whole struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Every value attaining the highest frequency, ascending. Empty when no
    /// value occurs more than once.
    pub modes: Vec<f64>,
    /// Sample variance (N - 1 denominator). 0.0 for a single observation.
    pub variance: f64,
    pub std_dev: f64,
    /// 25th percentile, linear interpolation between closest ranks.
    pub q1: f64,
    /// 75th percentile, linear interpolation between closest ranks.
    pub q3: f64,
}

impl SummaryStatistics {
    /// Compute the full summary over `values`.
    pub fn compute(values: &[f64]) -> Result<Self, AnalysisError> {
        if values.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;

        // One sorted copy feeds the median, the quantiles and the mode scan.
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let min = sorted[0];
        let max = sorted[count - 1];

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        // A single observation has no spread.
        let variance = if count < 2 {
            0.0
        } else {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };
        let std_dev = variance.sqrt();

        let q1 = quantile_sorted(&sorted, 0.25);
        let q3 = quantile_sorted(&sorted, 0.75);
        let modes = modes_sorted(&sorted);

        Ok(SummaryStatistics {
            count,
            min,
            max,
            mean,
            median,
            modes,
            variance,
            std_dev,
            q1,
            q3,
        })
    }
}

/// The p-th quantile of pre-sorted data, interpolating linearly between the
/// two closest ranks (`h = (n - 1) * p`).
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&p));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        sorted[n - 1]
    } else {
        (1.0 - g) * sorted[j] + g * sorted[j + 1]
    }
}

/// Scan runs of equal values in sorted data and keep the longest ones.
/// Returns an empty vec when nothing repeats.
fn modes_sorted(sorted: &[f64]) -> Vec<f64> {
    let mut modes = Vec::new();
    let mut best = 1usize;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let run = j - i;
        if run > best {
            best = run;
            modes.clear();
            modes.push(sorted[i]);
        } else if run == best && best > 1 {
            modes.push(sorted[i]);
        }
        i = j;
    }
    modes
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

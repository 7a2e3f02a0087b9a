use serde::Serialize;

use super::error::AnalysisError;

/// A fitted line `y = intercept + slope * x` together with its quality
/// measures and the fitted value for every input pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionResult {
    pub intercept: f64,
    pub slope: f64,
    /// Coefficient of determination. NaN when every observed y is identical,
    /// since there is no variance left to explain.
    pub r_squared: f64,
    /// Mean squared error of the fit.
    pub mse: f64,
    /// Fitted value for each input pair, in input order. Always the same
    /// length as the input.
    pub predicted: Vec<f64>,
}

impl RegressionResult {
    /// Evaluate the fitted line at an arbitrary x.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit `y = intercept + slope * x` by ordinary least squares.
///
/// `x` and `y` hold the two columns of the same records, so their lengths
/// always agree at the call sites.
pub fn fit_least_squares(x: &[f64], y: &[f64]) -> Result<RegressionResult, AnalysisError> {
    debug_assert_eq!(x.len(), y.len());

    let n = x.len();
    if n < 2 {
        return Err(AnalysisError::TooFewPoints { got: n, min: 2 });
    }

    let n_f = n as f64;
    let x_mean = x.iter().sum::<f64>() / n_f;
    let y_mean = y.iter().sum::<f64>() / n_f;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        sxx += dx * dx;
        sxy += dx * (yi - y_mean);
    }

    // Identical x values give exactly zero here.
    if sxx == 0.0 {
        return Err(AnalysisError::DegenerateInput { x: x[0] });
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let predicted: Vec<f64> = x.iter().map(|&xi| intercept + slope * xi).collect();

    let mut ss_tot = 0.0;
    let mut ss_res = 0.0;
    for (&yi, &pi) in y.iter().zip(predicted.iter()) {
        let dev = yi - y_mean;
        let res = yi - pi;
        ss_tot += dev * dev;
        ss_res += res * res;
    }

    let r_squared = if ss_tot == 0.0 {
        f64::NAN
    } else {
        1.0 - ss_res / ss_tot
    };
    let mse = ss_res / n_f;

    Ok(RegressionResult {
        intercept,
        slope,
        r_squared,
        mse,
        predicted,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn perfect_line_through_origin() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 2.0, 3.0];
        let fit = fit_least_squares(&x, &y).unwrap();
        assert!(fit.intercept.abs() < EPS);
        assert!((fit.slope - 1.0).abs() < EPS);
        assert!((fit.r_squared - 1.0).abs() < EPS);
        assert!(fit.mse.abs() < EPS);
    }

    #[test]
    fn exact_affine_relation_is_recovered() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|xi| 2.0 * xi + 1.0).collect();
        let fit = fit_least_squares(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < EPS);
        assert!((fit.intercept - 1.0).abs() < EPS);
        assert!((fit.r_squared - 1.0).abs() < EPS);
    }

    #[test]
    fn downstream_decay_has_negative_slope() {
        let x = [0.0, 5.0, 10.0, 15.0, 20.0];
        let y = [9.8, 8.1, 6.3, 4.9, 3.2];
        let fit = fit_least_squares(&x, &y).unwrap();
        assert!(fit.slope < 0.0);
        assert!(fit.r_squared > 0.95);
    }

    #[test]
    fn noisy_data_keeps_mse_positive_and_r_squared_below_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [2.2, 3.9, 6.1, 8.0, 9.7, 12.3];
        let fit = fit_least_squares(&x, &y).unwrap();
        assert!(fit.mse > 0.0);
        assert!(fit.r_squared < 1.0);
        assert!(fit.r_squared > 0.9);
    }

    #[test]
    fn one_predicted_value_per_input_pair() {
        let x = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5];
        let y = [3.0, 2.0, 4.0, 5.0, 4.5, 6.0, 7.5];
        let fit = fit_least_squares(&x, &y).unwrap();
        assert_eq!(fit.predicted.len(), x.len());
        for (i, p) in fit.predicted.iter().enumerate() {
            assert!((p - fit.predict(x[i])).abs() < EPS);
        }
    }

    #[test]
    fn identical_x_values_are_degenerate() {
        let err = fit_least_squares(&[1.0, 1.0], &[2.0, 5.0]).unwrap_err();
        assert_eq!(err, AnalysisError::DegenerateInput { x: 1.0 });
    }

    #[test]
    fn fewer_than_two_points_is_an_error() {
        assert_eq!(
            fit_least_squares(&[], &[]),
            Err(AnalysisError::TooFewPoints { got: 0, min: 2 })
        );
        assert_eq!(
            fit_least_squares(&[3.0], &[1.0]),
            Err(AnalysisError::TooFewPoints { got: 1, min: 2 })
        );
    }

    #[test]
    fn constant_y_leaves_r_squared_undefined() {
        let fit = fit_least_squares(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap();
        assert!(fit.slope.abs() < EPS);
        assert!((fit.intercept - 4.0).abs() < EPS);
        assert!(fit.r_squared.is_nan());
        assert!(fit.mse.abs() < EPS);
    }

    #[test]
    fn same_input_gives_identical_output() {
        let x = [1.0, 2.0, 4.0, 8.0];
        let y = [1.5, 2.1, 4.4, 8.9];
        let a = fit_least_squares(&x, &y).unwrap();
        let b = fit_least_squares(&x, &y).unwrap();
        assert_eq!(a, b);
    }
}

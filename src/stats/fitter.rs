//! Least Squares Fitter Module
//! Closed-form OLS line fit and R² over (votes, metric) sample pairs.

use statrs::statistics::Statistics;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitError {
    #[error("need at least 2 samples to fit a line, got {0}")]
    TooFewSamples(usize),
    #[error("sample lengths differ: {x} votes vs {y} metric values")]
    LengthMismatch { x: usize, y: usize },
    #[error("votes column has zero variance; regression slope is undefined")]
    DegenerateVotes,
}

/// Result of fitting `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination against the fitted line, unweighted.
    pub r_squared: f64,
}

impl LinearFit {
    /// Predicted y for a given x.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit an unweighted OLS line through the (x, y) pairs.
///
/// Uses the standard closed-form sums, so the result is a pure deterministic
/// function of the input. A constant x (all votes equal) leaves the slope
/// undefined and is rejected rather than returning NaN. A constant y with
/// varying x fits exactly, so R² is 1.0 in that case.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFit, FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(FitError::TooFewSamples(x.len()));
    }

    let mean_x = x.mean();
    let mean_y = y.mean();

    let sxx: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return Err(FitError::DegenerateVotes);
    }
    let sxy: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (yi - (slope * xi + intercept)).powi(2))
        .sum();
    let ss_tot: f64 = y.iter().map(|yi| (yi - mean_y).powi(2)).sum();

    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn exact_line_recovers_slope_intercept_and_unit_r2() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|xi| 2.5 * xi - 1.0).collect();
        let fit = fit_line(&x, &y).unwrap();
        assert!((fit.slope - 2.5).abs() < EPS);
        assert!((fit.intercept - -1.0).abs() < EPS);
        assert!((fit.r_squared - 1.0).abs() < EPS);
    }

    #[test]
    fn hand_computed_fit() {
        // mean_x = 1, mean_y = 2/3, Sxy = 1, Sxx = 2
        // slope = 0.5, intercept = 1/6, r² = 0.75
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0, 1.0];
        let fit = fit_line(&x, &y).unwrap();
        assert!((fit.slope - 0.5).abs() < EPS);
        assert!((fit.intercept - 1.0 / 6.0).abs() < EPS);
        assert!((fit.r_squared - 0.75).abs() < EPS);
    }

    #[test]
    fn constant_votes_are_rejected() {
        let x = [5.0, 5.0, 5.0];
        let y = [1.0, 2.0, 3.0];
        assert!(matches!(
            fit_line(&x, &y).unwrap_err(),
            FitError::DegenerateVotes
        ));
    }

    #[test]
    fn constant_metric_fits_exactly() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 4.0, 4.0];
        let fit = fit_line(&x, &y).unwrap();
        assert!(fit.slope.abs() < EPS);
        assert!((fit.intercept - 4.0).abs() < EPS);
        assert!((fit.r_squared - 1.0).abs() < EPS);
    }

    #[test]
    fn too_few_or_mismatched_samples_are_rejected() {
        assert!(matches!(
            fit_line(&[1.0], &[2.0]).unwrap_err(),
            FitError::TooFewSamples(1)
        ));
        assert!(matches!(
            fit_line(&[1.0, 2.0], &[3.0]).unwrap_err(),
            FitError::LengthMismatch { x: 2, y: 1 }
        ));
    }

    #[test]
    fn fit_is_deterministic() {
        let x = [3.0, 1.0, 4.0, 1.5, 9.0];
        let y = [2.0, 7.0, 1.0, 8.0, 2.0];
        let a = fit_line(&x, &y).unwrap();
        let b = fit_line(&x, &y).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        /// Property: R² stays in [0, 1] for linear data with bounded noise,
        /// whenever the votes actually vary.
        #[test]
        fn prop_r_squared_in_unit_interval(
            slope in -50.0f64..50.0,
            intercept in -100.0f64..100.0,
            noise in proptest::collection::vec(-1.0f64..1.0, 3..40),
        ) {
            let n = noise.len();
            let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let y: Vec<f64> = x
                .iter()
                .zip(&noise)
                .map(|(xi, e)| slope * xi + intercept + e)
                .collect();

            let fit = fit_line(&x, &y).unwrap();
            prop_assert!(fit.r_squared >= -1e-12);
            prop_assert!(fit.r_squared <= 1.0 + 1e-12);
        }
    }
}

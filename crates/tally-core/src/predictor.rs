//! Monthly expense predictor
//!
//! Fits an ordinary-least-squares line to historical monthly expense totals
//! and projects it forward. The independent variable is whole calendar
//! months since the earliest observed month, so gaps in the history widen
//! the x distance instead of collapsing into consecutive indexes.
//! Degenerate inputs degrade to a flat mean rather than erroring.

use serde::{Deserialize, Serialize};

use crate::month::YearMonth;

/// Variance below this is treated as zero (all x values identical).
const VARIANCE_EPSILON: f64 = 1e-9;

/// One calendar month's total expense.
///
/// Caller contract: at most one aggregate per distinct month, finite
/// totals. Duplicate months are not merged and would distort the fit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: YearMonth,
    pub total: f64,
}

/// A fitted trend line: `predicted = intercept + slope * months_since_base`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub slope: f64,
}

/// One predicted (month, amount) pair.
///
/// `predicted_total` is always finite and non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: YearMonth,
    pub predicted_total: f64,
}

/// Ordinary-least-squares predictor for monthly aggregated expenses.
///
/// Holds no state; every call is a pure function of its inputs and is safe
/// to invoke concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpensePredictor;

impl ExpensePredictor {
    pub fn new() -> Self {
        Self
    }

    /// Fit a linear trend to the aggregates.
    ///
    /// Empty input trains to the all-zero model. With fewer than two points,
    /// or when every point falls in the same calendar month, the model
    /// degrades to a flat line at the mean total.
    pub fn train(&self, aggregates: &[MonthlyAggregate]) -> LinearModel {
        if aggregates.is_empty() {
            return LinearModel {
                intercept: 0.0,
                slope: 0.0,
            };
        }

        let mut sorted = aggregates.to_vec();
        sorted.sort_by_key(|a| a.month);
        let base = sorted[0].month;

        let xs: Vec<f64> = sorted
            .iter()
            .map(|a| base.months_until(a.month) as f64)
            .collect();
        let ys: Vec<f64> = sorted.iter().map(|a| a.total).collect();

        let n = xs.len();
        let mean_y = ys.iter().sum::<f64>() / n as f64;
        if n < 2 {
            return LinearModel {
                intercept: mean_y,
                slope: 0.0,
            };
        }

        let mean_x = xs.iter().sum::<f64>() / n as f64;

        let mut cov_xy = 0.0;
        let mut var_x = 0.0;
        for (x, y) in xs.iter().zip(&ys) {
            let dx = x - mean_x;
            cov_xy += dx * (y - mean_y);
            var_x += dx * dx;
        }

        if var_x.abs() < VARIANCE_EPSILON {
            return LinearModel {
                intercept: mean_y,
                slope: 0.0,
            };
        }

        let slope = cov_xy / var_x;
        LinearModel {
            intercept: mean_y - slope * mean_x,
            slope,
        }
    }

    /// Predict totals for `months_ahead` consecutive calendar months
    /// starting at `start` (inclusive).
    ///
    /// Returns an empty vec when `months_ahead <= 0` or there is no
    /// history; neither is an error. `start` may precede the earliest
    /// historical month, in which case x goes negative. Predictions that
    /// come out negative or non-finite are clamped to zero.
    pub fn predict_future_months(
        &self,
        aggregates: &[MonthlyAggregate],
        start: YearMonth,
        months_ahead: i32,
    ) -> Vec<ForecastPoint> {
        if months_ahead <= 0 || aggregates.is_empty() {
            return Vec::new();
        }

        let model = self.train(aggregates);
        let base = match aggregates.iter().map(|a| a.month).min() {
            Some(month) => month,
            None => return Vec::new(),
        };

        let mut points = Vec::with_capacity(months_ahead as usize);
        let mut cursor = start;
        for _ in 0..months_ahead {
            let x = base.months_until(cursor) as f64;
            let mut predicted = model.intercept + model.slope * x;
            if !predicted.is_finite() || predicted < 0.0 {
                predicted = 0.0;
            }
            points.push(ForecastPoint {
                month: cursor,
                predicted_total: predicted,
            });
            cursor = cursor.plus_months(1);
        }
        points
    }
}

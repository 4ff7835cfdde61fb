//! Summary aggregation over a projected snapshot sequence

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::projection::snapshot::YearSnapshot;

/// Scalar reductions over a snapshot sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Sum of revenue across all projected years
    pub total_revenue: f64,

    /// Mean net income per year
    pub avg_net_income: f64,

    /// Sum of free cash flow across all projected years
    pub total_free_cash_flow: f64,

    /// Revenue in the last projected year
    pub final_year_revenue: f64,

    /// Net income in the last projected year
    pub final_year_net_income: f64,

    /// Revenue CAGR, `(last/first)^(1/n) - 1` with n = sequence length
    ///
    /// The exponent is 1/n rather than the textbook 1/(n-1); the convention
    /// is kept because downstream consumers depend on these exact figures.
    pub cagr_revenue: f64,

    /// Mean of gross_profit / revenue across years
    pub avg_gross_margin: f64,

    /// Mean of ebitda / revenue across years
    pub avg_ebitda_margin: f64,
}

/// Reduce a snapshot sequence to summary metrics
///
/// Fails with `DivisionByZero` on an empty sequence or whenever a yearly
/// revenue of zero makes the CAGR or margin ratios undefined. Never returns
/// a zero-filled record in place of an error.
pub fn summarize(projections: &[YearSnapshot]) -> Result<SummaryMetrics, ModelError> {
    let first = projections
        .first()
        .ok_or(ModelError::DivisionByZero("empty projection sequence"))?;
    let last = projections.last().unwrap();

    if first.revenue == 0.0 {
        return Err(ModelError::DivisionByZero("first-year revenue is zero"));
    }
    if projections.iter().any(|s| s.revenue == 0.0) {
        return Err(ModelError::DivisionByZero("projected revenue is zero"));
    }

    let n = projections.len() as f64;

    let total_revenue: f64 = projections.iter().map(|s| s.revenue).sum();
    let avg_net_income = projections.iter().map(|s| s.net_income).sum::<f64>() / n;
    let total_free_cash_flow: f64 = projections.iter().map(|s| s.free_cash_flow).sum();

    let cagr_revenue = (last.revenue / first.revenue).powf(1.0 / n) - 1.0;

    let avg_gross_margin = projections
        .iter()
        .map(|s| s.gross_profit / s.revenue)
        .sum::<f64>()
        / n;
    let avg_ebitda_margin = projections
        .iter()
        .map(|s| s.ebitda / s.revenue)
        .sum::<f64>()
        / n;

    Ok(SummaryMetrics {
        total_revenue,
        avg_net_income,
        total_free_cash_flow,
        final_year_revenue: last.revenue,
        final_year_net_income: last.net_income,
        cagr_revenue,
        avg_gross_margin,
        avg_ebitda_margin,
    })
}

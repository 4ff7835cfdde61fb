//! Yearly statement snapshot and projection result structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Archetype;
use crate::projection::summary::SummaryMetrics;

/// One fully-populated statement snapshot for a single fiscal year
///
/// All values are currency-denominated f64 except `year`, the calendar year
/// label (base year + offset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSnapshot {
    pub year: i32,

    // Income statement
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub operating_expenses: f64,
    pub ebitda: f64,
    pub depreciation: f64,
    pub ebit: f64,
    pub interest_expense: f64,
    pub ebt: f64,
    pub taxes: f64,
    pub net_income: f64,

    // Balance sheet
    pub cash: f64,
    pub accounts_receivable: f64,
    pub inventory: f64,
    pub current_assets: f64,
    pub ppe: f64,
    pub total_assets: f64,
    pub accounts_payable: f64,
    pub accrued_expenses: f64,
    pub current_liabilities: f64,
    pub long_term_debt: f64,
    pub total_debt: f64,
    pub equity: f64,

    // Cash flow
    pub operating_cash_flow: f64,
    pub capex: f64,
    pub free_cash_flow: f64,
    pub financing_cash_flow: f64,
    pub net_cash_flow: f64,
}

/// Complete result of one engine invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Archetype the projection was computed with
    pub model: Archetype,

    /// Yearly snapshots, chronological, index 0 = base year
    pub projections: Vec<YearSnapshot>,

    /// Scalar reductions over the snapshot sequence
    pub summary: SummaryMetrics,

    /// Timestamp of computation
    pub created_at: DateTime<Utc>,
}

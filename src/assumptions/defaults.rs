//! Per-archetype default assumption tables
//!
//! These are the canonical values served to callers who want to discover
//! tunable inputs before computing. Percent-denominated keys are stored as
//! whole percentages (e.g. 25 for 25%) and divided by 100 at the point of
//! use, matching the original API payloads.

use crate::model::Archetype;

/// Default table for the 3-statement model
pub const THREE_STATEMENT: &[(&str, f64)] = &[
    ("revenue", 10_000_000.0),
    ("cogs", 4_000_000.0),
    ("operating_expenses", 3_000_000.0),
    ("depreciation_amortization", 500_000.0),
    ("interest_expense", 200_000.0),
    ("tax_rate", 25.0),
    ("revenue_growth_rate", 10.0),
    ("gross_margin_percent", 60.0),
    ("opex_percent_revenue", 30.0),
    ("cash", 1_500_000.0),
    ("accounts_receivable", 800_000.0),
    ("inventory", 600_000.0),
    ("ppe", 5_000_000.0),
    ("accounts_payable", 400_000.0),
    ("accrued_expenses", 300_000.0),
    ("long_term_debt", 2_000_000.0),
    ("share_capital", 2_700_000.0),
    ("dso_days", 30.0),
    ("inventory_days", 60.0),
    ("dpo_days", 45.0),
    ("capex_percent_revenue", 8.0),
    ("depreciation_percent", 10.0),
];

/// Default table for the DCF model
pub const DCF: &[(&str, f64)] = &[
    ("revenue", 10_000_000.0),
    ("revenue_growth_rate", 8.0),
    ("fcf_margin", 20.0),
];

/// Default table for the LBO model
pub const LBO: &[(&str, f64)] = &[
    ("revenue", 50_000_000.0),
    ("revenue_growth_rate", 6.0),
    ("ebitda_margin", 25.0),
    ("debt_to_ebitda", 5.0),
    ("interest_rate", 6.5),
];

/// Default table for the startup model
pub const STARTUP: &[(&str, f64)] = &[
    ("revenue", 1_000_000.0),
    ("revenue_growth_rate", 100.0),
    ("monthly_burn_rate", 150_000.0),
    ("funding_raised", 5_000_000.0),
    ("gross_margin_percent", 70.0),
];

/// Default assumption table for an archetype
pub fn table(archetype: Archetype) -> &'static [(&'static str, f64)] {
    match archetype {
        Archetype::ThreeStatement => THREE_STATEMENT,
        Archetype::Dcf => DCF,
        Archetype::Lbo => LBO,
        Archetype::Startup => STARTUP,
    }
}

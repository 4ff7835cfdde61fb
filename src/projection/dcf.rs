//! DCF model formula set
//!
//! Simplified on purpose: every line item is a fixed ratio of the current
//! year's compounded revenue, except free cash flow which uses the dedicated
//! `fcf_margin` assumption. The output is the cash-flow stream that feeds a
//! terminal-value/NPV step downstream; no discounting happens here, and the
//! balance sheet is not re-balanced (equity is its own revenue ratio, not a
//! plug).

use crate::assumptions::AssumptionSet;
use crate::projection::snapshot::YearSnapshot;

// Line-item ratios of revenue
const COGS_RATIO: f64 = 0.40;
const OPEX_RATIO: f64 = 0.30;
const DEPRECIATION_RATIO: f64 = 0.05;
const INTEREST_RATIO: f64 = 0.02;
const TAX_RATE: f64 = 0.25;
const CASH_RATIO: f64 = 0.15;
const AR_RATIO: f64 = 0.10;
const INVENTORY_RATIO: f64 = 0.08;
const PPE_RATIO: f64 = 0.50;
const AP_RATIO: f64 = 0.06;
const ACCRUED_RATIO: f64 = 0.04;
const DEBT_RATIO: f64 = 0.20;
const EQUITY_RATIO: f64 = 0.45;
const CAPEX_RATIO: f64 = 0.05;

/// Compute the snapshot for one year offset
pub(super) fn snapshot(a: &AssumptionSet, year_offset: u32, base_year: i32) -> YearSnapshot {
    let growth = a.rate("revenue_growth_rate");
    let revenue = a.get("revenue") * (1.0 + growth).powf(year_offset as f64);

    // Income statement
    let cogs = revenue * COGS_RATIO;
    let gross_profit = revenue - cogs;
    let operating_expenses = revenue * OPEX_RATIO;
    let ebitda = gross_profit - operating_expenses;
    let depreciation = revenue * DEPRECIATION_RATIO;
    let ebit = ebitda - depreciation;
    let interest_expense = revenue * INTEREST_RATIO;
    let ebt = ebit - interest_expense;
    let taxes = ebt * TAX_RATE;
    let net_income = ebt - taxes;

    // Balance sheet
    let cash = revenue * CASH_RATIO;
    let accounts_receivable = revenue * AR_RATIO;
    let inventory = revenue * INVENTORY_RATIO;
    let current_assets = cash + accounts_receivable + inventory;
    let ppe = revenue * PPE_RATIO;
    let total_assets = current_assets + ppe;
    let accounts_payable = revenue * AP_RATIO;
    let accrued_expenses = revenue * ACCRUED_RATIO;
    let current_liabilities = accounts_payable + accrued_expenses;
    let long_term_debt = revenue * DEBT_RATIO;
    let total_debt = long_term_debt;
    let equity = revenue * EQUITY_RATIO;

    // Cash flow
    let operating_cash_flow = net_income + depreciation;
    let capex = revenue * CAPEX_RATIO;
    // The valuation input: dedicated margin, not OCF minus capex
    let free_cash_flow = revenue * a.rate("fcf_margin");
    let financing_cash_flow = 0.0;
    let net_cash_flow = free_cash_flow + financing_cash_flow;

    YearSnapshot {
        year: base_year + year_offset as i32,
        revenue,
        cogs,
        gross_profit,
        operating_expenses,
        ebitda,
        depreciation,
        ebit,
        interest_expense,
        ebt,
        taxes,
        net_income,
        cash,
        accounts_receivable,
        inventory,
        current_assets,
        ppe,
        total_assets,
        accounts_payable,
        accrued_expenses,
        current_liabilities,
        long_term_debt,
        total_debt,
        equity,
        operating_cash_flow,
        capex,
        free_cash_flow,
        financing_cash_flow,
        net_cash_flow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Archetype;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    #[test]
    fn test_line_items_are_revenue_ratios() {
        let a = AssumptionSet::defaults(Archetype::Dcf);
        for t in 0..5 {
            let s = snapshot(&a, t, 2024);
            assert_relative_eq!(s.cogs, s.revenue * 0.40);
            assert_relative_eq!(s.ebitda, s.revenue * 0.30, max_relative = 1e-12);
            assert_relative_eq!(s.free_cash_flow, s.revenue * 0.20);
        }
    }

    #[test]
    fn test_fcf_uses_dedicated_margin() {
        let mut overrides = HashMap::new();
        overrides.insert("fcf_margin".to_string(), 35.0);
        let a = AssumptionSet::resolve(Archetype::Dcf, &overrides);

        let s = snapshot(&a, 0, 2024);
        assert_relative_eq!(s.free_cash_flow, 10_000_000.0 * 0.35);
        // FCF is decoupled from OCF - capex in this archetype
        assert!((s.operating_cash_flow - s.capex - s.free_cash_flow).abs() > 1.0);
    }

    #[test]
    fn test_revenue_compounds_at_default_growth() {
        let a = AssumptionSet::defaults(Archetype::Dcf);
        let s = snapshot(&a, 3, 2024);
        assert_eq!(s.year, 2027);
        assert_relative_eq!(s.revenue, 10_000_000.0 * 1.08f64.powf(3.0));
    }

    #[test]
    fn test_zero_growth_holds_revenue_flat() {
        let mut overrides = HashMap::new();
        overrides.insert("revenue_growth_rate".to_string(), 0.0);
        let a = AssumptionSet::resolve(Archetype::Dcf, &overrides);

        for t in 0..5 {
            assert_relative_eq!(snapshot(&a, t, 2024).revenue, 10_000_000.0);
        }
    }
}

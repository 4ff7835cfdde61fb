//! Startup model formula set
//!
//! Runway model: operating spend is floored at the annualized burn rate while
//! revenue is small, cash depletes monotonically from the funding raised and
//! floors at zero (no down-rounds or follow-on funding), taxes are always
//! zero, and equity stays flat at the amount raised rather than balancing
//! against assets and liabilities.

use crate::assumptions::AssumptionSet;
use crate::projection::snapshot::YearSnapshot;

/// Opex floor as a multiple of revenue once revenue outgrows the burn rate
const OPEX_REVENUE_MULTIPLE: f64 = 1.5;
const DEPRECIATION_RATIO: f64 = 0.02;
const AR_RATIO: f64 = 0.08;
const PPE_RATIO: f64 = 0.05;
const AP_RATIO: f64 = 0.05;
const ACCRUED_RATIO: f64 = 0.03;
const CAPEX_RATIO: f64 = 0.05;

/// Compute the snapshot for one year offset
pub(super) fn snapshot(a: &AssumptionSet, year_offset: u32, base_year: i32) -> YearSnapshot {
    let growth = a.rate("revenue_growth_rate");
    let revenue = a.get("revenue") * (1.0 + growth).powf(year_offset as f64);

    let annual_burn = a.get("monthly_burn_rate") * 12.0;
    let funding_raised = a.get("funding_raised");

    // Income statement
    let gross_margin = a.rate("gross_margin_percent");
    let cogs = revenue * (1.0 - gross_margin);
    let gross_profit = revenue - cogs;
    // Burn floor dominates while revenue is small
    let operating_expenses = annual_burn.max(revenue * OPEX_REVENUE_MULTIPLE);
    let ebitda = gross_profit - operating_expenses;
    let depreciation = revenue * DEPRECIATION_RATIO;
    let ebit = ebitda - depreciation;
    let interest_expense = 0.0;
    let ebt = ebit - interest_expense;
    let taxes = 0.0;
    let net_income = ebt - taxes;

    // Balance sheet
    // Monotonically depleting runway, floored at zero
    let cash = (funding_raised - annual_burn * (year_offset as f64 + 1.0)).max(0.0);
    let accounts_receivable = revenue * AR_RATIO;
    let inventory = 0.0;
    let current_assets = cash + accounts_receivable + inventory;
    let ppe = revenue * PPE_RATIO;
    let total_assets = current_assets + ppe;
    let accounts_payable = revenue * AP_RATIO;
    let accrued_expenses = revenue * ACCRUED_RATIO;
    let current_liabilities = accounts_payable + accrued_expenses;
    let long_term_debt = 0.0;
    let total_debt = 0.0;
    // Held flat at the raise, not a balancing plug
    let equity = funding_raised;

    // Cash flow
    let operating_cash_flow = net_income + depreciation;
    let capex = revenue * CAPEX_RATIO;
    let free_cash_flow = operating_cash_flow - capex;
    // The full raise lands in the base year only
    let financing_cash_flow = if year_offset == 0 { funding_raised } else { 0.0 };
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

    fn defaults() -> AssumptionSet {
        AssumptionSet::defaults(Archetype::Startup)
    }

    #[test]
    fn test_burn_floor_dominates_small_revenue() {
        // Year 0: revenue 1M * 1.5 = 1.5M < 1.8M annualized burn
        let s = snapshot(&defaults(), 0, 2024);
        assert_relative_eq!(s.operating_expenses, 1_800_000.0);

        // Year 2: revenue 4M * 1.5 = 6M > 1.8M, revenue multiple takes over
        let s = snapshot(&defaults(), 2, 2024);
        assert_relative_eq!(s.operating_expenses, 4_000_000.0 * 1.5);
    }

    #[test]
    fn test_cash_depletes_monotonically_and_floors_at_zero() {
        let a = defaults();
        let mut prior = f64::MAX;
        for t in 0..8 {
            let s = snapshot(&a, t, 2024);
            assert!(s.cash <= prior, "cash increased at offset {}", t);
            assert!(s.cash >= 0.0);
            prior = s.cash;
        }

        // 5M raise, 1.8M/yr burn: 3.2M, 1.4M, then exhausted
        assert_relative_eq!(snapshot(&a, 0, 2024).cash, 3_200_000.0);
        assert_relative_eq!(snapshot(&a, 1, 2024).cash, 1_400_000.0);
        assert_eq!(snapshot(&a, 2, 2024).cash, 0.0);
    }

    #[test]
    fn test_taxes_always_zero() {
        let mut overrides = HashMap::new();
        // Even with revenue driven high enough for positive EBT
        overrides.insert("revenue".to_string(), 100_000_000.0);
        let a = AssumptionSet::resolve(Archetype::Startup, &overrides);

        for t in 0..5 {
            let s = snapshot(&a, t, 2024);
            assert_eq!(s.taxes, 0.0);
        }
    }

    #[test]
    fn test_equity_flat_at_funding_raised() {
        let a = defaults();
        for t in 0..6 {
            let s = snapshot(&a, t, 2024);
            assert_eq!(s.equity, 5_000_000.0);
            assert_eq!(s.total_debt, 0.0);
        }
    }

    #[test]
    fn test_financing_in_base_year_only() {
        let a = defaults();
        assert_relative_eq!(snapshot(&a, 0, 2024).financing_cash_flow, 5_000_000.0);
        for t in 1..5 {
            assert_eq!(snapshot(&a, t, 2024).financing_cash_flow, 0.0);
        }
    }

    #[test]
    fn test_hypergrowth_compounds() {
        // Default 100% growth doubles revenue every year
        let a = defaults();
        assert_relative_eq!(snapshot(&a, 4, 2024).revenue, 16_000_000.0);
    }
}

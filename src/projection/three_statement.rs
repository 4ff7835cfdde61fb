//! 3-statement model formula set
//!
//! The only archetype that ties the statements together: equity is the
//! balancing plug `total_assets - current_liabilities - total_debt`, so the
//! accounting identity holds for every projected year. Working capital uses
//! the standard days-outstanding conventions (DSO, DPO, inventory days).

use crate::assumptions::AssumptionSet;
use crate::projection::snapshot::YearSnapshot;

/// Compute the snapshot for one year offset
pub(super) fn snapshot(a: &AssumptionSet, year_offset: u32, base_year: i32) -> YearSnapshot {
    let growth = a.rate("revenue_growth_rate");
    // Direct exponentiation, not iterative multiplication, so a given offset
    // reproduces the same value regardless of horizon.
    let factor = (1.0 + growth).powf(year_offset as f64);

    // Income statement
    let revenue = a.get("revenue") * factor;
    let cogs = revenue * (1.0 - a.rate("gross_margin_percent"));
    let gross_profit = revenue - cogs;
    let operating_expenses = revenue * a.rate("opex_percent_revenue");
    let ebitda = gross_profit - operating_expenses;
    // Depreciation compounds off the base PP&E every year, not the prior
    // year's balance. Not cumulative depreciation.
    let base_ppe = a.get("ppe");
    let depreciation = base_ppe * a.rate("depreciation_percent") * factor;
    let ebit = ebitda - depreciation;
    // Interest grows with revenue rather than tracking the debt balance
    let interest_expense = a.get("interest_expense") * factor;
    let ebt = ebit - interest_expense;
    // Floored at zero, no tax-loss carryforward
    let taxes = (ebt * a.rate("tax_rate")).max(0.0);
    let net_income = ebt - taxes;

    // Balance sheet
    let accounts_receivable = revenue * a.get("dso_days") / 365.0;
    let inventory = cogs * a.get("inventory_days") / 365.0;
    // Base cash held constant as a structural floor inside current assets
    let base_cash = a.get("cash");
    let current_assets = base_cash + accounts_receivable + inventory;
    let ppe = base_ppe * factor;
    let total_assets = current_assets + ppe;
    let accounts_payable = cogs * a.get("dpo_days") / 365.0;
    let accrued_expenses = a.get("accrued_expenses") * factor;
    let current_liabilities = accounts_payable + accrued_expenses;
    // No paydown modeled in this archetype
    let long_term_debt = a.get("long_term_debt");
    let total_debt = long_term_debt;
    // Equity is the balancing plug
    let equity = total_assets - current_liabilities - total_debt;

    // Cash flow
    let operating_cash_flow = net_income + depreciation;
    let capex = revenue * a.rate("capex_percent_revenue");
    let free_cash_flow = operating_cash_flow - capex;
    let financing_cash_flow = 0.0;
    let net_cash_flow = free_cash_flow + financing_cash_flow;
    // Cumulative-from-base convention, not a rolling balance update
    let cash = base_cash + net_cash_flow * (year_offset as f64 + 1.0);

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
        AssumptionSet::defaults(Archetype::ThreeStatement)
    }

    #[test]
    fn test_base_year_matches_hand_calculation() {
        let s = snapshot(&defaults(), 0, 2024);

        assert_eq!(s.year, 2024);
        assert_relative_eq!(s.revenue, 10_000_000.0);
        assert_relative_eq!(s.cogs, 4_000_000.0);
        assert_relative_eq!(s.gross_profit, 6_000_000.0);
        assert_relative_eq!(s.operating_expenses, 3_000_000.0);
        assert_relative_eq!(s.ebitda, 3_000_000.0);
        assert_relative_eq!(s.depreciation, 500_000.0, max_relative = 1e-12);
        assert_relative_eq!(s.ebit, 2_500_000.0, max_relative = 1e-12);
        assert_relative_eq!(s.interest_expense, 200_000.0);
        assert_relative_eq!(s.ebt, 2_300_000.0, max_relative = 1e-12);
        assert_relative_eq!(s.taxes, 575_000.0, max_relative = 1e-12);
        assert_relative_eq!(s.net_income, 1_725_000.0, max_relative = 1e-12);

        assert_relative_eq!(s.accounts_receivable, 10_000_000.0 * 30.0 / 365.0);
        assert_relative_eq!(s.inventory, 4_000_000.0 * 60.0 / 365.0);
        assert_relative_eq!(s.accounts_payable, 4_000_000.0 * 45.0 / 365.0);

        assert_relative_eq!(s.operating_cash_flow, 2_225_000.0, max_relative = 1e-12);
        assert_relative_eq!(s.capex, 800_000.0, max_relative = 1e-12);
        assert_relative_eq!(s.free_cash_flow, 1_425_000.0, max_relative = 1e-12);
        assert_relative_eq!(s.cash, 1_500_000.0 + 1_425_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_balance_sheet_identities() {
        let a = defaults();
        for t in 0..10 {
            let s = snapshot(&a, t, 2024);
            assert_relative_eq!(
                s.total_assets,
                s.current_assets + s.ppe,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                s.equity,
                s.total_assets - s.current_liabilities - s.total_debt,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_tax_floor_with_negative_ebt() {
        // Interest large enough to drive EBT well below zero
        let mut overrides = HashMap::new();
        overrides.insert("interest_expense".to_string(), 50_000_000.0);
        let a = AssumptionSet::resolve(Archetype::ThreeStatement, &overrides);

        for t in 0..5 {
            let s = snapshot(&a, t, 2024);
            assert!(s.ebt < 0.0);
            assert_eq!(s.taxes, 0.0);
            // With zero taxes, net income equals EBT
            assert_relative_eq!(s.net_income, s.ebt);
        }
    }

    #[test]
    fn test_zero_growth_holds_revenue_flat() {
        let mut overrides = HashMap::new();
        overrides.insert("revenue_growth_rate".to_string(), 0.0);
        let a = AssumptionSet::resolve(Archetype::ThreeStatement, &overrides);

        for t in 0..5 {
            let s = snapshot(&a, t, 2024);
            assert_relative_eq!(s.revenue, 10_000_000.0);
        }
    }

    #[test]
    fn test_negative_growth_declines() {
        let mut overrides = HashMap::new();
        overrides.insert("revenue_growth_rate".to_string(), -20.0);
        let a = AssumptionSet::resolve(Archetype::ThreeStatement, &overrides);

        let year0 = snapshot(&a, 0, 2024);
        let year1 = snapshot(&a, 1, 2024);
        assert_relative_eq!(year1.revenue, year0.revenue * 0.8);
    }

    #[test]
    fn test_debt_held_flat() {
        let a = defaults();
        for t in 0..8 {
            let s = snapshot(&a, t, 2024);
            assert_eq!(s.long_term_debt, 2_000_000.0);
            assert_eq!(s.total_debt, 2_000_000.0);
        }
    }
}

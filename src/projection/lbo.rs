//! LBO model formula set
//!
//! Debt is sized off base-year EBITDA (`debt_to_ebitda` turns) and amortizes
//! linearly at 15% of the original balance per year, floored at zero. Unlike
//! the 3-statement archetype, interest expense tracks the amortizing balance.
//! Taxes are a literal 25% flat rate, not the resolved `tax_rate`.

use crate::assumptions::AssumptionSet;
use crate::projection::snapshot::YearSnapshot;

/// Fraction of the original debt repaid each year
const ANNUAL_AMORTIZATION: f64 = 0.15;
/// Flat tax rate on pre-tax income
const TAX_RATE: f64 = 0.25;
const COGS_RATIO: f64 = 0.45;
const DEPRECIATION_RATIO: f64 = 0.06;
const CASH_RATIO: f64 = 0.05;
const AR_RATIO: f64 = 0.12;
const INVENTORY_RATIO: f64 = 0.10;
const PPE_RATIO: f64 = 0.40;
const AP_RATIO: f64 = 0.08;
const ACCRUED_RATIO: f64 = 0.04;
const EQUITY_RATIO: f64 = 0.30;
const CAPEX_RATIO: f64 = 0.04;

/// Remaining debt balance at a given year offset
///
/// Flat 15%-of-original paydown per year, not a percentage of the remaining
/// balance, so the schedule reaches exactly zero by year 7.
fn remaining_debt(initial_debt: f64, year_offset: u32) -> f64 {
    (initial_debt - year_offset as f64 * initial_debt * ANNUAL_AMORTIZATION).max(0.0)
}

/// Compute the snapshot for one year offset
pub(super) fn snapshot(a: &AssumptionSet, year_offset: u32, base_year: i32) -> YearSnapshot {
    let growth = a.rate("revenue_growth_rate");
    let base_revenue = a.get("revenue");
    let revenue = base_revenue * (1.0 + growth).powf(year_offset as f64);

    let ebitda_margin = a.rate("ebitda_margin");
    let ebitda = revenue * ebitda_margin;

    // Debt sized off base-year EBITDA, not the compounded figure
    let initial_debt = base_revenue * ebitda_margin * a.get("debt_to_ebitda");
    let debt = remaining_debt(initial_debt, year_offset);

    // Income statement
    let cogs = revenue * COGS_RATIO;
    let gross_profit = revenue - cogs;
    let operating_expenses = gross_profit - ebitda;
    let depreciation = revenue * DEPRECIATION_RATIO;
    let ebit = ebitda - depreciation;
    let interest_expense = debt * a.rate("interest_rate");
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
    let long_term_debt = debt;
    let total_debt = debt;
    let equity = revenue * EQUITY_RATIO;

    // Cash flow
    let operating_cash_flow = net_income + depreciation;
    let capex = revenue * CAPEX_RATIO;
    let free_cash_flow = operating_cash_flow - capex;
    // Annual debt service outflow, skipped in the acquisition year
    let financing_cash_flow = if year_offset == 0 {
        0.0
    } else {
        -initial_debt * ANNUAL_AMORTIZATION
    };
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

//! Financial Modeling CLI
//!
//! Runs one model projection from the command line, prints the yearly
//! statements and summary, and optionally writes the snapshots to CSV.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use financial_modeling::{assumptions::loader, compute, YearSnapshot};

#[derive(Debug, Parser)]
#[command(name = "financial_modeling", about = "Financial statement projection engine")]
struct Args {
    /// Model to run: three-statement, dcf, lbo, startup
    #[arg(long, default_value = "three-statement")]
    model: String,

    /// Number of years to project
    #[arg(long, default_value_t = 5)]
    years: i32,

    /// Calendar year of the first projected snapshot
    #[arg(long, default_value_t = 2024)]
    base_year: i32,

    /// Override an assumption, e.g. --set revenue_growth_rate=12
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// CSV file of key,value assumption overrides
    #[arg(long, value_name = "PATH")]
    variables_csv: Option<PathBuf>,

    /// Write yearly snapshots to a CSV file
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn parse_overrides(args: &Args) -> Result<HashMap<String, f64>> {
    let mut variables = match &args.variables_csv {
        Some(path) => loader::load_overrides(path)
            .map_err(|e| anyhow::anyhow!("failed to load {}: {}", path.display(), e))?,
        None => HashMap::new(),
    };

    // --set wins over CSV values
    for pair in &args.overrides {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid override '{}': expected KEY=VALUE", pair);
        };
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("invalid numeric value in override '{}'", pair))?;
        variables.insert(key.trim().to_string(), value);
    }

    Ok(variables)
}

fn write_csv(path: &PathBuf, projections: &[YearSnapshot]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(file, "Year,Revenue,COGS,GrossProfit,Opex,EBITDA,Depreciation,EBIT,Interest,EBT,Taxes,NetIncome,Cash,AR,Inventory,CurrentAssets,PPE,TotalAssets,AP,Accrued,CurrentLiabilities,LTD,TotalDebt,Equity,OCF,CapEx,FCF,FinancingCF,NetCF")?;

    for s in projections {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            s.year,
            s.revenue,
            s.cogs,
            s.gross_profit,
            s.operating_expenses,
            s.ebitda,
            s.depreciation,
            s.ebit,
            s.interest_expense,
            s.ebt,
            s.taxes,
            s.net_income,
            s.cash,
            s.accounts_receivable,
            s.inventory,
            s.current_assets,
            s.ppe,
            s.total_assets,
            s.accounts_payable,
            s.accrued_expenses,
            s.current_liabilities,
            s.long_term_debt,
            s.total_debt,
            s.equity,
            s.operating_cash_flow,
            s.capex,
            s.free_cash_flow,
            s.financing_cash_flow,
            s.net_cash_flow,
        )?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let variables = parse_overrides(&args)?;

    let result = compute(&args.model, &variables, args.years, args.base_year)?;

    println!("Financial Modeling v0.1.0");
    println!("=========================\n");
    println!("Model: {}", args.model);
    println!("Horizon: {} years from {}\n", args.years, args.base_year);

    println!(
        "{:>6} {:>16} {:>16} {:>16} {:>16} {:>16} {:>16}",
        "Year", "Revenue", "EBITDA", "Net Income", "Total Assets", "Equity", "FCF"
    );
    println!("{}", "-".repeat(108));

    for s in &result.projections {
        println!(
            "{:>6} {:>16.2} {:>16.2} {:>16.2} {:>16.2} {:>16.2} {:>16.2}",
            s.year,
            s.revenue,
            s.ebitda,
            s.net_income,
            s.total_assets,
            s.equity,
            s.free_cash_flow,
        );
    }

    let summary = &result.summary;
    println!("\nSummary:");
    println!("  Total Revenue:        ${:.2}", summary.total_revenue);
    println!("  Avg Net Income:       ${:.2}", summary.avg_net_income);
    println!("  Total FCF:            ${:.2}", summary.total_free_cash_flow);
    println!("  Final Year Revenue:   ${:.2}", summary.final_year_revenue);
    println!("  Final Year Net Inc:   ${:.2}", summary.final_year_net_income);
    println!("  Revenue CAGR:         {:.2}%", summary.cagr_revenue * 100.0);
    println!("  Avg Gross Margin:     {:.1}%", summary.avg_gross_margin * 100.0);
    println!("  Avg EBITDA Margin:    {:.1}%", summary.avg_ebitda_margin * 100.0);

    if let Some(path) = &args.output {
        write_csv(path, &result.projections)?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

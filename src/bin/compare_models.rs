//! Run all four model archetypes on their default assumptions side by side
//!
//! Useful for eyeballing how the archetype policy choices (debt schedule,
//! burn floor, balancing plug) shape the same projection horizon.

use financial_modeling::{compute_model, Archetype};
use std::collections::HashMap;

const HORIZON: i32 = 5;
const BASE_YEAR: i32 = 2024;

fn main() {
    env_logger::init();

    println!("Model Comparison ({} years from {})", HORIZON, BASE_YEAR);
    println!("{}", "=".repeat(100));

    let no_overrides = HashMap::new();

    for archetype in Archetype::ALL {
        let result = match compute_model(archetype, &no_overrides, HORIZON, BASE_YEAR) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{}: {}", archetype.id(), e);
                continue;
            }
        };

        let info = archetype.info();
        println!("\n{} ({})", info.name, archetype.id());
        println!("{}", "-".repeat(100));
        println!(
            "{:>6} {:>16} {:>16} {:>16} {:>16} {:>16}",
            "Year", "Revenue", "EBITDA", "Net Income", "Total Debt", "Cash"
        );

        for s in &result.projections {
            println!(
                "{:>6} {:>16.0} {:>16.0} {:>16.0} {:>16.0} {:>16.0}",
                s.year, s.revenue, s.ebitda, s.net_income, s.total_debt, s.cash,
            );
        }

        let summary = &result.summary;
        println!(
            "Summary: total revenue ${:.0}, CAGR {:.2}%, avg EBITDA margin {:.1}%, total FCF ${:.0}",
            summary.total_revenue,
            summary.cagr_revenue * 100.0,
            summary.avg_ebitda_margin * 100.0,
            summary.total_free_cash_flow,
        );
    }
}

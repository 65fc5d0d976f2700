//! Agency Growth CLI
//!
//! Runs a full three-scenario projection for a strategy configuration and
//! prints per-scenario summaries plus the benchmark report.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use agency_growth::strategy::loader;
use agency_growth::{ScenarioRunner, StrategyConfig};

#[derive(Debug, Parser)]
#[command(name = "agency_growth", about = "Agency growth projection and benchmarking")]
struct Args {
    /// Path to a strategy configuration JSON file (defaults to the bundled example)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the projection horizon in months
    #[arg(short, long)]
    months: Option<u32>,

    /// Print the Moderate scenario month by month
    #[arg(long)]
    detail: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut strategy: StrategyConfig = loader::load_or_example(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("loading strategy configuration")?;
    if let Some(months) = args.months {
        strategy.horizon_months = months;
    }
    strategy
        .validate()
        .context("strategy configuration failed validation")?;

    println!("Agency Growth v0.1.0");
    println!("====================\n");
    println!("Horizon: {} months", strategy.horizon_months);
    println!("Starting book: {:.0} policies / {:.0} customers",
        strategy.starting_policies, strategy.starting_customers);
    println!("Monthly marketing spend: ${:.0}\n", strategy.marketing.total());

    let runner = ScenarioRunner::new();
    let projection = runner.run_full(&strategy);

    println!("{:<14} {:>10} {:>10} {:>14} {:>14} {:>12} {:>10}",
        "Scenario", "Policies", "Customers", "Total Revenue", "Net Profit", "Margin", "BreakEven");
    println!("{}", "-".repeat(90));
    for result in projection.scenarios.in_order() {
        let s = result.summary();
        println!("{:<14} {:>10.0} {:>10.0} {:>14.0} {:>14.0} {:>11.1}% {:>10}",
            s.scenario.as_str(),
            s.final_policies,
            s.final_customers,
            s.total_revenue,
            s.net_profit,
            s.final_ebitda_margin * 100.0,
            s.break_even_month
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    if args.detail {
        println!("\nModerate scenario, month by month:");
        println!("{:>5} {:>10} {:>10} {:>8} {:>12} {:>12} {:>10} {:>10}",
            "Month", "Policies", "Customers", "PPC", "Revenue", "EBITDA", "CAC", "LTV:CAC");
        for row in &projection.scenarios.moderate.months {
            println!("{:>5} {:>10.1} {:>10.1} {:>8.3} {:>12.0} {:>12.0} {:>10.2} {:>10.2}",
                row.month,
                row.policies,
                row.customers,
                row.policies_per_customer,
                row.revenue,
                row.ebitda,
                row.cac,
                row.ltv_cac_ratio,
            );
        }
    }

    let b = &projection.benchmarks;
    println!("\nBenchmarks (Moderate, final month):");
    println!("  Annualized growth:    {:>8.1}%", b.annualized_growth_pct);
    println!("  EBITDA margin:        {:>8.1}%  [{}]", b.ebitda_margin_pct, b.ebitda_status.as_str());
    println!("  Rule of 20 score:     {:>8.1}   [{}]", b.rule_of_20_score, b.rule_of_20_rating.as_str());
    println!("  LTV:CAC ratio:        {:>8.2}   [{}]", b.ltv_cac_ratio, b.ltv_cac_status.as_str());
    println!("  Revenue per employee: {:>8.0}   [{}]", b.revenue_per_employee, b.revenue_per_employee_rating.as_str());
    println!("  Policies/customer:    {:>8.2}   [{}]", b.policies_per_customer, b.bundling_tier.as_str());
    println!("  Staffing ratio:       {:>8.2}   (target {:.2})", b.staffing_ratio, b.staffing_ratio_target);
    println!("  Marketing spend:      {:>8.1}%  ({})", b.marketing_spend_pct * 100.0,
        if b.marketing_spend_in_range { "in range" } else { "out of range" });
    println!("  Technology spend:     {:>8.1}%  ({})", b.tech_spend_pct * 100.0,
        if b.tech_spend_in_range { "in range" } else { "out of range" });

    Ok(())
}

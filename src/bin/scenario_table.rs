//! Export all three scenarios month by month to CSV
//!
//! Writes one row per scenario-month for comparison in a spreadsheet.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use agency_growth::strategy::loader;
use agency_growth::{ScenarioRunner, StrategyConfig};

#[derive(Debug, Parser)]
#[command(name = "scenario_table", about = "Export scenario projections to CSV")]
struct Args {
    /// Path to a strategy configuration JSON file (defaults to the bundled example)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long, default_value = "scenario_projection.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let strategy: StrategyConfig = loader::load_or_example(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("loading strategy configuration")?;
    strategy
        .validate()
        .context("strategy configuration failed validation")?;

    let runner = ScenarioRunner::new();
    let set = runner.run_all(&strategy);

    write_csv(&args.output, &set)?;
    println!("Wrote {}", args.output.display());

    for result in set.in_order() {
        let s = result.summary();
        println!(
            "{:<13} final policies {:>9.0}, net profit {:>12.0}, break-even {}",
            s.scenario.as_str(),
            s.final_policies,
            s.net_profit,
            s.break_even_month
                .map(|m| format!("month {m}"))
                .unwrap_or_else(|| "never".to_string()),
        );
    }

    Ok(())
}

fn write_csv(path: &Path, set: &agency_growth::ScenarioSet) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "scenario",
        "month",
        "new_customers",
        "new_policies",
        "policies",
        "customers",
        "policies_per_customer",
        "annual_retention",
        "monthly_retention",
        "revenue",
        "costs",
        "ebitda",
        "ebitda_margin",
        "cac",
        "ltv",
        "ltv_cac_ratio",
        "cumulative_cash",
    ])?;

    for result in set.in_order() {
        for row in &result.months {
            writer.write_record([
                result.scenario.as_str().to_string(),
                row.month.to_string(),
                format!("{:.4}", row.new_customers),
                format!("{:.4}", row.new_policies),
                format!("{:.4}", row.policies),
                format!("{:.4}", row.customers),
                format!("{:.6}", row.policies_per_customer),
                format!("{:.6}", row.annual_retention),
                format!("{:.8}", row.monthly_retention),
                format!("{:.2}", row.revenue),
                format!("{:.2}", row.costs),
                format!("{:.2}", row.ebitda),
                format!("{:.6}", row.ebitda_margin),
                format!("{:.2}", row.cac),
                format!("{:.2}", row.ltv),
                format!("{:.4}", row.ltv_cac_ratio),
                format!("{:.2}", row.cumulative_cash),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

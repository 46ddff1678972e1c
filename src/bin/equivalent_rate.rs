//! Compare an insurance quote with the bank savings rate that pays the same
//!
//! Example:
//!   equivalent-rate --premium 131000 --refund-ratio 119.1 --term 5,7,10,20

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use equivalent_rate::{
    report::{comparison_rows, format_currency, format_rate, write_comparison_csv},
    CalculatorConfig, EquivalenceEngine, ReconcileBasis, TermResult,
};
use std::io;
use std::path::PathBuf;

/// Bank-deposit equivalent rate of a whole-life insurance savings quote
#[derive(Parser)]
#[command(name = "equivalent-rate", version, about)]
struct Cli {
    /// Monthly premium
    #[arg(long)]
    premium: f64,

    /// Refund ratio at the reference horizon, in percent (e.g. 119.1)
    #[arg(long)]
    refund_ratio: f64,

    /// Payment terms in years (repeat or comma-separate)
    #[arg(long = "term", value_delimiter = ',', required = true)]
    terms: Vec<u32>,

    /// JSON configuration file (tax rate, deposit rate, horizon, terms)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reconcile from the unrounded solved rate
    #[arg(long)]
    exact_reconcile: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if cli.exact_reconcile {
        config.reconcile_basis = ReconcileBasis::Exact;
    }

    let engine = EquivalenceEngine::new(config)?;
    let results = engine.evaluate_quote(cli.premium, cli.refund_ratio, &cli.terms)?;

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results)?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            write_comparison_csv(io::stdout().lock(), &comparison_rows(&results))
                .context("Failed to write CSV")?;
        }
        OutputFormat::Text => print_text(&results, engine.config()),
    }

    Ok(())
}

fn print_text(results: &[TermResult], config: &CalculatorConfig) {
    println!("Summary");
    println!("{:<6} {:>16} {:>16} {:>16} {:>10}", "Term", "Principal", "Interest", "Payout", "Rate");
    for row in comparison_rows(results) {
        println!(
            "{:<6} {:>16} {:>16} {:>16} {:>10}",
            row.term_label,
            format_currency(row.total_principal),
            format_currency(row.interest),
            format_currency(row.total_payout),
            format_rate(row.equivalent_rate_percent, config.display_decimals),
        );
    }

    for result in results {
        let recon = &result.reconciliation;
        println!("\n{}-year payment term", result.payment_term_years);
        println!("  {}", result.description);
        println!("  Savings interest (pre-tax): {}", format_currency(recon.savings_interest_pre_tax));
        println!("  Tax on savings interest:    {}", format_currency(recon.tax_on_savings));
        println!("  Balance after savings:      {}", format_currency(recon.savings_total_after_tax));
        if result.rate.is_two_phase_model {
            println!("  Deposit interest (pre-tax): {}", format_currency(recon.deposit_interest_pre_tax));
            println!("  Tax on deposit interest:    {}", format_currency(recon.tax_on_deposit));
        }
        println!("  Total tax withheld:         {}", format_currency(recon.total_tax()));
        println!("  Bank balance at horizon:    {}", format_currency(recon.final_balance));
        println!("  Insurance payout:           {}", format_currency(result.projection.total_payout_at_horizon));
        println!("  Difference:                 {}", format_currency(recon.residual));
    }
}

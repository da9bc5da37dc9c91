use anyhow::Result;
use std::path::Path;

use crate::categorize::Categorizer;
use crate::config::{shellexpand, Config, STATEMENT_ENV};
use crate::import::StatementLoader;
use crate::models::Category;
use crate::pipeline::{self, Dashboard};
use crate::ui::util::{format_amount, text_bar, truncate};

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[1].as_str() {
        "table" | "t" => cli_table(&args[2..], config),
        "summary" | "s" => cli_summary(config),
        "categories" => cli_categories(),
        "export" => cli_export(&args[2..], config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("ofxdash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ofxdash — spending dashboard for OFX bank statements");
    println!();
    println!("Usage: ofxdash [command] [--file <statement.ofx>]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive dashboard");
    println!("  table [category]              Print categorized transactions");
    println!("  summary                       Print totals and spending by category");
    println!("  categories                    List category keyword rules");
    println!("  export <out.csv>              Write categorized transactions to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Statement file: --file, else ${STATEMENT_ENV}, else the data directory");
}

/// Run the pipeline; a failed load is reported with its user message.
fn load(config: &Config) -> Result<Dashboard> {
    let loader = StatementLoader::new(&config.statement_path);
    let dashboard = pipeline::run(&loader, &Categorizer::default())
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    eprintln!(
        "Loaded {} transactions from {}",
        dashboard.transactions.len(),
        loader.path().display()
    );
    Ok(dashboard)
}

fn cli_table(args: &[String], config: &Config) -> Result<()> {
    let filter = match args.first().filter(|a| !a.starts_with('-')) {
        Some(name) => Some(
            Category::parse(name).ok_or_else(|| anyhow::anyhow!("Unknown category: {name}"))?,
        ),
        None => None,
    };
    let dash = load(config)?;

    println!(
        "{:<10}  {:<10}  {:>14}  {:<40}  Category",
        "Date", "Type", "Amount", "Description"
    );
    println!("{}", "─".repeat(100));
    for txn in dash
        .transactions
        .iter()
        .filter(|t| filter.is_none() || t.category == filter)
    {
        println!(
            "{:<10}  {:<10}  {:>14}  {:<40}  {}",
            txn.date_string(),
            truncate(&txn.kind, 10),
            format_amount(txn.amount),
            truncate(&txn.description, 40),
            txn.category_name(),
        );
    }
    Ok(())
}

fn cli_summary(config: &Config) -> Result<()> {
    let dash = load(config)?;
    let totals = &dash.totals;

    println!("ofxdash — {}", config.statement_path.display());
    println!("{}", "─".repeat(40));
    println!("  Income:     {}", format_amount(totals.income));
    println!("  Expenses:   {}", format_amount(totals.expenses.abs()));
    println!("  Net:        {}", format_amount(totals.net()));
    println!("  Total Txns: {}", totals.count);

    println!();
    if dash.spending.is_empty() {
        println!("No spending in this statement");
        return Ok(());
    }

    println!("Spending by Category:");
    let max = dash
        .spending
        .iter()
        .map(|(_, amt)| *amt)
        .max()
        .unwrap_or_default();
    for (category, amount) in &dash.spending {
        println!(
            "  {:<30} {:>12}  {}",
            category.name(),
            format_amount(*amount),
            text_bar(*amount, max, 30)
        );
    }
    Ok(())
}

fn cli_categories() -> Result<()> {
    let categorizer = Categorizer::default();
    println!("{:<4} {:<30} Keywords", "#", "Category");
    println!("{}", "─".repeat(80));
    for (i, rule) in categorizer.rules().iter().enumerate() {
        println!(
            "{:<4} {:<30} {}",
            i + 1,
            format!("{} ({})", rule.category.name(), rule.category.english()),
            rule.keywords.join(", ")
        );
    }
    let fallback = crate::categorize::FALLBACK;
    println!(
        "{:<4} {:<30} (no match)",
        categorizer.rules().len() + 1,
        format!("{} ({})", fallback.name(), fallback.english()),
    );
    Ok(())
}

fn cli_export(args: &[String], config: &Config) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .ok_or_else(|| anyhow::anyhow!("Usage: ofxdash export <out.csv>"))?;

    let dash = load(config)?;
    let count = crate::report::export_to_csv(&dash.transactions, Path::new(&output_path))?;
    println!("Exported {count} transactions to {output_path}");
    Ok(())
}

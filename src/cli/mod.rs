use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{AppError, LedgerService, Summary};
use crate::domain::{format_cents, parse_cents, Kind};

/// Tally - Personal Budget Ledger
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "A local-first budget tracker backed by a flat-file ledger")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(short, long, default_value = "budget_data.txt")]
    pub file: String,

    /// With no subcommand, the interactive menu runs
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an income transaction
    Income {
        /// Category label (e.g., "Salary")
        category: String,

        /// Amount (e.g., "500" or "500.00")
        amount: String,

        /// Date of the transaction (DD-MM-YYYY)
        date: String,
    },

    /// Record an expense transaction
    Expense {
        /// Category label (e.g., "Groceries")
        category: String,

        /// Amount (e.g., "50" or "50.00")
        amount: String,

        /// Date of the transaction (DD-MM-YYYY)
        date: String,
    },

    /// Show balance, transactions and spending by category
    Summary {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Export data to CSV or JSON
    Export {
        /// What to export: transactions, summary
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json (default: csv for transactions, json for summary)
        #[arg(short = 'F', long)]
        format: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = LedgerService::open(&self.file)?;

        match self.command {
            None => {
                let stdin = io::stdin();
                run_menu(&mut service, &mut stdin.lock())?;
            }

            Some(Commands::Income {
                category,
                amount,
                date,
            }) => {
                record_transaction(&mut service, category, &amount, Kind::Income, &date)?;
            }

            Some(Commands::Expense {
                category,
                amount,
                date,
            }) => {
                record_transaction(&mut service, category, &amount, Kind::Expense, &date)?;
            }

            Some(Commands::Summary { format }) => match format.as_str() {
                "table" => print_summary(&service.summary()),
                "json" => {
                    let json = serde_json::to_string_pretty(&service.summary())?;
                    println!("{}", json);
                }
                other => anyhow::bail!("Invalid format '{}'. Valid formats: table, json", other),
            },

            Some(Commands::Export {
                export_type,
                output,
                format,
            }) => {
                run_export_command(&service, &export_type, output.as_deref(), format.as_deref())?;
            }
        }

        Ok(())
    }
}

fn record_transaction(
    service: &mut LedgerService,
    category: String,
    amount: &str,
    kind: Kind,
    date: &str,
) -> Result<()> {
    let amount_cents =
        parse_cents(amount).context("Invalid amount format. Use '50.00' or '50'")?;

    service.add_transaction(category.clone(), amount_cents, kind, date)?;

    println!(
        "Recorded {}: {} {} ({})",
        kind,
        format_cents(amount_cents),
        category,
        date
    );
    Ok(())
}

/// The interactive menu loop. Only option 4 (or end of input) leaves it;
/// a bad date or amount reports and returns to the menu.
fn run_menu(service: &mut LedgerService, input: &mut impl BufRead) -> Result<()> {
    loop {
        println!();
        println!("--- Budget Menu ---");
        println!("1. Add income");
        println!("2. Add expense");
        println!("3. Display summary");
        println!("4. Exit");

        let Some(choice) = read_line(input, "Enter your choice (1-4): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => prompt_add(service, Kind::Income, input)?,
            "2" => prompt_add(service, Kind::Expense, input)?,
            "3" => print_summary(&service.summary()),
            "4" => {
                println!("Goodbye.");
                break;
            }
            other => println!("Invalid choice '{}'. Enter a number between 1 and 4.", other),
        }
    }

    Ok(())
}

fn prompt_add(service: &mut LedgerService, kind: Kind, input: &mut impl BufRead) -> Result<()> {
    let Some(category) = read_line(input, &format!("Enter {} category: ", kind))? else {
        return Ok(());
    };
    let Some(amount) = read_line(input, &format!("Enter {} amount: ", kind))? else {
        return Ok(());
    };
    let Some(date) = read_line(input, &format!("Enter {} date (DD-MM-YYYY): ", kind))? else {
        return Ok(());
    };

    let amount_cents = match parse_cents(&amount) {
        Ok(cents) => cents,
        Err(_) => {
            println!("Invalid amount '{}'. Use a number like '50.00'.", amount);
            return Ok(());
        }
    };

    match service.add_transaction(category, amount_cents, kind, &date) {
        Ok(()) => println!("Recorded {} of {}.", kind, format_cents(amount_cents)),
        Err(AppError::InvalidDate(_)) => {
            println!("Invalid date format. Please use the format DD-MM-YYYY.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn read_line(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        // End of input behaves like exiting the menu
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn print_summary(summary: &Summary) {
    println!();
    println!("Current balance: {}", format_cents(summary.balance_cents));

    if summary.transactions.is_empty() {
        println!("No transactions recorded.");
    } else {
        println!();
        println!(
            "{:<12} {:<20} {:>12} {:<8}",
            "DATE", "CATEGORY", "AMOUNT", "KIND"
        );
        println!("{}", "-".repeat(54));
        for line in &summary.transactions {
            println!(
                "{:<12} {:<20} {:>12} {:<8}",
                line.date,
                line.category,
                format_cents(line.amount_cents),
                line.kind
            );
        }
    }

    if !summary.spending.is_empty() {
        println!();
        println!("Spending by category:");
        for entry in &summary.spending {
            println!(
                "  {:<20} {}",
                entry.category,
                format_cents(entry.total_cents)
            );
        }
    }
}

fn run_export_command(
    service: &LedgerService,
    export_type: &str,
    output: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    match export_type {
        "transactions" => match format.unwrap_or("csv") {
            "csv" => {
                let count = exporter.export_transactions_csv(writer)?;
                if output.is_some() {
                    eprintln!("Exported {} transactions", count);
                }
            }
            "json" => {
                let count = exporter.export_transactions_json(writer)?;
                if output.is_some() {
                    eprintln!("Exported {} transactions", count);
                }
            }
            other => anyhow::bail!("Invalid format '{}'. Valid formats: csv, json", other),
        },
        "summary" => match format.unwrap_or("json") {
            "json" => {
                exporter.export_summary_json(writer)?;
                if output.is_some() {
                    eprintln!("Exported summary");
                }
            }
            other => anyhow::bail!("Invalid format '{}' for summary. Valid formats: json", other),
        },
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: transactions, summary",
                export_type
            );
        }
    }

    Ok(())
}

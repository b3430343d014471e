use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use stacks_airdrop::{inspect, Inspection};

const INVALID_EXAMPLES: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "debug")]
#[command(about = "Report what each cleaning stage does to an address list", long_about = None)]
pub struct Cli {
    /// Headerless CSV with one Stacks address per line
    pub input: PathBuf,

    /// Print the stage report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &Cli) -> Result<()> {
    let inspection = inspect(&args.input).context("Failed to inspect addresses")?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&inspection).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print_report(&inspection);
    }
    Ok(())
}

fn print_report(inspection: &Inspection) {
    let report = &inspection.filter;
    let format = &inspection.format;

    println!("1. Initial load: {} addresses", report.initial);
    println!("\nFirst {} addresses:", report.preview.len());
    for (i, record) in report.preview.iter().enumerate() {
        match record {
            Some(address) => println!("  {}: '{}'", i + 1, address),
            None => println!("  {}: <missing>", i + 1),
        }
    }

    println!(
        "2. After removing missing values and stripping: {} addresses",
        report.after_absent
    );
    println!("3. Duplicates found: {}", report.duplicates_removed);
    println!("4. After removing duplicates: {} addresses", report.unique);
    println!(
        "5. Contract addresses (with dots): {}",
        report.contracts_found
    );
    if !report.contract_examples.is_empty() {
        println!("   Examples:");
        for address in &report.contract_examples {
            println!("     {address}");
        }
    }
    println!(
        "6. After removing contracts: {} addresses",
        report.after_contracts
    );
    println!("7. Burn addresses found: {}", report.burn_found);
    println!(
        "8. After removing burn address: {} addresses",
        report.after_burn
    );
    println!("9. Valid format addresses: {}", format.valid.len());
    println!("10. Invalid format addresses: {}", format.invalid.len());

    if !format.invalid.is_empty() {
        println!("\nInvalid addresses examples:");
        for address in format.invalid.iter().take(INVALID_EXAMPLES) {
            println!("  '{}' - length: {}", address, address.chars().count());
        }
    }
}

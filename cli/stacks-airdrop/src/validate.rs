use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::clean::ContractArgs;
use stacks_airdrop::{generate, RenderMode};

#[derive(Parser, Debug)]
#[command(name = "validate")]
#[command(about = "Generate a validation contract that prints every cleaned address", long_about = None)]
pub struct Cli {
    /// Headerless CSV with one Stacks address per line
    pub input: PathBuf,

    #[command(flatten)]
    pub contract: ContractArgs,
}

pub fn run(args: Cli) -> Result<()> {
    println!("Processing: {}", args.input.display());
    println!("{}", "-".repeat(50));

    let generated = generate(
        &args.input,
        RenderMode::Validation,
        &args.contract.transfer_call(),
        &args.contract.output,
    )
    .context("Error processing CSV")?;

    let report = &generated.inspection.filter;
    let format = &generated.inspection.format;
    println!("Loaded {} addresses from CSV", report.initial);
    println!("Removed {} duplicate addresses", report.duplicates_removed);
    println!("Unique addresses: {}", report.unique);
    println!("Removed {} contract addresses", report.contracts_found);
    println!("Removed {} burn addresses", report.burn_found);
    println!("Valid format addresses: {}", format.valid.len());
    println!("Invalid format addresses: {}", format.invalid.len());
    println!("Clarity contract generated: {}", generated.output.display());

    println!("\n{}", "=".repeat(50));
    println!(
        "Generated Clarity contract with {} addresses",
        generated.rendered()
    );
    println!("Run 'clarinet check' to validate all addresses");
    Ok(())
}

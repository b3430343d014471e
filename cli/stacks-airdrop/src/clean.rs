use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::path::PathBuf;

use stacks_airdrop::contract::{DEFAULT_AMOUNT, DEFAULT_TOKEN_CONTRACT};
use stacks_airdrop::{generate, RenderMode, TransferCall, DEFAULT_OUTPUT_PATH};

#[derive(Parser, Debug)]
#[command(name = "clean")]
#[command(about = "Clean an address list and generate the airdrop transfer contract", long_about = None)]
pub struct Cli {
    /// Headerless CSV with one Stacks address per line
    pub input: PathBuf,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Where the generated contract goes and what each transfer sends.
#[derive(Args, Debug)]
pub struct ContractArgs {
    /// Output path for the generated Clarity contract
    #[arg(short, long, env = "AIRDROP_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Token contract whose `transfer` is called for every recipient
    #[arg(long, env = "AIRDROP_TOKEN_CONTRACT", default_value = DEFAULT_TOKEN_CONTRACT)]
    pub token_contract: String,

    /// Amount in base units sent to each recipient
    #[arg(long, env = "AIRDROP_AMOUNT", default_value_t = DEFAULT_AMOUNT)]
    pub amount: u128,
}

impl ContractArgs {
    pub fn transfer_call(&self) -> TransferCall {
        TransferCall {
            token_contract: self.token_contract.clone(),
            amount: self.amount,
        }
    }
}

pub fn run(args: Cli) -> Result<()> {
    let generated = generate(
        &args.input,
        RenderMode::Transfer,
        &args.contract.transfer_call(),
        &args.contract.output,
    )
    .context("Failed to generate transfer contract")?;

    println!(
        "Generated contract with {} clean addresses",
        generated.rendered()
    );
    Ok(())
}

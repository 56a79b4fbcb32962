// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_journal::ops;

use crate::{common_args::JournalArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployment script that recorded the step
    script: String,
    /// Label of the step that created the contract
    label: String,

    #[command(flatten)]
    journal: JournalArgs,
}

pub fn exec(args: Args) -> CliResult {
    let address = ops::contract_address(args.journal.journal_path(&args.script), &args.label)?;
    println!("{address}");
    Ok(())
}

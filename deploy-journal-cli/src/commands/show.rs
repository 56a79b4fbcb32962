// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_journal::ops;

use crate::{common_args::JournalArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployment script whose journal to print
    script: String,

    #[command(flatten)]
    journal: JournalArgs,
}

pub fn exec(args: Args) -> CliResult {
    ops::show(args.journal.journal_path(&args.script))?;
    Ok(())
}

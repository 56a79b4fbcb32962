// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod address;
mod create2;
mod deploy;
mod send;
mod show;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the contract address recorded for a step
    #[clap(visible_alias = "a")]
    Address(address::Args),
    /// Compute a CREATE2 contract address
    Create2(create2::Args),
    /// Deploy contract init code as a journaled step
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Send a contract call as a journaled step
    Send(send::Args),
    /// Print the steps recorded in a journal
    #[clap(visible_alias = "s")]
    Show(show::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Address(args) => address::exec(args),
        Command::Create2(args) => create2::exec(args),
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Send(args) => send::exec(args).await,
        Command::Show(args) => show::exec(args),
    }
}

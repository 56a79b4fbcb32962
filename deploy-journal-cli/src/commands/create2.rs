// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, B256};
use deploy_journal::{create2_address, pair_salt};
use eyre::eyre;

use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Address of the factory contract issuing the CREATE2
    #[arg(long)]
    factory: Address,
    /// Hash of the init code the factory deploys
    #[arg(long)]
    init_code_hash: B256,
    /// Salt passed to CREATE2
    #[arg(long, conflicts_with = "pair")]
    salt: Option<B256>,
    /// Derive the salt from a token pair, as pair factories do
    #[arg(long, num_args = 2, value_names = ["TOKEN_A", "TOKEN_B"])]
    pair: Option<Vec<Address>>,
}

pub fn exec(args: Args) -> CliResult {
    let salt = match (args.salt, args.pair.as_deref()) {
        (Some(salt), _) => salt,
        (None, Some(&[token_a, token_b])) => pair_salt(token_a, token_b),
        _ => return Err(eyre!("either --salt or --pair is required").into()),
    };
    println!("{}", create2_address(args.factory, salt, args.init_code_hash));
    Ok(())
}

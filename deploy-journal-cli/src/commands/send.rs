// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{utils::parse_ether, Address, U256};
use deploy_journal::ops;

use crate::{
    common_args::{AuthArgs, ProviderArgs, SubmitArgs},
    error::CliResult,
    utils::decode0x,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract to call
    #[arg(long)]
    to: Address,
    /// Hex-encoded calldata
    #[arg(long)]
    calldata: String,
    /// The amount of Ether sent along with the call
    #[arg(long, value_parser = parse_ether, default_value = "0")]
    value: U256,

    #[command(flatten)]
    submit: SubmitArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let calldata = decode0x(&args.calldata)?;

    let context = args.submit.context()?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let receipt = ops::send(
        &context,
        &args.submit.script,
        &args.submit.label,
        args.to,
        calldata.into(),
        args.value,
        &provider,
    )
    .await?;

    if let Some(tx_hash) = receipt.transaction_hash {
        println!("{tx_hash}");
    }
    Ok(())
}

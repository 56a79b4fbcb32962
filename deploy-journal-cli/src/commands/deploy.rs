// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use deploy_journal::ops;

use crate::{
    common_args::{AuthArgs, ProviderArgs, SubmitArgs},
    error::CliResult,
    utils::{decode0x, read_hex_file},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// File with the hex-encoded contract bytecode
    #[arg(long)]
    bytecode: PathBuf,
    /// Hex-encoded constructor arguments, appended to the bytecode
    #[arg(long)]
    constructor_args: Option<String>,

    #[command(flatten)]
    submit: SubmitArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let mut init_code = read_hex_file(&args.bytecode)?.to_vec();
    if let Some(constructor_args) = &args.constructor_args {
        init_code.extend(decode0x(constructor_args)?);
    }

    let context = args.submit.context()?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let receipt = ops::deploy(
        &context,
        &args.submit.script,
        &args.submit.label,
        init_code.into(),
        &provider,
    )
    .await?;

    match receipt.contract_address {
        Some(address) => println!("{address}"),
        None => log::warn!("step {:?} did not create a contract", receipt.label),
    }
    Ok(())
}

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Single journaled steps driven from the command line.

use alloy::{
    primitives::{Address, Bytes, U256},
    providers::{Provider, WalletProvider},
};

use crate::{
    core::{context::ScriptContext, journal::Receipt, request::StepRequest},
    utils::color::DebugColor,
    Result,
};

/// Deploys `init_code` as step `label` of `script`, unless already done.
pub async fn deploy(
    context: &ScriptContext,
    script: &str,
    label: &str,
    init_code: Bytes,
    provider: &(impl Provider + WalletProvider),
) -> Result<Receipt> {
    let mut submitter = context.open_submitter(script)?;
    let sender = provider.default_signer_address();
    debug!(@grey, "sender address: {}", sender.debug_lavender());

    let request = StepRequest::deploy(sender, init_code, context.overrides());
    let receipt = submitter
        .submit_and_wait(label, || request.send(provider))
        .await?;
    Ok(receipt)
}

/// Sends `calldata` to `to` as step `label` of `script`, unless already done.
pub async fn send(
    context: &ScriptContext,
    script: &str,
    label: &str,
    to: Address,
    calldata: Bytes,
    value: U256,
    provider: &(impl Provider + WalletProvider),
) -> Result<Receipt> {
    let mut submitter = context.open_submitter(script)?;
    let sender = provider.default_signer_address();
    debug!(@grey, "sender address: {}", sender.debug_lavender());

    let request = StepRequest::call(sender, to, calldata, context.overrides()).with_value(value);
    let receipt = submitter
        .submit_and_wait(label, || request.send(provider))
        .await?;
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use alloy::{
        network::EthereumWallet,
        primitives::{address, bytes},
        providers::{mock::Asserter, ProviderBuilder},
        signers::local::PrivateKeySigner,
    };

    use super::*;
    use crate::{
        core::{journal::Journal, network::Network},
        Error, SubmitError,
    };

    const FAUCET: Address = address!("00000000000000000000000000000000000000cc");
    const SCRIPT: &str = "deploy-dev-token-faucet";

    fn provider(asserter: &Asserter) -> impl Provider + WalletProvider {
        let signer: PrivateKeySigner =
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .parse()
                .unwrap();
        ProviderBuilder::new()
            .disable_recommended_fillers()
            .wallet(EthereumWallet::from(signer))
            .connect_mocked_client(asserter.clone())
    }

    fn context(dir: &tempfile::TempDir) -> ScriptContext {
        ScriptContext::builder()
            .network(Network::with_suffix("testnet"))
            .journal_dir(dir.path())
            .build()
    }

    #[tokio::test]
    async fn recorded_deploy_makes_no_rpc_calls() {
        let dir = tempfile::tempdir().unwrap();
        let context = context(&dir);
        let recorded = Receipt::succeeded()
            .with_label("Deploy Faucet")
            .with_contract_address(FAUCET);
        Journal::from_iter([recorded.clone()])
            .save(context.journal_path(SCRIPT))
            .unwrap();

        // Nothing queued: any request would fail.
        let asserter = Asserter::new();
        let receipt = deploy(
            &context,
            SCRIPT,
            "Deploy Faucet",
            bytes!("6080604052"),
            &provider(&asserter),
        )
        .await
        .unwrap();
        assert_eq!(receipt, recorded);
    }

    #[tokio::test]
    async fn rejected_send_is_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let context = context(&dir);
        let asserter = Asserter::new();
        asserter.push_failure_msg("insufficient funds");

        let err = send(
            &context,
            SCRIPT,
            "Set faucet as minter",
            FAUCET,
            bytes!("fca3b5aa"),
            U256::ZERO,
            &provider(&asserter),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Submit(SubmitError::SubmissionFailure { ref label, .. })
                if label == "Set faucet as minter"
        ));
        assert!(Journal::load(context.journal_path(SCRIPT))
            .unwrap()
            .get("Set faucet as minter")
            .is_none());
    }
}

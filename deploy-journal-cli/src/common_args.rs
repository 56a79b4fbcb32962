// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use deploy_journal::{Network, ScriptContext, TxOverrides};
use eyre::{eyre, Context};

use crate::{
    constants::DEFAULT_ENDPOINT,
    utils::{convert_gwei_to_wei, decode0x},
};

#[derive(Debug, clap::Args)]
pub struct JournalArgs {
    /// Directory holding the journal files
    #[arg(long, env = "JOURNAL_DIR", default_value = ".")]
    pub journal_dir: PathBuf,
    /// Network suffix appended to journal file names, e.g. `testnet`
    #[arg(long, env = "NETWORK_SUFFIX")]
    pub network_suffix: Option<String>,
}

impl JournalArgs {
    pub fn network(&self) -> Network {
        Network::new(self.network_suffix.clone())
    }

    pub fn journal_path(&self, script: &str) -> PathBuf {
        self.journal_dir
            .join(self.network().journal_file_name(script))
    }
}

#[derive(Debug, clap::Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub journal: JournalArgs,
    /// Deployment script whose journal records the step
    #[arg(long)]
    pub script: String,
    /// Label of the step
    #[arg(long)]
    pub label: String,
    /// Discard previously recorded steps of the script and run them again.
    /// Any `IGNORE_HISTORY` value other than empty, `0`, `false`, `no`, `off` enables it
    #[arg(long, env = "IGNORE_HISTORY", value_parser = clap::builder::FalseyValueParser::new())]
    pub ignore_history: bool,
    /// Gas price in gwei units. Defaults to what the node suggests.
    #[arg(long)]
    pub gas_price_gwei: Option<String>,
    /// Gas limit. Defaults to the node's estimate.
    #[arg(long)]
    pub gas_limit: Option<u64>,
    /// Send with zero gas price and a fixed gas limit, for networks without fees
    #[arg(long, conflicts_with_all = ["gas_price_gwei", "gas_limit"])]
    pub zero_fee: bool,
}

impl SubmitArgs {
    pub fn overrides(&self) -> eyre::Result<TxOverrides> {
        if self.zero_fee {
            return Ok(TxOverrides::zero_fee());
        }
        Ok(TxOverrides {
            gas_price: self
                .gas_price_gwei
                .as_deref()
                .map(convert_gwei_to_wei)
                .transpose()?,
            gas_limit: self.gas_limit,
        })
    }

    pub fn context(&self) -> eyre::Result<ScriptContext> {
        Ok(ScriptContext::builder()
            .network(self.journal.network())
            .journal_dir(self.journal.journal_dir.clone())
            .reset_history(self.ignore_history)
            .overrides(self.overrides()?)
            .build())
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return signer_from_hex(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return signer_from_hex(key, chain_id);
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!("no keystore"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }
}

fn signer_from_hex(key: impl AsRef<str>, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let key = decode0x(key)?;
    if key.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", key.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(key.as_slice());
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

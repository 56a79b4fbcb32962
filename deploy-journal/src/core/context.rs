// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use typed_builder::TypedBuilder;

use super::{
    journal::{Journal, JournalError},
    network::Network,
    request::TxOverrides,
    submitter::TransactionSubmitter,
};

/// Everything a deployment script needs to know about where and how it runs.
///
/// Built once at startup and passed down explicitly, so several deployments (say, against
/// different networks) can run side by side in one process.
#[derive(Clone, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct ScriptContext {
    network: Network,
    #[builder(default = PathBuf::from("."))]
    journal_dir: PathBuf,
    /// Discard previously recorded steps and run everything again.
    reset_history: bool,
    overrides: TxOverrides,
}

impl ScriptContext {
    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn overrides(&self) -> &TxOverrides {
        &self.overrides
    }

    pub fn reset_history(&self) -> bool {
        self.reset_history
    }

    /// Journal file of `script` on this context's network.
    pub fn journal_path(&self, script: &str) -> PathBuf {
        self.journal_dir
            .join(self.network.journal_file_name(script))
    }

    /// Opens the submitter `script` records its own steps with.
    pub fn open_submitter(&self, script: &str) -> Result<TransactionSubmitter, JournalError> {
        TransactionSubmitter::open(self.journal_path(script), self.reset_history)
    }

    /// Loads the journal of a script that must have run before this one.
    pub fn load_dependency(&self, script: &str) -> Result<Journal, JournalError> {
        Journal::load_required(self.journal_path(script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::journal::Receipt;
    use alloy::primitives::address;

    #[test]
    fn defaults() {
        let context = ScriptContext::builder().build();
        assert_eq!(context.journal_path("deploy-yok"), PathBuf::from("./deploy-yok.json"));
        assert!(!context.reset_history());
        assert_eq!(*context.overrides(), TxOverrides::default());
    }

    #[test]
    fn dependency_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let context = ScriptContext::builder()
            .network(Network::with_suffix("testnet"))
            .journal_dir(dir.path())
            .build();
        assert_eq!(
            context.journal_path("deploy-yok"),
            dir.path().join("deploy-yok-testnet.json")
        );

        let err = context.load_dependency("deploy-yok").unwrap_err();
        assert!(matches!(err, JournalError::MissingJournal { .. }));

        let yok = address!("00000000000000000000000000000000000000aa");
        Journal::from_iter([Receipt::succeeded()
            .with_label("Deploy MintableYokaiToken")
            .with_contract_address(yok)])
        .save(context.journal_path("deploy-yok"))
        .unwrap();

        let journal = context.load_dependency("deploy-yok").unwrap();
        assert_eq!(journal.require_address("Deploy MintableYokaiToken").unwrap(), yok);
        assert!(matches!(
            journal.require("Deploy YokaiToken"),
            Err(JournalError::MissingDependencyReceipt { .. })
        ));

        // Same script on another network has its own journal.
        let mainnet = ScriptContext::builder().journal_dir(dir.path()).build();
        assert!(matches!(
            mainnet.load_dependency("deploy-yok"),
            Err(JournalError::MissingJournal { .. })
        ));
    }
}

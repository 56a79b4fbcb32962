// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Read-only views of journals written by earlier runs.

use std::path::Path;

use alloy::primitives::Address;

use crate::{
    core::journal::Journal,
    utils::{color::Color, format_address, format_tx_hash},
    Result,
};

/// Prints every recorded step of the journal at `path`, in submission order.
pub fn show(path: impl AsRef<Path>) -> Result<()> {
    let journal = Journal::load_required(path)?;
    if journal.is_empty() {
        greyln!("no steps recorded");
        return Ok(());
    }
    for (label, receipt) in journal.iter() {
        let status = if receipt.is_success() {
            receipt.status.mint()
        } else {
            receipt.status.red()
        };
        println!("{label}");
        greyln!("    status:   {status}");
        greyln!("    contract: {}", format_address(receipt.contract_address));
        greyln!("    tx:       {}", format_tx_hash(receipt.transaction_hash));
    }
    Ok(())
}

/// Address of the contract created by step `label` in the journal at `path`.
pub fn contract_address(path: impl AsRef<Path>, label: &str) -> Result<Address> {
    Ok(Journal::load_required(path)?.require_address(label)?)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::{core::journal::Receipt, Error, JournalError};

    #[test]
    fn contract_address_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deploy-dev-tokens.json");
        assert!(matches!(
            contract_address(&path, "Deploy USDC"),
            Err(Error::Journal(JournalError::MissingJournal { .. }))
        ));

        let usdc = address!("00000000000000000000000000000000000000dd");
        Journal::from_iter([
            Receipt::succeeded()
                .with_label("Deploy USDC")
                .with_contract_address(usdc),
            Receipt::succeeded().with_label("Mint USDC"),
        ])
        .save(&path)
        .unwrap();
        assert_eq!(contract_address(&path, "Deploy USDC").unwrap(), usdc);
        assert!(matches!(
            contract_address(&path, "Mint USDC"),
            Err(Error::Journal(JournalError::MissingContractAddress { .. }))
        ));
        assert!(show(&path).is_ok());
    }
}

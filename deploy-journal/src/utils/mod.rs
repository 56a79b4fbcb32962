// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use std::path::{Path, PathBuf};

use alloy::primitives::{Address, TxHash};
use color::Color;

pub mod color;

/// Pretty-prints an optional contract address.
pub fn format_address(address: Option<Address>) -> String {
    match address {
        Some(address) => address.to_string().lavender(),
        None => "-".grey(),
    }
}

/// Pretty-prints an optional transaction hash.
pub fn format_tx_hash(tx_hash: Option<TxHash>) -> String {
    match tx_hash {
        Some(tx_hash) => tx_hash.to_string().lavender(),
        None => "-".grey(),
    }
}

/// Appends an extra extension to a path, keeping the existing one.
///
/// `deploy-yok.json` with `bak` becomes `deploy-yok.json.bak`.
pub fn with_added_extension(path: impl AsRef<Path>, extension: &str) -> PathBuf {
    let mut path = path.as_ref().as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    path.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_extension() {
        assert_eq!(
            with_added_extension("out/deploy-yok.json", "bak"),
            PathBuf::from("out/deploy-yok.json.bak")
        );
        assert_eq!(with_added_extension("journal", "tmp"), PathBuf::from("journal.tmp"));
    }
}

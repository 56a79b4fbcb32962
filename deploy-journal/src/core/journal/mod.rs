// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Durable mapping from step label to the receipt of the transaction that completed it.
//!
//! One journal file exists per deployment script and network. The journal keeps entries in the
//! order they were first recorded, which is the order a script submitted its steps in, so the
//! file on disk reads top to bottom like the deployment itself.

use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use indexmap::IndexMap;

pub use receipt::{Receipt, ReceiptStatus};

mod receipt;
mod store;

#[derive(Clone, Debug, Default)]
pub struct Journal {
    entries: IndexMap<String, Receipt>,
    /// File this journal was loaded from, if any. Used for diagnostics only.
    path: Option<PathBuf>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty journal that remembers which file it belongs to.
    pub fn empty_at(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: IndexMap::new(),
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the receipt recorded under `label`, whatever its status.
    pub fn get(&self, label: &str) -> Option<&Receipt> {
        self.entries.get(label)
    }

    /// Looks up the receipt recorded under `label` only if that step succeeded.
    pub fn succeeded(&self, label: &str) -> Option<&Receipt> {
        self.get(label).filter(|receipt| receipt.is_success())
    }

    /// Like [`Journal::get`], but a missing label is an error.
    ///
    /// Used by scripts that depend on a step recorded by another script.
    pub fn require(&self, label: &str) -> Result<&Receipt, JournalError> {
        self.get(label)
            .ok_or_else(|| JournalError::MissingDependencyReceipt {
                journal: self.display_name(),
                label: label.to_owned(),
            })
    }

    /// Address of the contract created by the step recorded under `label`.
    pub fn require_address(&self, label: &str) -> Result<Address, JournalError> {
        self.require(label)?
            .contract_address
            .ok_or_else(|| JournalError::MissingContractAddress {
                label: label.to_owned(),
            })
    }

    /// Records `receipt` under its label, replacing any previous entry in place.
    pub fn insert(&mut self, receipt: Receipt) -> Option<Receipt> {
        self.entries.insert(receipt.label.clone(), receipt)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Receipt)> {
        self.entries
            .iter()
            .map(|(label, receipt)| (label.as_str(), receipt))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn display_name(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<in-memory journal>".to_owned(),
        }
    }
}

/// Journals compare by their label to receipt mapping only.
impl PartialEq for Journal {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Journal {}

impl FromIterator<Receipt> for Journal {
    fn from_iter<I: IntoIterator<Item = Receipt>>(iter: I) -> Self {
        let mut journal = Self::new();
        for receipt in iter {
            journal.insert(receipt);
        }
        journal
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error(
        "corrupt journal {}: {source}\n\
         repair or delete the file before re-running",
        .path.display()
    )]
    CorruptJournal {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "missing journal {}: the script that writes it has not been run yet",
        .path.display()
    )]
    MissingJournal { path: PathBuf },
    #[error("journal {journal} has no receipt for step {label:?}")]
    MissingDependencyReceipt { journal: String, label: String },
    #[error("step {label:?} did not create a contract")]
    MissingContractAddress { label: String },
    #[error("io error on journal {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize journal: {0}")]
    Serialize(#[source] serde_json::Error),
}

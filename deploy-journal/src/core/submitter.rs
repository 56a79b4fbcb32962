// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Exactly-once submission of deployment steps.
//!
//! A [`TransactionSubmitter`] owns the journal of one deployment script. Each call to
//! [`submit_and_wait`](TransactionSubmitter::submit_and_wait) either replays the receipt a
//! previous run recorded for the step, or sends the step's transaction, waits for it, and
//! persists the receipt before handing it back. No step is ever recorded before its transaction
//! is confirmed, so aborting a script at any point is safe: re-running it picks up at the first
//! step without a recorded success.
//!
//! Two processes submitting the same step at the same time are not guarded against. Callers
//! that need that must hold an external lock for the submitter's lifetime.

use std::{
    fs,
    future::Future,
    io::{self, Write},
    path::{Path, PathBuf},
};

use alloy::primitives::TxHash;

use super::{
    chain::{ChainError, PendingTransaction},
    journal::{Journal, JournalError, Receipt},
};
use crate::utils::{color::DebugColor, format_address, format_tx_hash, with_added_extension};

#[derive(Debug)]
pub struct TransactionSubmitter {
    journal: Journal,
    path: PathBuf,
}

impl TransactionSubmitter {
    /// Binds a submitter to the journal at `path`.
    ///
    /// With `reset_history`, a non-empty journal is copied to `<path>.bak` (or the next free
    /// `<path>.bak.N`) and replaced by an empty one right away, so every step runs again.
    pub fn open(path: impl Into<PathBuf>, reset_history: bool) -> Result<Self, JournalError> {
        let path = path.into();
        let journal = if reset_history {
            discard_history(&path)?;
            Journal::empty_at(&path)
        } else {
            Journal::load(&path)?
        };
        Ok(Self { journal, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Receipt recorded for `label`, if any.
    pub fn peek(&self, label: &str) -> Option<&Receipt> {
        self.journal.get(label)
    }

    /// Runs the step `label` unless a previous run already completed it.
    ///
    /// `operation` must send exactly one transaction and is only invoked when the journal has no
    /// successful receipt for `label`. On any failure the journal is left as it was.
    pub async fn submit_and_wait<F, Fut, P>(
        &mut self,
        label: &str,
        operation: F,
    ) -> Result<Receipt, SubmitError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<P, ChainError>>,
        P: PendingTransaction,
    {
        if let Some(receipt) = self.journal.succeeded(label) {
            info!(
                @grey,
                "{} {label} (recorded in tx {})",
                "skipping".mint(),
                format_tx_hash(receipt.transaction_hash)
            );
            return Ok(receipt.clone());
        }

        info!(@grey, "{} {label}", "submitting".yellow());
        let failure = |source: ChainError| SubmitError::SubmissionFailure {
            label: label.to_owned(),
            source,
        };
        let pending = operation().await.map_err(failure)?;
        let tx_hash = pending.tx_hash();
        debug!(@grey, "waiting for {label} tx: {}", tx_hash.debug_lavender());

        let mut receipt = pending.confirm().await.map_err(failure)?;
        if !receipt.is_success() {
            return Err(failure(ChainError::Reverted { tx_hash }));
        }
        receipt.label = label.to_owned();
        receipt.transaction_hash.get_or_insert(tx_hash);

        self.record(receipt.clone())?;
        info!(
            @grey,
            "{} {label}: contract {}, tx {}",
            "done".mint(),
            format_address(receipt.contract_address),
            tx_hash.debug_lavender()
        );
        Ok(receipt)
    }

    fn record(&mut self, receipt: Receipt) -> Result<(), SubmitError> {
        let mut journal = self.journal.clone();
        journal.insert(receipt.clone());
        if let Err(source) = journal.save(&self.path) {
            error!(
                @red,
                "step {:?} was confirmed but could not be recorded in {}; receipt: {}",
                receipt.label,
                self.path.display(),
                serde_json::to_string(&receipt).unwrap_or_default()
            );
            return Err(SubmitError::Unrecorded {
                label: receipt.label,
                tx_hash: receipt.transaction_hash,
                source,
            });
        }
        self.journal = journal;
        Ok(())
    }
}

fn discard_history(path: &Path) -> Result<(), JournalError> {
    let io_err = |source| JournalError::Io {
        path: path.to_owned(),
        source,
    };
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(source) => return Err(io_err(source)),
    };
    // An already reset journal has nothing worth backing up.
    if matches!(Journal::load(path), Ok(journal) if journal.is_empty()) {
        debug!(@grey, "journal {} is already empty", path.display());
        return Ok(());
    }

    let backup = write_backup(path, &contents).map_err(io_err)?;
    warn!(
        @yellow,
        "ignoring history in {}, previous journal kept at {}",
        path.display(),
        backup.display()
    );
    Journal::new().save(path)
}

/// Writes `contents` to `<path>.bak`, or `<path>.bak.N` for the first `N` not yet taken.
/// Existing backups are never overwritten.
fn write_backup(path: &Path, contents: &[u8]) -> io::Result<PathBuf> {
    for n in 0u32.. {
        let backup = match n {
            0 => with_added_extension(path, "bak"),
            n => with_added_extension(path, &format!("bak.{n}")),
        };
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&backup)
        {
            Ok(mut file) => {
                file.write_all(contents)?;
                file.sync_all()?;
                return Ok(backup);
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        "no free backup file name",
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("step {label:?} failed: {source}")]
    SubmissionFailure {
        label: String,
        #[source]
        source: ChainError,
    },
    #[error(
        "step {label:?} was confirmed (tx {}) but could not be recorded: {source}",
        format_tx_hash(.tx_hash.as_ref().copied())
    )]
    Unrecorded {
        label: String,
        tx_hash: Option<TxHash>,
        #[source]
        source: JournalError,
    },
}

impl SubmitError {
    /// Label of the step that failed.
    pub fn label(&self) -> &str {
        match self {
            Self::SubmissionFailure { label, .. } | Self::Unrecorded { label, .. } => label,
        }
    }
}

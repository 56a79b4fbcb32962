// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Idempotent, resumable transaction submission for multi-step contract deployments.
//!
//! A deployment script binds a [`TransactionSubmitter`] to its journal file and submits each
//! named step through it. Steps already recorded as succeeded are replayed from the journal
//! instead of being sent again, so a script interrupted halfway can simply be re-run.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use crate::core::{
    chain::{ChainError, PendingTransaction},
    context::ScriptContext,
    create2::{create2_address, pair_address, pair_salt},
    journal::{Journal, JournalError, Receipt, ReceiptStatus},
    network::Network,
    request::{StepRequest, TxOverrides},
    submitter::{SubmitError, TransactionSubmitter},
};
pub use error::{Error, Result};

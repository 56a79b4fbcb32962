// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Journal(#[from] crate::core::journal::JournalError),
    #[error("{0}")]
    Submit(#[from] crate::core::submitter::SubmitError),
    #[error("{0}")]
    Chain(#[from] crate::core::chain::ChainError),
}

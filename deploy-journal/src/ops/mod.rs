// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use inspect::{contract_address, show};
pub use submit::{deploy, send};

mod inspect;
mod submit;

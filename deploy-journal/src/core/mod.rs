// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Core functionality for journaled deployments.

pub mod chain;
pub mod context;
pub mod create2;
pub mod journal;
pub mod network;
pub mod request;
pub mod submitter;

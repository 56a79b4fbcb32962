// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Transaction requests for single deployment steps.

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes, U256},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::TransactionRequest,
};

use super::chain::ChainError;
use crate::utils::color::DebugColor;

/// Gas limit used on networks where transactions are free but the limit must be fixed.
pub const ZERO_FEE_GAS_LIMIT: u64 = 12_500_000;

/// Fee parameters applied to every transaction a script sends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxOverrides {
    pub gas_price: Option<u128>,
    pub gas_limit: Option<u64>,
}

impl TxOverrides {
    /// Overrides for networks that charge no fees.
    pub fn zero_fee() -> Self {
        Self {
            gas_price: Some(0),
            gas_limit: Some(ZERO_FEE_GAS_LIMIT),
        }
    }

    pub fn apply(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(gas_price) = self.gas_price {
            tx.gas_price = Some(gas_price);
        }
        if let Some(gas_limit) = self.gas_limit {
            tx.gas = Some(gas_limit);
        }
        tx
    }
}

/// One transaction to be submitted as a deployment step.
#[derive(Debug)]
pub struct StepRequest {
    tx: TransactionRequest,
}

impl StepRequest {
    /// Contract creation from init code (bytecode followed by encoded constructor args).
    pub fn deploy(sender: Address, init_code: impl Into<Bytes>, overrides: &TxOverrides) -> Self {
        let tx = TransactionRequest::default()
            .with_from(sender)
            .with_deploy_code(init_code);
        Self {
            tx: overrides.apply(tx),
        }
    }

    /// Call into an existing contract.
    pub fn call(
        sender: Address,
        to: Address,
        calldata: impl Into<Bytes>,
        overrides: &TxOverrides,
    ) -> Self {
        let tx = TransactionRequest::default()
            .with_from(sender)
            .with_to(to)
            .with_input(calldata);
        Self {
            tx: overrides.apply(tx),
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.tx = self.tx.with_value(value);
        self
    }

    pub fn tx(&self) -> &TransactionRequest {
        &self.tx
    }

    /// Sends the transaction without waiting for it to be mined.
    pub async fn send(
        self,
        provider: &impl Provider,
    ) -> Result<PendingTransactionBuilder<Ethereum>, ChainError> {
        let pending = provider.send_transaction(self.tx).await?;
        debug!(@grey, "sent tx: {}", pending.tx_hash().debug_lavender());
        Ok(pending)
    }
}

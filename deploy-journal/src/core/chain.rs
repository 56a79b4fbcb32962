// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The seam between the submitter and whatever client talks to the chain.

use alloy::{
    network::Ethereum,
    primitives::TxHash,
    providers::{PendingTransactionBuilder, PendingTransactionError},
    rpc::types::TransactionReceipt,
    transports::{RpcError, TransportErrorKind},
};

use crate::{core::journal::Receipt, utils::color::DebugColor};

/// A transaction that has been sent but not yet confirmed.
///
/// [`confirm`](PendingTransaction::confirm) waits for as long as the client does; bounding that
/// wait is the client's business.
#[allow(async_fn_in_trait)]
pub trait PendingTransaction {
    fn tx_hash(&self) -> TxHash;

    async fn confirm(self) -> Result<Receipt, ChainError>;
}

impl PendingTransaction for PendingTransactionBuilder<Ethereum> {
    fn tx_hash(&self) -> TxHash {
        *PendingTransactionBuilder::tx_hash(self)
    }

    async fn confirm(self) -> Result<Receipt, ChainError> {
        let receipt = self.get_receipt().await?;
        Ok(Receipt::from(&receipt))
    }
}

impl From<&TransactionReceipt> for Receipt {
    fn from(receipt: &TransactionReceipt) -> Self {
        let mut extra = serde_json::Map::new();
        if let Some(block_number) = receipt.block_number {
            extra.insert("blockNumber".into(), block_number.into());
        }
        if let Some(block_hash) = receipt.block_hash {
            extra.insert("blockHash".into(), block_hash.to_string().into());
        }
        extra.insert("gasUsed".into(), receipt.gas_used.into());
        extra.insert("from".into(), receipt.from.to_string().into());
        if let Some(to) = receipt.to {
            extra.insert("to".into(), to.to_string().into());
        }
        Self {
            contract_address: receipt.contract_address,
            transaction_hash: Some(receipt.transaction_hash),
            extra,
            ..Receipt::new(receipt.status().into())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("tx failed to complete: {0}")]
    PendingTransaction(#[from] PendingTransactionError),
    #[error("tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("tx rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, b256, Address},
        providers::{mock::Asserter, Provider, ProviderBuilder},
    };

    use super::*;
    use crate::core::journal::ReceiptStatus;

    const SENDER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const FAUCET: Address = address!("00000000000000000000000000000000000000cc");
    const TX: TxHash = b256!("1111111111111111111111111111111111111111111111111111111111111111");

    fn rpc_receipt(
        status: &str,
        to: Option<Address>,
        contract: Option<Address>,
    ) -> TransactionReceipt {
        serde_json::from_value(serde_json::json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x5208",
            "logs": [],
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "transactionHash": TX,
            "transactionIndex": "0x0",
            "blockHash": b256!("2222222222222222222222222222222222222222222222222222222222222222"),
            "blockNumber": "0x10",
            "gasUsed": "0x5208",
            "effectiveGasPrice": "0x1",
            "from": SENDER,
            "to": to,
            "contractAddress": contract,
        }))
        .unwrap()
    }

    #[test]
    fn converts_deployment_receipt() {
        let receipt = Receipt::from(&rpc_receipt("0x1", None, Some(FAUCET)));
        assert_eq!(receipt.status, ReceiptStatus::Succeeded);
        assert_eq!(receipt.contract_address, Some(FAUCET));
        assert_eq!(receipt.transaction_hash, Some(TX));
        assert_eq!(receipt.extra["blockNumber"], 16);
        assert_eq!(receipt.extra["gasUsed"], 21000);
        assert!(!receipt.extra.contains_key("to"));
        let from: Address = receipt.extra["from"].as_str().unwrap().parse().unwrap();
        assert_eq!(from, SENDER);
    }

    #[test]
    fn converts_reverted_call_receipt() {
        let receipt = Receipt::from(&rpc_receipt("0x0", Some(FAUCET), None));
        assert_eq!(receipt.status, ReceiptStatus::Failed);
        assert!(!receipt.is_success());
        assert_eq!(receipt.contract_address, None);
        let to: Address = receipt.extra["to"].as_str().unwrap().parse().unwrap();
        assert_eq!(to, FAUCET);
    }

    #[test]
    fn pending_builder_reports_its_hash() {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(Asserter::new());
        let pending = PendingTransactionBuilder::new(provider.root().clone(), TX);
        assert_eq!(PendingTransaction::tx_hash(&pending), TX);
    }
}

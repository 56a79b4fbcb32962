// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, TxHash};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Outcome of a confirmed transaction as recorded in a journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Step label this receipt was recorded under.
    #[serde(default)]
    pub label: String,
    pub status: ReceiptStatus,
    /// Address of the created contract, for contract-creation steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
    /// Transport metadata (block, gas, sender, logs, ...) in whatever shape the client that
    /// recorded it used. Never interpreted, written back unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Receipt {
    pub fn new(status: ReceiptStatus) -> Self {
        Self {
            label: String::new(),
            status,
            contract_address: None,
            transaction_hash: None,
            extra: Default::default(),
        }
    }

    pub fn succeeded() -> Self {
        Self::new(ReceiptStatus::Succeeded)
    }

    pub fn failed() -> Self {
        Self::new(ReceiptStatus::Failed)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_contract_address(mut self, address: Address) -> Self {
        self.contract_address = Some(address);
        self
    }

    pub fn with_transaction_hash(mut self, tx_hash: TxHash) -> Self {
        self.transaction_hash = Some(tx_hash);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReceiptStatus {
    Succeeded,
    Failed,
}

impl ReceiptStatus {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl From<bool> for ReceiptStatus {
    fn from(success: bool) -> Self {
        if success {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }
}

impl std::fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReceiptStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Also accepts the numeric `1`/`0` status of ethers-style receipts.
impl<'de> Deserialize<'de> for ReceiptStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Named(String),
            Code(u64),
            Flag(bool),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Named(name) => match name.as_str() {
                "succeeded" => Ok(Self::Succeeded),
                "failed" => Ok(Self::Failed),
                other => Err(de::Error::unknown_variant(other, &["succeeded", "failed"])),
            },
            Repr::Code(1) | Repr::Flag(true) => Ok(Self::Succeeded),
            Repr::Code(0) | Repr::Flag(false) => Ok(Self::Failed),
            Repr::Code(code) => Err(de::Error::custom(format!(
                "invalid receipt status code: {code}"
            ))),
        }
    }
}

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The network a deployment runs against, as far as journals care.
///
/// The same script run against different networks writes to different journals, told apart by
/// a suffix in the file name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Network {
    suffix: Option<String>,
}

impl Network {
    /// An empty suffix is the same as no suffix.
    pub fn new(suffix: Option<impl Into<String>>) -> Self {
        let suffix = suffix.map(Into::into).filter(|suffix| !suffix.is_empty());
        Self { suffix }
    }

    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self::new(Some(suffix))
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// `<script>-<suffix>.json`, or `<script>.json` without a suffix.
    pub fn journal_file_name(&self, script: &str) -> String {
        match &self.suffix {
            Some(suffix) => format!("{script}-{suffix}.json"),
            None => format!("{script}.json"),
        }
    }

    pub fn is_test_or_dev(&self) -> bool {
        self.suffix
            .as_deref()
            .is_some_and(|suffix| suffix.contains("testnet") || suffix.contains("devnet"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_file_names() {
        assert_eq!(
            Network::default().journal_file_name("deploy-yok"),
            "deploy-yok.json"
        );
        assert_eq!(
            Network::with_suffix("testnet").journal_file_name("deploy-yok"),
            "deploy-yok-testnet.json"
        );
        assert_eq!(
            Network::new(Some("")).journal_file_name("deploy-yok"),
            "deploy-yok.json"
        );
    }

    #[test]
    fn test_or_dev() {
        assert!(Network::with_suffix("testnet").is_test_or_dev());
        assert!(Network::with_suffix("godwoken-devnet").is_test_or_dev());
        assert!(!Network::with_suffix("mainnet").is_test_or_dev());
        assert!(!Network::default().is_test_or_dev());
    }
}

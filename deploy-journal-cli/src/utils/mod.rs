// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt::Display, fs, path::Path};

use alloy::primitives::Bytes;
use eyre::{bail, WrapErr};

use style::{BOLD, ERROR};

mod style;

pub fn convert_gwei_to_wei(fee_str: &str) -> eyre::Result<u128> {
    let gwei = match fee_str.parse::<f64>() {
        Ok(fee) if fee >= 0.0 => fee,
        Ok(_) => bail!("Gas price must be non-negative"),
        Err(_) => bail!("Invalid gas price value: {}", fee_str),
    };

    if !gwei.is_finite() {
        bail!("Invalid gwei value: must be finite");
    }

    let wei = gwei * 1e9;
    if !wei.is_finite() || wei >= u128::MAX as f64 {
        bail!("Result outside valid range for wei");
    }

    Ok(wei as u128)
}

pub fn decode0x(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let text = text.as_ref();
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    Ok(hex::decode(text)?)
}

/// Reads a file holding hex-encoded bytes, such as contract bytecode.
pub fn read_hex_file(path: &Path) -> eyre::Result<Bytes> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("could not read {}", path.display()))?;
    let bytes =
        decode0x(text).wrap_err_with(|| format!("{} is not valid hex", path.display()))?;
    Ok(bytes.into())
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gwei_to_wei() {
        assert_eq!(convert_gwei_to_wei("0").unwrap(), 0);
        assert_eq!(convert_gwei_to_wei("1.5").unwrap(), 1_500_000_000);
        assert!(convert_gwei_to_wei("-1").is_err());
        assert!(convert_gwei_to_wei("inf").is_err());
        assert!(convert_gwei_to_wei("cheap").is_err());
    }

    #[test]
    fn decodes_with_or_without_prefix() {
        assert_eq!(decode0x("0x6080").unwrap(), [0x60, 0x80]);
        assert_eq!(decode0x(" 6080\n").unwrap(), [0x60, 0x80]);
        assert!(decode0x("0xzz").is_err());
    }
}

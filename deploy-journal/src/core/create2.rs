// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Counterfactual contract addresses (EIP-1014).

use alloy::primitives::{keccak256, Address, B256};

/// Address a `CREATE2` from `factory` with `salt` and init code hashing to `init_code_hash`
/// will produce.
pub fn create2_address(factory: Address, salt: B256, init_code_hash: B256) -> Address {
    factory.create2(salt, init_code_hash)
}

/// Salt used by pair factories: the hash of both token addresses packed in ascending order.
pub fn pair_salt(token_a: Address, token_b: Address) -> B256 {
    let (first, second) = if token_a <= token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    keccak256([first.as_slice(), second.as_slice()].concat())
}

/// Address of the pair contract `factory` creates for two tokens.
pub fn pair_address(
    factory: Address,
    token_a: Address,
    token_b: Address,
    init_code_hash: B256,
) -> Address {
    create2_address(factory, pair_salt(token_a, token_b), init_code_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn eip1014_examples() {
        let cases = [
            (
                Address::ZERO,
                B256::ZERO,
                &b"\x00"[..],
                address!("4D1A2e2bB4F88F0250f26Ffff098B0b30B26BF38"),
            ),
            (
                address!("deadbeef00000000000000000000000000000000"),
                B256::ZERO,
                &b"\x00"[..],
                address!("B928f69Bb1D91Cd65274e3c79d8986362984fDA3"),
            ),
            (
                Address::ZERO,
                B256::ZERO,
                &b""[..],
                address!("E33C0C7F7df4809055C3ebA6c09CFe4BaF1BD9e0"),
            ),
        ];
        for (factory, salt, init_code, expected) in cases {
            assert_eq!(
                create2_address(factory, salt, keccak256(init_code)),
                expected
            );
        }
    }

    #[test]
    fn pair_salt_is_order_independent() {
        let usdt = address!("00000000000000000000000000000000000000aa");
        let yok = address!("0000000000000000000000000000000000000bb0");
        assert_eq!(pair_salt(usdt, yok), pair_salt(yok, usdt));
        assert_eq!(
            pair_salt(usdt, yok),
            keccak256([usdt.as_slice(), yok.as_slice()].concat())
        );

        let factory = address!("5c69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
        let init_code_hash = keccak256(b"pair");
        assert_eq!(
            pair_address(factory, yok, usdt, init_code_hash),
            factory.create2(pair_salt(usdt, yok), init_code_hash)
        );
    }
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

#![allow(dead_code)]

use lottery::{Address, Balance, Ledger, TxContext};

pub const NOW: u64 = 1_700_000_000_000;
pub const MINUTE: u64 = 60_000;

pub fn address(byte: u8) -> Address {
    Address::new([byte; 32])
}

/// A context whose digest is unique per `(sender, tx)` pair.
pub fn ctx(sender: Address, tx: u64) -> TxContext {
    let mut digest = *sender.as_bytes();
    digest[..8].copy_from_slice(&tx.to_be_bytes());
    TxContext::new(sender, digest)
}

pub fn payment(ledger: &mut Ledger, who: Address, amount: u64) -> Balance {
    ledger.mint(who, amount).unwrap();
    ledger.withdraw(&who, amount).unwrap()
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{Address, Balance, EconError};
use ahash::HashMap;

/// Sends value to an account.
pub trait Transfer {
    fn transfer(&mut self, balance: Balance, recipient: Address);
}

/// In-memory account book. Reference implementation of the value primitive
/// for standalone runtimes and tests.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<Address, u64>,
    supply: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues `amount` of new value to `to`.
    pub fn mint(&mut self, to: Address, amount: u64) -> Result<(), EconError> {
        self.supply = self
            .supply
            .checked_add(amount)
            .ok_or(EconError::SupplyOverflow)?;
        *self.accounts.entry(to).or_default() += amount;
        Ok(())
    }

    pub fn balance_of(&self, account: &Address) -> u64 {
        self.accounts.get(account).copied().unwrap_or_default()
    }

    pub fn total_supply(&self) -> u64 {
        self.supply
    }

    /// Takes `amount` out of `from` into a [`Balance`] the caller holds.
    pub fn withdraw(&mut self, from: &Address, amount: u64) -> Result<Balance, EconError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(EconError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        self.accounts.insert(*from, available - amount);
        Ok(Balance::mint(amount))
    }
}

impl Transfer for Ledger {
    fn transfer(&mut self, balance: Balance, recipient: Address) {
        *self.accounts.entry(recipient).or_default() += balance.value();
    }
}

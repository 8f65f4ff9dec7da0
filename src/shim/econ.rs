// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum EconError {
    #[error("insufficient balance: {available} available, {requested} requested")]
    InsufficientBalance { available: u64, requested: u64 },
    #[error("total supply would exceed u64")]
    SupplyOverflow,
}

/// An amount of value in custody. Not `Clone`: value moves, it is never
/// duplicated.
#[must_use]
#[derive(Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balance {
    value: u64,
}

impl Balance {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates value out of nothing. Only the host's ledger may call this.
    pub(crate) fn mint(value: u64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Merges `other` into `self`, returning the new value. Gives `other`
    /// back if the sum does not fit in a `u64`.
    pub fn join(&mut self, other: Balance) -> Result<u64, Balance> {
        match self.value.checked_add(other.value) {
            Some(value) => {
                self.value = value;
                Ok(value)
            }
            None => Err(other),
        }
    }

    /// Moves the entire value out, leaving `self` empty.
    pub fn withdraw_all(&mut self) -> Balance {
        std::mem::take(self)
    }
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Minimal stand-ins for the services a host provides: identities, the
//! transaction context and fungible value.

pub mod address;
pub mod econ;
pub mod ledger;

pub use address::{Address, ObjectId, TxContext};
pub use econ::{Balance, EconError};
pub use ledger::{Ledger, Transfer};

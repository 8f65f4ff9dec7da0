// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! A lottery settled by publicly verifiable randomness.
//!
//! Participants buy numbered tickets against a time-boxed pool. Once the
//! window closes, a drand beacon signature for a pre-agreed round is verified,
//! hashed into a uniform digest and reduced to a winning ticket index. The
//! holder of that index claims the whole pool.
//!
//! The crate only implements the state transitions. Ordering of calls,
//! atomicity and value custody belong to the host, which talks to the core
//! through [`shim::TxContext`], [`shim::Balance`] and [`shim::Transfer`].

pub mod beacon;
pub mod config;
pub mod lottery;
pub mod networks;
pub mod randomness;
pub mod shim;
pub mod utils;

pub use beacon::{Beacon, BeaconEntry, DrandBeacon, MockBeacon};
pub use config::Config;
pub use lottery::{
    ClaimPolicy, ClaimRejected, Error, Lottery, LotteryManager, LotteryStatus, PlayerRecord,
    SharedLottery, TicketRange,
};
pub use randomness::{Blake2bHasher, RandomnessHasher, Sha256Hasher, select_ticket};
pub use shim::{Address, Balance, Ledger, ObjectId, Transfer, TxContext};

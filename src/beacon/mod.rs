// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod beacon_entries;
mod devnet;
mod drand;
mod mock_beacon;
pub mod signatures;

pub use beacon_entries::{BeaconEntry, json};
pub use devnet::DevnetSigner;
pub use drand::*;
pub use mock_beacon::MockBeacon;

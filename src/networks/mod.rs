// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Built-in beacon networks.

mod drand;

pub use drand::{DRAND_QUICKNET, DRAND_QUICKNET_CONFIG_ENV};

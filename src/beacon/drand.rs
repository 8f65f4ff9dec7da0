// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::beacon_entries::BeaconEntry;
use super::signatures::{PublicKeyOnG2, SignatureOnG1};
use crate::networks::DRAND_QUICKNET;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Type of the drand network. Only unchained networks are supported, as the
/// lottery verifies a single round without its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrandNetwork {
    #[default]
    Quicknet,
    /// A locally run beacon, see [`super::DevnetSigner`].
    Devnet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrandConfig<'a> {
    pub chain_info: ChainInfo<'a>,
    pub network_type: DrandNetwork,
}

impl Default for DrandConfig<'static> {
    fn default() -> Self {
        DRAND_QUICKNET.clone()
    }
}

/// Parameters a drand chain is published with, as served by its `/info`
/// endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainInfo<'a> {
    pub public_key: Cow<'a, str>,
    /// Interval between rounds, in seconds.
    pub period: u64,
    /// Unix time of round 1, in seconds.
    pub genesis_time: u64,
    pub hash: Cow<'a, str>,
    #[serde(rename = "groupHash")]
    pub group_hash: Cow<'a, str>,
}

/// Verifies beacon entries against a fixed public key.
pub trait Beacon {
    /// Checks that `entry` carries a valid signature for its round.
    fn verify_entry(&self, entry: &BeaconEntry) -> anyhow::Result<bool>;

    /// The most recent round published at the given unix time (ms).
    fn max_round_at(&self, unix_ms: u64) -> u64;

    /// The unix time (ms) at which `round` is published.
    fn round_time_ms(&self, round: u64) -> u64;
}

impl<B: Beacon + ?Sized> Beacon for &B {
    fn verify_entry(&self, entry: &BeaconEntry) -> anyhow::Result<bool> {
        (**self).verify_entry(entry)
    }

    fn max_round_at(&self, unix_ms: u64) -> u64 {
        (**self).max_round_at(unix_ms)
    }

    fn round_time_ms(&self, round: u64) -> u64 {
        (**self).round_time_ms(round)
    }
}

/// Verifies randomness of an unchained drand network such as quicknet.
#[derive(Debug, Clone)]
pub struct DrandBeacon {
    network: DrandNetwork,
    public_key: PublicKeyOnG2,
    /// Interval between beacons, in milliseconds.
    interval_ms: u64,
    genesis_ms: u64,
}

impl DrandBeacon {
    /// Construct a new `DrandBeacon`.
    pub fn new(config: &DrandConfig<'_>) -> anyhow::Result<Self> {
        let chain_info = &config.chain_info;
        anyhow::ensure!(chain_info.period > 0, "drand period must be positive");
        let raw = hex::decode(chain_info.public_key.as_ref())
            .context("drand public key is not hex encoded")?;
        let public_key = PublicKeyOnG2::from_bytes(&raw)
            .map_err(|e| anyhow::anyhow!("invalid drand public key: {e}"))?;

        Ok(Self {
            network: config.network_type,
            public_key,
            interval_ms: chain_info.period.saturating_mul(1000),
            genesis_ms: chain_info.genesis_time.saturating_mul(1000),
        })
    }

    /// The public quicknet beacon, `api.drand.sh`.
    pub fn quicknet() -> anyhow::Result<Self> {
        Self::new(&DRAND_QUICKNET)
    }

    pub fn network(&self) -> DrandNetwork {
        self.network
    }

    pub fn public_key(&self) -> &PublicKeyOnG2 {
        &self.public_key
    }
}

impl Beacon for DrandBeacon {
    fn verify_entry(&self, entry: &BeaconEntry) -> anyhow::Result<bool> {
        let signature = SignatureOnG1::from_bytes(entry.data())
            .with_context(|| format!("malformed signature for round {}", entry.round()))?;
        Ok(self
            .public_key
            .verify(BeaconEntry::message_unchained(entry.round()), &signature))
    }

    fn max_round_at(&self, unix_ms: u64) -> u64 {
        if unix_ms < self.genesis_ms {
            return 0;
        }
        (unix_ms - self.genesis_ms) / self.interval_ms + 1
    }

    fn round_time_ms(&self, round: u64) -> u64 {
        self.genesis_ms
            .saturating_add(round.saturating_sub(1).saturating_mul(self.interval_ms))
    }
}

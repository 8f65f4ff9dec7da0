// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde::{Deserialize, Serialize};
use sha2::Digest as _;

/// A beacon output: the round number together with the BLS signature the
/// beacon network produced for it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct BeaconEntry {
    round: u64,
    #[serde(with = "hex")]
    data: Vec<u8>,
}

impl BeaconEntry {
    pub fn new(round: u64, data: Vec<u8>) -> Self {
        Self { round, data }
    }
    /// Returns the current round number.
    pub fn round(&self) -> u64 {
        self.round
    }
    /// The signature of message `H(round)`.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_parts(self) -> (u64, Vec<u8>) {
        let Self { round, data } = self;
        (round, data)
    }

    /// The message signed by an unchained beacon: `SHA-256(round)`, round
    /// encoded as 8 big-endian bytes.
    pub fn message_unchained(round: u64) -> [u8; 32] {
        let mut message = [0u8; 32];
        message.copy_from_slice(&sha2::Sha256::digest(round.to_be_bytes()));
        message
    }
}

pub mod json {
    use super::*;
    use anyhow::Context as _;

    /// Body of a drand `/public/{round}` response.
    #[derive(Deserialize, Serialize, Debug, Clone)]
    pub struct DrandResponseJson {
        pub round: u64,
        pub randomness: String,
        pub signature: String,
    }

    impl TryFrom<DrandResponseJson> for BeaconEntry {
        type Error = anyhow::Error;

        fn try_from(resp: DrandResponseJson) -> Result<Self, Self::Error> {
            let signature = hex::decode(&resp.signature).context("signature is not hex")?;
            let randomness = hex::decode(&resp.randomness).context("randomness is not hex")?;
            anyhow::ensure!(
                sha2::Sha256::digest(&signature).as_slice() == randomness.as_slice(),
                "randomness of round {} does not match its signature",
                resp.round
            );
            Ok(BeaconEntry::new(resp.round, signature))
        }
    }

    /// Parses a drand HTTP API response body into a [`BeaconEntry`].
    pub fn from_drand_json(body: &str) -> anyhow::Result<BeaconEntry> {
        let resp: DrandResponseJson = serde_json::from_str(body)?;
        resp.try_into()
    }
}

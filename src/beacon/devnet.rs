// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::signatures::{DST_G1, PublicKeyOnG2};
use super::{BeaconEntry, ChainInfo, DrandConfig, DrandNetwork};
use blstrs::{G1Projective, G2Projective, Scalar};
use group::{Curve, Group};
use std::borrow::Cow;

/// Signing half of a locally run unchained beacon. Development networks and
/// tests use it to produce round signatures that [`super::DrandBeacon`]
/// accepts.
pub struct DevnetSigner {
    secret: Scalar,
}

impl DevnetSigner {
    /// Derives the secret scalar from a seed. Not suitable for anything but
    /// development networks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            secret: Scalar::from(seed.wrapping_mul(0x9e37_79b9_7f4a_7c15).max(1)),
        }
    }

    pub fn public_key(&self) -> PublicKeyOnG2 {
        (G2Projective::generator() * self.secret).into()
    }

    /// Compressed G1 signature over the unchained message of `round`.
    pub fn sign_round(&self, round: u64) -> Vec<u8> {
        let message = BeaconEntry::message_unchained(round);
        let point = G1Projective::hash_to_curve(&message, DST_G1, &[]) * self.secret;
        point.to_affine().to_compressed().to_vec()
    }

    pub fn entry(&self, round: u64) -> BeaconEntry {
        BeaconEntry::new(round, self.sign_round(round))
    }

    /// Beacon configuration matching this signer.
    pub fn config(&self, genesis_time: u64, period: u64) -> DrandConfig<'static> {
        DrandConfig {
            chain_info: ChainInfo {
                public_key: Cow::Owned(hex::encode(self.public_key().as_bytes())),
                period,
                genesis_time,
                hash: Cow::Borrowed(""),
                group_hash: Cow::Borrowed(""),
            },
            network_type: DrandNetwork::Devnet,
        }
    }
}

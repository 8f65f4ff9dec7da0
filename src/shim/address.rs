// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::utils::encoding::blake2b_256;
use hex::FromHex as _;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

macro_rules! hex_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        pub struct $name(#[serde(with = "hex")] [u8; 32]);

        impl $name {
            pub const fn new(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl FromStr for $name {
            type Err = hex::FromHexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix("0x").unwrap_or(s);
                <[u8; 32]>::from_hex(s).map(Self)
            }
        }
    };
}

hex_id!(
    /// An account that can sign transactions and receive value.
    Address
);

hex_id!(
    /// Identity of an object created by the core, assigned by the host.
    ObjectId
);

/// Per-transaction information handed in by the host.
#[derive(Debug)]
pub struct TxContext {
    sender: Address,
    digest: [u8; 32],
    ids_created: u64,
}

impl TxContext {
    /// `digest` must be unique per transaction, object identities are derived
    /// from it.
    pub fn new(sender: Address, digest: [u8; 32]) -> Self {
        Self {
            sender,
            digest,
            ids_created: 0,
        }
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    /// Issues a new object identity, `blake2b_256(digest || counter)`.
    pub fn fresh_id(&mut self) -> ObjectId {
        let mut ingest = Vec::with_capacity(40);
        ingest.extend_from_slice(&self.digest);
        ingest.extend_from_slice(&self.ids_created.to_be_bytes());
        self.ids_created += 1;
        ObjectId(blake2b_256(&ingest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let address = Address::new([0xab; 32]);
        let shown = address.to_string();
        assert_eq!(shown, format!("0x{}", "ab".repeat(32)));
        assert_eq!(shown.parse::<Address>().unwrap(), address);
        assert_eq!(shown[2..].parse::<Address>().unwrap(), address);
        assert!("0x1234".parse::<Address>().is_err());
    }

    #[test]
    fn fresh_ids_are_unique() {
        let mut ctx = TxContext::new(Address::default(), [1; 32]);
        let a = ctx.fresh_id();
        let b = ctx.fresh_id();
        assert_ne!(a, b);
        let mut other = TxContext::new(Address::default(), [2; 32]);
        assert_ne!(other.fresh_id(), a);
    }

    #[test]
    fn json_is_hex() {
        let id = ObjectId::new([0x01; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        assert_eq!(serde_json::from_str::<ObjectId>(&json).unwrap(), id);
    }
}

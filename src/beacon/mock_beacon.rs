// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{Beacon, BeaconEntry};
use crate::utils::encoding::blake2b_256;
use std::time::Duration;

/// Mock beacon used for testing. Deterministic based on an interval.
///
/// Round `r` is published at `r * interval` and its only valid signature is
/// `blake2b_256(r)`.
pub struct MockBeacon {
    interval: Duration,
}

impl MockBeacon {
    pub fn new(interval: Duration) -> Self {
        MockBeacon { interval }
    }

    pub fn entry_for_round(round: u64) -> BeaconEntry {
        BeaconEntry::new(round, blake2b_256(&round.to_be_bytes()).to_vec())
    }

    pub fn round_time(&self) -> Duration {
        self.interval
    }

    fn interval_ms(&self) -> u64 {
        u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX).max(1)
    }
}

impl Default for MockBeacon {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl Beacon for MockBeacon {
    fn verify_entry(&self, entry: &BeaconEntry) -> anyhow::Result<bool> {
        Ok(Self::entry_for_round(entry.round()).data() == entry.data())
    }

    fn max_round_at(&self, unix_ms: u64) -> u64 {
        unix_ms / self.interval_ms()
    }

    fn round_time_ms(&self, round: u64) -> u64 {
        round.saturating_mul(self.interval_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_own_entries() {
        let beacon = MockBeacon::default();
        assert!(beacon.verify_entry(&MockBeacon::entry_for_round(5)).unwrap());
        let (_, data) = MockBeacon::entry_for_round(5).into_parts();
        assert!(!beacon.verify_entry(&BeaconEntry::new(6, data)).unwrap());
    }

    #[test]
    fn rounds_follow_interval() {
        let beacon = MockBeacon::new(Duration::from_millis(500));
        assert_eq!(beacon.max_round_at(1_999), 3);
        assert_eq!(beacon.round_time_ms(4), 2_000);
    }
}

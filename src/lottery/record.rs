// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::shim::{Address, ObjectId};
use serde::{Deserialize, Serialize};

/// `count` consecutive ticket indices starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRange {
    start: u64,
    count: u64,
}

impl TicketRange {
    pub fn new(start: u64, count: u64) -> Self {
        Self { start, count }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn contains(&self, index: u64) -> bool {
        index >= self.start && index - self.start < self.count
    }

    pub fn indices(&self) -> impl Iterator<Item = u64> + use<> {
        self.start..self.start + self.count
    }
}

/// Tickets one participant holds in one lottery.
///
/// Not `Clone`: a record is consumed exactly once, by the claim.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    id: ObjectId,
    owner: Address,
    lottery_id: ObjectId,
    /// Ascending and non-overlapping, adjacent ranges are merged.
    tickets: Vec<TicketRange>,
}

impl PlayerRecord {
    pub(super) fn new(id: ObjectId, owner: Address, lottery_id: ObjectId) -> Self {
        Self {
            id,
            owner,
            lottery_id,
            tickets: vec![],
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn lottery_id(&self) -> ObjectId {
        self.lottery_id
    }

    pub fn ticket_ranges(&self) -> &[TicketRange] {
        &self.tickets
    }

    /// Every owned ticket index, in purchase order.
    pub fn tickets(&self) -> impl Iterator<Item = u64> + '_ {
        self.tickets.iter().flat_map(TicketRange::indices)
    }

    pub fn ticket_count(&self) -> u64 {
        self.tickets.iter().map(TicketRange::count).sum()
    }

    pub fn contains(&self, index: u64) -> bool {
        let after = self.tickets.partition_point(|range| range.start <= index);
        after > 0 && self.tickets[after - 1].contains(index)
    }

    /// Appends a purchase. Ranges arrive in ascending order because the
    /// lottery hands out indices from a single counter.
    pub(super) fn push_range(&mut self, range: TicketRange) {
        if range.count == 0 {
            return;
        }
        match self.tickets.last_mut() {
            Some(last) if last.start + last.count == range.start => last.count += range.count,
            _ => self.tickets.push(range),
        }
    }
}

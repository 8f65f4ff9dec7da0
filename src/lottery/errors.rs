// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::PlayerRecord;
use thiserror::Error;

/// Precondition violations. Every operation that fails leaves the lottery,
/// the record and the payment exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("payment of {paid} does not cover the ticket price")]
    PaymentTooLow { paid: u64 },
    #[error("player record belongs to another lottery")]
    WrongLottery,
    #[error("lottery has ended")]
    LotteryEnded,
    #[error("lottery has not ended yet")]
    LotteryNotEnded,
    #[error("lottery has been completed")]
    LotteryCompleted,
    #[error("invalid randomness for round {round}")]
    InvalidRandomness { round: u64 },
    #[error("no tickets were sold")]
    NoTicketsSold,
    #[error("prize pool cannot take a further {paid}")]
    PoolOverflow { paid: u64 },
    #[error("invalid ticket count {0}")]
    InvalidTicketCount(u64),
}

/// A claim that did not run. The record is handed back untouched.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ClaimRejected {
    pub error: Error,
    pub record: PlayerRecord,
}

impl ClaimRejected {
    pub fn into_record(self) -> PlayerRecord {
        self.record
    }
}

impl From<ClaimRejected> for Error {
    fn from(rejected: ClaimRejected) -> Self {
        rejected.error
    }
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! The lottery aggregate, player records and the operations moving them
//! through `Active -> Ended -> Completed`.

mod errors;
mod manager;
mod record;
mod shared;

pub use errors::{ClaimRejected, Error};
pub use manager::LotteryManager;
pub use record::{PlayerRecord, TicketRange};
pub use shared::SharedLottery;

use crate::shim::{Address, Balance, ObjectId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds per minute of lottery duration.
pub const MS_PER_MINUTE: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotteryStatus {
    /// Tickets are on sale until the end time.
    Active,
    /// A winning ticket has been drawn, the pool awaits its claim.
    Ended,
    /// The pool has been paid out.
    Completed,
}

impl fmt::Display for LotteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LotteryStatus::Active => "active",
            LotteryStatus::Ended => "ended",
            LotteryStatus::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Which claims may observe the drawn ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClaimPolicy {
    /// The drawn ticket stays readable until its holder claims. Claims with
    /// other tickets return `false` and affect nobody else.
    #[default]
    WinnerTakes,
    /// The first claim after the draw consumes it, winning or not. Every
    /// later claim observes `false`, including one holding the drawn ticket.
    FirstClaimConsumes,
}

/// One lottery round: its pool, ticket counter, timing and status.
///
/// Ticket indices `[0, no_of_tickets)` have been handed out, each to exactly
/// one [`PlayerRecord`].
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lottery {
    id: ObjectId,
    round: u64,
    end_time: u64,
    no_of_tickets: u64,
    no_of_players: u64,
    winner: Option<Address>,
    winning_ticket: Option<u64>,
    draw_consumed: bool,
    ticket_price: u64,
    reward: Balance,
    status: LotteryStatus,
}

impl Lottery {
    fn new(id: ObjectId, round: u64, end_time: u64, ticket_price: u64) -> Self {
        Self {
            id,
            round,
            end_time,
            no_of_tickets: 0,
            no_of_players: 0,
            winner: None,
            winning_ticket: None,
            draw_consumed: false,
            ticket_price,
            reward: Balance::zero(),
            status: LotteryStatus::Active,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Beacon round whose randomness settles this lottery.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Unix time (ms) after which no tickets are sold.
    pub fn end_time(&self) -> u64 {
        self.end_time
    }

    /// Next unassigned ticket index.
    pub fn no_of_tickets(&self) -> u64 {
        self.no_of_tickets
    }

    pub fn no_of_players(&self) -> u64 {
        self.no_of_players
    }

    pub fn winner(&self) -> Option<Address> {
        self.winner
    }

    pub fn winning_ticket(&self) -> Option<u64> {
        self.winning_ticket
    }

    /// Whether a claim already consumed the draw under
    /// [`ClaimPolicy::FirstClaimConsumes`].
    pub fn draw_consumed(&self) -> bool {
        self.draw_consumed
    }

    pub fn ticket_price(&self) -> u64 {
        self.ticket_price
    }

    /// Value currently in the pool.
    pub fn reward(&self) -> u64 {
        self.reward.value()
    }

    pub fn status(&self) -> LotteryStatus {
        self.status
    }
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{
    ClaimPolicy, ClaimRejected, Error, Lottery, LotteryStatus, MS_PER_MINUTE, PlayerRecord,
    TicketRange,
};
use crate::beacon::{Beacon, BeaconEntry, DrandBeacon};
use crate::config::Config;
use crate::randomness::{RandomnessHasher, Sha256Hasher, select_ticket};
use crate::shim::{Balance, Transfer, TxContext};
use tracing::{debug, info, warn};

/// Runs the lottery operations. Holds the randomness capabilities: a
/// [`Beacon`] to authenticate round signatures and a [`RandomnessHasher`] to
/// turn them into digests.
///
/// Each operation either fails without touching its inputs or applies all of
/// its effects. Ordering of operations on one lottery is up to the caller,
/// see [`super::SharedLottery`].
#[derive(Debug, Clone)]
pub struct LotteryManager<B = DrandBeacon, H = Sha256Hasher> {
    beacon: B,
    hasher: H,
    claim_policy: ClaimPolicy,
}

impl LotteryManager {
    /// Manager for the configured drand network, hashing with SHA-256.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(LotteryManager::new(config.beacon()?, Sha256Hasher)
            .with_claim_policy(config.claim_policy))
    }
}

impl<B, H> LotteryManager<B, H>
where
    B: Beacon,
    H: RandomnessHasher,
{
    pub fn new(beacon: B, hasher: H) -> Self {
        Self {
            beacon,
            hasher,
            claim_policy: ClaimPolicy::default(),
        }
    }

    pub fn with_claim_policy(mut self, claim_policy: ClaimPolicy) -> Self {
        self.claim_policy = claim_policy;
        self
    }

    pub fn claim_policy(&self) -> ClaimPolicy {
        self.claim_policy
    }

    pub fn beacon(&self) -> &B {
        &self.beacon
    }

    /// Opens a lottery settled by beacon `round`, selling tickets for
    /// `duration_minutes` from `now_ms`.
    pub fn start_lottery(
        &self,
        ctx: &mut TxContext,
        round: u64,
        ticket_price: u64,
        duration_minutes: u64,
        now_ms: u64,
    ) -> Lottery {
        let end_time = now_ms.saturating_add(duration_minutes.saturating_mul(MS_PER_MINUTE));
        let lottery = Lottery::new(ctx.fresh_id(), round, end_time, ticket_price);

        let published_ms = self.beacon.round_time_ms(round);
        if published_ms <= end_time {
            warn!(
                lottery = %lottery.id(),
                round,
                published_ms,
                end_time,
                "beacon round is published before ticket sales close"
            );
        }
        info!(
            lottery = %lottery.id(),
            round,
            ticket_price,
            end_time,
            "started lottery"
        );
        lottery
    }

    /// Creates an empty record for the sender. A sender may hold any number
    /// of records for the same lottery.
    pub fn create_player_record(&self, ctx: &mut TxContext, lottery: &mut Lottery) -> PlayerRecord {
        lottery.no_of_players += 1;
        let record = PlayerRecord::new(ctx.fresh_id(), ctx.sender(), lottery.id());
        debug!(
            lottery = %lottery.id(),
            record = %record.id(),
            owner = %record.owner(),
            "created player record"
        );
        record
    }

    /// Buys `requested_count` consecutive tickets into `record`.
    ///
    /// On success the whole `payment` goes into the pool, including anything
    /// above `ticket_price * requested_count`, and the record's total ticket
    /// count is returned. A count of zero only adds the payment to the pool.
    /// On failure `payment` is left untouched.
    #[tracing::instrument(skip_all, fields(lottery = %lottery.id(), record = %record.id()))]
    pub fn buy_ticket(
        &self,
        lottery: &mut Lottery,
        record: &mut PlayerRecord,
        requested_count: u64,
        payment: &mut Balance,
        now_ms: u64,
    ) -> Result<u64, Error> {
        if record.lottery_id() != lottery.id() {
            return Err(Error::WrongLottery);
        }
        if now_ms >= lottery.end_time {
            return Err(Error::LotteryEnded);
        }
        if lottery.status != LotteryStatus::Active {
            return Err(Error::LotteryEnded);
        }
        let paid = payment.value();
        match lottery.ticket_price.checked_mul(requested_count) {
            Some(required) if paid >= required => {}
            _ => return Err(Error::PaymentTooLow { paid }),
        }
        let start = lottery.no_of_tickets;
        let next = start
            .checked_add(requested_count)
            .ok_or(Error::InvalidTicketCount(requested_count))?;

        if let Err(refused) = lottery.reward.join(payment.withdraw_all()) {
            *payment = refused;
            return Err(Error::PoolOverflow { paid });
        }
        lottery.no_of_tickets = next;
        record.push_range(TicketRange::new(start, requested_count));

        debug!(start, requested_count, paid, "sold tickets");
        Ok(record.ticket_count())
    }

    /// Settles the lottery with the beacon signature of its round and returns
    /// the winning ticket index.
    #[tracing::instrument(skip_all, fields(lottery = %lottery.id(), round = lottery.round()))]
    pub fn end_lottery(
        &self,
        lottery: &mut Lottery,
        now_ms: u64,
        beacon_signature: &[u8],
    ) -> Result<u64, Error> {
        if now_ms <= lottery.end_time {
            return Err(Error::LotteryNotEnded);
        }
        if lottery.status != LotteryStatus::Active {
            return Err(Error::LotteryEnded);
        }
        if lottery.no_of_tickets == 0 {
            return Err(Error::NoTicketsSold);
        }

        let round = lottery.round;
        let entry = BeaconEntry::new(round, beacon_signature.to_vec());
        match self.beacon.verify_entry(&entry) {
            Ok(true) => {}
            Ok(false) => {
                warn!("beacon signature does not verify");
                return Err(Error::InvalidRandomness { round });
            }
            Err(error) => {
                warn!(%error, "failed to verify beacon signature");
                return Err(Error::InvalidRandomness { round });
            }
        }

        let digest = self.hasher.derive(beacon_signature);
        let winning_ticket =
            select_ticket(lottery.no_of_tickets, &digest).ok_or(Error::NoTicketsSold)?;

        lottery.winning_ticket = Some(winning_ticket);
        lottery.status = LotteryStatus::Ended;
        info!(
            winning_ticket,
            no_of_tickets = lottery.no_of_tickets,
            "ended lottery"
        );
        Ok(winning_ticket)
    }

    /// Consumes `record` and pays the whole pool to the sender if the record
    /// holds the winning ticket.
    ///
    /// Which claims can see the winning ticket depends on the
    /// [`ClaimPolicy`]. If a precondition fails the record comes back inside
    /// [`ClaimRejected`].
    #[tracing::instrument(skip_all, fields(lottery = %lottery.id(), record = %record.id()))]
    pub fn check_if_winner<T: Transfer>(
        &self,
        ctx: &TxContext,
        lottery: &mut Lottery,
        record: PlayerRecord,
        bank: &mut T,
    ) -> Result<bool, ClaimRejected> {
        let precondition = if record.lottery_id() != lottery.id() {
            Some(Error::WrongLottery)
        } else if lottery.status == LotteryStatus::Completed {
            Some(Error::LotteryCompleted)
        } else if lottery.status != LotteryStatus::Ended {
            Some(Error::LotteryNotEnded)
        } else {
            None
        };
        if let Some(error) = precondition {
            return Err(ClaimRejected { error, record });
        }

        let winning_ticket = match self.claim_policy {
            ClaimPolicy::WinnerTakes => lottery.winning_ticket,
            ClaimPolicy::FirstClaimConsumes if lottery.draw_consumed => None,
            ClaimPolicy::FirstClaimConsumes => {
                lottery.draw_consumed = true;
                lottery.winning_ticket
            }
        };
        let won = winning_ticket.is_some_and(|ticket| record.contains(ticket));
        drop(record);

        if !won {
            debug!("claim does not hold the winning ticket");
            return Ok(false);
        }

        let winner = ctx.sender();
        let prize = lottery.reward.withdraw_all();
        let amount = prize.value();
        bank.transfer(prize, winner);
        lottery.winner = Some(winner);
        lottery.status = LotteryStatus::Completed;
        info!(%winner, amount, "paid out lottery");
        Ok(true)
    }
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::Lottery;
use crate::shim::ObjectId;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A lottery shared between callers. Every operation runs under the lock, so
/// calls on one lottery are totally ordered, which keeps ticket indices
/// contiguous and disjoint.
#[derive(Debug, Clone)]
pub struct SharedLottery {
    id: ObjectId,
    inner: Arc<Mutex<Lottery>>,
}

impl SharedLottery {
    pub fn new(lottery: Lottery) -> Self {
        Self {
            id: lottery.id(),
            inner: Arc::new(Mutex::new(lottery)),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn lock(&self) -> MutexGuard<'_, Lottery> {
        self.inner.lock()
    }

    /// Runs `f` with exclusive access to the lottery.
    pub fn with<R>(&self, f: impl FnOnce(&mut Lottery) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<Lottery> for SharedLottery {
    fn from(lottery: Lottery) -> Self {
        Self::new(lottery)
    }
}

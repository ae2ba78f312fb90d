use std::{collections::HashMap, sync::Arc};

use chrono::{Local, NaiveDate};
use teloxide::types::UserId;
use tokio::sync::Mutex;

/// Maximum downloads per user per calendar day
pub const DAILY_LIMIT: u32 = 10;

/// How much one watched ad adds to the counter
pub const AD_BONUS: u32 = 2;

/// Source of "today" for the ledger
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuota {
    pub user_id: UserId,
    pub count: u32,
    pub last_reset: NaiveDate,
}

impl UserQuota {
    fn fresh(user_id: UserId, today: NaiveDate) -> Self {
        Self {
            user_id,
            count: 0,
            last_reset: today,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.count >= DAILY_LIMIT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusOutcome {
    Granted { count: u32 },
    LimitReached,
}

/// Per-user daily download counters, kept in memory for the process lifetime.
///
/// Every operation runs under one lock, so two messages from the same user
/// never interleave their read-modify-write.
#[derive(Clone)]
pub struct QuotaLedger {
    entries: Arc<Mutex<HashMap<UserId, UserQuota>>>,
    clock: Arc<dyn Clock>,
}

impl Default for QuotaLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotaLedger {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(LocalClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            clock,
        }
    }

    /// Entry for `user_id`, replaced by a zeroed one if it belongs to an earlier day
    fn current(
        entries: &mut HashMap<UserId, UserQuota>,
        user_id: UserId,
        today: NaiveDate,
    ) -> &mut UserQuota {
        let entry = entries
            .entry(user_id)
            .or_insert_with(|| UserQuota::fresh(user_id, today));
        if entry.last_reset != today {
            *entry = UserQuota::fresh(user_id, today);
        }
        entry
    }

    pub async fn get(&self, user_id: UserId) -> UserQuota {
        let today = self.clock.today();
        let mut entries = self.entries.lock().await;
        Self::current(&mut entries, user_id, today).clone()
    }

    pub async fn reset(&self, user_id: UserId) {
        let today = self.clock.today();
        let mut entries = self.entries.lock().await;
        entries.insert(user_id, UserQuota::fresh(user_id, today));
    }

    /// Adds `amount` to the counter, clamped to [`DAILY_LIMIT`].
    pub async fn grant_bonus(&self, user_id: UserId, amount: u32) -> BonusOutcome {
        let today = self.clock.today();
        let mut entries = self.entries.lock().await;
        let quota = Self::current(&mut entries, user_id, today);

        if quota.is_exhausted() {
            return BonusOutcome::LimitReached;
        }

        quota.count = quota.count.saturating_add(amount).min(DAILY_LIMIT);
        BonusOutcome::Granted { count: quota.count }
    }

    /// Counts one finished download and returns the new count.
    ///
    /// Callers check the limit first; the counter still saturates at
    /// [`DAILY_LIMIT`] when two submissions pass that check together.
    pub async fn increment(&self, user_id: UserId) -> u32 {
        let today = self.clock.today();
        let mut entries = self.entries.lock().await;
        let quota = Self::current(&mut entries, user_id, today);
        quota.count = (quota.count + 1).min(DAILY_LIMIT);
        quota.count
    }
}

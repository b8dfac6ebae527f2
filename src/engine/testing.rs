//! In-memory stand-ins for the clock and notifier.

use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use time::OffsetDateTime;

use super::{
    clock::{Clock, TimerHandle, TimerTask},
    notifier::{Announcement, Notice, Notifier, NotifyResult},
};
use crate::models::giveaway::{ChannelRef, GiveawayId, GiveawaySummary};

struct PendingTimer {
    due: OffsetDateTime,
    task: TimerTask,
    cancelled: Arc<AtomicBool>,
}

/// Virtual time. Scheduled tasks only run from `advance`.
pub struct ManualClock {
    now: Mutex<OffsetDateTime>,
    timers: Mutex<Vec<PendingTimer>>,
    fired: AtomicUsize,
}

impl ManualClock {
    pub fn new(start: OffsetDateTime) -> Self {
        ManualClock {
            now: Mutex::new(start),
            timers: Mutex::new(Vec::new()),
            fired: AtomicUsize::new(0),
        }
    }

    /// Moves time forward and runs every task that became due, earliest first.
    pub async fn advance(&self, by: Duration) {
        let now = {
            let mut now = self.now.lock().unwrap();
            *now += by;
            *now
        };

        let mut due = {
            let mut timers = self.timers.lock().unwrap();
            let (due, pending) = timers
                .drain(..)
                .partition::<Vec<_>, _>(|timer| timer.due <= now);
            *timers = pending;
            due
        };
        due.sort_by_key(|timer| timer.due);

        for timer in due {
            if timer.cancelled.load(Ordering::SeqCst) {
                continue;
            }
            self.fired.fetch_add(1, Ordering::SeqCst);
            timer.task.await;
        }
    }

    /// Tasks scheduled and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.timers
            .lock()
            .unwrap()
            .iter()
            .filter(|timer| !timer.cancelled.load(Ordering::SeqCst))
            .count()
    }

    pub fn fired(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap()
    }

    fn after(&self, delay: Duration, task: TimerTask) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let due = self.now() + delay;
        self.timers.lock().unwrap().push(PendingTimer {
            due,
            task,
            cancelled: cancelled.clone(),
        });
        TimerHandle::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierCall {
    Posted {
        location: ChannelRef,
        id: GiveawayId,
        summary: GiveawaySummary,
    },
    Updated {
        location: ChannelRef,
        id: GiveawayId,
        announcement: Announcement,
    },
    Notice {
        location: ChannelRef,
        notice: Notice,
    },
}

/// Records every call and hands out sequential message ids.
#[derive(Default)]
pub struct RecordingNotifier {
    next_id: AtomicU64,
    calls: Mutex<Vec<NotifierCall>>,
    fail_posts: AtomicBool,
    fail_updates: AtomicBool,
    fail_notices: AtomicBool,
    hang_updates: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier {
            next_id: AtomicU64::new(1000),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<NotifierCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_posts(&self, fail: bool) {
        self.fail_posts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub fn fail_notices(&self, fail: bool) {
        self.fail_notices.store(fail, Ordering::SeqCst);
    }

    /// Makes every later `update_announcement` wait forever.
    pub fn hang_updates(&self, hang: bool) {
        self.hang_updates.store(hang, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn post_announcement(
        &self,
        location: ChannelRef,
        summary: &GiveawaySummary,
    ) -> NotifyResult<GiveawayId> {
        if self.fail_posts.load(Ordering::SeqCst) {
            return Err("Missing Permissions".into());
        }

        let id = GiveawayId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.calls.lock().unwrap().push(NotifierCall::Posted {
            location,
            id,
            summary: summary.clone(),
        });
        Ok(id)
    }

    async fn update_announcement(
        &self,
        location: ChannelRef,
        id: GiveawayId,
        announcement: &Announcement,
    ) -> NotifyResult<()> {
        if self.hang_updates.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err("Unknown Message".into());
        }

        self.calls.lock().unwrap().push(NotifierCall::Updated {
            location,
            id,
            announcement: announcement.clone(),
        });
        Ok(())
    }

    async fn send_notice(&self, location: ChannelRef, notice: &Notice) -> NotifyResult<()> {
        if self.fail_notices.load(Ordering::SeqCst) {
            return Err("Missing Access".into());
        }

        self.calls.lock().unwrap().push(NotifierCall::Notice {
            location,
            notice: notice.clone(),
        });
        Ok(())
    }
}

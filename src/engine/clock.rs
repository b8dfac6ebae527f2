use std::{future::Future, pin::Pin, time::Duration};

use time::OffsetDateTime;

pub type TimerTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Longest single sleep handed to tokio, whose timer wheel tops out at ~2 years.
const MAX_SLEEP: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Cancels a scheduled task. Dropping the handle leaves the task scheduled.
pub struct TimerHandle {
    cancel: Box<dyn FnOnce() + Send + Sync>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        TimerHandle {
            cancel: Box::new(cancel),
        }
    }

    pub fn cancel(self) {
        (self.cancel)();
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;

    /// Runs `task` once, no earlier than `delay` from now.
    fn after(&self, delay: Duration, task: TimerTask) -> TimerHandle;
}

pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn after(&self, delay: Duration, task: TimerTask) -> TimerHandle {
        let handle = tokio::spawn(async move {
            let mut remaining = delay;
            while !remaining.is_zero() {
                let step = remaining.min(MAX_SLEEP);
                tokio::time::sleep(step).await;
                remaining -= step;
            }
            task.await;
        });

        let abort = handle.abort_handle();
        TimerHandle::new(move || abort.abort())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use super::*;

    fn flag_task(flag: &Arc<AtomicBool>) -> TimerTask {
        let flag = flag.clone();
        Box::pin(async move {
            flag.store(true, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let _handle = TokioClock.after(Duration::from_secs(60), flag_task(&fired));

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_cancel() {
        let fired = Arc::new(AtomicBool::new(false));
        let handle = TokioClock.after(Duration::from_secs(60), flag_task(&fired));
        handle.cancel();

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_waits_past_max_sleep() {
        let fired = Arc::new(AtomicBool::new(false));
        let delay = MAX_SLEEP * 3 + Duration::from_secs(5);
        let _handle = TokioClock.after(delay, flag_task(&fired));

        tokio::time::sleep(MAX_SLEEP * 3).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(fired.load(Ordering::SeqCst));
    }
}

use std::time::Duration;

use once_cell::sync::Lazy;
use shared::scheduler::{FrameCallback, Scheduler};
use tokio::task::JoinHandle;
use tokio::time::Instant;

static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Milliseconds since the first frame clock read in this process.
pub fn frame_clock_ms() -> f64 {
    PROCESS_START.elapsed().as_secs_f64() * 1000.0
}

/// Timer-driven frames for native hosts. Must be used inside a `LocalSet`,
/// since frame callbacks are not `Send`.
#[derive(Debug, Clone, Copy)]
pub struct TimerScheduler {
    frame_interval: Duration,
}

impl TimerScheduler {
    pub fn new(frame_interval: Duration) -> Self {
        Self { frame_interval }
    }
}

impl Scheduler for TimerScheduler {
    type Handle = JoinHandle<()>;

    fn schedule_frame(&self, callback: FrameCallback) -> JoinHandle<()> {
        let interval = self.frame_interval;
        tokio::task::spawn_local(async move {
            tokio::time::sleep(interval).await;
            callback(frame_clock_ms());
        })
    }

    fn cancel(&self, handle: JoinHandle<()>) {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::LocalSet;

    #[tokio::test]
    async fn test_frame_fires_after_interval() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TimerScheduler::new(Duration::from_millis(5));
                let fired = Rc::new(Cell::new(None));
                let slot = Rc::clone(&fired);
                let before = frame_clock_ms();
                let handle = scheduler.schedule_frame(Box::new(move |now| slot.set(Some(now))));
                handle.await.unwrap();
                let now = fired.get().expect("frame should have fired");
                assert!(now >= before);
            })
            .await;
    }

    #[tokio::test]
    async fn test_cancelled_frame_never_fires() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TimerScheduler::new(Duration::from_millis(20));
                let fired = Rc::new(Cell::new(false));
                let slot = Rc::clone(&fired);
                let handle = scheduler.schedule_frame(Box::new(move |_| slot.set(true)));
                scheduler.cancel(handle);
                tokio::time::sleep(Duration::from_millis(60)).await;
                assert!(!fired.get());
            })
            .await;
    }
}

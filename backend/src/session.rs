use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use shared::clock::SystemClock;
use shared::progress::ProgressStore;
use shared::scheduler::SpinDriver;
use shared::selector::{OsRngSelector, RandomSelector, SeededSelector};
use shared::storage::StorageBackend;
use shared::{SpinResult, WheelConfig, WheelEngine, WheelError, WheelEvent, WheelOption};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::error::AppError;
use crate::timer_scheduler::TimerScheduler;

type Selector = Box<dyn RandomSelector>;

/// A wheel running on timer frames, recording every completed spin.
pub struct WheelSession<B: StorageBackend + 'static> {
    driver: SpinDriver<TimerScheduler, Selector, SystemClock>,
    progress: Rc<RefCell<ProgressStore<B>>>,
    results: mpsc::UnboundedReceiver<SpinResult>,
}

impl<B: StorageBackend + 'static> WheelSession<B> {
    pub fn new(config: &Config, progress: ProgressStore<B>) -> Self {
        let selector: Selector = match config.seed {
            Some(seed) => Box::new(SeededSelector::new(seed)),
            None => Box::new(OsRngSelector),
        };
        Self::with_selector(
            config.options.clone(),
            config.wheel.clone(),
            config.elimination,
            Duration::from_millis(config.frame_interval_ms),
            selector,
            progress,
        )
    }

    pub fn with_selector(
        options: Vec<WheelOption>,
        wheel: WheelConfig,
        elimination: bool,
        frame_interval: Duration,
        selector: Selector,
        progress: ProgressStore<B>,
    ) -> Self {
        let mut engine = WheelEngine::with_parts(options, wheel, selector, SystemClock);
        engine.set_elimination_mode(elimination);

        let progress = Rc::new(RefCell::new(progress));
        let (tx, results) = mpsc::unbounded_channel();
        let recorder = Rc::clone(&progress);
        let listener = move |event: WheelEvent| match event {
            WheelEvent::Tick(tick) => {
                tracing::debug!(segment = tick.segment_index, "tick");
            }
            WheelEvent::Settled(result) => {
                let outcome = recorder.borrow_mut().record_spin(&result);
                for achievement in &outcome.unlocked_achievements {
                    tracing::info!("🏆 Achievement unlocked: {} - {}", achievement.name, achievement.description);
                }
                let _ = tx.send(result);
            }
        };

        let driver = SpinDriver::new(
            Rc::new(RefCell::new(engine)),
            TimerScheduler::new(frame_interval),
            listener,
        );
        Self {
            driver,
            progress,
            results,
        }
    }

    /// Spins once and waits for the wheel to settle. Must run inside a `LocalSet`.
    pub async fn spin_once(&mut self) -> Result<SpinResult, AppError> {
        while self.results.try_recv().is_ok() {}

        let plan = self.driver.spin()?;
        tracing::debug!(
            from = plan.start_rotation,
            to = plan.target_rotation,
            duration_ms = plan.duration_ms,
            "spin accepted"
        );
        self.results
            .recv()
            .await
            .ok_or(AppError::Wheel(WheelError::InvalidInput("spin listener closed".to_string())))
    }

    /// Removes the latest winner when elimination mode is on.
    pub fn eliminate_winner(&self) -> Result<Vec<WheelOption>, WheelError> {
        self.driver.engine().borrow_mut().eliminate_winner()
    }

    pub fn active_options(&self) -> Vec<WheelOption> {
        self.driver.engine().borrow().active_options().to_vec()
    }

    pub fn is_spinning(&self) -> bool {
        self.driver.is_spinning()
    }

    /// Stops a spin in flight; it produces no result or history entry.
    pub fn cancel(&self) -> bool {
        self.driver.cancel()
    }

    pub fn progress(&self) -> Ref<'_, ProgressStore<B>> {
        self.progress.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::options_from_labels;
    use shared::storage::MemoryStorage;
    use tokio::task::LocalSet;

    fn session(labels: &[&str], elimination: bool) -> WheelSession<MemoryStorage> {
        let wheel = WheelConfig {
            spin_duration_ms: 120,
            ..WheelConfig::default()
        };
        WheelSession::with_selector(
            options_from_labels(labels),
            wheel,
            elimination,
            Duration::from_millis(4),
            Box::new(SeededSelector::new(17)),
            ProgressStore::open(MemoryStorage::new()),
        )
    }

    #[tokio::test]
    async fn test_spin_once_records_progress() {
        LocalSet::new()
            .run_until(async {
                let mut session = session(&["Yes", "No"], false);
                let result = session.spin_once().await.unwrap();
                assert!(["Yes", "No"].contains(&result.winner_label.as_str()));
                assert!(result.total_rotation_degrees >= 1080.0);
                assert!(!session.is_spinning());

                let progress = session.progress();
                assert_eq!(progress.stats().total_spins, 1);
                assert_eq!(progress.history().next().unwrap().winner_label, result.winner_label);
                assert!(progress.is_unlocked("first_spin"));
            })
            .await;
    }

    #[tokio::test]
    async fn test_elimination_runs_down_to_last_option() {
        LocalSet::new()
            .run_until(async {
                let mut session = session(&["A", "B", "C"], true);
                let mut eliminated = Vec::new();
                while session.active_options().len() > 1 {
                    let result = session.spin_once().await.unwrap();
                    let reduced = session.eliminate_winner().unwrap();
                    assert!(!reduced.iter().any(|o| o.label == result.winner_label));
                    eliminated.push(result.winner_label);
                }
                assert_eq!(eliminated.len(), 2);
                assert_eq!(session.active_options().len(), 1);
                assert_eq!(session.progress().stats().total_spins, 2);
            })
            .await;
    }

    #[tokio::test]
    async fn test_cancelled_spin_records_nothing() {
        LocalSet::new()
            .run_until(async {
                let mut session = session(&["A", "B"], false);
                let attempt = tokio::time::timeout(Duration::from_millis(30), session.spin_once()).await;
                assert!(attempt.is_err());
                assert!(session.cancel());
                tokio::time::sleep(Duration::from_millis(200)).await;
                assert_eq!(session.progress().stats().total_spins, 0);
                assert_eq!(session.progress().history_len(), 0);
            })
            .await;
    }
}

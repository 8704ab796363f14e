//! One wheel instance: selection, planning, animation and elimination wired together.

use crate::animator::{SpinAnimator, SpinPhase};
use crate::clock::{Clock, SystemClock};
use crate::elimination::EliminationState;
use crate::error::WheelError;
use crate::rotation::{segment_at, RotationPlanner};
use crate::selector::{OsRngSelector, RandomSelector};
use crate::shared_wheel_game::{SpinRequest, SpinResult, TickEvent, WheelConfig, WheelOption};

/// Outbound notification from a running wheel, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    Tick(TickEvent),
    Settled(SpinResult),
}

/// Returned when a spin is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub duration_ms: u32,
}

#[derive(Debug, Clone)]
struct PendingSpin {
    request: SpinRequest,
    winner_index: usize,
}

pub struct WheelEngine<R: RandomSelector = OsRngSelector, C: Clock = SystemClock> {
    config: WheelConfig,
    selector: R,
    clock: C,
    planner: RotationPlanner,
    animator: SpinAnimator,
    elimination: EliminationState,
    pending: Option<PendingSpin>,
    last_result: Option<SpinResult>,
}

impl WheelEngine<OsRngSelector, SystemClock> {
    pub fn new(options: Vec<WheelOption>, config: WheelConfig) -> Self {
        Self::with_parts(options, config, OsRngSelector, SystemClock)
    }
}

impl<R: RandomSelector, C: Clock> WheelEngine<R, C> {
    pub fn with_parts(options: Vec<WheelOption>, config: WheelConfig, selector: R, clock: C) -> Self {
        Self {
            planner: RotationPlanner::new(config.min_extra_turns, config.max_extra_turns),
            animator: SpinAnimator::new(config.easing),
            elimination: EliminationState::new(options, false),
            pending: None,
            last_result: None,
            config,
            selector,
            clock,
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.animator.phase()
    }

    pub fn is_spinning(&self) -> bool {
        self.animator.is_spinning()
    }

    /// Current rotation; normalised into `[0, 360)` whenever the wheel is at rest.
    pub fn rotation(&self) -> f64 {
        self.animator.rotation()
    }

    pub fn active_options(&self) -> &[WheelOption] {
        self.elimination.options()
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    pub fn set_elimination_mode(&mut self, enabled: bool) {
        self.elimination.set_enabled(enabled);
    }

    /// Replaces the option set. Refused while a spin is in flight.
    pub fn set_options(&mut self, options: Vec<WheelOption>) -> Result<(), WheelError> {
        if self.is_spinning() {
            return Err(WheelError::AlreadySpinning);
        }
        self.elimination.replace(options);
        self.last_result = None;
        Ok(())
    }

    /// Picks a winner and starts animating toward it. An accepted spin
    /// supersedes the previous result, so it can no longer be eliminated.
    pub fn request_spin(&mut self) -> Result<SpinPlan, WheelError> {
        if self.is_spinning() {
            log::debug!("spin request ignored: already spinning");
            return Err(WheelError::AlreadySpinning);
        }
        let request = SpinRequest::new(
            self.elimination.options().to_vec(),
            self.config.min_spin_options,
        )?;
        let count = request.len();
        let winner_index = self.selector.pick(count)?;
        let start_rotation = self.animator.rotation();
        let target_rotation = self
            .planner
            .plan(&mut self.selector, winner_index, count, start_rotation)?;
        debug_assert_eq!(segment_at(target_rotation, count), winner_index);

        self.animator
            .start_spin(target_rotation, self.config.spin_duration_ms, count)?;
        self.last_result = None;
        self.pending = Some(PendingSpin {
            request,
            winner_index,
        });
        Ok(SpinPlan {
            start_rotation,
            target_rotation,
            duration_ms: self.config.spin_duration_ms,
        })
    }

    /// Advances the running spin to frame time `now_ms`, handing every tick
    /// and, on the final frame, the result to `emit`. Returns true once settled.
    pub fn advance_with<F: FnMut(WheelEvent)>(&mut self, now_ms: f64, mut emit: F) -> bool {
        let Some(frame) = self.animator.advance(now_ms) else {
            return false;
        };
        for tick in frame.ticks {
            emit(WheelEvent::Tick(tick));
        }
        if !frame.finished {
            return false;
        }

        let Some(pending) = self.pending.take() else {
            return true;
        };
        let count = pending.request.len();
        let landed = segment_at(frame.rotation, count);
        if landed != pending.winner_index {
            log::warn!("wheel landed on {} but winner was {}", landed, pending.winner_index);
        }
        let winner = &pending.request.options()[pending.winner_index];
        let result = SpinResult {
            winner_index: pending.winner_index,
            winner_label: winner.label.clone(),
            total_rotation_degrees: self.animator.swept_degrees(),
            completed_at: self.clock.now_millis(),
        };
        log::debug!("spin result: '{}' (#{})", result.winner_label, result.winner_index);
        self.last_result = Some(result.clone());
        emit(WheelEvent::Settled(result));
        true
    }

    pub fn advance(&mut self, now_ms: f64) -> Vec<WheelEvent> {
        let mut events = Vec::new();
        self.advance_with(now_ms, |e| events.push(e));
        events
    }

    /// Aborts an in-flight spin. No result is produced for it.
    pub fn cancel(&mut self) -> bool {
        self.pending = None;
        self.animator.cancel()
    }

    /// Removes the last winner from the active set when elimination mode is on.
    /// The returned set is what the next spin will use.
    pub fn eliminate_winner(&mut self) -> Result<Vec<WheelOption>, WheelError> {
        if self.is_spinning() {
            return Err(WheelError::AlreadySpinning);
        }
        let Some(result) = self.last_result.as_ref() else {
            return Err(WheelError::EliminationNoop);
        };
        let reduced = self
            .elimination
            .eliminate(result.winner_index, &result.winner_label)?;
        self.last_result = None;
        Ok(reduced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::selector::SeededSelector;
    use crate::shared_wheel_game::options_from_labels;

    /// Always picks the same index; extra turns fixed at the minimum.
    struct FixedSelector(usize);

    impl RandomSelector for FixedSelector {
        fn pick(&mut self, option_count: usize) -> Result<usize, WheelError> {
            if option_count == 0 {
                return Err(WheelError::InvalidInput("no options".into()));
            }
            Ok(self.0.min(option_count - 1))
        }

        fn extra_turns(&mut self, min: u32, _max: u32) -> u32 {
            min
        }
    }

    fn engine(labels: &[&str], winner: usize) -> WheelEngine<FixedSelector, FixedClock> {
        WheelEngine::with_parts(
            options_from_labels(labels),
            WheelConfig::default(),
            FixedSelector(winner),
            FixedClock::new(1_700_000_000_000),
        )
    }

    fn run_to_end<R: RandomSelector, C: Clock>(engine: &mut WheelEngine<R, C>) -> Vec<WheelEvent> {
        let mut events = Vec::new();
        let mut t = 0.0;
        while engine.is_spinning() {
            events.extend(engine.advance(t));
            t += 16.0;
        }
        events
    }

    fn settled(events: &[WheelEvent]) -> Vec<&SpinResult> {
        events
            .iter()
            .filter_map(|e| match e {
                WheelEvent::Settled(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_yes_no_spin_reports_winner() {
        let mut wheel = engine(&["Yes", "No"], 0);
        let plan = wheel.request_spin().unwrap();
        assert!(plan.target_rotation >= 1080.0);
        let events = run_to_end(&mut wheel);
        let results = settled(&events);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].winner_label, "Yes");
        assert_eq!(results[0].completed_at, 1_700_000_000_000);
        assert!(matches!(events.last(), Some(WheelEvent::Settled(_))));
        assert!((0.0..180.0).contains(&wheel.rotation()));
    }

    #[test]
    fn test_single_option_wheel_when_allowed() {
        let config = WheelConfig {
            min_spin_options: 1,
            ..WheelConfig::default()
        };
        let mut wheel = WheelEngine::with_parts(
            options_from_labels(["Solo"]),
            config,
            SeededSelector::new(3),
            FixedClock::new(0),
        );
        wheel.request_spin().unwrap();
        let events = run_to_end(&mut wheel);
        let result = settled(&events)[0].clone();
        assert_eq!(result.winner_label, "Solo");
        assert!(result.total_rotation_degrees >= 3.0 * 360.0);
    }

    #[test]
    fn test_single_option_rejected_by_default() {
        let mut wheel = WheelEngine::new(options_from_labels(["Solo"]), WheelConfig::default());
        assert!(matches!(wheel.request_spin(), Err(WheelError::InvalidInput(_))));
        assert_eq!(wheel.phase(), SpinPhase::Idle);
    }

    #[test]
    fn test_second_request_while_spinning_is_ignored() {
        let mut wheel = engine(&["A", "B", "C"], 2);
        wheel.request_spin().unwrap();
        wheel.advance(0.0);
        assert_eq!(wheel.request_spin(), Err(WheelError::AlreadySpinning));
        let events = run_to_end(&mut wheel);
        assert_eq!(settled(&events).len(), 1);
        assert_eq!(settled(&events)[0].winner_label, "C");
    }

    #[test]
    fn test_ticks_precede_result_and_match_sweep() {
        let mut wheel = engine(&["A", "B", "C", "D", "E"], 3);
        wheel.request_spin().unwrap();
        let events = run_to_end(&mut wheel);
        let ticks = events.iter().filter(|e| matches!(e, WheelEvent::Tick(_))).count();
        let result = settled(&events)[0];
        let expected = (result.total_rotation_degrees / 72.0).floor() as usize;
        assert_eq!(ticks, expected);
        assert!(matches!(events.last(), Some(WheelEvent::Settled(_))));
    }

    #[test]
    fn test_cancel_produces_no_result() {
        let mut wheel = engine(&["A", "B"], 1);
        wheel.request_spin().unwrap();
        wheel.advance(0.0);
        wheel.advance(500.0);
        assert!(wheel.cancel());
        assert!(wheel.advance(10_000.0).is_empty());
        assert!(wheel.last_result().is_none());
        assert!(wheel.request_spin().is_ok());
    }

    #[test]
    fn test_elimination_shrinks_set() {
        let mut wheel = engine(&["A", "B", "C"], 1);
        wheel.set_elimination_mode(true);
        wheel.request_spin().unwrap();
        run_to_end(&mut wheel);
        let reduced = wheel.eliminate_winner().unwrap();
        let labels: Vec<&str> = reduced.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C"]);
        assert_eq!(wheel.active_options().len(), 2);
        assert_eq!(wheel.eliminate_winner(), Err(WheelError::EliminationNoop));
    }

    #[test]
    fn test_cancelled_follow_up_spin_leaves_nothing_to_eliminate() {
        let mut wheel = engine(&["A", "B", "C"], 2);
        wheel.set_elimination_mode(true);
        wheel.request_spin().unwrap();
        let events = run_to_end(&mut wheel);
        assert_eq!(settled(&events)[0].winner_label, "C");

        wheel.request_spin().unwrap();
        assert!(wheel.last_result().is_none());
        wheel.advance(0.0);
        assert!(wheel.cancel());
        assert_eq!(wheel.eliminate_winner(), Err(WheelError::EliminationNoop));
        assert_eq!(wheel.active_options().len(), 3);
    }

    #[test]
    fn test_elimination_off_keeps_set() {
        let mut wheel = engine(&["A", "B", "C"], 0);
        wheel.request_spin().unwrap();
        run_to_end(&mut wheel);
        assert_eq!(wheel.eliminate_winner(), Err(WheelError::EliminationNoop));
        assert_eq!(wheel.active_options().len(), 3);
    }

    #[test]
    fn test_eliminating_until_one_left() {
        let config = WheelConfig {
            min_spin_options: 1,
            spin_duration_ms: 0,
            ..WheelConfig::default()
        };
        let mut wheel = WheelEngine::with_parts(
            options_from_labels(["A", "B", "C", "D"]),
            config,
            SeededSelector::new(11),
            FixedClock::new(0),
        );
        wheel.set_elimination_mode(true);
        for _ in 0..8 {
            wheel.request_spin().unwrap();
            run_to_end(&mut wheel);
            let _ = wheel.eliminate_winner();
            assert!(!wheel.active_options().is_empty());
        }
        assert_eq!(wheel.active_options().len(), 1);
    }

    #[test]
    fn test_set_options_refused_mid_spin() {
        let mut wheel = engine(&["A", "B"], 0);
        wheel.request_spin().unwrap();
        assert_eq!(
            wheel.set_options(options_from_labels(["X", "Y"])),
            Err(WheelError::AlreadySpinning)
        );
    }
}

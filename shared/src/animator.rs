use crate::easing::Easing;
use crate::error::WheelError;
use crate::rotation::normalize_rotation;
use crate::shared_wheel_game::TickEvent;
use crate::tick::TickSynchronizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Settled,
}

/// What one animation frame produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Absolute (unwrapped) rotation shown this frame.
    pub rotation: f64,
    pub ticks: Vec<TickEvent>,
    pub finished: bool,
}

/// Drives a single rotation value toward a target over a fixed duration.
///
/// The animator has no timer of its own: the host calls [`SpinAnimator::advance`]
/// from whatever frame clock it has, and every sample is passed through the
/// tick synchronizer before the frame is returned.
#[derive(Debug, Clone)]
pub struct SpinAnimator {
    phase: SpinPhase,
    rotation: f64,
    easing: Easing,
    start_rotation: f64,
    target_rotation: f64,
    duration_ms: f64,
    started_at: Option<f64>,
    swept: f64,
    ticks: TickSynchronizer,
}

impl SpinAnimator {
    pub fn new(easing: Easing) -> Self {
        Self {
            phase: SpinPhase::Idle,
            rotation: 0.0,
            easing,
            start_rotation: 0.0,
            target_rotation: 0.0,
            duration_ms: 0.0,
            started_at: None,
            swept: 0.0,
            ticks: TickSynchronizer::new(1),
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn target_rotation(&self) -> f64 {
        self.target_rotation
    }

    /// Degrees covered by the most recent spin.
    pub fn swept_degrees(&self) -> f64 {
        self.swept
    }

    pub fn start_spin(
        &mut self,
        target_rotation: f64,
        duration_ms: u32,
        option_count: usize,
    ) -> Result<(), WheelError> {
        if self.is_spinning() {
            return Err(WheelError::AlreadySpinning);
        }
        if !target_rotation.is_finite() || target_rotation < self.rotation {
            return Err(WheelError::InvalidInput(format!(
                "target rotation {} is behind current rotation {}",
                target_rotation, self.rotation
            )));
        }

        self.ticks = TickSynchronizer::new(option_count);
        self.ticks.reset(self.rotation);
        self.start_rotation = self.rotation;
        self.target_rotation = target_rotation;
        self.duration_ms = duration_ms as f64;
        self.started_at = None;
        self.swept = 0.0;
        self.phase = SpinPhase::Spinning;
        log::debug!(
            "spin started: {:.1}° -> {:.1}° over {}ms",
            self.start_rotation,
            target_rotation,
            duration_ms
        );
        Ok(())
    }

    /// Samples the animation at frame time `now_ms`. The first frame after
    /// `start_spin` fixes the start time. Returns `None` unless spinning.
    pub fn advance(&mut self, now_ms: f64) -> Option<Frame> {
        if !self.is_spinning() {
            return None;
        }
        let started = *self.started_at.get_or_insert(now_ms);
        let elapsed = (now_ms - started).max(0.0);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).min(1.0)
        };
        let finished = progress >= 1.0;

        let span = self.target_rotation - self.start_rotation;
        let rotation = if finished {
            self.target_rotation
        } else {
            (self.start_rotation + span * self.easing.apply(progress))
                .clamp(self.rotation, self.target_rotation)
        };
        self.rotation = rotation;
        let ticks = self.ticks.observe(rotation);

        if finished {
            self.swept = span;
            self.rotation = normalize_rotation(rotation);
            self.phase = SpinPhase::Settled;
            log::debug!("spin settled at {:.1}° ({} ticks in last frame)", self.rotation, ticks.len());
        }

        Some(Frame {
            rotation,
            ticks,
            finished,
        })
    }

    /// Stops an in-flight spin without finishing it. Returns whether a spin was aborted.
    pub fn cancel(&mut self) -> bool {
        if !self.is_spinning() {
            return false;
        }
        self.rotation = normalize_rotation(self.rotation);
        self.started_at = None;
        self.phase = SpinPhase::Idle;
        log::debug!("spin cancelled at {:.1}°", self.rotation);
        true
    }
}

impl Default for SpinAnimator {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_second_spin_while_spinning() {
        let mut animator = SpinAnimator::default();
        animator.start_spin(1200.0, 1000, 4).unwrap();
        assert_eq!(animator.start_spin(2000.0, 1000, 4), Err(WheelError::AlreadySpinning));
        assert_eq!(animator.target_rotation(), 1200.0);
    }

    #[test]
    fn test_runs_to_target_and_normalizes() {
        let mut animator = SpinAnimator::default();
        animator.start_spin(1125.0, 1000, 8).unwrap();
        let mut last = 0.0;
        let mut finished = false;
        let mut t = 0.0;
        while !finished {
            let frame = animator.advance(t).unwrap();
            assert!(frame.rotation >= last);
            last = frame.rotation;
            finished = frame.finished;
            t += 16.0;
        }
        assert_eq!(last, 1125.0);
        assert_eq!(animator.phase(), SpinPhase::Settled);
        assert_eq!(animator.rotation(), 45.0);
        assert_eq!(animator.swept_degrees(), 1125.0);
        assert!(animator.advance(t).is_none());
    }

    #[test]
    fn test_decelerates_toward_the_end() {
        let mut animator = SpinAnimator::default();
        animator.start_spin(3600.0, 1000, 2).unwrap();
        animator.advance(0.0);
        let early = animator.advance(100.0).unwrap().rotation;
        let before_end = animator.advance(900.0).unwrap().rotation;
        let end = animator.advance(1000.0).unwrap().rotation;
        assert!(early > end - before_end);
    }

    #[test]
    fn test_ticks_reported_with_frames() {
        let mut animator = SpinAnimator::new(Easing::Linear);
        animator.start_spin(720.0 + 45.0, 100, 4).unwrap();
        let mut total = 0;
        for t in [0.0, 25.0, 50.0, 75.0, 100.0] {
            total += animator.advance(t).unwrap().ticks.len();
        }
        // 765° over 90° wedges starting in wedge 0
        assert_eq!(total, 8);
    }

    #[test]
    fn test_cancel_stops_without_settling() {
        let mut animator = SpinAnimator::default();
        animator.start_spin(1500.0, 1000, 3).unwrap();
        animator.advance(0.0);
        animator.advance(300.0);
        assert!(animator.cancel());
        assert_eq!(animator.phase(), SpinPhase::Idle);
        assert!(animator.rotation() < 360.0);
        assert!(animator.advance(2000.0).is_none());
        assert!(!animator.cancel());
    }

    #[test]
    fn test_next_spin_after_settled() {
        let mut animator = SpinAnimator::default();
        animator.start_spin(400.0, 0, 2).unwrap();
        assert!(animator.advance(5.0).unwrap().finished);
        assert!(animator.start_spin(animator.rotation() + 1080.0, 500, 2).is_ok());
    }

    #[test]
    fn test_rejects_target_behind_rotation() {
        let mut animator = SpinAnimator::default();
        assert!(matches!(animator.start_spin(-10.0, 100, 2), Err(WheelError::InvalidInput(_))));
        assert_eq!(animator.phase(), SpinPhase::Idle);
    }
}

//! Wedge geometry and target-angle planning.
//!
//! The pointer sits at 0°. Wedge `i` of `n` covers `[i * w, (i + 1) * w)` with
//! `w = 360 / n`, measured on the wheel's rotation normalised into `[0, 360)`.
//! So the option under the pointer for a rotation `r` is
//! `floor(rem_euclid(r, 360) / w)`.

use crate::constants::FULL_TURN_DEGREES;
use crate::error::WheelError;
use crate::selector::RandomSelector;

pub fn wedge_size(option_count: usize) -> f64 {
    FULL_TURN_DEGREES / option_count as f64
}

pub fn normalize_rotation(rotation: f64) -> f64 {
    let r = rotation.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= FULL_TURN_DEGREES { 0.0 } else { r }
}

/// Index of the option currently under the pointer.
pub fn segment_at(rotation: f64, option_count: usize) -> usize {
    if option_count == 0 {
        return 0;
    }
    let index = (normalize_rotation(rotation) / wedge_size(option_count)).floor() as usize;
    index.min(option_count - 1)
}

/// Angle, in `[0, 360)`, at which the winner's wedge centre sits under the pointer.
pub fn wedge_center(winner_index: usize, option_count: usize) -> f64 {
    (winner_index as f64 + 0.5) * wedge_size(option_count)
}

/// Absolute target rotation that lands the pointer on the centre of
/// `winner_index`, at least `extra_turns` full turns past `current_rotation`.
pub fn plan_rotation(
    winner_index: usize,
    option_count: usize,
    current_rotation: f64,
    extra_turns: u32,
) -> Result<f64, WheelError> {
    if option_count == 0 || winner_index >= option_count {
        return Err(WheelError::InvalidInput(format!(
            "winner {} out of range for {} options",
            winner_index, option_count
        )));
    }
    let center = wedge_center(winner_index, option_count);
    let adjustment = (center - normalize_rotation(current_rotation)).rem_euclid(FULL_TURN_DEGREES);
    Ok(current_rotation + extra_turns as f64 * FULL_TURN_DEGREES + adjustment)
}

/// Plans targets with a randomised number of extra turns.
#[derive(Debug, Clone, Copy)]
pub struct RotationPlanner {
    pub min_extra_turns: u32,
    pub max_extra_turns: u32,
}

impl RotationPlanner {
    pub fn new(min_extra_turns: u32, max_extra_turns: u32) -> Self {
        Self {
            min_extra_turns,
            max_extra_turns: max_extra_turns.max(min_extra_turns),
        }
    }

    pub fn plan<R: RandomSelector + ?Sized>(
        &self,
        rng: &mut R,
        winner_index: usize,
        option_count: usize,
        current_rotation: f64,
    ) -> Result<f64, WheelError> {
        let turns = rng.extra_turns(self.min_extra_turns, self.max_extra_turns);
        plan_rotation(winner_index, option_count, current_rotation, turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SeededSelector;

    #[test]
    fn test_yes_no_lands_in_first_half() {
        let target = plan_rotation(0, 2, 0.0, 3).unwrap();
        assert!(target >= 1080.0);
        let normalized = normalize_rotation(target);
        assert!((0.0..180.0).contains(&normalized));
        assert_eq!(segment_at(target, 2), 0);
    }

    #[test]
    fn test_landing_for_every_winner() {
        let mut rng = SeededSelector::new(9);
        let planner = RotationPlanner::new(3, 8);
        for count in 1..=24usize {
            for winner in 0..count {
                for start in [0.0, 17.5, 359.9, 720.0 + 45.0] {
                    let target = planner.plan(&mut rng, winner, count, start).unwrap();
                    assert_eq!(segment_at(target, count), winner, "count {count} winner {winner} start {start}");
                    assert!(target - start >= 3.0 * FULL_TURN_DEGREES);
                }
            }
        }
    }

    #[test]
    fn test_target_avoids_wedge_boundaries() {
        let target = plan_rotation(2, 5, 0.0, 3).unwrap();
        let offset = normalize_rotation(target) % wedge_size(5);
        assert!((offset - wedge_size(5) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_option_still_turns() {
        let target = plan_rotation(0, 1, 180.0, 3).unwrap();
        assert!(target - 180.0 >= 3.0 * FULL_TURN_DEGREES);
        assert_eq!(segment_at(target, 1), 0);
    }

    #[test]
    fn test_out_of_range_winner() {
        assert!(plan_rotation(2, 2, 0.0, 3).is_err());
        assert!(plan_rotation(0, 0, 0.0, 3).is_err());
    }

    #[test]
    fn test_segment_at_wraps() {
        assert_eq!(segment_at(-10.0, 4), 3);
        assert_eq!(segment_at(360.0 * 5.0 + 91.0, 4), 1);
    }
}

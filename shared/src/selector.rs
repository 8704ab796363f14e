use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::error::WheelError;

/// Picks the winning wedge for a spin.
pub trait RandomSelector {
    /// Returns an index in `0..option_count`, uniformly distributed.
    fn pick(&mut self, option_count: usize) -> Result<usize, WheelError>;

    /// Number of whole extra turns in `min..=max`, used only for visual effect.
    fn extra_turns(&mut self, min: u32, max: u32) -> u32;
}

fn check_count(option_count: usize) -> Result<(), WheelError> {
    if option_count == 0 {
        return Err(WheelError::InvalidInput(
            "cannot pick a winner from zero options".to_string(),
        ));
    }
    Ok(())
}

/// Selector backed by the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRngSelector;

impl RandomSelector for OsRngSelector {
    fn pick(&mut self, option_count: usize) -> Result<usize, WheelError> {
        check_count(option_count)?;
        Ok(OsRng.gen_range(0..option_count))
    }

    fn extra_turns(&mut self, min: u32, max: u32) -> u32 {
        OsRng.gen_range(min..=max.max(min))
    }
}

/// Reproducible selector for tests and replays.
#[derive(Debug, Clone)]
pub struct SeededSelector {
    rng: StdRng,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSelector for SeededSelector {
    fn pick(&mut self, option_count: usize) -> Result<usize, WheelError> {
        check_count(option_count)?;
        Ok(self.rng.gen_range(0..option_count))
    }

    fn extra_turns(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max.max(min))
    }
}

impl<T: RandomSelector + ?Sized> RandomSelector for Box<T> {
    fn pick(&mut self, option_count: usize) -> Result<usize, WheelError> {
        (**self).pick(option_count)
    }

    fn extra_turns(&mut self, min: u32, max: u32) -> u32 {
        (**self).extra_turns(min, max)
    }
}

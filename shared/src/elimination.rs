use crate::error::WheelError;
use crate::shared_wheel_game::WheelOption;

/// Active option set, shrinking by one winner per elimination when enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct EliminationState {
    options: Vec<WheelOption>,
    enabled: bool,
}

impl EliminationState {
    pub fn new(options: Vec<WheelOption>, enabled: bool) -> Self {
        Self { options, enabled }
    }

    pub fn options(&self) -> &[WheelOption] {
        &self.options
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn replace(&mut self, options: Vec<WheelOption>) {
        self.options = options;
    }

    /// Removes the winner and returns the reduced set for the next spin.
    ///
    /// The slot at `winner_index` is removed when its label still matches;
    /// otherwise the first option carrying `winner_label` is removed. Refused
    /// with `EliminationNoop` when the mode is off, the label is gone, or only
    /// one option is left.
    pub fn eliminate(
        &mut self,
        winner_index: usize,
        winner_label: &str,
    ) -> Result<Vec<WheelOption>, WheelError> {
        if !self.enabled {
            log::debug!("elimination ignored: mode is off");
            return Err(WheelError::EliminationNoop);
        }
        if self.options.len() <= 1 {
            log::debug!("elimination ignored: {} option(s) left", self.options.len());
            return Err(WheelError::EliminationNoop);
        }

        let position = match self.options.get(winner_index) {
            Some(option) if option.label == winner_label => Some(winner_index),
            _ => self.options.iter().position(|o| o.label == winner_label),
        };
        let Some(position) = position else {
            log::debug!("elimination ignored: '{}' is not on the wheel", winner_label);
            return Err(WheelError::EliminationNoop);
        };

        let removed = self.options.remove(position);
        log::debug!("eliminated '{}', {} option(s) remain", removed.label, self.options.len());
        Ok(self.options.clone())
    }
}

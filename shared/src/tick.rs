use crate::rotation::wedge_size;
use crate::shared_wheel_game::TickEvent;

/// Turns a stream of rotation samples into wedge-crossing ticks.
///
/// Crossings are tracked on the unwrapped rotation, so multi-turn spins never
/// lose or repeat a tick at the 360° seam. A frame that sweeps past several
/// wedges yields one tick per wedge, in crossing order.
#[derive(Debug, Clone)]
pub struct TickSynchronizer {
    option_count: usize,
    wedge: f64,
    last_wedge: Option<i64>,
}

impl TickSynchronizer {
    pub fn new(option_count: usize) -> Self {
        let option_count = option_count.max(1);
        Self {
            option_count,
            wedge: wedge_size(option_count),
            last_wedge: None,
        }
    }

    /// Starts a new spin. The wedge under the pointer at `start_rotation` does not tick.
    pub fn reset(&mut self, start_rotation: f64) {
        self.last_wedge = Some(self.unwrapped_wedge(start_rotation));
    }

    fn unwrapped_wedge(&self, rotation: f64) -> i64 {
        (rotation / self.wedge).floor() as i64
    }

    /// Feeds one sample, calling `emit` for each wedge entered since the last one.
    /// Returns the number of ticks emitted.
    pub fn observe_with<F: FnMut(TickEvent)>(&mut self, rotation: f64, mut emit: F) -> usize {
        let current = self.unwrapped_wedge(rotation);
        let last = match self.last_wedge {
            Some(last) => last,
            None => {
                self.last_wedge = Some(current);
                return 0;
            }
        };
        if current <= last {
            return 0;
        }
        for wedge in (last + 1)..=current {
            emit(TickEvent {
                segment_index: wedge.rem_euclid(self.option_count as i64) as usize,
            });
        }
        self.last_wedge = Some(current);
        (current - last) as usize
    }

    pub fn observe(&mut self, rotation: f64) -> Vec<TickEvent> {
        let mut ticks = Vec::new();
        self.observe_with(rotation, |t| ticks.push(t));
        ticks
    }
}
